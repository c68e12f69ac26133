use solana_sdk::hash::Hash;

/// Latest ledger checkpoint bounding transaction validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockReference {
    pub blockhash: Hash,
    pub last_valid_block_height: u64,
}
