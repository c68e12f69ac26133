use crate::entity::SwapError;
use log::debug;
use solana_compute_budget_interface::{self as compute_budget, ComputeBudgetInstruction};
use solana_sdk::{
    instruction::CompiledInstruction,
    message::{MessageHeader, VersionedMessage},
    pubkey::Pubkey,
    signature::Keypair,
    transaction::VersionedTransaction,
};

/// Instruction tag of `ComputeBudgetInstruction::SetComputeUnitPrice`
const SET_COMPUTE_UNIT_PRICE_TAG: u8 = 3;

/// Account indexes are a single byte, static and loaded keys combined
const MAX_ACCOUNT_KEYS: usize = 256;

/// Deserialize a wire-format transaction envelope
pub fn deserialize_transaction(bytes: &[u8]) -> Result<VersionedTransaction, SwapError> {
    bincode::deserialize(bytes)
        .map_err(|e| SwapError::SigningError(format!("Failed to deserialize transaction: {}", e)))
}

/// Serialize a transaction into its wire format
pub fn serialize_transaction(transaction: &VersionedTransaction) -> Result<Vec<u8>, SwapError> {
    bincode::serialize(transaction)
        .map_err(|e| SwapError::SigningError(format!("Failed to serialize transaction: {}", e)))
}

/// Prepends a compute unit price instruction to the unsigned transaction and
/// signs the resulting message with `keypair`.
pub fn augment_and_sign(
    unsigned_transaction: &[u8],
    compute_unit_price: u64,
    keypair: &Keypair,
) -> Result<VersionedTransaction, SwapError> {
    let unsigned = deserialize_transaction(unsigned_transaction)?;
    debug!("Transaction deserialized successfully");

    let mut message = unsigned.message;
    prepend_compute_unit_price(&mut message, compute_unit_price)?;

    let signed = VersionedTransaction::try_new(message, &[keypair])
        .map_err(|e| SwapError::SigningError(format!("Failed to sign transaction: {}", e)))?;
    debug!("Transaction signed successfully");

    Ok(signed)
}

/// Inserts `SetComputeUnitPrice(micro_lamports)` as the first instruction.
///
/// Price instructions already present are dropped, since the runtime rejects
/// a transaction carrying two of them.
pub fn prepend_compute_unit_price(
    message: &mut VersionedMessage,
    micro_lamports: u64,
) -> Result<(), SwapError> {
    let loaded_keys = match message {
        VersionedMessage::Legacy(_) => 0,
        VersionedMessage::V0(m) => m
            .address_table_lookups
            .iter()
            .map(|lookup| lookup.writable_indexes.len() + lookup.readonly_indexes.len())
            .sum(),
    };

    let (header, account_keys, instructions) = match message {
        VersionedMessage::Legacy(m) => (&mut m.header, &mut m.account_keys, &mut m.instructions),
        VersionedMessage::V0(m) => (&mut m.header, &mut m.account_keys, &mut m.instructions),
    };

    let program_id_index = ensure_readonly_static_key(
        header,
        account_keys,
        instructions,
        loaded_keys,
        &compute_budget::id(),
    )?;

    instructions.retain(|ix| {
        !(ix.program_id_index == program_id_index
            && ix.data.first() == Some(&SET_COMPUTE_UNIT_PRICE_TAG))
    });

    let instruction = ComputeBudgetInstruction::set_compute_unit_price(micro_lamports);
    instructions.insert(
        0,
        CompiledInstruction {
            program_id_index,
            accounts: vec![],
            data: instruction.data,
        },
    );

    Ok(())
}

/// Returns the static index of `key`, appending it as a read-only unsigned
/// account when missing. Indexes that pointed past the old static keys refer
/// to lookup-table addresses and move up by one.
fn ensure_readonly_static_key(
    header: &mut MessageHeader,
    account_keys: &mut Vec<Pubkey>,
    instructions: &mut [CompiledInstruction],
    loaded_keys: usize,
    key: &Pubkey,
) -> Result<u8, SwapError> {
    if let Some(index) = account_keys.iter().position(|k| k == key) {
        return u8::try_from(index)
            .map_err(|_| SwapError::SigningError(format!("Account index {} out of range", index)));
    }

    let static_keys = account_keys.len();
    if static_keys + loaded_keys + 1 > MAX_ACCOUNT_KEYS {
        return Err(SwapError::SigningError(
            "Transaction has no room for the compute budget program".to_string(),
        ));
    }

    let new_index = static_keys as u8;
    header.num_readonly_unsigned_accounts = header
        .num_readonly_unsigned_accounts
        .checked_add(1)
        .ok_or_else(|| SwapError::SigningError("Too many read-only accounts".to_string()))?;
    account_keys.push(*key);

    for ix in instructions.iter_mut() {
        if ix.program_id_index >= new_index {
            ix.program_id_index += 1;
        }
        for account in ix.accounts.iter_mut() {
            if *account >= new_index {
                *account += 1;
            }
        }
    }

    Ok(new_index)
}
