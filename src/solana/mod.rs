pub mod client;
pub mod confirmation;
pub mod jupiter;
pub mod transaction;
pub mod wallet;

pub use client::{create_solana_client, rpc_connector, LedgerClient, LedgerConnector};
pub use confirmation::{await_confirmation, DEFAULT_CONFIRMATION_TIMEOUT, DEFAULT_POLL_INTERVAL};
pub use transaction::{augment_and_sign, deserialize_transaction, serialize_transaction};
pub use wallet::{decode_identity, keypair_to_base64, parse_pubkey};
