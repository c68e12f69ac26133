mod block_reference;
mod priority_fee;
mod swap_error;
mod swap_request;
mod swap_result;

pub use block_reference::BlockReference;
pub use priority_fee::{median, PriorityFee};
pub use swap_error::SwapError;
pub use swap_request::SwapRequest;
pub use swap_result::SubmittedSwap;
