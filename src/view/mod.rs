pub mod swap_view;

pub use swap_view::{ConsoleSwapView, SwapView};
