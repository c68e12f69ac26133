pub mod config;
pub mod entity;
pub mod interactor;
pub mod presenter;
pub mod solana;
pub mod utils;
pub mod view;

// Re-export commonly used items
pub use config::Config;
pub use entity::*;
pub use interactor::*;
pub use presenter::*;
pub use solana::*;
pub use utils::*;
pub use view::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
