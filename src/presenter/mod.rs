pub mod swap_presenter;

pub use swap_presenter::{SwapPresenter, SwapPresenterImpl};
