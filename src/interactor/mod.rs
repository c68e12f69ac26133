pub mod swap_interactor;

pub use swap_interactor::{SwapInteractor, SwapInteractorImpl};
