use crate::entity::SwapRequest;
use crate::interactor::swap_interactor::SwapInteractor;
use crate::view::swap_view::SwapView;
use anyhow::Result;
use async_trait::async_trait;
use log::{error, info};
use std::sync::Arc;

#[async_trait]
pub trait SwapPresenter: Send + Sync {
    /// Runs the whole swap and reports progress. Pipeline failures are shown
    /// to the user, not returned.
    async fn run_swap(&self, secret_base64: &str, request: &SwapRequest) -> Result<()>;
}

pub struct SwapPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> SwapPresenterImpl<I, V>
where
    I: SwapInteractor,
    V: SwapView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> SwapPresenter for SwapPresenterImpl<I, V>
where
    I: SwapInteractor + Send + Sync,
    V: SwapView + Send + Sync,
{
    async fn run_swap(&self, secret_base64: &str, request: &SwapRequest) -> Result<()> {
        let submitted = match self.interactor.execute_swap(secret_base64, request).await {
            Ok(submitted) => submitted,
            Err(e) => {
                error!("Swap failed: {}", e);
                self.view.display_swap_error(&e).await?;
                return Ok(());
            }
        };

        info!("Swap submitted: {}", submitted.signature);
        self.view.display_submitted(&submitted).await?;
        self.view.display_waiting().await?;

        let status = self.interactor.await_confirmation(&submitted.signature).await;
        self.view.display_confirmation(status.as_ref()).await?;

        Ok(())
    }
}
