//! Wake-up service used by the cycler between steps.

use async_trait::async_trait;
use std::time::Duration;

/// Async sleep capability. Cancellation is layered on top by the caller
/// racing `sleep` against its stop signal.
#[async_trait]
pub trait Timer: Send + Sync {
    async fn sleep(&self, delay: Duration);
}

/// Timer backed by the tokio runtime clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

#[async_trait]
impl Timer for TokioTimer {
    async fn sleep(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}
