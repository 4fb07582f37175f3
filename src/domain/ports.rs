use crate::domain::model::{AvatarFile, DeployReceipt, Notification, PortfolioDraft};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The deployment sequence. One asynchronous unit of work with exactly two
/// terminal outcomes; no retries or cancellation.
#[async_trait]
pub trait Deployer: Send + Sync {
    async fn deploy(&self, draft: &PortfolioDraft) -> Result<DeployReceipt>;
}

#[async_trait]
impl<D: Deployer + ?Sized> Deployer for Box<D> {
    async fn deploy(&self, draft: &PortfolioDraft) -> Result<DeployReceipt> {
        (**self).deploy(draft).await
    }
}

pub trait Notifier: Send {
    fn notify(&mut self, notification: Notification);
}

/// Supplies one binary image blob per user interaction. Returning `None`
/// models a cancelled picker dialog.
pub trait FilePicker: Send {
    fn pick(&mut self) -> Option<AvatarFile>;

    /// Clears the picker so the same file can be selected again.
    fn reset(&mut self);
}

/// Optional mirror of the in-memory draft. Failures are swallowed by
/// implementations; callers never see a cache error.
pub trait DraftCache: Send + Sync {
    fn set(&self, key: &str, draft: &PortfolioDraft);
    fn get(&self, key: &str) -> Option<PortfolioDraft>;
    fn clear(&self, key: &str);
}
