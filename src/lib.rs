pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::ForgeConfig;

pub use crate::core::avatar::{AvatarManager, PreviewStore};
pub use crate::core::form::{PortfolioForm, SubmitOutcome};
pub use crate::core::preview::{render_preview, PreviewView, ResolvedAvatar};
pub use crate::domain::model::{
    AvatarFile, AvatarSource, DeployReceipt, Notification, NotificationKind, PortfolioDraft,
    ValidationReport,
};
pub use crate::utils::error::{ForgeError, Result};
