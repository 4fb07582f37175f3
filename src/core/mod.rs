pub mod avatar;
pub mod form;
pub mod preview;

pub use crate::domain::model::{
    AvatarFile, AvatarSource, DeployReceipt, Notification, PortfolioDraft, ValidationReport,
};
pub use crate::domain::ports::{Deployer, DraftCache, FilePicker, Notifier};
pub use crate::utils::error::Result;
