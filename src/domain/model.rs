use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The draft being edited. Mutated one field at a time and held in memory
/// only; a cache adapter may mirror it between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioDraft {
    pub name: String,
    pub role: String,
    pub about: String,
    pub email: String,
    pub skills: Vec<String>,
    pub avatar: Option<AvatarSource>,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub link: Option<String>,
    pub github: Option<String>,
}

/// Where the avatar comes from: a remote reference string or a locally
/// selected binary blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AvatarSource {
    Remote(String),
    Upload(AvatarFile),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Per-field schema errors. An absent field key means the field is valid;
/// an empty report means the whole draft is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    errors: HashMap<String, String>,
}

impl ValidationReport {
    pub fn add(&mut self, field: &str, message: &str) {
        self.errors.insert(field.to_string(), message.to_string());
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Normal,
    Destructive,
}

/// A transient, dismissible message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn normal(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            kind: NotificationKind::Normal,
        }
    }

    pub fn destructive(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            kind: NotificationKind::Destructive,
        }
    }
}

/// What a successful deployment hands back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployReceipt {
    pub repo_url: String,
    pub deployment_url: String,
    pub deployed_at: DateTime<Utc>,
}
