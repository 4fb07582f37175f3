use crate::core::avatar::AvatarManager;
use crate::domain::model::{AvatarSource, PortfolioDraft};

pub const NAME_PLACEHOLDER: &str = "Your Name";
pub const ROLE_PLACEHOLDER: &str = "Your Role";
pub const ABOUT_PLACEHOLDER: &str = "Tell visitors a little about yourself.";
pub const EMAIL_PLACEHOLDER: &str = "you@example.com";

#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedAvatar {
    /// A remote reference, used verbatim.
    Remote(String),
    /// A live local preview: its URI plus the displayable bytes.
    Local { uri: String, bytes: Vec<u8> },
}

/// Read-only projection of the current draft for display.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewView {
    pub name: String,
    pub role: String,
    pub about: String,
    pub email: String,
    pub skills: Vec<String>,
    pub avatar: Option<ResolvedAvatar>,
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// Projects the draft into a displayable view, substituting placeholder text
/// for empty fields. An uploaded avatar resolves through the manager's live
/// preview handle; without a manager (or after removal) it shows nothing.
pub fn render_preview(draft: &PortfolioDraft, avatar: Option<&AvatarManager>) -> PreviewView {
    let resolved = match (&draft.avatar, avatar) {
        (Some(AvatarSource::Remote(url)), _) => Some(ResolvedAvatar::Remote(url.clone())),
        (Some(AvatarSource::Upload(_)), Some(manager)) => manager
            .resolve_preview()
            .map(|(uri, bytes)| ResolvedAvatar::Local { uri, bytes }),
        (Some(AvatarSource::Upload(file)), None) => {
            tracing::debug!("no live preview for uploaded avatar {}", file.name);
            None
        }
        (None, _) => None,
    };

    PreviewView {
        name: or_placeholder(&draft.name, NAME_PLACEHOLDER),
        role: or_placeholder(&draft.role, ROLE_PLACEHOLDER),
        about: or_placeholder(&draft.about, ABOUT_PLACEHOLDER),
        email: or_placeholder(&draft.email, EMAIL_PLACEHOLDER),
        skills: draft.skills.clone(),
        avatar: resolved,
    }
}
