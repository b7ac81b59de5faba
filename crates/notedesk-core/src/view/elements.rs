use notedesk_protocol::{ResourceId, ResourceKind, Visibility};
use serde::Serialize;

/// A list entry or card bound to one resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewElement {
    pub kind: ResourceKind,
    pub id: ResourceId,
    /// 1.0 is fully visible. Lowered while a removal fade runs.
    pub opacity: f32,
}

impl ViewElement {
    pub fn new(kind: ResourceKind, id: ResourceId) -> Self {
        Self {
            kind,
            id,
            opacity: 1.0,
        }
    }

    pub fn matches(&self, kind: ResourceKind, id: &ResourceId) -> bool {
        self.kind == kind && &self.id == id
    }
}

/// Share/unshare button for a note.
///
/// The button stores only the note's current visibility. Its label, class
/// and the action it performs are derived from that state, so updating the
/// state is enough to flip the toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareButton {
    pub note_id: ResourceId,
    pub visibility: Visibility,
}

impl ShareButton {
    pub fn new(note_id: ResourceId, visibility: Visibility) -> Self {
        Self {
            note_id,
            visibility,
        }
    }

    pub fn label(&self) -> &'static str {
        match self.visibility {
            Visibility::Public => "Unshare",
            Visibility::Private => "Share",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.visibility {
            Visibility::Public => "unshare-btn",
            Visibility::Private => "share-btn",
        }
    }

    /// Visibility requested when this button is activated.
    pub fn next_action(&self) -> Visibility {
        self.visibility.toggled()
    }
}

pub type BannerId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerLevel {
    Success,
    Info,
    Warning,
    Danger,
}

impl BannerLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BannerLevel::Success => "success",
            BannerLevel::Info => "info",
            BannerLevel::Warning => "warning",
            BannerLevel::Danger => "danger",
        }
    }
}

/// Where a banner came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerOrigin {
    /// Rendered with the page, before any user action.
    Flash,
    /// Inserted by the dispatcher after a confirmed mutation.
    Notification,
}

/// Dismissible message shown at the top of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub id: BannerId,
    pub level: BannerLevel,
    pub text: String,
    pub origin: BannerOrigin,
}

impl Banner {
    pub fn css_class(&self) -> String {
        format!(
            "alert alert-{} alert-dismissible fade show",
            self.level.as_str()
        )
    }
}
