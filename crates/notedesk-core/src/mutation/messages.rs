//! User-facing text for alerts, prompts and banners.

use notedesk_protocol::ResourceKind;

use super::types::Operation;

pub const SHARE_UPDATED: &str = "Note sharing updated successfully!";

pub fn missing_identifier(kind: ResourceKind) -> String {
    format!("Error: Could not find {} ID", kind)
}

/// Shown after `Error: ` when the server rejects without a message.
pub fn failure_fallback(operation: Operation) -> &'static str {
    match operation {
        Operation::Delete(ResourceKind::Note) => "Failed to delete note",
        Operation::Delete(ResourceKind::Student) => "Failed to delete student profile",
        Operation::Delete(ResourceKind::Teacher) => "Failed to delete teacher profile",
        Operation::ShareToggle => "Failed to update share status",
    }
}

pub fn network_error(operation: Operation) -> &'static str {
    match operation {
        Operation::Delete(_) => "Network error - please try again",
        Operation::ShareToggle => "Network error - please check console for details",
    }
}

pub fn confirmation_prompt(kind: ResourceKind) -> String {
    if kind.is_profile() {
        format!(
            "Are you sure you want to delete this {} profile? This action cannot be undone.",
            kind
        )
    } else {
        format!(
            "Are you sure you want to delete this {}? This action cannot be undone.",
            kind
        )
    }
}

/// Banner text after a confirmed removal. Notes disappear without one.
pub fn deletion_success(kind: ResourceKind) -> Option<&'static str> {
    match kind {
        ResourceKind::Note => None,
        ResourceKind::Student => Some("Student profile deleted successfully!"),
        ResourceKind::Teacher => Some("Teacher profile deleted successfully!"),
    }
}
