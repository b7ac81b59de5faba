use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::types::{ResourceId, ResourceKind, Visibility};

/// A single mutating request sent to the notes server.
///
/// Serializes to the endpoint's JSON body, e.g. `{"noteId":"42"}` or
/// `{"noteId":"7","public":true}`. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationRequest {
    Delete {
        kind: ResourceKind,
        id: ResourceId,
    },
    ToggleShare {
        note_id: ResourceId,
        visibility: Visibility,
    },
}

impl MutationRequest {
    pub fn delete(kind: ResourceKind, id: ResourceId) -> Self {
        MutationRequest::Delete { kind, id }
    }

    pub fn toggle_share(note_id: ResourceId, visibility: Visibility) -> Self {
        MutationRequest::ToggleShare {
            note_id,
            visibility,
        }
    }

    /// Path of the endpoint this request is posted to.
    pub fn endpoint(&self) -> &'static str {
        match self {
            MutationRequest::Delete { kind, .. } => kind.delete_endpoint(),
            MutationRequest::ToggleShare { .. } => "/toggle-share",
        }
    }

    /// Kind of the targeted resource. Share toggles always target notes.
    pub fn kind(&self) -> ResourceKind {
        match self {
            MutationRequest::Delete { kind, .. } => *kind,
            MutationRequest::ToggleShare { .. } => ResourceKind::Note,
        }
    }

    pub fn id(&self) -> &ResourceId {
        match self {
            MutationRequest::Delete { id, .. } => id,
            MutationRequest::ToggleShare { note_id, .. } => note_id,
        }
    }
}

impl Serialize for MutationRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MutationRequest::Delete { kind, id } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(kind.id_field(), id)?;
                map.end()
            }
            MutationRequest::ToggleShare {
                note_id,
                visibility,
            } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry(ResourceKind::Note.id_field(), note_id)?;
                map.serialize_entry("public", &visibility.is_public())?;
                map.end()
            }
        }
    }
}

/// Structured response body returned by every mutation endpoint.
///
/// A body without `success` deserializes as a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// New sharing state, when the server echoes it back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
}

impl MutationResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            public: None,
        }
    }

    /// Server-supplied error message, ignoring blank strings.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|m| !m.trim().is_empty())
    }

    pub fn visibility(&self) -> Option<Visibility> {
        self.public.map(Visibility::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> ResourceId {
        ResourceId::parse(raw).unwrap()
    }

    #[test]
    fn test_delete_note_body() {
        let req = MutationRequest::delete(ResourceKind::Note, id("42"));
        assert_eq!(req.endpoint(), "/delete-note");
        assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"noteId":"42"}"#);
    }

    #[test]
    fn test_delete_profile_bodies_use_kind_field() {
        let student = MutationRequest::delete(ResourceKind::Student, id("9"));
        let teacher = MutationRequest::delete(ResourceKind::Teacher, id("3"));
        assert_eq!(
            serde_json::to_string(&student).unwrap(),
            r#"{"studentId":"9"}"#
        );
        assert_eq!(
            serde_json::to_string(&teacher).unwrap(),
            r#"{"teacherId":"3"}"#
        );
        assert_eq!(teacher.endpoint(), "/delete-teacher");
    }

    #[test]
    fn test_toggle_share_body() {
        let req = MutationRequest::toggle_share(id("7"), Visibility::Public);
        assert_eq!(req.endpoint(), "/toggle-share");
        assert_eq!(req.kind(), ResourceKind::Note);
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["noteId"], "7");
        assert_eq!(value["public"], true);
    }

    #[test]
    fn test_result_success_parses() {
        let result: MutationResult = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(result.success);
        assert_eq!(result.error_message(), None);
    }

    #[test]
    fn test_result_failure_with_message() {
        let result: MutationResult =
            serde_json::from_str(r#"{"success":false,"error":"locked"}"#).unwrap();
        assert!(!result.success);
        assert_eq!(result.error_message(), Some("locked"));
    }

    #[test]
    fn test_result_missing_success_is_failure() {
        // The server's 404/403 bodies only carry `error`
        let result: MutationResult = serde_json::from_str(r#"{"error":"Note not found"}"#).unwrap();
        assert!(!result.success);
        assert_eq!(result.error_message(), Some("Note not found"));
    }

    #[test]
    fn test_result_blank_error_is_ignored() {
        let result = MutationResult::rejected("  ");
        assert_eq!(result.error_message(), None);
    }

    #[test]
    fn test_result_echoed_visibility() {
        let result: MutationResult =
            serde_json::from_str(r#"{"success":true,"public":false}"#).unwrap();
        assert_eq!(result.visibility(), Some(Visibility::Private));
    }
}
