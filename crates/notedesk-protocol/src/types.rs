use serde::{Deserialize, Serialize};

/// Kind of resource a mutation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Note,
    Student,
    Teacher,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Note,
        ResourceKind::Student,
        ResourceKind::Teacher,
    ];

    /// Lowercase name used in endpoints, CLI arguments and messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Note => "note",
            ResourceKind::Student => "student",
            ResourceKind::Teacher => "teacher",
        }
    }

    /// Endpoint that deletes a resource of this kind.
    pub fn delete_endpoint(&self) -> &'static str {
        match self {
            ResourceKind::Note => "/delete-note",
            ResourceKind::Student => "/delete-student",
            ResourceKind::Teacher => "/delete-teacher",
        }
    }

    /// JSON field carrying the identifier in request bodies.
    pub fn id_field(&self) -> &'static str {
        match self {
            ResourceKind::Note => "noteId",
            ResourceKind::Student => "studentId",
            ResourceKind::Teacher => "teacherId",
        }
    }

    /// Student and teacher resources are profiles rather than content.
    pub fn is_profile(&self) -> bool {
        matches!(self, ResourceKind::Student | ResourceKind::Teacher)
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "note" => Ok(ResourceKind::Note),
            "student" => Ok(ResourceKind::Student),
            "teacher" => Ok(ResourceKind::Teacher),
            other => Err(format!(
                "Unknown resource kind '{}'. Expected one of: note, student, teacher",
                other
            )),
        }
    }
}

/// Non-empty identifier of a note, student or teacher.
///
/// Identifiers are opaque strings; surrounding whitespace is trimmed and a
/// blank value never constructs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    /// Parse a raw identifier taken from view metadata.
    ///
    /// Returns `None` for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResourceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Whether a note is shared publicly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub fn is_public(&self) -> bool {
        matches!(self, Visibility::Public)
    }

    /// The opposite visibility, i.e. what activating a toggle requests.
    pub fn toggled(&self) -> Self {
        match self {
            Visibility::Public => Visibility::Private,
            Visibility::Private => Visibility::Public,
        }
    }
}

impl From<bool> for Visibility {
    fn from(public: bool) -> Self {
        if public {
            Visibility::Public
        } else {
            Visibility::Private
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Private => write!(f, "private"),
        }
    }
}

impl std::str::FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "public" => Ok(Visibility::Public),
            "private" => Ok(Visibility::Private),
            other => Err(format!(
                "Unknown visibility '{}'. Expected public or private",
                other
            )),
        }
    }
}
