use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("home directory not found: set $HOME environment variable")]
    HomeNotFound,
}

/// Centralized path construction for the `~/.notedesk/` directory layout.
///
/// Use `resolve()` in production code and `from_dir()` in tests.
#[derive(Debug, Clone)]
pub struct NotedeskPaths {
    notedesk_dir: PathBuf,
}

impl NotedeskPaths {
    /// Resolve paths from the user's home directory (`~/.notedesk`).
    pub fn resolve() -> Result<Self, PathError> {
        let home = dirs::home_dir().ok_or(PathError::HomeNotFound)?;
        Ok(Self {
            notedesk_dir: home.join(".notedesk"),
        })
    }

    /// Create paths from an explicit base directory. Use in tests.
    pub fn from_dir(notedesk_dir: PathBuf) -> Self {
        Self { notedesk_dir }
    }

    /// The base `~/.notedesk` directory.
    pub fn notedesk_dir(&self) -> &Path {
        &self.notedesk_dir
    }

    pub fn user_config(&self) -> PathBuf {
        self.notedesk_dir.join("config.toml")
    }

    /// Project-level config: `<project_root>/.notedesk/config.toml`.
    pub fn project_config(project_root: &Path) -> PathBuf {
        project_root.join(".notedesk").join("config.toml")
    }
}
