//! Configuration type definitions.
//!
//! These types are deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [server]
//! base_url = "https://notes.example.edu"
//! request_timeout_secs = 10
//!
//! [timing]
//! banner_dismiss_ms = 3000
//! flash_dismiss_ms = 5000
//! fade_ms = 300
//!
//! [removal]
//! note = "immediate"
//! student = "fade"
//!
//! [confirm]
//! note = true
//! ```
//!
//! Fields are `Option<T>` so that only explicitly-set values override
//! lower-priority configs during hierarchy merging.

use std::time::Duration;

use notedesk_protocol::ResourceKind;
use serde::{Deserialize, Serialize};

use crate::defaults;

/// Main configuration loaded from TOML config files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotedeskConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub removal: RemovalConfig,

    #[serde(default)]
    pub confirm: ConfirmConfig,
}

/// Where mutation requests are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL endpoints are resolved against.
    /// Default: "http://127.0.0.1:5000"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Transport-level timeout for a single request.
    /// Default: 30
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl ServerConfig {
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(defaults::DEFAULT_BASE_URL)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(defaults::DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    pub fn merge(base: &Self, override_config: &Self) -> Self {
        Self {
            base_url: override_config
                .base_url
                .clone()
                .or_else(|| base.base_url.clone()),
            request_timeout_secs: override_config
                .request_timeout_secs
                .or(base.request_timeout_secs),
        }
    }
}

/// Delays for transient notifications and removal fades.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Lifetime of the banner shown after a share toggle.
    /// Default: 3000
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_dismiss_ms: Option<u64>,

    /// Lifetime of flash messages present at page load.
    /// Default: 5000
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flash_dismiss_ms: Option<u64>,

    /// Fade duration before a profile card is removed.
    /// Default: 300
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade_ms: Option<u64>,
}

impl TimingConfig {
    pub fn banner_dismiss(&self) -> Duration {
        Duration::from_millis(
            self.banner_dismiss_ms
                .unwrap_or(defaults::DEFAULT_BANNER_DISMISS_MS),
        )
    }

    pub fn flash_dismiss(&self) -> Duration {
        Duration::from_millis(
            self.flash_dismiss_ms
                .unwrap_or(defaults::DEFAULT_FLASH_DISMISS_MS),
        )
    }

    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms.unwrap_or(defaults::DEFAULT_FADE_MS))
    }

    pub fn merge(base: &Self, override_config: &Self) -> Self {
        Self {
            banner_dismiss_ms: override_config
                .banner_dismiss_ms
                .or(base.banner_dismiss_ms),
            flash_dismiss_ms: override_config.flash_dismiss_ms.or(base.flash_dismiss_ms),
            fade_ms: override_config.fade_ms.or(base.fade_ms),
        }
    }
}

/// How a view element leaves the page after a confirmed deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemovalMode {
    Immediate,
    Fade,
}

/// Per-kind removal mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalConfig {
    /// Default: immediate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<RemovalMode>,

    /// Default: fade
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student: Option<RemovalMode>,

    /// Default: fade
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher: Option<RemovalMode>,
}

impl RemovalConfig {
    pub fn mode_for(&self, kind: ResourceKind) -> RemovalMode {
        let configured = match kind {
            ResourceKind::Note => self.note,
            ResourceKind::Student => self.student,
            ResourceKind::Teacher => self.teacher,
        };
        configured.unwrap_or(if kind.is_profile() {
            RemovalMode::Fade
        } else {
            RemovalMode::Immediate
        })
    }

    pub fn merge(base: &Self, override_config: &Self) -> Self {
        Self {
            note: override_config.note.or(base.note),
            student: override_config.student.or(base.student),
            teacher: override_config.teacher.or(base.teacher),
        }
    }
}

/// Per-kind interactive confirmation before deletion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmConfig {
    /// Default: false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<bool>,

    /// Default: true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student: Option<bool>,

    /// Default: true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher: Option<bool>,
}

impl ConfirmConfig {
    pub fn requires_confirmation(&self, kind: ResourceKind) -> bool {
        let configured = match kind {
            ResourceKind::Note => self.note,
            ResourceKind::Student => self.student,
            ResourceKind::Teacher => self.teacher,
        };
        configured.unwrap_or(kind.is_profile())
    }

    pub fn merge(base: &Self, override_config: &Self) -> Self {
        Self {
            note: override_config.note.or(base.note),
            student: override_config.student.or(base.student),
            teacher: override_config.teacher.or(base.teacher),
        }
    }
}
