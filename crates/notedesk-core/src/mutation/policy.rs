use std::time::Duration;

use notedesk_config::{NotedeskConfig, RemovalMode};
use notedesk_protocol::ResourceKind;

/// Opacity a card fades to before it is removed.
pub const FADE_OPACITY: f32 = 0.5;

/// How an element leaves the page after a confirmed deletion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RemovalStrategy {
    Immediate,
    FadeThenRemove { opacity: f32, delay: Duration },
}

/// Per-kind behavior and notification lifetimes for a dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchPolicy {
    pub note_removal: RemovalStrategy,
    pub student_removal: RemovalStrategy,
    pub teacher_removal: RemovalStrategy,
    pub confirm_note: bool,
    pub confirm_student: bool,
    pub confirm_teacher: bool,
    /// Lifetime of the share-toggle success banner.
    pub banner_dismiss: Duration,
    /// Lifetime of page-load flash messages and profile deletion banners.
    pub flash_dismiss: Duration,
}

impl DispatchPolicy {
    pub fn from_config(config: &NotedeskConfig) -> Self {
        let strategy = |kind: ResourceKind| match config.removal.mode_for(kind) {
            RemovalMode::Immediate => RemovalStrategy::Immediate,
            RemovalMode::Fade => RemovalStrategy::FadeThenRemove {
                opacity: FADE_OPACITY,
                delay: config.timing.fade(),
            },
        };

        Self {
            note_removal: strategy(ResourceKind::Note),
            student_removal: strategy(ResourceKind::Student),
            teacher_removal: strategy(ResourceKind::Teacher),
            confirm_note: config.confirm.requires_confirmation(ResourceKind::Note),
            confirm_student: config.confirm.requires_confirmation(ResourceKind::Student),
            confirm_teacher: config.confirm.requires_confirmation(ResourceKind::Teacher),
            banner_dismiss: config.timing.banner_dismiss(),
            flash_dismiss: config.timing.flash_dismiss(),
        }
    }

    pub fn removal_for(&self, kind: ResourceKind) -> RemovalStrategy {
        match kind {
            ResourceKind::Note => self.note_removal,
            ResourceKind::Student => self.student_removal,
            ResourceKind::Teacher => self.teacher_removal,
        }
    }

    pub fn requires_confirmation(&self, kind: ResourceKind) -> bool {
        match kind {
            ResourceKind::Note => self.confirm_note,
            ResourceKind::Student => self.confirm_student,
            ResourceKind::Teacher => self.confirm_teacher,
        }
    }

    /// Skip every confirmation prompt (`--yes`).
    pub fn without_confirmation(mut self) -> Self {
        self.confirm_note = false;
        self.confirm_student = false;
        self.confirm_teacher = false;
        self
    }
}

impl Default for DispatchPolicy {
    fn default() -> Self {
        Self::from_config(&NotedeskConfig::default())
    }
}
