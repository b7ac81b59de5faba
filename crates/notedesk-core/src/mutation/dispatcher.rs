use notedesk_protocol::{MutationRequest, MutationResult, ResourceId, ResourceKind, Visibility};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use super::errors::MutationError;
use super::messages;
use super::policy::{DispatchPolicy, RemovalStrategy};
use super::state::{MutationState, StateTracker};
use super::types::{MutationOutcome, Operation, Reconciliation};
use crate::notify::{Notifier, schedule_dismissal, schedule_flash_dismissal};
use crate::transport::Transport;
use crate::view::{BannerLevel, BannerOrigin, ShareButton, SharedPage, with_page};

/// Performs one mutating action against the server and reconciles the page.
///
/// The page, transport and notifier are injected. Operations on different
/// resources may run concurrently; each only touches elements bound to its
/// own resource.
pub struct Dispatcher<T, N> {
    transport: T,
    notifier: N,
    page: SharedPage,
    policy: DispatchPolicy,
}

impl<T: Transport, N: Notifier> Dispatcher<T, N> {
    pub fn new(transport: T, notifier: N, page: SharedPage, policy: DispatchPolicy) -> Self {
        Self {
            transport,
            notifier,
            page,
            policy,
        }
    }

    pub fn page(&self) -> &SharedPage {
        &self.page
    }

    pub fn policy(&self) -> &DispatchPolicy {
        &self.policy
    }

    /// Delete a note, student or teacher and remove its element.
    ///
    /// `raw_id` is the identifier read from the element's metadata. Profile
    /// kinds ask for confirmation first (per policy); declining sends
    /// nothing and leaves the page untouched.
    pub async fn request_deletion(&self, kind: ResourceKind, raw_id: &str) -> MutationOutcome {
        let operation = Operation::Delete(kind);
        let mut tracker = StateTracker::new(operation);

        info!(
            event = "core.mutation.delete_started",
            kind = %kind,
            id = raw_id
        );

        let Some(id) = ResourceId::parse(raw_id) else {
            return self.report(&mut tracker, MutationError::MissingIdentifier { kind });
        };

        if self.policy.requires_confirmation(kind)
            && !self.notifier.confirm(&messages::confirmation_prompt(kind))
        {
            info!(event = "core.mutation.delete_declined", kind = %kind, id = %id);
            tracker.advance(MutationState::Aborted);
            return MutationOutcome::Aborted;
        }

        tracker.advance(MutationState::Requesting);
        let request = MutationRequest::delete(kind, id.clone());
        match self.send(&request).await {
            Ok(_) => {
                tracker.advance(MutationState::Succeeded);
                let reconciliation = self.remove_element(kind, id.clone()).await;
                tracker.advance(MutationState::ViewReconciled);
                info!(
                    event = "core.mutation.delete_completed",
                    kind = %kind,
                    id = %id
                );
                MutationOutcome::Reconciled(reconciliation)
            }
            Err(e) => self.report(&mut tracker, e),
        }
    }

    /// Ask the server to set a note's visibility and update every share
    /// button bound to it.
    ///
    /// Repeating a call with the same visibility still sends a request.
    pub async fn request_share_toggle(
        &self,
        raw_id: &str,
        desired: Visibility,
    ) -> MutationOutcome {
        let mut tracker = StateTracker::new(Operation::ShareToggle);

        info!(
            event = "core.mutation.share_started",
            id = raw_id,
            visibility = %desired
        );

        let Some(note_id) = ResourceId::parse(raw_id) else {
            return self.report(
                &mut tracker,
                MutationError::MissingIdentifier {
                    kind: ResourceKind::Note,
                },
            );
        };

        tracker.advance(MutationState::Requesting);
        let request = MutationRequest::toggle_share(note_id.clone(), desired);
        let result = match self.send(&request).await {
            Ok(result) => result,
            Err(e) => return self.report(&mut tracker, e),
        };
        tracker.advance(MutationState::Succeeded);

        // Prefer the server's view of the new state when it echoes one
        let visibility = match result.visibility() {
            Some(echoed) if echoed != desired => {
                warn!(
                    event = "core.mutation.share_echo_mismatch",
                    id = %note_id,
                    requested = %desired,
                    echoed = %echoed
                );
                echoed
            }
            Some(echoed) => echoed,
            None => desired,
        };

        let (buttons_updated, banner) = with_page(&self.page, |page| {
            let updated = page.apply_visibility(&note_id, visibility);
            let banner = page.push_banner(
                BannerLevel::Success,
                messages::SHARE_UPDATED,
                BannerOrigin::Notification,
            );
            (updated, banner)
        });
        schedule_dismissal(self.page.clone(), banner, self.policy.banner_dismiss);

        tracker.advance(MutationState::ViewReconciled);
        info!(
            event = "core.mutation.share_completed",
            id = %note_id,
            visibility = %visibility,
            buttons_updated = buttons_updated
        );

        MutationOutcome::Reconciled(Reconciliation::VisibilityApplied {
            note_id,
            visibility,
            buttons_updated,
        })
    }

    /// Activate a share button: request the opposite of its current state.
    pub async fn activate_share_button(&self, button: &ShareButton) -> MutationOutcome {
        self.request_share_toggle(button.note_id.as_str(), button.next_action())
            .await
    }

    /// Start the timer that closes the page's initial flash messages.
    ///
    /// Library API for long-lived hosts that render flash banners with the
    /// page. The CLI builds a fresh page per command and never calls this.
    pub fn schedule_flash_dismissal(&self) -> JoinHandle<usize> {
        schedule_flash_dismissal(self.page.clone(), self.policy.flash_dismiss)
    }

    /// Send a request and turn `success: false` into an error.
    async fn send(&self, request: &MutationRequest) -> Result<MutationResult, MutationError> {
        let result = self.transport.send(request).await?;
        info!(
            event = "core.mutation.response_received",
            endpoint = request.endpoint(),
            success = result.success
        );
        if result.success {
            Ok(result)
        } else {
            Err(MutationError::Rejected {
                message: result.error_message().map(String::from),
            })
        }
    }

    async fn remove_element(&self, kind: ResourceKind, id: ResourceId) -> Reconciliation {
        let removed = match self.policy.removal_for(kind) {
            RemovalStrategy::Immediate => {
                with_page(&self.page, |page| page.remove_element(kind, &id)).is_some()
            }
            RemovalStrategy::FadeThenRemove { opacity, delay } => {
                let present = with_page(&self.page, |page| page.set_opacity(kind, &id, opacity));
                if present {
                    tokio::time::sleep(delay).await;
                    with_page(&self.page, |page| page.remove_element(kind, &id)).is_some()
                } else {
                    false
                }
            }
        };

        if !removed {
            warn!(
                event = "core.mutation.element_missing",
                kind = %kind,
                id = %id
            );
            return Reconciliation::ElementMissing { kind, id };
        }

        if let Some(text) = messages::deletion_success(kind) {
            let banner = with_page(&self.page, |page| {
                page.push_banner(BannerLevel::Success, text, BannerOrigin::Notification)
            });
            schedule_dismissal(self.page.clone(), banner, self.policy.flash_dismiss);
        }

        Reconciliation::Removed { kind, id }
    }

    fn report(&self, tracker: &mut StateTracker, error: MutationError) -> MutationOutcome {
        let operation = tracker.operation();
        tracker.advance(MutationState::Failed);

        if error.is_transport_failure() {
            error!(
                event = "core.mutation.request_failed",
                operation = %operation,
                error = %error
            );
        } else {
            warn!(
                event = "core.mutation.request_rejected",
                operation = %operation,
                error = %error
            );
        }

        self.notifier.alert(&error.user_message(operation));
        tracker.advance(MutationState::ErrorReported);
        debug_assert!(tracker.state().is_terminal());
        MutationOutcome::ErrorReported(error)
    }
}
