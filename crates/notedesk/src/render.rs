//! Human and JSON rendering of a finished mutation.

use serde::Serialize;

use notedesk_core::{
    BannerLevel, MutationOutcome, NotedeskError, Operation, Page, Reconciliation,
};

use crate::color;

#[derive(Serialize)]
struct OutcomeReport<'a> {
    outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    page: &'a Page,
}

fn outcome_name(outcome: &MutationOutcome) -> &'static str {
    match outcome {
        MutationOutcome::Reconciled(Reconciliation::Removed { .. }) => "removed",
        MutationOutcome::Reconciled(Reconciliation::ElementMissing { .. }) => "element_missing",
        MutationOutcome::Reconciled(Reconciliation::VisibilityApplied { .. }) => {
            "visibility_applied"
        }
        MutationOutcome::ErrorReported(_) => "error_reported",
        MutationOutcome::Aborted => "aborted",
    }
}

pub fn outcome_json(
    operation: Operation,
    outcome: &MutationOutcome,
    page: &Page,
) -> Result<String, serde_json::Error> {
    let error = outcome.error();
    let report = OutcomeReport {
        outcome: outcome_name(outcome),
        error_code: error.map(|e| e.error_code()),
        message: error.map(|e| e.user_message(operation)),
        page,
    };
    serde_json::to_string_pretty(&report)
}

/// Print the outcome line followed by the page.
///
/// Errors are already on stderr via the notifier, so only the page is shown.
pub fn print_outcome(outcome: &MutationOutcome, page: &Page) {
    match outcome {
        MutationOutcome::Reconciled(Reconciliation::Removed { kind, id }) => {
            println!("Deleted {} {}.", kind, color::accent(id.as_str()));
        }
        MutationOutcome::Reconciled(Reconciliation::ElementMissing { kind, id }) => {
            println!(
                "Deleted {} {}. {}",
                kind,
                color::accent(id.as_str()),
                color::muted("(no element on the page)")
            );
        }
        MutationOutcome::Reconciled(Reconciliation::VisibilityApplied {
            note_id,
            visibility,
            buttons_updated,
        }) => {
            println!(
                "Note {} is now {} ({} button{} updated).",
                color::accent(note_id.as_str()),
                visibility,
                buttons_updated,
                if *buttons_updated == 1 { "" } else { "s" }
            );
        }
        MutationOutcome::ErrorReported(_) => {}
        MutationOutcome::Aborted => {
            println!("Aborted.");
            return;
        }
    }

    print_page(page);
}

fn print_page(page: &Page) {
    for banner in page.banners() {
        let text = match banner.level {
            BannerLevel::Success => color::success(&banner.text),
            BannerLevel::Warning => color::warning(&banner.text),
            BannerLevel::Danger => color::danger(&banner.text),
            BannerLevel::Info => banner.text.clone(),
        };
        println!("  [{}] {}", banner.level.as_str(), text);
    }

    for element in page.elements() {
        println!(
            "  {} {} {}",
            element.kind,
            color::accent(element.id.as_str()),
            color::muted(&format!("opacity {:.1}", element.opacity))
        );
    }

    for button in page.share_buttons() {
        println!(
            "  note {} [{}] {}",
            color::accent(button.note_id.as_str()),
            button.label(),
            color::muted(button.css_class())
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notedesk_core::{BannerOrigin, MutationError, ResourceId, ResourceKind, Visibility};

    fn id(raw: &str) -> ResourceId {
        ResourceId::parse(raw).unwrap()
    }

    #[test]
    fn test_outcome_json_for_rejection() {
        let page = Page::new().with_element(ResourceKind::Note, id("42"));
        let outcome = MutationOutcome::ErrorReported(MutationError::Rejected {
            message: Some("locked".to_string()),
        });

        let json = outcome_json(Operation::Delete(ResourceKind::Note), &outcome, &page).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["outcome"], "error_reported");
        assert_eq!(value["error_code"], "MUTATION_REJECTED");
        assert_eq!(value["message"], "Error: locked");
        assert_eq!(value["page"]["elements"][0]["id"], "42");
    }

    #[test]
    fn test_outcome_json_for_share_omits_error_fields() {
        let mut page = Page::new().with_share_button(id("7"), Visibility::Public);
        page.push_banner(
            BannerLevel::Success,
            "Note sharing updated successfully!",
            BannerOrigin::Notification,
        );
        let outcome = MutationOutcome::Reconciled(Reconciliation::VisibilityApplied {
            note_id: id("7"),
            visibility: Visibility::Public,
            buttons_updated: 1,
        });

        let json = outcome_json(Operation::ShareToggle, &outcome, &page).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["outcome"], "visibility_applied");
        assert!(value.get("error_code").is_none());
        assert!(value.get("message").is_none());
        assert_eq!(value["page"]["banners"][0]["level"], "success");
        assert_eq!(value["page"]["share_buttons"][0]["visibility"], "public");
    }

    #[test]
    fn test_outcome_name_aborted() {
        assert_eq!(outcome_name(&MutationOutcome::Aborted), "aborted");
    }
}
