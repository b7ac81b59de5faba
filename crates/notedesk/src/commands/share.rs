use clap::ArgMatches;
use tracing::info;

use notedesk_core::{Operation, Page, ResourceId, ShareButton, Visibility};

use super::helpers::{build_dispatcher, finish, load_config_with_warning, runtime};

/// `notedesk share <id> --visibility <v>`: request an explicit visibility.
///
/// The page starts with `--buttons` buttons showing the opposite state so the
/// update is visible in the output.
pub(crate) fn handle_share_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw_id = matches
        .get_one::<String>("id")
        .map(String::as_str)
        .unwrap_or_default();
    let desired: Visibility = matches
        .get_one::<String>("visibility")
        .ok_or("Visibility argument is required")?
        .parse()?;
    let buttons = matches.get_one::<usize>("buttons").copied().unwrap_or(1);
    let json = matches.get_flag("json");

    info!(
        event = "cli.share_started",
        id = raw_id,
        visibility = %desired,
        buttons = buttons
    );

    let config = load_config_with_warning(matches)?;

    let mut page = Page::new();
    if let Some(id) = ResourceId::parse(raw_id) {
        for _ in 0..buttons {
            page.add_share_button(id.clone(), desired.toggled());
        }
    }
    let page = page.into_shared();

    let dispatcher = build_dispatcher(&config, page.clone(), false)?;
    let outcome = runtime()?.block_on(dispatcher.request_share_toggle(raw_id, desired));

    info!(
        event = "cli.share_completed",
        id = raw_id,
        success = outcome.is_success()
    );

    finish(Operation::ShareToggle, outcome, &page, json)
}

/// `notedesk toggle <id> --current <v>`: press a share button.
///
/// A blank id is passed through so the dispatcher reports it like any other
/// missing identifier.
pub(crate) fn handle_toggle_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw_id = matches
        .get_one::<String>("id")
        .map(String::as_str)
        .unwrap_or_default();
    let current: Visibility = matches
        .get_one::<String>("current")
        .ok_or("Current visibility argument is required")?
        .parse()?;
    let json = matches.get_flag("json");

    info!(
        event = "cli.toggle_started",
        id = raw_id,
        current = %current
    );

    let config = load_config_with_warning(matches)?;

    let button = ResourceId::parse(raw_id).map(|id| ShareButton::new(id, current));
    let mut page = Page::new();
    if let Some(button) = &button {
        page.add_share_button(button.note_id.clone(), button.visibility);
    }
    let page = page.into_shared();

    let dispatcher = build_dispatcher(&config, page.clone(), false)?;
    let outcome = runtime()?.block_on(async {
        match &button {
            Some(button) => dispatcher.activate_share_button(button).await,
            None => {
                dispatcher
                    .request_share_toggle(raw_id, current.toggled())
                    .await
            }
        }
    });

    info!(
        event = "cli.toggle_completed",
        id = raw_id,
        success = outcome.is_success()
    );

    finish(Operation::ShareToggle, outcome, &page, json)
}
