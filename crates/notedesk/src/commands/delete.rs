use clap::ArgMatches;
use tracing::info;

use notedesk_core::{Operation, Page, ResourceId, ResourceKind};

use super::helpers::{build_dispatcher, finish, load_config_with_warning, runtime};

pub(crate) fn handle_delete_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let kind: ResourceKind = matches
        .get_one::<String>("kind")
        .ok_or("Kind argument is required")?
        .parse()?;
    let raw_id = matches
        .get_one::<String>("id")
        .map(String::as_str)
        .unwrap_or_default();
    let assume_yes = matches.get_flag("yes");
    let json = matches.get_flag("json");

    info!(
        event = "cli.delete_started",
        kind = %kind,
        id = raw_id,
        assume_yes = assume_yes
    );

    let config = load_config_with_warning(matches)?;

    // The page holds the element the user acted on, when it has an identifier
    let mut page = Page::new();
    if let Some(id) = ResourceId::parse(raw_id) {
        page.add_element(kind, id);
    }
    let page = page.into_shared();

    let dispatcher = build_dispatcher(&config, page.clone(), assume_yes)?;
    let outcome = runtime()?.block_on(dispatcher.request_deletion(kind, raw_id));

    info!(
        event = "cli.delete_completed",
        kind = %kind,
        success = outcome.is_success()
    );

    finish(Operation::Delete(kind), outcome, &page, json)
}
