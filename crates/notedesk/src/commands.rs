use clap::ArgMatches;
use tracing::error;

use notedesk_core::events;

mod delete;
mod helpers;
mod share;

use delete::handle_delete_command;
use share::{handle_share_command, handle_toggle_command};

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("delete", sub_matches)) => handle_delete_command(sub_matches),
        Some(("share", sub_matches)) => handle_share_command(sub_matches),
        Some(("toggle", sub_matches)) => handle_toggle_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
