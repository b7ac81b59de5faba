use clap::ArgMatches;
use tokio::runtime::Runtime;
use tracing::warn;

use notedesk_core::events;
use notedesk_core::{
    DispatchPolicy, Dispatcher, HttpTransport, MutationOutcome, NotedeskConfig, Operation,
    SharedPage, with_page,
};

use crate::console::ConsoleNotifier;
use crate::render;

pub type CliDispatcher = Dispatcher<HttpTransport, ConsoleNotifier>;

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
///
/// A `--server` override is applied afterwards and validated with the rest.
pub fn load_config_with_warning(
    matches: &ArgMatches,
) -> Result<NotedeskConfig, Box<dyn std::error::Error>> {
    let mut config = match NotedeskConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.notedesk/config.toml and ./.notedesk/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            NotedeskConfig::default()
        }
    };

    if let Some(server) = matches.get_one::<String>("server") {
        config.server.base_url = Some(server.clone());
        if let Err(e) = config.validate() {
            eprintln!("Invalid --server value: {}", e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    }

    Ok(config)
}

pub fn build_dispatcher(
    config: &NotedeskConfig,
    page: SharedPage,
    assume_yes: bool,
) -> Result<CliDispatcher, Box<dyn std::error::Error>> {
    let transport = HttpTransport::from_config(&config.server).inspect_err(|e| {
        eprintln!("Could not set up the HTTP client: {}", e);
        events::log_app_error(e);
    })?;

    let mut policy = DispatchPolicy::from_config(config);
    if assume_yes {
        policy = policy.without_confirmation();
    }

    Ok(Dispatcher::new(transport, ConsoleNotifier, page, policy))
}

/// Single-threaded runtime for one command; pending banner timers are
/// dropped with it.
pub fn runtime() -> std::io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Print the outcome and map it to the process result.
///
/// A reported error exits non-zero; a declined confirmation does not.
pub fn finish(
    operation: Operation,
    outcome: MutationOutcome,
    page: &SharedPage,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = with_page(page, |page| page.clone());

    if json {
        println!("{}", render::outcome_json(operation, &outcome, &snapshot)?);
    } else {
        render::print_outcome(&outcome, &snapshot);
    }

    match outcome {
        MutationOutcome::ErrorReported(e) => {
            events::log_app_error(&e);
            Err(e.into())
        }
        MutationOutcome::Reconciled(_) | MutationOutcome::Aborted => Ok(()),
    }
}
