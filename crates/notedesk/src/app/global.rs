use clap::{Arg, ArgAction, Command};

pub fn root_command() -> Command {
    Command::new("notedesk")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Delete and share notes, remove student and teacher profiles")
        .long_about("notedesk sends one mutating request per command to the notes server, then shows how the page looks once the result is applied. Failures are reported and leave the page unchanged; nothing is retried.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("server")
                .long("server")
                .help("Base URL of the notes server (overrides config)")
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
}
