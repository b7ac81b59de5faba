mod global;
mod mutation;


use clap::Command;

pub fn build_cli() -> Command {
    global::root_command()
        .subcommand(mutation::delete_command())
        .subcommand(mutation::share_command())
        .subcommand(mutation::toggle_command())
}
