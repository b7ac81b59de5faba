use clap::{Arg, ArgAction, Command};

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Output the outcome and resulting page as JSON")
        .action(ArgAction::SetTrue)
}

pub fn delete_command() -> Command {
    Command::new("delete")
        .about("Delete a note, student profile or teacher profile")
        .arg(
            Arg::new("kind")
                .help("Kind of resource to delete")
                .required(true)
                .value_parser(["note", "student", "teacher"])
                .index(1),
        )
        .arg(
            Arg::new("id")
                .help("Identifier of the resource")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("yes")
                .long("yes")
                .short('y')
                .help("Skip the confirmation prompt for profiles")
                .action(ArgAction::SetTrue),
        )
        .arg(json_arg())
}

pub fn share_command() -> Command {
    Command::new("share")
        .about("Set a note's sharing visibility")
        .arg(
            Arg::new("id")
                .help("Identifier of the note")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("visibility")
                .long("visibility")
                .help("Desired visibility")
                .value_parser(["public", "private"])
                .required(true),
        )
        .arg(
            Arg::new("buttons")
                .long("buttons")
                .help("Number of share buttons bound to the note on the page")
                .value_parser(clap::value_parser!(usize))
                .default_value("1"),
        )
        .arg(json_arg())
}

pub fn toggle_command() -> Command {
    Command::new("toggle")
        .about("Press a note's share button: flips its current visibility")
        .arg(
            Arg::new("id")
                .help("Identifier of the note")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("current")
                .long("current")
                .help("Visibility the button currently shows")
                .value_parser(["public", "private"])
                .required(true),
        )
        .arg(json_arg())
}
