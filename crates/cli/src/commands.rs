//! Clap command tree definition.

use clap::{Arg, ArgAction, ArgGroup, Command};

/// Build the CLI command tree.
pub fn build_cli() -> Command {
    Command::new("shortcut")
        .about("Create a QuickTime shortcut movie that points at another movie")
        .arg(
            Arg::new("output")
                .help("Shortcut file to create (replaced if it exists)")
                .required_unless_present("init-config"),
        )
        .arg(
            Arg::new("url")
                .long("url")
                .help("Reference a URL (stored NUL-terminated as a 'url ' reference)")
                .conflicts_with_all(["kind", "data-file"]),
        )
        .arg(
            Arg::new("kind")
                .long("kind")
                .help("Four-character data reference type, e.g. 'alis'")
                .requires("data-file"),
        )
        .arg(
            Arg::new("data-file")
                .long("data-file")
                .help("File holding the raw data reference bytes")
                .requires("kind"),
        )
        .group(ArgGroup::new("reference").args(["url", "kind"]))
        .arg(
            Arg::new("config")
                .long("config")
                .help("Config file (default: ./shortcut.toml if present)"),
        )
        .arg(
            Arg::new("init-config")
                .long("init-config")
                .help("Write a default config file (--config path or ./shortcut.toml) and exit")
                .conflicts_with_all(["output", "url", "kind", "data-file"])
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("temp-rename")
                .long("temp-rename")
                .help("Write a temporary file and rename it over the output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-sync")
                .long("no-sync")
                .help("Skip the volume flush after writing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log each write step")
                .action(ArgAction::Count),
        )
}
