//! Argument builders for the `nrdeco` command.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Go file with interface declarations (-s/--source).
pub fn source_arg() -> Arg {
    Arg::new("source")
        .short('s')
        .long("source")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Go file declaring the interfaces to decorate")
}

/// Generated file (-d/--dest).
pub fn dest_arg() -> Arg {
    Arg::new("dest")
        .short('d')
        .long("dest")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .requires("source")
        .conflicts_with("version")
        .help("Output file [default: <source> with .go replaced by .nrdeco.go]")
}

/// Print version and exit (--version).
pub fn version_arg() -> Arg {
    Arg::new("version")
        .long("version")
        .action(ArgAction::SetTrue)
        .help("Print the version of nrdeco")
}

/// Handling of methods without a context (--untraced).
pub fn untraced_arg() -> Arg {
    Arg::new("untraced")
        .long("untraced")
        .value_name("POLICY")
        .default_value("omit")
        .value_parser(["omit", "forward"])
        .help("Methods without context.Context: omit them or forward without a segment")
}

/// Log verbosity (-v, -vv, -vvv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Increase log verbosity (RUST_LOG takes precedence)")
}
