mod cli;
mod commands;

use cli::{Mode, build_cli, verbosity};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = build_cli().get_matches();
    initialize_tracing(verbosity(&matches));

    match Mode::from_matches(&matches) {
        Mode::Version => commands::version::run(),
        Mode::Generate(params) => commands::generate::run(params.into()),
    }
}

/// Logs go to stderr so they never mix with the progress lines on stdout.
/// `RUST_LOG` wins over `-v`.
fn initialize_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
