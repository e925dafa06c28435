//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use nrdeco_core::UntracedMethods;

use crate::commands::generate::GenerateArgs;

/// What a parsed invocation asks for.
pub enum Mode {
    Generate(GenerateParams),
    Version,
}

impl Mode {
    /// The `mode` group admits exactly one of `--source` and `--version`.
    pub fn from_matches(m: &ArgMatches) -> Self {
        match GenerateParams::from_matches(m) {
            Some(params) => Mode::Generate(params),
            None => Mode::Version,
        }
    }
}

pub struct GenerateParams {
    pub source: PathBuf,
    pub dest: Option<PathBuf>,
    pub untraced: UntracedMethods,
}

impl GenerateParams {
    /// `None` when no `--source` was given.
    pub fn from_matches(m: &ArgMatches) -> Option<Self> {
        Some(Self {
            source: m.get_one::<PathBuf>("source")?.clone(),
            dest: m.get_one::<PathBuf>("dest").cloned(),
            untraced: parse_untraced(m),
        })
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            source: p.source,
            dest: p.dest,
            untraced: p.untraced,
        }
    }
}

/// Number of `-v` flags.
pub fn verbosity(m: &ArgMatches) -> u8 {
    m.get_count("verbose")
}

fn parse_untraced(m: &ArgMatches) -> UntracedMethods {
    match m.get_one::<String>("untraced").map(|s| s.as_str()) {
        Some("forward") => UntracedMethods::Forward,
        _ => UntracedMethods::Omit,
    }
}
