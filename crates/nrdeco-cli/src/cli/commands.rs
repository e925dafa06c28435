//! Command builder for the CLI.

use clap::{ArgGroup, Command};

use super::args::*;

/// Build the `nrdeco` command. Exactly one of `--source` and `--version`
/// is required.
pub fn build_cli() -> Command {
    Command::new("nrdeco")
        .about("Generates decorated implementations with New Relic segments from Go interfaces")
        .disable_version_flag(true)
        .arg(source_arg())
        .arg(dest_arg())
        .arg(untraced_arg())
        .arg(verbose_arg())
        .arg(version_arg())
        .group(
            ArgGroup::new("mode")
                .args(["source", "version"])
                .required(true)
                .multiple(false),
        )
        .after_help(
            r#"EXAMPLES:
  nrdeco -s repository/user.go                      # writes repository/user.nrdeco.go
  nrdeco -s repository/user.go -d nr/user.go        # decorator in another package
  nrdeco -s repository/user.go --untraced forward   # also forward methods without context
  nrdeco --version"#,
        )
}
