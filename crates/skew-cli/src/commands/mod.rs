//! Command dispatch and handler modules.

mod check;
mod families;

use skew_util::errors::SkewResult;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> SkewResult<()> {
    match cli.command {
        Command::Check {
            input,
            fail_on_mismatch,
            config,
            format,
        } => check::exec(
            &input,
            fail_on_mismatch,
            config.as_deref(),
            format,
            cli.verbose,
        ),
        Command::Families => families::exec(),
    }
}
