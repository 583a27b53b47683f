mod check;
mod cli;
mod error;
mod handlers;
mod logging;
mod replay;
mod trace;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use crate::cli::{Cli, Command};
use crate::error::AppError;

fn run(cli: Cli) -> Result<(), AppError> {
    logging::setup(cli.verbose, cli.no_color)?;

    match cli.command {
        Command::Check { bindings } => check::run(&bindings),
        Command::Replay {
            bindings,
            trace,
            fps,
            watch,
        } => replay::run(&bindings, &trace, fps, watch),
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Without our logger this goes to whichever one was installed.
            print_error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_logger_is_reported() {
        let _ = logging::setup(false, false);
        let cli = Cli::try_parse_from(["vremap", "check", "-b", "missing.yaml"]).unwrap();
        assert!(matches!(run(cli), Err(AppError::Logger(_))));
    }
}
