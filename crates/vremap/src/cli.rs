use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Debug, Subcommand, PartialEq)]
pub(crate) enum Command {
    /// Parse a bindings file and print the resolved bindings.
    Check {
        /// The bindings file
        #[clap(short, long)]
        bindings: PathBuf,
    },
    /// Run the remapper over a recorded input trace.
    Replay {
        /// The bindings file
        #[clap(short, long)]
        bindings: PathBuf,
        /// The input trace to replay
        #[clap(short, long)]
        trace: PathBuf,
        /// Play frames in real time at this rate
        #[clap(long)]
        fps: Option<u32>,
        /// Reload bindings when the file changes
        #[clap(short, long)]
        watch: bool,
    },
}

/// VR controller button remapping for legacy menu input.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Turn debugging information on
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// The command to run
    #[clap(subcommand)]
    pub command: Command,
}
