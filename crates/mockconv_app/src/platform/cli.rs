use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mockconv", version)]
#[command(about = "Mock document conversion: simulated processing with placeholder downloads")]
pub struct Cli {
    /// Settings file (RON). Defaults to ./mockconv.ron when present.
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the available tools.
    Tools,

    /// Run one mock conversion and save the placeholder output.
    Run {
        /// Tool identifier, e.g. `compress` or `pdf-to-word`.
        #[arg(short, long)]
        tool: String,

        /// Input file. Only its name and size are used.
        #[arg(short, long, value_name = "PATH")]
        file: PathBuf,

        /// MIME type of the input; guessed from the extension when omitted.
        #[arg(long)]
        mime: Option<String>,

        /// Directory the output is saved to.
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Write a settings file with the defaults.
    InitConfig {
        #[arg(default_value = "mockconv.ron")]
        path: PathBuf,
    },
}
