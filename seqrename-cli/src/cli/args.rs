use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Rename every file in a directory to a prefix and a sequential counter
#[derive(Parser, Debug)]
#[command(name = "seqrename")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output (also disabled by a non-empty NO_COLOR)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Run as if started in <path> instead of the current working directory
    #[arg(short = 'C', global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides this.
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Where and how to rename, shared by `rename` and `plan`
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Directory whose files should be renamed [env: SEQRENAME_DIR, MY_DIRECTORY_PATH]
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Prefix for the new names, blank falls back to the default [env: SEQRENAME_PREFIX, PREFIX]
    #[arg(short, long)]
    pub prefix: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rename every file in DIR to PREFIX_N.EXT
    Rename {
        #[command(flatten)]
        target: TargetArgs,

        /// Show what would be renamed without renaming anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the new name each file would get
    Plan {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Show version information
    Version,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,

        /// Directory to write the completion file to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}
