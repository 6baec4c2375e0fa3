use anyhow::{Context, Result};
use clap::Parser;
use seqrename_core::{
    should_use_color, Config, OutputFormatter, RenameError, RenameRequest, VersionResult,
    DEFAULT_PREFIX,
};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod cli;
mod plan;
mod rename;

use cli::{Cli, Commands, TargetArgs};

/// Exit code when no directory is configured at all, or the prefix or config is unusable
const EXIT_CONFIG: i32 = 1;
/// Exit code when the target directory is missing, not a directory, or unreadable
const EXIT_PATH: i32 = 2;
const EXIT_INTERNAL: i32 = 3;
const EXIT_INTERRUPTED: i32 = 130;

fn main() {
    let interrupted = Arc::new(AtomicBool::new(false));
    install_signal_handlers(&interrupted);

    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    // Handle -C directory flag
    if let Some(ref dir) = cli.directory {
        if let Err(e) = std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change to directory: {}", dir.display()))
        {
            eprintln!("Error: {e:#}");
            process::exit(EXIT_PATH);
        }
    }

    // Variables already set in the environment win over `.env`
    let dotenv = Path::new(".env");
    if dotenv.is_file() {
        if let Err(e) = dotenvy::from_path(dotenv) {
            eprintln!("Error: Failed to load {}: {e}", dotenv.display());
            process::exit(EXIT_CONFIG);
        }
        tracing::debug!("loaded .env");
    }

    let config = match Config::load(dirs::config_dir().as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(EXIT_CONFIG);
        },
    };

    let no_color = cli.no_color || no_color_requested(std::env::var_os("NO_COLOR"));
    let use_color = !no_color && should_use_color(config.defaults.use_color);

    let result = match cli.command {
        Commands::Rename { target, dry_run } => {
            let request = resolve_request(target, &config, env_var);
            rename::handle_rename(&request, dry_run, &interrupted, use_color, cli.quiet)
        },

        Commands::Plan { target } => {
            let request = resolve_request(target, &config, env_var);
            plan::handle_plan(&request, use_color, cli.quiet)
        },

        Commands::Version => {
            let version = VersionResult {
                name: "seqrename".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            };
            println!("{}", version.format_summary(use_color));
            Ok(())
        },

        Commands::Completions { shell, out_dir } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            generate_completions(shell, &mut cmd, "seqrename", &out_dir)
        },
    };

    // Partial work is kept; report it and exit with the conventional code
    if interrupted.load(Ordering::SeqCst) {
        eprintln!("Operation interrupted, remaining files were left untouched");
        process::exit(EXIT_INTERRUPTED);
    }

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(exit_code(&e));
        },
    }
}

fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<RenameError>().is_some() {
        EXIT_PATH
    } else {
        EXIT_INTERNAL
    }
}

/// `NO_COLOR` disables color when set to any non-empty value
fn no_color_requested(value: Option<OsString>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// First non-empty value among the named variables
fn first_env(env: &impl Fn(&str) -> Option<String>, names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| env(*name))
        .find(|value| !value.is_empty())
}

/// Build the request from arguments, environment and config, in that order of precedence.
///
/// Exits with [`EXIT_CONFIG`] before touching the filesystem when no directory
/// is available from any source or the prefix would leave the directory.
fn resolve_request(
    target: TargetArgs,
    config: &Config,
    env: impl Fn(&str) -> Option<String>,
) -> RenameRequest {
    let Some(directory) = target
        .dir
        .or_else(|| first_env(&env, &["SEQRENAME_DIR", "MY_DIRECTORY_PATH"]).map(PathBuf::from))
        .or_else(|| config.defaults.directory.clone())
    else {
        eprintln!("Error: no directory to rename");
        eprintln!("  Pass it as an argument, set SEQRENAME_DIR, or add to .seqrename/config.toml:");
        eprintln!("    [defaults]");
        eprintln!("    directory = \"/path/to/files\"");
        process::exit(EXIT_CONFIG);
    };

    let prefix = target
        .prefix
        .or_else(|| first_env(&env, &["SEQRENAME_PREFIX", "PREFIX"]))
        .or_else(|| config.defaults.prefix.clone());

    let request = match RenameRequest::new(directory, prefix.as_deref()) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(EXIT_CONFIG);
        },
    };

    if request.uses_default_prefix() && prefix.is_some() {
        tracing::warn!("prefix is empty, using '{}'", DEFAULT_PREFIX);
    }

    request
}

fn init_logging(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) | (false, 0) => "error",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn install_signal_handlers(interrupted: &Arc<AtomicBool>) {
    // Handle SIGINT (Ctrl-C)
    let interrupted_clone = Arc::clone(interrupted);
    if let Err(e) = ctrlc::set_handler(move || {
        eprintln!("\nReceived SIGINT. Finishing the current file...");
        interrupted_clone.store(true, Ordering::SeqCst);
    }) {
        eprintln!("Warning: failed to install SIGINT handler: {e}");
    }

    install_sigterm_handler(interrupted);
}

#[cfg(unix)]
fn install_sigterm_handler(interrupted: &Arc<AtomicBool>) {
    if let Err(e) =
        signal_hook::flag::register(signal_hook::consts::SIGTERM, Arc::clone(interrupted))
    {
        eprintln!("Warning: failed to install SIGTERM handler: {e}");
    }
}

#[cfg(not(unix))]
fn install_sigterm_handler(_interrupted: &Arc<AtomicBool>) {}

// Generate shell completions
pub fn generate_completions<G: clap_complete::Generator>(
    gen: G,
    cmd: &mut clap::Command,
    name: &str,
    out_dir: &Path,
) -> Result<()> {
    use clap_complete::generate_to;
    use std::fs;

    fs::create_dir_all(out_dir)?;
    let path = generate_to(gen, cmd, name, out_dir)?;
    println!("Generated completion file: {}", path.display());
    Ok(())
}
