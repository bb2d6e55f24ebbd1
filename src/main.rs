//! Trie Speller - Main entrypoint.
//!
//! Loads configuration, initializes logging, seeds the dictionary and hands
//! control to the interactive shell or to one of the one-shot subcommands.

use std::io;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use trie_speller_lib::config::{self, ConfigResult, LogConfig, SpellerConfig};
use trie_speller_lib::error::{
    get_error_reporting, set_error_reporter, ErrorContext, SpellerError, SpellerResult,
    TracingErrorReporter,
};
use trie_speller_lib::shell::Shell;

/// Command line arguments for the Trie Speller.
#[derive(Parser, Debug)]
#[clap(name = "Trie Speller", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Start the interactive menu shell
    Shell,

    /// Spell check the given words against the seeded dictionary
    Check {
        /// Words to check
        #[clap(required = true)]
        words: Vec<String>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr so
/// they never interleave with shell output.
fn init_logging(log: &LogConfig) -> SpellerResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| SpellerError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Unwraps a loaded configuration, reporting the error and exiting on failure.
fn config_or_exit(loaded: ConfigResult<SpellerConfig>) -> SpellerConfig {
    match loaded {
        Ok(config) => config,
        Err(e) => {
            get_error_reporting().report(ErrorContext::new(e.into(), "config"));
            process::exit(1);
        }
    }
}

/// Main entry point for the application.
fn main() -> SpellerResult<()> {
    let args = Args::parse();

    let loader = config::ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let loaded = loader.load();

    // Logging comes up with the configured level when the file is usable.
    let log_config = loaded.as_ref().map(|c| c.log.clone()).unwrap_or_default();
    init_logging(&log_config)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    match args.command.unwrap_or(Command::Shell) {
        Command::Shell => {
            config::init_global_config(config_or_exit(loaded));
            let global = config::get_global_config();
            let config = global.get();

            let trie = config.dictionary.build_trie()?;
            info!(words = trie.len(), "Starting shell");

            let stdin = io::stdin();
            let mut shell = Shell::new(trie, stdin.lock(), io::stdout(), config.shell.clone());
            if let Err(e) = shell.run() {
                get_error_reporting().report(ErrorContext::new(e, "shell"));
                process::exit(1);
            }

            info!("Shell exited");
            Ok(())
        }
        Command::Check { words } => {
            let config = config_or_exit(loaded);
            let trie = config.dictionary.build_trie()?;

            let mistakes = trie.check_spelling(&words.join(" "));
            for mistake in &mistakes {
                println!("Spelling mistake {mistake}");
            }

            if !mistakes.is_empty() {
                process::exit(1);
            }
            Ok(())
        }
        Command::Validate => {
            config_or_exit(loaded);
            info!("Configuration validated successfully");
            println!("Configuration is valid");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = SpellerConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| SpellerError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
