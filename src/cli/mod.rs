// CLI interface
pub mod commands;

use crate::config::Config;
use crate::error::Result;
use crate::store::{FileBackend, MemoryBackend, Store};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "ec2prefs")]
#[command(about = "Manage AWS EC2 credential profiles from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Profiles file to use instead of the configured one
    #[arg(long, global = true, env = "EC2PREFS_PROFILES_FILE")]
    pub profiles_file: Option<PathBuf>,

    /// Keep profiles in memory only; nothing is written to disk
    #[arg(long)]
    pub ephemeral: bool,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List stored profiles
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Generate shell completion scripts
    ///
    /// INSTALLATION:
    ///
    /// Bash:
    ///   eval "$(ec2prefs completions bash)"    # Add to ~/.bashrc
    ///
    /// Zsh:
    ///   eval "$(ec2prefs completions zsh)"     # Add to ~/.zshrc
    ///
    /// Fish:
    ///   ec2prefs completions fish > ~/.config/fish/completions/ec2prefs.fish
    Completions {
        /// Shell type to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Create a sample config file
    Init,
    /// Show the config file location and status
    Path,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

/// Profiles file from the command line, falling back to the config
fn resolve_profiles_file(args_path: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    match args_path {
        Some(path) => Ok(path),
        None => config.profiles_file(),
    }
}

pub async fn execute(args: Cli) -> Result<()> {
    match args.command {
        Some(Commands::List { format }) => {
            let config = Config::load()?;
            let path = resolve_profiles_file(args.profiles_file, &config)?;
            commands::list::execute(&FileBackend::new(path), format)
        }
        Some(Commands::Config { command }) => commands::config::execute(command),
        Some(Commands::Completions { shell }) => {
            commands::completions::execute(shell);
            Ok(())
        }
        None => {
            // No command specified, launch TUI
            use crate::ui::App;
            let config = Config::load()?;
            let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
            let user = Some(config.user());

            if args.ephemeral {
                tracing::info!("Running with in-memory profiles");
                let store = Store::new(MemoryBackend::new(), user);
                App::new(store, tick_rate).run().await
            } else {
                let path = resolve_profiles_file(args.profiles_file, &config)?;
                tracing::info!("Using profiles file: {}", path.display());
                let store = Store::new(FileBackend::new(path), user);
                App::new(store, tick_rate).run().await
            }
        }
    }
}
