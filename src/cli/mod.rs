//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod say;

#[cfg(test)]
mod tests;

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::say::run_say;
use crate::core::config::data::{path_display, ENDPOINT_ENV_VAR};
use crate::core::config::{Config, ConfigKey};
use crate::logging::init_debug_log;
use crate::ui::chat_loop::{run_chat, ChatOptions};
use crate::ui::layout::Labels;
use crate::ui::theme::Theme;
use crate::utils::url::validate_endpoint;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_DESCRIBE"),
    ")"
);

#[derive(Parser)]
#[command(name = "chatline")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "A terminal chat widget for a JSON chat endpoint")]
#[command(
    long_about = "Chatline is a full-screen terminal chat widget. Each message you send is \
POSTed as {\"message\": ...} to <endpoint>/api/chat, and the reply is shown below it.\n\n\
Environment Variables:\n\
  CHATLINE_ENDPOINT   Endpoint base URL (overridden by --endpoint)\n\
  CHATLINE_LOG        Log filter for --debug-log (default: chatline=debug)\n\n\
Controls:\n\
  Type              Enter your message in the input field\n\
  Enter             Send the message\n\
  Up/Down/PgUp/PgDn Scroll through the conversation\n\
  Mouse wheel       Scroll through the conversation\n\
  Ctrl+Home         Jump to the first message\n\
  Ctrl+End          Jump back to the newest message\n\
  Esc or Ctrl+C     Quit"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the chat endpoint
    #[arg(short = 'e', long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Append diagnostic logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub debug_log: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat interface (default)
    Chat,
    /// Send one message and print the reply
    Say {
        /// Message to send (multiple words are joined with spaces)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        prompt: Vec<String>,
    },
    /// Set configuration values
    Set {
        /// Configuration key to set
        key: String,
        /// Value to set for the key (can be multiple words for labels)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset
        key: String,
    },
    /// Print the current configuration
    Config,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if let Some(path) = args.debug_log.as_deref() {
        init_debug_log(path)?;
    }

    match args.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let config = Config::load()?;
            let endpoint = resolve_endpoint(&config, args.endpoint.as_deref());
            run_chat(ChatOptions {
                endpoint,
                theme: Theme::from_name(config.theme_name()),
                labels: labels_from(&config),
            })
            .await
        }
        Commands::Say { prompt } => {
            let config = Config::load()?;
            let endpoint = resolve_endpoint(&config, args.endpoint.as_deref());
            run_say(prompt, &endpoint).await
        }
        Commands::Set { key, value } => {
            let mut config = Config::load()?;
            if value.is_empty() {
                config.print_all();
                return Ok(());
            }
            let value = value.join(" ");
            match set_config_value(&mut config, &key, &value) {
                Ok(key) => {
                    config.save()?;
                    println!("✅ Set {key} to: {}", config.get(key).unwrap_or(value.as_str()));
                    Ok(())
                }
                Err(e) => {
                    eprintln!("❌ {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Unset { key } => {
            let key = match key.parse::<ConfigKey>() {
                Ok(key) => key,
                Err(e) => {
                    eprintln!("❌ {e}");
                    std::process::exit(1);
                }
            };
            let mut config = Config::load()?;
            config.unset(key);
            config.save()?;
            println!("✅ Unset {key}");
            Ok(())
        }
        Commands::Config => {
            let config = Config::load()?;
            println!("Config file: {}", path_display(Config::get_config_path()?));
            config.print_all();
            Ok(())
        }
    }
}

/// Resolve the endpoint, exiting with a message when it is not a usable URL.
fn resolve_endpoint(config: &Config, flag: Option<&str>) -> String {
    let env = std::env::var(ENDPOINT_ENV_VAR).ok();
    let endpoint = config.resolve_endpoint(flag, env.as_deref());
    if let Err(reason) = validate_endpoint(&endpoint) {
        eprintln!("❌ Invalid endpoint '{endpoint}': {reason}");
        std::process::exit(1);
    }
    endpoint
}

fn labels_from(config: &Config) -> Labels {
    Labels {
        user: config.user_label().to_string(),
        agent: config.agent_label().to_string(),
    }
}

fn set_config_value(
    config: &mut Config,
    key: &str,
    value: &str,
) -> Result<ConfigKey, Box<dyn Error>> {
    let key = key.parse::<ConfigKey>()?;
    config.set(key, value)?;
    Ok(key)
}
