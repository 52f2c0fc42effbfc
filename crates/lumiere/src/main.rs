// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lumiere - a personalized Christmas gift greeting.
//!
//! This is the binary entry point: configuration, tracing, and the
//! `play`, `check`, and `config` commands.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod render;
mod shell;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use colored::Colorize;
use lumiere_catalog::CatalogResolver;
use lumiere_config::LumiereConfig;
use lumiere_core::{GiftGenerator, GiftResolver, LumiereError};
use lumiere_gemini::GeminiGenerator;
use tracing::info;

/// Lumiere - a personalized Christmas gift greeting.
#[derive(Parser, Debug)]
#[command(name = "lumiere", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play the greeting in the terminal.
    Play {
        /// Greet this visitor by name (like `?user=` on the web).
        #[arg(long)]
        user: Option<String>,
        /// Take the visitor name from a URL or query string's `user` parameter.
        #[arg(long, conflicts_with = "user")]
        url: Option<String>,
    },
    /// Resolve a single name and print the gift as JSON.
    Check {
        /// Visitor name.
        name: String,
    },
    /// Print the effective configuration (API key redacted).
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup
    let loaded = match &cli.config {
        Some(path) => lumiere_config::load_and_validate_path(path),
        None => lumiere_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            lumiere_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.greeting.log_level);

    let command = cli.command.unwrap_or(Commands::Play {
        user: None,
        url: None,
    });

    let result = match command {
        Commands::Play { user, url } => {
            let url_user = user
                .filter(|u| !u.trim().is_empty())
                .or_else(|| url.as_deref().and_then(lumiere_flow::user_from_url));
            shell::run_play(&config, url_user).await
        }
        Commands::Check { name } => run_check(&config, &name).await,
        Commands::Config => run_config(&config),
    };

    if let Err(e) = result {
        eprintln!("{}: {e}", "error".red());
        std::process::exit(1);
    }
}

/// Catalog-first resolver, with Gemini generation when an API key is available.
pub(crate) fn build_resolver(
    config: &LumiereConfig,
) -> Result<Arc<dyn GiftResolver>, LumiereError> {
    let generator = GeminiGenerator::from_config(config)?
        .map(|g| Arc::new(g) as Arc<dyn GiftGenerator>);
    let resolver = CatalogResolver::new(generator);
    info!(
        generator = resolver.generator_name().unwrap_or("none"),
        "gift resolver ready"
    );
    Ok(Arc::new(resolver))
}

async fn run_check(config: &LumiereConfig, name: &str) -> Result<(), LumiereError> {
    if name.trim().is_empty() {
        return Err(LumiereError::Config("name must not be blank".into()));
    }
    let resolver = build_resolver(config)?;
    let gift = resolver.resolve(name).await?;
    let json = serde_json::to_string_pretty(&gift)
        .map_err(|e| LumiereError::Internal(format!("failed to serialize gift: {e}")))?;
    println!("{json}");
    Ok(())
}

fn run_config(config: &LumiereConfig) -> Result<(), LumiereError> {
    let toml = config
        .to_redacted_toml()
        .map_err(|e| LumiereError::Internal(format!("failed to serialize config: {e}")))?;
    print!("{toml}");
    Ok(())
}

/// Logs go to stderr so they never interleave with rendered screens.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lumiere={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();
}
