//! Main entry point for the Arabic Slugs CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use arabic_slugs::cli::commands::{self, Commands};
use arabic_slugs::SlugSettings;

/// Arabic Slugs - friendly URL slugs for Arabic titles
#[derive(Parser, Debug)]
#[command(name = "arabic-slugs", version, about, long_about = None)]
struct Args {
    /// Settings file (toml or json); ARABIC_SLUGS__* variables override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("arabic_slugs={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = SlugSettings::load(args.config.as_deref())?;

    // Execute command
    match args.command {
        Some(Commands::Slug {
            title,
            method,
            provider,
            fallback,
        }) => {
            commands::handle_slug(settings, title, method, provider, fallback).await?;
        }
        Some(Commands::Validate {
            provider,
            key,
            endpoint,
        }) => {
            commands::handle_validate(settings, provider, key, endpoint).await?;
        }
        Some(Commands::Methods) => {
            commands::handle_methods(&settings)?;
        }
        None => {
            println!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}
