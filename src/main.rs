use clap::{Parser, Subcommand};
use rosetta_core::{
    command::parse_translate_args,
    config::{Config, ENV_DISCORD_TOKEN},
    error::RosettaError,
    message::TranslationRequest,
    traits::Translator,
};
use rosetta_translate::{GoogleTranslator, ServiceAccountKey};
use std::sync::Arc;
use tracing::{debug, info};

/// Exit code for missing or invalid startup configuration.
const EXIT_CONFIG: i32 = 2;

#[derive(Parser)]
#[command(
    name = "rosetta",
    version,
    about = "Rosetta — Discord translation bot"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect to Discord and serve translations.
    Start,
    /// Check configuration and credentials without connecting.
    Status,
    /// Translate once from the command line, e.g. `rosetta translate fr hello`.
    Translate {
        /// Optional 2-letter target language followed by the text.
        #[arg(trailing_var_arg = true)]
        args: Vec<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run(cli).await {
        match err.downcast_ref::<RosettaError>() {
            Some(RosettaError::Config(_)) => {
                eprintln!("configuration error: {err}");
                std::process::exit(EXIT_CONFIG);
            }
            _ => {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Start => {
            let config = Config::from_env()?;
            let translator = GoogleTranslator::from_credentials(&config.credentials)?;

            info!(
                "starting with prefix '{}' and backend {}",
                config.command_prefix,
                translator.name()
            );
            rosetta_discord::run(config, Arc::new(translator)).await?;
        }
        Commands::Status => {
            println!("Rosetta — Status Check\n");

            let token_set = std::env::var(ENV_DISCORD_TOKEN)
                .map(|v| !v.trim().is_empty())
                .unwrap_or(false);
            println!(
                "  discord token: {}",
                if token_set { "set" } else { "MISSING" }
            );

            match Config::from_env() {
                Ok(config) => {
                    println!("  command prefix: {}", config.command_prefix);
                    match ServiceAccountKey::load(&config.credentials) {
                        Ok(key) => println!("  google credentials: {}", key.client_email),
                        Err(e) => println!("  google credentials: INVALID ({e})"),
                    }
                }
                Err(e) => println!("  configuration: {e}"),
            }
        }
        Commands::Translate { args } => {
            if args.is_empty() {
                anyhow::bail!("no text provided. Usage: rosetta translate [language] <text>");
            }

            let parsed = parse_translate_args(&args.join(" "))
                .map_err(|e| anyhow::anyhow!("{e}. Usage: rosetta translate [language] <text>"))?;

            let config = Config::from_env()?;
            let translator = GoogleTranslator::from_credentials(&config.credentials)?;

            let request = TranslationRequest::new(parsed.text, parsed.target, "cli");
            let translation = translator.translate(&request).await?;
            if let Some(source) = &translation.detected_source {
                debug!("detected source language: {source}");
            }
            println!("{}", translation.text);
        }
    }

    Ok(())
}
