//! CLI entrypoint for Storybook
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use storybook_application::{
    ConversationLogger, NoConversationLogger, NoSpeech, Narrator, SpeechPort, StorybookGateway,
};
use storybook_infrastructure::{
    CommandSpeech, ConfigLoader, FileConfig, FileSpeechConfig, GeminiGateway,
    JsonlConversationLogger, resolve_api_key,
};
use storybook_presentation::{ChatRepl, Cli, ReplConfig, StoryRepl};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())?
    };

    info!("Starting Storybook");

    if !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    // A missing API key is the one fatal error
    let api_key = resolve_api_key(&config.gemini)?;
    let gemini = GeminiGateway::new(&config.gemini.client_config(api_key))
        .context("failed to create Gemini client")?;

    let gateway = Arc::new(
        StorybookGateway::new(Arc::new(gemini), config.to_gateway_config())
            .with_conversation_logger(conversation_logger(&config)),
    );

    let repl_config = repl_config(&cli, &config);

    if cli.chat {
        let mut rl = rustyline::DefaultEditor::new()?;
        ChatRepl::new(gateway)
            .with_progress(repl_config.show_progress)
            .run(&mut rl)
            .await?;
        return Ok(());
    }

    let narrator = Arc::new(Narrator::new(speech(&config.speech)));
    StoryRepl::new(gateway, narrator, repl_config).run().await?;

    Ok(())
}

fn repl_config(cli: &Cli, config: &FileConfig) -> ReplConfig {
    ReplConfig {
        show_progress: config.output.show_progress && !cli.quiet,
        history_file: config.repl.history_file.as_ref().map(Into::into),
        images_enabled: config.image.enabled && !cli.no_images,
        image_dir: cli.image_dir.clone().or_else(|| config.image.output_dir.clone()),
        quality: cli.quality.unwrap_or(config.image.default_quality),
    }
}

fn conversation_logger(config: &FileConfig) -> Arc<dyn ConversationLogger> {
    let Some(path) = &config.logging.conversation_log else {
        return Arc::new(NoConversationLogger);
    };

    match JsonlConversationLogger::open(path) {
        Ok(logger) => {
            info!("Conversation log: {}", logger.path().display());
            Arc::new(logger)
        }
        Err(e) => {
            warn!("Could not open conversation log {}: {}", path.display(), e);
            Arc::new(NoConversationLogger)
        }
    }
}

fn speech(config: &FileSpeechConfig) -> Arc<dyn SpeechPort> {
    if !config.enabled {
        return Arc::new(NoSpeech);
    }

    match &config.command {
        Some(command) => Arc::new(CommandSpeech::with_command(command, config.args.clone())),
        None => Arc::new(CommandSpeech::detect()),
    }
}
