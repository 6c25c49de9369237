//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;
use storybook_domain::ImageQuality;

/// CLI arguments for storybook
#[derive(Parser, Debug)]
#[command(name = "storybook")]
#[command(author, version, about = "An AI-illustrated bedtime story in your terminal")]
#[command(long_about = r#"
Storybook asks Gemini for a short children's story, shows it page by page,
draws an illustration for every page and can read each page aloud. A friendly
chat assistant answers questions about the story.

The API key is read from $API_KEY (or $GEMINI_API_KEY).

Configuration files are loaded from (in priority order):
1. STORYBOOK_* environment variables (e.g. STORYBOOK_GEMINI__STORY_MODEL)
2. --config <path>        Explicit config file
3. ./storybook.toml       Project-level config
4. ~/.config/storybook/config.toml   Global config

Example:
  storybook
  storybook --quality high --image-dir ./pictures
  storybook --chat
"#)]
pub struct Cli {
    /// Start directly in the chat assistant
    #[arg(short, long)]
    pub chat: bool,

    /// Illustration quality: low, medium, high (or 1k, 2k, 4k)
    #[arg(long, value_name = "TIER")]
    pub quality: Option<ImageQuality>,

    /// Directory to save page illustrations into
    #[arg(long, value_name = "DIR")]
    pub image_dir: Option<PathBuf>,

    /// Do not request illustrations
    #[arg(long)]
    pub no_images: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
