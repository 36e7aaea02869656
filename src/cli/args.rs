use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::roast::RoastLevel;

#[derive(Parser, Debug)]
#[command(name = "roast", version, about = "Get your life roasted by an AI", propagate_version = true)]
pub struct Cli {
    /// What to get roasted about
    pub text: Vec<String>,

    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub runtime: RuntimeArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// True when the bare invocation carries something to roast. A transcript
    /// alone qualifies, same as text or media.
    pub fn has_roast_input(&self) -> bool {
        !self.text.is_empty()
            || self.input.photo.is_some()
            || self.input.audio.is_some()
            || self.input.transcript.is_some()
    }
}

#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// Photo to roast (jpg/png/webp/gif)
    #[arg(long, global = true)]
    pub photo: Option<PathBuf>,

    /// Audio clip to roast (wav/mp3/m4a/aac/ogg/flac)
    #[arg(long, global = true)]
    pub audio: Option<PathBuf>,

    /// Transcript of the audio clip, if you already have one
    #[arg(long, global = true)]
    pub transcript: Option<String>,

    /// Roast intensity
    #[arg(long, value_enum, global = true)]
    pub level: Option<RoastLevel>,

    /// Comma-separated topics the roast must never touch
    #[arg(long = "no-go", global = true)]
    pub no_go: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct RuntimeArgs {
    /// Override model for this run
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Read the roast aloud
    #[arg(long, global = true)]
    pub speak: bool,

    /// Speech voice name (see `roast voices`)
    #[arg(long, global = true)]
    pub voice: Option<String>,

    /// Explicit config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive roast session; history accumulates until you quit
    Interactive,

    /// Config management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// List the curated meme table
    Memes,

    /// List available speech-synthesis voices
    Voices,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Initialize default config file (~/.roast_cli/config.toml)
    Init {
        /// Overwrite if exists
        #[arg(long)]
        force: bool,
    },
    Set { key: String, value: String },
    List,
}
