use std::{fs, path::Path, path::PathBuf};

use anyhow::{Context, Result};
use dirs::home_dir;
use serde::{Deserialize, Serialize};

use crate::roast::RoastLevel;

const APP_DIR_NAME: &str = ".roast_cli";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Gemini API key; falls back to the GEMINI_API_KEY env var when unset
    pub api_key: Option<String>,
    /// Model override (default: gemini-2.0-flash)
    pub model: Option<String>,
    /// Base URL override for proxies / tests
    pub base_url: Option<String>,
    /// Default roast intensity
    pub level: RoastLevel,
    /// Preferred speech-synthesis voice name
    pub voice: Option<String>,
    /// Read roasts aloud without passing --speak every time
    pub speak: bool,
    /// Topics the roast must never touch
    pub no_go_topics: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: None,
            base_url: None,
            level: RoastLevel::Medium,
            voice: None,
            speak: false,
            no_go_topics: Vec::new(),
        }
    }
}

impl Settings {
    pub fn load_with(explicit: Option<&Path>) -> Result<Self> {
        let path = resolve_config_path(explicit)?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let value: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid config TOML at {}", path.display()))?;
        Ok(value)
    }

    pub fn save_with(&self, explicit: Option<&Path>) -> Result<()> {
        let (dir, path) = resolve_config_dir_and_file(explicit)?;
        if !dir.exists() {
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create config directory at {}", dir.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config at {}", path.display()))?;
        Ok(())
    }

    pub fn load() -> Result<Self> { Self::load_with(None) }
    pub fn save(&self) -> Result<()> { self.save_with(None) }

    pub fn init(explicit: Option<&Path>, force: bool) -> Result<()> {
        let path = resolve_config_path(explicit)?;
        if path.exists() && !force {
            anyhow::bail!("Config already exists at {} (use --force to overwrite)", path.display());
        }
        let default = Self::default();
        default.save_with(explicit)
    }
}

fn config_dir_path() -> Result<PathBuf> {
    let home = home_dir().context("Cannot resolve home directory")?;
    Ok(home.join(APP_DIR_NAME))
}

fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir_path()?.join(CONFIG_FILE_NAME))
}

fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(p) = explicit { return Ok(p.to_path_buf()); }
    config_file_path()
}

fn resolve_config_dir_and_file(explicit: Option<&Path>) -> Result<(PathBuf, PathBuf)> {
    if let Some(p) = explicit {
        let dir = p.parent().unwrap_or_else(|| Path::new("."));
        return Ok((dir.to_path_buf(), p.to_path_buf()));
    }
    let dir = config_dir_path()?;
    Ok((dir.clone(), dir.join(CONFIG_FILE_NAME)))
}
