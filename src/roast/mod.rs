pub mod fallback;
pub mod level;
pub mod prompt;
pub mod response;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use rand::thread_rng;
use tracing::{debug, warn};

pub use level::RoastLevel;

use crate::api::client::HttpClient;
use crate::api::gemini::{self, DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::config::settings::Settings;
use crate::meme::{self, suggest::suggest, MemeRecord};
use crate::session::history::History;

/// Media file inlined into the request as base64 bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub path: PathBuf,
    pub mime_type: String,
    pub data: String,
}

impl Attachment {
    pub fn photo(path: &Path) -> Result<Self> {
        Self::load(path, image_mime_for(path)?)
    }

    pub fn audio(path: &Path) -> Result<Self> {
        Self::load(path, audio_mime_for(path)?)
    }

    fn load(path: &Path, mime_type: &'static str) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            mime_type: mime_type.to_string(),
            data: BASE64.encode(bytes),
        })
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}

fn image_mime_for(path: &Path) -> Result<&'static str> {
    match extension_of(path).as_str() {
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "png" => Ok("image/png"),
        "webp" => Ok("image/webp"),
        "gif" => Ok("image/gif"),
        other => Err(anyhow!("Unsupported photo format: .{}", other)),
    }
}

fn audio_mime_for(path: &Path) -> Result<&'static str> {
    match extension_of(path).as_str() {
        "wav" => Ok("audio/wav"),
        "mp3" => Ok("audio/mpeg"),
        "m4a" => Ok("audio/mp4"),
        "aac" => Ok("audio/aac"),
        "ogg" => Ok("audio/ogg"),
        "flac" => Ok("audio/flac"),
        other => Err(anyhow!("Unsupported audio format: .{}", other)),
    }
}

/// Everything the user submitted for one roast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoastInput {
    pub text: String,
    pub photo: Option<Attachment>,
    pub audio: Option<Attachment>,
    pub transcript: Option<String>,
}

impl RoastInput {
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
            && self.photo.is_none()
            && self.audio.is_none()
            && self.transcript.as_deref().map_or(true, |t| t.trim().is_empty())
    }

    /// Text the meme scorer sees: story plus transcript.
    fn scorable_text(&self) -> String {
        let mut s = self.text.clone();
        if let Some(t) = &self.transcript {
            s.push(' ');
            s.push_str(t);
        }
        s
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoastOutput {
    pub text_roast: String,
    pub audio_roast: String,
    pub meme: MemeChoice,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemeChoice {
    pub record: &'static MemeRecord,
    pub caption: String,
}

/// Roast service. Constructed explicitly, holds no global state; requires an
/// API key up front so a missing credential fails before any request.
#[derive(Debug)]
pub struct Roaster {
    http: HttpClient,
    api_key: String,
    model: String,
    base_url: String,
}

impl Roaster {
    pub fn new(settings: &Settings) -> Result<Self> {
        // Config first, then environment (same resolution order the config
        // docs promise).
        let api_key = settings
            .api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .ok_or_else(|| {
                anyhow!("API key is not set. Use `roast config set api-key ...` or set GEMINI_API_KEY")
            })?;
        let api_key = crate::utils::secrets::normalize_api_key(&api_key);

        Ok(Self {
            http: HttpClient::new()?,
            api_key,
            model: settings
                .model
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: settings
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    /// One roast request. Infallible by design: an external-call failure is
    /// substituted with the fixed per-level fallback, never surfaced as an
    /// error.
    pub async fn roast(
        &self,
        input: &RoastInput,
        level: RoastLevel,
        no_go: &[String],
        history: &History,
    ) -> RoastOutput {
        let request = prompt::build_request(input, level, no_go, history);
        debug!(model = %self.model, level = %level, "sending roast request");

        let text = match gemini::generate_content(
            &self.http.client,
            &self.base_url,
            &self.api_key,
            &self.model,
            &request,
        )
        .await
        {
            Ok(text) => text,
            Err(e) => {
                warn!("roast request failed, using fallback: {:#}", e);
                return fallback::output_for(level);
            }
        };

        self.resolve(&text, input, level)
    }

    /// Turn raw model text into a complete output, filling any hole the
    /// tolerant parser left.
    fn resolve(&self, text: &str, input: &RoastInput, level: RoastLevel) -> RoastOutput {
        let parsed = response::parse(text);

        let meme = self.pick_meme(parsed.meme, input, level);
        // A reply that was all labels can parse to an empty roast.
        let text_roast = if parsed.roast.trim().is_empty() {
            fallback::roast_for(level).to_string()
        } else {
            parsed.roast
        };
        let audio_roast = parsed.speech.unwrap_or_else(|| text_roast.clone());

        RoastOutput {
            text_roast,
            audio_roast,
            meme,
        }
    }

    fn pick_meme(
        &self,
        line: Option<response::MemeLine>,
        input: &RoastInput,
        level: RoastLevel,
    ) -> MemeChoice {
        let caption = line
            .as_ref()
            .filter(|l| !l.caption.is_empty())
            .map(|l| l.caption.clone())
            .unwrap_or_else(|| "No caption needed.".to_string());

        if let Some(record) = line.as_ref().and_then(|l| meme::find(&l.name)) {
            return MemeChoice { record, caption };
        }

        // No valid meme line: fall back to the content-based suggestion,
        // then to the default record.
        let record = suggest(&input.scorable_text(), level, &mut thread_rng())
            .first()
            .and_then(|name| meme::find(name))
            .unwrap_or_else(meme::fallback);
        MemeChoice { record, caption }
    }
}
