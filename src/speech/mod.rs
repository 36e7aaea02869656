#[cfg(feature = "speech")]
mod system;
#[cfg(feature = "speech")]
pub use system::SystemSpeech;

use anyhow::Result;

use crate::roast::RoastLevel;

/// Voice parameters relative to the platform's normal values: a rate of 1.1
/// means 10% faster than the synthesizer default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeechParams {
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl SpeechParams {
    /// Brutal roasts come out faster, lower and louder; light ones slower
    /// and higher.
    pub fn for_level(level: RoastLevel) -> Self {
        match level {
            RoastLevel::Light => Self { rate: 0.9, pitch: 1.1, volume: 0.8 },
            RoastLevel::Medium => Self { rate: 1.0, pitch: 1.0, volume: 0.9 },
            RoastLevel::Brutal => Self { rate: 1.1, pitch: 0.9, volume: 1.0 },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceInfo {
    pub name: String,
    pub language: String,
}

/// Injectable playback service over the platform speech synthesizer.
/// Constructed explicitly and passed to callers; no process-wide singleton.
pub trait SpeechPlayer {
    fn speak(&mut self, text: &str, params: &SpeechParams) -> Result<()>;
    fn stop(&mut self) -> Result<()>;
    fn is_speaking(&self) -> Result<bool>;
    fn voices(&self) -> Result<Vec<VoiceInfo>>;
}

/// Start playback and poll until the utterance finishes.
pub async fn speak_blocking(
    player: &mut dyn SpeechPlayer,
    text: &str,
    params: &SpeechParams,
) -> Result<()> {
    player.speak(text, params)?;
    while player.is_speaking()? {
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    }
    Ok(())
}
