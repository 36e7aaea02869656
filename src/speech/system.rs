use anyhow::{Context, Result};
use tts::{Tts, Voice};

use crate::speech::{SpeechParams, SpeechPlayer, VoiceInfo};

/// Platform speech synthesizer (speech-dispatcher on Linux, AVFoundation on
/// macOS, WinRT on Windows).
pub struct SystemSpeech {
    tts: Tts,
}

impl SystemSpeech {
    /// Initialize the synthesizer and select a voice. Preference order:
    /// the configured voice by name, an English voice that sounds like a
    /// roast host, any English voice, then whatever the platform offers.
    pub fn new(preferred_voice: Option<&str>) -> Result<Self> {
        let mut tts = Tts::default().context("Failed to initialize speech synthesis")?;
        let voices = tts.voices().context("Failed to enumerate voices")?;
        if let Some(voice) = pick_voice(voices, preferred_voice) {
            tts.set_voice(&voice)
                .context("Failed to select speech voice")?;
        }
        Ok(Self { tts })
    }

    fn clamp_rate(&self, multiplier: f32) -> f32 {
        (self.tts.normal_rate() * multiplier)
            .clamp(self.tts.min_rate(), self.tts.max_rate())
    }

    fn clamp_pitch(&self, multiplier: f32) -> f32 {
        (self.tts.normal_pitch() * multiplier)
            .clamp(self.tts.min_pitch(), self.tts.max_pitch())
    }

    fn clamp_volume(&self, multiplier: f32) -> f32 {
        (self.tts.normal_volume() * multiplier)
            .clamp(self.tts.min_volume(), self.tts.max_volume())
    }
}

impl SpeechPlayer for SystemSpeech {
    fn speak(&mut self, text: &str, params: &SpeechParams) -> Result<()> {
        let rate = self.clamp_rate(params.rate);
        let pitch = self.clamp_pitch(params.pitch);
        let volume = self.clamp_volume(params.volume);
        self.tts.set_rate(rate)?;
        self.tts.set_pitch(pitch)?;
        self.tts.set_volume(volume)?;
        // interrupt=true: a new roast replaces whatever is still playing
        self.tts.speak(text, true)?;
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.tts.stop()?;
        Ok(())
    }

    fn is_speaking(&self) -> Result<bool> {
        Ok(self.tts.is_speaking()?)
    }

    fn voices(&self) -> Result<Vec<VoiceInfo>> {
        let voices = self.tts.voices()?;
        Ok(voices
            .into_iter()
            .map(|v| VoiceInfo {
                name: v.name(),
                language: v.language().to_string(),
            })
            .collect())
    }
}

fn pick_voice(mut voices: Vec<Voice>, preferred: Option<&str>) -> Option<Voice> {
    if let Some(name) = preferred {
        if let Some(i) = voices.iter().position(|v| v.name().eq_ignore_ascii_case(name)) {
            return Some(voices.swap_remove(i));
        }
    }
    if let Some(i) = voices.iter().position(|v| {
        let name = v.name().to_lowercase();
        is_english(v) && name.contains("male") && !name.contains("female")
    }) {
        return Some(voices.swap_remove(i));
    }
    if let Some(i) = voices.iter().position(is_english) {
        return Some(voices.swap_remove(i));
    }
    if voices.is_empty() {
        None
    } else {
        Some(voices.swap_remove(0))
    }
}

fn is_english(voice: &Voice) -> bool {
    voice.language().to_string().starts_with("en")
}
