use crate::meme;
use crate::roast::{MemeChoice, RoastLevel, RoastOutput};

/// Canned roast substituted when the API call fails. One fixed string per
/// level so the user always gets a result.
pub fn roast_for(level: RoastLevel) -> &'static str {
    match level {
        RoastLevel::Light => "Well, bless your heart. You do you, I guess.",
        RoastLevel::Medium => "Your life choices are giving me second-hand embarrassment.",
        RoastLevel::Brutal => "If stupidity was a superpower, you'd be unstoppable.",
    }
}

pub fn output_for(level: RoastLevel) -> RoastOutput {
    let text = roast_for(level).to_string();
    RoastOutput {
        audio_roast: text.clone(),
        text_roast: text,
        meme: MemeChoice {
            record: meme::fallback(),
            caption: "Even the AI gave up on you.".to_string(),
        },
    }
}
