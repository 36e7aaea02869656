use crate::api::models::{Blob, Content, GenerateRequest, GenerationConfig, Part};
use crate::meme::MEMES;
use crate::roast::{RoastInput, RoastLevel};
use crate::session::history::History;

/// Entries of prior history carried into the prompt. Older ones are dropped
/// to keep the request bounded.
const HISTORY_WINDOW: usize = 6;

pub fn build_request(
    input: &RoastInput,
    level: RoastLevel,
    no_go: &[String],
    history: &History,
) -> GenerateRequest {
    let mut parts = vec![Part::Text {
        text: user_text(input, history),
    }];
    if let Some(photo) = &input.photo {
        parts.push(Part::InlineData {
            inline_data: Blob {
                mime_type: photo.mime_type.clone(),
                data: photo.data.clone(),
            },
        });
    }
    if let Some(audio) = &input.audio {
        parts.push(Part::InlineData {
            inline_data: Blob {
                mime_type: audio.mime_type.clone(),
                data: audio.data.clone(),
            },
        });
    }

    GenerateRequest {
        system_instruction: Some(Content {
            role: None,
            parts: vec![Part::Text {
                text: system_instruction(level, no_go),
            }],
        }),
        contents: vec![Content {
            role: Some("user".to_string()),
            parts,
        }],
        generation_config: Some(GenerationConfig {
            temperature: Some(0.9),
            max_output_tokens: Some(512),
        }),
    }
}

pub fn system_instruction(level: RoastLevel, no_go: &[String]) -> String {
    let mut out = String::from(
        "You are a stand-up comedian hired to roast whatever the user shares: \
         their story, their photo, their voice. Be funny, be specific, never \
         be genuinely cruel about things people cannot change.\n\n",
    );

    out.push_str(&format!("Roast intensity: {}. {}\n", level, level_directive(level)));

    if !no_go.is_empty() {
        out.push_str(&format!(
            "Strictly off-limits topics, never mention them: {}.\n",
            no_go.join(", ")
        ));
    }

    out.push_str("\nAvailable memes:\n");
    for meme in MEMES {
        out.push_str(&format!("{}: {}\n", meme.name, meme.description));
    }

    out.push_str(
        "\nChoose the most appropriate meme for the roast and give it a short, \
         funny caption (max 50 characters).\n\
         Reply in exactly this format:\n\
         Roast: <the roast>\n\
         Speech: <a shorter roast suited to being read aloud>\n\
         Meme: <meme_name>, Caption: <caption>\n",
    );

    out
}

fn level_directive(level: RoastLevel) -> &'static str {
    match level {
        RoastLevel::Light => "Keep it gentle and playful, more tease than burn.",
        RoastLevel::Medium => "Sting a little. Sarcasm welcome, no mercy required.",
        RoastLevel::Brutal => "Scorched earth. Hold nothing back short of the off-limits list.",
    }
}

fn user_text(input: &RoastInput, history: &History) -> String {
    let mut out = String::new();

    if let Some(digest) = history_digest(history) {
        out.push_str(&digest);
        out.push('\n');
    }

    if !input.text.trim().is_empty() {
        out.push_str(&format!("My story: {}\n", input.text.trim()));
    }
    if let Some(transcript) = &input.transcript {
        if !transcript.trim().is_empty() {
            out.push_str(&format!("Transcript of my audio: {}\n", transcript.trim()));
        }
    }
    if input.photo.is_some() {
        out.push_str("I attached a photo of myself. Roast that too.\n");
    }
    if input.audio.is_some() {
        out.push_str("I attached an audio clip. Roast how I sound.\n");
    }

    if out.is_empty() {
        out.push_str("I gave you nothing to work with. Roast that.\n");
    }
    out
}

/// Serialize prior session history so repeated material gets called out
/// instead of repeated.
fn history_digest(history: &History) -> Option<String> {
    if history.is_empty() {
        return None;
    }
    let mut digest = String::from("Earlier in this session you already roasted:\n");
    for entry in history.iter().rev().take(HISTORY_WINDOW).rev() {
        let input = if entry.input.text.trim().is_empty() {
            "(non-text input)".to_string()
        } else {
            entry.input.text.trim().to_string()
        };
        digest.push_str(&format!("- \"{}\" -> {}\n", input, entry.output.text_roast));
    }
    digest.push_str("Do not repeat yourself.\n");
    Some(digest)
}
