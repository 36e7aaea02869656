use rand::Rng;

use crate::meme::{MemeRecord, MEMES};
use crate::roast::RoastLevel;

/// Upper bound of the tie-breaking jitter. Integer score differences always
/// dominate it, so jitter only reorders equal-scoring records.
pub const JITTER: f32 = 0.5;

const MAX_SUGGESTIONS: usize = 5;

/// Rank meme names by thematic relevance to `content`.
///
/// Pure over the static table; the caller supplies the random source so the
/// jitter is deterministic under a fixed seed. Records that match nothing in
/// the content are excluded, so empty or unrelated input yields an empty
/// list and the caller falls back to the default record.
pub fn suggest<R: Rng>(content: &str, level: RoastLevel, rng: &mut R) -> Vec<&'static str> {
    let content = content.to_lowercase();

    let mut scored: Vec<(&'static str, f32)> = MEMES
        .iter()
        .filter_map(|meme| {
            let base = content_score(meme, &content);
            if base <= 0 {
                return None;
            }
            let total = (base + level_bias(meme.name, level)) as f32 + rng.gen::<f32>() * JITTER;
            Some((meme.name, total))
        })
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(MAX_SUGGESTIONS);
    scored.into_iter().map(|(name, _)| name).collect()
}

/// +2 per use-case phrase found in the content, +1 per keyword.
fn content_score(meme: &MemeRecord, content: &str) -> i32 {
    let mut score = 0;
    for use_case in meme.use_cases {
        if content.contains(use_case) {
            score += 2;
        }
    }
    for keyword in keywords_for(meme.name) {
        if content.contains(keyword) {
            score += 1;
        }
    }
    score
}

/// Brutal leans on mocking or derisive records, Light on contemplative or
/// confused ones. Applied only to records that already matched the content.
fn level_bias(name: &str, level: RoastLevel) -> i32 {
    match level {
        RoastLevel::Brutal
            if name.contains("laughing") || name.contains("crying") || name.contains("side_eye") =>
        {
            1
        }
        RoastLevel::Light
            if name.contains("think") || name.contains("blinking") || name.contains("what") =>
        {
            1
        }
        _ => 0,
    }
}

/// Denser keyword list per meme, on top of the table's use-case phrases.
fn keywords_for(name: &str) -> &'static [&'static str] {
    match name {
        "crying" => &["sad", "cry", "tears", "pathetic", "depressing", "miserable"],
        "side_eye" => &["suspicious", "doubt", "judge", "side eye", "questionable"],
        "blinking_meme" => &["confused", "what", "huh", "disbelief", "processing"],
        "cat_laughing_at_you" => &["laugh", "funny", "ridiculous", "joke", "mocking"],
        "chill_guys" => &["calm", "relax", "overreact", "dramatic", "chill"],
        "no_god_please_no" => &["desperate", "please", "no", "begging", "despair"],
        "this_is_fine" => &["fine", "okay", "denial", "ignore", "pretend"],
        "man_what" => &["what", "confused", "disbelief", "man what"],
        "sponge_bob_chicken" => &["afraid", "scared", "chicken", "coward", "back down"],
        "what" => &["what", "confused", "disbelief", "huh"],
        "think" => &["think", "thought", "contemplate", "philosophy", "deep"],
        "doge_side_eye" => &["suspicious", "cute", "doge", "side eye", "judgment"],
        _ => &[],
    }
}
