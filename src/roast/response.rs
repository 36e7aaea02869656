use regex::Regex;

/// Structured view of the model reply. The template asks for three labeled
/// sections; any of them may be missing or mangled, so every field degrades
/// independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRoast {
    /// Primary roast text. When no label is present this is the whole reply.
    pub roast: String,
    /// Shorter variant meant for speech playback.
    pub speech: Option<String>,
    pub meme: Option<MemeLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemeLine {
    pub name: String,
    pub caption: String,
}

#[derive(Clone, Copy, PartialEq)]
enum Section {
    None,
    Roast,
    Speech,
}

/// Tolerant parse of the three expected labels.
///
/// Unlabeled lines continue the section opened above them; a reply with no
/// labels at all becomes the primary roast verbatim.
pub fn parse(text: &str) -> ParsedRoast {
    // Models tend to echo the placeholder brackets from the prompt, so the
    // name group accepts and later strips them.
    let meme_re = Regex::new(
        r"(?i)^meme\s*:\s*\[?([a-z0-9_\- ]+?)\]?\s*(?:,\s*caption\s*:\s*(.*))?$",
    )
    .expect("valid regex");

    let mut roast_lines: Vec<&str> = Vec::new();
    let mut speech_lines: Vec<&str> = Vec::new();
    let mut stray_lines: Vec<&str> = Vec::new();
    let mut meme = None;
    let mut section = Section::None;
    let mut saw_label = false;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let lower = line.to_lowercase();
        if let Some(rest) = strip_label(line, &lower, "roast:") {
            section = Section::Roast;
            saw_label = true;
            if !rest.is_empty() {
                roast_lines.push(rest);
            }
        } else if let Some(rest) = strip_label(line, &lower, "speech:") {
            section = Section::Speech;
            saw_label = true;
            if !rest.is_empty() {
                speech_lines.push(rest);
            }
        } else if let Some(caps) = meme_re.captures(line) {
            saw_label = true;
            section = Section::None;
            let name = caps
                .get(1)
                .map(|m| m.as_str().trim().to_lowercase())
                .unwrap_or_default();
            let caption = caps
                .get(2)
                .map(|m| trim_quotes(m.as_str()))
                .unwrap_or_default();
            if !name.is_empty() {
                meme = Some(MemeLine { name, caption });
            }
        } else {
            match section {
                Section::Roast => roast_lines.push(line),
                Section::Speech => speech_lines.push(line),
                Section::None => stray_lines.push(line),
            }
        }
    }

    let speech = if speech_lines.is_empty() {
        None
    } else {
        Some(speech_lines.join(" "))
    };

    let roast = if saw_label && !roast_lines.is_empty() {
        roast_lines.join(" ")
    } else if let Some(s) = &speech {
        // Labeled reply missing its Roast section: reuse the speech text
        // rather than echoing the labels back at the user.
        s.clone()
    } else if saw_label {
        // Only a meme line (or empty labels) arrived. Keep whatever stray
        // prose there was; never echo the consumed lines back. May be
        // empty, the caller substitutes its fallback then.
        stray_lines.join(" ")
    } else {
        // No labels at all: the whole reply is the roast.
        text.trim().to_string()
    };

    ParsedRoast { roast, speech, meme }
}

fn strip_label<'a>(line: &'a str, lower: &str, label: &str) -> Option<&'a str> {
    if lower.starts_with(label) {
        Some(line[label.len()..].trim())
    } else {
        None
    }
}

fn trim_quotes(s: &str) -> String {
    s.trim().trim_matches(|c| c == '"' || c == '\'').trim().to_string()
}
