/// Normalize API keys pasted by users: trims whitespace and strips any
/// surrounding ASCII or unicode quotes that shells and chat clients like to
/// add.
pub fn normalize_api_key(raw: &str) -> String {
    const QUOTES: &[char] = &['"', '\'', '“', '”', '‘', '’'];
    raw.trim()
        .trim_matches(|c| QUOTES.contains(&c))
        .trim()
        .to_string()
}
