use anyhow::{anyhow, Result};

use crate::api::models::{GenerateRequest, GenerateResponse};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

fn build_endpoint(base_url: &str, model: &str, api_key: &str) -> String {
    format!(
        "{}/models/{}:generateContent?key={}",
        base_url.trim_end_matches('/'),
        model,
        api_key
    )
}

/// Single non-streaming completion call. Returns the concatenated text parts
/// of the first candidate.
pub async fn generate_content(
    client: &reqwest::Client,
    base_url: &str,
    api_key: &str,
    model: &str,
    request: &GenerateRequest,
) -> Result<String> {
    let endpoint = build_endpoint(base_url, model, api_key);

    let resp = client
        .post(&endpoint)
        .json(request)
        .send()
        .await
        .map_err(|e| anyhow!("Network error: {}", e))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        // Error bodies carry a structured message; surface it when present.
        let message = serde_json::from_str::<serde_json::Value>(&text)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                    .map(|s| s.to_string())
            })
            .unwrap_or(text);
        return Err(anyhow!("Gemini error {}: {}", status, message));
    }

    let body: GenerateResponse = resp.json().await?;
    let text: String = body
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(anyhow!("Gemini response has no text content"));
    }
    Ok(text)
}
