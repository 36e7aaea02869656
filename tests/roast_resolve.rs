use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use roast_cli::config::settings::Settings;
use roast_cli::roast::{fallback, RoastInput, RoastLevel, Roaster};
use roast_cli::session::history::History;

/// Serves exactly one `generateContent` request with `reply` as the single
/// candidate text, then shuts down. Returns the base URL to point the
/// roaster at.
fn serve_reply(reply: &str) -> String {
    let body = serde_json::json!({
        "candidates": [{ "content": { "parts": [{ "text": reply }] } }]
    })
    .to_string();

    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let base_url = format!("http://{}/v1beta", listener.local_addr().expect("addr"));

    thread::spawn(move || {
        let (mut stream, _) = match listener.accept() {
            Ok(conn) => conn,
            Err(_) => return,
        };
        let mut buf = vec![0u8; 64 * 1024];
        let mut read = 0;
        while read < buf.len() {
            match stream.read(&mut buf[read..]) {
                Ok(0) => break,
                Ok(n) => {
                    read += n;
                    if request_complete(&buf[..read]) {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
        let response = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        let _ = stream.write_all(response.as_bytes());
    });

    base_url
}

fn request_complete(bytes: &[u8]) -> bool {
    let text = String::from_utf8_lossy(bytes);
    let header_end = match text.find("\r\n\r\n") {
        Some(i) => i,
        None => return false,
    };
    let content_length = text
        .lines()
        .filter_map(|l| l.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    bytes.len() >= header_end + 4 + content_length
}

fn roaster_for(base_url: &str) -> Roaster {
    let settings = Settings {
        api_key: Some("test-key".to_string()),
        base_url: Some(base_url.to_string()),
        ..Default::default()
    };
    Roaster::new(&settings).expect("roaster")
}

fn input_with(text: &str) -> RoastInput {
    RoastInput {
        text: text.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_label_free_reply_picks_meme_from_content() {
    // "sponge_bob_chicken" is the only record matching this story, so the
    // top suggestion is deterministic despite the scorer jitter.
    let base_url = serve_reply("Bold of you to call that a life.");
    let roaster = roaster_for(&base_url);
    let input = input_with("I'm so scared and chicken to try");

    let output = roaster
        .roast(&input, RoastLevel::Medium, &[], &History::new())
        .await;

    assert_eq!(output.text_roast, "Bold of you to call that a life.");
    assert_eq!(output.meme.record.name, "sponge_bob_chicken");
    assert_eq!(output.meme.caption, "No caption needed.");
}

#[tokio::test]
async fn test_label_free_reply_without_matching_content_uses_default_meme() {
    let base_url = serve_reply("Even the void is unimpressed.");
    let roaster = roaster_for(&base_url);
    let input = input_with("zzz qqq xyzzy");

    let output = roaster
        .roast(&input, RoastLevel::Medium, &[], &History::new())
        .await;

    assert_eq!(output.text_roast, "Even the void is unimpressed.");
    assert_eq!(output.meme.record.name, "crying");
}

#[tokio::test]
async fn test_unknown_meme_name_resolves_to_content_suggestion() {
    let base_url = serve_reply("Roast: fine.\nMeme: totally_made_up, Caption: nope");
    let roaster = roaster_for(&base_url);
    let input = input_with("I'm so scared and chicken to try");

    let output = roaster
        .roast(&input, RoastLevel::Medium, &[], &History::new())
        .await;

    assert_eq!(output.meme.record.name, "sponge_bob_chicken");
    // The model's caption survives even when its meme name does not.
    assert_eq!(output.meme.caption, "nope");
}

#[tokio::test]
async fn test_meme_only_reply_substitutes_fallback_roast() {
    let base_url = serve_reply("Meme: crying, Caption: sad");
    let roaster = roaster_for(&base_url);
    let input = input_with("roast me");

    let output = roaster
        .roast(&input, RoastLevel::Medium, &[], &History::new())
        .await;

    assert_eq!(output.text_roast, fallback::roast_for(RoastLevel::Medium));
    assert_eq!(output.meme.record.name, "crying");
    assert_eq!(output.meme.caption, "sad");
}
