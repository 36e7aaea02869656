use roast_cli::roast::response::{parse, MemeLine};

#[test]
fn test_full_template_parses() {
    let reply = "Roast: Your life story reads like a cautionary tale.\n\
                 Speech: A cautionary tale, really.\n\
                 Meme: this_is_fine, Caption: Everything is under control";
    let parsed = parse(reply);
    assert_eq!(parsed.roast, "Your life story reads like a cautionary tale.");
    assert_eq!(parsed.speech.as_deref(), Some("A cautionary tale, really."));
    assert_eq!(
        parsed.meme,
        Some(MemeLine {
            name: "this_is_fine".to_string(),
            caption: "Everything is under control".to_string(),
        })
    );
}

#[test]
fn test_no_labels_falls_back_to_whole_text() {
    let reply = "You call that a life? Bold of you.";
    let parsed = parse(reply);
    assert_eq!(parsed.roast, reply);
    assert_eq!(parsed.speech, None);
    assert_eq!(parsed.meme, None);
}

#[test]
fn test_multiline_roast_continuation() {
    let reply = "Roast: First line of the burn.\n\
                 And it keeps going.\n\
                 Speech: Short version.\n\
                 Meme: crying, Caption: oof";
    let parsed = parse(reply);
    assert_eq!(parsed.roast, "First line of the burn. And it keeps going.");
    assert_eq!(parsed.speech.as_deref(), Some("Short version."));
}

#[test]
fn test_meme_name_with_brackets_and_quoted_caption() {
    let reply = "Roast: fine.\nMeme: [sponge_bob_chicken], Caption: \"bawk bawk\"";
    let parsed = parse(reply);
    let meme = parsed.meme.expect("meme line");
    assert_eq!(meme.name, "sponge_bob_chicken");
    assert_eq!(meme.caption, "bawk bawk");
}

#[test]
fn test_meme_line_without_caption() {
    let reply = "Roast: fine.\nMeme: doge_side_eye";
    let parsed = parse(reply);
    let meme = parsed.meme.expect("meme line");
    assert_eq!(meme.name, "doge_side_eye");
    assert_eq!(meme.caption, "");
}

#[test]
fn test_labels_are_case_insensitive() {
    let reply = "ROAST: Loud burn.\nMEME: Crying, CAPTION: sad";
    let parsed = parse(reply);
    assert_eq!(parsed.roast, "Loud burn.");
    let meme = parsed.meme.expect("meme line");
    assert_eq!(meme.name, "crying");
    assert_eq!(meme.caption, "sad");
}

#[test]
fn test_missing_roast_section_reuses_speech() {
    let reply = "Speech: Only the short one.\nMeme: what, Caption: huh";
    let parsed = parse(reply);
    assert_eq!(parsed.roast, "Only the short one.");
    assert_eq!(parsed.speech.as_deref(), Some("Only the short one."));
}

#[test]
fn test_meme_only_reply_is_not_echoed_as_roast() {
    let reply = "Meme: crying, Caption: sad";
    let parsed = parse(reply);
    assert_eq!(parsed.roast, "");
    assert_eq!(
        parsed.meme,
        Some(MemeLine {
            name: "crying".to_string(),
            caption: "sad".to_string(),
        })
    );
}

#[test]
fn test_stray_prose_survives_next_to_meme_line() {
    let reply = "You are a walking disaster.\nMeme: crying";
    let parsed = parse(reply);
    assert_eq!(parsed.roast, "You are a walking disaster.");
    assert_eq!(parsed.meme.expect("meme line").name, "crying");
}

#[test]
fn test_unknown_meme_name_is_kept_for_caller_fallback() {
    let reply = "Roast: fine.\nMeme: totally_made_up, Caption: nope";
    let parsed = parse(reply);
    assert_eq!(parsed.meme.expect("meme line").name, "totally_made_up");
    assert!(roast_cli::meme::find("totally_made_up").is_none());
}
