use roast_cli::meme;
use roast_cli::roast::{MemeChoice, RoastInput, RoastOutput};
use roast_cli::session::history::History;

fn sample_output(text: &str) -> RoastOutput {
    RoastOutput {
        text_roast: text.to_string(),
        audio_roast: text.to_string(),
        meme: MemeChoice {
            record: meme::fallback(),
            caption: "oof".to_string(),
        },
    }
}

#[test]
fn test_append_preserves_input_and_output() {
    let mut history = History::new();
    let input = RoastInput {
        text: "my life story".to_string(),
        ..Default::default()
    };
    let output = sample_output("a roast");

    history.push(input.clone(), output.clone());

    let entry = history.last().expect("entry");
    assert_eq!(entry.input, input);
    assert_eq!(entry.output, output);
}

#[test]
fn test_entries_grow_in_order() {
    let mut history = History::new();
    assert!(history.is_empty());

    for i in 0..3 {
        history.push(
            RoastInput {
                text: format!("story {}", i),
                ..Default::default()
            },
            sample_output(&format!("roast {}", i)),
        );
    }

    assert_eq!(history.len(), 3);
    let texts: Vec<_> = history.iter().map(|e| e.input.text.as_str()).collect();
    assert_eq!(texts, vec!["story 0", "story 1", "story 2"]);
}
