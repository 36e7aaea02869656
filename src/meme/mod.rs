pub mod suggest;

/// One entry of the curated meme table. The table is static and immutable;
/// `file` is the image path shipped alongside the binary.
#[derive(Debug, PartialEq, Eq)]
pub struct MemeRecord {
    pub name: &'static str,
    pub file: &'static str,
    pub description: &'static str,
    pub use_cases: &'static [&'static str],
}

// "crying" stays first: it doubles as the fallback record.
pub const MEMES: &[MemeRecord] = &[
    MemeRecord {
        name: "crying",
        file: "memes/crying.jpg",
        description: "Crying face - use for sad, pathetic, or pitiful situations",
        use_cases: &["sad stories", "pathetic life choices", "crying about problems", "woe is me"],
    },
    MemeRecord {
        name: "side_eye",
        file: "memes/side_eye.jpg",
        description: "Side eye look - use for suspicious, doubtful, or judgmental reactions",
        use_cases: &["suspicious behavior", "doubtful claims", "judgmental reactions", "side eye moments"],
    },
    MemeRecord {
        name: "blinking_meme",
        file: "memes/blinking_meme.jpg",
        description: "Blinking guy - use for confusion, disbelief, or processing information",
        use_cases: &["confusion", "disbelief", "processing bad decisions", "what just happened"],
    },
    MemeRecord {
        name: "cat_laughing_at_you",
        file: "memes/cat_laughing_at_you.jpg",
        description: "Cat laughing - use for mocking, laughing at someone's expense",
        use_cases: &["mocking someone", "laughing at failures", "ridiculous situations", "you're a joke"],
    },
    MemeRecord {
        name: "chill_guys",
        file: "memes/chill_guys.jpg",
        description: "Chill guys - use for overreactions, dramatic responses",
        use_cases: &["overreactions", "dramatic responses", "calm down", "it's not that serious"],
    },
    MemeRecord {
        name: "no_god_please_no",
        file: "memes/no_god_please_no.jpg",
        description: "No God please no - use for desperate situations, begging, or dramatic despair",
        use_cases: &["desperate situations", "begging", "dramatic despair", "please no"],
    },
    MemeRecord {
        name: "this_is_fine",
        file: "memes/this_is_fine.jpg",
        description: "This is fine dog - use for denial, pretending everything is okay when it's not",
        use_cases: &["denial", "pretending everything is fine", "ignoring problems", "this is fine"],
    },
    MemeRecord {
        name: "man_what",
        file: "memes/man_what.jpg",
        description: "Man what - use for confusion, disbelief, or what did you just say",
        use_cases: &["confusion", "disbelief", "what did you just say", "man what"],
    },
    MemeRecord {
        name: "sponge_bob_chicken",
        file: "memes/sponge_bob_chicken.jpg",
        description: "SpongeBob chicken - use for cowardice, being afraid, or backing down",
        use_cases: &["cowardice", "being afraid", "backing down", "chicken behavior"],
    },
    MemeRecord {
        name: "what",
        file: "memes/what.jpg",
        description: "What - use for confusion, disbelief, or what are you talking about",
        use_cases: &["confusion", "disbelief", "what are you talking about", "what"],
    },
    MemeRecord {
        name: "think",
        file: "memes/think.jpg",
        description: "Think - use for deep thoughts, contemplation, or thinking about life choices",
        use_cases: &["deep thoughts", "contemplation", "thinking about life choices", "philosophical moments"],
    },
    MemeRecord {
        name: "doge_side_eye",
        file: "memes/doge_side_eye.jpg",
        description: "Doge side eye - use for suspicious dog reactions, cute judgment",
        use_cases: &["suspicious dog reactions", "cute judgment", "doge moments", "side eye"],
    },
];

/// Case-insensitive lookup by meme name.
pub fn find(name: &str) -> Option<&'static MemeRecord> {
    let wanted = name.trim().to_lowercase();
    MEMES.iter().find(|m| m.name == wanted)
}

/// The record substituted whenever nothing better can be chosen.
pub fn fallback() -> &'static MemeRecord {
    &MEMES[0]
}
