use clap::Parser;

use roast_cli::cli::args::Cli;

#[test]
fn test_transcript_alone_counts_as_roast_input() {
    let cli = Cli::try_parse_from(["roast", "--transcript", "it went badly"]).expect("parse");
    assert!(cli.has_roast_input());
}

#[test]
fn test_media_flags_count_as_roast_input() {
    let cli = Cli::try_parse_from(["roast", "--photo", "selfie.jpg"]).expect("parse");
    assert!(cli.has_roast_input());
}

#[test]
fn test_bare_invocation_has_no_roast_input() {
    let cli = Cli::try_parse_from(["roast"]).expect("parse");
    assert!(!cli.has_roast_input());
}
