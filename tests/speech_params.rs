use roast_cli::roast::RoastLevel;
use roast_cli::speech::SpeechParams;

#[test]
fn test_brutal_is_faster_lower_louder_than_light() {
    let light = SpeechParams::for_level(RoastLevel::Light);
    let brutal = SpeechParams::for_level(RoastLevel::Brutal);
    assert!(brutal.rate > light.rate);
    assert!(brutal.pitch < light.pitch);
    assert!(brutal.volume > light.volume);
}

#[test]
fn test_medium_is_neutral_rate_and_pitch() {
    let medium = SpeechParams::for_level(RoastLevel::Medium);
    assert_eq!(medium.rate, 1.0);
    assert_eq!(medium.pitch, 1.0);
}
