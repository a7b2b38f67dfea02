use super::*;

#[test]
fn default_theme_is_public() {
    assert_eq!(Theme::default(), Theme::Public);
}

#[test]
fn parse_known_values() {
    assert_eq!(Theme::parse(Some("public")), Theme::Public);
    assert_eq!(Theme::parse(Some("monitoring")), Theme::Monitoring);
    assert_eq!(Theme::parse(Some(" monitoring ")), Theme::Monitoring);
}

#[test]
fn parse_unknown_or_missing_falls_back_to_public() {
    assert_eq!(Theme::parse(None), Theme::Public);
    assert_eq!(Theme::parse(Some("dark")), Theme::Public);
    assert_eq!(Theme::parse(Some("")), Theme::Public);
}

#[test]
fn toggled_flips_between_the_two_values() {
    assert_eq!(Theme::Public.toggled(), Theme::Monitoring);
    assert_eq!(Theme::Monitoring.toggled(), Theme::Public);
    assert_eq!(Theme::Public.toggled().toggled(), Theme::Public);
}

#[test]
fn stored_strings_round_trip_through_parse() {
    for theme in [Theme::Public, Theme::Monitoring] {
        assert_eq!(Theme::parse(Some(theme.as_str())), theme);
    }
}
