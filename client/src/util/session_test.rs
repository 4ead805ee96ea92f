use super::*;

#[test]
fn cookie_string_is_path_wide() {
    assert_eq!(cookie_string("access_token", "abc123"), "access_token=abc123; path=/");
}

#[test]
fn cookie_value_from_finds_named_cookie() {
    let header = "theme=dark; access_token=abc123; other=1";
    assert_eq!(cookie_value_from(header, "access_token"), Some("abc123".to_owned()));
    assert_eq!(cookie_value_from(header, "theme"), Some("dark".to_owned()));
}

#[test]
fn cookie_value_from_returns_none_when_absent() {
    assert_eq!(cookie_value_from("theme=dark", "access_token"), None);
    assert_eq!(cookie_value_from("", "access_token"), None);
}

#[test]
fn cookie_value_from_does_not_match_name_prefixes() {
    let header = "access_token_old=stale; access_token=fresh";
    assert_eq!(cookie_value_from(header, "access_token"), Some("fresh".to_owned()));
}

#[test]
fn cookie_value_from_keeps_equals_signs_in_values() {
    let header = "access_token=abc=123==";
    assert_eq!(cookie_value_from(header, "access_token"), Some("abc=123==".to_owned()));
}
