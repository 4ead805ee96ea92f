use super::*;

#[test]
fn parse_port_accepts_plain_numbers() {
    assert_eq!(parse_port("3000").expect("port"), 3000);
    assert_eq!(parse_port(" 8080 ").expect("port"), 8080);
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port("eighty").expect_err("should be invalid");
    assert!(matches!(err, ConfigError::InvalidPort(raw) if raw == "eighty"));

    parse_port("70000").expect_err("out of range");
    parse_port("").expect_err("empty");
}

#[test]
fn normalize_api_base_trims_trailing_slashes() {
    assert_eq!(normalize_api_base("http://localhost:8000/"), "http://localhost:8000");
    assert_eq!(normalize_api_base("http://localhost:8000///"), "http://localhost:8000");
    assert_eq!(normalize_api_base(" https://api.example.com "), "https://api.example.com");
}
