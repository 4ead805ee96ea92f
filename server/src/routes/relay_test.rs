use super::*;

#[test]
fn upstream_url_joins_base_and_path() {
    assert_eq!(
        upstream_url("http://localhost:8000", REGISTER_PATH),
        "http://localhost:8000/api/register/"
    );
    assert_eq!(
        upstream_url("https://api.example.com", LOGIN_PATH),
        "https://api.example.com/api/login/"
    );
}

#[test]
fn forwarded_content_type_defaults_to_json() {
    assert_eq!(forwarded_content_type(&HeaderMap::new()), "application/json");
}

#[test]
fn forwarded_content_type_passes_urlencoded_through() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        "application/x-www-form-urlencoded".parse().expect("header value"),
    );
    assert_eq!(forwarded_content_type(&headers), "application/x-www-form-urlencoded");
}

#[test]
fn passthrough_status_keeps_upstream_codes() {
    assert_eq!(passthrough_status(201), StatusCode::CREATED);
    assert_eq!(passthrough_status(422), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(passthrough_status(500), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn passthrough_status_maps_garbage_to_bad_gateway() {
    assert_eq!(passthrough_status(0), StatusCode::BAD_GATEWAY);
    assert_eq!(passthrough_status(99), StatusCode::BAD_GATEWAY);
}

#[test]
fn relay_error_display_names_the_upstream() {
    // The display path is what the handler body returns on transport failure.
    let err = reqwest::Client::new()
        .get("h t t p")
        .build()
        .expect_err("spaces make an invalid url");
    let message = RelayError::Upstream(err).to_string();
    assert!(message.starts_with("upstream request failed"));
}
