use super::*;

fn fields() -> RegistrationFields {
    RegistrationFields {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        nickname: "ada".to_owned(),
        password: "s3cret".to_owned(),
    }
}

#[test]
fn registration_request_carries_user_fields() {
    let request = RegistrationRequest::from_fields(fields());
    assert_eq!(request.email, "ada@example.com");
    assert_eq!(request.nickname, "ada");
    assert_eq!(request.first_name, "Ada");
    assert_eq!(request.last_name, "Lovelace");
    assert_eq!(request.password, "s3cret");
}

#[test]
fn registration_request_fills_placeholder_profile() {
    let request = RegistrationRequest::from_fields(fields());
    assert_eq!(request.bio, placeholders::BIO);
    assert_eq!(request.profile_picture_url, placeholders::PROFILE_PICTURE_URL);
    assert_eq!(request.linkedin_profile_url, placeholders::LINKEDIN_PROFILE_URL);
    assert_eq!(request.github_profile_url, placeholders::GITHUB_PROFILE_URL);
    assert_eq!(request.role, placeholders::ROLE);
}

#[test]
fn registration_request_serializes_every_api_key() {
    let value = serde_json::to_value(RegistrationRequest::from_fields(fields())).expect("serialize");
    let object = value.as_object().expect("object body");
    for key in [
        "email",
        "nickname",
        "first_name",
        "last_name",
        "bio",
        "profile_picture_url",
        "linkedin_profile_url",
        "github_profile_url",
        "role",
        "password",
    ] {
        assert!(object.contains_key(key), "missing key {key}");
    }
    assert_eq!(object.len(), 10);
}

#[test]
fn login_form_body_uses_username_and_password_keys() {
    let credentials = LoginCredentials {
        email: "ada@example.com".to_owned(),
        password: "s3cret".to_owned(),
    };
    let body = credentials.form_body().expect("encode");
    assert_eq!(body, "username=ada%40example.com&password=s3cret");
}

#[test]
fn login_form_body_percent_encodes_reserved_characters() {
    let credentials = LoginCredentials {
        email: "a+b@example.com".to_owned(),
        password: "p&ss=1 2".to_owned(),
    };
    let body = credentials.form_body().expect("encode");
    assert_eq!(body, "username=a%2Bb%40example.com&password=p%26ss%3D1+2");
}

#[test]
fn merged_with_overwrites_prior_keys_shallowly() {
    let first = ActionResult::default().merged_with(&serde_json::json!({
        "email": "old@example.com",
        "nickname": "old",
    }));
    let second = first.merged_with(&serde_json::json!({ "email": "new@example.com" }));
    assert_eq!(second.get("email"), Some(&serde_json::json!("new@example.com")));
    assert_eq!(second.get("nickname"), Some(&serde_json::json!("old")));
}

#[test]
fn merged_with_ignores_non_object_responses() {
    let prior = ActionResult::default().merged_with(&serde_json::json!({ "kept": true }));
    for response in [
        serde_json::json!(null),
        serde_json::json!("oops"),
        serde_json::json!(42),
        serde_json::json!(["a", "b"]),
    ] {
        let merged = prior.merged_with(&response);
        assert_eq!(merged, prior, "response {response} should merge nothing");
    }
}

#[test]
fn detail_messages_collects_msg_strings_in_order() {
    let result = ActionResult::default().merged_with(&serde_json::json!({
        "detail": [
            { "msg": "email already registered" },
            { "loc": ["body", "password"] },
            { "msg": "password too short" },
        ]
    }));
    assert_eq!(
        result.detail_messages(),
        vec!["email already registered".to_owned(), "password too short".to_owned()]
    );
    assert_eq!(result.feedback_line(), "email already registered, password too short");
}

#[test]
fn feedback_line_is_empty_without_a_detail_list() {
    assert_eq!(ActionResult::default().feedback_line(), "");

    let scalar_detail = ActionResult::default().merged_with(&serde_json::json!({ "detail": "nope" }));
    assert_eq!(scalar_detail.feedback_line(), "");
}

#[test]
fn access_token_requires_a_non_empty_string() {
    let present = ActionResult::default().merged_with(&serde_json::json!({ "access_token": "abc123" }));
    assert_eq!(present.access_token(), Some("abc123"));

    let empty = ActionResult::default().merged_with(&serde_json::json!({ "access_token": "" }));
    assert_eq!(empty.access_token(), None);

    let wrong_type = ActionResult::default().merged_with(&serde_json::json!({ "access_token": 7 }));
    assert_eq!(wrong_type.access_token(), None);
}

#[test]
fn rendering_the_same_result_twice_is_identical() {
    let result = ActionResult::default().merged_with(&serde_json::json!({
        "detail": [{ "msg": "invalid credentials" }],
        "status": 401,
    }));
    assert_eq!(result.feedback_line(), result.feedback_line());
    assert_eq!(result.dump(), result.dump());
}
