use super::*;

#[test]
fn feedback_is_empty_before_the_first_submission() {
    assert_eq!(registration_feedback(&ActionResult::default()), "");
}

#[test]
fn feedback_prefers_detail_messages() {
    let result = ActionResult::default().merged_with(&serde_json::json!({
        "detail": [{ "msg": "email already registered" }, { "msg": "nickname taken" }],
        "status": 422,
    }));
    assert_eq!(registration_feedback(&result), "email already registered, nickname taken");
}

#[test]
fn feedback_dumps_the_raw_result_without_detail() {
    let result = ActionResult::default().merged_with(&serde_json::json!({ "id": 7 }));
    assert_eq!(registration_feedback(&result), r#"{"id":7}"#);
}
