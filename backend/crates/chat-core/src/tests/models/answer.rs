use crate::{Answer, CoreError};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_text_answer_when_normalized_then_trimmed() {
    let answer = Answer::Text("  Paris  ".to_string());

    let result = answer.into_text();

    assert_that!(result, ok(eq("Paris")));
}

#[test]
fn given_number_answer_when_normalized_then_json_text() {
    let answer: Answer = serde_json::from_value(json!(42)).unwrap();

    let result = answer.into_text();

    assert_that!(result, ok(eq("42")));
}

#[test]
fn given_false_answer_when_normalized_then_kept_as_text() {
    let answer: Answer = serde_json::from_value(json!(false)).unwrap();

    assert_that!(answer.into_text(), ok(eq("false")));
}

#[test]
fn given_object_answer_when_normalized_then_compact_json() {
    let answer: Answer = serde_json::from_value(json!({"reply": "hi"})).unwrap();

    assert_that!(answer.into_text(), ok(eq(r#"{"reply":"hi"}"#)));
}

#[test]
fn given_string_json_when_deserialized_then_text_variant() {
    let answer: Answer = serde_json::from_value(json!("hello")).unwrap();

    assert_that!(answer, eq(&Answer::Text("hello".to_string())));
}

#[test]
fn given_null_answer_when_normalized_then_validation_error() {
    let answer = Answer::Structured(serde_json::Value::Null);

    let result = answer.into_text();

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: Some(ref f), .. }) if f == "answer"
    ));
}

#[test]
fn given_blank_text_answer_when_normalized_then_validation_error() {
    let result = Answer::from("   ").into_text();

    assert_that!(result, err(anything()));
}

#[test]
fn given_value_string_when_converted_then_text_variant() {
    let answer = Answer::from(json!("x"));

    assert_that!(answer, eq(&Answer::Text("x".to_string())));
}
