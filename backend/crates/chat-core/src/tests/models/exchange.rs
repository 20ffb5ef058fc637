use crate::{Exchange, Identity};

use googletest::prelude::*;

#[test]
fn given_new_exchanges_when_created_then_ids_are_unique() {
    let first = Exchange::new("Q".into(), "A".into());
    let second = Exchange::new("Q".into(), "A".into());

    assert_that!(first.id, not(eq(second.id)));
    assert_that!(first.question.as_str(), eq("Q"));
    assert_that!(first.answer.as_str(), eq("A"));
}

#[test]
fn given_identity_when_serialized_then_password_hash_is_omitted() {
    let identity = Identity::new(
        "ada@example.com".into(),
        Some("Ada".into()),
        "$argon2id$secret".into(),
    );

    let json = serde_json::to_value(&identity).unwrap();

    assert_that!(json.get("password_hash"), none());
    assert_that!(json["email"].as_str(), some(eq("ada@example.com")));
}
