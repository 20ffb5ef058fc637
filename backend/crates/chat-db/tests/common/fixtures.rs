use chat_core::{Exchange, Identity};

use uuid::Uuid;

pub fn create_test_identity() -> Identity {
    let email = format!("user-{}@example.com", Uuid::new_v4().simple());
    Identity::new(email, Some("Test User".to_string()), "$argon2id$stub".to_string())
}

pub fn create_test_exchange(question: &str, answer: &str) -> Exchange {
    Exchange::new(question.to_string(), answer.to_string())
}
