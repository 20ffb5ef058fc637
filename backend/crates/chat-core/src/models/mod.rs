pub mod answer;
pub mod conversation_record;
pub mod exchange;
pub mod identity;
