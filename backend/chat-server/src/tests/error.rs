use crate::error::{Result as ServerErrorResult, ServerError};

use chat_config::ConfigError;
use chat_db::DbError;
use chat_relay::RelayError;

fn fails_with<E>(error: E) -> ServerErrorResult<()>
where
    ServerError: From<E>,
{
    Err::<(), E>(error)?;
    Ok(())
}

#[test]
fn test_config_error_converts_with_question_mark() {
    let result = fails_with(ConfigError::config("bad config"));

    assert!(matches!(result, Err(ServerError::Config(_))));
}

#[test]
fn test_db_error_converts_with_question_mark() {
    let result = fails_with(DbError::from(sqlx::Error::RowNotFound));

    assert!(matches!(result, Err(ServerError::Db(_))));
}

#[test]
fn test_relay_error_converts_with_question_mark() {
    let result = fails_with(RelayError::bad_request());

    assert!(matches!(result, Err(ServerError::Relay(_))));
}

#[test]
fn test_io_error_converts_with_question_mark() {
    let result = fails_with(std::io::Error::other("bind failed"));

    match result {
        Err(ServerError::Io(e)) => assert_eq!(e.to_string(), "bind failed"),
        other => panic!("expected Io error, got {:?}", other),
    }
}
