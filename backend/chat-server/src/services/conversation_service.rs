use crate::ApiResult;

use chat_core::{Answer, ConversationRecord, CoreError, Exchange, validate_question};
use chat_db::ConversationRepository;

use serde_json::Value;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Read, append and clear operations on one identity's conversation.
///
/// Callers resolve the identity first; nothing here looks at credentials.
pub struct ConversationService {
    repo: ConversationRepository,
}

impl ConversationService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repo: ConversationRepository::new(pool),
        }
    }

    /// The identity's record, or None if nothing was ever appended
    pub async fn list(&self, identity_id: Uuid) -> ApiResult<Option<ConversationRecord>> {
        Ok(self.repo.find_by_identity(identity_id).await?)
    }

    /// Validate, normalize and store one exchange.
    ///
    /// The question must be a non-blank string and is trimmed. The answer may
    /// be any JSON value except null; it is normalized to text.
    pub async fn append(
        &self,
        identity_id: Uuid,
        question: Option<&Value>,
        answer: Option<Value>,
    ) -> ApiResult<Exchange> {
        let question = validate_question(question)?;
        let answer = answer
            .map(Answer::from)
            .ok_or_else(|| CoreError::validation("answer", "Answer is required"))?
            .into_text()?;

        let exchange = Exchange::new(question, answer);
        self.repo.append(identity_id, &exchange).await?;

        Ok(exchange)
    }

    /// Empty the identity's exchange list. Idempotent.
    pub async fn clear(&self, identity_id: Uuid) -> ApiResult<()> {
        let removed = self.repo.clear(identity_id).await?;
        log::debug!("Cleared {} exchanges for identity {}", removed, identity_id);
        Ok(())
    }
}
