//! The session turn orchestrator.

use std::sync::Arc;

use tracing::{info, warn};

use career_bedrock::chat::ChatCompletion;
use career_bedrock::prompt::PromptTemplate;
use career_core::models::recommendation::RecommendationRecord;
use career_core::models::turn::{Role, Turn};
use career_core::recommendation::parse_recommendation;
use career_storage::history::ChatHistoryStore;

use crate::assemble::assemble_for_session;
use crate::error::CounselError;
use crate::locks::SessionLocks;

/// Reply sent in place of the model's answer when an ordinary turn fails.
pub const APOLOGY: &str =
    "죄송합니다. 지금은 답변을 드리기 어렵습니다. 잠시 후 다시 시도해 주세요.";

/// Models and prompt templates for one deployment.
#[derive(Debug, Clone)]
pub struct CounselSettings {
    pub chat_model_id: String,
    pub recommendation_model_id: String,
    pub counselor: PromptTemplate,
    pub recommendation: PromptTemplate,
}

impl CounselSettings {
    /// Built-in personas, one model for both flows.
    pub fn with_model(model_id: impl Into<String>) -> Self {
        let model_id = model_id.into();
        Self {
            chat_model_id: model_id.clone(),
            recommendation_model_id: model_id,
            counselor: PromptTemplate::counselor(),
            recommendation: PromptTemplate::recommendation(),
        }
    }
}

/// Result of a handled turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnReply {
    /// Assistant text for an ordinary turn (or [`APOLOGY`] on failure).
    Reply(String),
    /// Parsed recommendation for a final turn.
    Recommendation(RecommendationRecord),
}

/// Runs counseling turns against a history store and a model.
///
/// Built once at startup and shared by all requests. Turns of the same
/// session are serialised; different sessions run in parallel.
pub struct Counselor {
    store: Arc<dyn ChatHistoryStore>,
    model: Arc<dyn ChatCompletion>,
    settings: CounselSettings,
    locks: SessionLocks,
}

impl Counselor {
    pub fn new(
        store: Arc<dyn ChatHistoryStore>,
        model: Arc<dyn ChatCompletion>,
        settings: CounselSettings,
    ) -> Self {
        Self {
            store,
            model,
            settings,
            locks: SessionLocks::default(),
        }
    }

    /// Handle one request.
    ///
    /// Ordinary-turn failures are logged and degrade to [`APOLOGY`]; only
    /// final turns return an error.
    pub async fn handle_turn(
        &self,
        session_id: &str,
        content: &str,
        is_last: bool,
    ) -> Result<TurnReply, CounselError> {
        if is_last {
            return self.recommend(session_id).await.map(TurnReply::Recommendation);
        }

        match self.reply(session_id, content).await {
            Ok(text) => Ok(TurnReply::Reply(text)),
            Err(e) => {
                warn!(session_id, kind = e.kind(), error = %e, "counseling turn failed");
                Ok(TurnReply::Reply(APOLOGY.to_string()))
            }
        }
    }

    /// Ordinary turn: answer `content` in the context of the session and
    /// persist the user/assistant pair.
    ///
    /// Nothing is persisted when the model call fails.
    pub async fn reply(&self, session_id: &str, content: &str) -> Result<String, CounselError> {
        let _guard = self.locks.acquire(session_id).await;

        let user_turn = Turn::user(content);
        let turns = assemble_for_session(self.store.as_ref(), session_id, user_turn.clone()).await?;
        let prompt = self.settings.counselor.render_turn(&turns);

        let answer = self
            .model
            .complete(&self.settings.chat_model_id, &prompt)
            .await?;

        self.store
            .append(session_id, vec![user_turn, Turn::assistant(answer.clone())])
            .await?;

        info!(session_id, turns = turns.len() + 1, "counseling turn complete");
        Ok(answer)
    }

    /// Final turn: ask for a `[job:reason:category]` answer over the
    /// existing history and parse it. Never appends to the history.
    pub async fn recommend(&self, session_id: &str) -> Result<RecommendationRecord, CounselError> {
        let _guard = self.locks.acquire(session_id).await;

        let history = self.store.fetch(session_id).await?;
        if !history.iter().any(|t| t.role == Role::User) {
            return Err(CounselError::EmptyHistory {
                session_id: session_id.to_string(),
            });
        }

        let prompt = self.settings.recommendation.render_recommendation(&history);
        let raw = self
            .model
            .complete(&self.settings.recommendation_model_id, &prompt)
            .await?;

        let record = parse_recommendation(&raw).inspect_err(|e| {
            warn!(session_id, error = %e, raw = %raw, "unparsable recommendation");
        })?;

        info!(
            session_id,
            turns = history.len(),
            category = record.category,
            "recommendation produced"
        );
        Ok(record)
    }
}
