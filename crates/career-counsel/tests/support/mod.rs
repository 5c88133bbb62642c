#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use career_bedrock::chat::{BoxFuture, ChatCompletion};
use career_bedrock::error::BedrockError;
use career_bedrock::prompt::RenderedPrompt;
use career_core::models::turn::Turn;
use career_storage::error::StorageError;
use career_storage::history::{self, ChatHistoryStore};

/// Replays canned responses in order and records every prompt it sees.
#[derive(Default)]
pub struct ScriptedModel {
    responses: Mutex<VecDeque<Result<String, BedrockError>>>,
    calls: Mutex<Vec<(String, RenderedPrompt)>>,
    delay: Option<Duration>,
}

impl ScriptedModel {
    pub fn new(responses: Vec<Result<String, BedrockError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            ..Self::default()
        }
    }

    pub fn replying(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Ok(t.to_string())).collect())
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<(String, RenderedPrompt)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ChatCompletion for ScriptedModel {
    fn complete<'a>(
        &'a self,
        model_id: &'a str,
        prompt: &'a RenderedPrompt,
    ) -> BoxFuture<'a, Result<String, BedrockError>> {
        Box::pin(async move {
            self.calls
                .lock()
                .unwrap()
                .push((model_id.to_string(), prompt.clone()));
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(BedrockError::Invocation("script exhausted".to_string())))
        })
    }
}

/// A store whose backend is always unreachable.
pub struct UnreachableStore;

impl ChatHistoryStore for UnreachableStore {
    fn fetch<'a>(
        &'a self,
        _session_id: &'a str,
    ) -> history::BoxFuture<'a, Result<Vec<Turn>, StorageError>> {
        Box::pin(async { Err(StorageError::GetObject("connection refused".to_string())) })
    }

    fn append<'a>(
        &'a self,
        _session_id: &'a str,
        _turns: Vec<Turn>,
    ) -> history::BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async { Err(StorageError::PutObject("connection refused".to_string())) })
    }

    fn check(&self) -> history::BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async { Err(StorageError::HeadBucket("connection refused".to_string())) })
    }
}
