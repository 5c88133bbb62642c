use std::sync::Arc;

use tracing::{info, warn};

use career_bedrock::chat::BedrockChat;
use career_bedrock::search::TavilySearch;
use career_counsel::counselor::Counselor;
use career_storage::history::{ChatHistoryStore, MemoryChatHistoryStore, S3ChatHistoryStore};

use crate::config::{HistoryBackend, ServerConfig};

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub counselor: Arc<Counselor>,
}

impl AppState {
    pub fn new(counselor: Counselor) -> Self {
        Self {
            counselor: Arc::new(counselor),
        }
    }
}

/// Wire the store, the model, and the counselor from configuration.
///
/// The store is checked once; with `strict_startup` an unreachable store
/// aborts startup, otherwise requests degrade until it recovers.
pub async fn build_state(config: &ServerConfig) -> eyre::Result<AppState> {
    let store: Arc<dyn ChatHistoryStore> = match &config.history {
        HistoryBackend::S3 { bucket } => {
            let s3 = career_storage::client::build_client(&config.region).await;
            info!(bucket = %bucket, "using S3 chat history store");
            Arc::new(S3ChatHistoryStore::new(s3, bucket.clone()))
        }
        HistoryBackend::Memory => {
            warn!("using in-memory chat history store; history is lost on restart");
            Arc::new(MemoryChatHistoryStore::new())
        }
    };

    match store.check().await {
        Ok(()) => info!("chat history store reachable"),
        Err(e) if config.strict_startup => {
            return Err(eyre::eyre!("chat history store unreachable: {e}"));
        }
        Err(e) => warn!(error = %e, "chat history store unreachable; continuing"),
    }

    let bedrock = career_bedrock::client::build_client_with_region(&config.region).await;
    let mut model = BedrockChat::new(bedrock);
    if let Some(api_key) = &config.tavily_api_key {
        info!("web search tool enabled");
        model = model.with_search(Arc::new(TavilySearch::new(api_key.clone())));
    }

    info!(
        chat_model_id = %config.chat_model_id,
        recommendation_model_id = %config.recommendation_model_id,
        "counselor ready"
    );

    Ok(AppState::new(Counselor::new(
        store,
        Arc::new(model),
        config.counsel_settings(),
    )))
}
