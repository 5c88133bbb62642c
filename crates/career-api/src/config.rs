use std::env;
use std::net::SocketAddr;

use career_bedrock::prompt::PromptTemplate;
use career_counsel::counselor::CounselSettings;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_REGION: &str = "us-east-1";
const DEFAULT_BUCKET: &str = "career-counsel";
const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

/// Where chat histories live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryBackend {
    S3 { bucket: String },
    Memory,
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Serve through the Lambda runtime instead of binding a socket.
    pub lambda: bool,
    pub region: String,
    pub history: HistoryBackend,
    pub chat_model_id: String,
    pub recommendation_model_id: String,
    pub system_prompt: Option<String>,
    pub recommendation_prompt: Option<String>,
    pub industry_summary: Option<String>,
    pub tavily_api_key: Option<String>,
    /// Abort startup when the history store is unreachable.
    pub strict_startup: bool,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = get("CAREER_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| eyre::eyre!("invalid CAREER_BIND_ADDR: {e}"))?;

        let history = match get("CAREER_HISTORY_BACKEND").as_deref() {
            None | Some("s3") => HistoryBackend::S3 {
                bucket: get("CAREER_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
            },
            Some("memory") => HistoryBackend::Memory,
            Some(other) => {
                return Err(eyre::eyre!(
                    "invalid CAREER_HISTORY_BACKEND: {other:?} (expected \"s3\" or \"memory\")"
                ));
            }
        };

        let strict_startup = match get("CAREER_STRICT_STARTUP") {
            None => true,
            Some(v) => parse_bool(&v)
                .ok_or_else(|| eyre::eyre!("invalid CAREER_STRICT_STARTUP: {v:?}"))?,
        };

        let chat_model_id =
            get("CAREER_CHAT_MODEL_ID").unwrap_or_else(|| DEFAULT_MODEL_ID.to_string());
        let recommendation_model_id =
            get("CAREER_RECOMMENDATION_MODEL_ID").unwrap_or_else(|| chat_model_id.clone());

        Ok(Self {
            bind_addr,
            lambda: get("AWS_LAMBDA_RUNTIME_API").is_some(),
            region: get("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            history,
            chat_model_id,
            recommendation_model_id,
            system_prompt: get("CAREER_SYSTEM_PROMPT"),
            recommendation_prompt: get("CAREER_RECOMMENDATION_PROMPT"),
            industry_summary: get("CAREER_INDUSTRY_SUMMARY"),
            tavily_api_key: get("TAVILY_API_KEY"),
            strict_startup,
        })
    }

    /// Prompt templates and model ids for the counselor.
    pub fn counsel_settings(&self) -> CounselSettings {
        let template = |persona: &Option<String>, fallback: PromptTemplate| {
            let template = match persona {
                Some(p) => PromptTemplate::new(p.clone()),
                None => fallback,
            };
            match &self.industry_summary {
                Some(summary) => template.with_industry_summary(summary.clone()),
                None => template,
            }
        };

        CounselSettings {
            chat_model_id: self.chat_model_id.clone(),
            recommendation_model_id: self.recommendation_model_id.clone(),
            counselor: template(&self.system_prompt, PromptTemplate::counselor()),
            recommendation: template(
                &self.recommendation_prompt,
                PromptTemplate::recommendation(),
            ),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
