use std::collections::HashMap;

use career_api::config::{HistoryBackend, ServerConfig};

fn config(vars: &[(&str, &str)]) -> eyre::Result<ServerConfig> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_apply_when_unset() {
    let config = config(&[]).unwrap();
    assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8000");
    assert!(!config.lambda);
    assert_eq!(config.region, "us-east-1");
    assert_eq!(
        config.history,
        HistoryBackend::S3 {
            bucket: "career-counsel".to_string()
        }
    );
    assert_eq!(config.recommendation_model_id, config.chat_model_id);
    assert!(config.strict_startup);
    assert!(config.tavily_api_key.is_none());
}

#[test]
fn recommendation_model_can_differ() {
    let config = config(&[
        ("CAREER_CHAT_MODEL_ID", "small"),
        ("CAREER_RECOMMENDATION_MODEL_ID", "large"),
    ])
    .unwrap();
    let settings = config.counsel_settings();
    assert_eq!(settings.chat_model_id, "small");
    assert_eq!(settings.recommendation_model_id, "large");
}

#[test]
fn memory_backend_and_lambda_detection() {
    let config = config(&[
        ("CAREER_HISTORY_BACKEND", "memory"),
        ("AWS_LAMBDA_RUNTIME_API", "127.0.0.1:9001"),
        ("CAREER_STRICT_STARTUP", "off"),
    ])
    .unwrap();
    assert_eq!(config.history, HistoryBackend::Memory);
    assert!(config.lambda);
    assert!(!config.strict_startup);
}

#[test]
fn empty_values_count_as_unset() {
    let config = config(&[("TAVILY_API_KEY", ""), ("CAREER_SYSTEM_PROMPT", "  ")]).unwrap();
    assert!(config.tavily_api_key.is_none());
    assert!(config.system_prompt.is_none());
}

#[test]
fn persona_and_industry_summary_fill_template_slots() {
    let config = config(&[
        ("CAREER_SYSTEM_PROMPT", "custom persona"),
        ("CAREER_INDUSTRY_SUMMARY", "AI 산업 성장"),
    ])
    .unwrap();
    let settings = config.counsel_settings();
    assert_eq!(settings.counselor.persona, "custom persona");
    assert_eq!(settings.counselor.industry_summary.as_deref(), Some("AI 산업 성장"));
    assert_eq!(settings.recommendation.industry_summary.as_deref(), Some("AI 산업 성장"));
}

#[test]
fn invalid_values_are_rejected() {
    assert!(config(&[("CAREER_HISTORY_BACKEND", "postgres")]).is_err());
    assert!(config(&[("CAREER_STRICT_STARTUP", "maybe")]).is_err());
    assert!(config(&[("CAREER_BIND_ADDR", "not-an-addr")]).is_err());
}
