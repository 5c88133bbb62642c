use thiserror::Error;

#[derive(Debug, Error)]
pub enum BedrockError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("tool use failed: {0}")]
    ToolUse(String),

    #[error("web search failed: {0}")]
    Search(String),
}
