//! Chat completion through the Bedrock Converse API.
//!
//! One request per invocation, no retries. When a [`WebSearch`] backend is
//! configured the model may call the `web_search` tool exactly once before
//! it must answer in plain text.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::operation::converse::ConverseOutput;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, Message, StopReason, SystemContentBlock, Tool,
    ToolConfiguration, ToolInputSchema, ToolResultBlock, ToolResultContentBlock,
    ToolSpecification,
};
use aws_smithy_types::Document;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::BedrockError;
use crate::prompt::{ChatMessage, ChatRole, RenderedPrompt};
use crate::search::WebSearch;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub const SEARCH_TOOL_NAME: &str = "web_search";

/// A hosted model that turns a rendered prompt into reply text.
///
/// Methods return boxed futures for dyn compatibility.
pub trait ChatCompletion: Send + Sync {
    fn complete<'a>(
        &'a self,
        model_id: &'a str,
        prompt: &'a RenderedPrompt,
    ) -> BoxFuture<'a, Result<String, BedrockError>>;
}

/// [`ChatCompletion`] backed by Bedrock Converse.
pub struct BedrockChat {
    client: Client,
    search: Option<Arc<dyn WebSearch>>,
}

impl BedrockChat {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            search: None,
        }
    }

    /// Offer the `web_search` tool to the model on every invocation.
    pub fn with_search(mut self, search: Arc<dyn WebSearch>) -> Self {
        self.search = Some(search);
        self
    }

    async fn converse(
        &self,
        model_id: &str,
        system: &str,
        messages: &[Message],
        tool_config: Option<ToolConfiguration>,
    ) -> Result<ConverseOutput, BedrockError> {
        self.client
            .converse()
            .model_id(model_id)
            .system(SystemContentBlock::Text(system.to_string()))
            .set_messages(Some(messages.to_vec()))
            .set_tool_config(tool_config)
            .send()
            .await
            .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))
    }

    async fn run(&self, model_id: &str, prompt: &RenderedPrompt) -> Result<String, BedrockError> {
        let invocation_id = Uuid::new_v4();
        info!(
            invocation_id = %invocation_id,
            model_id,
            messages = prompt.messages.len(),
            "invoking model"
        );

        let mut messages = to_converse_messages(&prompt.messages)?;
        let tool_config = match self.search {
            Some(_) => Some(search_tool_config()?),
            None => None,
        };

        let response = self
            .converse(model_id, &prompt.system, &messages, tool_config.clone())
            .await?;

        let text = if *response.stop_reason() == StopReason::ToolUse {
            let search = self.search.as_ref().ok_or_else(|| {
                BedrockError::ToolUse("model requested a tool but none is configured".to_string())
            })?;

            let request = output_message(&response)?.clone();
            let (tool_use_id, query) = single_search_request(&request)?;

            info!(invocation_id = %invocation_id, query = %query, "running web search");
            let results = search.search(&query).await?;

            let tool_result = ToolResultBlock::builder()
                .tool_use_id(tool_use_id)
                .content(ToolResultContentBlock::Text(results))
                .build()
                .map_err(|e| BedrockError::ToolUse(e.to_string()))?;
            messages.push(request);
            messages.push(
                Message::builder()
                    .role(ConversationRole::User)
                    .content(ContentBlock::ToolResult(tool_result))
                    .build()
                    .map_err(|e| BedrockError::Invocation(e.to_string()))?,
            );

            let followup = self
                .converse(model_id, &prompt.system, &messages, tool_config)
                .await?;
            expect_text_answer(followup.stop_reason())?;
            response_text(&followup)?
        } else {
            response_text(&response)?
        };

        if text.trim().is_empty() {
            return Err(BedrockError::ResponseParse("empty response text".to_string()));
        }

        info!(invocation_id = %invocation_id, text_len = text.len(), "model invocation complete");
        debug!(invocation_id = %invocation_id, text = %text, "model output");

        Ok(text)
    }
}

impl ChatCompletion for BedrockChat {
    fn complete<'a>(
        &'a self,
        model_id: &'a str,
        prompt: &'a RenderedPrompt,
    ) -> BoxFuture<'a, Result<String, BedrockError>> {
        Box::pin(self.run(model_id, prompt))
    }
}

/// Merge adjacent messages that share a role.
///
/// Converse rejects two consecutive messages from the same role.
pub fn merge_consecutive_roles(messages: &[ChatMessage]) -> Vec<ChatMessage> {
    let mut merged: Vec<ChatMessage> = Vec::with_capacity(messages.len());
    for msg in messages {
        match merged.last_mut() {
            Some(last) if last.role == msg.role => {
                last.content.push_str("\n\n");
                last.content.push_str(&msg.content);
            }
            _ => merged.push(msg.clone()),
        }
    }
    merged
}

fn to_converse_messages(messages: &[ChatMessage]) -> Result<Vec<Message>, BedrockError> {
    merge_consecutive_roles(messages)
        .into_iter()
        .map(|msg| {
            let role = match msg.role {
                ChatRole::User => ConversationRole::User,
                ChatRole::Assistant => ConversationRole::Assistant,
            };
            Message::builder()
                .role(role)
                .content(ContentBlock::Text(msg.content))
                .build()
                .map_err(|e| BedrockError::Invocation(e.to_string()))
        })
        .collect()
}

fn output_message(response: &ConverseOutput) -> Result<&Message, BedrockError> {
    response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))
}

fn response_text(response: &ConverseOutput) -> Result<String, BedrockError> {
    let text = output_message(response)?
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");
    Ok(text)
}

/// The answer after the search result must be text; another tool request
/// would start a second hop.
pub fn expect_text_answer(stop_reason: &StopReason) -> Result<(), BedrockError> {
    if *stop_reason == StopReason::ToolUse {
        return Err(BedrockError::ToolUse(
            "model requested more than one web search".to_string(),
        ));
    }
    Ok(())
}

/// Pull `(tool_use_id, query)` out of a tool-use message. Exactly one
/// `web_search` call is allowed.
pub fn single_search_request(message: &Message) -> Result<(String, String), BedrockError> {
    let mut calls = message
        .content()
        .iter()
        .filter_map(|block| block.as_tool_use().ok());

    let call = calls
        .next()
        .ok_or_else(|| BedrockError::ToolUse("tool_use stop without a tool call".to_string()))?;
    if calls.next().is_some() {
        return Err(BedrockError::ToolUse(
            "model requested more than one web search".to_string(),
        ));
    }
    if call.name() != SEARCH_TOOL_NAME {
        return Err(BedrockError::ToolUse(format!("unknown tool: {}", call.name())));
    }

    let query = match call.input() {
        Document::Object(fields) => match fields.get("query") {
            Some(Document::String(q)) if !q.trim().is_empty() => q.clone(),
            _ => {
                return Err(BedrockError::ToolUse(
                    "web_search called without a query".to_string(),
                ));
            }
        },
        _ => {
            return Err(BedrockError::ToolUse(
                "web_search input is not an object".to_string(),
            ));
        }
    };

    Ok((call.tool_use_id().to_string(), query))
}

fn search_tool_config() -> Result<ToolConfiguration, BedrockError> {
    let query = Document::Object(HashMap::from([
        ("type".to_string(), Document::String("string".to_string())),
        (
            "description".to_string(),
            Document::String("Search query, e.g. a job title plus \"채용 전망\"".to_string()),
        ),
    ]));
    let schema = Document::Object(HashMap::from([
        ("type".to_string(), Document::String("object".to_string())),
        (
            "properties".to_string(),
            Document::Object(HashMap::from([("query".to_string(), query)])),
        ),
        (
            "required".to_string(),
            Document::Array(vec![Document::String("query".to_string())]),
        ),
    ]));

    let spec = ToolSpecification::builder()
        .name(SEARCH_TOOL_NAME)
        .description(
            "Search the web for current job market trends and career information. \
             Call at most once.",
        )
        .input_schema(ToolInputSchema::Json(schema))
        .build()
        .map_err(|e| BedrockError::ToolUse(e.to_string()))?;

    ToolConfiguration::builder()
        .tools(Tool::ToolSpec(spec))
        .build()
        .map_err(|e| BedrockError::ToolUse(e.to_string()))
}
