use std::collections::HashMap;

use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, Message, StopReason, ToolUseBlock,
};
use aws_smithy_types::Document;

use career_bedrock::chat::{SEARCH_TOOL_NAME, expect_text_answer, single_search_request};
use career_bedrock::error::BedrockError;

fn tool_call(id: &str, name: &str, input: Document) -> ContentBlock {
    ContentBlock::ToolUse(
        ToolUseBlock::builder()
            .tool_use_id(id)
            .name(name)
            .input(input)
            .build()
            .unwrap(),
    )
}

fn query(q: &str) -> Document {
    Document::Object(HashMap::from([(
        "query".to_string(),
        Document::String(q.to_string()),
    )]))
}

fn assistant(blocks: Vec<ContentBlock>) -> Message {
    Message::builder()
        .role(ConversationRole::Assistant)
        .set_content(Some(blocks))
        .build()
        .unwrap()
}

#[test]
fn single_search_call_is_extracted() {
    let message = assistant(vec![
        ContentBlock::Text("검색해 보겠습니다.".to_string()),
        tool_call("tool-1", SEARCH_TOOL_NAME, query("데이터 엔지니어 채용 전망")),
    ]);

    let (id, q) = single_search_request(&message).unwrap();
    assert_eq!(id, "tool-1");
    assert_eq!(q, "데이터 엔지니어 채용 전망");
}

#[test]
fn two_search_calls_are_rejected() {
    let message = assistant(vec![
        tool_call("tool-1", SEARCH_TOOL_NAME, query("간호사 전망")),
        tool_call("tool-2", SEARCH_TOOL_NAME, query("개발자 전망")),
    ]);

    let err = single_search_request(&message).unwrap_err();
    assert!(matches!(err, BedrockError::ToolUse(ref msg) if msg.contains("more than one")));
}

#[test]
fn unknown_tool_is_rejected() {
    let message = assistant(vec![tool_call("tool-1", "calculator", query("1+1"))]);

    let err = single_search_request(&message).unwrap_err();
    assert!(matches!(err, BedrockError::ToolUse(ref msg) if msg.contains("calculator")));
}

#[test]
fn blank_or_missing_query_is_rejected() {
    let inputs = [
        query("   "),
        Document::Object(HashMap::new()),
        Document::String("간호사".to_string()),
    ];

    for input in inputs {
        let message = assistant(vec![tool_call("tool-1", SEARCH_TOOL_NAME, input)]);
        let err = single_search_request(&message).unwrap_err();
        assert!(matches!(err, BedrockError::ToolUse(_)));
    }
}

#[test]
fn tool_use_stop_without_a_call_is_rejected() {
    let message = assistant(vec![ContentBlock::Text("검색이 필요합니다.".to_string())]);

    let err = single_search_request(&message).unwrap_err();
    assert!(matches!(err, BedrockError::ToolUse(_)));
}

#[test]
fn second_tool_request_after_search_is_an_error() {
    let err = expect_text_answer(&StopReason::ToolUse).unwrap_err();
    assert!(matches!(err, BedrockError::ToolUse(_)));

    assert!(expect_text_answer(&StopReason::EndTurn).is_ok());
    assert!(expect_text_answer(&StopReason::MaxTokens).is_ok());
}
