//! Prompt rendering for counseling turns and the final recommendation.
//!
//! A [`PromptTemplate`] has named slots: the persona text and an optional
//! industry summary block. Rendering is a pure function of the template
//! and the turns, so identical inputs always give an identical payload.

use serde::{Deserialize, Serialize};

use career_core::category::CATEGORIES;
use career_core::models::turn::{Role, Turn};

/// Persona used for ordinary counseling turns.
pub const COUNSELOR_PERSONA: &str = "\
당신은 경력 10년 이상의 진로 상담가입니다. \
사용자의 정보와 질문을 보고 어떤 직업이 어울릴지 상담해 주세요. \
이유를 구체적으로 설명하고, 어떤 준비가 필요한지도 조언해 주세요.";

/// Persona used for the final recommendation turn.
pub const RECOMMENDATION_PERSONA: &str = "\
당신은 진로 상담 내용을 바탕으로 현실적인 직업 하나를 추천하는 상담가입니다. \
사용자의 성격, 학업, 경험, 관심사를 모두 고려해서 판단하세요.";

/// A single message in a rendered conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Role of a rendered chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

impl From<&Turn> for ChatMessage {
    fn from(turn: &Turn) -> Self {
        let role = match turn.role {
            Role::User => ChatRole::User,
            Role::Assistant => ChatRole::Assistant,
        };
        Self {
            role,
            content: turn.content.clone(),
        }
    }
}

/// The model-ready payload: a system instruction plus ordered messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPrompt {
    pub system: String,
    pub messages: Vec<ChatMessage>,
}

/// A configurable system instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    pub persona: String,
    pub industry_summary: Option<String>,
}

impl PromptTemplate {
    pub fn new(persona: impl Into<String>) -> Self {
        Self {
            persona: persona.into(),
            industry_summary: None,
        }
    }

    pub fn counselor() -> Self {
        Self::new(COUNSELOR_PERSONA)
    }

    pub fn recommendation() -> Self {
        Self::new(RECOMMENDATION_PERSONA)
    }

    pub fn with_industry_summary(mut self, summary: impl Into<String>) -> Self {
        self.industry_summary = Some(summary.into());
        self
    }

    /// The system instruction: persona, then the industry summary block if set.
    pub fn system_instruction(&self) -> String {
        match self.industry_summary.as_deref().map(str::trim) {
            Some(summary) if !summary.is_empty() => format!(
                "{}\n\n<industry_summary>\n{summary}\n</industry_summary>",
                self.persona
            ),
            _ => self.persona.clone(),
        }
    }

    /// Render an ordinary turn. `turns` already ends with the new user turn.
    pub fn render_turn(&self, turns: &[Turn]) -> RenderedPrompt {
        RenderedPrompt {
            system: self.system_instruction(),
            messages: turns.iter().map(ChatMessage::from).collect(),
        }
    }

    /// Render the final turn: the history followed by the recommendation
    /// instruction as the last user message.
    pub fn render_recommendation(&self, turns: &[Turn]) -> RenderedPrompt {
        let mut messages: Vec<ChatMessage> = turns.iter().map(ChatMessage::from).collect();
        messages.push(ChatMessage {
            role: ChatRole::User,
            content: recommendation_instruction(),
        });
        RenderedPrompt {
            system: self.system_instruction(),
            messages,
        }
    }
}

/// Instruction listing the category labels and the `[job:reason:category]`
/// output grammar.
pub fn recommendation_instruction() -> String {
    let mut text = String::from(
        "지금까지의 상담 내용을 바탕으로 사용자에게 가장 어울리는 현실적인 직업 하나를 추천하세요.\n\
         추천 이유에는 성격과 학업을 포함해 사용자가 이 직업에 잘 맞는 이유를 적으세요.\n\
         직업 대분류는 아래 목록의 항목 하나를 글자 그대로 사용하세요.\n\n",
    );

    for category in CATEGORIES {
        text.push_str("- ");
        text.push_str(category);
        text.push('\n');
    }

    text.push_str(
        "\n답변 형식:\n[직업:추천 이유:직업 대분류]\n\n\
         직업과 추천 이유 안에는 콜론(:)을 쓰지 마세요.\n\
         위 형식의 한 줄만 답하고 설명 글이나 다른 말은 절대 하지 마세요.",
    );
    text
}
