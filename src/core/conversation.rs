/// Conversation state owned by the app and mutated by the turn controller
use super::intent::EmotionTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Ai,
}

/// A transcript entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Self {
            role: Role::Ai,
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[derive(Debug, Default)]
pub struct ConversationState {
    transcript: Vec<Message>,
    /// Text currently in the input field
    pub draft: String,
    typing: bool,
    emotion: EmotionTag,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.transcript
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn emotion(&self) -> EmotionTag {
        self.emotion
    }

    pub(super) fn push(&mut self, message: Message) {
        self.transcript.push(message);
    }

    pub(super) fn set_typing(&mut self, typing: bool) {
        self.typing = typing;
    }

    pub(super) fn set_emotion(&mut self, emotion: EmotionTag) {
        self.emotion = emotion;
    }
}
