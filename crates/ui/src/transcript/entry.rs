/// Entry types that can be displayed in the conversation view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEntry {
    /// User message
    UserMessage { content: String },
    /// Assistant reply (rendered through the markdown model)
    AssistantReply { content: String },
    /// Subtle status note (history cleared, session started, ...)
    Notice { content: String },
}

impl ChatEntry {
    pub fn user_message(content: impl Into<String>) -> Self {
        Self::UserMessage { content: content.into() }
    }

    pub fn assistant_reply(content: impl Into<String>) -> Self {
        Self::AssistantReply { content: content.into() }
    }

    pub fn notice(content: impl Into<String>) -> Self {
        Self::Notice { content: content.into() }
    }

    /// Raw content of the entry
    pub fn content(&self) -> &str {
        match self {
            Self::UserMessage { content } | Self::AssistantReply { content } | Self::Notice { content } => content,
        }
    }
}
