use std::fmt;

use crate::core::interfaces::ports::RawMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextType {
    Text,
    Image,
    Other(String),
}

impl fmt::Display for ContextType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextType::Text => write!(f, "TEXT"),
            ContextType::Image => write!(f, "IMAGE"),
            ContextType::Other(kind) => write!(f, "{}", kind),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventAction {
    #[default]
    Continue,
    Break,
    BreakPass,
}

impl EventAction {
    pub fn stops_pipeline(&self) -> bool {
        !matches!(self, EventAction::Continue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyType {
    Text,
    Error,
}

impl fmt::Display for ReplyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplyType::Text => write!(f, "TEXT"),
            ReplyType::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub reply_type: ReplyType,
    pub content: String,
}

impl Reply {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            reply_type: ReplyType::Text,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            reply_type: ReplyType::Error,
            content: content.into(),
        }
    }
}

/// Normalised view of one incoming message.
pub struct HostContext {
    pub context_type: ContextType,
    pub content: String,
    pub from_user_id: Option<String>,
    pub raw_message: Option<Box<dyn RawMessage>>,
    /// Tells downstream handlers not to expand or preview the image.
    pub no_image_parse: bool,
}

impl fmt::Debug for HostContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostContext")
            .field("context_type", &self.context_type)
            .field("content_length", &self.content.len())
            .field("from_user_id", &self.from_user_id)
            .field("has_raw_message", &self.raw_message.is_some())
            .field("no_image_parse", &self.no_image_parse)
            .finish()
    }
}

impl HostContext {
    pub fn text_message(from_user_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            context_type: ContextType::Text,
            content: content.into(),
            from_user_id: Some(from_user_id.into()),
            raw_message: None,
            no_image_parse: false,
        }
    }

    pub fn image_message(from_user_id: impl Into<String>, raw_message: Box<dyn RawMessage>) -> Self {
        Self {
            context_type: ContextType::Image,
            content: String::new(),
            from_user_id: Some(from_user_id.into()),
            raw_message: Some(raw_message),
            no_image_parse: false,
        }
    }

    /// Sender id, treating an empty string the same as a missing one.
    pub fn sender(&self) -> Option<&str> {
        self.from_user_id
            .as_deref()
            .filter(|user_id| !user_id.is_empty())
    }
}

#[derive(Debug)]
pub struct EventContext {
    pub context: HostContext,
    pub reply: Option<Reply>,
    pub action: EventAction,
}

impl EventContext {
    pub fn new(context: HostContext) -> Self {
        Self {
            context,
            reply: None,
            action: EventAction::default(),
        }
    }
}
