use serde::Serialize;

pub const FIXED_REPLY: &str = "Thanks for your message! We'll get back to you soon.";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BotReply(String);

impl BotReply {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    pub fn into_text(self) -> String {
        self.0
    }
}

/// Produces the bot's answer to a user message.
pub trait ChatResponder: Send + Sync {
    fn reply(&self, text: &str) -> BotReply;
}

/// Answers every message with [`FIXED_REPLY`].
#[derive(Clone, Copy, Debug, Default)]
pub struct CannedResponder;

impl ChatResponder for CannedResponder {
    fn reply(&self, _text: &str) -> BotReply {
        BotReply::new(FIXED_REPLY)
    }
}

pub fn send_chat_message(text: &str) -> BotReply {
    CannedResponder.reply(text)
}
