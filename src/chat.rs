use crate::backend::ChatResponder;
use crate::content::BOT_GREETING;
use crate::types::ChatMessage;
use serde::{Deserialize, Serialize};

/// Append-only chat history, oldest first. Always opens with the bot greeting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTranscript")]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
struct RawTranscript {
    messages: Vec<ChatMessage>,
}

impl TryFrom<RawTranscript> for Transcript {
    type Error = String;

    fn try_from(raw: RawTranscript) -> Result<Self, Self::Error> {
        match raw.messages.first() {
            Some(first) if *first == ChatMessage::bot(BOT_GREETING) => Ok(Self {
                messages: raw.messages,
            }),
            _ => Err("transcript must start with the bot greeting".to_string()),
        }
    }
}

impl Transcript {
    pub fn seeded() -> Self {
        Self {
            messages: vec![ChatMessage::bot(BOT_GREETING)],
        }
    }

    fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::seeded()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatWidget {
    visibility: Visibility,
    draft: String,
    transcript: Transcript,
}

impl ChatWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    pub fn open(&mut self) {
        if !self.is_open() {
            tracing::debug!("chat widget opened");
        }
        self.visibility = Visibility::Open;
    }

    pub fn close(&mut self) {
        if self.is_open() {
            tracing::debug!("chat widget closed");
        }
        self.visibility = Visibility::Closed;
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn can_send(&self) -> bool {
        self.is_open() && !self.draft.trim().is_empty()
    }

    /// Appends the draft and the responder's answer, then clears the draft.
    ///
    /// Returns `false` without touching any state when the widget is closed or
    /// the draft is blank.
    pub fn send(&mut self, responder: &dyn ChatResponder) -> bool {
        if !self.can_send() {
            return false;
        }

        let text = std::mem::take(&mut self.draft);
        let reply = responder.reply(&text);
        self.transcript.push(ChatMessage::user(text));
        self.transcript.push(ChatMessage::bot(reply.into_text()));
        tracing::debug!(messages = self.transcript.len(), "chat message sent");
        true
    }
}
