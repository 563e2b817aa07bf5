use serde::Serialize;
use std::fmt;

/// One line of the chat panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum ChatEntry {
    Question(String),
    Answer(String),
    Error(String),
}

impl ChatEntry {
    pub fn text(&self) -> &str {
        match self {
            ChatEntry::Question(t) | ChatEntry::Answer(t) | ChatEntry::Error(t) => t,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ChatEntry::Error(_))
    }
}

impl fmt::Display for ChatEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatEntry::Question(q) => write!(f, "You: {}", q),
            ChatEntry::Answer(a) => write!(f, "AI:\n{}", a),
            ChatEntry::Error(e) => write!(f, "Error: {}", e),
        }
    }
}

/// Append-only chat history for the session
#[derive(Debug, Clone, Default)]
pub struct ChatLog {
    entries: Vec<ChatEntry>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ChatEntry) -> &ChatEntry {
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&ChatEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for ChatLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}
