use std::collections::HashMap;
use std::sync::Mutex;

use crate::models::domain::ChatMessage;

pub const HISTORY_CAP: usize = 200;

/// Advisory per-persona conversation history. The client keeps its own
/// authoritative copy; this log only aids debugging on a live instance and
/// is not persisted.
pub struct ConversationLog {
    cap: usize,
    by_persona: Mutex<HashMap<String, Vec<ChatMessage>>>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::with_cap(HISTORY_CAP)
    }

    pub fn with_cap(cap: usize) -> Self {
        Self {
            cap,
            by_persona: Mutex::new(HashMap::new()),
        }
    }

    /// Appends one turn, trimming the oldest entries past the cap.
    pub fn append(&self, persona_id: &str, message: ChatMessage) {
        let mut by_persona = self.by_persona.lock().unwrap_or_else(|e| e.into_inner());
        let log = by_persona.entry(persona_id.to_string()).or_default();
        log.push(message);
        if log.len() > self.cap {
            let excess = log.len() - self.cap;
            log.drain(..excess);
        }
    }

    pub fn history(&self, persona_id: &str) -> Vec<ChatMessage> {
        let by_persona = self.by_persona.lock().unwrap_or_else(|e| e.into_inner());
        by_persona.get(persona_id).cloned().unwrap_or_default()
    }

    pub fn len(&self, persona_id: &str) -> usize {
        let by_persona = self.by_persona.lock().unwrap_or_else(|e| e.into_inner());
        by_persona.get(persona_id).map(Vec::len).unwrap_or(0)
    }
}

impl Default for ConversationLog {
    fn default() -> Self {
        Self::new()
    }
}
