use super::Query;

/// Prior prompts of the current conversation, oldest first.
#[derive(Debug, Default, Clone)]
pub struct ConversationContext {
    turns: Vec<String>,
}

impl ConversationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Remember a prompt that received an answer.
    pub fn record(&mut self, prompt: impl Into<String>) {
        self.turns.push(prompt.into());
    }

    /// Build the prompt to send for `query`.
    ///
    /// Continuations are prefixed with every earlier prompt joined by
    /// spaces. New conversations are sent as-is; callers clear the
    /// context before composing them.
    pub fn compose(&self, query: &Query) -> String {
        let question = query.question();
        if !query.is_continuation() || self.turns.is_empty() {
            return question.to_string();
        }
        format!("{} {}", self.turns.join(" "), question)
    }

    pub fn turns(&self) -> &[String] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
