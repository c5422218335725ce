//! Question parsing and conversation context.
//!
//! Text handed to the assistant is a question when it starts with `-`.
//! A question starting with `>>` continues the current conversation;
//! anything else starts a new one.

mod context;
mod query;

pub use context::ConversationContext;
pub use query::{Query, CONTINUATION_MARKER, QUESTION_PREFIX};

/// Appended to the buffer when a new conversation is dispatched.
pub const PLACEHOLDER: &str = "\n...";

/// Text appended to the buffer for a successful answer.
pub fn format_response(text: &str) -> String {
    format!("\nResponse: {text}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_is_appended_verbatim() {
        assert_eq!(format_response("42"), "\nResponse: 42\n");
        assert_eq!(
            format_response("  spaced\nlines  "),
            "\nResponse:   spaced\nlines  \n"
        );
    }
}
