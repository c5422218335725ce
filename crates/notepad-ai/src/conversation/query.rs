/// Leading character that marks text as a question.
pub const QUESTION_PREFIX: char = '-';

/// Marker that continues the current conversation.
pub const CONTINUATION_MARKER: &str = ">>";

/// A question extracted from editor text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Starts a new conversation; prior context is discarded.
    New(String),
    /// Extends the current conversation.
    Continuation(String),
}

impl Query {
    /// Classify `text`. Returns `None` when the text is not a question
    /// or the question is empty.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if !trimmed.starts_with(QUESTION_PREFIX) {
            return None;
        }

        let question = trimmed.trim_start_matches(QUESTION_PREFIX).trim();
        let query = match question.strip_prefix(CONTINUATION_MARKER) {
            Some(rest) => Self::Continuation(rest.trim_start().to_string()),
            None => Self::New(question.to_string()),
        };

        (!query.question().is_empty()).then_some(query)
    }

    pub fn question(&self) -> &str {
        match self {
            Self::New(q) | Self::Continuation(q) => q,
        }
    }

    pub fn is_continuation(&self) -> bool {
        matches!(self, Self::Continuation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_starts_new_conversation() {
        assert_eq!(
            Query::parse("- What is X?"),
            Some(Query::New("What is X?".into()))
        );
    }

    #[test]
    fn surrounding_whitespace_and_repeated_dashes_are_stripped() {
        assert_eq!(
            Query::parse("\n  --- What is X?  \n"),
            Some(Query::New("What is X?".into()))
        );
    }

    #[test]
    fn marker_makes_continuation() {
        let q = Query::parse("- >>and then?").unwrap();
        assert!(q.is_continuation());
        assert_eq!(q.question(), "and then?");
    }

    #[test]
    fn whitespace_after_marker_is_dropped() {
        assert_eq!(
            Query::parse("->>   and then?"),
            Some(Query::Continuation("and then?".into()))
        );
    }

    #[test]
    fn text_without_dash_is_not_a_question() {
        assert_eq!(Query::parse("What is X?"), None);
        assert_eq!(Query::parse(""), None);
        assert_eq!(Query::parse("  x - y"), None);
    }

    #[test]
    fn empty_questions_are_ignored() {
        assert_eq!(Query::parse("-"), None);
        assert_eq!(Query::parse("---   "), None);
        assert_eq!(Query::parse("- >>"), None);
    }

    #[test]
    fn inner_marker_is_not_a_continuation() {
        assert_eq!(
            Query::parse("- a >> b"),
            Some(Query::New("a >> b".into()))
        );
    }
}
