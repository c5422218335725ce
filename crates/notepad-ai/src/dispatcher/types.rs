//! Types shared between the dispatcher and its worker tasks.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::{AiError, AiResponse};

/// Identifier of one dispatched question. Monotonic per dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Called by a worker after it has sent its result, so the UI can repaint.
pub type Waker = Arc<dyn Fn() + Send + Sync>;

/// Limits applied to every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatcherSettings {
    pub max_in_flight: usize,
    pub request_timeout: Duration,
}

impl Default for DispatcherSettings {
    fn default() -> Self {
        Self {
            max_in_flight: 1,
            request_timeout: Duration::from_secs(120),
        }
    }
}

/// What the caller must do right after a question is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatched {
    pub id: RequestId,
    pub prompt: String,
    /// Text to append to the buffer immediately, if any.
    pub placeholder: Option<&'static str>,
}

/// Outcome of a request, applied on the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Append `append` to the buffer.
    Answered { id: RequestId, append: String },
    /// Show `error` to the user. Nothing is appended.
    Failed { id: RequestId, error: AiError },
}

/// Message from a worker task back to the dispatcher.
#[derive(Debug)]
pub(crate) struct DispatchEvent {
    pub id: RequestId,
    pub result: Result<AiResponse, AiError>,
}
