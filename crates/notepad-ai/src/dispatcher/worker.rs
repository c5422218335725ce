//! The async body of one request.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::{AiClient, AiError, AiResponse, Message};

/// Send `prompt` as a single user message, giving up on cancellation or
/// after `timeout`.
pub(super) async fn run_request(
    client: Arc<dyn AiClient>,
    prompt: String,
    token: CancellationToken,
    timeout: Duration,
) -> Result<AiResponse, AiError> {
    let messages = [Message::user(prompt)];
    tokio::select! {
        _ = token.cancelled() => Err(AiError::Cancelled),
        result = tokio::time::timeout(timeout, client.send_message(&messages)) => {
            result.unwrap_or(Err(AiError::Timeout))
        }
    }
}
