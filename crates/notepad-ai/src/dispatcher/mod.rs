//! Runs assistant requests off the UI thread.
//!
//! The UI calls [`Dispatcher::submit`] with the query text and later
//! drains finished requests with [`Dispatcher::poll`]. Conversation
//! context is only touched from those two calls, so it always lives on
//! the caller's thread; workers just send a [`types::DispatchEvent`]
//! back over a channel.

mod types;
mod worker;


use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
#[cfg(test)]
use std::time::{Duration, Instant};

use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::conversation::{format_response, ConversationContext, Query, PLACEHOLDER};
use crate::token_tracker::TokenTracker;
use crate::{AiClient, AiError};

pub use types::{Completion, Dispatched, DispatcherSettings, RequestId, Waker};
use types::DispatchEvent;

struct InFlight {
    token: CancellationToken,
    prompt: String,
    /// Conversation the request belongs to.
    generation: u64,
}

pub struct Dispatcher {
    client: Arc<dyn AiClient>,
    handle: Handle,
    settings: DispatcherSettings,
    waker: Option<Waker>,
    context: ConversationContext,
    /// Bumped whenever a new conversation starts.
    generation: u64,
    next_id: u64,
    in_flight: HashMap<RequestId, InFlight>,
    tracker: TokenTracker,
    event_tx: Sender<DispatchEvent>,
    event_rx: Receiver<DispatchEvent>,
}

impl Dispatcher {
    /// Requests are spawned onto `handle`.
    pub fn new(client: Arc<dyn AiClient>, handle: Handle, settings: DispatcherSettings) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        Self {
            client,
            handle,
            settings: DispatcherSettings {
                max_in_flight: settings.max_in_flight.max(1),
                ..settings
            },
            waker: None,
            context: ConversationContext::new(),
            generation: 0,
            next_id: 1,
            in_flight: HashMap::new(),
            tracker: TokenTracker::new(),
            event_tx,
            event_rx,
        }
    }

    pub fn with_waker(mut self, waker: Waker) -> Self {
        self.waker = Some(waker);
        self
    }

    /// Dispatch `text` if it is a question.
    ///
    /// Returns `Ok(None)` for text that is not a question and
    /// `Err(AiError::Busy)` when the in-flight limit is reached. In both
    /// cases nothing changes.
    pub fn submit(&mut self, text: &str) -> Result<Option<Dispatched>, AiError> {
        let Some(query) = Query::parse(text) else {
            debug!("text is not a question, ignoring");
            return Ok(None);
        };

        if self.in_flight.len() >= self.settings.max_in_flight {
            warn!(
                in_flight = self.in_flight.len(),
                limit = self.settings.max_in_flight,
                "assistant busy, rejecting question"
            );
            return Err(AiError::Busy {
                limit: self.settings.max_in_flight,
            });
        }

        let placeholder = if query.is_continuation() {
            None
        } else {
            self.context.clear();
            self.generation += 1;
            Some(PLACEHOLDER)
        };
        let prompt = self.context.compose(&query);

        let id = RequestId(self.next_id);
        self.next_id += 1;
        let token = CancellationToken::new();
        self.in_flight.insert(
            id,
            InFlight {
                token: token.clone(),
                prompt: prompt.clone(),
                generation: self.generation,
            },
        );

        info!(
            id = %id,
            continuation = query.is_continuation(),
            context_turns = self.context.len(),
            model = self.client.model(),
            "dispatching question"
        );

        let client = Arc::clone(&self.client);
        let tx = self.event_tx.clone();
        let waker = self.waker.clone();
        let timeout = self.settings.request_timeout;
        let task_prompt = prompt.clone();
        self.handle.spawn(async move {
            let result = worker::run_request(client, task_prompt, token, timeout).await;
            let _ = tx.send(DispatchEvent { id, result });
            if let Some(wake) = waker {
                wake();
            }
        });

        Ok(Some(Dispatched {
            id,
            prompt,
            placeholder,
        }))
    }

    /// Drain every finished request without blocking.
    pub fn poll(&mut self) -> Vec<Completion> {
        let mut done = Vec::new();
        while let Ok(event) = self.event_rx.try_recv() {
            if let Some(completion) = self.process_event(event) {
                done.push(completion);
            }
        }
        done
    }

    /// Block for up to `timeout` waiting for the next completion.
    #[cfg(test)]
    pub(crate) fn wait(&mut self, timeout: Duration) -> Option<Completion> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.checked_duration_since(Instant::now())?;
            let event = self.event_rx.recv_timeout(remaining).ok()?;
            if let Some(completion) = self.process_event(event) {
                return Some(completion);
            }
        }
    }

    fn process_event(&mut self, event: DispatchEvent) -> Option<Completion> {
        let DispatchEvent { id, result } = event;
        let Some(request) = self.in_flight.remove(&id) else {
            debug!(id = %id, "dropping result of cancelled request");
            return None;
        };

        match result {
            Ok(response) => {
                self.tracker.record(&response.usage);
                if request.generation == self.generation {
                    self.context.record(request.prompt);
                } else {
                    debug!(id = %id, "answer belongs to an earlier conversation");
                }
                info!(
                    id = %id,
                    tokens = response.usage.total_tokens(),
                    "question answered"
                );
                Some(Completion::Answered {
                    id,
                    append: format_response(&response.content),
                })
            }
            Err(error) => {
                warn!(id = %id, error = %error, "question failed");
                Some(Completion::Failed { id, error })
            }
        }
    }

    /// Cancel every in-flight request. Their results are discarded.
    pub fn cancel_all(&mut self) -> Vec<RequestId> {
        let mut ids: Vec<RequestId> = self
            .in_flight
            .drain()
            .map(|(id, request)| {
                request.token.cancel();
                id
            })
            .collect();
        ids.sort();
        if !ids.is_empty() {
            info!(count = ids.len(), "cancelled in-flight requests");
        }
        ids
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub fn context(&self) -> &ConversationContext {
        &self.context
    }

    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }

    pub fn settings(&self) -> DispatcherSettings {
        self.settings
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        for request in self.in_flight.values() {
            request.token.cancel();
        }
    }
}
