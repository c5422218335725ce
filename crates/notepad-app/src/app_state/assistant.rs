//! Inline assistant: runtime management, dispatch, and completion polling.

use std::sync::Arc;
use std::time::Duration;

use notepad_ai::{
    AiError, Completion, Dispatcher, DispatcherSettings, GeminiClient, GeminiConfig, Query,
};
use notepad_common::Notification;
use notepad_config::schema::TriggerScope;

use super::core::NotepadApp;

const TRIGGER_HINT: &str = "Start a line with '-' to ask the assistant";

impl NotepadApp {
    /// Handle the Ask Assistant action.
    ///
    /// Text that is not a question never reaches the client, so a missing
    /// API key only matters once the user actually asks something.
    pub(super) fn ask_assistant(&mut self, ctx: &egui::Context) {
        let text = self.query_text(Some(ctx));
        if Query::parse(&text).is_none() {
            self.notify(Notification::info(TRIGGER_HINT));
            return;
        }
        if !self.config.assistant.enabled {
            self.notify(Notification::warning("Assistant is disabled in config"));
            return;
        }
        if let Err(e) = self.ensure_assistant(ctx) {
            self.show_error(e);
            return;
        }
        self.submit_query_text(&text);
    }

    /// Lazily build the Gemini client, the tokio runtime, and the dispatcher.
    fn ensure_assistant(&mut self, ctx: &egui::Context) -> Result<(), AiError> {
        if self.assistant.is_some() {
            return Ok(());
        }

        let cfg = &self.config.assistant;
        let gemini = GeminiConfig::from_env(&cfg.api_key_env)?
            .with_model(cfg.model.clone())
            .with_max_tokens(cfg.max_tokens)
            .with_temperature(cfg.temperature);
        let client = GeminiClient::new(gemini)?;
        let settings = DispatcherSettings {
            max_in_flight: cfg.max_in_flight as usize,
            request_timeout: Duration::from_secs(u64::from(cfg.request_timeout_secs)),
        };

        if self.tokio_runtime.is_none() {
            let rt = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .thread_name("notepad-assistant")
                .enable_all()
                .build()
                .map_err(|e| {
                    tracing::error!("Failed to create tokio runtime: {e}");
                    AiError::NotConfigured(format!("async runtime unavailable: {e}"))
                })?;
            self.tokio_runtime = Some(rt);
        }
        let Some(handle) = self.tokio_runtime.as_ref().map(|rt| rt.handle().clone()) else {
            return Err(AiError::NotConfigured("async runtime unavailable".into()));
        };

        let repaint = ctx.clone();
        let dispatcher = Dispatcher::new(Arc::new(client), handle, settings)
            .with_waker(Arc::new(move || repaint.request_repaint()));
        tracing::info!(model = dispatcher.model(), "Assistant ready");
        self.assistant = Some(dispatcher);
        Ok(())
    }

    /// Text the assistant should look at, per `trigger_scope`.
    ///
    /// Without a context the line scope uses the last line.
    pub(super) fn query_text(&self, ctx: Option<&egui::Context>) -> String {
        match self.config.assistant.trigger_scope {
            TriggerScope::Buffer => self.document.text().to_string(),
            TriggerScope::Line => {
                let cursor = ctx
                    .and_then(|ctx| self.selection(ctx))
                    .map_or(self.document.char_len(), |range| range.end);
                self.document.line_at(cursor).to_string()
            }
        }
    }

    /// Submit the current query text to the dispatcher.
    pub(super) fn submit_query_text(&mut self, text: &str) {
        let Some(dispatcher) = self.assistant.as_mut() else {
            return;
        };
        let model = dispatcher.model().to_string();

        match dispatcher.submit(text) {
            Ok(Some(dispatched)) => {
                if let Some(placeholder) = dispatched.placeholder {
                    self.document.append(placeholder);
                }
                self.notify(Notification::info(format!(
                    "Asking {model} ({})",
                    dispatched.id
                )));
            }
            Ok(None) => self.notify(Notification::info(TRIGGER_HINT)),
            Err(e @ AiError::Busy { .. }) => self.notify(Notification::warning(e.to_string())),
            Err(e) => self.show_error(e),
        }
    }

    /// Cancel every request still running.
    pub(super) fn cancel_requests(&mut self) {
        let cancelled = self
            .assistant
            .as_mut()
            .map(Dispatcher::cancel_all)
            .unwrap_or_default();
        if cancelled.is_empty() {
            return;
        }
        self.notify(Notification::info(format!(
            "Cancelled {} request(s)",
            cancelled.len()
        )));
    }

    /// Apply finished requests to the buffer (non-blocking).
    pub(super) fn poll_assistant(&mut self) {
        let Some(dispatcher) = self.assistant.as_mut() else {
            return;
        };
        for completion in dispatcher.poll() {
            self.apply_completion(completion);
        }
    }

    pub(super) fn apply_completion(&mut self, completion: Completion) {
        match completion {
            Completion::Answered { id, append } => {
                tracing::debug!(id = %id, "appending answer");
                self.document.append(&append);
            }
            Completion::Failed { error, .. } => self.show_error(error),
        }
    }
}
