//! Assistant validation (model, limits, timeout).

use crate::schema::NotepadConfig;

use super::helpers::{validate_non_empty, validate_range, validate_range_f64};

pub(crate) fn validate_assistant(errors: &mut Vec<String>, config: &NotepadConfig) {
    let a = &config.assistant;
    validate_non_empty(errors, "assistant.model", &a.model);
    validate_non_empty(errors, "assistant.api_key_env", &a.api_key_env);
    validate_range(errors, "assistant.max_tokens", a.max_tokens, 1, 65536);
    validate_range_f64(errors, "assistant.temperature", a.temperature, 0.0, 2.0);
    validate_range(errors, "assistant.max_in_flight", a.max_in_flight, 1, 8);
    validate_range(
        errors,
        "assistant.request_timeout_secs",
        a.request_timeout_secs,
        5,
        600,
    );
}
