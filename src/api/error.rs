//! API error taxonomy
//!
//! Four families: transport failures, authentication failures (401 handled
//! by the refresh path first), field-level validation errors surfaced to
//! forms, and everything else as a status+message pair.

use std::collections::BTreeMap;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Network/transport failure before a response was produced
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// 401 that the refresh path could not or may not recover from
    #[error("unauthorized")]
    Unauthorized,

    /// The refresh exchange failed; stored credentials have been cleared
    /// and the caller must return to the login screen
    #[error("session expired")]
    SessionExpired,

    /// 4xx carrying field-level validation messages
    #[error("validation failed: {}", format_fields(.0))]
    Validation(BTreeMap<String, Vec<String>>),

    /// Any other non-success response
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Credential store I/O failure
    #[error("credential store error: {0}")]
    Storage(anyhow::Error),
}

impl ApiError {
    /// Whether the UI should drop back to the login screen.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired)
    }

    /// Flatten validation messages for inline display under a form.
    pub fn validation_summary(&self) -> Option<String> {
        match self {
            ApiError::Validation(fields) => Some(format_fields(fields)),
            _ => None,
        }
    }
}

fn format_fields(fields: &BTreeMap<String, Vec<String>>) -> String {
    fields
        .iter()
        .map(|(field, messages)| format!("{}: {}", field, messages.join(" ")))
        .collect::<Vec<_>>()
        .join("; ")
}
