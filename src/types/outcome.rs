use serde::{Deserialize, Serialize};
use std::fmt;

/// Returned in place of an empty string when the provider streamed no text.
pub const EMPTY_RESPONSE_PLACEHOLDER: &str = "⚠️ Empty response received. Please try again.";

const AUTH_MARKERS: &[&str] = &[
    "api_key",
    "invalid_api_key",
    "api key",
    "authentication",
    "unauthorized",
];
const QUOTA_MARKERS: &[&str] = &["insufficient_quota", "quota", "billing"];

/// Provider-agnostic classification of a failed generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    AuthError,
    QuotaError,
    GenericError,
}

impl FailureKind {
    /// Classify a provider fault from its textual description.
    ///
    /// Authentication markers win over quota markers when both appear.
    pub fn classify(description: &str) -> Self {
        let lowered = description.to_lowercase();
        if AUTH_MARKERS.iter().any(|marker| lowered.contains(marker)) {
            FailureKind::AuthError
        } else if QUOTA_MARKERS.iter().any(|marker| lowered.contains(marker)) {
            FailureKind::QuotaError
        } else {
            FailureKind::GenericError
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            FailureKind::AuthError => "AUTH_ERROR",
            FailureKind::QuotaError => "QUOTA_ERROR",
            FailureKind::GenericError => "GENERIC_ERROR",
        }
    }

    /// Human-readable text a front-end can show for this kind of failure.
    pub fn user_message(&self, detail: &str) -> String {
        match self {
            FailureKind::AuthError => {
                "❌ Invalid Groq API key. Please check and try again.".to_string()
            }
            FailureKind::QuotaError => {
                "❌ Groq API quota exceeded. Please check your billing/balance.".to_string()
            }
            FailureKind::GenericError => format!("❌ Error: {detail}"),
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Result of one itinerary generation.
///
/// A `Failure` may follow fragments that were already handed to the sink. The
/// sink keeps what it saw; the outcome never carries the partial text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GenerationOutcome {
    Success { text: String },
    Failure { kind: FailureKind, message: String },
}

impl GenerationOutcome {
    pub fn success(text: impl Into<String>) -> Self {
        GenerationOutcome::Success { text: text.into() }
    }

    /// Build a failure, classifying it from the message.
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        GenerationOutcome::Failure {
            kind: FailureKind::classify(&message),
            message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, GenerationOutcome::Success { .. })
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            GenerationOutcome::Success { text } => Some(text),
            GenerationOutcome::Failure { .. } => None,
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            GenerationOutcome::Success { .. } => None,
            GenerationOutcome::Failure { kind, .. } => Some(*kind),
        }
    }

    /// True when the provider finished without producing any text.
    pub fn is_empty_response(&self) -> bool {
        self.text() == Some(EMPTY_RESPONSE_PLACEHOLDER)
    }
}
