// ── Core error types ──
//
// Two families live here. `Failure` is the user-visible result of a
// terminal facade call and comes in exactly two kinds: the server answered
// with a status the operation does not accept, or the request failed
// before a usable answer arrived (transport, malformed body, conversion).
// `CoreError` covers local problems: bad input and client construction.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// The facade operation a [`Failure`] belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display, strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    #[strum(serialize = "load weapon")]
    LoadWeapon,
    #[strum(serialize = "load weapons")]
    LoadWeapons,
    #[strum(serialize = "add weapon")]
    AddWeapon,
    #[strum(serialize = "delete weapon")]
    DeleteWeapon,
    #[strum(serialize = "retrieve weapons")]
    ClassifyKeyword,
    #[strum(serialize = "generate text")]
    GenerateText,
}

/// Discriminant of a [`Failure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum FailureKind {
    /// Non-success status code.
    Status,
    /// Transport or parse failure.
    Transport,
}

/// Failure of a terminal facade operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    Status {
        operation: Operation,
        code: u16,
    },

    Transport {
        operation: Operation,
        detail: String,
        /// The request ran into the configured timeout.
        timed_out: bool,
    },
}

/// Result of a terminal facade operation.
pub type Outcome<T> = Result<T, Failure>;

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.operation()) {
            (Self::Status { code, .. }, Operation::GenerateText) => {
                write!(f, "OpenAI error: {code}")
            }
            (Self::Status { code, .. }, operation) => write!(f, "Failed to {operation}: {code}"),
            (Self::Transport { detail, .. }, Operation::GenerateText) => {
                write!(f, "Server connection error: {detail}")
            }
            (Self::Transport { detail, .. }, _) => write!(f, "An error occurred: {detail}"),
        }
    }
}

impl std::error::Error for Failure {}

impl Failure {
    /// Fold a transport-layer error into one of the two failure kinds.
    pub fn from_api(operation: Operation, err: &armory_api::Error) -> Self {
        match err {
            armory_api::Error::Status { status, .. } => Self::Status {
                operation,
                code: *status,
            },
            other => Self::Transport {
                operation,
                detail: other.to_string(),
                timed_out: other.is_timeout(),
            },
        }
    }

    /// A transport/parse failure with a free-form description.
    pub fn transport(operation: Operation, detail: impl ToString) -> Self {
        Self::Transport {
            operation,
            detail: detail.to_string(),
            timed_out: false,
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Status { .. } => FailureKind::Status,
            Self::Transport { .. } => FailureKind::Transport,
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            Self::Status { operation, .. } | Self::Transport { operation, .. } => *operation,
        }
    }

    /// The status code, for [`FailureKind::Status`] failures.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            Self::Transport { .. } => None,
        }
    }

    /// Human-readable description, as shown to the user.
    pub fn detail(&self) -> String {
        self.to_string()
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport { timed_out: true, .. })
    }
}

/// Unified error type for local (non-network) problems.
#[derive(Debug, Error)]
pub enum CoreError {
    /// User input could not be coerced into the domain type.
    #[error("{reason}")]
    InvalidInput { field: String, reason: String },

    /// The server returned a record that violates a model invariant.
    #[error("Invalid weapon record: {message}")]
    InvalidRecord { message: String },

    /// The HTTP client could not be constructed.
    #[error("Failed to initialise HTTP client: {0}")]
    Client(#[from] armory_api::Error),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn status_failures_name_operation_and_code() {
        let failure = Failure::Status {
            operation: Operation::LoadWeapon,
            code: 404,
        };
        assert_eq!(failure.to_string(), "Failed to load weapon: 404");
        assert_eq!(failure.kind(), FailureKind::Status);
        assert!(failure.is_not_found());
    }

    #[test]
    fn api_status_errors_become_status_failures() {
        let err = armory_api::Error::Status {
            status: 500,
            body: "boom".into(),
        };
        let failure = Failure::from_api(Operation::DeleteWeapon, &err);
        assert_eq!(
            failure,
            Failure::Status {
                operation: Operation::DeleteWeapon,
                code: 500
            }
        );
    }

    #[test]
    fn other_api_errors_become_transport_failures() {
        let err = armory_api::Error::Deserialization {
            message: "invalid type: string \"fast\"".into(),
            body: String::new(),
        };
        let failure = Failure::from_api(Operation::LoadWeapons, &err);
        assert_eq!(failure.kind(), FailureKind::Transport);
        assert_eq!(failure.status_code(), None);
        assert_eq!(
            failure.detail(),
            "An error occurred: Deserialization error: invalid type: string \"fast\""
        );
        assert_eq!(failure.operation(), Operation::LoadWeapons);
    }

    #[test]
    fn parse_errors_quoting_timeouts_are_not_timeouts() {
        let err = armory_api::Error::Deserialization {
            message: "invalid value: string \"timed out\", expected a count".into(),
            body: String::new(),
        };
        let failure = Failure::from_api(Operation::LoadWeapon, &err);
        assert_eq!(failure.kind(), FailureKind::Transport);
        assert!(!failure.is_timeout());
    }

    #[test]
    fn text_generation_failures_name_the_chat_backend() {
        let status = Failure::Status {
            operation: Operation::GenerateText,
            code: 500,
        };
        assert_eq!(status.to_string(), "OpenAI error: 500");

        let transport = Failure::transport(Operation::GenerateText, "connection refused");
        assert_eq!(
            transport.to_string(),
            "Server connection error: connection refused"
        );
    }

    #[test]
    fn operations_render_as_phrases() {
        assert_eq!(Operation::ClassifyKeyword.to_string(), "retrieve weapons");
        assert_eq!(FailureKind::Transport.to_string(), "transport");
    }
}
