//! CLI error types with miette diagnostics.
//!
//! Folds facade failures, input validation, and config problems into
//! user-facing errors with help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use armory_config::ConfigError;
use armory_core::{CoreError, Failure};

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(
        code(armory::connection_failed),
        help(
            "Check that the weapon service is running and reachable.\n\
             Override the address with --server or ARMORY_SERVER."
        )
    )]
    ConnectionFailed { message: String },

    #[error("{message}")]
    #[diagnostic(
        code(armory::timeout),
        help("Raise the limit with --timeout <SECONDS> or set timeout in your profile.")
    )]
    Timeout { message: String },

    #[error("Could not set up the HTTP client")]
    #[diagnostic(
        code(armory::client_setup),
        help("Check the ca_cert path in your profile, or pass --insecure (-k).")
    )]
    ClientSetup {
        #[source]
        source: CoreError,
    },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(
        code(armory::not_found),
        help("Run: armory weapons list to see available weapons")
    )]
    NotFound { message: String },

    #[error("{message}")]
    #[diagnostic(code(armory::request_failed))]
    RequestFailed { message: String, status: u16 },

    #[error("Failed to update weapon with ID: {id}")]
    #[diagnostic(
        code(armory::update_rejected),
        help("The service did not accept the update. Run with -v for details.")
    )]
    UpdateRejected { id: u64 },

    // ── Validation ───────────────────────────────────────────────────
    #[error("{reason}")]
    #[diagnostic(code(armory::validation))]
    Validation { field: String, reason: String },

    #[error("Refusing to {action} without confirmation")]
    #[diagnostic(
        code(armory::confirmation_required),
        help("Standard input is not a terminal. Pass --yes (-y) to confirm.")
    )]
    ConfirmationRequired { action: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(armory::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: armory config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(armory::config_error),
        help("Check the file printed by: armory config path")
    )]
    Config { message: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(code(armory::io_error))]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::ClientSetup { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. }
            | Self::ConfirmationRequired { .. }
            | Self::ProfileNotFound { .. } => exit_code::USAGE,
            Self::RequestFailed { .. }
            | Self::UpdateRejected { .. }
            | Self::Config { .. }
            | Self::Io(_) => exit_code::GENERAL,
        }
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl From<Failure> for CliError {
    fn from(failure: Failure) -> Self {
        let message = failure.to_string();
        match failure {
            Failure::Status { code: 404, .. } => Self::NotFound { message },
            Failure::Status { code, .. } => Self::RequestFailed {
                message,
                status: code,
            },
            Failure::Transport {
                timed_out: true, ..
            } => Self::Timeout { message },
            Failure::Transport { .. } => Self::ConnectionFailed { message },
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput { field, reason } => Self::Validation { field, reason },
            CoreError::InvalidRecord { message } => Self::RequestFailed {
                message,
                status: 200,
            },
            client @ CoreError::Client(_) => Self::ClientSetup { source: client },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::ProfileNotFound { name, available } => Self::ProfileNotFound {
                name,
                available: if available.is_empty() {
                    "(none)".into()
                } else {
                    available.join(", ")
                },
            },
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            ConfigError::Io(e) => Self::Io(e),
            other => Self::Config {
                message: other.to_string(),
            },
        }
    }
}
