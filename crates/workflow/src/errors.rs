//! Error types for the card creation workflow.
//!
//! [`ApiError`] is what the [`crate::TrelloApi`] port reports for a single
//! request. [`WorkflowError`] is what the resolution operations report: either
//! a name that could not be resolved, or an [`ApiError`] that is fatal for the
//! stage that produced it.
//!
//! The `Display` text of each variant is the message shown to the user. The
//! mapping to process exit codes lives in the CLI, not here.

use thiserror::Error;

// ---------------------------------------------------------------------------
// Port-level errors
// ---------------------------------------------------------------------------

/// Failure of a single Trello API request.
///
/// The first three variants come from the shared response classifier and
/// describe a non-success HTTP status. `Transport` and `Decode` cover the
/// cases where no usable response was obtained at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Trello answered `401 Unauthorized`.
    #[error(
        "You do not have the required permissions. Check your Trello API key and Trello API token."
    )]
    Unauthorized,

    /// Trello answered `400 Bad Request`.
    #[error("Trello responded with Bad Request Error. Response message: {body}")]
    BadRequest {
        /// Raw response body.
        body: String,
    },

    /// Trello answered with any other non-success status.
    #[error(
        "An unknown HTTP Status {status} and response occurred when attempting your request: {body}"
    )]
    Unknown {
        /// Numeric HTTP status.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The request could not be sent or no response arrived (DNS, TLS,
    /// connection reset, timeout).
    #[error("Request to Trello failed: {message}")]
    Transport {
        /// Description of the underlying client error.
        message: String,
    },

    /// A success response carried a body that is not the expected JSON.
    #[error("Trello returned an unexpected response body: {message}")]
    Decode {
        /// Description of the decode failure.
        message: String,
    },
}

impl ApiError {
    /// Returns `true` if Trello itself answered with a non-success status,
    /// as opposed to the request never completing.
    pub fn is_status(&self) -> bool {
        matches!(
            self,
            ApiError::Unauthorized | ApiError::BadRequest { .. } | ApiError::Unknown { .. }
        )
    }
}

// ---------------------------------------------------------------------------
// Workflow-level errors
// ---------------------------------------------------------------------------

/// Errors that abort the card creation workflow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// No board visible to the credential holder has the requested name.
    #[error("No board named '{board_name}' found in Trello response. Ensure you have access to '{board_name}'.")]
    BoardNotFound {
        /// The name that was searched for.
        board_name: String,
    },

    /// The resolved board has no list with the requested name.
    #[error("No list named '{list_name}' found in Trello response. Ensure that '{list_name}' exists on '{board_name}'.")]
    ListNotFound {
        /// The name that was searched for.
        list_name: String,
        /// The board that was searched.
        board_name: String,
    },

    /// A Trello request failed at a stage where failure is fatal.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl WorkflowError {
    /// Returns `true` for the locally detected "name not found" failures.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            WorkflowError::BoardNotFound { .. } | WorkflowError::ListNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_message_echoes_body() {
        let err = ApiError::BadRequest {
            body: "invalid value for idList".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Trello responded with Bad Request Error. Response message: invalid value for idList"
        );
    }

    #[test]
    fn list_not_found_names_the_board() {
        let err = WorkflowError::ListNotFound {
            list_name: "Doing".to_string(),
            board_name: "Eng".to_string(),
        };
        assert!(err.to_string().contains("exists on 'Eng'"));
        assert!(err.is_not_found());
    }

    #[test]
    fn api_error_passes_message_through() {
        let err = WorkflowError::from(ApiError::Unauthorized);
        assert_eq!(err.to_string(), ApiError::Unauthorized.to_string());
        assert!(!err.is_not_found());
    }

    #[test]
    fn only_remote_statuses_count_as_status_errors() {
        assert!(ApiError::Unknown {
            status: 503,
            body: String::new()
        }
        .is_status());
        assert!(!ApiError::Transport {
            message: "timed out".to_string()
        }
        .is_status());
    }
}
