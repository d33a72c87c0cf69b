//! Process exit codes.
//!
//! The only place a [`WorkflowError`] turns into a number. Reserved codes sit
//! above the range clap and the shell use.

use workflow::{ApiError, WorkflowError};

/// Board or list name not found. Same as a generic failure.
pub const EXIT_CODE_NOT_FOUND: u8 = 1;
/// Trello answered 401.
pub const EXIT_CODE_INVALID_CREDENTIALS: u8 = 200;
/// Trello answered 400.
pub const EXIT_CODE_BAD_REQUEST: u8 = 201;
/// Any other failure: unexpected status, transport, undecodable body, setup.
pub const EXIT_CODE_UNKNOWN_ERROR: u8 = 202;

pub fn code_for_workflow(err: &WorkflowError) -> u8 {
    match err {
        WorkflowError::BoardNotFound { .. } | WorkflowError::ListNotFound { .. } => {
            EXIT_CODE_NOT_FOUND
        }
        WorkflowError::Api(ApiError::Unauthorized) => EXIT_CODE_INVALID_CREDENTIALS,
        WorkflowError::Api(ApiError::BadRequest { .. }) => EXIT_CODE_BAD_REQUEST,
        WorkflowError::Api(
            ApiError::Unknown { .. } | ApiError::Transport { .. } | ApiError::Decode { .. },
        ) => EXIT_CODE_UNKNOWN_ERROR,
    }
}

/// Exit code for an error surfaced from `run`. Anything that is not a
/// [`WorkflowError`] happened during setup and counts as unknown.
pub fn code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<WorkflowError>()
        .map(code_for_workflow)
        .unwrap_or(EXIT_CODE_UNKNOWN_ERROR)
}
