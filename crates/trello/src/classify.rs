//! Shared response classification.
//!
//! Every Trello request goes through [`ResponseClass`] so the
//! success / 401 / 400 / other split is decided in one place.

use reqwest::{Response, StatusCode};
use workflow::ApiError;

/// Outcome of a completed HTTP exchange, before any JSON decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseClass {
    /// Any 2xx status, with the raw body.
    Success(String),
    /// `401 Unauthorized`.
    Unauthorized,
    /// `400 Bad Request`, with the raw body.
    BadRequest(String),
    /// Any other status, with the raw body.
    Unknown(StatusCode, String),
}

impl ResponseClass {
    /// Classifies a status and body that have already been read.
    pub fn from_parts(status: StatusCode, body: String) -> Self {
        match status {
            s if s.is_success() => ResponseClass::Success(body),
            StatusCode::UNAUTHORIZED => ResponseClass::Unauthorized,
            StatusCode::BAD_REQUEST => ResponseClass::BadRequest(body),
            s => ResponseClass::Unknown(s, body),
        }
    }

    /// Reads the body of `response` and classifies it.
    ///
    /// A body that cannot be read on a success status is a transport failure;
    /// on an error status it is replaced by the empty string.
    pub async fn read(response: Response) -> Result<Self, ApiError> {
        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) if status.is_success() => return Err(crate::client::transport_error(err)),
            Err(_) => String::new(),
        };
        Ok(Self::from_parts(status, body))
    }

    /// Returns the body of a success, or the matching [`ApiError`].
    pub fn into_body(self) -> Result<String, ApiError> {
        match self {
            ResponseClass::Success(body) => Ok(body),
            ResponseClass::Unauthorized => Err(ApiError::Unauthorized),
            ResponseClass::BadRequest(body) => Err(ApiError::BadRequest { body }),
            ResponseClass::Unknown(status, body) => Err(ApiError::Unknown {
                status: status.as_u16(),
                body,
            }),
        }
    }
}
