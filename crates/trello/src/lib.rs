//! Trello REST API adapter.
//!
//! Implements the [`workflow::TrelloApi`] trait over HTTPS with `reqwest`.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** This crate must not contain resolution rules.
//! Request construction, credential placement, response classification and
//! JSON decoding are handled here; the [`workflow`] crate never sees them.
//!
//! ## Response handling
//!
//! Every response is run through [`ResponseClass`] before decoding:
//!
//! | Status | Result |
//! |--------|--------|
//! | 2xx | body decoded as JSON |
//! | 401 | [`workflow::ApiError::Unauthorized`] |
//! | 400 | [`workflow::ApiError::BadRequest`] with the raw body |
//! | other | [`workflow::ApiError::Unknown`] with status and raw body |

pub mod classify;
pub mod client;
pub mod config;

pub use classify::ResponseClass;
pub use client::TrelloClient;
pub use config::{TrelloConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
