//! Domain core for creating a Trello card by name.
//!
//! The user names a board, a list, some members and some labels; Trello wants
//! ids. This crate resolves the names to ids through the [`TrelloApi`] port
//! and then creates the card. Infrastructure crates implement the port; they
//! never add resolution rules.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! It defines *what* is asked of Trello; the `trello` crate defines *how*.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`BoardId`, `ListId`, `RunId`, etc.) |
//! | [`types`] | Remote records, credentials, the card draft |
//! | [`errors`] | [`ApiError`] and [`WorkflowError`] |
//! | [`ports`] | The [`TrelloApi`] trait |
//! | [`resolve`] | The five operations and [`create_card_from_names`] |

pub mod errors;
pub mod identifiers;
pub mod ports;
pub mod resolve;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use errors::{ApiError, WorkflowError};
pub use identifiers::{BoardId, CardId, LabelId, ListId, MemberId, RunId};
pub use ports::TrelloApi;
pub use resolve::{
    create_card, create_card_from_names, resolve_board, resolve_labels, resolve_list,
    resolve_members, CardRequest,
};
pub use types::{
    join_ids, Board, BoardList, CardDraft, CardFields, CreatedCard, Credentials, Label, Member,
    Membership, NameSet,
};
