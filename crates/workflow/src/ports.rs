//! Port trait for the Trello REST API.
//!
//! The workflow only sees [`TrelloApi`]; the `trello` crate supplies the HTTP
//! implementation and tests supply in-memory fakes. Each method maps to
//! exactly one request and reports the outcome without interpretation:
//! deciding whether a failure is fatal is the caller's job.

use async_trait::async_trait;

use crate::{
    ApiError, Board, BoardId, BoardList, CardDraft, CreatedCard, Credentials, Label, Member,
    MemberId, Membership,
};

/// The subset of the Trello REST API used to create a card by name.
#[async_trait]
pub trait TrelloApi: Send + Sync {
    /// `GET /members/me/boards`
    async fn my_boards(&self, credentials: &Credentials) -> Result<Vec<Board>, ApiError>;

    /// `GET /boards/{board_id}/lists`
    async fn board_lists(
        &self,
        credentials: &Credentials,
        board_id: &BoardId,
    ) -> Result<Vec<BoardList>, ApiError>;

    /// `GET /boards/{board_id}/memberships`
    async fn board_memberships(
        &self,
        credentials: &Credentials,
        board_id: &BoardId,
    ) -> Result<Vec<Membership>, ApiError>;

    /// `GET /members/{member_id}`
    async fn member(
        &self,
        credentials: &Credentials,
        member_id: &MemberId,
    ) -> Result<Member, ApiError>;

    /// `GET /boards/{board_id}/labels`
    async fn board_labels(
        &self,
        credentials: &Credentials,
        board_id: &BoardId,
    ) -> Result<Vec<Label>, ApiError>;

    /// `POST /cards`
    async fn create_card(
        &self,
        credentials: &Credentials,
        draft: &CardDraft,
    ) -> Result<CreatedCard, ApiError>;
}
