//! Name-to-ID resolution and card creation.
//!
//! Five operations, run in sequence by [`create_card_from_names`]:
//! board lookup, list lookup, member lookup, label lookup, card creation.
//! Everything after the board lookup depends only on the resolved board id.
//!
//! Name matching is exact and case-sensitive. On duplicate board or list
//! names the first one in response order wins.
//!
//! Every API failure is fatal except in stage B of the member lookup, where a
//! member whose profile cannot be fetched is skipped.

use tracing::{debug, info, instrument};

use crate::{
    BoardId, CardDraft, CardFields, CreatedCard, Credentials, LabelId, ListId, MemberId,
    NameSet, TrelloApi, WorkflowError,
};

/// Everything the user supplies to create one card by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardRequest {
    pub board_name: String,
    pub list_name: String,
    /// Comma-separated usernames to assign. Empty assigns nobody.
    pub member_usernames: String,
    /// Comma-separated label names to attach. Empty attaches none.
    pub label_names: String,
    pub fields: CardFields,
}

/// Returns the id of the first board named `board_name`.
#[instrument(skip(api, credentials))]
pub async fn resolve_board<A: TrelloApi + ?Sized>(
    api: &A,
    credentials: &Credentials,
    board_name: &str,
) -> Result<BoardId, WorkflowError> {
    let boards = api.my_boards(credentials).await?;
    info!(count = boards.len(), "Successfully got user boards");

    boards
        .into_iter()
        .find(|b| b.name == board_name)
        .map(|b| b.id)
        .ok_or_else(|| WorkflowError::BoardNotFound {
            board_name: board_name.to_string(),
        })
}

/// Returns the id of the first list named `list_name` on `board_id`.
///
/// `board_name` is only used to make the not-found error readable.
#[instrument(skip(api, credentials))]
pub async fn resolve_list<A: TrelloApi + ?Sized>(
    api: &A,
    credentials: &Credentials,
    board_id: &BoardId,
    board_name: &str,
    list_name: &str,
) -> Result<ListId, WorkflowError> {
    let lists = api.board_lists(credentials, board_id).await?;
    info!(count = lists.len(), "Successfully got board lists");

    lists
        .into_iter()
        .find(|l| l.name == list_name)
        .map(|l| l.id)
        .ok_or_else(|| WorkflowError::ListNotFound {
            list_name: list_name.to_string(),
            board_name: board_name.to_string(),
        })
}

/// Returns the ids of the board members whose username is in `usernames`.
///
/// Memberships are fetched first (fatal on failure), then each member's
/// profile one at a time. A profile request that Trello answers with a
/// non-success status is skipped. Output follows membership order;
/// usernames with no matching member are ignored.
///
/// A failed membership listing aborts the run instead of being read as "no
/// members", so a card is never silently created unassigned.
#[instrument(skip(api, credentials))]
pub async fn resolve_members<A: TrelloApi + ?Sized>(
    api: &A,
    credentials: &Credentials,
    board_id: &BoardId,
    usernames: &str,
) -> Result<Vec<MemberId>, WorkflowError> {
    let wanted = NameSet::parse(usernames);

    let memberships = api.board_memberships(credentials, board_id).await?;
    info!(count = memberships.len(), "Successfully got board members");

    let mut matched = Vec::new();
    for membership in memberships {
        let member_id = membership.member_id;
        let member = match api.member(credentials, &member_id).await {
            Ok(member) => member,
            Err(err) if err.is_status() => {
                debug!(
                    member_id = %member_id,
                    error = %err,
                    "skipping member whose profile could not be fetched"
                );
                continue;
            }
            Err(err) => return Err(err.into()),
        };
        debug!(member_id = %member_id, "Successfully got member");

        if member
            .username
            .as_deref()
            .is_some_and(|username| wanted.contains(username))
        {
            matched.push(member_id);
        }
    }

    Ok(matched)
}

/// Returns the ids of every label on `board_id` whose name is in
/// `label_names`, in the order Trello lists them.
#[instrument(skip(api, credentials))]
pub async fn resolve_labels<A: TrelloApi + ?Sized>(
    api: &A,
    credentials: &Credentials,
    board_id: &BoardId,
    label_names: &str,
) -> Result<Vec<LabelId>, WorkflowError> {
    let wanted = NameSet::parse(label_names);

    let labels = api.board_labels(credentials, board_id).await?;
    info!(count = labels.len(), "Successfully got card labels");

    Ok(labels
        .into_iter()
        .filter(|l| wanted.contains(&l.name))
        .map(|l| l.id)
        .collect())
}

/// Creates the card. Not idempotent: every call creates a new card.
#[instrument(skip(api, credentials, draft), fields(list_id = %draft.list_id))]
pub async fn create_card<A: TrelloApi + ?Sized>(
    api: &A,
    credentials: &Credentials,
    draft: &CardDraft,
) -> Result<CreatedCard, WorkflowError> {
    let card = api.create_card(credentials, draft).await?;
    info!(card_id = %card.id, "Successfully created new card");
    Ok(card)
}

/// Resolves every name in `request` and creates the card.
///
/// Stops at the first fatal error; nothing is created unless every lookup
/// succeeded.
#[instrument(skip_all, fields(board = %request.board_name, list = %request.list_name))]
pub async fn create_card_from_names<A: TrelloApi + ?Sized>(
    api: &A,
    credentials: &Credentials,
    request: CardRequest,
) -> Result<CreatedCard, WorkflowError> {
    let board_id = resolve_board(api, credentials, &request.board_name).await?;
    let list_id = resolve_list(
        api,
        credentials,
        &board_id,
        &request.board_name,
        &request.list_name,
    )
    .await?;
    let member_ids =
        resolve_members(api, credentials, &board_id, &request.member_usernames).await?;
    let label_ids = resolve_labels(api, credentials, &board_id, &request.label_names).await?;

    let draft = CardDraft {
        list_id,
        fields: request.fields,
        member_ids,
        label_ids,
    };
    create_card(api, credentials, &draft).await
}
