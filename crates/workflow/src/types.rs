//! Value types exchanged between the workflow and the Trello API port.
//!
//! Everything here is transient: fetched fresh per invocation, never written
//! back. The records mirror the subset of Trello's JSON the workflow reads;
//! unknown fields are ignored on decode.

use serde::{Deserialize, Serialize};

use crate::{BoardId, CardId, LabelId, ListId, MemberId};

// ---------------------------------------------------------------------------
// Credentials
// ---------------------------------------------------------------------------

/// Trello API key and token, passed unchanged as query parameters on every
/// request. Not validated locally.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    key: String,
    token: String,
}

impl Credentials {
    /// Creates a credential pair.
    pub fn new(key: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            token: token.into(),
        }
    }

    /// The developer API key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The user access token.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("token", &"<redacted>")
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Remote records
// ---------------------------------------------------------------------------

/// A board visible to the credential holder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    #[serde(default)]
    pub name: String,
}

/// A list (column) on a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardList {
    pub id: ListId,
    #[serde(default)]
    pub name: String,
}

/// Association of a member to a board. Carries no username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    #[serde(rename = "idMember")]
    pub member_id: MemberId,
}

/// A member profile as returned by `GET /members/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    #[serde(default)]
    pub username: Option<String>,
}

/// A label defined on a board. Trello allows unnamed labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: LabelId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

/// The card Trello returns after a successful creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedCard {
    pub id: CardId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "shortUrl")]
    pub short_url: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Requested names
// ---------------------------------------------------------------------------

/// A comma-separated list of names supplied by the user.
///
/// Splitting is on `,` only, with no trimming. The empty string splits to a
/// single empty element, and the empty element never matches anything, so
/// an empty request selects nothing even on boards with unnamed labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSet(Vec<String>);

impl NameSet {
    /// Splits `raw` on commas.
    pub fn parse(raw: &str) -> Self {
        Self(raw.split(',').map(str::to_string).collect())
    }

    /// Returns `true` if `name` was requested.
    pub fn contains(&self, name: &str) -> bool {
        !name.is_empty() && self.0.iter().any(|n| n == name)
    }
}

// ---------------------------------------------------------------------------
// Card to create
// ---------------------------------------------------------------------------

/// User-supplied card attributes, passed through to Trello as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardFields {
    pub title: Option<String>,
    pub description: Option<String>,
    /// `top`, `bottom`, or a positive float, as Trello accepts it.
    pub position: Option<String>,
    pub due: Option<String>,
    pub start: Option<String>,
    pub due_complete: Option<String>,
}

/// A fully resolved card creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDraft {
    pub list_id: ListId,
    pub fields: CardFields,
    pub member_ids: Vec<MemberId>,
    pub label_ids: Vec<LabelId>,
}

impl CardDraft {
    /// Member ids in the comma-joined form Trello's `idMembers` expects.
    pub fn member_ids_param(&self) -> String {
        join_ids(&self.member_ids)
    }

    /// Label ids in the comma-joined form Trello's `idLabels` expects.
    pub fn label_ids_param(&self) -> String {
        join_ids(&self.label_ids)
    }
}

/// Joins ids with `,`. An empty slice yields the empty string.
pub fn join_ids<T: AsRef<str>>(ids: &[T]) -> String {
    ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",")
}
