//! `reqwest` implementation of [`workflow::TrelloApi`].

use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use workflow::{
    ApiError, Board, BoardId, BoardList, CardDraft, CreatedCard, Credentials, Label, Member,
    MemberId, Membership, TrelloApi,
};

use crate::{ResponseClass, TrelloConfig};

/// HTTPS client for the Trello REST API.
///
/// Credentials travel as the `key` and `token` query parameters on every
/// request. Nothing is retried or cached.
#[derive(Debug, Clone)]
pub struct TrelloClient {
    http: Client,
    base_url: String,
}

impl TrelloClient {
    /// Builds a client from `config`.
    ///
    /// # Errors
    ///
    /// Fails only if the TLS backend cannot be initialised.
    pub fn new(config: &TrelloConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// API root this client sends requests to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, credentials: &Credentials) -> RequestBuilder {
        self.http
            .request(method, format!("{}{path}", self.base_url))
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .query(&Auth::from(credentials))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        path: &str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        debug!(path, status = status.as_u16(), "trello responded");

        let body = ResponseClass::read(response).await?.into_body()?;
        serde_json::from_str(&body).map_err(|err| ApiError::Decode {
            message: format!("{path}: {err}"),
        })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        credentials: &Credentials,
    ) -> Result<T, ApiError> {
        self.send(path, self.request(Method::GET, path, credentials))
            .await
    }
}

#[async_trait]
impl TrelloApi for TrelloClient {
    async fn my_boards(&self, credentials: &Credentials) -> Result<Vec<Board>, ApiError> {
        self.get("/members/me/boards", credentials).await
    }

    async fn board_lists(
        &self,
        credentials: &Credentials,
        board_id: &BoardId,
    ) -> Result<Vec<BoardList>, ApiError> {
        self.get(&format!("/boards/{board_id}/lists"), credentials)
            .await
    }

    async fn board_memberships(
        &self,
        credentials: &Credentials,
        board_id: &BoardId,
    ) -> Result<Vec<Membership>, ApiError> {
        self.get(&format!("/boards/{board_id}/memberships"), credentials)
            .await
    }

    async fn member(
        &self,
        credentials: &Credentials,
        member_id: &MemberId,
    ) -> Result<Member, ApiError> {
        self.get(&format!("/members/{member_id}"), credentials)
            .await
    }

    async fn board_labels(
        &self,
        credentials: &Credentials,
        board_id: &BoardId,
    ) -> Result<Vec<Label>, ApiError> {
        self.get(&format!("/boards/{board_id}/labels"), credentials)
            .await
    }

    async fn create_card(
        &self,
        credentials: &Credentials,
        draft: &CardDraft,
    ) -> Result<CreatedCard, ApiError> {
        let path = "/cards";
        let request = self
            .request(Method::POST, path, credentials)
            .query(&CreateCardQuery::from(draft));
        self.send(path, request).await
    }
}

/// Converts a client failure into [`ApiError::Transport`].
///
/// The URL is stripped first: it carries the credentials in its query string.
pub(crate) fn transport_error(err: reqwest::Error) -> ApiError {
    let err = err.without_url();
    let message = if err.is_timeout() {
        format!("request timed out ({err})")
    } else {
        err.to_string()
    };
    ApiError::Transport { message }
}

// ---------------------------------------------------------------------------
// Query strings
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct Auth<'a> {
    key: &'a str,
    token: &'a str,
}

impl<'a> From<&'a Credentials> for Auth<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            key: credentials.key(),
            token: credentials.token(),
        }
    }
}

/// `POST /cards` parameters. Unset optional fields are left out; member and
/// label ids are always sent, comma-joined.
#[derive(Debug, Serialize)]
struct CreateCardQuery<'a> {
    #[serde(rename = "idList")]
    id_list: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    desc: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pos: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    due: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<&'a str>,
    #[serde(rename = "dueComplete", skip_serializing_if = "Option::is_none")]
    due_complete: Option<&'a str>,
    #[serde(rename = "idMembers")]
    id_members: String,
    #[serde(rename = "idLabels")]
    id_labels: String,
}

impl<'a> From<&'a CardDraft> for CreateCardQuery<'a> {
    fn from(draft: &'a CardDraft) -> Self {
        let fields = &draft.fields;
        Self {
            id_list: draft.list_id.as_str(),
            name: fields.title.as_deref(),
            desc: fields.description.as_deref(),
            pos: fields.position.as_deref(),
            due: fields.due.as_deref(),
            start: fields.start.as_deref(),
            due_complete: fields.due_complete.as_deref(),
            id_members: draft.member_ids_param(),
            id_labels: draft.label_ids_param(),
        }
    }
}
