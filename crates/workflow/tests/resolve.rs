//! Resolution behaviour against an in-memory Trello.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use workflow::{
    create_card_from_names, resolve_board, resolve_labels, resolve_list, resolve_members,
    ApiError, Board, BoardId, BoardList, CardDraft, CardFields, CardId, CardRequest, CreatedCard,
    Credentials, Label, LabelId, ListId, Member, MemberId, Membership, TrelloApi, WorkflowError,
};

// ---------------------------------------------------------------------------
// Fake
// ---------------------------------------------------------------------------

#[derive(Default)]
struct FakeTrello {
    boards: Option<Result<Vec<Board>, ApiError>>,
    lists: Option<Result<Vec<BoardList>, ApiError>>,
    memberships: Option<Result<Vec<Membership>, ApiError>>,
    members: HashMap<String, Result<Member, ApiError>>,
    labels: Option<Result<Vec<Label>, ApiError>>,
    create: Option<Result<CreatedCard, ApiError>>,
    calls: Mutex<Vec<String>>,
    drafts: Mutex<Vec<CardDraft>>,
}

impl FakeTrello {
    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn with_boards(mut self, boards: &[(&str, &str)]) -> Self {
        self.boards = Some(Ok(boards
            .iter()
            .map(|(id, name)| Board {
                id: BoardId::new(*id).unwrap(),
                name: name.to_string(),
            })
            .collect()));
        self
    }

    fn with_lists(mut self, lists: &[(&str, &str)]) -> Self {
        self.lists = Some(Ok(lists
            .iter()
            .map(|(id, name)| BoardList {
                id: ListId::new(*id).unwrap(),
                name: name.to_string(),
            })
            .collect()));
        self
    }

    fn with_memberships(mut self, ids: &[&str]) -> Self {
        self.memberships = Some(Ok(ids
            .iter()
            .map(|id| Membership {
                member_id: MemberId::new(*id).unwrap(),
            })
            .collect()));
        self
    }

    fn with_member(mut self, id: &str, username: Option<&str>) -> Self {
        self.members.insert(
            id.to_string(),
            Ok(Member {
                id: MemberId::new(id).unwrap(),
                username: username.map(str::to_string),
            }),
        );
        self
    }

    fn with_member_error(mut self, id: &str, err: ApiError) -> Self {
        self.members.insert(id.to_string(), Err(err));
        self
    }

    fn with_labels(mut self, labels: &[(&str, &str)]) -> Self {
        self.labels = Some(Ok(labels
            .iter()
            .map(|(id, name)| Label {
                id: LabelId::new(*id).unwrap(),
                name: name.to_string(),
            })
            .collect()));
        self
    }

    fn with_created(mut self, id: &str) -> Self {
        self.create = Some(Ok(CreatedCard {
            id: CardId::new(id).unwrap(),
            name: None,
            short_url: None,
        }));
        self
    }
}

fn canned<T: Clone>(value: &Option<Result<T, ApiError>>, what: &str) -> Result<T, ApiError> {
    value
        .clone()
        .unwrap_or_else(|| panic!("unexpected call to {what}"))
}

#[async_trait]
impl TrelloApi for FakeTrello {
    async fn my_boards(&self, _credentials: &Credentials) -> Result<Vec<Board>, ApiError> {
        self.record("boards");
        canned(&self.boards, "my_boards")
    }

    async fn board_lists(
        &self,
        _credentials: &Credentials,
        board_id: &BoardId,
    ) -> Result<Vec<BoardList>, ApiError> {
        self.record(format!("lists:{board_id}"));
        canned(&self.lists, "board_lists")
    }

    async fn board_memberships(
        &self,
        _credentials: &Credentials,
        board_id: &BoardId,
    ) -> Result<Vec<Membership>, ApiError> {
        self.record(format!("memberships:{board_id}"));
        canned(&self.memberships, "board_memberships")
    }

    async fn member(
        &self,
        _credentials: &Credentials,
        member_id: &MemberId,
    ) -> Result<Member, ApiError> {
        self.record(format!("member:{member_id}"));
        self.members
            .get(member_id.as_str())
            .cloned()
            .unwrap_or_else(|| panic!("unexpected member lookup {member_id}"))
    }

    async fn board_labels(
        &self,
        _credentials: &Credentials,
        board_id: &BoardId,
    ) -> Result<Vec<Label>, ApiError> {
        self.record(format!("labels:{board_id}"));
        canned(&self.labels, "board_labels")
    }

    async fn create_card(
        &self,
        _credentials: &Credentials,
        draft: &CardDraft,
    ) -> Result<CreatedCard, ApiError> {
        self.record("create");
        self.drafts.lock().unwrap().push(draft.clone());
        canned(&self.create, "create_card")
    }
}

fn creds() -> Credentials {
    Credentials::new("key", "token")
}

fn board_id(id: &str) -> BoardId {
    BoardId::new(id).unwrap()
}

fn ids<T: AsRef<str>>(values: &[T]) -> Vec<&str> {
    values.iter().map(AsRef::as_ref).collect()
}

// ---------------------------------------------------------------------------
// Board lookup
// ---------------------------------------------------------------------------

#[tokio::test]
async fn board_lookup_returns_matching_id() {
    let api = FakeTrello::default().with_boards(&[("b1", "Eng")]);

    let id = resolve_board(&api, &creds(), "Eng").await.unwrap();

    assert_eq!(id.as_str(), "b1");
}

#[tokio::test]
async fn board_lookup_without_match_is_not_found() {
    let api = FakeTrello::default().with_boards(&[("b1", "Eng")]);

    let err = resolve_board(&api, &creds(), "Ops").await.unwrap_err();

    assert_eq!(
        err,
        WorkflowError::BoardNotFound {
            board_name: "Ops".to_string()
        }
    );
}

#[tokio::test]
async fn board_lookup_is_case_sensitive() {
    let api = FakeTrello::default().with_boards(&[("b1", "Eng")]);

    let err = resolve_board(&api, &creds(), "eng").await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn duplicate_board_names_resolve_to_first() {
    let api = FakeTrello::default().with_boards(&[("b0", "Ops"), ("b1", "Eng"), ("b2", "Eng")]);

    let id = resolve_board(&api, &creds(), "Eng").await.unwrap();

    assert_eq!(id.as_str(), "b1");
}

#[tokio::test]
async fn board_lookup_propagates_api_error() {
    let api = FakeTrello {
        boards: Some(Err(ApiError::BadRequest {
            body: "invalid key".to_string(),
        })),
        ..Default::default()
    };

    let err = resolve_board(&api, &creds(), "Eng").await.unwrap_err();

    assert_eq!(
        err,
        WorkflowError::Api(ApiError::BadRequest {
            body: "invalid key".to_string()
        })
    );
}

// ---------------------------------------------------------------------------
// List lookup
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_lookup_queries_resolved_board() {
    let api = FakeTrello::default().with_lists(&[("l1", "To Do"), ("l2", "Doing")]);

    let id = resolve_list(&api, &creds(), &board_id("b1"), "Eng", "Doing")
        .await
        .unwrap();

    assert_eq!(id.as_str(), "l2");
    assert_eq!(api.calls(), vec!["lists:b1"]);
}

#[tokio::test]
async fn missing_list_reports_board_name() {
    let api = FakeTrello::default().with_lists(&[("l1", "To Do")]);

    let err = resolve_list(&api, &creds(), &board_id("b1"), "Eng", "Done")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        WorkflowError::ListNotFound {
            list_name: "Done".to_string(),
            board_name: "Eng".to_string(),
        }
    );
}

// ---------------------------------------------------------------------------
// Member lookup
// ---------------------------------------------------------------------------

#[tokio::test]
async fn member_lookup_matches_usernames_in_membership_order() {
    let api = FakeTrello::default()
        .with_memberships(&["m1", "m2", "m3"])
        .with_member("m1", Some("alice"))
        .with_member("m2", Some("dave"))
        .with_member("m3", Some("bob"));

    let matched = resolve_members(&api, &creds(), &board_id("b1"), "bob,carol,alice")
        .await
        .unwrap();

    assert_eq!(ids(&matched), vec!["m1", "m3"]);
    assert_eq!(
        api.calls(),
        vec!["memberships:b1", "member:m1", "member:m2", "member:m3"]
    );
}

// Unlike every other lookup, a failed profile fetch does not abort the run.
#[tokio::test]
async fn member_lookup_skips_profiles_that_fail_to_load() {
    let api = FakeTrello::default()
        .with_memberships(&["m1", "m2", "m3"])
        .with_member("m1", Some("alice"))
        .with_member_error("m2", ApiError::Unauthorized)
        .with_member_error(
            "m3",
            ApiError::Unknown {
                status: 404,
                body: "member not found".to_string(),
            },
        );

    let matched = resolve_members(&api, &creds(), &board_id("b1"), "alice,bob")
        .await
        .unwrap();

    assert_eq!(ids(&matched), vec!["m1"]);
}

#[tokio::test]
async fn member_without_username_is_never_matched() {
    let api = FakeTrello::default()
        .with_memberships(&["m1"])
        .with_member("m1", None);

    let matched = resolve_members(&api, &creds(), &board_id("b1"), "")
        .await
        .unwrap();

    assert!(matched.is_empty());
}

#[tokio::test]
async fn membership_listing_failure_is_fatal() {
    let api = FakeTrello {
        memberships: Some(Err(ApiError::Unauthorized)),
        ..Default::default()
    };

    let err = resolve_members(&api, &creds(), &board_id("b1"), "alice")
        .await
        .unwrap_err();

    assert_eq!(err, WorkflowError::Api(ApiError::Unauthorized));
}

#[tokio::test]
async fn transport_failure_on_profile_is_fatal() {
    let api = FakeTrello::default()
        .with_memberships(&["m1", "m2"])
        .with_member_error(
            "m1",
            ApiError::Transport {
                message: "operation timed out".to_string(),
            },
        );

    let err = resolve_members(&api, &creds(), &board_id("b1"), "alice")
        .await
        .unwrap_err();

    assert!(matches!(err, WorkflowError::Api(ApiError::Transport { .. })));
    assert_eq!(api.calls(), vec!["memberships:b1", "member:m1"]);
}

// ---------------------------------------------------------------------------
// Label lookup
// ---------------------------------------------------------------------------

#[tokio::test]
async fn labels_come_back_in_board_order() {
    let api = FakeTrello::default().with_labels(&[("l1", "bug"), ("l2", "urgent")]);

    let matched = resolve_labels(&api, &creds(), &board_id("b1"), "urgent,bug")
        .await
        .unwrap();

    assert_eq!(ids(&matched), vec!["l1", "l2"]);
}

#[tokio::test]
async fn empty_label_request_selects_nothing() {
    let api = FakeTrello::default().with_labels(&[("l1", "bug"), ("l2", ""), ("l3", "urgent")]);

    let matched = resolve_labels(&api, &creds(), &board_id("b1"), "")
        .await
        .unwrap();

    assert!(matched.is_empty());
}

#[tokio::test]
async fn unknown_label_names_are_ignored() {
    let api = FakeTrello::default().with_labels(&[("l1", "bug")]);

    let matched = resolve_labels(&api, &creds(), &board_id("b1"), "feature,bug")
        .await
        .unwrap();

    assert_eq!(ids(&matched), vec!["l1"]);
}

// ---------------------------------------------------------------------------
// End to end
// ---------------------------------------------------------------------------

fn happy_path() -> FakeTrello {
    FakeTrello::default()
        .with_boards(&[("b1", "Eng")])
        .with_lists(&[("list1", "To Do")])
        .with_memberships(&["m1", "m2"])
        .with_member("m1", Some("alice"))
        .with_member("m2", Some("bob"))
        .with_labels(&[("l1", "bug"), ("l2", "urgent")])
        .with_created("c1")
}

fn request() -> CardRequest {
    CardRequest {
        board_name: "Eng".to_string(),
        list_name: "To Do".to_string(),
        member_usernames: "bob,alice".to_string(),
        label_names: "urgent".to_string(),
        fields: CardFields {
            title: Some("Fix login".to_string()),
            due_complete: Some("false".to_string()),
            ..Default::default()
        },
    }
}

#[tokio::test]
async fn creates_card_with_resolved_ids() {
    let api = happy_path();

    let card = create_card_from_names(&api, &creds(), request())
        .await
        .unwrap();

    assert_eq!(card.id.as_str(), "c1");
    let drafts = api.drafts.lock().unwrap();
    let draft = &drafts[0];
    assert_eq!(draft.list_id.as_str(), "list1");
    assert_eq!(draft.member_ids_param(), "m1,m2");
    assert_eq!(draft.label_ids_param(), "l2");
    assert_eq!(draft.fields.title.as_deref(), Some("Fix login"));
    assert_eq!(draft.fields.due_complete.as_deref(), Some("false"));
}

#[tokio::test]
async fn unauthorized_label_fetch_stops_before_creation() {
    let mut api = happy_path();
    api.labels = Some(Err(ApiError::Unauthorized));

    let err = create_card_from_names(&api, &creds(), request())
        .await
        .unwrap_err();

    assert_eq!(err, WorkflowError::Api(ApiError::Unauthorized));
    assert!(!api.calls().contains(&"create".to_string()));
}

#[tokio::test]
async fn missing_list_stops_before_member_lookup() {
    let api = happy_path();
    let mut req = request();
    req.list_name = "Done".to_string();

    let err = create_card_from_names(&api, &creds(), req).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(api.calls(), vec!["boards", "lists:b1"]);
}

#[tokio::test]
async fn creation_failure_is_reported() {
    let mut api = happy_path();
    api.create = Some(Err(ApiError::Unknown {
        status: 500,
        body: "oops".to_string(),
    }));

    let err = create_card_from_names(&api, &creds(), request())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        WorkflowError::Api(ApiError::Unknown {
            status: 500,
            body: "oops".to_string()
        })
    );
}
