use std::time::Duration;

use clap::Parser;
use trello::{TrelloConfig, DEFAULT_BASE_URL};
use workflow::{CardFields, CardRequest, Credentials};

#[derive(Parser)]
#[command(name = "trello-create-card", version)]
#[command(about = "Create a Trello card, addressing the board, list, members and labels by name", long_about = None)]
pub struct Cli {
    /// Trello API key
    #[arg(long, env = "TRELLO_ACCESS_KEY", hide_env_values = true)]
    pub access_key: String,

    /// Trello API token
    #[arg(long, env = "TRELLO_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: String,

    /// Name of the board to create the card on (exact match)
    #[arg(long)]
    pub board_name: String,

    /// Name of the list to create the card in (exact match)
    #[arg(long)]
    pub list_name: String,

    /// Card title
    #[arg(long)]
    pub card_title: Option<String>,

    /// Card description
    #[arg(long)]
    pub card_description: Option<String>,

    /// Card position: top, bottom, or a positive number
    #[arg(long)]
    pub card_position: Option<String>,

    /// Due date, as Trello accepts it (e.g. 2024-05-01T17:00:00Z)
    #[arg(long)]
    pub card_due_date: Option<String>,

    /// Start date, as Trello accepts it
    #[arg(long)]
    pub card_start_date: Option<String>,

    /// Whether the due date is already complete, sent to Trello as given
    #[arg(long)]
    pub card_due_complete: Option<String>,

    /// Comma-separated usernames to assign
    #[arg(long, default_value = "")]
    pub card_members_assigned: String,

    /// Comma-separated label names to attach
    #[arg(long, default_value = "")]
    pub card_labels: String,

    /// Trello API root
    #[arg(long, env = "TRELLO_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub api_base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "TRELLO_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl std::fmt::Debug for Cli {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cli")
            .field("access_key", &self.access_key)
            .field("access_token", &"<redacted>")
            .field("board_name", &self.board_name)
            .field("list_name", &self.list_name)
            .field("card_title", &self.card_title)
            .field("card_description", &self.card_description)
            .field("card_position", &self.card_position)
            .field("card_due_date", &self.card_due_date)
            .field("card_start_date", &self.card_start_date)
            .field("card_due_complete", &self.card_due_complete)
            .field("card_members_assigned", &self.card_members_assigned)
            .field("card_labels", &self.card_labels)
            .field("api_base_url", &self.api_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("verbose", &self.verbose)
            .finish()
    }
}

impl Cli {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.access_key, &self.access_token)
    }

    pub fn trello_config(&self) -> TrelloConfig {
        TrelloConfig::default()
            .with_base_url(&self.api_base_url)
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }

    pub fn card_request(&self) -> CardRequest {
        CardRequest {
            board_name: self.board_name.clone(),
            list_name: self.list_name.clone(),
            member_usernames: self.card_members_assigned.clone(),
            label_names: self.card_labels.clone(),
            fields: CardFields {
                title: self.card_title.clone(),
                description: self.card_description.clone(),
                position: self.card_position.clone(),
                due: self.card_due_date.clone(),
                start: self.card_start_date.clone(),
                due_complete: self.card_due_complete.clone(),
            },
        }
    }
}
