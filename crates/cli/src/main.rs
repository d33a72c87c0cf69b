//! `trello-create-card` entry point.
//!
//! This binary is the composition root. Responsibilities:
//!
//! 1. **Parse configuration** — flags and their environment fallbacks.
//! 2. **Wire observability** — a `tracing-subscriber` fmt layer on stderr.
//!    Every event emitted by the `workflow` and `trello` crates flows through
//!    it inside a span tagged with the run id.
//! 3. **Construct infrastructure** — a [`trello::TrelloClient`] handed to
//!    [`workflow::create_card_from_names`] as its `TrelloApi`.
//! 4. **Report** — print the outcome to stdout and exit with the code that
//!    matches it (see [`exit`]).

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, Instrument};
use trello::TrelloClient;
use workflow::{CreatedCard, RunId};

mod args;
mod exit;
mod logging;

use args::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("Warning: {e}");
    }

    let run_id = RunId::new_random();
    let span = tracing::info_span!("create_card", run_id = %run_id);

    match run(&cli).instrument(span).await {
        Ok(card) => {
            match &card.name {
                Some(name) => println!("Successfully created new card '{name}'"),
                None => println!("Successfully created new card"),
            }
            if let Some(url) = &card.short_url {
                println!("{url}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(run_id = %run_id, error = %e, "card creation failed");
            println!("{e:#}");
            ExitCode::from(exit::code_for(&e))
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<CreatedCard> {
    let client =
        TrelloClient::new(&cli.trello_config()).context("failed to build the HTTP client")?;

    let card =
        workflow::create_card_from_names(&client, &cli.credentials(), cli.card_request()).await?;
    Ok(card)
}
