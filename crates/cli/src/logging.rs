//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout carries only the result message. `RUST_LOG`
//! wins over `--verbose` when set; `TRELLO_LOG_FORMAT=json` selects the JSON
//! formatter.

use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &str = "info";
const VERBOSE_DIRECTIVES: &str = "info,workflow=debug,trello=debug,trello_create_card=debug";

pub fn init(verbose: bool) -> anyhow::Result<()> {
    let default = if verbose {
        VERBOSE_DIRECTIVES
    } else {
        DEFAULT_DIRECTIVES
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let json = std::env::var("TRELLO_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))
}
