//! Fetch command: token, then user ids, printed as one JSON array line.

use anyhow::Result;
use noclist_core::config::NocConfig;
use noclist_core::http::Transport;
use noclist_core::retry::Sleep;
use noclist_core::NocClient;
use std::io::{self, Write};

/// Run both stages against the configured server and print the ids to stdout.
pub fn run_fetch(cfg: NocConfig) -> Result<()> {
    let client = NocClient::new(cfg);
    let stdout = io::stdout();
    write_user_ids(&client, &mut stdout.lock())
}

/// Run `client` and write the ids as a single JSON array line to `out`.
/// Nothing is written unless both stages succeed.
pub fn write_user_ids<T, S, W>(client: &NocClient<T, S>, out: &mut W) -> Result<()>
where
    T: Transport,
    S: Sleep,
    W: Write,
{
    let ids = client.run()?;
    let line = serde_json::to_string(&ids)?;
    writeln!(out, "{}", line)?;
    out.flush()?;
    Ok(())
}
