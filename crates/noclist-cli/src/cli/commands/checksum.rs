//! Checksum command: compute the request checksum for a token.

use anyhow::Result;
use noclist_core::checksum::request_checksum;
use noclist_core::config::NocConfig;

/// Print the checksum of `token` + `path` (configured users path by default).
pub fn run_checksum(cfg: &NocConfig, token: &str, path: Option<&str>) -> Result<()> {
    let path = path.unwrap_or(&cfg.users_path);
    println!("{}", request_checksum(token, path));
    Ok(())
}
