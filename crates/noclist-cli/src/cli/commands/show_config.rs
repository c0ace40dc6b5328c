//! Config command: show the configuration a fetch would use.

use anyhow::Result;
use noclist_core::config::NocConfig;

/// Print the effective configuration (file, defaults and flags merged) as TOML.
pub fn run_show_config(cfg: &NocConfig) -> Result<()> {
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
