//! CLI command handlers, one per file.

mod checksum;
mod fetch;
mod show_config;

pub use checksum::run_checksum;
pub use fetch::run_fetch;
#[cfg(test)]
pub use fetch::write_user_ids;
pub use show_config::run_show_config;
