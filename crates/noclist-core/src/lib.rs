pub mod config;
pub mod logging;

pub mod auth;
pub mod checksum;
pub mod client;
pub mod error;
pub mod http;
pub mod retry;
pub mod users;

pub use auth::AuthToken;
pub use client::NocClient;
pub use error::{FetchError, Stage};
pub use users::UserIdList;
