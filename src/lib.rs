//! A thin client for a managed DNS service's HTTP API.

pub mod config;
mod connection;
mod error;
mod record_set;
mod zone;

pub use config::{Api, Config};
pub use connection::{ApiConnection, Connection};
pub use error::{Error, Result};
pub use record_set::RecordSet;
pub use zone::Zone;
