//! Persistence: SQLite-backed visit storage, background saving, and
//! application configuration.

pub mod config;
pub mod database;
pub mod saver;
pub mod schema;
pub mod store;

pub use config::{load_config, save_config, AppConfig, ConfigError, UserProfile};
pub use database::{Database, DatabaseError};
pub use saver::{spawn, SaveHandle, SaverConfig};
pub use store::{MemoryVisitStore, SqliteVisitStore, StoreError, VisitStore};
