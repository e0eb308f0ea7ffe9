//! First Words Tracker: record the words a child learns, per parent and per
//! child, in a single JSON file.

pub mod config;
pub mod error;
pub mod gui;
pub mod logging;
pub mod models;
pub mod practice;
pub mod storage;
pub mod utils;

pub use config::Config;
pub use error::{ConfigError, StoreError};
pub use models::{ChildRecord, UserRecord, VocabularyStore, WordEntry};
