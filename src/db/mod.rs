pub mod repository;
pub mod sqlite;

#[cfg(test)]
pub mod test_fixtures;

pub use repository::*;
pub use sqlite::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Cannot open database at {path}: {reason}")]
    OpenFailed { path: String, reason: String },
}
