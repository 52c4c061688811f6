//! SQLite adapters.

mod character_repo;

pub use character_repo::SqlitePlayerCharacterRepo;
