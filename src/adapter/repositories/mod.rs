//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod sqlite_access_log_repository;

pub use sqlite_access_log_repository::SqliteAccessLogRepository;
