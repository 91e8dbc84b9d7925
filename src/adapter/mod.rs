//! Adapter Layer
//!
//! 外部システム（ジオコーディングAPI, SQLite）との統合

pub mod config;
pub mod geocode;
pub mod repositories;
