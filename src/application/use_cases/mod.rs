//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **LookupAddressUseCase**: 郵便番号検索とアクセスログ記録
//! - **AggregateAccessLogsUseCase**: 郵便番号ごとのリクエスト数の集計

pub mod aggregate_access_logs;
pub mod lookup_address;

pub use aggregate_access_logs::AggregateAccessLogsUseCase;
pub use lookup_address::LookupAddressUseCase;
