//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **PostalCode**: 7桁の郵便番号（検証済みバリューオブジェクト）
//! - **LocationRecord**: 外部APIが返す住所候補1件
//! - **LookupResult**: 1リクエスト分の検索結果
//! - **AccessLogEntry / AccessLogSummary**: アクセスログとその集計

pub mod access_log;
pub mod location;
pub mod lookup_result;
pub mod postal_code;

pub use access_log::{AccessLogEntry, AccessLogSummary};
pub use location::LocationRecord;
pub use lookup_result::LookupResult;
pub use postal_code::{InvalidPostalCode, PostalCode};
