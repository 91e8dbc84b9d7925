//! # Access Log Entities
//!
//! アクセスログ1件と、郵便番号ごとの集計結果

use chrono::{DateTime, Utc};

/// アクセスログ1件
///
/// 検索が成功するたびに1行追加される（重複排除はしない）
#[derive(Debug, Clone, PartialEq)]
pub struct AccessLogEntry {
    pub postal_code: String,
    pub created_at: DateTime<Utc>,
}

impl AccessLogEntry {
    /// 現在時刻でアクセスログを作成
    pub fn now(postal_code: impl Into<String>) -> Self {
        Self {
            postal_code: postal_code.into(),
            created_at: Utc::now(),
        }
    }
}

/// 郵便番号ごとのリクエスト数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessLogSummary {
    pub postal_code: String,
    pub request_count: u64,
}

impl AccessLogSummary {
    pub fn new(postal_code: impl Into<String>, request_count: u64) -> Self {
        Self {
            postal_code: postal_code.into(),
            request_count,
        }
    }
}
