//! # Lookup Outcome DTO
//!
//! 検索結果と、アクセスログ記録の成否

use crate::domain::entities::LookupResult;

/// アクセスログ記録の結果
///
/// 失敗しても検索自体は成功扱いになる。呼び出し側は内容を確認できるが、
/// クライアントへのレスポンスには反映しない
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessLogAppend {
    /// 記録できた
    Recorded,
    /// 記録に失敗した（エラーメッセージ）
    Failed(String),
}

impl AccessLogAppend {
    pub fn is_recorded(&self) -> bool {
        matches!(self, Self::Recorded)
    }
}

/// 検索ユースケースの出力
#[derive(Debug, Clone, PartialEq)]
pub struct LookupOutcome {
    pub result: LookupResult,
    pub log_append: AccessLogAppend,
}
