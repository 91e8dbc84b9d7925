//! # Access Log Repository Trait
//!
//! アクセスログの記録と集計を抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::{AccessLogEntry, AccessLogSummary};

/// アクセスログリポジトリ
///
/// 複数リクエストから同時に呼ばれるため、実装は並行アクセスに安全であること
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AccessLogRepository: Send + Sync {
    /// アクセスログを1件追加する
    ///
    /// # Errors
    ///
    /// 書き込みに失敗した場合にエラーを返す
    async fn append(&self, entry: &AccessLogEntry) -> Result<()>;

    /// 郵便番号ごとのリクエスト数を返す
    ///
    /// # Returns
    ///
    /// リクエスト数の降順（同数の場合は郵便番号の昇順）
    ///
    /// # Errors
    ///
    /// 問い合わせに失敗した場合にエラーを返す
    async fn grouped_counts(&self) -> Result<Vec<AccessLogSummary>>;
}
