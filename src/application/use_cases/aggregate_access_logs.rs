//! # Aggregate Access Logs Use Case
//!
//! アクセスログ集計ユースケース

use std::sync::Arc;

use log::error;

use crate::application::error::ReportError;
use crate::domain::entities::AccessLogSummary;
use crate::domain::repositories::AccessLogRepository;

/// アクセスログ集計ユースケース
///
/// キャッシュは持たず、呼び出しのたびにストアへ集計を問い合わせる
pub struct AggregateAccessLogsUseCase<R: AccessLogRepository + ?Sized> {
    access_log_repository: Arc<R>,
}

impl<R: AccessLogRepository + ?Sized> AggregateAccessLogsUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `access_log_repository` - アクセスログリポジトリ
    pub fn new(access_log_repository: Arc<R>) -> Self {
        Self {
            access_log_repository,
        }
    }

    /// 郵便番号ごとのリクエスト数を集計する
    ///
    /// # Returns
    ///
    /// リクエスト数の降順に並んだ集計結果
    ///
    /// # Errors
    ///
    /// ストアに問い合わせできない場合に `StoreUnavailable` を返す
    pub async fn execute(&self) -> Result<Vec<AccessLogSummary>, ReportError> {
        self.access_log_repository
            .grouped_counts()
            .await
            .map_err(|e| {
                error!("Failed to query access logs: {:#}", e);
                ReportError::StoreUnavailable(format!("{:#}", e))
            })
    }
}
