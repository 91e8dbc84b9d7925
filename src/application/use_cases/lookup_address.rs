//! # Lookup Address Use Case
//!
//! 郵便番号検索ユースケース

use std::sync::Arc;

use log::{debug, warn};

use crate::application::dto::{AccessLogAppend, LookupOutcome};
use crate::application::error::LookupError;
use crate::domain::entities::{AccessLogEntry, LocationRecord, LookupResult, PostalCode};
use crate::domain::repositories::{AccessLogRepository, GeocodeProvider};
use crate::domain::services::{AddressReducer, DistanceCalculator};

/// 郵便番号検索ユースケース
///
/// 外部APIで住所候補を取得し、共通住所と東京駅からの最大距離を求め、
/// アクセスログを記録する
pub struct LookupAddressUseCase<G, R>
where
    G: GeocodeProvider + ?Sized,
    R: AccessLogRepository + ?Sized,
{
    geocode_provider: Arc<G>,
    access_log_repository: Arc<R>,
}

impl<G, R> LookupAddressUseCase<G, R>
where
    G: GeocodeProvider + ?Sized,
    R: AccessLogRepository + ?Sized,
{
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `geocode_provider` - ジオコーディングプロバイダ
    /// * `access_log_repository` - アクセスログリポジトリ
    pub fn new(geocode_provider: Arc<G>, access_log_repository: Arc<R>) -> Self {
        Self {
            geocode_provider,
            access_log_repository,
        }
    }

    /// 郵便番号で検索する
    ///
    /// # Arguments
    ///
    /// * `raw_postal_code` - リクエストで受け取った郵便番号
    ///
    /// # Returns
    ///
    /// 検索結果とアクセスログ記録の成否
    ///
    /// # Errors
    ///
    /// - 郵便番号が7桁の数字でない場合は `InvalidInput`
    /// - 外部APIとの通信に失敗した場合は `UpstreamUnavailable`
    /// - 外部APIのレスポンスを解釈できない場合は `UpstreamMalformed`
    /// - 該当する住所がない場合は `NotFound`（アクセスログは記録しない）
    ///
    /// アクセスログの記録失敗はエラーにならない
    pub async fn execute(&self, raw_postal_code: &str) -> Result<LookupOutcome, LookupError> {
        let postal_code = PostalCode::parse(raw_postal_code)?;

        let records = self.geocode_provider.search(&postal_code).await?;
        debug!(
            "Geocode provider returned {} locations for {}",
            records.len(),
            postal_code
        );

        if records.is_empty() {
            return Err(LookupError::NotFound(postal_code.to_string()));
        }

        let result = LookupResult {
            hit_count: records.len(),
            common_address: AddressReducer::reduce(&records),
            max_distance_km: max_distance_km(&records),
            postal_code,
        };

        let log_append = self.record_access(&result.postal_code).await;

        Ok(LookupOutcome { result, log_append })
    }

    /// アクセスログを記録する（失敗してもエラーにしない）
    async fn record_access(&self, postal_code: &PostalCode) -> AccessLogAppend {
        let entry = AccessLogEntry::now(postal_code.as_str());

        match self.access_log_repository.append(&entry).await {
            Ok(()) => AccessLogAppend::Recorded,
            Err(e) => {
                warn!("Failed to save access log for {}: {:#}", postal_code, e);
                AccessLogAppend::Failed(format!("{:#}", e))
            }
        }
    }
}

/// 全候補のうち東京駅から最も遠い距離
///
/// 座標を解釈できなかった候補は 0.0 km として扱う
fn max_distance_km(records: &[LocationRecord]) -> f64 {
    records
        .iter()
        .map(|record| match record.coordinates() {
            Some((x, y)) => DistanceCalculator::distance_from_reference(x, y),
            None => 0.0,
        })
        .fold(0.0, f64::max)
}
