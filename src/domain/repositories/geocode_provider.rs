//! # Geocode Provider Trait
//!
//! 郵便番号から住所候補を取得する外部APIを抽象化

use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::{LocationRecord, PostalCode};

/// ジオコーディングのエラー
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// 接続失敗、タイムアウト、レスポンスの読み取り失敗
    #[error("geocode request failed: {0}")]
    Transport(String),

    /// レスポンスが想定した形式でない
    #[error("geocode response could not be parsed: {0}")]
    Malformed(String),
}

/// ジオコーディングプロバイダ
///
/// 1回の検索につき1回だけ呼び出される（リトライしない）
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodeProvider: Send + Sync {
    /// 郵便番号で住所候補を検索する
    ///
    /// # Arguments
    ///
    /// * `postal_code` - 検証済みの郵便番号
    ///
    /// # Returns
    ///
    /// 住所候補のリスト（該当なしの場合は空）
    ///
    /// # Errors
    ///
    /// 通信に失敗した場合は `Transport`、レスポンスを解釈できない場合は `Malformed`
    async fn search(&self, postal_code: &PostalCode) -> Result<Vec<LocationRecord>, GeocodeError>;
}
