//! # Application Errors
//!
//! ユースケースが返すエラーの分類

use thiserror::Error;

use crate::domain::entities::InvalidPostalCode;
use crate::domain::repositories::GeocodeError;

/// 郵便番号検索のエラー
#[derive(Debug, Error)]
pub enum LookupError {
    /// 郵便番号の形式が不正（クライアント起因）
    #[error(transparent)]
    InvalidInput(#[from] InvalidPostalCode),

    /// 外部APIとの通信に失敗
    #[error("geocode provider unavailable: {0}")]
    UpstreamUnavailable(String),

    /// 外部APIのレスポンスを解釈できない
    #[error("geocode provider returned a malformed response: {0}")]
    UpstreamMalformed(String),

    /// 該当する住所がない
    #[error("no location found for postal code {0}")]
    NotFound(String),
}

impl From<GeocodeError> for LookupError {
    fn from(e: GeocodeError) -> Self {
        match e {
            GeocodeError::Transport(msg) => Self::UpstreamUnavailable(msg),
            GeocodeError::Malformed(msg) => Self::UpstreamMalformed(msg),
        }
    }
}

/// アクセスログ集計のエラー
#[derive(Debug, Error)]
pub enum ReportError {
    /// ストアに問い合わせできない
    #[error("access log store unavailable: {0}")]
    StoreUnavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_geocode_transport() {
        let err = LookupError::from(GeocodeError::Transport("connection refused".to_string()));
        assert!(matches!(err, LookupError::UpstreamUnavailable(msg) if msg == "connection refused"));
    }

    #[test]
    fn test_from_geocode_malformed() {
        let err = LookupError::from(GeocodeError::Malformed("expected value".to_string()));
        assert!(matches!(err, LookupError::UpstreamMalformed(_)));
    }

    #[test]
    fn test_invalid_input_message() {
        let err = LookupError::from(InvalidPostalCode("12345".to_string()));
        assert!(err.to_string().contains("12345"));
    }
}
