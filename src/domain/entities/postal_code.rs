//! # PostalCode Value Object
//!
//! 7桁の郵便番号を表すバリューオブジェクト

use std::fmt;

use thiserror::Error;

/// 郵便番号の桁数
pub const POSTAL_CODE_LEN: usize = 7;

/// 郵便番号の形式が不正
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid postal code {0:?}: must be exactly 7 ASCII digits")]
pub struct InvalidPostalCode(pub String);

/// 検証済みの郵便番号
///
/// `PostalCode::parse` を通してのみ生成されるため、保持している値は
/// 常に ASCII 数字7桁である
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    /// 文字列を郵便番号として検証する
    ///
    /// # Arguments
    ///
    /// * `raw` - リクエストで受け取った文字列
    ///
    /// # Errors
    ///
    /// ASCII 数字ちょうど7桁でない場合に `InvalidPostalCode` を返す
    ///
    /// # 例
    ///
    /// ```
    /// use postal_api::domain::entities::PostalCode;
    ///
    /// assert!(PostalCode::parse("1000001").is_ok());
    /// assert!(PostalCode::parse("12345").is_err());
    /// assert!(PostalCode::parse("abcdefg").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, InvalidPostalCode> {
        // 全角数字などを弾くため is_ascii_digit で判定する
        if raw.len() == POSTAL_CODE_LEN && raw.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(raw.to_string()))
        } else {
            Err(InvalidPostalCode(raw.to_string()))
        }
    }

    /// 文字列として参照する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PostalCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
