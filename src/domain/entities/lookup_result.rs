//! # LookupResult Value Object
//!
//! 郵便番号検索1回分の結果

use super::postal_code::PostalCode;

/// 検索結果
///
/// リクエストごとに1度だけ生成され、生成後は変更されない
#[derive(Debug, Clone, PartialEq)]
pub struct LookupResult {
    /// リクエストで与えられた郵便番号
    pub postal_code: PostalCode,
    /// 該当した住所候補の数
    pub hit_count: usize,
    /// 全候補に共通する住所（共通部分がなければ空文字列）
    pub common_address: String,
    /// 基準点から最も離れた候補までの距離（km、小数点第1位まで）
    pub max_distance_km: f64,
}
