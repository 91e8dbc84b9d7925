//! # LocationRecord Entity
//!
//! 外部ジオコーディングAPIが返す住所候補

/// 住所候補1件
///
/// 外部APIからリクエストごとに生成され、永続化されない。
/// 経度・緯度はテキストで届くため、数値として解釈できなかった場合は `None` になる
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord {
    /// 都道府県
    pub prefecture: String,
    /// 市区町村
    pub city: String,
    /// 町域
    pub town: String,
    /// 経度
    pub longitude: Option<f64>,
    /// 緯度
    pub latitude: Option<f64>,
    /// 郵便番号
    pub postal_code: String,
}

impl LocationRecord {
    /// 新しい住所候補を作成
    pub fn new(
        prefecture: impl Into<String>,
        city: impl Into<String>,
        town: impl Into<String>,
        longitude: Option<f64>,
        latitude: Option<f64>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            prefecture: prefecture.into(),
            city: city.into(),
            town: town.into(),
            longitude,
            latitude,
            postal_code: postal_code.into(),
        }
    }

    /// 経度・緯度の組を返す
    ///
    /// どちらかが欠けている場合は `None`
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.longitude, self.latitude) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        }
    }
}
