//! # Address Reducer Service
//!
//! 複数の住所候補から共通部分の住所を求めるサービス

use crate::domain::entities::LocationRecord;

/// 共通住所算出サービス
///
/// 全候補の都道府県と市区町村が一致する場合に、町域の最長共通接頭辞を付けた
/// `都道府県 + 市区町村 + 町域接頭辞` を返す
pub struct AddressReducer;

impl AddressReducer {
    /// 住所候補を共通住所にまとめる
    ///
    /// 町域の比較は文字（コードポイント）単位で行うため、マルチバイト文字の
    /// 途中で切れることはない
    ///
    /// # Arguments
    ///
    /// * `records` - 外部APIが返した順の住所候補
    ///
    /// # Returns
    ///
    /// 共通住所。候補が空、または都道府県・市区町村が一致しない場合は空文字列
    ///
    /// # 例
    ///
    /// ```
    /// use postal_api::domain::entities::LocationRecord;
    /// use postal_api::domain::services::AddressReducer;
    ///
    /// let records = vec![
    ///     LocationRecord::new("東京都", "千代田区", "丸の内一丁目", None, None, "1000005"),
    ///     LocationRecord::new("東京都", "千代田区", "丸の内二丁目", None, None, "1000005"),
    /// ];
    /// assert_eq!(AddressReducer::reduce(&records), "東京都千代田区丸の内");
    /// ```
    pub fn reduce(records: &[LocationRecord]) -> String {
        let Some((first, rest)) = records.split_first() else {
            return String::new();
        };

        let mut common_town: Vec<char> = first.town.chars().collect();

        for record in rest {
            if record.prefecture != first.prefecture || record.city != first.city {
                return String::new();
            }

            let shared = common_prefix_len(&common_town, &record.town);
            common_town.truncate(shared);
        }

        let mut address = String::with_capacity(
            first.prefecture.len() + first.city.len() + first.town.len(),
        );
        address.push_str(&first.prefecture);
        address.push_str(&first.city);
        address.extend(common_town);
        address
    }
}

/// 文字単位の共通接頭辞の長さ（文字数）
fn common_prefix_len(prefix: &[char], town: &str) -> usize {
    prefix
        .iter()
        .zip(town.chars())
        .take_while(|(a, b)| *a == b)
        .count()
}
