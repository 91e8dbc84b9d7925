//! # Distance Calculator Service
//!
//! 基準点（東京駅）からの距離を求めるサービス
//!
//! 緯度差・経度差から平面近似（正距円筒図法）で距離を計算する。
//! 国内程度の距離を想定しており、地球規模の精度は保証しない

use std::f64::consts::PI;

/// 東京駅の経度
pub const TOKYO_STATION_LONGITUDE: f64 = 139.7673068;
/// 東京駅の緯度
pub const TOKYO_STATION_LATITUDE: f64 = 35.6809591;
/// 地球の平均半径（km）
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// 距離計算サービス
pub struct DistanceCalculator;

impl DistanceCalculator {
    /// 基準点から指定座標までの距離（km）を返す
    ///
    /// 結果は小数点第1位で四捨五入する（0.5 は0から遠い側へ丸める）
    ///
    /// # Arguments
    ///
    /// * `longitude` - 経度（度）
    /// * `latitude` - 緯度（度）
    ///
    /// # 例
    ///
    /// ```
    /// use postal_api::domain::services::DistanceCalculator;
    ///
    /// // 大阪駅
    /// assert_eq!(DistanceCalculator::distance_from_reference(135.4959506, 34.7024854), 403.1);
    /// ```
    pub fn distance_from_reference(longitude: f64, latitude: f64) -> f64 {
        round_to_tenth(Self::raw_distance(
            longitude,
            latitude,
            TOKYO_STATION_LONGITUDE,
            TOKYO_STATION_LATITUDE,
        ))
    }

    /// 2点間の距離（km、丸めなし）
    fn raw_distance(x: f64, y: f64, xt: f64, yt: f64) -> f64 {
        let dx = (x - xt) * (PI * (y + yt) / 360.0).cos();
        let dy = y - yt;

        (PI * EARTH_RADIUS_KM / 180.0) * (dx * dx + dy * dy).sqrt()
    }
}

/// 小数点第1位に丸める（half away from zero）
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_point_is_zero() {
        let d = DistanceCalculator::distance_from_reference(
            TOKYO_STATION_LONGITUDE,
            TOKYO_STATION_LATITUDE,
        );
        assert_eq!(d, 0.0);
    }

    #[test]
    fn test_osaka_station() {
        assert_eq!(
            DistanceCalculator::distance_from_reference(135.4959506, 34.7024854),
            403.1
        );
    }

    #[test]
    fn test_sapporo() {
        assert_eq!(
            DistanceCalculator::distance_from_reference(141.3544, 43.0621),
            832.0
        );
    }

    #[test]
    fn test_nearby_point() {
        assert_eq!(
            DistanceCalculator::distance_from_reference(139.76476, 35.68459),
            0.5
        );
        assert_eq!(DistanceCalculator::distance_from_reference(139.7, 35.7), 6.4);
    }

    #[test]
    fn test_deterministic() {
        let a = DistanceCalculator::distance_from_reference(130.4, 33.6);
        let b = DistanceCalculator::distance_from_reference(130.4, 33.6);
        assert_eq!(a, b);
        assert_eq!(a, 887.6);
    }

    #[test]
    fn test_non_negative() {
        for (x, y) in [(0.0, 0.0), (-180.0, -90.0), (180.0, 90.0), (139.0, 35.0)] {
            assert!(DistanceCalculator::distance_from_reference(x, y) >= 0.0);
        }
    }

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(round_to_tenth(12.34), 12.3);
        assert_eq!(round_to_tenth(12.35), 12.4);
        assert_eq!(round_to_tenth(0.05), 0.1);
        assert_eq!(round_to_tenth(0.04), 0.0);
        assert_eq!(round_to_tenth(-0.05), -0.1);
    }
}
