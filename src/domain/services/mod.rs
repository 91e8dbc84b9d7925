//! # Domain Services
//!
//! エンティティに属さない純粋なビジネスルール
//!
//! - **AddressReducer**: 住所候補の共通部分の算出
//! - **DistanceCalculator**: 基準点（東京駅）からの距離計算

pub mod address_reducer;
pub mod distance_calculator;

pub use address_reducer::AddressReducer;
pub use distance_calculator::DistanceCalculator;
