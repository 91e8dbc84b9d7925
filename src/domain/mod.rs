//! # Domain Layer
//!
//! このモジュールは郵便番号検索の核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - 外部依存を持たない（HTTPやデータベースについて何も知らない）
//! - 純粋なビジネスロジック（共通住所の算出、距離計算）
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（PostalCode, LocationRecord, LookupResultなど）
//! - **repositories**: 外部協調者のtrait（GeocodeProvider, AccessLogRepository）
//! - **services**: Domain Service（AddressReducer, DistanceCalculator）

pub mod entities;
pub mod repositories;
pub mod services;
