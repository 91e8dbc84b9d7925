//! # Postal API
//!
//! 郵便番号から住所を検索し、東京駅からの距離とアクセス数を返すHTTP API
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: 共通住所の算出と距離計算、外部協調者のtrait（外部依存なし）
//! - **Application層**: 郵便番号検索とアクセスログ集計のユースケース
//! - **Adapter層**: 外部システムとの統合（HeartRails Geo API, SQLite, 設定）
//! - **Driver層**: HTTP API、CLI引数、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
// カバレッジ計測時に外部サービス依存コードを除外するために使用
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
