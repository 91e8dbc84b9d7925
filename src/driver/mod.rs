//! # Driver Layer (Presentation)
//!
//! HTTP API とCLI引数を提供
//!
//! ## 特徴
//!
//! - Use Caseを呼び出してビジネスフローを起動
//! - 依存性注入（DI）を行い、全てを組み立てる
//! - ユースケースのエラーをHTTPステータスに対応付ける
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数（環境変数フォールバック付き）のパース
//! - **server**: 共有状態の組み立てとサーバー起動
//! - **routes**: ルーティング
//! - **handlers**: HTTPハンドラとレスポンス形式

pub mod cli;
pub mod handlers;
pub mod routes;
pub mod server;

pub use cli::Args;
pub use routes::create_router;
pub use server::{serve, AppState};
