//! Postal API - 郵便番号検索サーバー
//!
//! `GET /address?postal_code=XXXXXXX` と `GET /address/access_logs` を提供

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;
use log::info;

use postal_api::driver::{serve, Args};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Resolve and validate configuration
    let config = args.to_config()?;
    info!("Access log database: {}", config.db_path.display());

    serve(&config).await
}
