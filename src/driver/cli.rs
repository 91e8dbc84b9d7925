//! CLI Argument Parsing
//!
//! CLIの引数解析（未指定の場合は環境変数、さらにデフォルト値を使用）

use anyhow::Result;
use clap::Parser;

use crate::adapter::config::{
    Config, DEFAULT_BIND, DEFAULT_DB_PATH, DEFAULT_GEOCODE_TIMEOUT_SECS, DEFAULT_GEOCODE_URL,
};

/// 郵便番号から住所を検索するHTTP API
#[derive(Parser, Debug, Clone)]
#[command(name = "postal-api")]
#[command(about = "Look up Japanese addresses by postal code", long_about = None)]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "POSTAL_API_BIND", default_value = DEFAULT_BIND)]
    pub bind: String,

    /// SQLite database file for access logs
    #[arg(long, env = "DB_PATH", default_value = DEFAULT_DB_PATH)]
    pub db_path: String,

    /// HeartRails Geo API endpoint
    #[arg(long, env = "GEOCODE_API_URL", default_value = DEFAULT_GEOCODE_URL)]
    pub geocode_url: String,

    /// Timeout for each geocode API call, in seconds
    #[arg(long, env = "GEOCODE_TIMEOUT_SECS", default_value_t = DEFAULT_GEOCODE_TIMEOUT_SECS)]
    pub geocode_timeout_secs: u64,
}

impl Args {
    /// 引数を検証して設定に変換
    pub fn to_config(&self) -> Result<Config> {
        Config::new(
            &self.bind,
            &self.db_path,
            &self.geocode_url,
            self.geocode_timeout_secs,
        )
    }
}
