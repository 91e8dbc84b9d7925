//! SQLite Access Log Repository Implementation
//!
//! AccessLogRepositoryのSQLite実装

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use log::info;
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::domain::entities::{AccessLogEntry, AccessLogSummary};
use crate::domain::repositories::AccessLogRepository;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS access_logs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        postal_code TEXT NOT NULL,
        created_at TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_access_logs_postal_code ON access_logs(postal_code);
";

/// SQLiteベースのアクセスログリポジトリ
///
/// 1本の接続を Mutex で共有し、クエリは blocking スレッドで実行する
#[derive(Clone)]
pub struct SqliteAccessLogRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteAccessLogRepository {
    /// データベースファイルを開き、スキーマを作成する
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .context("Failed to create database directory")?;
            }
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        info!("Opened access log database at {}", path.display());

        Self::from_connection(conn)
    }

    /// インメモリデータベースを開く（テスト用）
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory database")?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)
            .context("Failed to initialize access_logs schema")?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// アクセスログを追加する（同期処理）
    fn append_sync(conn: &Connection, entry: &AccessLogEntry) -> Result<()> {
        conn.execute(
            "INSERT INTO access_logs (postal_code, created_at) VALUES (?1, ?2)",
            params![entry.postal_code, entry.created_at.to_rfc3339()],
        )
        .context("Failed to insert access log")?;

        Ok(())
    }

    /// 郵便番号ごとに集計する（同期処理）
    fn grouped_counts_sync(conn: &Connection) -> Result<Vec<AccessLogSummary>> {
        let mut stmt = conn
            .prepare(
                "SELECT postal_code, COUNT(*) AS request_count
                 FROM access_logs
                 GROUP BY postal_code
                 ORDER BY request_count DESC, postal_code ASC",
            )
            .context("Failed to prepare access log query")?;

        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))
            .context("Failed to query access logs")?;

        let mut summaries = Vec::new();
        for row in rows {
            let (postal_code, count) = row.context("Failed to read access log row")?;
            let request_count = u64::try_from(count)
                .with_context(|| format!("Negative request count for {}", postal_code))?;
            summaries.push(AccessLogSummary::new(postal_code, request_count));
        }

        Ok(summaries)
    }

    /// 接続を借りて blocking スレッドで処理を実行する
    async fn with_connection<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn
                .lock()
                .map_err(|_| anyhow!("Access log connection mutex poisoned"))?;
            f(&guard)
        })
        .await
        .map_err(|e| anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

#[async_trait]
impl AccessLogRepository for SqliteAccessLogRepository {
    async fn append(&self, entry: &AccessLogEntry) -> Result<()> {
        let entry = entry.clone();
        self.with_connection(move |conn| Self::append_sync(conn, &entry))
            .await
    }

    async fn grouped_counts(&self) -> Result<Vec<AccessLogSummary>> {
        self.with_connection(Self::grouped_counts_sync).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn count_rows(repo: &SqliteAccessLogRepository) -> i64 {
        let conn = repo.conn.lock().unwrap();
        conn.query_row("SELECT COUNT(*) FROM access_logs", [], |row| row.get(0))
            .unwrap()
    }

    #[tokio::test]
    async fn test_append_inserts_row_per_call() {
        let repo = SqliteAccessLogRepository::open_in_memory().unwrap();

        repo.append(&AccessLogEntry::now("1000001")).await.unwrap();
        repo.append(&AccessLogEntry::now("1000001")).await.unwrap();

        assert_eq!(count_rows(&repo), 2);
    }

    #[tokio::test]
    async fn test_grouped_counts_ordered_by_count() {
        let repo = SqliteAccessLogRepository::open_in_memory().unwrap();

        repo.append(&AccessLogEntry::now("2000002")).await.unwrap();
        for _ in 0..3 {
            repo.append(&AccessLogEntry::now("1000001")).await.unwrap();
        }

        let summaries = repo.grouped_counts().await.unwrap();

        assert_eq!(
            summaries,
            vec![
                AccessLogSummary::new("1000001", 3),
                AccessLogSummary::new("2000002", 1),
            ]
        );
    }

    #[tokio::test]
    async fn test_grouped_counts_ties_are_deterministic() {
        let repo = SqliteAccessLogRepository::open_in_memory().unwrap();

        for code in ["3000003", "1000001", "2000002"] {
            repo.append(&AccessLogEntry::now(code)).await.unwrap();
        }

        let first = repo.grouped_counts().await.unwrap();
        let second = repo.grouped_counts().await.unwrap();

        assert_eq!(first, second);
        let codes: Vec<_> = first.iter().map(|s| s.postal_code.as_str()).collect();
        assert_eq!(codes, vec!["1000001", "2000002", "3000003"]);
    }

    #[tokio::test]
    async fn test_grouped_counts_empty() {
        let repo = SqliteAccessLogRepository::open_in_memory().unwrap();
        assert!(repo.grouped_counts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_grouped_counts_missing_table() {
        let repo = SqliteAccessLogRepository::open_in_memory().unwrap();
        repo.conn
            .lock()
            .unwrap()
            .execute_batch("DROP TABLE access_logs")
            .unwrap();

        assert!(repo.grouped_counts().await.is_err());
        assert!(repo.append(&AccessLogEntry::now("1000001")).await.is_err());
    }

    #[tokio::test]
    async fn test_open_file_persists_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested").join("access.db");

        {
            let repo = SqliteAccessLogRepository::open(&db_path).unwrap();
            repo.append(&AccessLogEntry::now("1000001")).await.unwrap();
        }

        let reopened = SqliteAccessLogRepository::open(&db_path).unwrap();
        let summaries = reopened.grouped_counts().await.unwrap();

        assert_eq!(summaries, vec![AccessLogSummary::new("1000001", 1)]);
    }

    #[tokio::test]
    async fn test_concurrent_appends() {
        let repo = SqliteAccessLogRepository::open_in_memory().unwrap();

        let mut handles = Vec::new();
        for i in 0..16 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                let code = if i % 2 == 0 { "1000001" } else { "2000002" };
                repo.append(&AccessLogEntry::now(code)).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let summaries = repo.grouped_counts().await.unwrap();
        assert_eq!(summaries.iter().map(|s| s.request_count).sum::<u64>(), 16);
    }
}
