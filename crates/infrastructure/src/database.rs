//! SQLite 接続プールとスキーマの初期化

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use crate::error::RepositoryError;
use crate::repositories::TodoRepository;

/// `todos` テーブル（存在しなければ作成）
const CREATE_TODOS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    title     TEXT    NOT NULL,
    content   TEXT    NOT NULL DEFAULT '',
    completed BOOLEAN NOT NULL DEFAULT 0
)
"#;

const CREATE_TITLE_INDEX: &str = "CREATE INDEX IF NOT EXISTS ix_todos_title ON todos (title)";

/// プロセス全体で共有する DB ハンドル
///
/// 起動時に一度だけ作成し、clone してハンドラ間で共有します。
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// 接続取得のタイムアウト
    const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

    /// 書き込みロック待ちの上限（超えると SQLITE_BUSY）
    const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

    /// `url` に接続し、スキーマを作成します。
    /// `:memory:` の場合は [`Database::in_memory`] と同じです。
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, RepositoryError> {
        if url == ":memory:" {
            return Self::in_memory().await;
        }

        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Self::BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .acquire_timeout(Self::ACQUIRE_TIMEOUT)
            .connect_with(options)
            .await?;

        info!(url = %url, max_connections, "Database connected");

        let db = Self { pool };
        db.bootstrap_schema().await?;
        Ok(db)
    }

    /// 呼び出しごとに独立したインメモリ DB を作成します（テスト用）。
    pub async fn in_memory() -> Result<Self, RepositoryError> {
        // `sqlite::memory:` は解析のたびに一意な名前の共有キャッシュ DB になる
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        // 最後の接続が閉じると DB が消えるため、接続を 1 本に固定して保持し続ける
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .acquire_timeout(Self::ACQUIRE_TIMEOUT)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.bootstrap_schema().await?;
        Ok(db)
    }

    /// スキーマを冪等に作成します。マイグレーション機構は持ちません。
    pub async fn bootstrap_schema(&self) -> Result<(), RepositoryError> {
        sqlx::query(CREATE_TODOS_TABLE).execute(&self.pool).await?;
        sqlx::query(CREATE_TITLE_INDEX).execute(&self.pool).await?;

        info!("Database schema ensured");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Todo リポジトリを取得
    pub fn todos(&self) -> TodoRepository<'_> {
        TodoRepository::new(&self.pool)
    }

    /// シャットダウン時にプールを閉じます。
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}
