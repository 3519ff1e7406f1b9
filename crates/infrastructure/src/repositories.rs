//! Todo リポジトリ
//!
//! 各操作は 1 つのトランザクション（スコープ付きセッション）内で実行します。
//! `?` で早期リターンした場合はトランザクションが drop され、ロールバックと
//! 接続の返却が行われます。

use domain::{NewTodo, Todo, TodoId, TodoPatch};
use sqlx::SqlitePool;
use tracing::{debug, info, instrument};

use crate::error::RepositoryError;
use crate::models::TodoRow;

const SELECT_TODO: &str = "SELECT id, title, content, completed FROM todos WHERE id = ?";

pub struct TodoRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TodoRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// 全件取得（保存順）
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Todo>, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let rows: Vec<TodoRow> =
            sqlx::query_as("SELECT id, title, content, completed FROM todos ORDER BY id")
                .fetch_all(&mut *tx)
                .await?;

        tx.commit().await?;

        debug!(count = rows.len(), "todos listed");
        Ok(rows.into_iter().map(Todo::from).collect())
    }

    /// ID で 1 件取得
    #[instrument(skip(self))]
    pub async fn get(&self, id: TodoId) -> Result<Option<Todo>, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let row: Option<TodoRow> = sqlx::query_as(SELECT_TODO)
            .bind(id.value())
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row.map(Todo::from))
    }

    /// 新規作成。`completed` は常に false で開始し、採番された ID を含めて返します。
    #[instrument(skip(self, new), fields(title = %new.title()))]
    pub async fn create(&self, new: NewTodo) -> Result<Todo, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let row: TodoRow = sqlx::query_as(
            r#"
            INSERT INTO todos (title, content, completed)
            VALUES (?, ?, 0)
            RETURNING id, title, content, completed
            "#,
        )
        .bind(new.title())
        .bind(new.content())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(todo_id = row.id, "todo created");
        Ok(row.into())
    }

    /// 部分更新。対象が無ければ `Ok(None)` を返します。
    ///
    /// 読み取りと書き込みを 1 文で行うため、同時更新でもロックの昇格が起きず後勝ちになります。
    /// `NULL` を束縛したフィールドは現在値のまま残り、空のパッチでも行は書き直されます。
    #[instrument(skip(self))]
    pub async fn update(
        &self,
        id: TodoId,
        patch: TodoPatch,
    ) -> Result<Option<Todo>, RepositoryError> {
        if patch.is_empty() {
            debug!(todo_id = %id, "empty patch, row is rewritten unchanged");
        }

        let mut tx = self.pool.begin().await?;

        let row: Option<TodoRow> = sqlx::query_as(
            r#"
            UPDATE todos
            SET completed = COALESCE(?, completed),
                content   = COALESCE(?, content)
            WHERE id = ?
            RETURNING id, title, content, completed
            "#,
        )
        .bind(patch.completed)
        .bind(patch.content)
        .bind(id.value())
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;

        match &row {
            Some(_) => info!(todo_id = %id, "todo updated"),
            None => debug!(todo_id = %id, "todo not found for update"),
        }
        Ok(row.map(Todo::from))
    }

    /// 物理削除。削除直前の内容を返します。対象が無ければ `Ok(None)`。
    #[instrument(skip(self))]
    pub async fn delete(&self, id: TodoId) -> Result<Option<Todo>, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let row: Option<TodoRow> = sqlx::query_as(
            "DELETE FROM todos WHERE id = ? RETURNING id, title, content, completed",
        )
        .bind(id.value())
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;

        match &row {
            Some(_) => info!(todo_id = %id, "todo deleted"),
            None => debug!(todo_id = %id, "todo not found for delete"),
        }
        Ok(row.map(Todo::from))
    }
}
