use domain::{Todo, TodoPatch};
use serde::{Deserialize, Serialize};

/// POST /todos リクエスト
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
    /// 省略時（null を含む）は空文字列
    #[serde(default)]
    pub content: Option<String>,
}

/// PUT /todos/{id} のクエリパラメータ
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodoQuery {
    pub completed: Option<bool>,
    pub content: Option<String>,
}

impl From<UpdateTodoQuery> for TodoPatch {
    fn from(query: UpdateTodoQuery) -> Self {
        TodoPatch {
            completed: query.completed,
            content: query.content,
        }
    }
}

/// Todo の JSON 表現
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub completed: bool,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id.value(),
            title: todo.title,
            content: todo.content,
            completed: todo.completed,
        }
    }
}

/// `{"detail": ...}` 形式のメッセージ（削除確認とエラーで共通）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailResponse {
    pub detail: String,
}

#[derive(Debug, Serialize)]
pub struct HealthBody {
    /// サービスの簡易ステータス
    pub status: &'static str,
}
