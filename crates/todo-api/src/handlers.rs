//! リクエストハンドラ
//!
//! 各ハンドラは入力を検証し、リポジトリ操作を 1 回だけ呼び出して結果を JSON にします。

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use domain::{NewTodo, TodoId};

use crate::error::{ApiError, DELETED_DETAIL};
use crate::models::{
    CreateTodoRequest, DetailResponse, HealthBody, TodoResponse, UpdateTodoQuery,
};
use crate::AppState;

/// ヘルスチェック
pub async fn health() -> (StatusCode, Json<HealthBody>) {
    (StatusCode::OK, Json(HealthBody { status: "ok" }))
}

/// GET /todos
pub async fn list_todos(
    State(state): State<AppState>,
) -> Result<Json<Vec<TodoResponse>>, ApiError> {
    let todos = state.db().todos().list().await?;
    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// GET /todos/{id}
pub async fn get_todo(
    State(state): State<AppState>,
    path: Result<Path<TodoId>, PathRejection>,
) -> Result<Json<TodoResponse>, ApiError> {
    let Path(id) = path?;
    let todo = state.db().todos().get(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(todo.into()))
}

/// POST /todos
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<Json<TodoResponse>, ApiError> {
    let Json(req) = payload?;
    let new = NewTodo::new(req.title, req.content)?;

    let todo = state.db().todos().create(new).await?;
    Ok(Json(todo.into()))
}

/// PUT /todos/{id}?completed=&content=
pub async fn update_todo(
    State(state): State<AppState>,
    path: Result<Path<TodoId>, PathRejection>,
    query: Result<Query<UpdateTodoQuery>, QueryRejection>,
) -> Result<Json<TodoResponse>, ApiError> {
    let Path(id) = path?;
    let Query(params) = query?;

    let todo = state
        .db()
        .todos()
        .update(id, params.into())
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(todo.into()))
}

/// DELETE /todos/{id}
pub async fn delete_todo(
    State(state): State<AppState>,
    path: Result<Path<TodoId>, PathRejection>,
) -> Result<Json<DetailResponse>, ApiError> {
    let Path(id) = path?;

    state.db().todos().delete(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(DetailResponse {
        detail: DELETED_DETAIL.to_string(),
    }))
}
