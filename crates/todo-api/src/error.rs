use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use infrastructure::RepositoryError;
use thiserror::Error;

use crate::models::DetailResponse;

pub const NOT_FOUND_DETAIL: &str = "Todo not found";

/// 削除成功時の `detail`
pub const DELETED_DETAIL: &str = "Deleted";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", NOT_FOUND_DETAIL)]
    NotFound,

    /// 入力形式の不正（JSON/クエリ/パスの解釈失敗、空タイトルなど）
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_DETAIL.to_string()),
            ApiError::Validation(message) => (StatusCode::UNPROCESSABLE_ENTITY, message),
            ApiError::Internal(message) => {
                // 原因はログにのみ残し、クライアントには返さない
                tracing::error!(error = %message, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, Json(DetailResponse { detail })).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(e: RepositoryError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(message) => ApiError::Validation(message),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body;

    async fn detail_of(response: Response) -> String {
        let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: DetailResponse = serde_json::from_slice(&bytes).unwrap();
        json.detail
    }

    #[tokio::test]
    async fn not_found_maps_to_404_with_fixed_detail() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(detail_of(response).await, NOT_FOUND_DETAIL);
    }

    #[test]
    fn not_found_display_matches_detail() {
        assert_eq!(ApiError::NotFound.to_string(), NOT_FOUND_DETAIL);
    }

    #[tokio::test]
    async fn validation_maps_to_422_with_message() {
        let response = ApiError::from(DomainError::Validation("title cannot be empty".into()))
            .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(detail_of(response).await, "title cannot be empty");
    }

    #[tokio::test]
    async fn internal_hides_cause() {
        let response = ApiError::Internal("disk I/O error".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(detail_of(response).await, "Internal Server Error");
    }
}
