use thiserror::Error;

/// 永続化層のエラー
///
/// 行が存在しないことはエラーではなく `Ok(None)` で表現します。
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
