//! todo リストの HTTP API（axum）

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;

use infrastructure::Database;

pub use error::ApiError;
pub use router::{app, cors_layer};

/// アプリケーションの共有状態
///
/// 保持するのは接続プールのハンドルのみで、リクエスト間で可変状態は共有しません。
#[derive(Clone)]
pub struct AppState {
    db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Database {
        &self.db
    }
}
