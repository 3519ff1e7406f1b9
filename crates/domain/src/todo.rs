//! Todo エンティティとその入力モデル
//!
//! 永続化や HTTP には依存せず、フィールドの不変条件のみを扱います。

use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Todo の識別子（DB が採番する整数 ID）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for TodoId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 永続化済みの Todo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub content: String,
    pub completed: bool,
}

/// 作成用の入力（検証済み）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    title: String,
    content: String,
}

impl NewTodo {
    /// タイトルが空白のみの場合は `DomainError::Validation` を返します。
    /// `content` 省略時は空文字列です。
    pub fn new(title: impl Into<String>, content: Option<String>) -> Result<Self, DomainError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".to_string()));
        }

        Ok(Self {
            title,
            content: content.unwrap_or_default(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// 部分更新。`None` のフィールドは「変更なし」でクリアはしません。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub completed: Option<bool>,
    pub content: Option<String>,
}

impl TodoPatch {
    pub fn is_empty(&self) -> bool {
        self.completed.is_none() && self.content.is_none()
    }
}
