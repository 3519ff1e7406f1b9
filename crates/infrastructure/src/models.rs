use domain::{Todo, TodoId};

/// `todos` テーブルの 1 行
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TodoRow {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub completed: bool,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo {
            id: TodoId::new(row.id),
            title: row.title,
            content: row.content,
            completed: row.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_maps_every_column() {
        let row = TodoRow {
            id: 3,
            title: "title".to_string(),
            content: "content".to_string(),
            completed: true,
        };

        let todo = Todo::from(row);
        assert_eq!(todo.id, TodoId::new(3));
        assert_eq!(todo.title, "title");
        assert_eq!(todo.content, "content");
        assert!(todo.completed);
    }
}
