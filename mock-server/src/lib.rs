//! In-memory todo store speaking the provider's HTTP contract.
//!
//! Every endpoint exchanges a JSON array of strings. `create` and `update`
//! replace the whole collection, dropping repeated items (first occurrence
//! wins), and answer with what was stored, which is not always what was sent.

use std::{collections::HashSet, sync::Arc};

use axum::{
    extract::State,
    routing::{delete, get, post, put},
    Json, Router,
};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

pub type Db = Arc<RwLock<Vec<String>>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router whose store starts out holding `items`.
pub fn app_with(items: Vec<String>) -> Router {
    let db: Db = Arc::new(RwLock::new(items));
    Router::new()
        .route("/get", get(get_todos))
        .route("/create", post(replace_todos))
        .route("/update", put(replace_todos))
        .route("/delete", delete(delete_todos))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Drop repeated items, keeping the first occurrence of each.
pub fn dedup(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(item.clone())).collect()
}

async fn get_todos(State(db): State<Db>) -> Json<Vec<String>> {
    Json(db.read().await.clone())
}

async fn replace_todos(State(db): State<Db>, Json(items): Json<Vec<String>>) -> Json<Vec<String>> {
    let stored = dedup(items);
    debug!(items = stored.len(), "replacing todo list");
    *db.write().await = stored.clone();
    Json(stored)
}

async fn delete_todos(State(db): State<Db>) -> Json<Vec<String>> {
    let mut todos = db.write().await;
    debug!(items = todos.len(), "clearing todo list");
    todos.clear();
    Json(Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn dedup_keeps_first_occurrence_order() {
        assert_eq!(dedup(items(&["b", "a", "b", "c", "a"])), items(&["b", "a", "c"]));
    }

    #[test]
    fn dedup_of_unique_items_is_identity() {
        assert_eq!(dedup(items(&["x", "y"])), items(&["x", "y"]));
    }

    #[test]
    fn dedup_of_empty_list() {
        assert!(dedup(Vec::new()).is_empty());
    }
}
