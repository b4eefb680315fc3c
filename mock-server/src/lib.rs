use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

const SEED_USERS: &[&str] = &[
    "Leanne Graham",
    "Ervin Howell",
    "Clementine Bauch",
    "Patricia Lebsack",
    "Chelsey Dietrich",
    "Mrs. Dennis Schulist",
];

const TODOS_PER_USER: u64 = 4;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    pub user_id: u64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    pub user_id: Option<u64>,
    pub title: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Deserialize)]
pub struct ListParams {
    #[serde(rename = "_limit")]
    pub limit: Option<usize>,
}

/// Everything the server knows. Ids are assigned from `next_id`.
#[derive(Debug, Default)]
pub struct Data {
    pub todos: BTreeMap<u64, Todo>,
    pub users: Vec<User>,
    next_id: u64,
}

impl Data {
    /// Users and todos shaped like the public placeholder API.
    pub fn seeded() -> Self {
        let users: Vec<User> = SEED_USERS
            .iter()
            .zip(1..)
            .map(|(&name, id)| User {
                id,
                name: name.to_string(),
                username: name.split_whitespace().last().unwrap_or(name).to_lowercase(),
            })
            .collect();
        let mut data = Self {
            users,
            ..Self::default()
        };
        for user_id in 1..=SEED_USERS.len() as u64 {
            for n in 0..TODOS_PER_USER {
                data.insert(user_id, format!("task {n} of user {user_id}"), n % 2 == 1);
            }
        }
        data
    }

    fn insert(&mut self, user_id: u64, title: String, completed: bool) -> Todo {
        self.next_id += 1;
        let todo = Todo {
            user_id,
            id: self.next_id,
            title,
            completed,
        };
        self.todos.insert(todo.id, todo.clone());
        todo
    }
}

pub type Db = Arc<RwLock<Data>>;

pub fn app() -> Router {
    app_with(Data::seeded())
}

pub fn app_with(data: Data) -> Router {
    let db: Db = Arc::new(RwLock::new(data));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
        .route("/users", get(list_users))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<Vec<Todo>> {
    let data = db.read().await;
    let limit = params.limit.unwrap_or(usize::MAX);
    Json(data.todos.values().take(limit).cloned().collect())
}

async fn list_users(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<Vec<User>> {
    let data = db.read().await;
    let limit = params.limit.unwrap_or(usize::MAX);
    Json(data.users.iter().take(limit).cloned().collect())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let todo = db
        .write()
        .await
        .insert(input.user_id, input.title, input.completed);
    tracing::info!(id = todo.id, user_id = todo.user_id, "todo created");
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Todo>, StatusCode> {
    let data = db.read().await;
    data.todos.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let mut data = db.write().await;
    let todo = data.todos.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(user_id) = input.user_id {
        todo.user_id = user_id;
    }
    if let Some(title) = input.title {
        todo.title = title;
    }
    if let Some(completed) = input.completed {
        todo.completed = completed;
    }
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let mut data = db.write().await;
    data.todos.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    tracing::info!(id, "todo deleted");
    Ok(Json(serde_json::json!({})))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_with_camel_case() {
        let todo = Todo {
            user_id: 1,
            id: 1,
            title: "Test".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["userId"], 1);
        assert_eq!(json["title"], "Test");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn seeded_data_has_sequential_ids() {
        let data = Data::seeded();
        assert_eq!(data.users.len(), SEED_USERS.len());
        assert_eq!(data.todos.len(), SEED_USERS.len() * TODOS_PER_USER as usize);
        let ids: Vec<u64> = data.todos.keys().copied().collect();
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&(ids.len() as u64)));
        assert_eq!(data.users[0].username, "graham");
    }

    #[test]
    fn create_todo_defaults_completed_to_false() {
        let input: CreateTodo =
            serde_json::from_str(r#"{"userId":1,"title":"No completed field"}"#).unwrap();
        assert_eq!(input.title, "No completed field");
        assert!(!input.completed);
    }

    #[test]
    fn create_todo_rejects_missing_title() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"userId":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_todo_all_fields_optional() {
        let input: UpdateTodo = serde_json::from_str(r#"{}"#).unwrap();
        assert!(input.title.is_none());
        assert!(input.completed.is_none());
        assert!(input.user_id.is_none());
    }
}
