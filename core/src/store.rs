//! In-memory store for the todos and users loaded in this session.

use crate::types::{Todo, User};

/// Ordered collections of todos and users, in the order the API returned them.
///
/// The server may hand out the same id twice. Lookups by id pick the newest
/// todo with that id, matching the top-most item of the view.
#[derive(Debug, Default, Clone)]
pub struct Store {
    todos: Vec<Todo>,
    users: Vec<User>,
}

impl Store {
    pub fn new(todos: Vec<Todo>, users: Vec<User>) -> Self {
        Self { todos, users }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn todo(&self, id: u64) -> Option<&Todo> {
        self.todos.iter().rev().find(|todo| todo.id == id)
    }

    pub fn user_name(&self, user_id: u64) -> Option<&str> {
        self.users
            .iter()
            .find(|user| user.id == user_id)
            .map(|user| user.name.as_str())
    }

    pub fn push_todo(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Removes the newest todo with `id`.
    pub fn remove_todo(&mut self, id: u64) -> Option<Todo> {
        let position = self.todos.iter().rposition(|todo| todo.id == id)?;
        Some(self.todos.remove(position))
    }

    /// Returns `false` if no todo has `id`.
    pub fn set_completed(&mut self, id: u64, completed: bool) -> bool {
        match self.todos.iter_mut().rev().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.completed = completed;
                true
            }
            None => false,
        }
    }
}
