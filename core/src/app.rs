//! Board state and the handlers that react to user input.
//!
//! # Design
//! `App` owns the client, the transport, the alert sink, the store and the
//! view. Each handler is a one-shot transition: derive input from the view,
//! run one request through the transport, then update store and view on
//! success. Every failed request is reported once through the `Alert` sink.
//! Validation failures never reach the network; they flash the offending
//! field instead.

use std::time::Instant;

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::store::Store;
use crate::types::{NewTodo, Todo};
use crate::view::{Field, Listener, View, UNKNOWN_USER};

/// Receives the message of every failed request.
pub trait Alert {
    fn alert(&self, message: &str);
}

/// Result of submitting the new-todo form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The todo was created and rendered.
    Created(Todo),
    /// Validation failed on this field; nothing was sent.
    Rejected(Field),
    /// The request failed and was alerted.
    Failed,
}

/// User interaction on a rendered todo item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The checkbox of the todo changed.
    Change(u64),
    /// The close control of the todo was clicked.
    Click(u64),
}

pub struct App<T, A> {
    client: TodoClient,
    transport: T,
    alert: A,
    store: Store,
    view: View,
}

impl<T: Transport, A: Alert> App<T, A> {
    pub fn new(client: TodoClient, transport: T, alert: A) -> Self {
        Self {
            client,
            transport,
            alert,
            store: Store::default(),
            view: View::new(),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    pub fn alert_sink(&self) -> &A {
        &self.alert
    }

    /// Loads todos and users concurrently and renders both.
    ///
    /// A failed fetch is alerted and leaves its collection empty; the other
    /// collection is still rendered.
    pub fn init(&mut self) {
        let client = &self.client;
        let transport = &self.transport;
        let (todos, users) = std::thread::scope(|scope| {
            let todos = scope.spawn(|| {
                round_trip(transport, client.build_list_todos(), |response| {
                    client.parse_list_todos(response)
                })
            });
            let users = round_trip(transport, client.build_list_users(), |response| {
                client.parse_list_users(response)
            });
            let todos = todos
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
            (todos, users)
        });

        let todos = self.or_alert(todos, "Failed to load todos").unwrap_or_default();
        let users = self.or_alert(users, "Failed to load users").unwrap_or_default();
        tracing::info!(todos = todos.len(), users = users.len(), "board loaded");

        self.store = Store::new(todos, users);
        for user in self.store.users() {
            self.view.render_user(user);
        }
        for todo in self.store.todos() {
            let owner = owner_name(&self.store, todo.user_id);
            self.view.render_todo(todo, &owner);
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        self.submit_at(Instant::now())
    }

    /// Validates the form, then creates the todo. `now` starts any validation flash.
    pub fn submit_at(&mut self, now: Instant) -> SubmitOutcome {
        let title = self.view.title().trim().to_string();
        if title.is_empty() {
            self.view.flash(Field::Title, now);
            return SubmitOutcome::Rejected(Field::Title);
        }
        let user_id = self.view.users().selected_value();
        if user_id == 0 {
            self.view.flash(Field::User, now);
            return SubmitOutcome::Rejected(Field::User);
        }

        let input = NewTodo {
            user_id,
            title,
            completed: false,
        };
        let created = self.client.build_create_todo(&input).and_then(|request| {
            round_trip(&self.transport, request, |response| {
                self.client.parse_create_todo(response)
            })
        });
        let Some(todo) = self.or_alert(created, "Failed to create todo") else {
            return SubmitOutcome::Failed;
        };

        let owner = owner_name(&self.store, todo.user_id);
        self.view.render_todo(&todo, &owner);
        self.store.push_todo(todo.clone());
        self.view.clear_form();
        SubmitOutcome::Created(todo)
    }

    /// Flips the checkbox of `todo_id` and sends the new state.
    ///
    /// On failure the checkbox is restored and the store keeps its value.
    /// Returns `true` if the server accepted the change.
    pub fn toggle(&mut self, todo_id: u64) -> bool {
        let Some(previous) = self.view.item(todo_id).map(|item| item.checked) else {
            return false;
        };
        let completed = !previous;
        self.view.set_checked(todo_id, completed);

        let result = self.client.build_update_status(todo_id, completed).and_then(|request| {
            round_trip(&self.transport, request, |response| {
                self.client.parse_update_status(response)
            })
        });
        if self.or_alert(result, "Failed to update status").is_some() {
            self.store.set_completed(todo_id, completed);
            true
        } else {
            self.view.set_checked(todo_id, previous);
            false
        }
    }

    /// Deletes `todo_id` on the server, then from the store and the view.
    pub fn delete(&mut self, todo_id: u64) -> bool {
        let request = self.client.build_delete_todo(todo_id);
        let result = round_trip(&self.transport, request, |response| {
            self.client.parse_delete_todo(response)
        });
        if self.or_alert(result, "Failed to delete todo").is_none() {
            return false;
        }
        self.store.remove_todo(todo_id);
        self.view.erase(todo_id);
        true
    }

    /// Routes `event` to its handler if the target item still listens for it.
    /// Returns `false` for events nothing is bound to.
    pub fn dispatch(&mut self, event: Event) -> bool {
        let (todo_id, listener) = match event {
            Event::Change(id) => (id, Listener::Change),
            Event::Click(id) => (id, Listener::Click),
        };
        let bound = self
            .view
            .item(todo_id)
            .is_some_and(|item| item.has_listener(listener));
        if !bound {
            tracing::debug!(?event, "no listener bound");
            return false;
        }
        match event {
            Event::Change(id) => {
                self.toggle(id);
            }
            Event::Click(id) => {
                self.delete(id);
            }
        }
        true
    }

    fn or_alert<R>(&self, result: Result<R, ApiError>, context: &str) -> Option<R> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(error = %err, "{context}");
                self.alert.alert(&format!("{context}: {err}"));
                None
            }
        }
    }
}

fn round_trip<T, R>(
    transport: &T,
    request: HttpRequest,
    parse: impl FnOnce(HttpResponse) -> Result<R, ApiError>,
) -> Result<R, ApiError>
where
    T: Transport + ?Sized,
{
    tracing::debug!(method = %request.method, path = %request.path, "sending request");
    let response = transport.execute(request)?;
    tracing::debug!(status = response.status, "received response");
    parse(response)
}

fn owner_name(store: &Store, user_id: u64) -> String {
    match store.user_name(user_id) {
        Some(name) => name.to_string(),
        None => {
            tracing::warn!(user_id, "todo owner is not a loaded user");
            UNKNOWN_USER.to_string()
        }
    }
}
