//! Headless document model for the board.
//!
//! # Design
//! The board has three elements: the todo list, the new-todo title input and
//! the user select. Rendering is purely additive: todos are prepended so the
//! newest sits on top, users are appended as options. Every list item records
//! which listeners are bound to it so events on an erased or detached item
//! can be ignored by the dispatcher.

use std::time::{Duration, Instant};

use crate::types::{Todo, User};

/// Background applied to a form field that failed validation.
pub const FLASH_COLOR: &str = "#fdd";

/// How long the validation background stays on a field.
pub const FLASH_DURATION: Duration = Duration::from_secs(1);

/// Owner label for todos whose user was not loaded.
pub const UNKNOWN_USER: &str = "unknown";

/// Label of the placeholder option that means "no user selected".
pub const USER_PLACEHOLDER: &str = "Select user";

/// Event listeners a todo item can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listener {
    /// `change` on the completion checkbox.
    Change,
    /// `click` on the close control.
    Click,
}

/// Form fields that can be flagged by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    User,
}

/// One rendered todo: checkbox, label and close control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub todo_id: u64,
    pub checked: bool,
    pub title: String,
    pub owner: String,
    listeners: Vec<Listener>,
}

impl TodoItem {
    fn new(todo: &Todo, owner: &str) -> Self {
        Self {
            todo_id: todo.id,
            checked: todo.completed,
            title: todo.title.clone(),
            owner: owner.to_string(),
            listeners: vec![Listener::Change, Listener::Click],
        }
    }

    pub fn has_listener(&self, listener: Listener) -> bool {
        self.listeners.contains(&listener)
    }

    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    fn detach_listeners(&mut self) {
        self.listeners.clear();
    }

    pub fn label(&self) -> String {
        format!("{} by {}", self.title, self.owner)
    }
}

/// One `<option>` of the user select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserOption {
    pub value: u64,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
struct Flash {
    until: Option<Instant>,
}

impl Flash {
    fn start(&mut self, now: Instant) {
        self.until = Some(now + FLASH_DURATION);
    }

    fn color(&self, now: Instant) -> Option<&'static str> {
        match self.until {
            Some(until) if now < until => Some(FLASH_COLOR),
            _ => None,
        }
    }
}

/// User picker. Index 0 is always the placeholder with value 0.
#[derive(Debug, Clone)]
pub struct UserSelect {
    options: Vec<UserOption>,
    selected: usize,
    flash: Flash,
}

impl Default for UserSelect {
    fn default() -> Self {
        Self {
            options: vec![UserOption {
                value: 0,
                text: USER_PLACEHOLDER.to_string(),
            }],
            selected: 0,
            flash: Flash::default(),
        }
    }
}

impl UserSelect {
    pub fn options(&self) -> &[UserOption] {
        &self.options
    }

    fn append(&mut self, user: &User) {
        self.options.push(UserOption {
            value: user.id,
            text: user.name.clone(),
        });
    }

    /// Selects the first option whose value is `value`; returns `false` if none matches.
    pub fn select(&mut self, value: u64) -> bool {
        match self.options.iter().position(|option| option.value == value) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    pub fn selected_value(&self) -> u64 {
        self.options.get(self.selected).map_or(0, |option| option.value)
    }

    pub fn reset(&mut self) {
        self.selected = 0;
    }
}

/// Rendered board state.
#[derive(Debug, Clone, Default)]
pub struct View {
    items: Vec<TodoItem>,
    title: String,
    title_flash: Flash,
    users: UserSelect,
}

impl View {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items top to bottom.
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn item(&self, todo_id: u64) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.todo_id == todo_id)
    }

    pub fn users(&self) -> &UserSelect {
        &self.users
    }

    pub fn users_mut(&mut self) -> &mut UserSelect {
        &mut self.users
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Prepends an item for `todo`.
    pub fn render_todo(&mut self, todo: &Todo, owner: &str) {
        self.items.insert(0, TodoItem::new(todo, owner));
    }

    /// Appends an option for `user`.
    pub fn render_user(&mut self, user: &User) {
        self.users.append(user);
    }

    /// Sets the checkbox of `todo_id` and returns its previous state.
    pub fn set_checked(&mut self, todo_id: u64, checked: bool) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| item.todo_id == todo_id)?;
        Some(std::mem::replace(&mut item.checked, checked))
    }

    /// Detaches the listeners of the top-most item for `todo_id`, then removes it.
    pub fn erase(&mut self, todo_id: u64) -> Option<TodoItem> {
        let index = self.items.iter().position(|item| item.todo_id == todo_id)?;
        self.items[index].detach_listeners();
        Some(self.items.remove(index))
    }

    pub fn clear_form(&mut self) {
        self.title.clear();
        self.users.reset();
    }

    pub fn flash(&mut self, field: Field, now: Instant) {
        match field {
            Field::Title => self.title_flash.start(now),
            Field::User => self.users.flash.start(now),
        }
    }

    /// Background colour of `field` at `now`, if a flash is active.
    pub fn background(&self, field: Field, now: Instant) -> Option<&'static str> {
        match field {
            Field::Title => self.title_flash.color(now),
            Field::User => self.users.flash.color(now),
        }
    }
}
