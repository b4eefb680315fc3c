//! Client core for the todo board.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). A host-supplied `Transport`
//! executes the round-trip, and `App` glues the results into an in-memory
//! `Store` and a headless `View` of the board.
//!
//! # Design
//! - `TodoClient` is stateless: it holds only the base URL and fetch limits.
//! - Each API operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `App` handlers are one-shot transitions; failures go to an `Alert` sink.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod store;
pub mod types;
pub mod view;

pub use app::{Alert, App, Event, SubmitOutcome};
pub use client::TodoClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use store::Store;
pub use types::{NewTodo, StatusPatch, Todo, User};
pub use view::{Field, View};
