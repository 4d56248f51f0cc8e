//! Client library for the todo list page.
//!
//! # Overview
//! A deterministic, host-does-IO client for a remote todo collection. The
//! library never opens a socket: controller operations produce
//! [`HttpRequest`] values, the host executes them however it likes, and the
//! matching `finish_*` call reconciles the in-memory list with the server's
//! response. Rendering is a pure function over the controller state.
//!
//! # Design
//! - [`TodoApi`] is stateless (base URL only); [`TodoListClient`] owns all
//!   mutable state: the item list, the loading flag, and the form draft.
//! - The in-memory list mirrors the server collection only up to the last
//!   completed request; concurrent external writers are not tracked.
//! - Each operation is a single best-effort request. Failures leave state
//!   untouched and surface as queued [`Notification`]s.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod notify;
pub mod types;
pub mod view;

pub use api::TodoApi;
pub use config::Config;
pub use controller::TodoListClient;
pub use error::{DraftError, RequestFailed};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use notify::{Notification, NotificationKind};
pub use types::{DraftTask, Priority, TodoItem};
