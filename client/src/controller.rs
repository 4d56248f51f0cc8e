//! Stateful controller binding the todo list UI to the remote collection.
//!
//! # Design
//! `TodoListClient` owns the single state record the view renders from:
//! the item list (insertion order), the loading flag, and the form draft.
//! State flows one way: a user action produces a request, the completed
//! request reconciles the list, and the view re-renders from the result.
//! Every mutation happens here, in response to a completed request.
//!
//! Operations come in `start_*` / `finish_*` pairs around the host's HTTP
//! round-trip. Each is a single best-effort request: no retries, no
//! timeouts, no cancellation, and rapid repeated actions are not
//! de-duplicated. Requests race freely; reconciliation is last-write-wins
//! per id on success, not issue order. A response arriving for an item
//! that has since disappeared (the unmount/stale-response race) is
//! dropped rather than applied.
//!
//! Failures are absorbed locally: state stays exactly as it was before the
//! call, a notification is queued for the user, and nothing is rethrown.

use log::{debug, error, warn};

use crate::api::TodoApi;
use crate::config::Config;
use crate::http::{HttpRequest, HttpResponse};
use crate::notify::Notification;
use crate::types::{DraftTask, TodoItem};

pub struct TodoListClient {
    api: TodoApi,
    items: Vec<TodoItem>,
    is_loading: bool,
    draft: DraftTask,
    notifications: Vec<Notification>,
}

impl TodoListClient {
    /// A freshly mounted view: empty list, empty draft, loading until the
    /// first [`finish_load`](Self::finish_load) completes.
    pub fn new(config: &Config) -> Self {
        TodoListClient {
            api: TodoApi::new(&config.base_url),
            items: Vec::new(),
            is_loading: true,
            draft: DraftTask::default(),
            notifications: Vec::new(),
        }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn draft(&self) -> &DraftTask {
        &self.draft
    }

    /// The form writes user input straight into the draft.
    pub fn draft_mut(&mut self) -> &mut DraftTask {
        &mut self.draft
    }

    /// Hand queued notifications to the host for display, oldest first.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    // -- load ---------------------------------------------------------------

    /// Fetch the full collection. Issued exactly once per mount.
    pub fn start_load(&self) -> HttpRequest {
        self.api.build_list()
    }

    pub fn finish_load(&mut self, response: HttpResponse) {
        self.is_loading = false;
        match self.api.parse_list(response) {
            Ok(items) => {
                debug!("loaded {} todos", items.len());
                self.items = items;
            }
            Err(err) => {
                error!("load failed: {}", err.detail);
                self.notifications.push(Notification::error("Error fetching data"));
            }
        }
    }

    // -- create -------------------------------------------------------------

    /// Submit the current draft. An invalid draft is rejected locally:
    /// the user is notified and no request is produced.
    pub fn start_create(&mut self) -> Option<HttpRequest> {
        if let Err(err) = self.draft.validate() {
            warn!("draft rejected: {err}");
            self.notifications.push(Notification::error(err.to_string()));
            return None;
        }
        match self.api.build_create(&self.draft) {
            Ok(req) => Some(req),
            Err(err) => {
                error!("create failed: {}", err.detail);
                self.notifications.push(Notification::error("Error creating task"));
                None
            }
        }
    }

    pub fn finish_create(&mut self, response: HttpResponse) {
        match self.api.parse_create(response) {
            Ok(item) => {
                debug!("created todo {}", item.id);
                self.items.push(item);
                self.draft.reset();
                self.notifications.push(Notification::success("Task created"));
            }
            Err(err) => {
                error!("create failed: {}", err.detail);
                self.notifications.push(Notification::error("Error creating task"));
            }
        }
    }

    // -- complete -----------------------------------------------------------

    /// Mark an item completed. The UI hides the action for completed items,
    /// but the contract also ignores such calls here: an unknown id or an
    /// already-completed item produces no request.
    pub fn start_complete(&self, id: u64) -> Option<HttpRequest> {
        let item = self.items.iter().find(|item| item.id == id)?;
        if item.completed {
            return None;
        }
        match self.api.build_complete(id) {
            Ok(req) => Some(req),
            Err(err) => {
                error!("update failed: {}", err.detail);
                None
            }
        }
    }

    pub fn finish_complete(&mut self, response: HttpResponse) {
        match self.api.parse_update(response) {
            Ok(updated) => {
                match self.items.iter_mut().find(|item| item.id == updated.id) {
                    Some(item) => {
                        debug!("completed todo {}", updated.id);
                        *item = updated;
                        self.notifications.push(Notification::success("Task completed"));
                    }
                    // The item was removed while the request was in flight.
                    None => warn!("dropping stale update for todo {}", updated.id),
                }
            }
            Err(err) => {
                error!("update failed: {}", err.detail);
                self.notifications.push(Notification::error("Error updating task"));
            }
        }
    }

    // -- delete -------------------------------------------------------------

    pub fn start_delete(&self, id: u64) -> HttpRequest {
        self.api.build_delete(id)
    }

    /// The delete response carries no body, so the id is threaded through
    /// from the initiating action.
    pub fn finish_delete(&mut self, id: u64, response: HttpResponse) {
        match self.api.parse_delete(response) {
            Ok(()) => {
                debug!("deleted todo {id}");
                self.items.retain(|item| item.id != id);
                self.notifications.push(Notification::success("Task deleted"));
            }
            Err(err) => {
                error!("delete failed: {}", err.detail);
                self.notifications.push(Notification::error("Error deleting task"));
            }
        }
    }
}
