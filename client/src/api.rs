//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoApi` holds only the base URL and carries no mutable state between
//! calls. Each operation is split into a `build_*` method producing an
//! [`HttpRequest`] and a `parse_*` method consuming an [`HttpResponse`];
//! the host executes the round-trip in between. Status interpretation is
//! deliberately coarse: anything outside 2xx collapses into a single
//! [`RequestFailed`], matching how the UI reacts to failures.
//!
//! Collection routes keep the backend's trailing slash (`/todos/`,
//! `/todos/{id}/`).

use crate::error::RequestFailed;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CompleteTask, CreateTask, DraftTask, TodoItem};

#[derive(Debug, Clone)]
pub struct TodoApi {
    base_url: String,
}

impl TodoApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/todos/", self.base_url)
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}/todos/{id}/", self.base_url)
    }

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Get, self.collection_url())
    }

    /// Serialize a draft into a create request. The draft must already have
    /// passed [`DraftTask::validate`].
    pub fn build_create(&self, draft: &DraftTask) -> Result<HttpRequest, RequestFailed> {
        let payload = CreateTask::from(draft);
        let body = serde_json::to_string(&payload).map_err(RequestFailed::payload)?;
        Ok(HttpRequest::json(HttpMethod::Post, self.collection_url(), body))
    }

    pub fn build_complete(&self, id: u64) -> Result<HttpRequest, RequestFailed> {
        let body =
            serde_json::to_string(&CompleteTask { completed: true }).map_err(RequestFailed::payload)?;
        Ok(HttpRequest::json(HttpMethod::Put, self.item_url(id), body))
    }

    pub fn build_delete(&self, id: u64) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Delete, self.item_url(id))
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<TodoItem>, RequestFailed> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(RequestFailed::body)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<TodoItem, RequestFailed> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(RequestFailed::body)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<TodoItem, RequestFailed> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(RequestFailed::body)
    }

    /// Delete returns an empty success response; any 2xx counts.
    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), RequestFailed> {
        check_success(&response)
    }
}

fn check_success(response: &HttpResponse) -> Result<(), RequestFailed> {
    if response.is_success() {
        return Ok(());
    }
    Err(RequestFailed::status(response.status, &response.body))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> TodoApi {
        TodoApi::new("http://localhost:8000")
    }

    fn draft() -> DraftTask {
        DraftTask {
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            ..DraftTask::default()
        }
    }

    #[test]
    fn build_list_targets_collection_with_trailing_slash() {
        let req = api().build_list();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:8000/todos/");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn trailing_slash_on_base_url_is_normalized() {
        let api = TodoApi::new("http://localhost:8000/");
        assert_eq!(api.build_list().url, "http://localhost:8000/todos/");
    }

    #[test]
    fn build_create_posts_json_draft() {
        let req = api().build_create(&draft()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:8000/todos/");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Buy milk");
        assert_eq!(body["description"], "2%");
        assert!(body.get("completed").is_none(), "completed is server-assigned");
    }

    #[test]
    fn build_complete_puts_completion_flag_only() {
        let req = api().build_complete(7).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "http://localhost:8000/todos/7/");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"completed": true}));
    }

    #[test]
    fn build_delete_targets_item_route() {
        let req = api().build_delete(7);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "http://localhost:8000/todos/7/");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_success() {
        let response = HttpResponse {
            status: 200,
            body: r#"[{"id":1,"title":"Buy milk","description":"2%","completed":false}]"#
                .to_string(),
        };
        let items = api().parse_list(response).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[0].title, "Buy milk");
    }

    #[test]
    fn parse_list_failure_is_undifferentiated() {
        let not_found = HttpResponse {
            status: 404,
            body: String::new(),
        };
        let server_error = HttpResponse {
            status: 500,
            body: "boom".to_string(),
        };
        // Both collapse into RequestFailed; only the log detail differs.
        assert!(api().parse_list(not_found).is_err());
        let err = api().parse_list(server_error).unwrap_err();
        assert!(err.detail.contains("500"));
    }

    #[test]
    fn parse_create_success() {
        let response = HttpResponse {
            status: 201,
            body: r#"{"id":1,"title":"Buy milk","description":"2%","completed":false}"#
                .to_string(),
        };
        let item = api().parse_create(response).unwrap();
        assert_eq!(item.id, 1);
        assert!(!item.completed);
    }

    #[test]
    fn parse_update_success() {
        let response = HttpResponse {
            status: 200,
            body: r#"{"id":1,"title":"Buy milk","description":"2%","completed":true}"#
                .to_string(),
        };
        let item = api().parse_update(response).unwrap();
        assert!(item.completed);
    }

    #[test]
    fn parse_delete_accepts_any_success_status() {
        for status in [200, 204] {
            let response = HttpResponse {
                status,
                body: String::new(),
            };
            assert!(api().parse_delete(response).is_ok());
        }
    }

    #[test]
    fn parse_list_bad_json_is_request_failure() {
        let response = HttpResponse {
            status: 200,
            body: "not json".to_string(),
        };
        let err = api().parse_list(response).unwrap_err();
        assert!(err.detail.contains("invalid response body"));
    }
}
