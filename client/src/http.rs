//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The
//! library builds `HttpRequest` values and consumes `HttpResponse` values
//! without ever touching the network — the host (a UI event loop, a test
//! harness) executes the actual round-trip between a controller `start_*`
//! and `finish_*` call. This keeps the whole client deterministic and makes
//! the I/O boundary explicit.
//!
//! All fields are owned (`String`, `Vec`) so values can be handed across
//! threads or queued without lifetime concerns.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by the controller's `start_*` methods. The host executes it
/// against the network and feeds the resulting [`HttpResponse`] back to
/// the matching `finish_*` method.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// A bodyless request with no headers.
    pub fn bare(method: HttpMethod, url: String) -> Self {
        HttpRequest {
            method,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    /// A request carrying a JSON body and the matching content-type header.
    pub fn json(method: HttpMethod, url: String, body: String) -> Self {
        HttpRequest {
            method,
            url,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        }
    }
}

/// An HTTP response described as plain data, constructed by the host after
/// executing an [`HttpRequest`].
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
