//! Error types for the todo client.
//!
//! # Design
//! Request failures are deliberately undifferentiated: the UI reacts the
//! same way to a refused connection, a 500, or a garbled body — state stays
//! as it was and the user sees one error notification. `RequestFailed`
//! therefore carries a detail string for logs only; callers never branch on
//! it. Draft validation gets its own type because it happens before any
//! request exists.

use thiserror::Error;

/// A request-level failure: non-success status, undecodable body, or a
/// transport error the host folded in via [`RequestFailed::transport`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("request failed: {detail}")]
pub struct RequestFailed {
    pub detail: String,
}

impl RequestFailed {
    pub fn status(status: u16, body: &str) -> Self {
        RequestFailed {
            detail: format!("HTTP {status}: {body}"),
        }
    }

    pub fn payload(err: serde_json::Error) -> Self {
        RequestFailed {
            detail: format!("invalid request payload: {err}"),
        }
    }

    pub fn body(err: serde_json::Error) -> Self {
        RequestFailed {
            detail: format!("invalid response body: {err}"),
        }
    }

    /// For hosts to wrap network-level errors (DNS, refused connection)
    /// that never produced an `HttpResponse`.
    pub fn transport(err: impl std::fmt::Display) -> Self {
        RequestFailed {
            detail: format!("transport error: {err}"),
        }
    }
}

/// Local required-field validation failure. Rejected before any network
/// call; `items` and the draft are left untouched.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("description must not be empty")]
    EmptyDescription,
}
