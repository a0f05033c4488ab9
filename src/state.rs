//! Wire types and panel state
//!
//! The backend is treated as opaque: `ChatResponse` keeps `retrieved` and any
//! extra fields as raw JSON so the panel can dump them verbatim.

use serde::{Deserialize, Serialize};

/// Request body for the chat endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
}

/// Response from the chat endpoint.
///
/// `answer` and `retrieved` are required; everything else the backend sends
/// is captured in `extra` and shown in the raw-dump view.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    pub retrieved: serde_json::Value,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Local state of the query panel.
///
/// Created empty at construction, never persisted. `response` and `error` are
/// only written by the app's pending-result handling; `loading` is true
/// strictly while one request is in flight.
#[derive(Default)]
pub struct QueryPanelState {
    /// Draft query text
    pub query: String,
    /// Last successful response (replaced wholesale, never merged)
    pub response: Option<ChatResponse>,
    /// Last failure message
    pub error: Option<String>,
    /// True while a request is in flight
    pub loading: bool,
}

impl QueryPanelState {
    /// Overwrite the draft query with a canned question about a transaction.
    pub fn fill_example(&mut self, txn_id: u64) {
        self.query = format!("Is txn {} fraudulent? Explain and recommend action.", txn_id);
    }

    /// Reset query, response and error. Does not touch `loading`: an
    /// in-flight request is not cancelled and its result will still land.
    pub fn clear(&mut self) {
        self.query.clear();
        self.response = None;
        self.error = None;
    }
}
