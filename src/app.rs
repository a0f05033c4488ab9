//! Fraud Assistant application
//!
//! One query panel wired to the backend chat endpoint. Requests are spawned
//! off the UI thread and their results come back through a pending holder
//! that update() polls each frame.

use crate::api::ApiClient;
use crate::panels::{query_panel, QueryPanelAction};
use crate::state::{ChatRequest, ChatResponse, QueryPanelState};
use eframe::egui;
use std::sync::{Arc, Mutex};

/// Path the query is POSTed to, unless overridden at construction.
const DEFAULT_CHAT_PATH: &str = "/chat";

type PendingChat = Arc<Mutex<Option<Result<ChatResponse, String>>>>;

/// Main application state
pub struct FraudAssistApp {
    // API client
    api: ApiClient,
    chat_path: String,

    // Panel state
    state: QueryPanelState,

    // Async result holder (written by the spawned request, taken in update)
    pending_chat: Option<PendingChat>,

    // Tokio runtime for native builds
    #[cfg(not(target_arch = "wasm32"))]
    runtime: Arc<tokio::runtime::Runtime>,
}

impl FraudAssistApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        #[cfg(target_arch = "wasm32")]
        let base_url = {
            web_sys::window()
                .and_then(|w| w.location().origin().ok())
                .unwrap_or_else(|| "http://localhost:8000".to_string())
        };

        #[cfg(not(target_arch = "wasm32"))]
        let base_url = "http://localhost:8000".to_string();

        Self::with_endpoint(&base_url, DEFAULT_CHAT_PATH)
    }

    /// Build an app pointed at a specific backend.
    pub fn with_endpoint(base_url: &str, chat_path: &str) -> Self {
        Self {
            api: ApiClient::new(base_url),
            chat_path: chat_path.to_string(),
            state: QueryPanelState::default(),
            pending_chat: None,
            #[cfg(not(target_arch = "wasm32"))]
            runtime: Arc::new(
                tokio::runtime::Builder::new_multi_thread()
                    .enable_all()
                    .build()
                    .expect("Failed to create tokio runtime"),
            ),
        }
    }

    pub fn state(&self) -> &QueryPanelState {
        &self.state
    }

    // =========================================================================
    // API CALLS
    // =========================================================================

    /// Submit the current query. No-op while the query is blank; otherwise
    /// spawns a single POST and marks the panel as loading until the result
    /// (success or failure) is taken by check_pending_requests().
    fn submit(&mut self) {
        if self.state.query.trim().is_empty() {
            return;
        }

        self.state.loading = true;
        self.state.error = None;

        let api = self.api.clone();
        let path = self.chat_path.clone();
        let request = ChatRequest {
            query: self.state.query.clone(),
        };
        let result: PendingChat = Arc::new(Mutex::new(None));
        let result_clone = result.clone();

        tracing::debug!(path = %path, "submitting query");

        #[cfg(target_arch = "wasm32")]
        {
            wasm_bindgen_futures::spawn_local(async move {
                let res: Result<ChatResponse, String> = api.post(&path, &request).await;
                *result_clone.lock().unwrap() = Some(res);
            });
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            self.runtime.spawn(async move {
                let res: Result<ChatResponse, String> = api.post(&path, &request).await;
                *result_clone.lock().unwrap() = Some(res);
            });
        }

        self.pending_chat = Some(result);
    }

    // =========================================================================
    // ASYNC RESULT HANDLING
    // =========================================================================

    fn check_pending_requests(&mut self) {
        let chat_result = self
            .pending_chat
            .as_ref()
            .and_then(|p| p.try_lock().ok())
            .and_then(|mut g| g.take());
        if let Some(result) = chat_result {
            match result {
                Ok(response) => self.state.response = Some(response),
                // Previous response is intentionally kept on failure
                Err(e) if e.is_empty() => self.state.error = Some("Request failed".to_string()),
                Err(e) => self.state.error = Some(e),
            }
            self.state.loading = false;
            self.pending_chat = None;
        }
    }

    // =========================================================================
    // EVENT HANDLERS
    // =========================================================================

    fn handle_panel_action(&mut self, action: QueryPanelAction) {
        match action {
            QueryPanelAction::None => {}
            QueryPanelAction::Submit => self.submit(),
            QueryPanelAction::FillExample(txn_id) => self.state.fill_example(txn_id),
            QueryPanelAction::Clear => self.state.clear(),
        }
    }
}

impl eframe::App for FraudAssistApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_pending_requests();

        // Keep repainting while a request is pending so settlement is seen
        if self.pending_chat.is_some() {
            ctx.request_repaint();
        }

        let mut action = QueryPanelAction::None;
        egui::CentralPanel::default().show(ctx, |ui| {
            action = query_panel(ui, &mut self.state);
        });
        self.handle_panel_action(action);
    }
}
