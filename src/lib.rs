//! Fraud Assist UI - query panel for the fraud assistant backend
//!
//! A single egui panel that POSTs a natural-language question to the
//! backend chat endpoint and renders the answer plus raw diagnostics.

pub mod api;
pub mod app;
pub mod panels;
pub mod state;

pub use app::FraudAssistApp;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let canvas = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("fraud_assist_canvas"))
        .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        .expect("canvas element 'fraud_assist_canvas' not found");

    wasm_bindgen_futures::spawn_local(async {
        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(FraudAssistApp::new(cc)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}
