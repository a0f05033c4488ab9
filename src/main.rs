#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("starting fraud assistant UI");

    eframe::run_native(
        "Fraud Assistant",
        eframe::NativeOptions::default(),
        Box::new(|cc| Ok(Box::new(fraud_assist_ui::FraudAssistApp::new(cc)))),
    )
}

// Entry point is `start()` in lib.rs on wasm
#[cfg(target_arch = "wasm32")]
fn main() {}
