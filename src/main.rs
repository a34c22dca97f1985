mod config;
mod core;
mod logger;
mod ui;

use anyhow::{Context, Result};
use config::Config;
use eframe::NativeOptions;
use ui::ChatApp;

fn main() -> Result<()> {
    let config = Config::default();
    logger::init(&config.log_file);
    log::info!("🚀 {} starting", config.persona_name);

    // Timer tasks for the simulated delays run on this runtime
    let rt = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;
    let _guard = rt.enter();

    // Bad reply tables or rules stop us here, before the window opens
    let table = match &config.responses_path {
        Some(path) => crate::core::ResponseTable::load(path)?,
        None => crate::core::ResponseTable::builtin(),
    };
    let classifier = crate::core::IntentClassifier::new()?;
    log::info!(
        "📁 Configuration loaded: thinking {}-{} ms, emotion reset {} ms",
        config.thinking_min_ms,
        config.thinking_max_ms,
        config.emotion_reset_ms
    );

    let title = config.persona_name.clone();
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| -> std::result::Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(Box::new(ChatApp::new(config, table, classifier, &cc.egui_ctx)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Window closed with an error: {e}"))?;

    log::info!("👋 Window closed");
    Ok(())
}
