use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use idiamas_config::Config;
use idiamas_ocr::{HotkeyBindings, TesseractRecognizer, list_monitors, validate_region};

mod cli;
mod controller;
mod events;
mod io;
mod logging;
mod pipeline;
mod state;
mod status;
mod ui;

#[cfg(test)]
mod tests;

use self::cli::Args;
use self::controller::AppController;
use self::pipeline::PipelineContext;
use self::state::AppState;

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Startup failed: {:#}", e);
            eprintln!("idiamas: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    load_env(args.env_file.as_deref())?;

    if args.list_monitors {
        return print_monitors();
    }

    let config = Config::from_env().context("Invalid configuration")?;
    let log_file = args.log_file.clone().unwrap_or_else(|| config.log_file.clone());
    logging::init(&log_file)?;

    tracing::info!("idiamas v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::debug!("Config: {:?}", config);

    let version = TesseractRecognizer::probe().context("Tesseract is not available")?;
    tracing::info!("Using tesseract {}", version);
    match TesseractRecognizer::languages() {
        Ok(langs) if !langs.iter().any(|l| *l == config.ocr.language) => tracing::warn!(
            "Tesseract language '{}' is not installed (available: {})",
            config.ocr.language,
            langs.join(", ")
        ),
        Ok(_) => {}
        Err(e) => tracing::warn!("Could not list tesseract languages: {}", e),
    }

    let monitor = validate_region(config.ocr.capture_region)?;
    tracing::info!(
        "Capture region {} on monitor '{}'",
        config.ocr.capture_region,
        monitor.name
    );

    // Hooks are owned by the main thread, released when dropped below
    let keys = config.hotkeys.keys()?;
    let hotkeys = HotkeyBindings::register_global(keys.translate, keys.quit)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("idiamas-worker")
        .build()
        .context("Failed to start tokio runtime")?;

    let ui_config = config.ui.clone();
    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state.clone());
    let ctx = PipelineContext::production(state, controller.app_to_ui_tx())?;
    let provider = ctx.translator.metadata();
    tracing::info!(
        "Translating with {} (model {}, into {})",
        provider.name,
        ctx.options.model,
        ctx.options.explanation_language
    );

    let tasks = {
        let _guard = runtime.enter();
        controller.spawn_tasks(ctx, hotkeys.ids())
    };

    let (app_to_ui_rx, ui_to_app_tx) = controller.ui_endpoints();
    let ui_result = ui::ui_loop(app_to_ui_rx, ui_to_app_tx, ui_config);

    controller.shutdown();
    drop(hotkeys);

    let summary = runtime.block_on(controller.state().status.snapshot());
    tracing::info!(
        "Session finished: {} cycles, {} translated, {} empty, {} failed, {} ignored triggers",
        summary.cycles,
        summary.translated,
        summary.empty,
        summary.failures,
        summary.ignored_triggers
    );

    {
        let _guard = runtime.enter();
        drop(tasks);
    }
    runtime.shutdown_background();

    ui_result
}

fn load_env(path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("Failed to load env file {}", path.display()))?;
        }
        None => {
            // `.env` is optional
            if let Err(e) = dotenvy::dotenv() {
                if !e.not_found() {
                    return Err(e).context("Failed to load .env");
                }
            }
        }
    }
    Ok(())
}

fn print_monitors() -> anyhow::Result<()> {
    let monitors = list_monitors()?;
    println!("Available monitors:");
    if monitors.is_empty() {
        println!("  No monitors detected");
    }
    for (index, monitor) in monitors.iter().enumerate() {
        println!(
            "  [{}] {} - {}x{} at ({}, {}){}",
            index,
            monitor.name,
            monitor.width,
            monitor.height,
            monitor.x,
            monitor.y,
            if monitor.is_primary { " (primary)" } else { "" }
        );
    }
    Ok(())
}
