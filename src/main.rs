// NetVision - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Configuration loading and API key resolution
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use netvision::api;
pub use netvision::app;
pub use netvision::core;
pub use netvision::platform;
pub use netvision::ui;
pub use netvision::util;

use crate::api::client::ApiConfig;
use clap::Parser;
use std::time::Duration;

/// NetVision - AI-simulated port profiling and log analysis console.
///
/// Profiles a target by asking a generative-AI model what a scan would
/// likely find. No real scanning is performed.
#[derive(Parser, Debug)]
#[command(name = "NetVision", version, about)]
struct Cli {
    /// Target to profile immediately on launch (domain, IP, or service name).
    target: Option<String>,

    /// Override the configured model identifier.
    #[arg(short = 'm', long = "model")]
    model: Option<String>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialise logging subsystem
    util::logging::init(cli.debug, None);

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "NetVision starting"
    );

    // Resolve platform paths and load configuration
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (mut config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Configuration warning");
    }

    // CLI model override takes priority over config.toml
    if let Some(model) = cli.model {
        config.model = model;
    }

    // Resolve the API key from the environment. The application still starts
    // without one so the user sees an actionable message in the UI.
    let api_key = ApiConfig::api_key_from_env();
    let api_key_present = api_key.is_some();
    if !api_key_present {
        tracing::warn!("No API key found in GEMINI_API_KEY or API_KEY");
    }

    let api_config = ApiConfig {
        base_url: config.api_base_url.clone(),
        model: config.model.clone(),
        api_key: api_key.unwrap_or_default(),
        request_timeout: Duration::from_secs(config.request_timeout_secs),
    };

    tracing::info!(model = %api_config.model, "Ready to launch GUI");

    // Create application state
    let mut state =
        app::state::AppState::new(config.amber_palette, config.font_size, api_key_present);

    // If a target was provided on the CLI, queue it for immediate profiling.
    if let Some(target) = cli.target {
        state.target_input = target.clone();
        state.pending_profile = Some(target);
    }

    let amber = config.amber_palette;
    let font_size = config.font_size;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx, amber, font_size);
            Ok(Box::new(gui::NetVisionApp::new(state, api_config)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch NetVision GUI: {e}");
        std::process::exit(1);
    }
}
