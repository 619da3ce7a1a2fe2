//! LiftLog - Main Entry Point
//!
//! Desktop workout tracker for machine-based gym routines.

use liftlog_rs::{config::AppState, frontend::LiftLogApp, store};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,liftlog_rs=trace")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting LiftLog");

    let app_state = AppState::load_or_default();

    let workout_store = match store::open_default() {
        Ok(workout_store) => workout_store,
        Err(e) => {
            tracing::error!("Failed to open workout store: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(path = %workout_store.path().display(), "Workout store ready");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 800.0])
            .with_min_inner_size([400.0, 600.0])
            .with_title("LiftLog"),
        ..Default::default()
    };

    eframe::run_native(
        "LiftLog",
        native_options,
        Box::new(move |cc| {
            if app_state.ui_preferences.dark_mode {
                cc.egui_ctx.set_visuals(egui::Visuals::dark());
            } else {
                cc.egui_ctx.set_visuals(egui::Visuals::light());
            }

            let mut style = (*cc.egui_ctx.style()).clone();
            style.text_styles.iter_mut().for_each(|(_, font_id)| {
                font_id.size *= app_state.ui_preferences.font_scale;
            });
            cc.egui_ctx.set_style(style);

            Ok(Box::new(LiftLogApp::new(Box::new(workout_store), app_state)))
        }),
    )
}
