//! Trackline - multitrack timeline editor
//!
//! Entry point and main application loop.

use std::path::PathBuf;

use anyhow::Result;
use eframe::egui;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use trackline_core::EngineConfig;
use trackline_gesture::{GesturePhase, TimelineEngine};
use trackline_timeline::{TimelineEdit, TrackKind, TrackStore};
use trackline_ui::{show_timeline, Theme, TimelineViewState};

fn main() -> Result<()> {
    // Initialize logging; RUST_LOG overrides the default level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Trackline starting...");

    // Optional config path on the command line
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(EngineConfig::default_path);
    let config = EngineConfig::load_or_default(&config_path);
    info!(path = %config_path.display(), grid = config.grid_size, "engine configured");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title("Trackline"),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "Trackline",
        options,
        Box::new(move |cc| Ok(Box::new(TracklineApp::new(cc, config)))),
    )?;

    Ok(())
}

struct TracklineApp {
    engine: TimelineEngine,
    view: TimelineViewState,
}

impl TracklineApp {
    fn new(cc: &eframe::CreationContext<'_>, config: EngineConfig) -> Self {
        Theme::apply(&cc.egui_ctx);

        let store = TrackStore::with_default_track(&config);
        Self {
            engine: TimelineEngine::new(store, config),
            view: TimelineViewState::default(),
        }
    }

    fn apply_all(&mut self, edits: Vec<TimelineEdit>) {
        for edit in edits {
            debug!(?edit, "applying edit");
            self.engine.apply(edit);
        }
    }

    /// Delete removes the selected clip when nothing is being edited.
    fn handle_shortcuts(&self, ctx: &egui::Context) -> Option<TimelineEdit> {
        if self.engine.phase() != GesturePhase::Idle
            || self.view.rename.is_some()
            || ctx.wants_keyboard_input()
        {
            return None;
        }
        if !ctx.input(|i| i.key_pressed(egui::Key::Delete)) {
            return None;
        }
        let store = self.engine.store();
        let track = store.selection().track()?;
        let clip = store.selection().clip()?;
        Some(TimelineEdit::RemoveClip { track, clip })
    }
}

impl eframe::App for TracklineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut edits = Vec::new();

        // Menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Timeline", |ui| {
                    for kind in [TrackKind::Mono, TrackKind::Stereo] {
                        if ui.button(format!("Add {kind} track")).clicked() {
                            edits.push(TimelineEdit::AddTrack { kind });
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("Clear selection").clicked() {
                        edits.push(TimelineEdit::ClearSelection);
                        ui.close_menu();
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        info!("Trackline v{}", env!("CARGO_PKG_VERSION"));
                        ui.close_menu();
                    }
                });
            });
        });

        egui::CentralPanel::default()
            .frame(Theme::panel_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("timeline_tracks")
                    .show(ui, |ui| {
                        edits.extend(show_timeline(ui, &mut self.view, &mut self.engine));
                    });
            });

        edits.extend(self.handle_shortcuts(ctx));
        self.apply_all(edits);

        // Keep previews moving while a gesture is in flight.
        if self.engine.phase() != GesturePhase::Idle {
            ctx.request_repaint();
        }
    }
}
