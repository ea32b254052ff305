mod chart_view;
pub(crate) mod config;
mod map_view;
mod stats_panel;

use std::{sync::Arc, time::Duration};

use egui::{Button, Color32, Layout, RichText, Slider};
use egui_dropdown::DropDownBox;
use log::{error, info, warn};

use trailmate::journey::load_journeys_jsonl;
use trailmate::playback::WallClock;
use trailmate::{PlaybackPhase, PlaybackSpeed, RecapSession};

use config::ViewerConfig;

use super::{PALETTE_SAND, default_visuals};

pub(crate) const REFRESH_RATE_MS: u64 = 16;

fn selected_label(session: &RecapSession) -> String {
    session
        .journey()
        .and_then(|j| session.store().selector_label_of(&j.id))
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChartKind {
    Elevation,
    Environment,
}

/// `RecapApp` replays a recorded journey: the team's trails on a map, the
/// elevation or weather chart, and the playback controls.
///
/// The app calls `tick` once per frame while playing and stops requesting
/// repaints once playback is paused or finished.
pub(crate) struct RecapApp {
    session: RecapSession,
    clock: WallClock,
    config: ViewerConfig,
    chart: ChartKind,
    selected_journey_label: String,
    status_message: Option<String>,
}

impl RecapApp {
    pub(crate) fn new(
        session: RecapSession,
        config: ViewerConfig,
        cc: &eframe::CreationContext<'_>,
    ) -> Self {
        cc.egui_ctx.set_visuals(default_visuals());

        let selected_journey_label = selected_label(&session);
        let chart = if config.show_environment_chart {
            ChartKind::Environment
        } else {
            ChartKind::Elevation
        };
        Self {
            session,
            clock: WallClock::start(),
            config,
            chart,
            selected_journey_label,
            status_message: None,
        }
    }

    fn load_journeys_file(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Journeys", &["jsonl", "json"])
            .pick_file()
        else {
            return;
        };

        match load_journeys_jsonl(&path) {
            Ok(store) => {
                let speed = self.session.speed();
                self.session = RecapSession::new(Arc::new(store), None);
                self.session.set_speed(speed);
                self.sync_selected_label();
                self.status_message = Some(format!("Loaded {}", path.display()));
                info!("Replaced journeys with {:?}", path);
            }
            Err(e) => {
                error!("Could not load journeys file {:?}: {}", path, e);
                self.status_message = Some(format!("Could not load journeys: {}", e));
            }
        }
    }

    fn sync_selected_label(&mut self) {
        self.selected_journey_label = selected_label(&self.session);
    }

    fn show_top_bar(&mut self, ui: &mut egui::Ui) {
        ui.with_layout(Layout::left_to_right(egui::Align::Center), |ui| {
            ui.label(RichText::new("Journey Recap").heading().color(PALETTE_SAND));
            ui.separator();

            let previous_label = self.selected_journey_label.clone();
            let labels = self.session.store().selector_labels();
            ui.label(RichText::new("Journey: ").color(Color32::WHITE));
            ui.add(
                DropDownBox::from_iter(
                    labels,
                    "journey_dropbox",
                    &mut self.selected_journey_label,
                    |ui, text| ui.selectable_label(false, text),
                )
                .filter_by_input(false),
            );
            if previous_label != self.selected_journey_label {
                self.on_journey_picked();
            }

            ui.separator();
            let mut speed = self.session.speed();
            egui::ComboBox::from_label("Speed")
                .selected_text(speed.label())
                .show_ui(ui, |ui| {
                    for option in PlaybackSpeed::ALL {
                        ui.selectable_value(&mut speed, option, option.label());
                    }
                });
            self.session.set_speed(speed);

            ui.separator();
            ui.selectable_value(&mut self.chart, ChartKind::Elevation, "Elevation");
            ui.selectable_value(&mut self.chart, ChartKind::Environment, "Environment");

            ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("📂 Load Journeys").clicked() {
                    self.load_journeys_file();
                }
                if let Some(message) = &self.status_message {
                    ui.label(RichText::new(message).small().color(Color32::GRAY));
                }
            });
        });
    }

    fn on_journey_picked(&mut self) {
        let picked = self
            .session
            .store()
            .journey_for_label(&self.selected_journey_label)
            .map(|j| j.id.clone());
        // partial text while the dropdown is open matches nothing
        let Some(id) = picked else {
            return;
        };
        if let Err(e) = self.session.select_journey(&id) {
            warn!("{}", e);
            self.sync_selected_label();
        }
    }

    fn show_playback_controls(&mut self, ui: &mut egui::Ui) {
        let enabled = self.session.controls_enabled();
        ui.with_layout(Layout::left_to_right(egui::Align::Center), |ui| {
            if ui.add_enabled(enabled, Button::new("⟲ Replay")).clicked() {
                self.session.replay();
            }
            let label = if self.session.state().is_playing() {
                "⏸ Pause"
            } else {
                "⏵ Play"
            };
            let can_toggle = enabled && self.session.phase() != PlaybackPhase::Finished;
            if ui.add_enabled(can_toggle, Button::new(label)).clicked() {
                self.session.toggle();
            }

            let mut progress = self.session.state().progress();
            let percent = format!("{:.0}%", progress * 100.);
            let slider = ui.add_enabled(
                enabled,
                Slider::new(&mut progress, 0.0..=1.0)
                    .show_value(false)
                    .text(percent),
            );
            if slider.changed() {
                self.session.seek(progress);
            }

            if !enabled {
                ui.label(
                    RichText::new("This journey has no checkpoints to replay")
                        .color(Color32::GRAY),
                );
            } else if let Ok(checkpoint) = self.session.current_checkpoint() {
                ui.label(
                    RichText::new(format!(
                        "{} · {} · {:.0} m",
                        checkpoint.name, checkpoint.time, checkpoint.elevation
                    ))
                    .color(Color32::WHITE),
                );
            }
        });
    }
}

impl eframe::App for RecapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.session.state().is_playing() {
            self.session.drive(&self.clock);
            ctx.request_repaint_after(Duration::from_millis(self.config.refresh_rate_ms));
        }

        egui::TopBottomPanel::top("recap_top_bar")
            .min_height(36.)
            .show(ctx, |ui| self.show_top_bar(ui));

        egui::TopBottomPanel::bottom("playback_controls")
            .min_height(40.)
            .show(ctx, |ui| self.show_playback_controls(ui));

        egui::SidePanel::left("journey_stats")
            .default_width(260.)
            .show(ctx, |ui| self.show_stats_panel(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            let chart_height = ui.available_height() * 0.3;
            ui.allocate_ui(
                egui::vec2(ui.available_width(), ui.available_height() - chart_height),
                |ui| self.show_map(ui),
            );
            ui.separator();
            self.show_chart(ui);
        });
    }
}
