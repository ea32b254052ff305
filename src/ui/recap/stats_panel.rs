use egui::{Color32, RichText, Ui};

use trailmate::journey::DeviceStatus;

use super::RecapApp;
use crate::ui::{PALETTE_SAND, color32};

impl RecapApp {
    pub(crate) fn show_stats_panel(&mut self, ui: &mut Ui) {
        let Some(summary) = self.session.summary() else {
            ui.label(RichText::new("No journeys loaded").color(Color32::GRAY));
            return;
        };

        ui.label(RichText::new(&summary.name).heading().color(PALETTE_SAND));
        ui.add_space(6.);
        egui::Grid::new("journey_stats_grid")
            .num_columns(2)
            .spacing([12., 4.])
            .show(ui, |ui| {
                for (label, value) in [
                    ("Date", summary.date_range.clone()),
                    ("Distance", summary.distance.clone()),
                    ("Duration", summary.duration.clone()),
                    ("Elevation", summary.elevation_gain.clone()),
                    ("Checkpoints", summary.checkpoint_count.to_string()),
                    (
                        "Online",
                        format!("{}/{}", summary.online_count, summary.participant_count),
                    ),
                ] {
                    ui.label(RichText::new(label).color(Color32::GRAY));
                    ui.label(RichText::new(value).color(Color32::WHITE));
                    ui.end_row();
                }
            });

        if !summary.sos_participants.is_empty() {
            ui.add_space(6.);
            ui.label(
                RichText::new(format!("SOS: {}", summary.sos_participants.join(", ")))
                    .color(Color32::RED)
                    .strong(),
            );
        }

        ui.separator();
        ui.label(RichText::new("Team").strong().color(PALETTE_SAND));
        match self.session.markers() {
            Ok(markers) => {
                for marker in markers {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&marker.participant.avatar).size(18.));
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(&marker.participant.name)
                                    .color(color32(marker.marker_color)),
                            );
                            ui.label(
                                RichText::new(format!(
                                    "{} · {} · {:.0} m · {}",
                                    marker.checkpoint.name,
                                    marker.checkpoint.time,
                                    marker.checkpoint.elevation,
                                    marker.participant.status.label()
                                ))
                                .small()
                                .color(Color32::GRAY),
                            );
                        });
                    });
                }
            }
            Err(e) => {
                ui.label(RichText::new(e.to_string()).small().color(Color32::GRAY));
            }
        }

        let Some(journey) = self.session.journey() else {
            return;
        };
        if journey.connected_devices.is_empty() {
            return;
        }
        ui.separator();
        ui.label(RichText::new("Devices").strong().color(PALETTE_SAND));
        for device in &journey.connected_devices {
            let status_color = match device.status {
                DeviceStatus::Connected => Color32::GREEN,
                DeviceStatus::Disconnected => Color32::GRAY,
            };
            ui.label(
                RichText::new(format!(
                    "{} ({:?}) · {}% · {}",
                    device.name, device.connection_type, device.battery_level, device.owner
                ))
                .small()
                .color(status_color),
            );
        }
    }
}
