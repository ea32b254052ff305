use egui::{Color32, RichText, Ui};
use egui_plot::{Legend, Line, PlotPoints, Points};
use log::debug;

use trailmate::GeoPosition;
use trailmate::trail::TrailColor;

use super::RecapApp;
use crate::ui::color32;

const MARKER_RADIUS: f32 = 8.;
const CHECKPOINT_RADIUS: f32 = 3.;

fn to_plot(position: &GeoPosition) -> [f64; 2] {
    [position.longitude, position.latitude]
}

impl RecapApp {
    /// Map view: the team trails, the checkpoints and a marker per hiker
    pub(crate) fn show_map(&mut self, ui: &mut Ui) {
        let Some(journey) = self.session.journey() else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No journeys loaded").color(Color32::GRAY));
            });
            return;
        };

        let (trails, markers) = match (self.session.trails(), self.session.markers()) {
            (Ok(trails), Ok(markers)) => (trails, markers),
            (Err(e), _) | (_, Err(e)) => {
                debug!("Not drawing map for journey {}: {}", journey.id, e);
                ui.centered_and_justified(|ui| {
                    ui.label(
                        RichText::new(format!("{} has no recorded checkpoints", journey.name))
                            .color(Color32::GRAY),
                    );
                });
                return;
            }
        };

        let checkpoint_points =
            PlotPoints::new(journey.checkpoints.iter().map(|c| to_plot(&c.position)).collect());

        egui_plot::Plot::new("journey_map")
            .data_aspect(1.)
            .legend(Legend::default())
            .show_axes(false)
            .show_grid(false)
            .show(ui, |plot_ui| {
                plot_ui.points(
                    Points::new("Checkpoints", checkpoint_points)
                        .color(Color32::LIGHT_GRAY)
                        .radius(CHECKPOINT_RADIUS),
                );
                for (participant, path) in trails {
                    plot_ui.line(
                        Line::new(
                            participant.name.clone(),
                            PlotPoints::new(path.iter().map(to_plot).collect()),
                        )
                        .color(color32(TrailColor::for_participant(participant)).gamma_multiply(0.7))
                        .width(4.),
                    );
                }
                for marker in markers {
                    plot_ui.points(
                        Points::new(
                            format!("{} {}", marker.participant.avatar, marker.participant.name),
                            PlotPoints::new(vec![to_plot(&marker.position)]),
                        )
                        .color(color32(marker.marker_color))
                        .radius(MARKER_RADIUS),
                    );
                }
            });
    }
}
