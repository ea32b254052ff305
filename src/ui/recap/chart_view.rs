use std::sync::Arc;

use egui::{Color32, RichText, Ui};
use egui_plot::{Legend, Line, PlotPoints, Points};

use trailmate::trail::checkpoint_index;

use super::{ChartKind, RecapApp};
use crate::ui::{PALETTE_FOREST, PALETTE_SAND, stroke_shade};

const CURSOR_RADIUS: f32 = 6.;

impl RecapApp {
    pub(crate) fn show_chart(&mut self, ui: &mut Ui) {
        match self.chart {
            ChartKind::Elevation => self.show_elevation_chart(ui),
            ChartKind::Environment => self.show_environment_chart(ui),
        }
    }

    fn show_elevation_chart(&self, ui: &mut Ui) {
        let Some(journey) = self.session.journey().filter(|j| j.has_checkpoints()) else {
            ui.label(RichText::new("No elevation data").color(Color32::GRAY));
            return;
        };
        let progress = self.session.state().progress();
        let cursor = checkpoint_index(progress, journey.checkpoints.len());

        let min = journey.min_elevation().unwrap_or(0.);
        let span = (journey.max_elevation().unwrap_or(0.) - min).max(1.);
        let elevation = PlotPoints::new(
            journey
                .checkpoints
                .iter()
                .enumerate()
                .map(|(i, c)| [i as f64, c.elevation])
                .collect(),
        );
        let current = PlotPoints::new(vec![[
            cursor as f64,
            journey.checkpoints[cursor].elevation,
        ]]);

        egui_plot::Plot::new("elevation_chart")
            .legend(Legend::default())
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new("Elevation (m)", elevation)
                        .gradient_color(
                            Arc::new(move |point| {
                                stroke_shade(PALETTE_FOREST, PALETTE_SAND, ((point.y - min) / span) as f32)
                            }),
                            true,
                        )
                        .color(PALETTE_FOREST),
                );
                plot_ui.points(
                    Points::new("Current checkpoint", current)
                        .color(Color32::WHITE)
                        .radius(CURSOR_RADIUS),
                );
            });
    }

    fn show_environment_chart(&self, ui: &mut Ui) {
        let Some(journey) = self
            .session
            .journey()
            .filter(|j| !j.environmental_data.is_empty())
        else {
            ui.label(RichText::new("No environmental data").color(Color32::GRAY));
            return;
        };
        let samples = &journey.environmental_data;
        let cursor = checkpoint_index(self.session.state().progress(), samples.len());

        let series = |value: fn(&trailmate::journey::EnvironmentalSample) -> f64| {
            PlotPoints::new(
                samples
                    .iter()
                    .enumerate()
                    .map(|(i, s)| [i as f64, value(s)])
                    .collect(),
            )
        };

        egui_plot::Plot::new("environment_chart")
            .legend(Legend::default())
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new("Temperature (°C)", series(|s| s.temperature)).color(Color32::RED),
                );
                plot_ui.line(
                    Line::new("Humidity (%)", series(|s| s.humidity)).color(Color32::LIGHT_BLUE),
                );
                // pressure sits around 1000 hPa, plot its deviation so it shares the axis
                plot_ui.line(
                    Line::new("Pressure (hPa - 1000)", series(|s| s.pressure - 1000.))
                        .color(Color32::YELLOW),
                );
                plot_ui.points(
                    Points::new(
                        "Now",
                        PlotPoints::new(vec![[cursor as f64, samples[cursor].temperature]]),
                    )
                    .color(Color32::WHITE)
                    .radius(CURSOR_RADIUS),
                );
            });

        if let Some(sample) = self.session.environment() {
            ui.label(
                RichText::new(format!(
                    "{}: {:.0}°C, {:.0}% humidity, {:.0} hPa",
                    sample.time, sample.temperature, sample.humidity, sample.pressure
                ))
                .small()
                .color(Color32::WHITE),
            );
        }
    }
}
