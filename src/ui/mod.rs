use egui::{Color32, Visuals, style::Widgets};

use trailmate::trail::TrailColor;

pub(crate) mod recap;

pub(crate) const PALETTE_NIGHT: Color32 = Color32::from_rgb(16, 20, 18);
pub(crate) const PALETTE_MOSS: Color32 = Color32::from_rgb(38, 54, 42);
pub(crate) const PALETTE_FOREST: Color32 = Color32::from_rgb(46, 125, 50);
pub(crate) const PALETTE_SAND: Color32 = Color32::from_rgb(215, 204, 200);

pub(crate) fn color32(color: TrailColor) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

/// Linear blend between two colours, `y` in `[0, 1]`
pub(crate) fn stroke_shade(start: Color32, end: Color32, y: f32) -> Color32 {
    let y = y.clamp(0., 1.);
    let channel = |a: u8, b: u8| (a as f32 + y * (b as f32 - a as f32)).round() as u8;
    Color32::from_rgb(
        channel(start.r(), end.r()),
        channel(start.g(), end.g()),
        channel(start.b(), end.b()),
    )
}

pub(crate) fn default_visuals() -> Visuals {
    Visuals {
        dark_mode: true,
        hyperlink_color: PALETTE_FOREST,
        faint_bg_color: PALETTE_NIGHT,
        extreme_bg_color: PALETTE_MOSS,
        panel_fill: PALETTE_NIGHT,
        button_frame: true,
        window_fill: PALETTE_NIGHT,
        widgets: Widgets::dark(),
        striped: false,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_shade_endpoints() {
        let start = Color32::from_rgb(0, 100, 200);
        let end = Color32::from_rgb(200, 100, 0);
        assert_eq!(stroke_shade(start, end, 0.), start);
        assert_eq!(stroke_shade(start, end, 1.), end);
        assert_eq!(stroke_shade(start, end, 0.5), Color32::from_rgb(100, 100, 100));
        // out of range values are clamped
        assert_eq!(stroke_shade(start, end, 3.), end);
    }

    #[test]
    fn test_trail_color_conversion() {
        assert_eq!(
            color32(TrailColor::FOX),
            Color32::from_rgb(0xff, 0x57, 0x22)
        );
    }
}
