//! SVG markup for the board

use super::shapes::{Shape, board_shapes};
use crate::consts::CANVAS_SIZE;
use crate::life::SimState;
use crate::settings::Settings;

/// Attribute names carrying a shape's board coordinate, read back on click
pub const DATA_X: &str = "data-x";
pub const DATA_Y: &str = "data-y";

fn shape_markup(shape: &Shape, settings: &Settings) -> String {
    match *shape {
        Shape::Cell { point, x, y, size } => format!(
            r#"<rect class="live" x="{x}" y="{y}" width="{size}" height="{size}" fill="{}" {DATA_X}="{}" {DATA_Y}="{}"/>"#,
            settings.live_color, point.x, point.y
        ),
        Shape::Hit { point, x, y, size } => format!(
            r#"<rect class="hit" x="{x}" y="{y}" width="{size}" height="{size}" fill="transparent" {DATA_X}="{}" {DATA_Y}="{}"/>"#,
            point.x, point.y
        ),
        Shape::DeadMarker { point, cx, cy, r } => format!(
            r#"<circle class="dead" cx="{cx}" cy="{cy}" r="{r}" fill="{}" {DATA_X}="{}" {DATA_Y}="{}"/>"#,
            settings.dead_color, point.x, point.y
        ),
    }
}

/// Complete `<svg>` element for the board
pub fn board_svg(sim: &SimState, settings: &Settings) -> String {
    let shapes = board_shapes(sim, settings.show_dead_markers);
    let mut out = String::with_capacity(128 + shapes.len() * 96);
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{CANVAS_SIZE}" height="{CANVAS_SIZE}" viewBox="0 0 {CANVAS_SIZE} {CANVAS_SIZE}">"#
    ));
    for shape in &shapes {
        out.push_str(&shape_markup(shape, settings));
    }
    out.push_str("</svg>");
    out
}
