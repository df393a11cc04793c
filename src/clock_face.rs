//! Hour numbers and quarter-hour dots around the dial.

use crate::arcs::TWELVE_OCLOCK;
use crate::config::{ChartLayout, HOURS, TICKS_PER_HOUR};
use crate::pen::TextPen;
use crate::scene::{Dial, DrawCommand, Scene};
use crate::typeface::centered_origin;

/// Degrees between two hour numbers.
pub const HOUR_STEP: f64 = 360.0 / HOURS as f64;

/// Label shown at `step` hours clockwise from the top. The top reads "24".
pub fn hour_label(step: usize) -> String {
    match step % HOURS {
        0 => HOURS.to_string(),
        hour => hour.to_string(),
    }
}

/// Adds the 24 hour numbers, each centered on its measured ink, followed by
/// the 96 tick dots. Hour dots are drawn at full size, quarter-hour dots
/// scaled down.
pub fn add_clock_face(scene: &mut Scene, dial: &Dial, layout: &ChartLayout, pen: &TextPen) {
    let number_radius = dial.radius * layout.number_radius;
    let number_pen = pen.sized(dial.radius * layout.number_size);

    for step in 0..HOURS {
        let text = hour_label(step);
        let anchor = dial.point_at(number_radius, step as f64 * HOUR_STEP + TWELVE_OCLOCK);
        let Some(bounds) = number_pen
            .typeface
            .text_bounds(&text, number_pen.text_size)
        else {
            continue;
        };
        let (x, y) = centered_origin(&bounds, anchor);
        scene.add_command(DrawCommand::Text {
            x,
            y,
            text,
            pen: number_pen.clone(),
        });
    }

    let tick_radius = dial.radius * layout.tick_radius;
    let major = dial.radius * layout.major_tick_size;
    let minor = major * layout.minor_tick_scale;
    let tick_step = HOUR_STEP / TICKS_PER_HOUR as f64;
    for tick in 0..HOURS * TICKS_PER_HOUR {
        let (cx, cy) = dial.point_at(tick_radius, tick as f64 * tick_step + TWELVE_OCLOCK);
        scene.add_command(DrawCommand::Disc {
            cx,
            cy,
            radius: if tick % TICKS_PER_HOUR == 0 { major } else { minor },
            color: pen.color,
        });
    }
}
