//! Inner disc with the usage summary stacked above the day-range caption.

use crate::config::ChartLayout;
use crate::pen::{Pen, TextPen};
use crate::scene::{DrawCommand, Scene};
use crate::typeface::{centered_origin, TextBounds};

/// Vertical centers of the summary and caption for a disc centered at `cy`.
///
/// The block spanned by both labels is centered on `cy`, with the caption
/// height inflated by `caption_weight` to leave room below the summary.
pub fn label_centers(
    cy: f32,
    summary_height: f32,
    caption_height: f32,
    caption_weight: f32,
) -> (f32, f32) {
    let half = (summary_height + caption_height * caption_weight) / 2.0;
    let top = cy - half;
    let bottom = cy + half;
    (top + summary_height / 2.0, bottom - caption_height / 2.0)
}

/// Adds the inner disc of `inner_radius` and both labels, each centered
/// horizontally on `center.0` using its own ink bounds.
pub fn add_center_label(
    scene: &mut Scene,
    center: (f32, f32),
    inner_radius: f32,
    layout: &ChartLayout,
    dial_pen: &Pen,
    text_pen: &TextPen,
    summary: &str,
    caption: &str,
) {
    scene.add_command(DrawCommand::Disc {
        cx: center.0,
        cy: center.1,
        radius: inner_radius,
        color: dial_pen.color,
    });

    let summary_pen = text_pen.sized(inner_radius * layout.summary_size);
    let caption_pen = text_pen.sized(inner_radius * layout.caption_size);
    let summary_bounds = summary_pen
        .typeface
        .text_bounds(summary, summary_pen.text_size);
    let caption_bounds = caption_pen
        .typeface
        .text_bounds(caption, caption_pen.text_size);

    let height = |b: &Option<TextBounds>| b.map_or(0.0, |b| b.height());
    let (summary_y, caption_y) = label_centers(
        center.1,
        height(&summary_bounds),
        height(&caption_bounds),
        layout.caption_weight,
    );

    for (text, bounds, pen, y) in [
        (summary, summary_bounds, summary_pen, summary_y),
        (caption, caption_bounds, caption_pen, caption_y),
    ] {
        let Some(bounds) = bounds else {
            continue;
        };
        let (x, y) = centered_origin(&bounds, (center.0, y));
        scene.add_command(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
            pen,
        });
    }
}
