// ============================================================================
// RETAINED MODE ABSTRACTIONS
// ============================================================================

use crate::canvas::Canvas;
use crate::pen::{Color, TextPen};

/// Center and outer radius of the 24-hour dial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dial {
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
}

impl Dial {
    /// Largest dial centered in a `width` x `height` image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cx: width as f32 / 2.0,
            cy: height as f32 / 2.0,
            radius: width.min(height) as f32 / 2.0,
        }
    }

    /// Point at `radius` from the center in direction `angle` (degrees,
    /// 0 at 3 o'clock, clockwise).
    pub fn point_at(&self, radius: f32, angle: f64) -> (f32, f32) {
        let a = angle.to_radians();
        (
            self.cx + radius * a.cos() as f32,
            self.cy + radius * a.sin() as f32,
        )
    }
}

#[derive(Clone, Debug)]
pub enum DrawCommand {
    Disc {
        cx: f32,
        cy: f32,
        radius: f32,
        color: Color,
    },
    Pie {
        cx: f32,
        cy: f32,
        radius: f32,
        start_angle: f64,
        sweep_angle: f64,
        color: Color,
    },
    /// Text with its baseline origin at (`x`, `y`).
    Text {
        x: f32,
        y: f32,
        text: String,
        pen: TextPen,
    },
}

/// Ordered draw list, rasterized back to front.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_command(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn render(&self, canvas: &mut Canvas) {
        for command in &self.commands {
            match command {
                DrawCommand::Disc {
                    cx,
                    cy,
                    radius,
                    color,
                } => canvas.fill_disc(*cx, *cy, *radius, *color),
                DrawCommand::Pie {
                    cx,
                    cy,
                    radius,
                    start_angle,
                    sweep_angle,
                    color,
                } => canvas.fill_pie(*cx, *cy, *radius, *start_angle, *sweep_angle, *color),
                DrawCommand::Text { x, y, text, pen } => canvas.draw_text(
                    pen.typeface.as_ref(),
                    text,
                    pen.text_size,
                    (*x, *y),
                    pen.color,
                ),
            }
        }
    }
}
