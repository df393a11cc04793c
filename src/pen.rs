use std::sync::Arc;

use crate::error::{ChartError, Result};
use crate::typeface::Typeface;

/// RGBA color with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn as_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Fill style for usage slices, the dial background and the inner disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pen {
    pub color: Color,
}

impl Pen {
    pub const fn new(color: Color) -> Self {
        Self { color }
    }
}

/// Text style for hour numbers and center labels.
///
/// Chart renderers derive the size of every label from the layout, so the
/// size carried here only matters when the pen is used on its own.
#[derive(Debug, Clone)]
pub struct TextPen {
    pub color: Color,
    pub typeface: Arc<dyn Typeface>,
    pub text_size: f32,
}

impl TextPen {
    pub fn new(color: Color, typeface: Arc<dyn Typeface>) -> Self {
        Self {
            color,
            typeface,
            text_size: 12.0,
        }
    }

    /// Copy of this pen at another text size.
    pub fn sized(&self, text_size: f32) -> Self {
        Self {
            text_size,
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.text_size.is_finite() || self.text_size < 0.0 {
            return Err(ChartError::InvalidConfiguration(format!(
                "text size must be a non-negative number, got {}",
                self.text_size
            )));
        }
        Ok(())
    }
}
