//! Text measurement and rasterization.
//!
//! Labels on the dial are centered on their measured ink bounds rather than
//! on advance widths, so "1" and "23" both sit exactly on their anchor.

use std::fmt;
use std::path::Path;

use rusttype::{point, Font, Scale};

use crate::error::{ChartError, Result};

/// Ink bounds of laid-out text, y growing downwards, relative to the
/// baseline origin the text was laid out at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl TextBounds {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> (f32, f32) {
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    pub fn union(&self, other: &TextBounds) -> TextBounds {
        TextBounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

/// A face that can measure and draw a single line of text.
pub trait Typeface: Send + Sync + fmt::Debug {
    /// Ink bounds of `text` at `size` laid out with its baseline origin at
    /// (0, 0). `None` when nothing would be drawn.
    fn text_bounds(&self, text: &str, size: f32) -> Option<TextBounds>;

    /// Draws `text` with its baseline origin at `origin`, calling `plot` with
    /// each covered pixel and its coverage in `0.0..=1.0`.
    fn rasterize(&self, text: &str, size: f32, origin: (f32, f32), plot: &mut dyn FnMut(i32, i32, f32));
}

/// Baseline origin that puts the center of `bounds` on `anchor`.
pub fn centered_origin(bounds: &TextBounds, anchor: (f32, f32)) -> (f32, f32) {
    let (cx, cy) = bounds.center();
    (anchor.0 - cx, anchor.1 - cy)
}

/// TrueType/OpenType face rendered with rusttype.
pub struct FontTypeface {
    font: Font<'static>,
}

impl FontTypeface {
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let font = Font::try_from_vec(data)
            .ok_or_else(|| ChartError::InvalidConfiguration("unreadable font data".to_string()))?;
        Ok(Self { font })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading font from {}", path.display());
        Self::from_bytes(std::fs::read(path)?)
    }
}

impl fmt::Debug for FontTypeface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontTypeface")
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}

impl Typeface for FontTypeface {
    fn text_bounds(&self, text: &str, size: f32) -> Option<TextBounds> {
        let mut bounds: Option<TextBounds> = None;
        for glyph in self.font.layout(text, Scale::uniform(size), point(0.0, 0.0)) {
            let Some(bb) = glyph.unpositioned().exact_bounding_box() else {
                continue;
            };
            let pos = glyph.position();
            let glyph_bounds = TextBounds::new(
                pos.x + bb.min.x,
                pos.y + bb.min.y,
                pos.x + bb.max.x,
                pos.y + bb.max.y,
            );
            bounds = Some(match bounds {
                Some(b) => b.union(&glyph_bounds),
                None => glyph_bounds,
            });
        }
        bounds
    }

    fn rasterize(&self, text: &str, size: f32, origin: (f32, f32), plot: &mut dyn FnMut(i32, i32, f32)) {
        for glyph in self
            .font
            .layout(text, Scale::uniform(size), point(origin.0, origin.1))
        {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, v| plot(bb.min.x + gx as i32, bb.min.y + gy as i32, v));
            }
        }
    }
}
