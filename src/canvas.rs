// ============================================================================
// OUTPUT IMAGE
// ============================================================================

use crate::error::{ChartError, Result};
use crate::pen::Color;
use crate::typeface::Typeface;

/// RGBA8 pixel buffer with straight alpha, row-major, starting transparent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl UsageImage {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ChartError::InvalidGeometry { width, height });
        }
        let len = width as usize * height as usize * 4;
        Ok(Self {
            width,
            height,
            pixels: vec![0; len],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let mut px = [0; 4];
        px.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(px)
    }

    pub fn canvas(&mut self) -> Canvas<'_> {
        Canvas::new(&mut self.pixels, self.width as usize, self.height as usize)
    }
}

// ============================================================================
// DRAWING PRIMITIVES
// ============================================================================

pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: usize, height: usize) -> Self {
        debug_assert_eq!(frame.len(), width * height * 4);
        Self {
            frame,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&color.as_array());
        }
    }

    /// Source-over blend of `color` scaled by `coverage` onto one pixel.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let src_a = color.a as f32 / 255.0 * coverage.clamp(0.0, 1.0);
        if src_a <= 0.0 {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 4;
        let dst = &mut self.frame[idx..idx + 4];
        let dst_a = dst[3] as f32 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);
        let src = [color.r, color.g, color.b];
        for (channel, &s) in dst.iter_mut().zip(src.iter()) {
            let value = (s as f32 * src_a + *channel as f32 * dst_a * (1.0 - src_a)) / out_a;
            *channel = value.round().clamp(0.0, 255.0) as u8;
        }
        dst[3] = (out_a * 255.0).round() as u8;
    }

    /// Filled anti-aliased disc.
    pub fn fill_disc(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        self.fill_radial(cx, cy, radius, color, |_| true);
    }

    /// Filled pie slice. Angles are in degrees, 0 at 3 o'clock, clockwise.
    ///
    /// `start_angle` may lie outside `0..360`; it is reduced modulo 360 so
    /// starts one or more days apart land on the same slice.
    pub fn fill_pie(&mut self, cx: f32, cy: f32, radius: f32, start_angle: f64, sweep_angle: f64, color: Color) {
        if !(sweep_angle > 0.0) {
            return;
        }
        if sweep_angle >= 360.0 {
            self.fill_disc(cx, cy, radius, color);
            return;
        }
        let start = start_angle.rem_euclid(360.0);
        self.fill_radial(cx, cy, radius, color, |angle| {
            (angle - start).rem_euclid(360.0) <= sweep_angle
        });
    }

    fn fill_radial(&mut self, cx: f32, cy: f32, radius: f32, color: Color, inside: impl Fn(f64) -> bool) {
        if !(radius > 0.0) {
            return;
        }
        let min_x = (cx - radius - 1.0).floor().max(0.0) as i32;
        let max_x = (cx + radius + 1.0).ceil().min(self.width as f32) as i32;
        let min_y = (cy - radius - 1.0).floor().max(0.0) as i32;
        let max_y = (cy + radius + 1.0).ceil().min(self.height as f32) as i32;
        for y in min_y..max_y {
            for x in min_x..max_x {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                let dist = (dx * dx + dy * dy).sqrt();
                let aa = (radius - dist + 0.5).clamp(0.0, 1.0);
                if aa <= 0.0 {
                    continue;
                }
                let angle = (dy as f64).atan2(dx as f64).to_degrees().rem_euclid(360.0);
                if inside(angle) {
                    self.blend_pixel(x, y, color, aa);
                }
            }
        }
    }

    /// Draws `text` with its baseline origin at `origin`.
    pub fn draw_text(&mut self, typeface: &dyn Typeface, text: &str, size: f32, origin: (f32, f32), color: Color) {
        typeface.rasterize(text, size, origin, &mut |x, y, v| {
            self.blend_pixel(x, y, color, v);
        });
    }
}
