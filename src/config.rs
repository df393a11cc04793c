use bon::Builder;

use crate::error::{ChartError, Result};

/// Hour labels around the dial.
pub const HOURS: usize = 24;

/// Tick dots per hour.
pub const TICKS_PER_HOUR: usize = 4;

/// Proportions of the chart, relative to the outer dial radius unless noted.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct ChartLayout {
    /// Ring the hour numbers are centered on.
    #[builder(default = 0.85)]
    pub number_radius: f32,
    /// Ring the tick dots are centered on.
    #[builder(default = 0.95)]
    pub tick_radius: f32,
    /// Disc holding the center labels.
    #[builder(default = 0.45)]
    pub inner_radius: f32,
    /// Radius of the on-the-hour tick dots.
    #[builder(default = 0.01)]
    pub major_tick_size: f32,
    /// Quarter-hour dot radius as a fraction of the hour dot radius.
    #[builder(default = 0.5)]
    pub minor_tick_scale: f32,
    /// Text size of the hour numbers.
    #[builder(default = 0.095)]
    pub number_size: f32,
    /// Summary text size, relative to the inner radius.
    #[builder(default = 0.3)]
    pub summary_size: f32,
    /// Caption text size, relative to the inner radius.
    #[builder(default = 0.2)]
    pub caption_size: f32,
    /// Factor applied to the caption height when splitting the inner disc
    /// between summary and caption.
    #[builder(default = 1.75)]
    pub caption_weight: f32,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ChartLayout {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("number_radius", self.number_radius),
            ("tick_radius", self.tick_radius),
            ("inner_radius", self.inner_radius),
            ("major_tick_size", self.major_tick_size),
            ("minor_tick_scale", self.minor_tick_scale),
            ("number_size", self.number_size),
            ("summary_size", self.summary_size),
            ("caption_size", self.caption_size),
            ("caption_weight", self.caption_weight),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfiguration(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }
}
