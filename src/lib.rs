//! Radial usage charts.
//!
//! Recorded usage intervals from any number of past days are drawn as pie
//! slices on a single 24-hour dial, so the same time of day on different
//! days lands on the same slice. Around the slices sit hour numbers and
//! quarter-hour dots; the center shows the total covered time and a
//! caption.
//!
//! ```no_run
//! use std::sync::Arc;
//! use usage_dial::{
//!     ChartPens, ChartRequest, Color, FontTypeface, MemoryRecordSource, Pen, TextPen, UsageChart,
//! };
//!
//! # fn main() -> Result<(), usage_dial::ChartError> {
//! let now = chrono::Utc::now().timestamp_millis();
//! let source = MemoryRecordSource::new().with_interval(now - 7_200_000, 3_600_000);
//! let face = Arc::new(FontTypeface::from_file("DejaVuSans.ttf")?);
//! let pens = ChartPens {
//!     arc: Pen::new(Color::new(0xd0, 0x40, 0x40)),
//!     dial: Pen::new(Color::new(0xf4, 0xf4, 0xf4)),
//!     text: TextPen::new(Color::new(0x30, 0x30, 0x30), face),
//! };
//! let request = ChartRequest::builder()
//!     .width(400)
//!     .height(400)
//!     .reference(now)
//!     .days(7)
//!     .caption("Last 7 days")
//!     .build();
//! let image = UsageChart::new(source).render(&request, &pens)?;
//! assert_eq!(image.width(), 400);
//! # Ok(())
//! # }
//! ```

// ============================================================================
// MODULES
// ============================================================================

pub mod arcs;
pub mod canvas;
pub mod center_label;
pub mod chart;
pub mod clock_face;
pub mod config;
pub mod error;
pub mod pen;
pub mod records;
pub mod scene;
pub mod time;
pub mod typeface;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use arcs::{arc_for, ArcSpan};
pub use canvas::{Canvas, UsageImage};
pub use chart::{ChartFrame, ChartPens, ChartRequest, UsageChart};
pub use config::ChartLayout;
pub use error::{ChartError, Result};
pub use pen::{Color, Pen, TextPen};
pub use records::{Clock, FixedClock, MemoryRecordSource, RecordQuery, RecordSource, SystemClock, UsageInterval};
pub use scene::{Dial, DrawCommand, Scene};
pub use time::{angle_of, format_duration, TimeWindow, DAY_MS};
pub use typeface::{FontTypeface, TextBounds, Typeface};
