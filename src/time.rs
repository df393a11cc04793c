//! Time-of-day to dial angle mapping, query windows and duration labels.

use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};

use crate::error::{ChartError, Result};

/// Milliseconds in one day.
pub const DAY_MS: i64 = 86_400_000;

/// Degrees covered by one full day on the dial.
pub const DEGREES_PER_DAY: f64 = 360.0;

/// Maps a millisecond offset to degrees on a 24-hour dial.
///
/// The input is not reduced modulo one day: an offset on the
/// third day of a window comes out beyond 720 degrees and lands on the same
/// dial position as the same time of day on the first day once the pie
/// primitive wraps it.
pub fn angle_of(offset_ms: i64) -> f64 {
    offset_ms as f64 * DEGREES_PER_DAY / DAY_MS as f64
}

/// Half-open query range `[from, to)` in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub from: i64,
    pub to: i64,
}

impl TimeWindow {
    pub fn new(from: i64, to: i64) -> Result<Self> {
        if from >= to {
            return Err(ChartError::InvalidConfiguration(format!(
                "empty time window [{from}, {to})"
            )));
        }
        Ok(Self { from, to })
    }

    /// Window covering the day of `reference` and the `days` calendar days
    /// before it, aligned to local day boundaries of `tz`.
    pub fn last_days<Tz: TimeZone>(tz: &Tz, reference: i64, days: u32) -> Result<Self> {
        let back = reference
            .checked_sub(DAY_MS * i64::from(days))
            .ok_or_else(|| out_of_range(reference))?;
        Self::new(start_of_day(tz, back)?, end_of_day(tz, reference)?)
    }

    pub fn len_ms(&self) -> i64 {
        self.to - self.from
    }

    /// True when `[start, start + duration)` intersects the window.
    pub fn overlaps(&self, start: i64, duration: i64) -> bool {
        start < self.to && start.saturating_add(duration) > self.from
    }
}

/// First instant of the local day containing `ms`.
pub fn start_of_day<Tz: TimeZone>(tz: &Tz, ms: i64) -> Result<i64> {
    let date = local_date(tz, ms)?;
    local_midnight(tz, date)
        .map(|dt| dt.timestamp_millis())
        .ok_or_else(|| out_of_range(ms))
}

/// Last millisecond of the local day containing `ms`.
pub fn end_of_day<Tz: TimeZone>(tz: &Tz, ms: i64) -> Result<i64> {
    let next = local_date(tz, ms)?
        .succ_opt()
        .ok_or_else(|| out_of_range(ms))?;
    local_midnight(tz, next)
        .map(|dt| dt.timestamp_millis() - 1)
        .ok_or_else(|| out_of_range(ms))
}

fn local_date<Tz: TimeZone>(tz: &Tz, ms: i64) -> Result<NaiveDate> {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|utc| utc.with_timezone(tz).date_naive())
        .ok_or_else(|| out_of_range(ms))
}

// Midnight can be skipped by a DST transition; the day then starts at the
// first valid local time after it.
fn local_midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Option<DateTime<Tz>> {
    let midnight = date.and_hms_opt(0, 0, 0)?;
    tz.from_local_datetime(&midnight).earliest().or_else(|| {
        tz.from_local_datetime(&(midnight + TimeDelta::hours(1)))
            .earliest()
    })
}

fn out_of_range(ms: i64) -> ChartError {
    ChartError::InvalidConfiguration(format!("timestamp {ms} is outside the calendar range"))
}

/// Short human-readable form of a covered duration, e.g. `"3h 25m"`.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = seconds % 3600 / 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m")
    } else {
        format!("{seconds}s")
    }
}
