//! Usage records as seen by the chart: completed intervals, at most one
//! ongoing session, and the clock used to measure it.

use std::convert::Infallible;

use crate::time::TimeWindow;

/// One completed session, in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageInterval {
    pub start: i64,
    pub duration: i64,
}

impl UsageInterval {
    pub const fn new(start: i64, duration: i64) -> Self {
        Self { start, duration }
    }

    pub fn end(&self) -> i64 {
        self.start.saturating_add(self.duration)
    }
}

/// Result of querying a record source for one window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordQuery {
    pub intervals: Vec<UsageInterval>,
    /// Start of the open session overlapping the window, if any.
    pub ongoing: Option<i64>,
}

/// Store that yields the intervals intersecting a window.
///
/// Implementations must return every interval with `start < window.to` and
/// `start + duration > window.from`. Order does not matter.
pub trait RecordSource {
    type Error: std::error::Error + Send + Sync + 'static;

    fn query_intervals(&self, window: &TimeWindow) -> Result<RecordQuery, Self::Error>;
}

impl<S: RecordSource + ?Sized> RecordSource for &S {
    type Error = S::Error;

    fn query_intervals(&self, window: &TimeWindow) -> Result<RecordQuery, Self::Error> {
        (**self).query_intervals(window)
    }
}

/// Record source backed by a plain vector.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordSource {
    intervals: Vec<UsageInterval>,
    ongoing: Option<i64>,
}

impl MemoryRecordSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interval(mut self, start: i64, duration: i64) -> Self {
        self.push(UsageInterval::new(start, duration));
        self
    }

    pub fn with_ongoing(mut self, start: i64) -> Self {
        self.ongoing = Some(start);
        self
    }

    pub fn push(&mut self, interval: UsageInterval) {
        self.intervals.push(interval);
    }

    pub fn set_ongoing(&mut self, start: Option<i64>) {
        self.ongoing = start;
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

impl RecordSource for MemoryRecordSource {
    type Error = Infallible;

    fn query_intervals(&self, window: &TimeWindow) -> Result<RecordQuery, Infallible> {
        let intervals = self
            .intervals
            .iter()
            .filter(|i| window.overlaps(i.start, i.duration))
            .copied()
            .collect();
        let ongoing = self.ongoing.filter(|&start| start < window.to);
        Ok(RecordQuery { intervals, ongoing })
    }
}

/// Wall-clock source, used only to size the ongoing session.
pub trait Clock {
    fn now_ms(&self) -> i64;
}

/// Current system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Clock frozen at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}
