//! Usage intervals drawn as pie slices on the dial.

use crate::error::{ChartError, Result};
use crate::pen::Pen;
use crate::records::{Clock, RecordSource, UsageInterval};
use crate::scene::{Dial, DrawCommand, Scene};
use crate::time::{angle_of, TimeWindow};

/// Rotation that puts offset zero at 12 o'clock instead of 3 o'clock.
pub const TWELVE_OCLOCK: f64 = -90.0;

/// Angular extent of one interval, in degrees.
///
/// `start_angle` is not reduced modulo 360; intervals on later days of a
/// window start past a full turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpan {
    pub start_angle: f64,
    pub sweep_angle: f64,
}

/// Slice for an interval starting `start` ms into a window opening at `from`.
pub fn arc_for(from: i64, start: i64, duration: i64) -> ArcSpan {
    ArcSpan {
        start_angle: angle_of(start - from) + TWELVE_OCLOCK,
        sweep_angle: angle_of(duration),
    }
}

/// Queries `source` for `window`, adds one pie slice per interval plus one
/// for the ongoing session, and returns the covered time in seconds.
pub fn add_record_arcs<S, C>(
    scene: &mut Scene,
    source: &S,
    clock: &C,
    window: &TimeWindow,
    dial: &Dial,
    pen: &Pen,
) -> Result<u64>
where
    S: RecordSource + ?Sized,
    C: Clock + ?Sized,
{
    let query = source
        .query_intervals(window)
        .map_err(|e| ChartError::RecordSource(Box::new(e)))?;

    let mut total_ms: i64 = 0;
    let mut add_pie = |interval: UsageInterval| {
        let duration = if interval.duration < 0 {
            log::warn!(
                "clamping negative duration {} of interval at {}",
                interval.duration,
                interval.start
            );
            0
        } else {
            interval.duration
        };
        total_ms = total_ms.saturating_add(duration);
        let arc = arc_for(window.from, interval.start, duration);
        log::trace!(
            "arc at {:.2} deg sweeping {:.2} deg",
            arc.start_angle,
            arc.sweep_angle
        );
        scene.add_command(DrawCommand::Pie {
            cx: dial.cx,
            cy: dial.cy,
            radius: dial.radius,
            start_angle: arc.start_angle,
            sweep_angle: arc.sweep_angle,
            color: pen.color,
        });
    };

    let count = query.intervals.len();
    for interval in query.intervals {
        add_pie(interval);
    }
    if let Some(start) = query.ongoing {
        let now = clock.now_ms();
        add_pie(UsageInterval::new(start, now - start));
    }

    let seconds = (total_ms / 1000) as u64;
    log::debug!(
        "drew {} intervals{} covering {}s",
        count,
        if query.ongoing.is_some() { " and an ongoing session" } else { "" },
        seconds
    );
    Ok(seconds)
}
