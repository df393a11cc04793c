use std::sync::Arc;

use chrono::Utc;
use usage_dial::center_label::add_center_label;
use usage_dial::clock_face::add_clock_face;
use usage_dial::{
    ChartError, ChartLayout, ChartPens, ChartRequest, Color, Dial, DrawCommand, FixedClock,
    MemoryRecordSource, Pen, RecordQuery, RecordSource, Scene, SystemClock, TextBounds, TextPen,
    TimeWindow, Typeface, UsageChart, UsageImage, DAY_MS,
};

const HOUR: i64 = 3_600_000;

// 2024-03-14T15:30:00Z
const T: i64 = 1_710_430_200_000;

/// Glyphs as solid `0.5 x 0.7` em blocks on a `0.6` em advance.
#[derive(Debug)]
struct Blocks;

impl Blocks {
    fn boxes(text: &str, size: f32, origin: (f32, f32)) -> Vec<TextBounds> {
        text.chars()
            .enumerate()
            .filter(|(_, c)| !c.is_whitespace())
            .map(|(i, _)| {
                let x = origin.0 + i as f32 * 0.6 * size;
                TextBounds::new(x + 0.05 * size, origin.1 - 0.7 * size, x + 0.55 * size, origin.1)
            })
            .collect()
    }
}

impl Typeface for Blocks {
    fn text_bounds(&self, text: &str, size: f32) -> Option<TextBounds> {
        Self::boxes(text, size, (0.0, 0.0)).into_iter().reduce(|a, b| a.union(&b))
    }

    fn rasterize(&self, text: &str, size: f32, origin: (f32, f32), plot: &mut dyn FnMut(i32, i32, f32)) {
        for b in Self::boxes(text, size, origin) {
            for y in b.min_y.round() as i32..b.max_y.round() as i32 {
                for x in b.min_x.round() as i32..b.max_x.round() as i32 {
                    plot(x, y, 1.0);
                }
            }
        }
    }
}

fn pens() -> ChartPens {
    ChartPens {
        arc: Pen::new(Color::new(0xd0, 0x40, 0x40)),
        dial: Pen::new(Color::new(0xf0, 0xf0, 0xf0)),
        text: TextPen::new(Color::new(0x30, 0x30, 0x30), Arc::new(Blocks)),
    }
}

fn request(days: u32, caption: &str) -> ChartRequest {
    ChartRequest::builder()
        .width(200)
        .height(200)
        .reference(T)
        .days(days)
        .caption(caption)
        .build()
}

fn pie_angles(scene: &Scene) -> Vec<(f64, f64)> {
    scene
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Pie {
                start_angle,
                sweep_angle,
                ..
            } => Some((*start_angle, *sweep_angle)),
            _ => None,
        })
        .collect()
}

#[test]
fn one_hour_session_scenario() {
    let source = MemoryRecordSource::new().with_interval(T - 7_200_000, 3_600_000);
    let chart = UsageChart::new(source).with_clock(FixedClock(T));

    let frame = chart.compose_in(&Utc, &request(1, "Last 1 day"), &pens()).unwrap();
    assert_eq!(frame.total_seconds, 3600);
    assert_eq!(frame.summary, "1h 0m");
    let arcs = pie_angles(&frame.scene);
    assert_eq!(arcs.len(), 1);
    assert!((arcs[0].1 - 15.0).abs() < 1e-9);

    let image = chart.render_in(&Utc, &request(1, "Last 1 day"), &pens()).unwrap();
    // Halfway along the slice (13:30 to 14:30 is 210 degrees from 12
    // o'clock), well outside the inner disc.
    let angle = (210.0_f64 - 90.0).to_radians();
    let (x, y) = (100.0 + 65.0 * angle.cos(), 100.0 + 65.0 * angle.sin());
    assert_eq!(image.pixel(x as u32, y as u32), Some([0xd0, 0x40, 0x40, 0xff]));
    // The same radius at 6 o'clock shows the dial.
    assert_eq!(image.pixel(100, 165), Some([0xf0, 0xf0, 0xf0, 0xff]));
}

#[test]
fn empty_source_renders_only_dial_face_and_center() {
    let chart = UsageChart::new(MemoryRecordSource::new()).with_clock(FixedClock(T));
    let request = request(7, "Last 7 days");
    let pens = pens();

    let frame = chart.compose_in(&Utc, &request, &pens).unwrap();
    assert_eq!(frame.total_seconds, 0);
    assert_eq!(frame.arcs().count(), 0);
    let image = chart.render_in(&Utc, &request, &pens).unwrap();

    let layout = ChartLayout::default();
    let dial = Dial::new(200, 200);
    let mut scene = Scene::new();
    scene.add_command(DrawCommand::Disc {
        cx: dial.cx,
        cy: dial.cy,
        radius: dial.radius,
        color: pens.dial.color,
    });
    add_clock_face(&mut scene, &dial, &layout, &pens.text);
    add_center_label(
        &mut scene,
        (dial.cx, dial.cy),
        dial.radius * layout.inner_radius,
        &layout,
        &pens.dial,
        &pens.text,
        "0s",
        "Last 7 days",
    );
    let mut expected = UsageImage::new(200, 200).unwrap();
    scene.render(&mut expected.canvas());

    assert_eq!(image, expected);
}

#[test]
fn same_hour_on_different_days_shares_a_slice() {
    let window = TimeWindow::last_days(&Utc, T, 7).unwrap();
    let source = MemoryRecordSource::new()
        .with_interval(window.from + 8 * HOUR, HOUR)
        .with_interval(window.from + 5 * DAY_MS + 8 * HOUR, HOUR);
    let chart = UsageChart::new(source).with_clock(FixedClock(T));

    let frame = chart.compose_in(&Utc, &request(7, "Last 7 days"), &pens()).unwrap();
    assert_eq!(frame.window, window);
    assert_eq!(frame.total_seconds, 7200);
    let arcs = pie_angles(&frame.scene);
    assert_eq!(arcs.len(), 2);
    let diff = (arcs[1].0 - arcs[0].0).rem_euclid(360.0);
    assert!(diff < 1e-6 || 360.0 - diff < 1e-6);

    // Two opaque slices at the same spot render like one.
    let single = UsageChart::new(MemoryRecordSource::new().with_interval(window.from + 8 * HOUR, HOUR))
        .with_clock(FixedClock(T));
    let overlaid = chart.render_in(&Utc, &request(7, "Last 7 days"), &pens()).unwrap();
    let alone = single.render_in(&Utc, &request(7, "Last 7 days"), &pens()).unwrap();
    let angle = (8.5_f64 * 15.0 - 90.0).to_radians();
    let (x, y) = ((100.0 + 70.0 * angle.cos()) as u32, (100.0 + 70.0 * angle.sin()) as u32);
    assert_eq!(overlaid.pixel(x, y), alone.pixel(x, y));
    assert_eq!(overlaid.pixel(x, y), Some([0xd0, 0x40, 0x40, 0xff]));
}

#[test]
fn ongoing_session_against_the_system_clock() {
    let now = chrono::Utc::now().timestamp_millis();
    let source = MemoryRecordSource::new().with_ongoing(now - 1_800_000);
    let chart = UsageChart::new(source).with_clock(SystemClock);
    let request = ChartRequest::builder()
        .width(120)
        .height(120)
        .reference(now)
        .days(1)
        .caption("Last 1 day")
        .build();

    let frame = chart.compose_in(&Utc, &request, &pens()).unwrap();
    assert!((1800..=1801).contains(&frame.total_seconds), "{}", frame.total_seconds);
    assert_eq!(frame.arcs().count(), 1);
}

#[test]
fn degenerate_size_allocates_nothing() {
    let chart = UsageChart::new(MemoryRecordSource::new());
    for (width, height) in [(0, 200), (200, 0)] {
        let request = ChartRequest::builder()
            .width(width)
            .height(height)
            .reference(T)
            .caption("")
            .build();
        let err = chart.render_in(&Utc, &request, &pens()).unwrap_err();
        assert!(matches!(err, ChartError::InvalidGeometry { .. }), "{err}");
    }
}

#[derive(Debug, thiserror::Error)]
#[error("records unavailable")]
struct Unavailable;

struct Offline;

impl RecordSource for Offline {
    type Error = Unavailable;

    fn query_intervals(&self, _window: &TimeWindow) -> Result<RecordQuery, Unavailable> {
        Err(Unavailable)
    }
}

#[test]
fn record_source_failure_aborts_the_render() {
    let chart = UsageChart::new(Offline).with_clock(FixedClock(T));
    let err = chart.render_in(&Utc, &request(3, "Last 3 days"), &pens()).unwrap_err();
    assert!(matches!(err, ChartError::RecordSource(_)));
    assert_eq!(err.to_string(), "record source failed: records unavailable");
}
