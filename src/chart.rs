//! The complete usage chart: dial, usage slices, clock face and center labels.

use bon::Builder;
use chrono::{Local, TimeZone};

use crate::arcs::add_record_arcs;
use crate::canvas::UsageImage;
use crate::center_label::add_center_label;
use crate::clock_face::add_clock_face;
use crate::config::ChartLayout;
use crate::error::{ChartError, Result};
use crate::pen::{Pen, TextPen};
use crate::records::{Clock, RecordSource, SystemClock};
use crate::scene::{Dial, DrawCommand, Scene};
use crate::time::{format_duration, TimeWindow};

/// What to draw: image size, the reference instant and how many previous
/// days to overlay.
#[derive(Debug, Clone, Builder)]
pub struct ChartRequest {
    pub width: u32,
    pub height: u32,
    /// Epoch milliseconds; the window ends with the local day containing it.
    pub reference: i64,
    #[builder(default = 7)]
    pub days: u32,
    /// Day-range caption, e.g. "Last 7 days".
    #[builder(into)]
    pub caption: String,
}

/// Styles for the three layers of the chart.
#[derive(Debug, Clone)]
pub struct ChartPens {
    pub arc: Pen,
    pub dial: Pen,
    pub text: TextPen,
}

/// A composed but not yet rasterized chart.
#[derive(Debug, Clone)]
pub struct ChartFrame {
    pub scene: Scene,
    pub window: TimeWindow,
    pub total_seconds: u64,
    pub summary: String,
}

impl ChartFrame {
    /// Usage slices in drawing order.
    pub fn arcs(&self) -> impl Iterator<Item = &DrawCommand> {
        self.scene
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Pie { .. }))
    }
}

/// Renders usage recorded in `source` onto a 24-hour dial.
pub struct UsageChart<S, C = SystemClock> {
    source: S,
    clock: C,
    layout: ChartLayout,
    format_duration: fn(u64) -> String,
}

impl<S: RecordSource> UsageChart<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            clock: SystemClock,
            layout: ChartLayout::default(),
            format_duration,
        }
    }
}

impl<S: RecordSource, C: Clock> UsageChart<S, C> {
    pub fn with_clock<C2: Clock>(self, clock: C2) -> UsageChart<S, C2> {
        UsageChart {
            source: self.source,
            clock,
            layout: self.layout,
            format_duration: self.format_duration,
        }
    }

    pub fn with_layout(mut self, layout: ChartLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Replaces the formatter used for the summary label.
    pub fn with_duration_format(mut self, format: fn(u64) -> String) -> Self {
        self.format_duration = format;
        self
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Renders with day boundaries in the local time zone.
    pub fn render(&self, request: &ChartRequest, pens: &ChartPens) -> Result<UsageImage> {
        self.render_in(&Local, request, pens)
    }

    /// Renders with day boundaries in `tz`.
    pub fn render_in<Tz: TimeZone>(
        &self,
        tz: &Tz,
        request: &ChartRequest,
        pens: &ChartPens,
    ) -> Result<UsageImage> {
        let frame = self.compose_in(tz, request, pens)?;
        let mut image = UsageImage::new(request.width, request.height)?;
        frame.scene.render(&mut image.canvas());
        Ok(image)
    }

    /// Builds the scene without rasterizing it.
    pub fn compose_in<Tz: TimeZone>(
        &self,
        tz: &Tz,
        request: &ChartRequest,
        pens: &ChartPens,
    ) -> Result<ChartFrame> {
        if request.width == 0 || request.height == 0 {
            return Err(ChartError::InvalidGeometry {
                width: request.width,
                height: request.height,
            });
        }
        self.layout.validate()?;
        pens.text.validate()?;

        let dial = Dial::new(request.width, request.height);
        let window = TimeWindow::last_days(tz, request.reference, request.days)?;
        log::debug!(
            "composing {}x{} chart over [{}, {}) ({} days back)",
            request.width,
            request.height,
            window.from,
            window.to,
            request.days
        );

        let mut scene = Scene::new();
        scene.add_command(DrawCommand::Disc {
            cx: dial.cx,
            cy: dial.cy,
            radius: dial.radius,
            color: pens.dial.color,
        });
        let total_seconds =
            add_record_arcs(&mut scene, &self.source, &self.clock, &window, &dial, &pens.arc)?;
        add_clock_face(&mut scene, &dial, &self.layout, &pens.text);

        let summary = (self.format_duration)(total_seconds);
        add_center_label(
            &mut scene,
            (dial.cx, dial.cy),
            dial.radius * self.layout.inner_radius,
            &self.layout,
            &pens.dial,
            &pens.text,
            &summary,
            &request.caption,
        );

        Ok(ChartFrame {
            scene,
            window,
            total_seconds,
            summary,
        })
    }

    /// Builds the scene with day boundaries in the local time zone.
    pub fn compose(&self, request: &ChartRequest, pens: &ChartPens) -> Result<ChartFrame> {
        self.compose_in(&Local, request, pens)
    }
}
