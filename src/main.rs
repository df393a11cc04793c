use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use clap::Parser;
use pixels::{Pixels, SurfaceTexture};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use usage_dial::{
    ChartPens, ChartRequest, Color, FontTypeface, MemoryRecordSource, Pen, TextPen, TimeWindow,
    UsageChart, UsageImage, UsageInterval, DAY_MS,
};

const MINUTE: i64 = 60_000;

/// Preview a usage chart filled with random sessions.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// TrueType or OpenType font for numbers and labels
    #[arg(long)]
    font: PathBuf,

    #[arg(long, default_value_t = 400)]
    width: u32,

    #[arg(long, default_value_t = 400)]
    height: u32,

    /// Previous days to overlay on the dial
    #[arg(long, default_value_t = 7)]
    days: u32,

    /// Caption below the total; defaults to "Last N days"
    #[arg(long)]
    caption: Option<String>,

    /// Seed for the random sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Write a PNG instead of opening a window
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let now = chrono::Utc::now().timestamp_millis();
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("generating sessions with seed {seed}");

    let window = TimeWindow::last_days(&Local, now, args.days)?;
    let source = random_sessions(&mut StdRng::seed_from_u64(seed), &window, now);
    log::info!("{} sessions over {} days", source.len(), args.days);

    let caption = args.caption.unwrap_or_else(|| match args.days {
        1 => "Last 1 day".to_string(),
        n => format!("Last {n} days"),
    });
    let request = ChartRequest::builder()
        .width(args.width)
        .height(args.height)
        .reference(now)
        .days(args.days)
        .caption(caption.clone())
        .build();
    let pens = ChartPens {
        arc: Pen::new(Color::new(0xd8, 0x4b, 0x3f)),
        dial: Pen::new(Color::new(0xf4, 0xf4, 0xf4)),
        text: TextPen::new(
            Color::new(0x33, 0x33, 0x33),
            Arc::new(FontTypeface::from_file(&args.font)?),
        ),
    };
    let rendered = UsageChart::new(source).render(&request, &pens)?;

    match args.output {
        Some(path) => {
            let buffer = image::RgbaImage::from_raw(rendered.width(), rendered.height(), rendered.into_pixels())
                .ok_or("image buffer does not match its dimensions")?;
            buffer.save(&path)?;
            log::info!("wrote {}", path.display());
            Ok(())
        }
        None => show(&rendered, &caption),
    }
}

/// A handful of sessions per day plus one still running.
fn random_sessions(rng: &mut StdRng, window: &TimeWindow, now: i64) -> MemoryRecordSource {
    let mut source = MemoryRecordSource::new();
    let mut day_start = window.from;
    while day_start < window.to {
        for _ in 0..rng.random_range(3..9) {
            let start = day_start + rng.random_range(0..DAY_MS);
            let duration = rng.random_range(5 * MINUTE..90 * MINUTE);
            if start + duration < now {
                source.push(UsageInterval::new(start, duration));
            }
        }
        day_start += DAY_MS;
    }
    source.set_ongoing(Some(now - rng.random_range(MINUTE..40 * MINUTE)));
    source
}

/// Flattens the chart onto white for display.
fn over_white(image: &UsageImage) -> Vec<u8> {
    let mut out = image.pixels().to_vec();
    for px in out.chunks_exact_mut(4) {
        let a = px[3] as u32;
        for c in &mut px[..3] {
            *c = ((*c as u32 * a + 255 * (255 - a)) / 255) as u8;
        }
        px[3] = 0xff;
    }
    out
}

fn show(image: &UsageImage, title: &str) -> Result<(), Box<dyn Error>> {
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(LogicalSize::new(image.width() as f64, image.height() as f64))
        .with_resizable(false)
        .build(&event_loop)?;
    let window = Arc::new(window);

    let size = window.inner_size();
    let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
    let mut pixels = Pixels::new(image.width(), image.height(), surface_texture)?;
    let frame = over_white(image);

    event_loop.run(move |event, window_target| {
        window_target.set_control_flow(ControlFlow::Wait);
        if let Event::WindowEvent { event, .. } = event {
            match event {
                WindowEvent::CloseRequested => window_target.exit(),
                WindowEvent::Resized(new_size) => {
                    if let Err(e) = pixels.resize_surface(new_size.width, new_size.height) {
                        log::error!("resizing surface: {e}");
                        window_target.exit();
                    }
                }
                WindowEvent::RedrawRequested => {
                    pixels.frame_mut().copy_from_slice(&frame);
                    if let Err(e) = pixels.render() {
                        log::error!("presenting frame: {e}");
                        window_target.exit();
                    }
                }
                _ => {}
            }
        }
    })?;

    Ok(())
}
