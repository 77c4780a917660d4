use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod constants;
mod slide;
mod slideshow;
mod state;
mod texture_loader;
mod ui;

use crate::constants::*;
use crate::slide::Slide;
use crate::slideshow::Slideshow;
use crate::texture_loader::{collect_image_paths, load_texture_with_exif_rotation};
use crate::ui::Layout;

/// Image slideshow with autoplay, swipe navigation and slide indicators.
#[derive(Parser)]
#[command(name = "carousel", version, about)]
struct Args {
    /// Directory containing the images to show
    directory: PathBuf,

    /// Seconds between automatic advances
    #[arg(long, default_value_t = AUTOPLAY_INTERVAL)]
    interval: f32,

    /// Shuffle the images instead of sorting by file name
    #[arg(long)]
    shuffle: bool,

    /// Window width in pixels
    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: i32,

    /// Window height in pixels
    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: i32,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = match args.verbose {
        0 => "carousel=info",
        1 => "carousel=debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // --- Discover Images ---
    let mut image_paths = collect_image_paths(&args.directory)?;
    if args.shuffle {
        image_paths.shuffle(&mut rand::rng());
    }
    info!(
        directory = %args.directory.display(),
        count = image_paths.len(),
        "discovered images"
    );

    // --- Window ---
    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let mut slides: Vec<Slide> = Vec::new();
    for path in &image_paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, path) {
            Ok(texture) => slides.push(Slide::new(texture)),
            Err(e) => {
                // One bad image disables one slide, not the program
                warn!(path = %path.display(), error = %e, "skipping image");
            }
        }
    }

    let mut slideshow = Slideshow::new(slides, args.interval);
    if slideshow.is_empty() {
        info!("no usable images, slideshow stays inert");
    }

    // --- Main Loop ---
    let mut startup_fade = 0.0f32;
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        let layout = Layout::compute(
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
            slideshow.len(),
        );
        let mouse = rl.get_mouse_position();

        slideshow.handle_input(&rl, &layout);
        slideshow.update(dt);
        startup_fade = (startup_fade + dt / STARTUP_FADE_DURATION).min(1.0);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        if slideshow.is_empty() {
            ui::draw_empty_hint(&mut d, &args.directory.display().to_string());
        } else {
            slideshow.draw(&mut d, &layout, mouse);
        }

        // Whole-frame fade-in on launch
        if startup_fade < 1.0 {
            let veil = ((1.0 - startup_fade) * 255.0) as u8;
            d.draw_rectangle(
                0,
                0,
                d.get_screen_width(),
                d.get_screen_height(),
                Color::new(0, 0, 0, veil),
            );
        }
    }

    Ok(())
}
