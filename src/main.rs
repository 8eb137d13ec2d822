use log::LevelFilter;
use rand::thread_rng;
use sdl2::pixels::Color;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

mod audio;
mod collision;
mod config;
mod game;
mod gui;
mod input_system;
mod render;
mod shapes;
mod stats;
mod text;
mod ui;

use audio::SoundBank;
use config::{GameConfig, CONFIG_PATH};
use game::ScreenController;
use input_system::InputState;

const BACKGROUND_COLOR: Color = Color::RGB(10, 10, 25);
const LOG_FILE_NAME: &str = "shape-shooter.log";

/// Where the log file goes: the per-user data directory, else the working directory
fn log_file_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|p| p.join("shape-shooter"))
        .and_then(|dir| std::fs::create_dir_all(&dir).ok().map(|_| dir))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(LOG_FILE_NAME)
}

fn init_logging() {
    let path = log_file_path();
    if let Err(e) = simple_logging::log_to_file(&path, LevelFilter::Info) {
        simple_logging::log_to_stderr(LevelFilter::Info);
        log::warn!("Could not open log file {}: {}", path.display(), e);
    }
}

/// Calculate the window scale so the logical surface fits the monitor
///
/// The surface is large (1920x1080 by default), so unlike pixel-art games the
/// scale is fractional and usually at most 1.
fn calculate_window_scale(video_subsystem: &sdl2::VideoSubsystem, width: u32, height: u32) -> f32 {
    match video_subsystem.desktop_display_mode(0) {
        Ok(display_mode) => {
            // Leave 10% margin for taskbars/decorations
            let usable_w = display_mode.w as f32 * 0.9;
            let usable_h = display_mode.h as f32 * 0.9;

            let scale = (usable_w / width as f32).min(usable_h / height as f32);
            scale.clamp(0.25, 1.0)
        }
        Err(e) => {
            log::warn!("Could not detect monitor size ({}), using 0.5x scale", e);
            0.5
        }
    }
}

fn main() -> Result<(), String> {
    init_logging();
    log::info!("Starting Shape Shooter");

    let config = GameConfig::load_or_default(CONFIG_PATH);

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window_scale = calculate_window_scale(&video_subsystem, config.width, config.height);
    let window_width = (config.width as f32 * window_scale) as u32;
    let window_height = (config.height as f32 * window_scale) as u32;
    log::info!("Window scale: {:.2}x (window: {}x{})", window_scale, window_width, window_height);

    let window = video_subsystem
        .window("Shape Shooter", window_width, window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().accelerated().build().map_err(|e| e.to_string())?;

    // All game coordinates are in the logical surface; SDL scales drawing and mouse events
    canvas.set_logical_size(config.width, config.height).map_err(|e| e.to_string())?;

    let mut event_pump = sdl_context.event_pump()?;

    let sounds = if config.audio_enabled {
        SoundBank::load(&sdl_context, Path::new(&config.sound_dir))
    } else {
        log::info!("Audio disabled by config");
        SoundBank::silent()
    };

    let frame_budget = Duration::from_secs(1) / config.target_fps.max(1);
    let click_guard = Duration::from_millis(config.click_guard_ms);

    let mut input = InputState::new();
    let mut controller = ScreenController::new(config);
    let mut rng = thread_rng();

    // Frame driver: sample input, update the active screen, draw it, pace
    'running: loop {
        let frame_start = Instant::now();

        if input.poll(&mut event_pump) {
            break 'running;
        }
        input.finish_frame_sampling(frame_start);

        if !controller.is_halted() && controller.update(&input, frame_start, &mut rng, &sounds) {
            input.block_clicks(frame_start, click_guard);
        }

        canvas.set_draw_color(BACKGROUND_COLOR);
        canvas.clear();
        controller.render(&mut canvas, &input)?;
        canvas.present();

        if let Some(remaining) = frame_budget.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    log::info!("Window closed on {:?} screen, exiting", controller.screen());
    Ok(())
}
