use bhaata_phod::config::GameConfig;
use bhaata_phod::geometry::Size;
use bhaata_phod::{Game, GameError, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sdl2::pixels::Color;
use sdl2::video::Window;
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod frontend;

use frontend::{AudioManager, InputSystem, SdlRenderer, TextureStore};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn sdl(e: impl ToString) -> GameError {
    GameError::Sdl(e.to_string())
}

/// Desktop-sized fullscreen window, or a centered window of the configured size.
fn open_window(video: &sdl2::VideoSubsystem, config: &GameConfig) -> Result<Window> {
    let title = config.window.title.as_str();

    let window = if config.window.fullscreen {
        let mode = video.desktop_display_mode(0).map_err(sdl)?;
        video
            .window(title, mode.w as u32, mode.h as u32)
            .fullscreen_desktop()
            .build()
    } else {
        video
            .window(title, config.window.width, config.window.height)
            .position_centered()
            .build()
    };

    window.map_err(sdl)
}

fn run() -> Result<()> {
    let config = GameConfig::load_or_default()?;

    let sdl_context = sdl2::init().map_err(sdl)?;
    let video = sdl_context.video().map_err(sdl)?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG).map_err(sdl)?;

    let window = open_window(&video, &config)?;
    let (width, height) = window.size();
    info!("Window {}x{}", width, height);

    let mut canvas = window
        .into_canvas()
        .accelerated()
        .present_vsync()
        .build()
        .map_err(sdl)?;

    let texture_creator = canvas.texture_creator();
    let textures = TextureStore::load(&texture_creator, &config.assets.directory)?;
    let mut audio = AudioManager::load(&config.assets.directory)?;

    let field = Size::new(width as f32, height as f32);
    let mut game = Game::new(config, textures.asset_table(), field, StdRng::from_entropy());

    let mut event_pump = sdl_context.event_pump().map_err(sdl)?;
    let mut input = InputSystem::new();
    let mut last_frame = Instant::now();

    // Game loop: input -> simulate -> audio -> render
    loop {
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        let snapshot = input.poll(&mut event_pump);
        let output = game.frame(&snapshot, dt);

        for cue in output.cues {
            audio.perform(cue);
        }
        if output.quit {
            break;
        }

        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();
        game.render(&mut SdlRenderer::new(&mut canvas, &textures));
        canvas.present();
    }

    info!("Exiting with score {}", game.score());
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();

    if let Err(e) = run() {
        error!("{}", e);
        return Err(e);
    }
    Ok(())
}
