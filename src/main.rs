use std::env;
use std::error::Error;
use std::path::Path;
use std::time::Instant;

use sdl2::{gfx::framerate::FPSManager, pixels::PixelFormatEnum};

use teapot::config::Config;
use teapot::input::InputState;
use teapot::render::Framebuffer;
use teapot::scene::Scene;

const DEFAULT_CONFIG: &str = "scene.json";

fn load_config() -> Result<Config, Box<dyn Error>> {
    let config = match env::args().nth(1) {
        Some(path) => Config::load(&path)?,
        None if Path::new(DEFAULT_CONFIG).exists() => Config::load(DEFAULT_CONFIG)?,
        None => {
            log::warn!("{} not found, using the default scene", DEFAULT_CONFIG);
            Config::default()
        }
    };

    Ok(config)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    let mut scene = Scene::new(&config)?;

    let (width, height) = (config.window.width, config.window.height);
    log::info!("opening {}x{} window", width, height);

    let ctx = sdl2::init()?;
    let video = ctx.video()?;
    let window = video
        .window(&config.window.title, width, height)
        .position_centered()
        .build()?;

    let mut canvas = window.into_canvas().accelerated().present_vsync().build()?;
    let texture_creator = canvas.texture_creator();
    let mut texture = texture_creator.create_texture_streaming(PixelFormatEnum::RGB888, width, height)?;

    let mut fps = FPSManager::new();
    fps.set_framerate(config.window.fps)?;

    let mut framebuffer = Framebuffer::new(width, height);
    let mut events = ctx.event_pump()?;
    let mut last = Instant::now();
    loop {
        let input = InputState::poll(&mut events);
        if input.close_requested {
            break;
        }

        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32();
        last = now;

        scene.update(dt, &input);
        scene.draw(&mut framebuffer);
        log::debug!("frame drawn in {:.3} ms", now.elapsed().as_secs_f64() * 1000.0);

        if input.screenshot {
            match framebuffer.save(&config.screenshot) {
                Ok(()) => log::info!("saved {}", config.screenshot.display()),
                Err(e) => log::warn!("could not save {}: {}", config.screenshot.display(), e),
            }
        }

        texture.update(None, framebuffer.pixels(), framebuffer.pitch())?;
        canvas.clear();
        canvas.copy(&texture, None, None)?;
        canvas.present();

        fps.delay();
    }

    Ok(())
}
