use anyhow::Result;
use clap::Parser;
use log::{error, info, warn};
use std::sync::Arc;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::assets::PendingAssets;
use engine::game_loop::GameLoop;
use engine::input::{Action, InputManager};
use engine::renderer::{FrameBuffer, Renderer};
use game::{CliArgs, GameAssets, GameConfig, GameState};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Critter Escape...");

    let args = CliArgs::parse();
    let config = GameConfig::from_args(&args)?;

    // Nothing starts until every sprite and the level text are in
    let pending = {
        let config = config.clone();
        PendingAssets::spawn(move || GameAssets::load(&config))
    };
    let assets = match pending.wait(config.asset_timeout()) {
        Ok(assets) => assets,
        Err(e) => {
            error!("Asset loading failed: {}", e);
            return Err(e.into());
        }
    };
    info!("Assets loaded from {}", config.assets_root.display());

    let mut state = GameState::new(&config, assets)?;

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Critter Escape")
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.viewport_width,
                config.viewport_height,
            ))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    info!("Window created successfully");

    let mut renderer = pollster::block_on(Renderer::new(
        window.clone(),
        config.viewport_width,
        config.viewport_height,
    ))?;
    let mut frame = FrameBuffer::new(config.viewport_width, config.viewport_height);
    let mut input = InputManager::new(config.viewport_width as f32, config.viewport_height as f32);
    let mut game_loop = GameLoop::new();

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!(
                    "Close requested after {} frames ({} ticks), shutting down...",
                    game_loop.frame_count(),
                    game_loop.tick_count()
                );
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::Resized(physical_size),
                ..
            } => {
                renderer.resize(physical_size);
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                // Key releases are not delivered while unfocused
                input.reset();
            }
            Event::WindowEvent {
                event: WindowEvent::Touch(touch),
                ..
            } => {
                input.process_touch(&touch, renderer.size());
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let controls = input.state_mut();
                if controls.consume_just_pressed(Action::Quit) {
                    info!("Quit requested, shutting down...");
                    elwt.exit();
                    return;
                }
                if controls.consume_just_pressed(Action::Pause) {
                    game_loop.toggle_pause();
                }

                let ticks = game_loop.begin_frame();
                for _ in 0..ticks {
                    state.update(input.state_mut());
                    input.update();
                }
                // Edges seen while paused must not fire on resume
                if game_loop.is_paused() {
                    input.update();
                }

                state.render(
                    &mut frame,
                    game_loop.frame_delta_ms(),
                    game_loop.fps(),
                    game_loop.is_paused(),
                );

                match renderer.present(&frame) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        warn!("Surface lost, reconfiguring");
                        renderer.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        error!("GPU out of memory, shutting down");
                        elwt.exit();
                    }
                    Err(e) => warn!("Frame dropped: {:?}", e),
                }
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
