use std::sync::Arc;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use quadric_beach::cli::Cli;
use quadric_beach::core::clock::SystemClock;
use quadric_beach::core::input_adapter::KeyboardState;
use quadric_beach::renderer::QuadricRenderer;
use quadric_beach::traits::SceneRenderer;
use quadric_beach::{Scene, SceneConfig};

const FPS_UPDATE_INTERVAL: f32 = 1.0;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

struct App {
    width: u32,
    height: u32,
    window: Option<Arc<Window>>,
    renderer: Option<QuadricRenderer>,
    scene: Scene<SystemClock>,
    keyboard: KeyboardState,
    fps_frames: u32,
    fps_elapsed: f32,
}

impl App {
    fn new(scene: Scene<SystemClock>, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            window: None,
            renderer: None,
            scene,
            keyboard: KeyboardState::new(),
            fps_frames: 0,
            fps_elapsed: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.fps_frames += 1;
        self.fps_elapsed += delta;
        if self.fps_elapsed >= FPS_UPDATE_INTERVAL {
            log::info!(
                "{:.1} fps (t = {:.1}s)",
                self.fps_frames as f32 / self.fps_elapsed,
                self.scene.time()
            );
            self.fps_frames = 0;
            self.fps_elapsed = 0.0;
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        if let Some(renderer) = &mut self.renderer {
            renderer.resize(width, height);
        }
        if let Err(e) = self.scene.resize(width, height) {
            log::warn!("Ignoring resize: {}", e);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Quadric Beach")
                    .with_inner_size(winit::dpi::LogicalSize::new(self.width, self.height)),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match pollster::block_on(QuadricRenderer::new(window.clone())) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("Failed to initialize renderer: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let size = window.inner_size();
            self.window = Some(window);
            self.renderer = Some(renderer);
            self.resize(size.width, size.height);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::RedrawRequested => {
                let Some(renderer) = &mut self.renderer else {
                    return;
                };
                match self.scene.update(&self.keyboard, renderer) {
                    Ok(frame) => self.update_fps(frame.delta),
                    Err(e) => log::error!("Frame failed: {}", e),
                }
            }
            other => self.keyboard.process_event(&other),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };

    if cli.dump_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let scene = Scene::new(config, SystemClock::new())?;
    let event_loop = EventLoop::new()?;
    let mut app = App::new(scene, cli.width, cli.height);

    log::info!("Controls: WASD move, Space/Shift up/down, Q/E turn, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
