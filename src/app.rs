//! Native application loop
//!
//! One redraw = input, point-mass update, sphere step, render.

use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::camera::Camera;
use crate::error::AppError;
use crate::platform::{FrameClock, InputState};
use crate::renderer::RenderState;
use crate::settings::Settings;
use crate::sim::{PointMass, SphereField};

pub struct App {
    window: Arc<Window>,
    render: RenderState,
    show_fps: bool,
    camera: Camera,
    input: InputState,
    clock: FrameClock,
    field: SphereField,
    point_mass: PointMass,
    frame_count: u32,
    fps_timer: Instant,
}

impl App {
    pub async fn new(window: Arc<Window>, settings: &Settings) -> Result<Self, AppError> {
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window.clone())?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let size = window.inner_size();
        let render = RenderState::new(
            surface,
            &adapter,
            size.width,
            size.height,
            settings.present_mode(),
        )
        .await?;

        let seed = settings.seed.unwrap_or_else(time_seed);
        let field = SphereField::with_seed(seed);
        log::info!(
            "Spawned {} spheres in a {} cube with seed: {}",
            field.bodies.len(),
            field.cube.size,
            seed
        );

        Ok(Self {
            window,
            render,
            show_fps: settings.show_fps,
            camera: Camera::default(),
            input: InputState::default(),
            clock: FrameClock::new(),
            field,
            point_mass: PointMass::default(),
            frame_count: 0,
            fps_timer: Instant::now(),
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Returns false when the loop should stop
    pub fn handle_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                return false;
            }
            WindowEvent::Resized(physical_size) => {
                self.render.resize(physical_size.width, physical_size.height);
            }
            WindowEvent::Focused(false) => {
                self.input.clear_movement();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.input.handle_key_event(event);
                if self.input.quit_requested {
                    log::info!("Escape pressed");
                    return false;
                }
            }
            WindowEvent::RedrawRequested => {
                return self.frame();
            }
            _ => {}
        }
        true
    }

    fn frame(&mut self) -> bool {
        self.camera.apply_movement(self.input.movement);

        let dt = self.clock.tick();

        if self.point_mass.update(dt) {
            log::debug!(
                "Point mass bounced at {:.2} with velocity {:.3}",
                self.point_mass.position,
                self.point_mass.velocity
            );
        }

        let report = self.field.step(dt);
        if report.sphere_swaps > 0 || report.wall_flips > 0 {
            log::trace!(
                "dt={:.4}: {} sphere swaps, {} wall flips",
                dt,
                report.sphere_swaps,
                report.wall_flips
            );
        }

        match self
            .render
            .render(&self.camera, &self.field, self.clock.elapsed())
        {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.render.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
                return false;
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }

        self.frame_count += 1;
        if self.fps_timer.elapsed().as_secs_f32() >= 1.0 {
            if self.show_fps {
                log::info!("FPS: {}", self.frame_count);
            }
            self.frame_count = 0;
            self.fps_timer = Instant::now();
        }

        true
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Seed derived from the wall clock
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

struct AppState {
    settings: Settings,
    app: Option<App>,
    error: Option<AppError>,
}

impl AppState {
    fn init(&self, event_loop: &ActiveEventLoop) -> Result<App, AppError> {
        let window_attributes = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.settings.window_width,
                self.settings.window_height,
            ));
        let window = Arc::new(event_loop.create_window(window_attributes)?);
        pollster::block_on(App::new(window, &self.settings))
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_some() {
            return;
        }

        match self.init(event_loop) {
            Ok(app) => {
                log::info!("Cube Bounce running!");
                self.app = Some(app);
            }
            Err(e) => {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(app) = &mut self.app else { return };

        if window_id != app.window().id() {
            return;
        }

        if !app.handle_event(&event) {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(app) = &self.app {
            app.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // Drops the window and every GPU resource before the loop returns
        self.app = None;
    }
}

/// Open the window and run until it is closed
pub fn run(settings: Settings) -> Result<(), AppError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut state = AppState {
        settings,
        app: None,
        error: None,
    };
    event_loop.run_app(&mut state)?;

    match state.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
