use std::time::Instant;

use glow::HasContext;
use nalgebra_glm as glm;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

use crate::camera::{CameraConfig, CameraController};
use crate::context::GlContext;
use crate::error::DemoError;
use crate::input::InputState;
use crate::scene::{FrameContext, Scene};

/// Trackpads report scroll in pixels rather than wheel notches; scale them
/// down to roughly one notch per line of travel.
const PIXELS_PER_SCROLL_LINE: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Projection {
    #[default]
    Perspective,
    Orthographic,
}

/// Window and interaction constants baked into each demo binary.
#[derive(Debug, Clone)]
pub struct DemoOptions {
    pub title: &'static str,
    pub size: (u32, u32),
    pub camera: CameraConfig,
    /// Enables the P key switching between perspective and orthographic.
    pub projection_toggle: bool,
    pub wireframe: bool,
    pub clear_color: [f32; 4],
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            title: "Main Window",
            size: (640, 480),
            camera: CameraConfig::default(),
            projection_toggle: false,
            wireframe: false,
            clear_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

type SceneBuilder = Box<dyn FnOnce(&glow::Context) -> Result<Box<dyn Scene>, DemoError>>;

/// Create the window, run the event loop, and drive `build_scene`'s scene
/// with the shared orbit/pan camera until the window closes.
pub fn run<F>(options: DemoOptions, build_scene: F) -> Result<(), DemoError>
where
    F: FnOnce(&glow::Context) -> Result<Box<dyn Scene>, DemoError> + 'static,
{
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut handler = DemoHandler {
        app: None,
        options: Some(options),
        build_scene: Some(Box::new(build_scene)),
        error: None,
    };
    event_loop.run_app(&mut handler)?;

    match handler.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

struct DemoHandler {
    app: Option<DemoApp>,
    options: Option<DemoOptions>,
    build_scene: Option<SceneBuilder>,
    error: Option<DemoError>,
}

impl ApplicationHandler for DemoHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_some() {
            return;
        }
        let (Some(options), Some(build_scene)) = (self.options.take(), self.build_scene.take())
        else {
            return;
        };
        match DemoApp::new(event_loop, options, build_scene) {
            Ok(app) => self.app = Some(app),
            Err(e) => {
                log::error!("failed to start demo: {e:?}");
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(app) = &mut self.app {
            if app.handle_event(&event) {
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(app) = &mut self.app {
            if let Err(e) = app.render() {
                log::error!("render error: {e:?}");
                self.error = Some(e);
                event_loop.exit();
                return;
            }
            app.context.window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(app) = &mut self.app {
            app.scene.destroy(&app.context.gl);
        }
    }
}

struct DemoApp {
    context: GlContext,
    scene: Box<dyn Scene>,
    camera: CameraController,
    input: InputState,
    projection: Projection,
    options: DemoOptions,
    started: Instant,
    last_frame: Instant,
    delta_time: f32,
}

impl DemoApp {
    fn new(
        event_loop: &ActiveEventLoop,
        options: DemoOptions,
        build_scene: SceneBuilder,
    ) -> Result<Self, DemoError> {
        let context = GlContext::new(event_loop, options.title, options.size)?;

        unsafe {
            context.gl.enable(glow::DEPTH_TEST);
            if options.wireframe {
                context.gl.polygon_mode(glow::FRONT_AND_BACK, glow::LINE);
            }
            let [r, g, b, a] = options.clear_color;
            context.gl.clear_color(r, g, b, a);
        }

        let scene = build_scene(&context.gl)?;
        let camera = CameraController::new(options.camera.clone());
        let now = Instant::now();

        Ok(Self {
            context,
            scene,
            camera,
            input: InputState::default(),
            projection: Projection::Perspective,
            options,
            started: now,
            last_frame: now,
            delta_time: 0.0,
        })
    }

    /// Returns true when the event loop should exit.
    fn handle_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CloseRequested => return true,
            WindowEvent::Resized(size) => self.context.resize(*size),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return false;
                }
                match event.physical_key {
                    PhysicalKey::Code(KeyCode::Escape) => return true,
                    PhysicalKey::Code(KeyCode::KeyF) => self.camera.reset(),
                    PhysicalKey::Code(KeyCode::KeyP) => {
                        if self.options.projection_toggle && !event.repeat {
                            self.projection = match self.projection {
                                Projection::Perspective => Projection::Orthographic,
                                Projection::Orthographic => Projection::Perspective,
                            };
                            log::debug!("projection switched to {:?}", self.projection);
                        }
                    }
                    _ => {}
                }
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.input.set_modifiers(modifiers.state());
                self.camera.update_mode(&self.input);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.input
                    .set_button(*button, *state == ElementState::Pressed);
                self.camera.update_mode(&self.input);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.camera
                    .on_cursor_move(position.x, position.y, self.delta_time);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let notches = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_SCROLL_LINE,
                };
                self.camera.on_scroll(notches);
            }
            _ => {}
        }
        false
    }

    fn render(&mut self) -> Result<(), DemoError> {
        let now = Instant::now();
        self.delta_time = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;

        // Modes are a pure function of the input snapshot; rederive once
        // per frame as well as on input changes.
        self.camera.update_mode(&self.input);

        let gl = &self.context.gl;
        unsafe { gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT) };

        let aspect = self.context.aspect_ratio();
        let projection = match self.projection {
            Projection::Perspective => glm::perspective(
                aspect,
                self.camera.state().field_of_view.to_radians(),
                0.1,
                100.0,
            ),
            Projection::Orthographic => glm::ortho(-9.0, 9.0, -9.0, 9.0, 0.1, 50.0),
        };

        let frame = FrameContext {
            view: self.camera.view_matrix(),
            projection,
            camera_position: self.camera.state().position,
            field_of_view: self.camera.state().field_of_view,
            delta_time: self.delta_time,
            elapsed: (now - self.started).as_secs_f32(),
        };

        self.scene.draw(gl, &frame)?;
        self.context.swap_buffers()
    }
}
