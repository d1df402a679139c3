use std::num::NonZeroU32;

use glow::HasContext;
use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{ContextApi, ContextAttributesBuilder, PossiblyCurrentContext, Version};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use crate::error::DemoError;

/// Window plus a current OpenGL 3.3 core context and its glow wrapper.
pub struct GlContext {
    pub window: Window,
    pub gl: glow::Context,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
}

impl GlContext {
    pub fn new(
        event_loop: &ActiveEventLoop,
        title: &str,
        size: (u32, u32),
    ) -> Result<Self, DemoError> {
        let window_attrs = Window::default_attributes()
            .with_title(title)
            .with_inner_size(LogicalSize::new(size.0 as f64, size.1 as f64));

        let template = ConfigTemplateBuilder::new().with_depth_size(24);
        let display_builder = DisplayBuilder::new().with_window_attributes(Some(window_attrs));

        let (window, gl_config) = display_builder
            .build(event_loop, template, pick_config)
            .map_err(|e| DemoError::new("gl-display").with_arg("msg", e))?;
        let window = window.ok_or_else(|| DemoError::new("window-create"))?;

        let raw_window_handle = window.window_handle()?.as_raw();
        let context_attrs = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .build(Some(raw_window_handle));

        let gl_display = gl_config.display();
        let not_current = unsafe { gl_display.create_context(&gl_config, &context_attrs)? };

        let surface_attrs = window.build_surface_attributes(Default::default())?;
        let surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attrs)? };
        let context = not_current.make_current(&surface)?;

        // Vsync; failure here is harmless, the loop just runs uncapped.
        if let Err(e) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN)) {
            log::warn!("vsync unavailable: {e}");
        }

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|s| gl_display.get_proc_address(s))
        };
        log::info!(
            "OpenGL context ready: {}",
            unsafe { gl.get_parameter_string(glow::VERSION) }
        );

        Ok(Self {
            window,
            gl,
            surface,
            context,
        })
    }

    /// Resize the swapchain and viewport together, as the demos do on every
    /// framebuffer-size change. Zero-sized (minimized) windows are skipped.
    pub fn resize(&self, size: PhysicalSize<u32>) {
        let (Some(width), Some(height)) = (
            NonZeroU32::new(size.width),
            NonZeroU32::new(size.height),
        ) else {
            return;
        };
        self.surface.resize(&self.context, width, height);
        unsafe {
            self.gl
                .viewport(0, 0, width.get() as i32, height.get() as i32);
        }
    }

    pub fn aspect_ratio(&self) -> f32 {
        let size = self.window.inner_size();
        size.width as f32 / size.height.max(1) as f32
    }

    pub fn swap_buffers(&self) -> Result<(), DemoError> {
        self.surface.swap_buffers(&self.context)?;
        Ok(())
    }
}

fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    // Prefer the config with the most multisampling, like the glutin
    // examples do; any 24-bit depth config works for these scenes.
    configs
        .reduce(|best, next| {
            if next.num_samples() > best.num_samples() {
                next
            } else {
                best
            }
        })
        .expect("no suitable GL config found")
}
