//! Standalone OpenGL teaching demos sharing one orbit/pan camera.
//!
//! Each binary under `src/bin/` uploads a few hardcoded shapes, compiles
//! inline GLSL, and hands a [`scene::Scene`] to [`app::run`]. The runner
//! owns the window, the frame clock, and the camera: Alt+left-drag orbits,
//! Alt+middle-drag pans, scroll zooms, F resets.

pub mod app;
pub mod camera;
pub mod context;
pub mod error;
pub mod geometry;
pub mod input;
pub mod mesh;
pub mod scene;
pub mod shader;
pub mod texture;

pub use app::{DemoOptions, Projection, run};
pub use camera::{CameraConfig, CameraController, CameraMode, CameraState};
pub use error::DemoError;
pub use input::InputState;
pub use mesh::{Mesh, VertexAttribute};
pub use scene::{FrameContext, Scene};
pub use shader::ShaderProgram;
pub use texture::Texture2d;
