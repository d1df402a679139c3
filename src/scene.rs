use nalgebra_glm as glm;

use crate::error::DemoError;

/// Everything a scene needs from the runner each frame: the camera's view
/// and projection, where the eye is (for specular lighting), and timing.
pub struct FrameContext {
    pub view: glm::Mat4,
    pub projection: glm::Mat4,
    pub camera_position: glm::Vec3,
    pub field_of_view: f32,
    pub delta_time: f32,
    pub elapsed: f32,
}

/// One demo's GPU resources and draw pass. Built with a live GL context,
/// drawn once per frame, destroyed when the window closes.
pub trait Scene {
    fn draw(&mut self, gl: &glow::Context, frame: &FrameContext) -> Result<(), DemoError>;
    fn destroy(&mut self, gl: &glow::Context);
}
