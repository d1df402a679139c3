mod controller;
mod state;

pub use controller::{CameraController, CameraMode};
pub use state::{CameraConfig, CameraState};
