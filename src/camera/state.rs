use nalgebra_glm as glm;

/// Per-demo camera constants. Each demo bakes in its own radius, zoom
/// bounds and pitch policy; everything else starts from the same defaults.
#[derive(Debug, Clone)]
pub struct CameraConfig {
    pub position: glm::Vec3,
    pub target: glm::Vec3,
    pub radius: f32,
    pub field_of_view: f32,
    /// Inclusive `[min, max]` degrees the scroll wheel may zoom to.
    pub fov_bounds: (f32, f32),
    pub scroll_sensitivity: f32,
    /// Pitch clamp in radians, applied symmetrically around the horizon.
    /// `None` leaves pitch unclamped; dragging past ±90° then flips the
    /// view (gimbal behavior), which the demos accept.
    pub pitch_limit: Option<f32>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: glm::vec3(0.0, 0.0, 3.0),
            target: glm::vec3(0.0, 0.0, 0.0),
            radius: 3.0,
            field_of_view: 45.0,
            fov_bounds: (1.5, 45.0),
            scroll_sensitivity: 0.01,
            pitch_limit: None,
        }
    }
}

/// Camera state with position and orientation.
///
/// `yaw` and `pitch` accumulate raw drag distance in degrees; the eye
/// position is recomputed from them whenever the camera orbits, never
/// written incrementally.
#[derive(Debug, Clone)]
pub struct CameraState {
    pub position: glm::Vec3,
    pub target: glm::Vec3,
    pub world_up: glm::Vec3,
    /// Forward direction, only consulted while panning to carry the
    /// look-at point along with the eye.
    pub front: glm::Vec3,
    pub right: glm::Vec3,
    pub up: glm::Vec3,
    pub field_of_view: f32,
    pub radius: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl CameraState {
    pub fn new(config: &CameraConfig) -> Self {
        let world_up = glm::vec3(0.0, 1.0, 0.0);
        let direction = glm::normalize(&(config.position - config.target));
        let right = glm::normalize(&glm::cross(&world_up, &direction));
        let up = glm::normalize(&glm::cross(&direction, &right));
        Self {
            position: config.position,
            target: config.target,
            world_up,
            front: glm::vec3(0.0, 0.0, -1.0),
            right,
            up,
            field_of_view: config.field_of_view,
            radius: config.radius,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    pub fn reset(&mut self, config: &CameraConfig) {
        *self = Self::new(config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basis_vectors_are_orthonormal_for_default_config() {
        let state = CameraState::new(&CameraConfig::default());
        assert!((glm::length(&state.right) - 1.0).abs() < 1e-6);
        assert!((glm::length(&state.up) - 1.0).abs() < 1e-6);
        assert!(glm::dot(&state.right, &state.up).abs() < 1e-6);
        assert!(glm::dot(&state.right, &state.world_up).abs() < 1e-6);
    }

    #[test]
    fn reset_restores_startup_defaults() {
        let config = CameraConfig::default();
        let mut state = CameraState::new(&config);
        state.position = glm::vec3(4.0, 5.0, 6.0);
        state.yaw = 123.0;
        state.pitch = -42.0;
        state.field_of_view = 2.0;
        state.reset(&config);
        assert_eq!(state.position, config.position);
        assert_eq!(state.target, config.target);
        assert_eq!(state.field_of_view, config.field_of_view);
        assert_eq!(state.yaw, 0.0);
        assert_eq!(state.pitch, 0.0);
    }
}
