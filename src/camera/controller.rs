use nalgebra_glm as glm;

use super::{CameraConfig, CameraState};
use crate::input::InputState;

/// Interaction mode, rederived from the current modifier/button snapshot
/// every time the input changes. Modes are never latched by events, so the
/// camera cannot get stuck panning after a button release is missed.
///
/// When both the left and middle buttons are held together with Alt,
/// orbiting wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    #[default]
    Idle,
    Orbiting,
    Panning,
}

impl CameraMode {
    pub fn derive(input: &InputState) -> Self {
        if input.alt_held && input.left_held {
            CameraMode::Orbiting
        } else if input.alt_held && input.middle_held {
            CameraMode::Panning
        } else {
            CameraMode::Idle
        }
    }
}

/// Orbit/pan camera shared by every demo.
///
/// Scroll zooms by shrinking the field of view, Alt+left-drag orbits the
/// eye around the target on a fixed-radius sphere, Alt+middle-drag pans the
/// eye (and the effective look-at point) in the view plane.
pub struct CameraController {
    state: CameraState,
    config: CameraConfig,
    mode: CameraMode,
    last_cursor: Option<(f64, f64)>,
}

impl CameraController {
    pub fn new(config: CameraConfig) -> Self {
        Self {
            state: CameraState::new(&config),
            config,
            mode: CameraMode::Idle,
            last_cursor: None,
        }
    }

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Rederive the interaction mode from the current input snapshot.
    pub fn update_mode(&mut self, input: &InputState) {
        self.mode = CameraMode::derive(input);
    }

    /// Zoom by adjusting the field of view, clamped to the configured
    /// bounds. Never fails, regardless of the delta's magnitude or sign.
    pub fn on_scroll(&mut self, delta_y: f32) {
        let (min, max) = self.config.fov_bounds;
        let fov = self.state.field_of_view - delta_y * self.config.scroll_sensitivity;
        self.state.field_of_view = fov.clamp(min, max);
    }

    /// Feed an absolute cursor position. The very first call after
    /// construction or `reset` only latches the position, so regaining
    /// focus never produces a spurious jump. Pan speed scales with
    /// `delta_time` to stay framerate independent; orbit accumulates raw
    /// drag distance.
    pub fn on_cursor_move(&mut self, x: f64, y: f64, delta_time: f32) {
        let Some((last_x, last_y)) = self.last_cursor else {
            self.last_cursor = Some((x, y));
            return;
        };
        let delta_x = (x - last_x) as f32;
        // Screen Y grows downward, camera up is world +Y.
        let delta_y = (last_y - y) as f32;
        self.last_cursor = Some((x, y));

        match self.mode {
            CameraMode::Panning => self.pan(delta_x, delta_y, delta_time),
            CameraMode::Orbiting => self.orbit(delta_x, delta_y),
            CameraMode::Idle => {}
        }
    }

    /// Translate the eye in the view plane.
    fn pan(&mut self, delta_x: f32, delta_y: f32, delta_time: f32) {
        // Keep "forward" aimed at the origin side the eye currently faces,
        // so panning after orbiting past the origin plane does not walk the
        // look-at point away from the scene. A heuristic, not a general
        // solution.
        self.state.front.z = if self.state.position.z < 0.0 { 1.0 } else { -1.0 };

        let speed = delta_x * delta_time;
        self.state.position += speed * self.state.right;
        let speed = delta_y * delta_time;
        self.state.position += speed * self.state.up;
    }

    /// Accumulate yaw/pitch and recompute the eye position on the orbit
    /// sphere. Yaw is measured from +Z, pitch from the horizontal plane.
    fn orbit(&mut self, delta_x: f32, delta_y: f32) {
        self.state.yaw += delta_x;
        self.state.pitch += delta_y;

        let yaw = self.state.yaw.to_radians();
        let pitch = match self.config.pitch_limit {
            Some(limit) => self.state.pitch.to_radians().clamp(-limit, limit),
            None => self.state.pitch.to_radians(),
        };

        let target = self.state.target;
        let radius = self.state.radius;
        self.state.position.x = target.x + radius * pitch.cos() * yaw.sin();
        self.state.position.y = target.y + radius * pitch.sin();
        self.state.position.z = target.z + radius * pitch.cos() * yaw.cos();
    }

    /// Look-at point for this frame. While panning the target follows the
    /// eye straight ahead; orbiting always looks at the fixed target. The
    /// asymmetry is intentional: pan moves the scene, orbit circles it.
    pub fn view_target(&mut self) -> glm::Vec3 {
        if self.mode == CameraMode::Panning {
            self.state.target = self.state.position + self.state.front;
        }
        self.state.target
    }

    pub fn view_matrix(&mut self) -> glm::Mat4 {
        let eye = self.state.position;
        let center = self.view_target();
        glm::look_at(&eye, &center, &self.state.world_up)
    }

    /// Restore the startup defaults and re-arm the first-move latch.
    pub fn reset(&mut self) {
        self.state.reset(&self.config);
        self.mode = CameraMode::Idle;
        self.last_cursor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn orbiting() -> InputState {
        InputState {
            alt_held: true,
            left_held: true,
            ..InputState::default()
        }
    }

    fn panning() -> InputState {
        InputState {
            alt_held: true,
            middle_held: true,
            ..InputState::default()
        }
    }

    fn controller(config: CameraConfig) -> CameraController {
        CameraController::new(config)
    }

    #[test]
    fn mode_derivation_is_pure_and_orbit_wins_ties() {
        assert_eq!(CameraMode::derive(&InputState::default()), CameraMode::Idle);
        assert_eq!(CameraMode::derive(&orbiting()), CameraMode::Orbiting);
        assert_eq!(CameraMode::derive(&panning()), CameraMode::Panning);

        // Left button without the modifier does nothing.
        let no_alt = InputState {
            left_held: true,
            middle_held: true,
            ..InputState::default()
        };
        assert_eq!(CameraMode::derive(&no_alt), CameraMode::Idle);

        // Both buttons held with the modifier: orbit takes precedence.
        let both = InputState {
            alt_held: true,
            left_held: true,
            middle_held: true,
            ..InputState::default()
        };
        assert_eq!(CameraMode::derive(&both), CameraMode::Orbiting);
    }

    #[test]
    fn scroll_keeps_fov_within_bounds() {
        let mut cam = controller(CameraConfig::default());
        let (min, max) = (1.5, 45.0);

        cam.on_scroll(100.0);
        assert!(cam.state().field_of_view >= min && cam.state().field_of_view <= max);

        // Huge delta clamps to the lower bound instead of going negative.
        cam.on_scroll(10_000.0);
        assert_eq!(cam.state().field_of_view, min);
        assert!(cam.state().field_of_view.is_finite());

        cam.on_scroll(-10_000.0);
        assert_eq!(cam.state().field_of_view, max);

        // Arbitrary alternating sequence stays in range.
        for delta in [3.0, -800.0, 42.0, -1.0, 9_999.0, -9_999.0] {
            cam.on_scroll(delta);
            let fov = cam.state().field_of_view;
            assert!((min..=max).contains(&fov));
        }
    }

    #[test]
    fn scroll_applies_sensitivity() {
        let mut cam = controller(CameraConfig::default());
        cam.on_scroll(100.0);
        assert!((cam.state().field_of_view - 44.0).abs() < EPS);
    }

    #[test]
    fn first_cursor_move_only_latches() {
        let mut cam = controller(CameraConfig::default());
        cam.update_mode(&orbiting());

        let before = cam.state().clone();
        cam.on_cursor_move(320.0, 240.0, 0.016);
        assert_eq!(cam.state().position, before.position);
        assert_eq!(cam.state().yaw, before.yaw);
        assert_eq!(cam.state().pitch, before.pitch);

        // Second move does orbit.
        cam.on_cursor_move(350.0, 240.0, 0.016);
        assert_ne!(cam.state().yaw, before.yaw);

        // Reset re-arms the latch.
        cam.reset();
        cam.update_mode(&orbiting());
        cam.on_cursor_move(10.0, 10.0, 0.016);
        assert_eq!(cam.state().yaw, 0.0);
        assert_eq!(cam.state().pitch, 0.0);
    }

    #[test]
    fn orbit_stays_on_sphere_around_target() {
        let config = CameraConfig {
            pitch_limit: Some(std::f32::consts::FRAC_PI_2 - 0.1),
            ..CameraConfig::default()
        };
        let radius = config.radius;
        let target = config.target;
        let mut cam = controller(config);
        cam.update_mode(&orbiting());

        cam.on_cursor_move(0.0, 0.0, 0.016);
        let drags = [
            (31.0, -12.0),
            (190.0, 45.0),
            (-77.0, 260.0),
            (400.0, -500.0),
            (5.0, 5.0),
        ];
        let mut cursor = (0.0, 0.0);
        for (dx, dy) in drags {
            cursor = (cursor.0 + dx, cursor.1 + dy);
            cam.on_cursor_move(cursor.0, cursor.1, 0.016);
            let distance = glm::length(&(cam.state().position - target));
            assert!(
                (distance - radius).abs() < EPS,
                "expected eye on sphere: |{distance} - {radius}|"
            );
        }
    }

    #[test]
    fn yaw_quarter_turn_moves_eye_to_positive_x() {
        let config = CameraConfig {
            position: glm::vec3(0.0, 0.0, 6.0),
            radius: 6.0,
            ..CameraConfig::default()
        };
        let mut cam = controller(config);
        assert_eq!(cam.state().position, glm::vec3(0.0, 0.0, 6.0));

        cam.update_mode(&orbiting());
        cam.on_cursor_move(0.0, 0.0, 0.016);
        // 90 drag units of yaw, no pitch.
        cam.on_cursor_move(90.0, 0.0, 0.016);

        assert!((cam.state().yaw - 90.0).abs() < EPS);
        assert!((cam.state().position.x - 6.0).abs() < 1e-3);
        assert!(cam.state().position.y.abs() < 1e-3);
        assert!(cam.state().position.z.abs() < 1e-3);
    }

    #[test]
    fn panning_never_touches_orbit_parameters() {
        let mut cam = controller(CameraConfig::default());
        cam.update_mode(&panning());

        cam.on_cursor_move(100.0, 100.0, 0.016);
        let before = cam.state().clone();
        cam.on_cursor_move(140.0, 80.0, 0.016);

        assert_eq!(cam.state().radius, before.radius);
        assert_eq!(cam.state().yaw, before.yaw);
        assert_eq!(cam.state().pitch, before.pitch);
        assert_ne!(cam.state().position, before.position);
    }

    #[test]
    fn panning_carries_the_look_at_point_along() {
        let mut cam = controller(CameraConfig::default());
        cam.update_mode(&panning());

        cam.on_cursor_move(0.0, 0.0, 0.016);
        cam.on_cursor_move(50.0, -30.0, 0.016);

        let expected = cam.state().position + cam.state().front;
        assert_eq!(cam.view_target(), expected);

        // Once the drag ends the target stays where panning left it.
        cam.update_mode(&InputState::default());
        assert_eq!(cam.view_target(), expected);
    }

    #[test]
    fn idle_drags_do_not_move_the_camera() {
        let mut cam = controller(CameraConfig::default());
        cam.on_cursor_move(0.0, 0.0, 0.016);
        let before = cam.state().clone();
        cam.on_cursor_move(500.0, 500.0, 0.016);
        assert_eq!(cam.state().position, before.position);
        assert_eq!(cam.state().yaw, before.yaw);
    }

    #[test]
    fn reset_restores_documented_defaults() {
        let config = CameraConfig {
            position: glm::vec3(0.0, 0.0, 6.0),
            radius: 6.0,
            field_of_view: 45.0,
            fov_bounds: (1.5, 45.0),
            ..CameraConfig::default()
        };
        let mut cam = controller(config.clone());

        cam.update_mode(&orbiting());
        cam.on_cursor_move(0.0, 0.0, 0.016);
        cam.on_cursor_move(123.0, -45.0, 0.016);
        cam.on_scroll(2_000.0);
        cam.reset();

        assert_eq!(cam.state().position, config.position);
        assert_eq!(cam.state().target, config.target);
        assert_eq!(cam.state().field_of_view, config.field_of_view);
        assert_eq!(cam.state().yaw, 0.0);
        assert_eq!(cam.state().pitch, 0.0);
        assert_eq!(cam.mode(), CameraMode::Idle);
    }

    #[test]
    fn pitch_clamp_limits_vertical_orbit() {
        let limit = std::f32::consts::FRAC_PI_2 - 0.1;
        let config = CameraConfig {
            pitch_limit: Some(limit),
            ..CameraConfig::default()
        };
        let radius = config.radius;
        let mut cam = controller(config);
        cam.update_mode(&orbiting());

        cam.on_cursor_move(0.0, 0.0, 0.016);
        // Drag far past the pole; the eye must stay below it.
        cam.on_cursor_move(0.0, -100_000.0, 0.016);

        let max_y = radius * limit.sin();
        assert!(cam.state().position.y <= max_y + EPS);
        let distance = glm::length(&cam.state().position);
        assert!((distance - radius).abs() < EPS);
    }
}
