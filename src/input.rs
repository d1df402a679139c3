use winit::event::MouseButton;
use winit::keyboard::ModifiersState;

/// Snapshot of the modifier keys and mouse buttons the demos care about.
///
/// Events only flip the named flags; what the camera does with them is
/// rederived from the whole snapshot each time it changes, so there is no
/// per-keycode array to index out of range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub alt_held: bool,
    pub shift_held: bool,
    pub control_held: bool,
    pub left_held: bool,
    pub middle_held: bool,
    pub right_held: bool,
}

impl InputState {
    pub fn set_button(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => self.left_held = pressed,
            MouseButton::Middle => self.middle_held = pressed,
            MouseButton::Right => self.right_held = pressed,
            _ => {}
        }
    }

    pub fn set_modifiers(&mut self, modifiers: ModifiersState) {
        self.alt_held = modifiers.alt_key();
        self.shift_held = modifiers.shift_key();
        self.control_held = modifiers.control_key();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_track_press_and_release() {
        let mut input = InputState::default();
        input.set_button(MouseButton::Left, true);
        input.set_button(MouseButton::Middle, true);
        assert!(input.left_held);
        assert!(input.middle_held);

        input.set_button(MouseButton::Left, false);
        assert!(!input.left_held);
        assert!(input.middle_held);

        // Extra buttons are ignored rather than indexed.
        input.set_button(MouseButton::Other(7), true);
        assert_eq!(
            input,
            InputState {
                middle_held: true,
                ..InputState::default()
            }
        );
    }

    #[test]
    fn modifiers_replace_the_whole_set() {
        let mut input = InputState::default();
        input.set_modifiers(ModifiersState::ALT | ModifiersState::SHIFT);
        assert!(input.alt_held);
        assert!(input.shift_held);
        assert!(!input.control_held);

        input.set_modifiers(ModifiersState::empty());
        assert!(!input.alt_held);
        assert!(!input.shift_held);
    }
}
