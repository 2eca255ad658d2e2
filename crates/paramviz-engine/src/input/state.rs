use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{ButtonState, InputEvent, Key, MouseButton};

/// Held keys and mouse buttons.
///
/// Transitions and accumulated deltas are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    pub keys_down: HashSet<Key>,
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies `ev` to the held state and writes its deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::Key { key, state } => match state {
                ButtonState::Pressed => {
                    if self.keys_down.insert(key) {
                        frame.keys_pressed.insert(key);
                    }
                }
                ButtonState::Released => {
                    self.keys_down.remove(&key);
                }
            },

            InputEvent::PointerButton { button, state } => match state {
                ButtonState::Pressed => {
                    self.buttons_down.insert(button);
                }
                ButtonState::Released => {
                    self.buttons_down.remove(&button);
                }
            },

            InputEvent::MouseMotion { dx, dy } => {
                frame.mouse_delta.0 += dx;
                frame.mouse_delta.1 += dy;
            }

            InputEvent::Scroll { lines } => frame.scroll_lines += lines,

            InputEvent::Focused(true) => {}
            InputEvent::Focused(false) => {
                // Releases never arrive for keys held while focus leaves.
                self.keys_down.clear();
                self.buttons_down.clear();
            }
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: ButtonState) -> InputEvent {
        InputEvent::Key { key, state }
    }

    #[test]
    fn repeated_press_records_transition_once() {
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        state.apply_event(&mut frame, key(Key::W, ButtonState::Pressed));
        state.apply_event(&mut frame, key(Key::W, ButtonState::Pressed));

        assert!(state.key_down(Key::W));
        assert!(frame.key_pressed(Key::W));
        assert_eq!(frame.keys_pressed.len(), 1);
    }

    #[test]
    fn release_clears_held_key() {
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        state.apply_event(&mut frame, key(Key::A, ButtonState::Released));
        assert!(!state.key_down(Key::A));

        state.apply_event(&mut frame, key(Key::A, ButtonState::Pressed));
        state.apply_event(&mut frame, key(Key::A, ButtonState::Released));
        assert!(!state.key_down(Key::A));
    }

    #[test]
    fn mouse_motion_and_scroll_accumulate() {
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        state.apply_event(&mut frame, InputEvent::MouseMotion { dx: 2.0, dy: -1.0 });
        state.apply_event(&mut frame, InputEvent::MouseMotion { dx: 3.0, dy: 4.0 });
        state.apply_event(&mut frame, InputEvent::Scroll { lines: 1.0 });
        state.apply_event(&mut frame, InputEvent::Scroll { lines: 0.5 });

        assert_eq!(frame.mouse_delta, (5.0, 3.0));
        assert_eq!(frame.scroll_lines, 1.5);

        frame.clear();
        assert_eq!(frame.mouse_delta, (0.0, 0.0));
        assert_eq!(frame.scroll_lines, 0.0);
    }

    #[test]
    fn focus_loss_releases_everything() {
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        state.apply_event(&mut frame, key(Key::S, ButtonState::Pressed));
        state.apply_event(
            &mut frame,
            InputEvent::PointerButton { button: MouseButton::Right, state: ButtonState::Pressed },
        );
        state.apply_event(&mut frame, InputEvent::Focused(false));

        assert!(!state.key_down(Key::S));
        assert!(!state.button_down(MouseButton::Right));
    }

    #[test]
    fn digit_index() {
        assert_eq!(Key::Digit1.digit_index(), Some(0));
        assert_eq!(Key::Digit4.digit_index(), Some(3));
        assert_eq!(Key::W.digit_index(), None);
    }
}
