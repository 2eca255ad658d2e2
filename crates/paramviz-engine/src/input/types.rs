/// Keys the viewer reacts to.
///
/// Anything else arrives as `Key::Other`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Tab,

    A, D, E, P, Q, S, W,

    Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    Other,
}

impl Key {
    /// Zero-based index of a digit key (`Digit1` is 0), if this is one.
    pub fn digit_index(self) -> Option<usize> {
        const DIGITS: [Key; 9] = [
            Key::Digit1, Key::Digit2, Key::Digit3, Key::Digit4, Key::Digit5,
            Key::Digit6, Key::Digit7, Key::Digit8, Key::Digit9,
        ];
        DIGITS.iter().position(|&d| d == self)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Press/release state shared by keys and mouse buttons.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    /// OS key repeats arrive as further `Pressed` events for a held key.
    Key { key: Key, state: ButtonState },

    PointerButton {
        button: MouseButton,
        state: ButtonState,
    },

    /// Raw, unaccelerated mouse motion. Keeps reporting when the cursor hits
    /// the window edge, which is what mouse-look wants.
    MouseMotion { dx: f32, dy: f32 },

    /// Wheel movement in lines; positive is away from the user.
    Scroll { lines: f32 },

    Focused(bool),
}
