use std::collections::HashSet;

use super::types::Key;

/// Input deltas gathered since the previous frame.
///
/// `InputState` answers "is it held"; `InputFrame` answers "what changed".
/// The runtime clears it after every frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Keys that went down this frame; repeats are not included.
    pub keys_pressed: HashSet<Key>,

    /// Accumulated raw mouse motion `(dx, dy)`, +y down.
    pub mouse_delta: (f32, f32),

    /// Accumulated wheel movement in lines.
    pub scroll_lines: f32,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
        self.mouse_delta = (0.0, 0.0);
        self.scroll_lines = 0.0;
    }

    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }
}
