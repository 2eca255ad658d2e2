//! Input subsystem.
//!
//! The public API does not expose winit types; the runtime translates platform
//! events into `InputEvent`s through `platform::winit`.

mod frame;
pub(crate) mod platform;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{ButtonState, InputEvent, Key, MouseButton};
