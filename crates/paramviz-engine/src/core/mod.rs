//! Contract between the runtime loop and the application.
//!
//! The runtime owns the platform loop; the application only sees `App`
//! callbacks and the per-frame `FrameCtx`.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
