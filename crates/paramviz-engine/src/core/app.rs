use super::ctx::{FrameCtx, WindowCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application driven by `window::Runtime`.
pub trait App {
    /// Called once after the window and GPU are ready, before the first frame.
    ///
    /// Errors are fatal: the runtime stops and returns them from `run`.
    fn on_start(&mut self, window: &WindowCtx<'_>, gpu: &crate::device::Gpu<'_>) -> anyhow::Result<()> {
        let _ = (window, gpu);
        Ok(())
    }

    /// Called after the drawable size changed (physical pixels).
    fn on_resize(&mut self, width: u32, height: u32) {
        let _ = (width, height);
    }

    /// Called once per frame: process input, then draw.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
