/// GPU layer settings, fixed at compile time by the binary.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an sRGB swapchain format when the surface offers one, so linear
    /// vertex colors come out with the expected brightness.
    pub prefer_srgb: bool,

    /// Swap behavior. FIFO (vsync) is the only mode every backend must support.
    pub present_mode: wgpu::PresentMode,

    /// Power preference used when picking the adapter.
    pub power_preference: wgpu::PowerPreference,

    /// Limits requested from the device. The plot pipeline needs nothing beyond
    /// the downlevel WebGL2 set.
    pub required_limits: wgpu::Limits,

    /// Hint for how many frames may be queued ahead of presentation.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            power_preference: wgpu::PowerPreference::default(),
            required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
            desired_maximum_frame_latency: 2,
        }
    }
}
