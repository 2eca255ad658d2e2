/// One acquired swapchain image plus the encoder recording into it.
///
/// Short-lived: the surface texture is presented when the frame is submitted,
/// and no further image can be acquired while it is held.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub color_view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
