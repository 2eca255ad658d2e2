use glam::{Mat4, Vec3};

use paramviz_engine::camera::{Camera, CameraMovement};
use paramviz_engine::core::{App, AppControl, FrameCtx, WindowCtx};
use paramviz_engine::device::Gpu;
use paramviz_engine::input::{InputFrame, InputState, Key, MouseButton};
use paramviz_engine::render::{DrawRequest, Matrices, PlotRenderer};
use paramviz_geom::{Bounds, ShapeBatch, ShapeRange, Topology};

/// Held keys and the camera direction they drive.
const MOVE_KEYS: [(Key, CameraMovement); 6] = [
    (Key::W, CameraMovement::Forward),
    (Key::S, CameraMovement::Backward),
    (Key::A, CameraMovement::Left),
    (Key::D, CameraMovement::Right),
    (Key::E, CameraMovement::Up),
    (Key::Q, CameraMovement::Down),
];

/// Scales and centres `bounds` into the cube `[-1, 1]^3`.
///
/// Degenerate bounds (a single point) are only translated.
pub fn fit_unit_cube(bounds: Option<&Bounds>) -> Mat4 {
    let Some(b) = bounds else { return Mat4::IDENTITY };

    let extent = b.extent();
    let scale = if extent > f32::EPSILON { 2.0 / extent } else { 1.0 };
    Mat4::from_scale(Vec3::splat(scale)) * Mat4::from_translation(-Vec3::from(b.center()))
}

/// Which shape is drawn and how.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub index: usize,
    pub shape_count: usize,
    pub points: bool,
}

impl Selection {
    pub fn new(shape_count: usize) -> Self {
        Self { index: 0, shape_count, points: false }
    }

    /// Applies this frame's key presses. Returns `true` if anything changed.
    pub fn update(&mut self, frame: &InputFrame) -> bool {
        let before = self.clone();

        if let Some(i) = frame.keys_pressed.iter().find_map(|k| k.digit_index()) {
            if i < self.shape_count {
                self.index = i;
            }
        }
        if frame.key_pressed(Key::Tab) && self.shape_count > 0 {
            self.index = (self.index + 1) % self.shape_count;
        }
        if frame.key_pressed(Key::P) {
            self.points = !self.points;
        }

        *self != before
    }

    pub fn topology(&self, shape: &ShapeRange) -> Topology {
        if self.points { Topology::PointList } else { shape.topology }
    }
}

pub struct PlotApp {
    batch: ShapeBatch,
    renderer: PlotRenderer,
    camera: Camera,
    selection: Selection,
    clear_color: wgpu::Color,
}

impl PlotApp {
    pub fn new(batch: ShapeBatch, clear_color: wgpu::Color) -> Self {
        let selection = Selection::new(batch.len());
        Self {
            batch,
            renderer: PlotRenderer::new(),
            camera: Camera::default(),
            selection,
            clear_color,
        }
    }

    fn steer_camera(&mut self, input: &InputState, frame: &InputFrame, dt: f32) {
        for (key, movement) in MOVE_KEYS {
            if input.key_down(key) {
                self.camera.process_keyboard(movement, dt);
            }
        }

        if input.button_down(MouseButton::Right) {
            let (dx, dy) = frame.mouse_delta;
            // Window y grows downward; pitch grows upward.
            self.camera.process_mouse_movement(dx, -dy, true);
        }

        if frame.scroll_lines != 0.0 {
            self.camera.process_mouse_scroll(frame.scroll_lines);
        }
    }

    fn window_title(&self) -> String {
        let name = self
            .batch
            .shape(self.selection.index)
            .map_or("empty", |s| s.name.as_str());
        let mode = if self.selection.points { " [points]" } else { "" };
        format!("paramviz: {name}{mode}")
    }
}

impl App for PlotApp {
    fn on_start(&mut self, window: &WindowCtx<'_>, gpu: &Gpu<'_>) -> anyhow::Result<()> {
        self.renderer.upload(&gpu.render_ctx(), self.batch.flattened());
        window.set_title(&self.window_title());
        log::info!(
            "{} shapes, {} vertices uploaded",
            self.batch.len(),
            self.renderer.vertex_count()
        );
        Ok(())
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        log::info!("framebuffer {width}x{height}");
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input_frame.key_pressed(Key::Escape) {
            return AppControl::Exit;
        }

        if self.selection.update(ctx.input_frame) {
            log::debug!("selection {:?}", self.selection);
            ctx.window.set_title(&self.window_title());
        }
        self.steer_camera(ctx.input, ctx.input_frame, ctx.time.dt);

        let Some(shape) = self.batch.shape(self.selection.index) else {
            return ctx.render(self.clear_color, |_, _| {});
        };

        let request = DrawRequest {
            topology: self.selection.topology(shape),
            vertices: shape.vertices(),
            matrices: Matrices::new(
                self.camera.projection_matrix(ctx.gpu.aspect_ratio()),
                self.camera.view_matrix(),
                fit_unit_cube(shape.bounds.as_ref()),
            ),
        };

        let renderer = &mut self.renderer;
        ctx.render(self.clear_color, |rctx, target| {
            renderer.render(rctx, target, &request);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(frame: &mut InputFrame, key: Key) {
        frame.keys_pressed.insert(key);
    }

    #[test]
    fn fit_maps_bounds_into_unit_cube() {
        let b = Bounds { min: [0.0, 0.0, 0.0], max: [10.0, 4.0, 2.0] };
        let m = fit_unit_cube(Some(&b));

        let lo = m.transform_point3(Vec3::from(b.min));
        let hi = m.transform_point3(Vec3::from(b.max));
        assert!((lo.x + 1.0).abs() < 1e-6);
        assert!((hi.x - 1.0).abs() < 1e-6);
        assert!(lo.cmpge(Vec3::splat(-1.0 - 1e-6)).all());
        assert!(hi.cmple(Vec3::splat(1.0 + 1e-6)).all());
    }

    #[test]
    fn fit_handles_degenerate_bounds() {
        assert_eq!(fit_unit_cube(None), Mat4::IDENTITY);

        let b = Bounds { min: [2.0, 3.0, 4.0], max: [2.0, 3.0, 4.0] };
        let p = fit_unit_cube(Some(&b)).transform_point3(Vec3::new(2.0, 3.0, 4.0));
        assert!(p.length() < 1e-6);
    }

    #[test]
    fn digits_select_and_tab_cycles() {
        let mut sel = Selection::new(4);
        let mut frame = InputFrame::default();

        press(&mut frame, Key::Digit3);
        assert!(sel.update(&frame));
        assert_eq!(sel.index, 2);

        frame.clear();
        press(&mut frame, Key::Digit9);
        assert!(!sel.update(&frame));
        assert_eq!(sel.index, 2);

        frame.clear();
        press(&mut frame, Key::Tab);
        sel.update(&frame);
        sel.update(&frame);
        assert_eq!(sel.index, 0);
    }

    #[test]
    fn point_mode_overrides_topology() {
        let shape = ShapeRange {
            name: "grid".into(),
            topology: Topology::TriangleList,
            first: 0,
            count: 6,
            bounds: None,
        };
        let mut sel = Selection::new(1);
        assert_eq!(sel.topology(&shape), Topology::TriangleList);

        let mut frame = InputFrame::default();
        press(&mut frame, Key::P);
        sel.update(&frame);
        assert_eq!(sel.topology(&shape), Topology::PointList);
        sel.update(&frame);
        assert_eq!(sel.topology(&shape), Topology::TriangleList);
    }

    #[test]
    fn empty_batch_never_panics_on_tab() {
        let mut sel = Selection::new(0);
        let mut frame = InputFrame::default();
        press(&mut frame, Key::Tab);
        assert!(!sel.update(&frame));
    }
}
