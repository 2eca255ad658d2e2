use std::path::PathBuf;

/// Compiled-in parameters of the viewer.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Start, step and count for the sampled function graph.
    pub function_start: f32,
    pub function_step: f32,
    pub function_count: usize,

    pub spiral_loop_bound: u32,
    pub spiral_level_of_detail: u32,

    pub diagonal_origin: (f32, f32),
    pub diagonal_stride: (f32, f32),
    pub diagonal_count: usize,

    pub grid_amount: (u32, u32),
    pub grid_cell_size: f32,

    /// Text dump of every generated shape, rewritten on each start.
    pub dump_path: PathBuf,

    pub clear_color: wgpu::Color,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            function_start: 0.0,
            function_step: 3.0,
            function_count: 100,

            // 0.1 rad between vertices.
            spiral_loop_bound: 10,
            spiral_level_of_detail: 10,

            diagonal_origin: (0.0, 0.0),
            diagonal_stride: (1.0, 1.0),
            diagonal_count: 100,

            grid_amount: (10, 10),
            grid_cell_size: 1.0,

            dump_path: PathBuf::from("VertexData.txt"),

            clear_color: wgpu::Color { r: 0.2, g: 0.3, b: 0.3, a: 1.0 },
        }
    }
}
