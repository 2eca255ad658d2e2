use std::path::Path;

use paramviz_geom::{sampler, writer, GeomError, OpenMode, ShapeBatch, Topology, WriteError};

use crate::config::PlotConfig;

/// The plotted scalar function.
pub fn parabola(x: f32) -> f32 {
    x * x - 2.0 * x + 4.0
}

/// Generates every shape the viewer shows, in selection order.
pub fn build_batch(config: &PlotConfig) -> Result<ShapeBatch, GeomError> {
    let graph = writer::sample_from_fn(
        parabola,
        config.function_start,
        config.function_step,
        config.function_count,
    );
    let spiral = sampler::spiral(config.spiral_loop_bound, config.spiral_level_of_detail)?;
    let diagonal = sampler::diagonal_line(
        config.diagonal_origin,
        config.diagonal_stride,
        config.diagonal_count,
    );
    let (amount1, amount2) = config.grid_amount;
    let grid = sampler::grid_surface(
        amount1,
        amount2,
        config.grid_cell_size,
        sampler::reference_height,
    )?;

    let mut batch = ShapeBatch::new();
    batch.push("function graph", Topology::LineStrip, &graph)?;
    batch.push("spiral", Topology::LineStrip, &spiral)?;
    batch.push("diagonal line", Topology::LineStrip, &diagonal)?;
    batch.push("grid surface", Topology::TriangleList, &grid)?;
    Ok(batch)
}

/// Writes every shape to `path`: the first truncates, the rest append.
pub fn dump_batch(path: &Path, batch: &ShapeBatch) -> Result<(), WriteError> {
    for (i, shape) in batch.shapes().iter().enumerate() {
        let range = shape.first as usize..(shape.first + shape.count) as usize;
        let mode = OpenMode::from_append(i > 0);
        writer::write_vertices(path, &batch.vertices()[range], mode)?;
    }
    log::info!("wrote {} vertices to {}", batch.vertices().len(), path.display());
    Ok(())
}
