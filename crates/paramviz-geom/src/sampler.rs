//! Function generators.
//!
//! Every generator is a pure function: deterministic for its inputs, no I/O,
//! no shared state, and a freshly allocated `Vec<Vertex>` per call.

use std::f32::consts::PI;

use crate::error::GeomError;
use crate::vertex::{Vertex, RED, WHITE};

/// Total z extent of a spiral, independent of its sample count.
pub const SPIRAL_HEIGHT: f32 = 6.0 * PI;

/// Samples `f` at `x = start + i * step` for `i in 0..count`.
///
/// Produces the 2D graph `(x, f(x), 0)` in white. `count == 0` yields an empty
/// sequence and `f` is never called.
pub fn sample_function<F>(f: F, start: f32, step: f32, count: usize) -> Vec<Vertex>
where
    F: Fn(f32) -> f32,
{
    let vertices: Vec<Vertex> = (0..count)
        .map(|i| {
            let x = start + i as f32 * step;
            Vertex::new([x, f(x), 0.0], WHITE)
        })
        .collect();

    log::debug!("sampled function: {} vertices from x={start} step={step}", vertices.len());
    vertices
}

/// Samples a helix around the z axis.
///
/// Emits `loop_bound * level_of_detail + 1` white vertices. Vertex `i` sits at
/// angle `i / level_of_detail` on the unit circle, and z rises linearly from
/// `0` to [`SPIRAL_HEIGHT`] over the whole sequence.
pub fn spiral(loop_bound: u32, level_of_detail: u32) -> Result<Vec<Vertex>, GeomError> {
    if level_of_detail == 0 {
        return Err(GeomError::ZeroLevelOfDetail);
    }

    let lod = level_of_detail as f32;
    let last = loop_bound as usize * level_of_detail as usize;

    let vertices: Vec<Vertex> = (0..=last)
        .map(|i| {
            let t = i as f32 / lod;
            let z = if last == 0 {
                0.0
            } else {
                SPIRAL_HEIGHT * i as f32 / last as f32
            };
            Vertex::new([t.cos(), t.sin(), z], WHITE)
        })
        .collect();

    log::debug!("sampled spiral: {} vertices (lod {level_of_detail})", vertices.len());
    Ok(vertices)
}

/// Reference height function for [`grid_surface`]: the plane `z = x + y`.
#[inline]
pub fn reference_height(x: f32, y: f32) -> f32 {
    x + y
}

/// Tessellates a height field over `[0, amount1) × [0, amount2)` grid cells.
///
/// Each cell becomes two independent triangles, so six red vertices per cell
/// and nothing is shared or indexed. Corner `(i, j)` is placed at
/// `(i * cell_size, j * cell_size, height(x, y))`.
///
/// Winding for the cell at `(x, y)`:
/// - A: `(x, y)`, `(x, y+1)`, `(x+1, y)`
/// - B: `(x, y+1)`, `(x+1, y)`, `(x+1, y+1)`
pub fn grid_surface<H>(
    amount1: u32,
    amount2: u32,
    cell_size: f32,
    height: H,
) -> Result<Vec<Vertex>, GeomError>
where
    H: Fn(f32, f32) -> f32,
{
    if !cell_size.is_finite() || cell_size <= 0.0 {
        return Err(GeomError::InvalidCellSize(cell_size));
    }

    let corner = |i: u32, j: u32| {
        let x = i as f32 * cell_size;
        let y = j as f32 * cell_size;
        Vertex::new([x, y, height(x, y)], RED)
    };

    let mut vertices = Vec::with_capacity(6 * amount1 as usize * amount2 as usize);
    for i in 0..amount1 {
        for j in 0..amount2 {
            vertices.extend([
                corner(i, j),
                corner(i, j + 1),
                corner(i + 1, j),
                corner(i, j + 1),
                corner(i + 1, j),
                corner(i + 1, j + 1),
            ]);
        }
    }

    log::debug!("sampled grid {amount1}x{amount2}: {} vertices", vertices.len());
    Ok(vertices)
}

/// Walks a straight line through the `z = x + y` plane.
///
/// Vertex `i` is at `origin + stride * i` in x/y, white.
pub fn diagonal_line(origin: (f32, f32), stride: (f32, f32), count: usize) -> Vec<Vertex> {
    (0..count)
        .map(|i| {
            let x = origin.0 + stride.0 * i as f32;
            let y = origin.1 + stride.1 * i as f32;
            Vertex::new([x, y, x + y], WHITE)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn parabola(x: f32) -> f32 {
        x * x - 2.0 * x + 4.0
    }

    // ── sample_function ───────────────────────────────────────────────────

    #[test]
    fn sample_function_length_matches_count() {
        for n in [0usize, 1, 7, 100] {
            assert_eq!(sample_function(parabola, 0.0, 1.0, n).len(), n);
        }
    }

    #[test]
    fn sample_function_zero_count_is_empty_and_never_evaluates() {
        let out = sample_function(|_| panic!("evaluated"), 0.0, 1.0, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn sample_function_x_follows_start_and_step() {
        let out = sample_function(parabola, -2.5, 0.25, 40);
        for (i, v) in out.iter().enumerate() {
            assert!((v.x() - (-2.5 + i as f32 * 0.25)).abs() < EPS);
            assert_eq!(v.z(), 0.0);
            assert_eq!(v.color, WHITE);
        }
    }

    #[test]
    fn sample_function_parabola_first_samples() {
        let out = sample_function(parabola, 0.0, 3.0, 100);
        assert_eq!(out.len(), 100);
        assert_eq!(&out[0].position[..2], &[0.0, 4.0]);
        assert_eq!(&out[1].position[..2], &[3.0, 7.0]);
    }

    // ── spiral ────────────────────────────────────────────────────────────

    #[test]
    fn spiral_length() {
        assert_eq!(spiral(10, 10).unwrap().len(), 101);
        assert_eq!(spiral(3, 7).unwrap().len(), 22);
        assert_eq!(spiral(0, 5).unwrap().len(), 1);
    }

    #[test]
    fn spiral_points_lie_on_unit_circle() {
        for v in spiral(12, 8).unwrap() {
            let r2 = v.x() * v.x() + v.y() * v.y();
            assert!((r2 - 1.0).abs() < 1e-4, "r^2 = {r2}");
        }
    }

    #[test]
    fn spiral_z_is_monotonic_and_spans_height() {
        let out = spiral(10, 10).unwrap();
        for pair in out.windows(2) {
            assert!(pair[1].z() >= pair[0].z());
        }
        assert_eq!(out[0].z(), 0.0);
        assert!((out[out.len() - 1].z() - SPIRAL_HEIGHT).abs() < 1e-4);
    }

    #[test]
    fn spiral_single_vertex_sits_at_origin_height() {
        let out = spiral(0, 4).unwrap();
        assert_eq!(out[0].position, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn spiral_rejects_zero_level_of_detail() {
        assert_eq!(spiral(10, 0), Err(GeomError::ZeroLevelOfDetail));
    }

    // ── grid_surface ──────────────────────────────────────────────────────

    #[test]
    fn grid_length_is_six_per_cell() {
        assert_eq!(grid_surface(4, 3, 1.0, reference_height).unwrap().len(), 72);
        assert_eq!(grid_surface(1, 1, 0.5, reference_height).unwrap().len(), 6);
    }

    #[test]
    fn grid_zero_extent_is_empty() {
        assert!(grid_surface(0, 5, 1.0, reference_height).unwrap().is_empty());
        assert!(grid_surface(5, 0, 1.0, reference_height).unwrap().is_empty());
    }

    #[test]
    fn grid_reference_height_is_x_plus_y() {
        for v in grid_surface(5, 6, 0.5, reference_height).unwrap() {
            assert_eq!(v.z(), v.x() + v.y());
            assert_eq!(v.color, RED);
        }
    }

    #[test]
    fn grid_cell_winding() {
        let out = grid_surface(1, 1, 2.0, |_, _| 0.0).unwrap();
        let xy: Vec<[f32; 2]> = out.iter().map(|v| [v.x(), v.y()]).collect();
        assert_eq!(
            xy,
            vec![
                [0.0, 0.0],
                [0.0, 2.0],
                [2.0, 0.0],
                [0.0, 2.0],
                [2.0, 0.0],
                [2.0, 2.0],
            ]
        );
    }

    #[test]
    fn grid_uses_custom_height() {
        let out = grid_surface(2, 2, 1.0, |x, y| x * y).unwrap();
        assert!(out.iter().all(|v| v.z() == v.x() * v.y()));
    }

    #[test]
    fn grid_rejects_bad_cell_size() {
        assert_eq!(
            grid_surface(2, 2, 0.0, reference_height),
            Err(GeomError::InvalidCellSize(0.0))
        );
        assert!(grid_surface(2, 2, -1.0, reference_height).is_err());
        assert!(grid_surface(2, 2, f32::NAN, reference_height).is_err());
    }

    // ── diagonal_line ─────────────────────────────────────────────────────

    #[test]
    fn diagonal_line_z_is_x_plus_y() {
        let out = diagonal_line((0.0, 0.0), (1.0, 1.0), 100);
        assert_eq!(out.len(), 100);
        assert_eq!(out[3].position, [3.0, 3.0, 6.0]);
        assert!(out.iter().all(|v| v.z() == v.x() + v.y()));
    }
}
