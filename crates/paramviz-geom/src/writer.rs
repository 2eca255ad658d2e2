//! Vertex writer: sampling, text dumps and GPU buffer packing.
//!
//! Dump format is one vertex per line, `x y z r g b`, no header. Values use
//! Rust's shortest round-trip `f32` formatting so a dump reads back exactly.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::WriteError;
use crate::sampler;
use crate::vertex::{Vertex, FLOATS_PER_VERTEX};

/// How [`write_vertices`] opens its target file.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OpenMode {
    /// Create the file, discarding previous content.
    Truncate,
    /// Create the file if missing and write after existing content.
    Append,
}

impl OpenMode {
    /// Maps the C-style "append" flag.
    #[inline]
    pub fn from_append(append: bool) -> Self {
        if append { Self::Append } else { Self::Truncate }
    }
}

/// Evaluates `f` over `count` evenly spaced samples starting at `start`.
///
/// Same contract as [`sampler::sample_function`]: `f` is only called on
/// `start + i * step` for `i in 0..count`.
pub fn sample_from_fn<F>(f: F, start: f32, step: f32, count: usize) -> Vec<Vertex>
where
    F: Fn(f32) -> f32,
{
    sampler::sample_function(f, start, step, count)
}

/// Writes `vertices` to `path`, one `x y z r g b` line each.
pub fn write_vertices(
    path: impl AsRef<Path>,
    vertices: &[Vertex],
    mode: OpenMode,
) -> Result<(), WriteError> {
    let path = path.as_ref();

    let mut options = OpenOptions::new();
    match mode {
        OpenMode::Truncate => options.write(true).create(true).truncate(true),
        OpenMode::Append => options.append(true).create(true),
    };

    let file = options.open(path).map_err(|source| WriteError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let write_err = |source: std::io::Error| WriteError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut out = BufWriter::new(file);
    for v in vertices {
        writeln!(out, "{}", format_vertex(v)).map_err(write_err)?;
    }
    out.flush().map_err(write_err)?;

    log::debug!("wrote {} vertices to {} ({mode:?})", vertices.len(), path.display());
    Ok(())
}

/// Formats one dump line (without the trailing newline).
pub fn format_vertex(v: &Vertex) -> String {
    let [x, y, z] = v.position;
    let [r, g, b] = v.color;
    format!("{x} {y} {z} {r} {g} {b}")
}

/// Reads a dump written by [`write_vertices`]. Blank lines are skipped.
pub fn read_vertices(path: impl AsRef<Path>) -> Result<Vec<Vertex>, WriteError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| WriteError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut vertices = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| WriteError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let vertex = parse_vertex(&line).map_err(|message| WriteError::Parse {
            path: path.to_path_buf(),
            line: idx + 1,
            message,
        })?;
        vertices.push(vertex);
    }

    Ok(vertices)
}

fn parse_vertex(line: &str) -> Result<Vertex, String> {
    let mut values = [0.0f32; FLOATS_PER_VERTEX];
    let mut fields = line.split_whitespace();

    for (slot, value) in values.iter_mut().enumerate() {
        let field = fields
            .next()
            .ok_or_else(|| format!("expected {FLOATS_PER_VERTEX} values, found {slot}"))?;
        *value = field
            .parse()
            .map_err(|e| format!("bad value {field:?}: {e}"))?;
    }

    if fields.next().is_some() {
        return Err(format!("more than {FLOATS_PER_VERTEX} values"));
    }

    Ok(bytemuck::cast(values))
}

/// Views `vertices` as the interleaved float buffer uploaded to the GPU.
///
/// This is a reinterpretation of the same memory, not a copy: six floats per
/// vertex, position then color.
#[inline]
pub fn flatten(vertices: &[Vertex]) -> &[f32] {
    bytemuck::cast_slice(vertices)
}

/// Regroups a flattened buffer into vertices, six floats each.
pub fn unflatten(floats: &[f32]) -> Result<Vec<Vertex>, WriteError> {
    if floats.len() % FLOATS_PER_VERTEX != 0 {
        return Err(WriteError::RaggedBuffer(floats.len()));
    }

    Ok(floats
        .chunks_exact(FLOATS_PER_VERTEX)
        .map(|c| Vertex::new([c[0], c[1], c[2]], [c[3], c[4], c[5]]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::{grid_surface, reference_height, spiral};
    use crate::vertex::{COLOR_OFFSET, POSITION_OFFSET, RED, WHITE};
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn temp_path(tag: &str) -> PathBuf {
        static NEXT: AtomicUsize = AtomicUsize::new(0);
        let n = NEXT.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!("paramviz-{tag}-{}-{n}.txt", std::process::id()))
    }

    fn sample_set() -> Vec<Vertex> {
        vec![
            Vertex::new([0.0, 4.0, 0.0], WHITE),
            Vertex::new([0.1, -2.5, 1e-7], RED),
            Vertex::new([3.0, 7.0, 123456.79], [0.25, 0.5, 0.75]),
        ]
    }

    // ── flatten ───────────────────────────────────────────────────────────

    #[test]
    fn flatten_has_six_floats_per_vertex() {
        let verts = spiral(4, 4).unwrap();
        assert_eq!(flatten(&verts).len(), 6 * verts.len());
        assert!(flatten(&[]).is_empty());
    }

    #[test]
    fn flatten_layout_is_position_then_color() {
        let floats = flatten(&sample_set()).to_vec();
        assert_eq!(&floats[POSITION_OFFSET..POSITION_OFFSET + 3], &[0.0, 4.0, 0.0]);
        assert_eq!(&floats[COLOR_OFFSET..COLOR_OFFSET + 3], &[1.0, 1.0, 1.0]);
        assert_eq!(&floats[6 + COLOR_OFFSET..6 + COLOR_OFFSET + 3], &[1.0, 0.0, 0.0]);
    }

    #[test]
    fn unflatten_restores_sequence() {
        let verts = grid_surface(3, 2, 0.5, reference_height).unwrap();
        assert_eq!(unflatten(flatten(&verts)).unwrap(), verts);
    }

    #[test]
    fn unflatten_rejects_ragged_buffer() {
        assert!(matches!(unflatten(&[0.0; 7]), Err(WriteError::RaggedBuffer(7))));
    }

    // ── sample_from_fn ────────────────────────────────────────────────────

    #[test]
    fn sample_from_fn_stays_inside_domain() {
        let (start, step, count) = (1.5f32, 0.5f32, 9usize);
        let end = start + (count - 1) as f32 * step;
        let out = sample_from_fn(
            |x| {
                assert!(x >= start && x <= end, "evaluated outside domain at {x}");
                x
            },
            start,
            step,
            count,
        );
        assert_eq!(out.len(), count);
    }

    // ── text dump ─────────────────────────────────────────────────────────

    #[test]
    fn format_vertex_is_space_separated() {
        let v = Vertex::new([3.0, 7.0, 0.0], [1.0, 0.5, 0.0]);
        assert_eq!(format_vertex(&v), "3 7 0 1 0.5 0");
    }

    #[test]
    fn truncate_then_append_concatenates() {
        let path = temp_path("append");
        let a = sample_set();
        let b = spiral(2, 3).unwrap();

        write_vertices(&path, &a, OpenMode::Truncate).unwrap();
        write_vertices(&path, &b, OpenMode::Append).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), a.len() + b.len());
        assert_eq!(lines[0], format_vertex(&a[0]));
        assert_eq!(lines[a.len()], format_vertex(&b[0]));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn truncate_discards_previous_content() {
        let path = temp_path("truncate");
        write_vertices(&path, &spiral(5, 5).unwrap(), OpenMode::Truncate).unwrap();
        write_vertices(&path, &sample_set(), OpenMode::from_append(false)).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 3);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn dump_reads_back_exactly() {
        let path = temp_path("roundtrip");
        let verts = sample_set();
        write_vertices(&path, &verts, OpenMode::Truncate).unwrap();
        assert_eq!(read_vertices(&path).unwrap(), verts);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn open_failure_is_reported() {
        let path = temp_path("missing-dir").join("nested").join("dump.txt");
        let err = write_vertices(&path, &sample_set(), OpenMode::Append).unwrap_err();
        assert!(matches!(err, WriteError::Open { .. }));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn write_failure_is_reported() {
        // Opens fine; every write fails with ENOSPC.
        let err = write_vertices("/dev/full", &sample_set(), OpenMode::Append).unwrap_err();
        match err {
            WriteError::Write { path, source } => {
                assert_eq!(path, PathBuf::from("/dev/full"));
                assert_eq!(source.raw_os_error(), Some(28));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_line_reports_line_number() {
        let path = temp_path("malformed");
        std::fs::write(&path, "1 2 3 1 1 1\n\n1 2 x 1 1 1\n").unwrap();
        match read_vertices(&path) {
            Err(WriteError::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("unexpected result: {other:?}"),
        }
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn short_line_is_rejected() {
        assert!(parse_vertex("1 2 3").is_err());
        assert!(parse_vertex("1 2 3 4 5 6 7").is_err());
        assert_eq!(
            parse_vertex("1 2 3 0 0 1").unwrap(),
            Vertex::new([1.0, 2.0, 3.0], [0.0, 0.0, 1.0])
        );
    }
}
