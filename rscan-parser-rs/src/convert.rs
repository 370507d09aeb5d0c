use indicatif::ProgressBar;
use writer_common::{buildorder::BuildOrder, scanmesh::ScanMesh, scanpoint::ScanPoint};

use crate::constants::{DEFAULT_SCALE, DEFAULT_STEP_ANGLE_DEG};
use crate::faces::{build_faces, legacy_flipped_lines, FaceWinding};
use crate::scanfile::ScanFile;
use crate::serpentine::{spherical_to_cartesian, ScanGrid};

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("header declares an empty grid ({line_count} lines x {point_count} points)")]
    EmptyGrid { line_count: u8, point_count: u8 },

    #[error("scan is truncated: header declares {expected} samples, file has {found}")]
    Truncated { expected: usize, found: usize },

    #[error("scan holds no samples")]
    NoSamples,
}

#[derive(Clone, Debug)]
pub struct ConvertConfig {
    pub scale: f64,
    pub step_angle_deg: f64,
    pub winding: FaceWinding,
    /// Accept scans that stopped before the last line finished.
    pub allow_partial: bool,
    pub build: bool,
    pub object_name: Option<String>,
}

impl Default for ConvertConfig {
    fn default() -> ConvertConfig {
        ConvertConfig {
            scale: DEFAULT_SCALE,
            step_angle_deg: DEFAULT_STEP_ANGLE_DEG,
            winding: FaceWinding::Consistent,
            allow_partial: false,
            build: false,
            object_name: None,
        }
    }
}

/// One vertex per sample, in file order, so vertex index equals sample index.
pub fn build_vertices(
    grid: &ScanGrid,
    samples: &[u32],
    config: &ConvertConfig,
    progress: &ProgressBar,
) -> Vec<ScanPoint> {
    let mut vertices = Vec::with_capacity(samples.len());
    for (index, &sample) in samples.iter().enumerate() {
        let (line, point) = grid.cell(index);
        let (x, y, z) = spherical_to_cartesian(point, line, sample, config.scale, config.step_angle_deg);
        vertices.push(ScanPoint {
            line: line as u8,
            point: point as u8,
            sample,
            radius: sample as f64 * config.scale,
            x,
            y,
            z,
        });
        progress.inc(1);
    }
    vertices
}

pub fn scan_to_mesh(
    scan: &ScanFile,
    config: &ConvertConfig,
    progress: &ProgressBar,
) -> Result<ScanMesh, ConvertError> {
    let grid = ScanGrid::new(scan.header.line_count, scan.header.point_count);
    if grid.is_empty() {
        return Err(ConvertError::EmptyGrid {
            line_count: grid.line_count,
            point_count: grid.point_count,
        });
    }

    let expected = grid.cell_count();
    let found = scan.samples.len();
    if found == 0 {
        return Err(ConvertError::NoSamples);
    }
    if found < expected {
        if !config.allow_partial {
            return Err(ConvertError::Truncated { expected, found });
        }
        tracing::warn!("partial scan: {} of {} samples, faces cover complete lines only", found, expected);
    } else if found > expected {
        tracing::warn!("ignoring {} samples beyond the declared {} lines", found - expected, grid.line_count);
    }
    let samples = &scan.samples[..found.min(expected)];

    let vertices = build_vertices(&grid, samples, config, progress);

    let complete_lines = samples.len() / grid.point_count as usize;
    if config.winding == FaceWinding::Legacy {
        let flipped = legacy_flipped_lines(complete_lines);
        if !flipped.is_empty() {
            tracing::warn!("legacy winding: faces between lines {:?} and the next are flipped", flipped);
        }
    }
    let faces = build_faces(&grid, complete_lines, config.winding);
    tracing::info!(
        "{} lines x {} points: {} vertices, {} faces",
        grid.line_count,
        grid.point_count,
        vertices.len(),
        faces.len()
    );

    let mut mesh = ScanMesh::new(vertices, faces);
    if let Some(name) = &config.object_name {
        mesh = mesh.with_object_name(name);
    }
    if config.build {
        mesh = mesh.with_build(BuildOrder::for_samples(samples.len()));
    }
    Ok(mesh)
}
