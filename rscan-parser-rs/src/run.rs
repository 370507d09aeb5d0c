use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Error};
use indicatif::ProgressBar;
use writer_common::meshwriter::{CsvWriter, MeshWriter, ObjWriter, PcdWriter, PlyWriter, ProgressBarExt};

use crate::convert::{scan_to_mesh, ConvertConfig};
use crate::scanfile::ScanFile;
use crate::{Args, OutType};

pub fn output_path(args: &Args) -> Result<PathBuf, Error> {
    let input_file_path = Path::new(&args.input);
    let stem = input_file_path
        .file_stem()
        .with_context(|| format!("input has no file name: {}", args.input))?;
    let dir = match &args.out_dir {
        Some(dir) => PathBuf::from(dir),
        None => match input_file_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        },
    };
    Ok(dir.join(format!("{}.{}", stem.to_string_lossy(), args.out_type.extension())))
}

fn create_writer(out_type: OutType, path: &Path) -> Result<Box<dyn MeshWriter>, Error> {
    let writer: Box<dyn MeshWriter> = match out_type {
        OutType::Obj => Box::new(ObjWriter::create(path)?),
        OutType::Ply => Box::new(PlyWriter::create(path)?),
        OutType::Csv => Box::new(CsvWriter::create(path)?),
        OutType::Pcd => Box::new(PcdWriter::create(path)?),
    };
    Ok(writer)
}

/// Converts the scan named in `args` and returns the path written.
pub fn run(args: Args) -> Result<PathBuf, Error> {
    let time_start = Instant::now();
    let scan = ScanFile::read(Path::new(&args.input))?;
    tracing::info!(
        "{}: {} lines x {} points, {} samples",
        args.input,
        scan.header.line_count,
        scan.header.point_count,
        scan.samples.len()
    );

    let config = ConvertConfig {
        scale: args.scale,
        step_angle_deg: args.step_angle_deg,
        winding: args.winding,
        allow_partial: args.allow_partial,
        build: args.build,
        object_name: args.object_name.clone(),
    };
    let consumed = scan.samples.len().min(scan.expected_samples());
    let progress_bar = if args.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_sample_progress_bar(consumed as u64)
    };
    let mesh = scan_to_mesh(&scan, &config, &progress_bar)
        .with_context(|| format!("cannot convert {}", args.input))?;
    progress_bar.finish();

    let output = output_path(&args)?;
    let mut writer = create_writer(args.out_type, &output)?;
    writer.write_mesh(&mesh)?;
    writer.finalize()?;

    let duration = time_start.elapsed();
    tracing::info!("{} samples have been processed in {:?}, wrote {}", mesh.vertex_count(), duration, output.display());
    Ok(output)
}
