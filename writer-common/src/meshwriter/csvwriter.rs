use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Error};

use crate::{meshwriter::{ensure_parent_dir, MeshWriter}, scanmesh::ScanMesh, scanpoint::ScanPoint};

/// Writes the vertices as a point cloud, one CSV row per sample. Faces are dropped.
pub struct CsvWriter<W: Write> {
    out: W,
}

impl CsvWriter<BufWriter<File>> {
    pub fn create(path: &Path) -> Result<CsvWriter<BufWriter<File>>, Error> {
        ensure_parent_dir(path)?;
        let file = File::create(path)
            .with_context(|| format!("cannot create {}", path.display()))?;
        Ok(CsvWriter::new(BufWriter::with_capacity(262144, file)))
    }
}

impl<W: Write> CsvWriter<W> {
    pub fn new(out: W) -> CsvWriter<W> {
        CsvWriter { out }
    }
}

impl<W: Write> MeshWriter for CsvWriter<W> {
    fn write_mesh(&mut self, mesh: &ScanMesh) -> Result<(), Error> {
        writeln!(self.out, "{}", ScanPoint::get_csv_header())?;
        for (index, point) in mesh.vertices.iter().enumerate() {
            writeln!(self.out, "{}", point.to_csv_string(index))?;
        }
        tracing::debug!("wrote {} csv rows", mesh.vertex_count());
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), Error> {
        self.out.flush()?;
        Ok(())
    }
}
