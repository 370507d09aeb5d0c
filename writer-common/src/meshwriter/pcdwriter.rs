use std::path::{Path, PathBuf};

use anyhow::{Context, Error};
use pcd_rs::{DynRecord, DynWriter, Field, Schema, ValueKind, WriterInit};

use crate::{meshwriter::{ensure_parent_dir, MeshWriter}, scanmesh::ScanMesh};

/// Writes the vertices as an ASCII point cloud. Faces are dropped.
pub struct PcdWriter {
    path: PathBuf,
    buffer: Vec<DynRecord>,
}

impl PcdWriter {
    pub fn create(path: &Path) -> Result<PcdWriter, Error> {
        ensure_parent_dir(path)?;
        Ok(PcdWriter {
            path: path.to_path_buf(),
            buffer: Vec::new(),
        })
    }

    fn write_to_file(&mut self) -> Result<(), Error> {
        let schema = vec![
            ("x", ValueKind::F64, 1),
            ("y", ValueKind::F64, 1),
            ("z", ValueKind::F64, 1),
            ("line", ValueKind::U8, 1),
            ("point", ValueKind::U8, 1),
            ("sample", ValueKind::U32, 1),
            ("radius", ValueKind::F64, 1),
        ];
        let mut writer: DynWriter<_> = WriterInit {
            width: self.buffer.len() as u64,
            height: 1,
            viewpoint: Default::default(),
            data_kind: pcd_rs::DataKind::Ascii,
            schema: Some(Schema::from_iter(schema)),
        }
        .create(&self.path)
        .with_context(|| format!("cannot create {}", self.path.display()))?;
        for point in self.buffer.iter() {
            writer.push(point)?;
        }
        writer.finish()?;
        Ok(())
    }
}

impl MeshWriter for PcdWriter {
    fn write_mesh(&mut self, mesh: &ScanMesh) -> Result<(), Error> {
        for vertex in mesh.vertices.iter() {
            self.buffer.push(DynRecord(vec![
                Field::F64(vec![vertex.x]),
                Field::F64(vec![vertex.y]),
                Field::F64(vec![vertex.z]),
                Field::U8(vec![vertex.line]),
                Field::U8(vec![vertex.point]),
                Field::U32(vec![vertex.sample]),
                Field::F64(vec![vertex.radius]),
            ]));
        }
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), Error> {
        if !self.buffer.is_empty() {
            self.write_to_file()?;
            tracing::debug!("wrote {} points to {}", self.buffer.len(), self.path.display());
            self.buffer.clear();
        }
        Ok(())
    }
}
