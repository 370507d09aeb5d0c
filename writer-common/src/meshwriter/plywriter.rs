use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Error};

use crate::{meshwriter::{ensure_parent_dir, MeshWriter}, scanmesh::ScanMesh};

/// ASCII PLY with the scan grid position of every vertex and, when a build
/// order is attached, the reveal frame of every face.
pub struct PlyWriter<W: Write> {
    out: W,
}

impl PlyWriter<BufWriter<File>> {
    pub fn create(path: &Path) -> Result<PlyWriter<BufWriter<File>>, Error> {
        ensure_parent_dir(path)?;
        let file = File::create(path)
            .with_context(|| format!("cannot create {}", path.display()))?;
        Ok(PlyWriter::new(BufWriter::with_capacity(262144, file)))
    }
}

impl<W: Write> PlyWriter<W> {
    pub fn new(out: W) -> PlyWriter<W> {
        PlyWriter { out }
    }

    fn write_header(&mut self, mesh: &ScanMesh) -> Result<(), Error> {
        writeln!(self.out, "ply")?;
        writeln!(self.out, "format ascii 1.0")?;
        writeln!(self.out, "comment mesh {}", mesh.mesh_name)?;
        writeln!(self.out, "comment object {}", mesh.object_name)?;
        writeln!(self.out, "comment collection {}", mesh.collection_name)?;
        if let Some(build) = mesh.build {
            writeln!(self.out, "comment build_frame_start {}", build.frame_start)?;
            writeln!(self.out, "comment build_frame_duration {}", build.frame_duration)?;
        }
        writeln!(self.out, "element vertex {}", mesh.vertex_count())?;
        writeln!(self.out, "property double x")?;
        writeln!(self.out, "property double y")?;
        writeln!(self.out, "property double z")?;
        writeln!(self.out, "property uchar line")?;
        writeln!(self.out, "property uchar point")?;
        writeln!(self.out, "property uint sample")?;
        writeln!(self.out, "element face {}", mesh.face_count())?;
        writeln!(self.out, "property list uchar uint vertex_indices")?;
        if mesh.build.is_some() {
            writeln!(self.out, "property uint frame")?;
        }
        writeln!(self.out, "end_header")?;
        Ok(())
    }
}

impl<W: Write> MeshWriter for PlyWriter<W> {
    fn write_mesh(&mut self, mesh: &ScanMesh) -> Result<(), Error> {
        self.write_header(mesh)?;
        for vertex in mesh.vertices.iter() {
            writeln!(
                self.out,
                "{} {} {} {} {} {}",
                vertex.x, vertex.y, vertex.z, vertex.line, vertex.point, vertex.sample
            )?;
        }
        match mesh.face_frames() {
            Some(frames) => {
                for (face, frame) in mesh.faces.iter().zip(frames) {
                    writeln!(self.out, "4 {} {} {} {} {}", face[0], face[1], face[2], face[3], frame)?;
                }
            }
            None => {
                for face in mesh.faces.iter() {
                    writeln!(self.out, "4 {} {} {} {}", face[0], face[1], face[2], face[3])?;
                }
            }
        }
        tracing::debug!("wrote ply with {} vertices and {} faces", mesh.vertex_count(), mesh.face_count());
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), Error> {
        self.out.flush()?;
        Ok(())
    }
}
