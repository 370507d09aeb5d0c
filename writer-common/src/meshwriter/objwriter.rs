use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Error};

use crate::{meshwriter::{ensure_parent_dir, MeshWriter}, scanmesh::ScanMesh};

/// Wavefront OBJ.
///
/// The collection becomes a group and the object an `o` record. OBJ has
/// no per-face attributes, so a build order is only recorded as a comment.
pub struct ObjWriter<W: Write> {
    out: W,
}

impl ObjWriter<BufWriter<File>> {
    pub fn create(path: &Path) -> Result<ObjWriter<BufWriter<File>>, Error> {
        ensure_parent_dir(path)?;
        let file = File::create(path)
            .with_context(|| format!("cannot create {}", path.display()))?;
        Ok(ObjWriter::new(BufWriter::with_capacity(262144, file)))
    }
}

impl<W: Write> ObjWriter<W> {
    pub fn new(out: W) -> ObjWriter<W> {
        ObjWriter { out }
    }
}

impl<W: Write> MeshWriter for ObjWriter<W> {
    fn write_mesh(&mut self, mesh: &ScanMesh) -> Result<(), Error> {
        writeln!(self.out, "# mesh {}", mesh.mesh_name)?;
        if let Some(build) = mesh.build {
            writeln!(
                self.out,
                "# build frame_start {} frame_duration {}",
                build.frame_start, build.frame_duration
            )?;
        }
        writeln!(self.out, "g {}", mesh.collection_name)?;
        writeln!(self.out, "o {}", mesh.object_name)?;
        for vertex in mesh.vertices.iter() {
            writeln!(self.out, "v {} {} {}", vertex.x, vertex.y, vertex.z)?;
        }
        for face in mesh.faces.iter() {
            // obj indices start at 1
            writeln!(self.out, "f {} {} {} {}", face[0] + 1, face[1] + 1, face[2] + 1, face[3] + 1)?;
        }
        tracing::debug!("wrote obj with {} vertices and {} faces", mesh.vertex_count(), mesh.face_count());
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), Error> {
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{buildorder::BuildOrder, scanmesh::tests::unit_quad_mesh};

    fn render(mesh: &ScanMesh) -> String {
        let mut buf = Vec::new();
        let mut writer = ObjWriter::new(&mut buf);
        writer.write_mesh(mesh).unwrap();
        writer.finalize().unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn faces_are_one_based() {
        let text = render(&unit_quad_mesh());
        assert!(text.contains("g new_collection\no new_object\n"));
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 4);
        assert!(text.lines().any(|l| l == "f 1 2 3 4"));
        assert!(!text.contains("# build"));
    }

    #[test]
    fn build_order_is_recorded() {
        let text = render(&unit_quad_mesh().with_build(BuildOrder::new(1, 5)));
        assert!(text.contains("# build frame_start 1 frame_duration 5"));
    }
}
