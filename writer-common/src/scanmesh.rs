use crate::{buildorder::BuildOrder, scanpoint::ScanPoint};

pub const DEFAULT_MESH_NAME: &str = "ScannedMesh";
pub const DEFAULT_OBJECT_NAME: &str = "new_object";
pub const DEFAULT_COLLECTION_NAME: &str = "new_collection";

/// Quad faces reference vertices by their index in `vertices`.
pub type Quad = [u32; 4];

#[derive(Clone, Debug)]
pub struct ScanMesh {
    pub mesh_name: String,
    pub object_name: String,
    pub collection_name: String,
    pub vertices: Vec<ScanPoint>,
    pub faces: Vec<Quad>,
    pub build: Option<BuildOrder>,
}

impl ScanMesh {
    pub fn new(vertices: Vec<ScanPoint>, faces: Vec<Quad>) -> ScanMesh {
        ScanMesh {
            mesh_name: DEFAULT_MESH_NAME.to_string(),
            object_name: DEFAULT_OBJECT_NAME.to_string(),
            collection_name: DEFAULT_COLLECTION_NAME.to_string(),
            vertices,
            faces,
            build: None,
        }
    }

    pub fn with_object_name(mut self, name: &str) -> ScanMesh {
        self.object_name = name.to_string();
        self
    }

    pub fn with_build(mut self, build: BuildOrder) -> ScanMesh {
        self.build = Some(build);
        self
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Reveal frame of each face, in face order, when a build order is attached.
    pub fn face_frames(&self) -> Option<Vec<u32>> {
        let build = self.build?;
        let face_count = self.faces.len();
        Some((0..face_count).map(|i| build.face_frame(i, face_count)).collect())
    }
}
