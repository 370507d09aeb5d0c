use std::{fs, path::Path};

use anyhow::{Context, Error};

use crate::scanmesh::ScanMesh;

mod csvwriter;
mod objwriter;
mod pcdwriter;
mod plywriter;
mod progressbarext;

pub use csvwriter::*;
pub use objwriter::*;
pub use pcdwriter::*;
pub use plywriter::*;
pub use progressbarext::ProgressBarExt;

pub trait MeshWriter {
    fn write_mesh(&mut self, mesh: &ScanMesh) -> Result<(), Error>;
    fn finalize(&mut self) -> Result<(), Error>;
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("cannot create output directory {}", parent.display()))?;
        }
    }
    Ok(())
}
