pub mod buildorder;
pub mod meshwriter;
pub mod scanmesh;
pub mod scanpoint;
