pub mod constants;
pub mod convert;
pub mod faces;
pub mod parseargs;
pub mod run;
pub mod scanfile;
pub mod serpentine;

pub use parseargs::*;
pub use run::*;
