pub mod generate;
pub mod parseargs;

pub use generate::*;
pub use parseargs::*;
