pub mod arity;
pub mod cli;
pub mod emit;
pub mod error;
pub mod generator;
pub mod ir;
pub mod naming;
pub mod path_de;
pub mod template;

pub use error::{Error, Result};
pub use generator::{generate, generate_document};
pub use ir::GeneratorKind;
pub use template::Templates;
