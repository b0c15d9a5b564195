pub mod ast;
pub mod errors;

pub use ast::{NodeKind, SyntaxNode};
pub use errors::Error;
