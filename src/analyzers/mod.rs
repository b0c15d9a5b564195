use crate::core::SyntaxNode;
use anyhow::Result;
use std::path::PathBuf;

pub mod python;

pub use python::PythonAnalyzer;

/// Parser adapter seam: turns source text into the structural tree rooted
/// at a `Program` node, or fails with a syntax error carrying the parser's
/// message. The rest of the pipeline never sees parser internals.
pub trait Analyzer: Send + Sync {
    fn parse(&self, content: &str, path: PathBuf) -> Result<SyntaxNode>;
}
