use crate::analyzers::{Analyzer, PythonAnalyzer};
use crate::complexity::{classify, max_iteration_depth, Complexity};
use crate::io;
use anyhow::Result;
use log::debug;
use std::path::Path;

/// Full pipeline for one source file: read, parse, measure, classify.
/// One-shot and synchronous; no caching, no retries, no partial results.
pub fn estimate_complexity(path: &Path) -> Result<Complexity> {
    let content = io::read_source(path)?;
    let tree = PythonAnalyzer::new().parse(&content, path.to_path_buf())?;
    let depth = max_iteration_depth(&tree);
    debug!("{}: max loop nesting depth {}", path.display(), depth);
    Ok(classify(depth))
}
