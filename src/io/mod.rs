use crate::core::Error;
use anyhow::Result;
use std::fs;
use std::path::Path;

/// Reads the target source fully. The file handle is released before
/// parsing begins, including on read failure.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| {
        Error::SourceRead {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}
