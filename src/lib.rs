// Export modules for library usage
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod complexity;
pub mod core;
pub mod io;

// Re-export commonly used types
pub use crate::analyzers::{Analyzer, PythonAnalyzer};
pub use crate::commands::analyze::estimate_complexity;
pub use crate::complexity::{classify, max_iteration_depth, Complexity, TraversalState};
pub use crate::core::{Error, NodeKind, SyntaxNode};
