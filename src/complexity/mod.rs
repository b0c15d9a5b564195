//! Depth-tracking traversal and the classification policy.
//!
//! Nesting depth, not loop count, drives the estimate: two sequential
//! loops each raise the running depth to 1 in turn, but they never
//! coexist on one path, so the estimate stays `O(n)`. Conditionals and
//! other composite constructs between two loops are transparent to the
//! counter.

use crate::core::{NodeKind, SyntaxNode};
use std::fmt;

/// Counters for one traversal. Created fresh per analysis and moved by
/// value through the fold, so concurrent analyses cannot share state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraversalState {
    pub current_depth: u32,
    pub max_depth: u32,
}

impl TraversalState {
    fn enter_loop(self) -> Self {
        let current_depth = self.current_depth + 1;
        Self {
            current_depth,
            max_depth: self.max_depth.max(current_depth),
        }
    }
}

/// Greatest number of iteration constructs on any root-to-leaf path.
/// Single depth-first pass; total for every well-formed tree.
pub fn max_iteration_depth(root: &SyntaxNode) -> u32 {
    visit(root, TraversalState::default()).max_depth
}

fn visit(node: &SyntaxNode, state: TraversalState) -> TraversalState {
    let entered = match node.kind {
        NodeKind::Iteration => state.enter_loop(),
        NodeKind::Program | NodeKind::Composite => state,
    };
    let folded = node
        .children
        .iter()
        .fold(entered, |acc, child| visit(child, acc));
    // Stack discipline: the depth at entry is restored on exit, only the
    // observed maximum survives the subtree.
    TraversalState {
        current_depth: state.current_depth,
        max_depth: folded.max_depth,
    }
}

/// Heuristic Big-O class derived from maximum nesting depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Complexity {
    Constant,
    Linear,
    Polynomial(u32),
}

/// Total over the visitor's output: depth 0 is constant, 1 is linear,
/// d >= 2 is polynomial of degree d.
pub fn classify(max_depth: u32) -> Complexity {
    match max_depth {
        0 => Complexity::Constant,
        1 => Complexity::Linear,
        d => Complexity::Polynomial(d),
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Complexity::Constant => write!(f, "O(1)"),
            Complexity::Linear => write!(f, "O(n)"),
            Complexity::Polynomial(d) => write!(f, "O(n^{d})"),
        }
    }
}
