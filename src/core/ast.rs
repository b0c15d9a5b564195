//! Structural view of a parsed program.
//!
//! The depth analysis only cares about one syntactic distinction: is a
//! construct a loop, or not. Everything the parser produces is lowered into
//! this two-kind tree before any measurement happens, which keeps the
//! traversal policy exhaustive over a closed enum instead of inspecting
//! parser node types on the fly.

/// Kind tag for a [`SyntaxNode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Root of one parsed unit.
    Program,
    /// Loop-like statement: `for`, `async for`, `while`.
    Iteration,
    /// Any other construct: conditionals, function and class bodies,
    /// `with`, `try`, `match`, plain statements.
    Composite,
}

/// One construct in the parsed program. Owns its children exclusively;
/// the tree is finite and acyclic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn program(children: Vec<SyntaxNode>) -> Self {
        Self {
            kind: NodeKind::Program,
            children,
        }
    }

    pub fn iteration(children: Vec<SyntaxNode>) -> Self {
        Self {
            kind: NodeKind::Iteration,
            children,
        }
    }

    pub fn composite(children: Vec<SyntaxNode>) -> Self {
        Self {
            kind: NodeKind::Composite,
            children,
        }
    }

    /// Statement with no nested statements.
    pub fn leaf() -> Self {
        Self::composite(Vec::new())
    }
}
