//! Python parser adapter.
//!
//! Parses with `rustpython_parser` and lowers the Python AST into the
//! two-kind [`SyntaxNode`] model. Only statements that can contain other
//! statements get children; expressions never hold loop statements in
//! Python, so they are not lowered at all. Comprehensions are expression
//! forms and therefore do not register as iteration, a known limit of the
//! heuristic.

use crate::analyzers::Analyzer;
use crate::core::{Error, SyntaxNode};
use anyhow::Result;
use rustpython_parser::ast;
use std::path::PathBuf;

pub struct PythonAnalyzer;

impl PythonAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PythonAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for PythonAnalyzer {
    fn parse(&self, content: &str, path: PathBuf) -> Result<SyntaxNode> {
        let module = rustpython_parser::parse(content, rustpython_parser::Mode::Module, "<module>")
            .map_err(|e| Error::syntax(path, e.to_string()))?;
        Ok(lower_module(&module))
    }
}

fn lower_module(module: &ast::Mod) -> SyntaxNode {
    let children = match module {
        ast::Mod::Module(module) => lower_body(&module.body),
        _ => Vec::new(),
    };
    SyntaxNode::program(children)
}

fn lower_body(body: &[ast::Stmt]) -> Vec<SyntaxNode> {
    body.iter().map(lower_stmt).collect()
}

fn lower_stmt(stmt: &ast::Stmt) -> SyntaxNode {
    match stmt {
        ast::Stmt::For(for_stmt) => {
            SyntaxNode::iteration(lower_bodies(&[&for_stmt.body, &for_stmt.orelse]))
        }
        ast::Stmt::AsyncFor(for_stmt) => {
            SyntaxNode::iteration(lower_bodies(&[&for_stmt.body, &for_stmt.orelse]))
        }
        ast::Stmt::While(while_stmt) => {
            SyntaxNode::iteration(lower_bodies(&[&while_stmt.body, &while_stmt.orelse]))
        }
        ast::Stmt::If(if_stmt) => {
            SyntaxNode::composite(lower_bodies(&[&if_stmt.body, &if_stmt.orelse]))
        }
        ast::Stmt::With(with_stmt) => SyntaxNode::composite(lower_body(&with_stmt.body)),
        ast::Stmt::AsyncWith(with_stmt) => SyntaxNode::composite(lower_body(&with_stmt.body)),
        ast::Stmt::Try(try_stmt) => {
            let mut children = lower_body(&try_stmt.body);
            for handler in &try_stmt.handlers {
                let ast::ExceptHandler::ExceptHandler(h) = handler;
                children.extend(lower_body(&h.body));
            }
            children.extend(lower_body(&try_stmt.orelse));
            children.extend(lower_body(&try_stmt.finalbody));
            SyntaxNode::composite(children)
        }
        ast::Stmt::Match(match_stmt) => {
            let children = match_stmt
                .cases
                .iter()
                .flat_map(|case| lower_body(&case.body))
                .collect();
            SyntaxNode::composite(children)
        }
        // Function and class bodies are transparent: a loop inside a `def`
        // inside a loop still nests to depth 2.
        ast::Stmt::FunctionDef(func_def) => SyntaxNode::composite(lower_body(&func_def.body)),
        ast::Stmt::AsyncFunctionDef(func_def) => SyntaxNode::composite(lower_body(&func_def.body)),
        ast::Stmt::ClassDef(class_def) => SyntaxNode::composite(lower_body(&class_def.body)),
        _ => SyntaxNode::leaf(),
    }
}

fn lower_bodies(bodies: &[&[ast::Stmt]]) -> Vec<SyntaxNode> {
    bodies.iter().flat_map(|body| lower_body(body)).collect()
}
