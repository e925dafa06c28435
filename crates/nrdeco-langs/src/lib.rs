//! Tree-sitter language facade for nrdeco.
//!
//! The generator only reads Go, but source handling goes through the same
//! `Lang` handle regardless of grammar so callers never touch the raw
//! `tree_sitter::Language`.

use std::sync::Arc;

use arborium_tree_sitter as tree_sitter;
use tree_sitter::Language;

pub mod builtin;

pub use builtin::*;

/// User-facing language type.
pub type Lang = Arc<dyn LangImpl>;

/// Trait providing a unified facade for tree-sitter's Language API.
pub trait LangImpl: Send + Sync {
    /// Parse source code into a tree-sitter tree.
    ///
    /// Returns `None` only when tree-sitter gives up on the input entirely;
    /// syntax errors still produce a tree containing `ERROR` nodes.
    fn parse(&self, source: &str) -> Option<tree_sitter::Tree>;
}

/// Language implementation backed by a statically linked grammar.
#[derive(Debug)]
pub struct LangInner {
    ts_lang: Language,
}

impl LangInner {
    pub fn new_static(ts_lang: Language) -> Self {
        Self { ts_lang }
    }
}

impl LangImpl for LangInner {
    fn parse(&self, source: &str) -> Option<tree_sitter::Tree> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&self.ts_lang)
            .expect("failed to set language");
        parser.parse(source, None)
    }
}

#[cfg(test)]
mod lib_tests;
