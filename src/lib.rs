//! `pencil`: a lexer, recursive-descent parser, and lexical-scope resolver
//! for a small statically-typed imperative language.
//!
//! The pipeline is a strict left-to-right chain: source bytes flow through
//! [`Lexer`] into a token vector, which [`Parser`] walks while driving a
//! [`symbol::SymbolTable`] as a side effect, producing an AST rooted at a
//! [`ast::Node`]. Type-checking and code generation are out of scope;
//! [`analyze_entry`] is the stable call site a later pass builds against.

pub mod ast;
pub mod diagnostics;
pub mod error;
mod lexer;
mod parser;
pub mod symbol;
pub mod token;

pub use lexer::Lexer;
pub use parser::{ParseOutcome, Parser};

use std::fs;
use std::path::Path;

use log::debug;

use crate::ast::Node;
use crate::diagnostics::DiagnosticSink;
use crate::error::{CompileError, ParseError};
use crate::symbol::SymbolTable;
use crate::token::Token;

/// Owns the source buffer, token vector, symbol table, and diagnostic sink
/// for one invocation, in place of a process-wide token-buffer singleton.
pub struct CompilationUnit {
    pub filename: String,
    pub source: String,
    pub tokens: Vec<Token>,
    pub program: Node,
    pub symbols: SymbolTable,
    pub diagnostics: DiagnosticSink,
    pub parse_error: Option<ParseError>,
}

impl CompilationUnit {
    /// Lexes and parses `source` (already loaded into memory) as `filename`.
    pub fn compile(filename: impl Into<String>, source: impl Into<String>) -> Result<Self, CompileError> {
        let filename = filename.into();
        let source = source.into();

        let tokens = Lexer::new(filename.clone(), source.clone()).lex()?;
        let outcome = Parser::new(tokens.clone()).parse_program();

        debug!(
            "compiled '{filename}': {} diagnostics, parse_error={}",
            outcome.diagnostics.iter().count(),
            outcome.error.is_some()
        );

        Ok(Self {
            filename,
            source,
            tokens,
            program: outcome.program,
            symbols: outcome.symbols,
            diagnostics: outcome.diagnostics,
            parse_error: outcome.error,
        })
    }

    /// Reads `path` and compiles it. BOM handling lives in [`Lexer::new`].
    pub fn from_path(path: &Path) -> Result<Self, CompileError> {
        let source = fs::read_to_string(path)?;
        Self::compile(path.to_string_lossy().into_owned(), source)
    }

    /// Whether the CLI driver should report a failed parse.
    pub fn has_failed(&self) -> bool {
        self.parse_error.is_some()
    }
}

/// The semantic-analysis entry boundary: hands the AST root and the symbol
/// table to a later pass by reference. Not implemented beyond this
/// signature — type-checking and codegen are out of scope.
pub fn analyze_entry(unit: &CompilationUnit) -> (&Node, &SymbolTable) {
    (&unit.program, &unit.symbols)
}
