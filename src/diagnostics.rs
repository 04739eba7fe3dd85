//! Diagnostic reporting for the semantic pre-checks the parser performs as
//! it drives the symbol table (redeclaration, undefined identifiers).
//!
//! These never abort compilation; they accumulate in a [`DiagnosticSink`] in
//! source order and are printed by the CLI driver once the parse completes.

use std::fmt::{self, Display};

use colored::Colorize;

use crate::token::SourceLocation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub location: Option<SourceLocation>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            location: Some(location),
        }
    }

    pub fn warning(message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            location: Some(location),
        }
    }

    pub fn undefined_identifier(name: &str, location: SourceLocation) -> Self {
        Self::error(format!("Undefined identifier '{name}'"), location)
    }

    pub fn redeclaration(name: &str, location: SourceLocation) -> Self {
        Self::error(format!("Redeclaration of '{name}' in this scope"), location)
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            Severity::Warning => "warning".yellow(),
            Severity::Error => "error".red(),
        };
        match &self.location {
            Some(loc) => write!(f, "{loc}: {tag}: {}", self.message),
            None => write!(f, "{tag}: {}", self.message),
        }
    }
}

/// Accumulates diagnostics in the order the parser observes them.
#[derive(Debug, Default, Clone)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulates `diagnostic` in source order. Emitting it is the
    /// caller's job (the CLI driver prints the whole sink once the parse
    /// completes) — `push` itself does not log, so a diagnostic is never
    /// reported twice.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_preserves_source_order() {
        let mut sink = DiagnosticSink::new();
        sink.push(Diagnostic::undefined_identifier(
            "x",
            SourceLocation::new("a.pn", 1, 1),
        ));
        sink.push(Diagnostic::redeclaration(
            "y",
            SourceLocation::new("a.pn", 2, 1),
        ));

        let messages: Vec<_> = sink.iter().map(|d| d.message.clone()).collect();
        assert_eq!(
            messages,
            vec![
                "Undefined identifier 'x'".to_string(),
                "Redeclaration of 'y' in this scope".to_string(),
            ]
        );
        assert!(sink.has_errors());
    }
}
