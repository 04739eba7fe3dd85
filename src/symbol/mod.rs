//! Lexical scope stack and symbol table.

pub mod entry;
pub mod scope;
pub mod table;

pub use entry::{DataType, Reference, Symbol, SymbolInfo, SymbolKind};
pub use scope::{Scope, ScopeFlags, ScopeRef, SymbolRef};
pub use table::{SymbolTable, MAX_DEPTH};
