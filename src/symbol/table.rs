//! The parent-linked scope tree plus the depth-indexed lookup stack.

use std::cell::RefCell;
use std::rc::Rc;

use super::entry::Symbol;
use super::scope::{Scope, ScopeFlags, ScopeRef, SymbolRef};

/// Maximum nesting depth the depth-indexed lookup stack supports.
pub const MAX_DEPTH: usize = 64;

/// Parent-linked tree of scopes, a cursor at the current scope, and a
/// depth-indexed stack for O(1) lookup by level.
pub struct SymbolTable {
    global: ScopeRef,
    current: ScopeRef,
    stack: Vec<ScopeRef>,
}

impl SymbolTable {
    pub fn new() -> Self {
        let global = Scope::new_global();
        Self {
            stack: vec![Rc::clone(&global)],
            current: Rc::clone(&global),
            global,
        }
    }

    pub fn global_scope(&self) -> &ScopeRef {
        &self.global
    }

    pub fn current_scope(&self) -> &ScopeRef {
        &self.current
    }

    pub fn current_depth(&self) -> usize {
        self.current.borrow().level
    }

    /// Pushes a new scope, `level = current.level + 1`, inheriting
    /// `FUNCTION`/`LOOP` flags from the parent. Panics if `MAX_DEPTH` would
    /// be exceeded.
    pub fn enter_scope(&mut self, extra_flags: ScopeFlags) -> ScopeRef {
        assert!(
            self.stack.len() < MAX_DEPTH,
            "scope nesting exceeded MAX_DEPTH ({MAX_DEPTH})"
        );

        let child = Scope::new_child(&self.current, extra_flags);
        self.current = Rc::clone(&child);
        self.stack.push(Rc::clone(&child));
        child
    }

    /// Pops to the parent scope. No-op at the global scope. The popped
    /// scope is not destroyed — it stays reachable via its parent's
    /// `children` for later passes.
    pub fn exit_scope(&mut self) {
        if self.stack.len() <= 1 {
            return;
        }
        self.stack.pop();
        let parent = self
            .current
            .borrow()
            .parent
            .as_ref()
            .and_then(|weak| weak.upgrade())
            .expect("non-global scope always has a live parent");
        self.current = parent;
    }

    /// Appends `symbol` to the current scope. Callers must have checked
    /// [`Self::lookup_current_scope`] first; the table itself does not
    /// reject duplicates (a caller that inserts after a positive
    /// redeclaration check violates the table's invariant, not the table's
    /// API).
    pub fn insert(&mut self, mut symbol: Symbol) -> SymbolRef {
        symbol.scope = Some(Rc::downgrade(&self.current));
        let entry = Rc::new(RefCell::new(symbol));
        self.current.borrow_mut().symbols.push(Rc::clone(&entry));
        entry
    }

    /// Walks from the current scope upward through `parent` links,
    /// returning the first matching symbol.
    pub fn lookup(&self, name: &str) -> Option<SymbolRef> {
        let mut scope = Some(Rc::clone(&self.current));
        while let Some(s) = scope {
            if let Some(found) = s.borrow().lookup_local(name) {
                return Some(found);
            }
            scope = s.borrow().parent.as_ref().and_then(|w| w.upgrade());
        }
        None
    }

    pub fn lookup_current_scope(&self, name: &str) -> Option<SymbolRef> {
        self.current.borrow().lookup_local(name)
    }

    /// Removes `name` from the current scope if present; returns whether it
    /// removed anything.
    pub fn remove(&mut self, name: &str) -> bool {
        let mut scope = self.current.borrow_mut();
        let before = scope.symbols.len();
        scope.symbols.retain(|s| s.borrow().name != name);
        scope.symbols.len() != before
    }

    pub fn add_reference(&self, symbol: &SymbolRef, line: usize, is_write: bool) {
        symbol.borrow_mut().add_reference(line, is_write);
    }

    /// Scope at a given nesting level via the depth-indexed stack, if it is
    /// still an ancestor of (or equal to) the current scope.
    pub fn scope_at_depth(&self, level: usize) -> Option<&ScopeRef> {
        self.stack.get(level)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::entry::{DataType, SymbolKind};

    fn var(name: &str, line: usize, level: usize) -> Symbol {
        Symbol::new(name, SymbolKind::Variable, DataType::Unknown, line, level)
    }

    #[test]
    fn insert_and_lookup_in_same_scope() {
        let mut table = SymbolTable::new();
        table.insert(var("x", 1, 0));

        assert!(table.lookup("x").is_some());
        assert!(table.lookup("y").is_none());
    }

    #[test]
    fn lookup_walks_up_parent_chain() {
        let mut table = SymbolTable::new();
        table.insert(var("outer", 1, 0));
        table.enter_scope(ScopeFlags::empty());
        table.insert(var("inner", 2, 1));

        assert!(table.lookup("outer").is_some());
        assert!(table.lookup("inner").is_some());

        table.exit_scope();
        assert!(table.lookup("outer").is_some());
        assert!(table.lookup("inner").is_none());
    }

    #[test]
    fn lookup_current_scope_does_not_see_parent_bindings() {
        let mut table = SymbolTable::new();
        table.insert(var("outer", 1, 0));
        table.enter_scope(ScopeFlags::empty());

        assert!(table.lookup_current_scope("outer").is_none());
        assert!(table.lookup("outer").is_some());
    }

    #[test]
    fn exit_scope_at_global_is_noop() {
        let mut table = SymbolTable::new();
        table.exit_scope();
        assert_eq!(table.current_depth(), 0);
    }

    #[test]
    fn scope_nesting_is_idempotent_after_balanced_enter_exit() {
        let mut table = SymbolTable::new();
        table.enter_scope(ScopeFlags::empty());
        table.enter_scope(ScopeFlags::empty());
        table.exit_scope();
        table.exit_scope();

        assert_eq!(table.current_depth(), 0);
    }

    #[test]
    fn references_accumulate_on_the_resolved_symbol() {
        let mut table = SymbolTable::new();
        table.insert(var("x", 1, 0));
        let sym = table.lookup("x").unwrap();
        table.add_reference(&sym, 2, false);
        table.add_reference(&sym, 3, true);

        assert_eq!(sym.borrow().references.len(), 2);
        assert!(sym.borrow().references[1].is_write);
    }

    #[test]
    fn inserted_symbol_carries_a_live_owning_scope_back_reference() {
        let mut table = SymbolTable::new();
        table.enter_scope(ScopeFlags::empty());
        let sym = table.insert(var("x", 1, 1));
        table.exit_scope();

        let owning = sym.borrow().owning_scope().expect("scope still alive via parent's children");
        assert_eq!(owning.borrow().level, 1);
    }

    #[test]
    fn popped_scope_remains_reachable_from_parent() {
        let mut table = SymbolTable::new();
        table.enter_scope(ScopeFlags::empty());
        table.insert(var("x", 1, 1));
        table.exit_scope();

        let global = table.global_scope().borrow();
        assert_eq!(global.children.len(), 1);
        assert_eq!(global.children[0].borrow().symbols.len(), 1);
    }
}
