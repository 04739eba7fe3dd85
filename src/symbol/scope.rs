//! A single lexical scope and the bit-set of flags it inherits from its
//! parent.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use bitflags::bitflags;

use super::entry::Symbol;

pub type SymbolRef = Rc<RefCell<Symbol>>;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ScopeFlags: u8 {
        const FUNCTION = 0b0001;
        const LOOP     = 0b0010;
        const LOCAL    = 0b0100;
        const GLOBAL   = 0b1000;
    }
}

pub type ScopeRef = Rc<RefCell<Scope>>;

/// A lexical region with its own set of named bindings.
///
/// `parent` is a non-owning [`Weak`] reference: the parent always outlives
/// its children by construction (a scope is dropped only when its whole
/// ancestor chain is). `children` owns every nested scope so later passes
/// can walk the tree downward from the global scope even after the parser
/// has moved `current` back up to an enclosing scope.
#[derive(Debug)]
pub struct Scope {
    pub level: usize,
    pub symbols: Vec<SymbolRef>,
    pub parent: Option<Weak<RefCell<Scope>>>,
    pub children: Vec<ScopeRef>,
    pub flags: ScopeFlags,
}

impl Scope {
    pub fn new_global() -> ScopeRef {
        Rc::new(RefCell::new(Scope {
            level: 0,
            symbols: Vec::new(),
            parent: None,
            children: Vec::new(),
            flags: ScopeFlags::GLOBAL,
        }))
    }

    /// Creates a child of `parent`, inheriting its `FUNCTION`/`LOOP` flags
    /// and replacing `GLOBAL`/`LOCAL` with `LOCAL` (every non-root scope is
    /// local by definition).
    pub fn new_child(parent: &ScopeRef, extra_flags: ScopeFlags) -> ScopeRef {
        let parent_borrow = parent.borrow();
        let inherited = (parent_borrow.flags & (ScopeFlags::FUNCTION | ScopeFlags::LOOP))
            | ScopeFlags::LOCAL
            | extra_flags;
        let level = parent_borrow.level + 1;
        drop(parent_borrow);

        let child = Rc::new(RefCell::new(Scope {
            level,
            symbols: Vec::new(),
            parent: Some(Rc::downgrade(parent)),
            children: Vec::new(),
            flags: inherited,
        }));

        parent.borrow_mut().children.push(Rc::clone(&child));
        child
    }

    pub fn lookup_local(&self, name: &str) -> Option<SymbolRef> {
        self.symbols
            .iter()
            .find(|s| s.borrow().name == name)
            .cloned()
    }

    pub fn is_in_function(&self) -> bool {
        self.flags.contains(ScopeFlags::FUNCTION)
    }

    pub fn is_in_loop(&self) -> bool {
        self.flags.contains(ScopeFlags::LOOP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::entry::{DataType, Symbol, SymbolKind};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn child_inherits_function_and_loop_flags() {
        let global = Scope::new_global();
        let func = Scope::new_child(&global, ScopeFlags::FUNCTION);
        let body = Scope::new_child(&func, ScopeFlags::empty());
        let loop_body = Scope::new_child(&body, ScopeFlags::LOOP);
        let nested = Scope::new_child(&loop_body, ScopeFlags::empty());

        assert!(nested.borrow().is_in_function());
        assert!(nested.borrow().is_in_loop());
        assert!(!body.borrow().is_in_loop());
    }

    #[test]
    fn levels_increment_with_nesting() {
        let global = Scope::new_global();
        let child = Scope::new_child(&global, ScopeFlags::empty());
        let grandchild = Scope::new_child(&child, ScopeFlags::empty());

        assert_eq!(global.borrow().level, 0);
        assert_eq!(child.borrow().level, 1);
        assert_eq!(grandchild.borrow().level, 2);
    }

    #[test]
    fn global_is_reachable_through_children_after_exit() {
        let global = Scope::new_global();
        {
            let child = Scope::new_child(&global, ScopeFlags::empty());
            child.borrow_mut().symbols.push(Rc::new(RefCell::new(
                Symbol::new("x", SymbolKind::Variable, DataType::Unknown, 1, 1),
            )));
        }

        let global_borrow = global.borrow();
        assert_eq!(global_borrow.children.len(), 1);
        assert_eq!(global_borrow.children[0].borrow().symbols.len(), 1);
    }
}
