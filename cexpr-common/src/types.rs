//! Symbol table shared between declaration processing and expression parsing
//!
//! Declarations are entered ahead of time (scopes are pushed and popped by
//! whoever drives the parse); the expression parser only ever looks names up.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Symbol identifier, an index into the table's symbol arena
pub type SymbolId = u32;

/// What a name is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolKind {
    Variable,
    Function,
    Parameter,
    /// A typedef name; makes `(name)` start a cast
    Type,
    EnumConstant,
}

impl SymbolKind {
    pub fn is_type(&self) -> bool {
        matches!(self, SymbolKind::Type)
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolKind::Variable => write!(f, "variable"),
            SymbolKind::Function => write!(f, "function"),
            SymbolKind::Parameter => write!(f, "parameter"),
            SymbolKind::Type => write!(f, "type"),
            SymbolKind::EnumConstant => write!(f, "enum constant"),
        }
    }
}

/// Symbol table entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    pub id: SymbolId,
    pub name: String,
    pub kind: SymbolKind,
    pub scope_level: u32,
}

impl Symbol {
    pub fn new(id: SymbolId, name: String, kind: SymbolKind, scope_level: u32) -> Self {
        Self {
            id,
            name,
            kind,
            scope_level,
        }
    }
}

/// Lexically scoped symbol table.
///
/// Symbols live in an arena that is never shrunk, so a `SymbolId` stored in
/// an AST node stays valid after the scope that declared it is popped.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    scopes: Vec<HashMap<String, SymbolId>>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            symbols: Vec::new(),
            scopes: vec![HashMap::new()], // Global scope
        }
    }

    /// Nesting level of the innermost scope (0 is global)
    pub fn current_scope(&self) -> u32 {
        (self.scopes.len() - 1) as u32
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Exit the innermost scope. The global scope is never popped.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Bind `name` in the innermost scope, shadowing any outer binding
    pub fn declare(&mut self, name: &str, kind: SymbolKind) -> SymbolId {
        let id = self.symbols.len() as SymbolId;
        let scope_level = self.current_scope();

        self.symbols
            .push(Symbol::new(id, name.to_string(), kind, scope_level));

        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string(), id);
        }

        id
    }

    /// Look a name up from the innermost scope outwards
    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(name).copied())
    }

    /// Look a name up and return its entry
    pub fn resolve(&self, name: &str) -> Option<&Symbol> {
        self.lookup(name).and_then(|id| self.get_symbol(id))
    }

    pub fn get_symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id as usize)
    }

    /// True if `name` names a type in the current scope chain
    pub fn is_type_name(&self, name: &str) -> bool {
        self.resolve(name).is_some_and(|symbol| symbol.kind.is_type())
    }

    pub fn exists_in_current_scope(&self, name: &str) -> bool {
        self.scopes
            .last()
            .map(|scope| scope.contains_key(name))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declare_and_lookup() {
        let mut table = SymbolTable::new();
        let a = table.declare("a", SymbolKind::Variable);
        let foo = table.declare("foo", SymbolKind::Function);

        assert_eq!(table.lookup("a"), Some(a));
        assert_eq!(table.lookup("foo"), Some(foo));
        assert_eq!(table.lookup("b"), None);

        let symbol = table.get_symbol(foo).unwrap();
        assert_eq!(symbol.name, "foo");
        assert_eq!(symbol.kind, SymbolKind::Function);
        assert_eq!(symbol.scope_level, 0);
    }

    #[test]
    fn test_scopes_shadow_and_unwind() {
        let mut table = SymbolTable::new();
        let outer = table.declare("x", SymbolKind::Variable);

        table.push_scope();
        let inner = table.declare("x", SymbolKind::Parameter);
        let local = table.declare("local", SymbolKind::Variable);

        assert_eq!(table.current_scope(), 1);
        assert_eq!(table.lookup("x"), Some(inner));
        assert!(table.exists_in_current_scope("local"));

        table.pop_scope();

        assert_eq!(table.lookup("x"), Some(outer));
        assert_eq!(table.lookup("local"), None);
        // Ids handed out earlier still resolve
        assert_eq!(table.get_symbol(local).unwrap().name, "local");
        assert_eq!(table.get_symbol(inner).unwrap().scope_level, 1);
    }

    #[test]
    fn test_global_scope_is_never_popped() {
        let mut table = SymbolTable::new();
        table.declare("g", SymbolKind::Variable);
        table.pop_scope();
        table.pop_scope();

        assert_eq!(table.current_scope(), 0);
        assert!(table.lookup("g").is_some());
    }

    #[test]
    fn test_type_names() {
        let mut table = SymbolTable::new();
        table.declare("size_t", SymbolKind::Type);
        table.declare("count", SymbolKind::Variable);

        assert!(table.is_type_name("size_t"));
        assert!(!table.is_type_name("count"));
        assert!(!table.is_type_name("missing"));

        // A variable in an inner scope hides the typedef
        table.push_scope();
        table.declare("size_t", SymbolKind::Variable);
        assert!(!table.is_type_name("size_t"));
    }
}
