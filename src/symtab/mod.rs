//! Scoped symbol table with three import semantics (spec.md §4.C).
//!
//! [`SymbolTable`] owns the scope tree and is built and mutated by the
//! validator's first pass; [`Resolver`] performs read-only name resolution
//! over a built table. Splitting construction from resolution mirrors the
//! teacher's `semantic::symbol_table` / `semantic::resolver` module split.

mod resolve;
mod scope;
mod symbol;
mod table;

pub use resolve::Resolver;
pub use scope::{ImportEntry, Scope};
pub use symbol::Symbol;
pub use table::{AddOutcome, SymbolTable};
