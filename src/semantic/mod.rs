//! Semantic facts and inspection queries.
//!
//! The engine performs no type checking. [`SymbolTable`] holds the
//! type facts the host front end is trusted for (fully qualified
//! names, base-class chains, implemented interfaces); [`inspect`]
//! answers the syntax-plus-symbols questions the repositories ask.

pub mod inspect;
mod symbols;

pub use symbols::{OBJECT, SymbolTable, TypeFacts, TypeKind};
