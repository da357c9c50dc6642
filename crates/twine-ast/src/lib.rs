//! Decorated AST and type representation for the Twine compiler.
//!
//! Twine is an ML-family surface language compiled to Go. The parser and the
//! type-inference pass (separate collaborators) produce the decorated tree
//! defined here: every value-position conditional carries its inferred type
//! and a synthesised temp variable, every function carries its parameter and
//! return types plus the environment captured at its definition site, and
//! usage information is recorded so the backend can lower unused bindings to
//! the blank identifier.
//!
//! - [`ast`]: the `Node` tagged sum, the `Module` root, literals, operators,
//!   and the variant-type arena.
//! - [`ty`]: the inferred-type representation (`Ty`, `FnTy`).

pub mod ast;
pub mod ty;

pub use ast::{BasicLit, ConstructorDef, Module, Node, Op, StrKind, VariantDef, VariantId};
pub use ty::{FnTy, Ty};
