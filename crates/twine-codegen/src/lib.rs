//! Go code generation for the Twine compiler.
//!
//! A single-pass, syntax-directed emitter over the decorated AST produced by
//! parsing and type inference. The pass is synchronous and does no I/O: it
//! consumes a [`twine_ast::Module`] plus the inference results and returns
//! one string holding a self-contained Go source file.
//!
//! The interesting lowering problems all come from bridging an
//! expression-oriented surface language to statement-oriented Go:
//!
//! - value-position conditionals are lifted to a `var` declaration plus an
//!   `if`/`else` statement assigning a synthesised temp variable;
//! - bindings that are never read lower to the blank identifier `_` (Go
//!   rejects unused variables);
//! - variants lower to a uniform erased struct (`Constructor uint8`,
//!   `Fields []interface{}`);
//! - extern references emit aliased `import` lines wherever they occur, and
//!   a post-pass hoists those lines to just below the package clause.
//!
//! Structural violations of the decorated-AST invariants abort the pass with
//! an [`EmitError`]; a non-monomorphised function is not an error and emits
//! a placeholder comment instead.

pub mod emit;
pub mod error;
pub mod imports;

pub use emit::{hoist_imports, Emitter};
pub use error::EmitError;
