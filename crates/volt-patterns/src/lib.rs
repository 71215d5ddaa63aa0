//! Volt pattern matching: binding and evaluation for `case ... matches`.
//!
//! This crate turns pattern syntax into a type-checked pattern tree and
//! evaluates that tree against concrete values. Binding happens once per
//! match construct during semantic analysis; evaluation happens at
//! constant-evaluation or simulation time, as often as the construct is
//! re-evaluated.
//!
//! # Architecture
//!
//! - [`syntax`]: the pre-built pattern syntax tree the binder consumes
//! - [`expr`]: the constant-expression seam (`bind_rvalue` and folding)
//! - [`pattern`]: the pattern tree itself (`Pattern`, `PatternKind`)
//! - [`bind`]: the type-directed binder, `VarMap`, and `BindContext`
//! - [`eval`]: the evaluator and per-evaluation `EvalContext`
//! - [`error`]: the `PatternError` taxonomy
//! - [`diagnostics`]: ariadne rendering for pattern errors
//!
//! Binding never fails outward: errors land in the context and the binder
//! returns an `Invalid` node that is safe to display and safe to evaluate
//! (it yields the poisoned result). Evaluation is tri-state: true, false,
//! or poisoned, with variable captures as its only side effect.

pub mod bind;
pub mod diagnostics;
pub mod error;
pub mod eval;
pub mod expr;
pub mod pattern;
pub mod syntax;

pub use bind::{bind, BindContext, VarMap};
pub use error::PatternError;
pub use eval::EvalContext;
pub use expr::{bind_rvalue, Expr, ExprSyntax};
pub use pattern::{FieldPattern, Pattern, PatternKind, PatternVarSymbol};
pub use syntax::PatternSyntax;
