//! The type-checked pattern tree.
//!
//! A `Pattern` is built once by the binder and read thereafter: evaluation
//! walks it against concrete values, and tooling walks it for display. The
//! tree is immutable after construction and owns its children outright.
//!
//! A failed bind still produces a structurally complete node so diagnostics
//! can render whatever was salvageable. An `Invalid` node may wrap the
//! partially bound child it replaced; [`Pattern::bad`] on the returned node
//! is the only authority on whether binding succeeded.

use serde::Serialize;
use volt_common::Span;
use volt_types::{Field, Ty};

use crate::expr::Expr;

/// A pattern variable declared by a `.name` pattern, typed at whatever the
/// pattern was matched against. The enclosing scope materializes storage
/// for these after binding completes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternVarSymbol {
    pub name: String,
    pub ty: Ty,
    pub span: Span,
}

/// One (field, sub-pattern) pair of a structure pattern, in field order
/// for the positional form and in written order for the named form.
#[derive(Debug, Clone, Serialize)]
pub struct FieldPattern {
    pub field: Field,
    pub pattern: Pattern,
}

/// A type-checked pattern tree node.
#[derive(Debug, Clone, Serialize)]
pub struct Pattern {
    pub kind: PatternKind,
    /// The source range the originating syntax covered.
    pub span: Span,
}

/// The closed set of pattern node kinds.
#[derive(Debug, Clone, Serialize)]
pub enum PatternKind {
    /// Binding failed. `child` preserves the partially bound node, if any,
    /// for diagnostic rendering only; it is never evaluated.
    Invalid { child: Option<Box<Pattern>> },
    /// Matches anything.
    Wildcard,
    /// Matches when the value equals a folded constant expression.
    Constant { expr: Expr },
    /// Captures the value into a pattern variable; always matches.
    Variable { var: PatternVarSymbol },
    /// Matches a tagged-union member, with an optional payload pattern.
    Tagged {
        member: Field,
        pattern: Option<Box<Pattern>>,
    },
    /// Matches a struct field-by-field.
    Structure { fields: Vec<FieldPattern> },
}

impl Pattern {
    /// Returns true if the pattern had an error and is therefore invalid.
    pub fn bad(&self) -> bool {
        matches!(self.kind, PatternKind::Invalid { .. })
    }

    /// Visit this node and every descendant in pre-order, including the
    /// display-only children of `Invalid` nodes. Read-only tooling hooks
    /// in here; matching semantics never do.
    pub fn walk(&self, visit: &mut impl FnMut(&Pattern)) {
        visit(self);
        match &self.kind {
            PatternKind::Invalid { child } => {
                if let Some(child) = child {
                    child.walk(visit);
                }
            }
            PatternKind::Tagged { pattern, .. } => {
                if let Some(pattern) = pattern {
                    pattern.walk(visit);
                }
            }
            PatternKind::Structure { fields } => {
                for fp in fields {
                    fp.pattern.walk(visit);
                }
            }
            PatternKind::Wildcard
            | PatternKind::Constant { .. }
            | PatternKind::Variable { .. } => {}
        }
    }
}
