//! Pattern binding errors.
//!
//! Binding never aborts: every error is pushed onto the context's error
//! list at the point of detection and the binder keeps going, so one match
//! construct reports everything wrong with it in a single pass. Each
//! variant carries the offending span plus whatever the renderer needs to
//! label it.

use std::fmt;

use serde::Serialize;
use volt_common::Span;
use volt_types::Ty;

/// An error found while binding a pattern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PatternError {
    /// Two pattern variables with the same name in one match construct.
    /// `prev_span` points at the first declaration.
    Redefinition {
        name: String,
        span: Span,
        prev_span: Span,
    },
    /// A `tagged` pattern applied to a type that is not a tagged union.
    PatternTaggedType { ty: Ty, span: Span },
    /// A structure pattern applied to a type that is not a struct.
    PatternStructType { ty: Ty, span: Span },
    /// A named member or field that the target type does not have.
    UnknownMember { name: String, ty: Ty, span: Span },
    /// A positional structure pattern with more members than the struct
    /// has fields; reported at the first excess member.
    PatternStructTooMany { ty: Ty, span: Span },
    /// A positional structure pattern with fewer members than the struct
    /// has fields.
    PatternStructTooFew { ty: Ty, span: Span },
    /// A name in constant-pattern position that nothing declares.
    UnboundName { name: String, span: Span },
    /// An integer literal pattern against a type with no packed
    /// representation.
    ConstantPatternType { ty: Ty, span: Span },
}

impl PatternError {
    /// The primary source span of the error.
    pub fn span(&self) -> Span {
        match self {
            PatternError::Redefinition { span, .. }
            | PatternError::PatternTaggedType { span, .. }
            | PatternError::PatternStructType { span, .. }
            | PatternError::UnknownMember { span, .. }
            | PatternError::PatternStructTooMany { span, .. }
            | PatternError::PatternStructTooFew { span, .. }
            | PatternError::UnboundName { span, .. }
            | PatternError::ConstantPatternType { span, .. } => *span,
        }
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::Redefinition { name, .. } => {
                write!(f, "redefinition of pattern variable `{}`", name)
            }
            PatternError::PatternTaggedType { ty, .. } => {
                write!(f, "tagged pattern cannot match type {}", ty)
            }
            PatternError::PatternStructType { ty, .. } => {
                write!(f, "structure pattern cannot match type {}", ty)
            }
            PatternError::UnknownMember { name, ty, .. } => {
                write!(f, "no member `{}` in type {}", name, ty)
            }
            PatternError::PatternStructTooMany { ty, .. } => {
                write!(f, "too many members in structure pattern for type {}", ty)
            }
            PatternError::PatternStructTooFew { ty, .. } => {
                write!(f, "too few members in structure pattern for type {}", ty)
            }
            PatternError::UnboundName { name, .. } => {
                write!(f, "undefined name: {}", name)
            }
            PatternError::ConstantPatternType { ty, .. } => {
                write!(f, "integer literal cannot match type {}", ty)
            }
        }
    }
}

impl std::error::Error for PatternError {}
