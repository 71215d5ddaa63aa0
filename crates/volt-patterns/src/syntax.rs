//! Syntax input for pattern binding.
//!
//! The binder consumes a pre-built, immutable pattern syntax tree; the
//! parser that produces it lives elsewhere in the front end. Nodes are
//! plain owned data, each carrying the byte span it covers so diagnostics
//! can point back into the source.

use volt_common::Span;

use crate::expr::ExprSyntax;

/// Any pattern syntax node.
#[derive(Debug, Clone)]
pub enum PatternSyntax {
    /// `(pattern)` -- grouping only, no semantic content.
    Paren(ParenPat),
    /// `.*` -- matches anything.
    Wildcard(WildcardPat),
    /// A constant expression pattern.
    Expr(ExprPat),
    /// `.name` -- declares a pattern variable capturing the matched value.
    Var(VarPat),
    /// `tagged Member [pattern]` -- matches a tagged-union member.
    Tagged(TaggedPat),
    /// `'{...}` -- matches a struct's fields, positionally or by name.
    Struct(StructPat),
}

impl PatternSyntax {
    /// The source span this pattern covers.
    pub fn span(&self) -> Span {
        match self {
            PatternSyntax::Paren(p) => p.span,
            PatternSyntax::Wildcard(p) => p.span,
            PatternSyntax::Expr(p) => p.span,
            PatternSyntax::Var(p) => p.span,
            PatternSyntax::Tagged(p) => p.span,
            PatternSyntax::Struct(p) => p.span,
        }
    }
}

/// A parenthesized pattern.
#[derive(Debug, Clone)]
pub struct ParenPat {
    pub inner: Box<PatternSyntax>,
    pub span: Span,
}

/// A wildcard pattern.
#[derive(Debug, Clone)]
pub struct WildcardPat {
    pub span: Span,
}

/// A constant expression pattern.
#[derive(Debug, Clone)]
pub struct ExprPat {
    pub expr: ExprSyntax,
    pub span: Span,
}

/// A variable pattern. The name may be empty after a parse error; the
/// binder still builds a node for it but declares nothing.
#[derive(Debug, Clone)]
pub struct VarPat {
    pub name: String,
    pub name_span: Span,
    pub span: Span,
}

/// A tagged-union member pattern with an optional payload pattern.
#[derive(Debug, Clone)]
pub struct TaggedPat {
    pub member: String,
    pub member_span: Span,
    pub pattern: Option<Box<PatternSyntax>>,
    pub span: Span,
}

/// A structure pattern. All members are either ordered or named; the
/// parser never mixes the two forms.
#[derive(Debug, Clone)]
pub struct StructPat {
    pub members: Vec<StructPatMember>,
    pub span: Span,
}

/// One member of a structure pattern.
#[derive(Debug, Clone)]
pub enum StructPatMember {
    /// Positional form: sub-patterns in field declaration order.
    Ordered(OrderedMember),
    /// Named form: `field: pattern`.
    Named(NamedMember),
}

impl StructPatMember {
    /// The source span this member covers.
    pub fn span(&self) -> Span {
        match self {
            StructPatMember::Ordered(m) => m.span,
            StructPatMember::Named(m) => m.span,
        }
    }
}

/// A positional structure-pattern member.
#[derive(Debug, Clone)]
pub struct OrderedMember {
    pub pattern: PatternSyntax,
    pub span: Span,
}

/// A named structure-pattern member.
#[derive(Debug, Clone)]
pub struct NamedMember {
    pub name: String,
    pub name_span: Span,
    pub pattern: PatternSyntax,
    pub span: Span,
}
