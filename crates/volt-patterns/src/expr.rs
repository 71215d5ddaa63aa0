//! The expression-binder seam for constant patterns.
//!
//! A constant pattern holds an expression that must fold to a compile-time
//! value. General expression binding belongs to the expression subsystem;
//! pattern binding only needs enough of it to type a literal against the
//! target type and fold it, so this module carries a deliberately small
//! `bind_rvalue` covering the expression shapes patterns use.

use volt_common::Span;
use volt_types::{Bits, Ty, Value};

use crate::bind::BindContext;
use crate::error::PatternError;

/// An expression in pattern position, as produced by the parser.
#[derive(Debug, Clone)]
pub enum ExprSyntax {
    /// An integer literal, already parsed to its numeric value.
    IntLiteral { value: u64, span: Span },
    /// A name reference. Pattern position has no value scope, so these
    /// never resolve here; they exist so a bad parse still binds.
    Ident { name: String, span: Span },
}

impl ExprSyntax {
    pub fn span(&self) -> Span {
        match self {
            ExprSyntax::IntLiteral { span, .. } => *span,
            ExprSyntax::Ident { span, .. } => *span,
        }
    }
}

/// A bound expression: its type and, when folding succeeded, its value.
///
/// `ty` is `Ty::Error` when binding failed; `constant` is `None` when the
/// expression did not fold. Either state makes the enclosing constant
/// pattern invalid.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Expr {
    pub ty: Ty,
    pub constant: Option<Value>,
    pub span: Span,
}

impl Expr {
    /// Whether binding this expression failed.
    pub fn bad(&self) -> bool {
        self.ty.is_error()
    }
}

/// Bind an expression as an rvalue of the target type and fold it.
///
/// An integer literal is resized to the target's packed bit width, the
/// usual implicit-conversion rule for assignment-like contexts. A target
/// with no packed representation cannot hold an integer literal and gets a
/// `ConstantPatternType` diagnostic. Unknown names report `UnboundName`.
/// All failures yield an `Expr` typed `Ty::Error` with no constant.
pub fn bind_rvalue(target: &Ty, syntax: &ExprSyntax, ctx: &mut BindContext) -> Expr {
    match syntax {
        ExprSyntax::IntLiteral { value, span } => {
            let width = target.bit_width();
            if width == 0 {
                if !target.is_error() {
                    ctx.errors.push(PatternError::ConstantPatternType {
                        ty: target.clone(),
                        span: *span,
                    });
                }
                return bad_expr(*span);
            }
            Expr {
                ty: target.clone(),
                constant: Some(Value::Bits(Bits::new(width, *value))),
                span: *span,
            }
        }
        ExprSyntax::Ident { name, span } => {
            if !name.is_empty() {
                ctx.errors.push(PatternError::UnboundName {
                    name: name.clone(),
                    span: *span,
                });
            }
            bad_expr(*span)
        }
    }
}

fn bad_expr(span: Span) -> Expr {
    Expr {
        ty: Ty::Error,
        constant: None,
        span,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_resizes_to_target_width() {
        let mut ctx = BindContext::new();
        let syntax = ExprSyntax::IntLiteral { value: 0x1B7, span: Span::new(0, 5) };
        let expr = bind_rvalue(&Ty::bits(8), &syntax, &mut ctx);
        assert!(!expr.bad());
        assert_eq!(expr.constant, Some(Value::Bits(Bits::new(8, 0xB7))));
        assert!(ctx.errors.is_empty());
    }

    #[test]
    fn literal_against_unpacked_target_is_bad() {
        let mut ctx = BindContext::new();
        let target = Ty::Struct(volt_types::StructDef {
            name: "Point".into(),
            packed: false,
            fields: vec![],
        });
        let syntax = ExprSyntax::IntLiteral { value: 1, span: Span::new(0, 1) };
        let expr = bind_rvalue(&target, &syntax, &mut ctx);
        assert!(expr.bad());
        assert!(expr.constant.is_none());
        assert!(matches!(
            ctx.errors.as_slice(),
            [PatternError::ConstantPatternType { .. }]
        ));
    }

    #[test]
    fn unknown_name_reports_and_fails() {
        let mut ctx = BindContext::new();
        let syntax = ExprSyntax::Ident { name: "x".into(), span: Span::new(0, 1) };
        let expr = bind_rvalue(&Ty::bits(4), &syntax, &mut ctx);
        assert!(expr.bad());
        assert!(matches!(
            ctx.errors.as_slice(),
            [PatternError::UnboundName { .. }]
        ));
    }

    #[test]
    fn empty_name_is_silent() {
        // An empty identifier only occurs after an earlier parse error;
        // reporting it again would just add noise.
        let mut ctx = BindContext::new();
        let syntax = ExprSyntax::Ident { name: String::new(), span: Span::new(0, 0) };
        let expr = bind_rvalue(&Ty::bits(4), &syntax, &mut ctx);
        assert!(expr.bad());
        assert!(ctx.errors.is_empty());
    }
}
