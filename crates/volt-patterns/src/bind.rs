//! Type-directed pattern binding.
//!
//! [`bind`] turns one pattern syntax node plus an expected target type into
//! one pattern tree node, recursing through nested patterns. It never
//! fails outward: a bind that goes wrong reports a [`PatternError`] and
//! returns an `Invalid` node, wrapping the partially bound child when
//! enough structure survived to be worth showing. Aggregate forms keep
//! binding their remaining sub-patterns after a failure so a single match
//! construct surfaces every diagnostic at once.
//!
//! Pattern variables declared anywhere in one bind call tree share a
//! single [`VarMap`], so duplicate names are caught across the whole
//! pattern, not just among siblings. Each declared variable is also
//! appended to the context's `pattern_vars` list for the enclosing scope
//! to materialize storage from.

use rustc_hash::FxHashMap;
use volt_common::Span;
use volt_types::Ty;

use crate::error::PatternError;
use crate::expr::bind_rvalue;
use crate::pattern::{FieldPattern, Pattern, PatternKind, PatternVarSymbol};
use crate::syntax::{
    ExprPat, PatternSyntax, StructPat, StructPatMember, TaggedPat, VarPat,
};

/// Pattern-variable scope for one top-level bind: name to declared symbol.
/// Duplicate insertion is an error, never a silent overwrite.
pub type VarMap = FxHashMap<String, PatternVarSymbol>;

/// Mutable state threaded through one binding pass.
#[derive(Debug, Default)]
pub struct BindContext {
    /// Errors reported so far, in detection order.
    pub errors: Vec<PatternError>,
    /// Pattern variables declared so far, in declaration order. The
    /// enclosing statement drains this to create local storage.
    pub pattern_vars: Vec<PatternVarSymbol>,
}

impl BindContext {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Bind a pattern syntax node against a target type.
///
/// The sole construction entry point. Always returns a usable node;
/// [`Pattern::bad`] on the result is the authority on whether binding
/// succeeded.
pub fn bind(
    syntax: &PatternSyntax,
    target: &Ty,
    var_map: &mut VarMap,
    ctx: &mut BindContext,
) -> Pattern {
    match syntax {
        // Parentheses pass the target type straight through; no node.
        PatternSyntax::Paren(paren) => bind(&paren.inner, target, var_map, ctx),
        PatternSyntax::Wildcard(wildcard) => Pattern {
            kind: PatternKind::Wildcard,
            span: wildcard.span,
        },
        PatternSyntax::Expr(expr) => bind_constant(expr, target, ctx),
        PatternSyntax::Var(var) => bind_variable(var, target, var_map, ctx),
        PatternSyntax::Tagged(tagged) => bind_tagged(tagged, target, var_map, ctx),
        PatternSyntax::Struct(structure) => bind_structure(structure, target, var_map, ctx),
    }
}

/// An `Invalid` node, optionally preserving a partially bound child for
/// diagnostic display.
fn bad_pattern(child: Option<Pattern>, span: Span) -> Pattern {
    Pattern {
        kind: PatternKind::Invalid {
            child: child.map(Box::new),
        },
        span,
    }
}

fn bind_constant(syntax: &ExprPat, target: &Ty, ctx: &mut BindContext) -> Pattern {
    // Bind the expression; it must fold to a constant.
    let expr = bind_rvalue(target, &syntax.expr, ctx);
    if expr.bad() || expr.constant.is_none() {
        return bad_pattern(None, syntax.span);
    }

    Pattern {
        kind: PatternKind::Constant { expr },
        span: syntax.span,
    }
}

fn bind_variable(
    syntax: &VarPat,
    target: &Ty,
    var_map: &mut VarMap,
    ctx: &mut BindContext,
) -> Pattern {
    let var = PatternVarSymbol {
        name: syntax.name.clone(),
        ty: target.clone(),
        span: syntax.name_span,
    };

    // An empty name comes from a parse error; build the node but declare
    // nothing.
    if !var.name.is_empty() {
        if let Some(prev) = var_map.get(&var.name) {
            ctx.errors.push(PatternError::Redefinition {
                name: var.name.clone(),
                span: syntax.name_span,
                prev_span: prev.span,
            });
            return bad_pattern(None, syntax.span);
        }
        var_map.insert(var.name.clone(), var.clone());
        ctx.pattern_vars.push(var.clone());
    }

    Pattern {
        kind: PatternKind::Variable { var },
        span: syntax.span,
    }
}

fn bind_tagged(
    syntax: &TaggedPat,
    target: &Ty,
    var_map: &mut VarMap,
    ctx: &mut BindContext,
) -> Pattern {
    let Ty::TaggedUnion(union_def) = target.canonical() else {
        if !target.is_error() {
            ctx.errors.push(PatternError::PatternTaggedType {
                ty: target.clone(),
                span: syntax.span,
            });
        }
        return bad_pattern(None, syntax.span);
    };

    let Some(member) = union_def.member(&syntax.member) else {
        // Suppressed for empty names; the parser already complained.
        if !syntax.member.is_empty() {
            ctx.errors.push(PatternError::UnknownMember {
                name: syntax.member.clone(),
                ty: target.clone(),
                span: syntax.member_span,
            });
        }
        return bad_pattern(None, syntax.span);
    };

    let value_pattern = syntax
        .pattern
        .as_ref()
        .map(|nested| bind(nested, &member.ty, var_map, ctx));

    let bad = value_pattern.as_ref().is_some_and(Pattern::bad);
    let result = Pattern {
        kind: PatternKind::Tagged {
            member: member.clone(),
            pattern: value_pattern.map(Box::new),
        },
        span: syntax.span,
    };
    if bad {
        return bad_pattern(Some(result), syntax.span);
    }

    result
}

fn bind_structure(
    syntax: &StructPat,
    target: &Ty,
    var_map: &mut VarMap,
    ctx: &mut BindContext,
) -> Pattern {
    let struct_def = match target.canonical() {
        Ty::Struct(def) if !syntax.members.is_empty() => def,
        _ => {
            // An empty member list is "not a structure pattern" rather
            // than an error; a poisoned target already complained.
            if !target.is_error() && !syntax.members.is_empty() {
                ctx.errors.push(PatternError::PatternStructType {
                    ty: target.clone(),
                    span: syntax.span,
                });
            }
            return bad_pattern(None, syntax.span);
        }
    };

    let mut bad = false;
    let mut patterns = Vec::with_capacity(syntax.members.len());

    if matches!(syntax.members[0], StructPatMember::Ordered(_)) {
        // Positional form: lock-step with the declared field order.
        let mut fields = struct_def.fields.iter();
        for member_syntax in &syntax.members {
            let StructPatMember::Ordered(ordered) = member_syntax else {
                unreachable!("mixed ordered and named structure pattern members");
            };

            let Some(field) = fields.next() else {
                ctx.errors.push(PatternError::PatternStructTooMany {
                    ty: target.clone(),
                    span: member_syntax.span(),
                });
                bad = true;
                break;
            };

            let pattern = bind(&ordered.pattern, &field.ty, var_map, ctx);
            bad |= pattern.bad();

            patterns.push(FieldPattern {
                field: field.clone(),
                pattern,
            });
        }

        if fields.next().is_some() {
            ctx.errors.push(PatternError::PatternStructTooFew {
                ty: target.clone(),
                span: syntax.span,
            });
            bad = true;
        }
    } else {
        // Named form: fields in written order, unknown names skipped.
        for member_syntax in &syntax.members {
            let StructPatMember::Named(named) = member_syntax else {
                unreachable!("mixed ordered and named structure pattern members");
            };

            let Some(field) = struct_def.field(&named.name) else {
                if !named.name.is_empty() {
                    ctx.errors.push(PatternError::UnknownMember {
                        name: named.name.clone(),
                        ty: target.clone(),
                        span: named.name_span,
                    });
                }
                bad = true;
                continue;
            };

            let pattern = bind(&named.pattern, &field.ty, var_map, ctx);
            bad |= pattern.bad();

            patterns.push(FieldPattern {
                field: field.clone(),
                pattern,
            });
        }
    }

    let result = Pattern {
        kind: PatternKind::Structure { fields: patterns },
        span: syntax.span,
    };
    if bad {
        return bad_pattern(Some(result), syntax.span);
    }

    result
}
