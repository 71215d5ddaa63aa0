//! Pattern evaluation.
//!
//! Matching a pattern against a value yields a tri-state result: a 1-bit
//! true, a 1-bit false, or `Value::Bad` when a prior error makes the
//! answer meaningless. There is no error path out of evaluation; poison is
//! the only failure signal, and the caller of the whole match construct
//! treats it as "could not determine", never as true or false.
//!
//! Variable captures are written into the evaluation context as they are
//! reached and are not rolled back when the enclosing match later fails --
//! the surrounding statement resets the context between re-evaluations.

use rustc_hash::FxHashMap;
use volt_types::Value;

use crate::pattern::{Pattern, PatternKind, PatternVarSymbol};

/// Per-evaluation storage for captured pattern variables.
///
/// One context serves one evaluation at a time; concurrent evaluations of
/// the same (immutable) pattern tree need a context each.
#[derive(Debug, Default)]
pub struct EvalContext {
    locals: FxHashMap<String, Value>,
}

impl EvalContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create local storage for a captured variable. Later captures of the
    /// same symbol within one evaluation overwrite earlier ones.
    pub fn create_local(&mut self, var: &PatternVarSymbol, value: Value) {
        self.locals.insert(var.name.clone(), value);
    }

    /// Read a captured variable's value.
    pub fn local(&self, name: &str) -> Option<&Value> {
        self.locals.get(name)
    }

    /// Drop all captures, readying the context for another evaluation.
    pub fn reset(&mut self) {
        self.locals.clear();
    }
}

impl Pattern {
    /// Evaluate this pattern against a value.
    ///
    /// Returns a 1-bit true/false scalar, or `Value::Bad` when the pattern
    /// or the input is poisoned. Capturing patterns write into `ctx` as a
    /// side effect.
    pub fn eval(&self, ctx: &mut EvalContext, value: &Value) -> Value {
        // A poisoned input poisons every kind of match, even a wildcard;
        // "could not determine the value" must not become "matched".
        if value.is_bad() {
            return Value::Bad;
        }

        match &self.kind {
            // Invalid nodes never evaluate their display-only child.
            PatternKind::Invalid { .. } => Value::Bad,

            PatternKind::Wildcard => Value::bit(true),

            PatternKind::Constant { expr } => {
                // The binder only builds Constant nodes from successfully
                // folded expressions.
                debug_assert!(expr.constant.is_some());
                let Some(constant) = &expr.constant else {
                    return Value::Bad;
                };
                Value::bit(constant == value)
            }

            PatternKind::Variable { var } => {
                // Capture unconditionally; the match may still fail
                // elsewhere, but captures are not rolled back.
                ctx.create_local(var, value.clone());
                Value::bit(true)
            }

            PatternKind::Tagged { member, pattern } => {
                let Value::Union(union_val) = value else {
                    return Value::Bad;
                };

                // Discriminant mismatch short-circuits; the payload
                // pattern is not evaluated.
                if union_val.active_member != member.index {
                    return Value::bit(false);
                }

                match pattern {
                    Some(nested) => nested.eval(ctx, &union_val.value),
                    None => Value::bit(true),
                }
            }

            PatternKind::Structure { fields } => {
                match value {
                    Value::Elements(elems) => {
                        for fp in fields {
                            let Some(elem) = elems.get(fp.field.index as usize) else {
                                return Value::Bad;
                            };
                            let result = fp.pattern.eval(ctx, elem);
                            if !result.is_true() {
                                return result;
                            }
                        }
                        Value::bit(true)
                    }
                    Value::Bits(bits) => {
                        for fp in fields {
                            let offset = fp.field.bit_offset;
                            let width = fp.field.ty.bit_width();
                            if width == 0 {
                                return Value::Bad;
                            }
                            let sliced = bits.slice(offset + width - 1, offset);
                            let result = fp.pattern.eval(ctx, &Value::Bits(sliced));
                            if !result.is_true() {
                                return result;
                            }
                        }
                        Value::bit(true)
                    }
                    _ => Value::Bad,
                }
            }
        }
    }
}
