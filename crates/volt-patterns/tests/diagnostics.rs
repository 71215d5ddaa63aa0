//! Tests for pattern-error diagnostic rendering.
//!
//! Each test renders one `PatternError` through the ariadne pipeline and
//! checks the stable parts of the output: the error code, the message,
//! and the label text. Layout details are ariadne's business.

use volt_common::Span;
use volt_patterns::diagnostics::{error_code, render_diagnostic};
use volt_patterns::error::PatternError;
use volt_types::Ty;

// ── Helpers ────────────────────────────────────────────────────────────

const SOURCE: &str = "case c matches\n  tagged rgb .v: x = 1;\n  .v: x = 2;\nendcase";

fn span_of(needle: &str, occurrence: usize) -> Span {
    let mut from = 0;
    let mut found = 0;
    loop {
        let at = SOURCE[from..]
            .find(needle)
            .map(|i| i + from)
            .unwrap_or_else(|| panic!("{:?} not found {} times", needle, occurrence + 1));
        if found == occurrence {
            return Span::new(at as u32, (at + needle.len()) as u32);
        }
        found += 1;
        from = at + 1;
    }
}

fn render(error: &PatternError) -> String {
    render_diagnostic(error, SOURCE, "test.vlt")
}

// ── Rendering ──────────────────────────────────────────────────────────

/// Redefinition renders both spans: the duplicate and a note on the
/// previous declaration.
#[test]
fn redefinition_labels_both_declarations() {
    let err = PatternError::Redefinition {
        name: "v".into(),
        span: span_of(".v", 1),
        prev_span: span_of(".v", 0),
    };
    let output = render(&err);
    assert!(output.contains("[E0300]"), "missing code: {output}");
    assert!(output.contains("redefinition of pattern variable `v`"));
    assert!(output.contains("previous declaration here"));
}

/// Type-shaped errors name the offending type in the label.
#[test]
fn type_errors_name_the_type() {
    let err = PatternError::PatternTaggedType {
        ty: Ty::bits(8),
        span: span_of("tagged rgb", 0),
    };
    let output = render(&err);
    assert!(output.contains("[E0301]"));
    assert!(output.contains("tagged pattern cannot match type bits[8]"));
    assert!(output.contains("bits[8] is not a tagged union"));
}

/// Unknown members name both the member and the type.
#[test]
fn unknown_member_names_member_and_type() {
    let err = PatternError::UnknownMember {
        name: "rgb".into(),
        ty: Ty::bits(8),
        span: span_of("rgb", 0),
    };
    let output = render(&err);
    assert!(output.contains("[E0303]"));
    assert!(output.contains("no member `rgb` in type bits[8]"));
}

/// Arity errors carry a help line suggesting the fix.
#[test]
fn arity_errors_suggest_a_fix() {
    let too_few = PatternError::PatternStructTooFew {
        ty: Ty::bits(8),
        span: span_of("case", 0),
    };
    let output = render(&too_few);
    assert!(output.contains("[E0305]"));
    assert!(output.contains("add the missing members"));

    let too_many = PatternError::PatternStructTooMany {
        ty: Ty::bits(8),
        span: span_of("case", 0),
    };
    let output = render(&too_many);
    assert!(output.contains("[E0304]"));
    assert!(output.contains("remove the extra members"));
}

/// A zero-length span (possible after parser recovery) still renders.
#[test]
fn empty_span_is_widened_to_render() {
    let err = PatternError::UnboundName {
        name: "x".into(),
        span: Span::new(3, 3),
    };
    let output = render(&err);
    assert!(output.contains("[E0306]"));
    assert!(output.contains("undefined name: x"));
}

// ── Codes ──────────────────────────────────────────────────────────────

/// Every variant has a distinct error code.
#[test]
fn error_codes_are_unique() {
    let span = Span::new(0, 1);
    let errors = vec![
        PatternError::Redefinition { name: "v".into(), span, prev_span: span },
        PatternError::PatternTaggedType { ty: Ty::Error, span },
        PatternError::PatternStructType { ty: Ty::Error, span },
        PatternError::UnknownMember { name: "m".into(), ty: Ty::Error, span },
        PatternError::PatternStructTooMany { ty: Ty::Error, span },
        PatternError::PatternStructTooFew { ty: Ty::Error, span },
        PatternError::UnboundName { name: "x".into(), span },
        PatternError::ConstantPatternType { ty: Ty::Error, span },
    ];
    let mut codes: Vec<_> = errors.iter().map(error_code).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), errors.len());
}
