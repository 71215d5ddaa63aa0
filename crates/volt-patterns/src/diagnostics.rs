//! Ariadne-based diagnostic rendering for pattern errors.
//!
//! Renders `PatternError` variants into formatted, labeled error messages.
//! Output is terse, with a secondary label on the prior declaration for
//! redefinitions and a help line where a plausible fix exists.

use std::ops::Range;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};

use crate::error::PatternError;

// ── Error Codes ────────────────────────────────────────────────────────

/// Assign a unique error code to each PatternError variant.
pub fn error_code(err: &PatternError) -> &'static str {
    match err {
        PatternError::Redefinition { .. } => "E0300",
        PatternError::PatternTaggedType { .. } => "E0301",
        PatternError::PatternStructType { .. } => "E0302",
        PatternError::UnknownMember { .. } => "E0303",
        PatternError::PatternStructTooMany { .. } => "E0304",
        PatternError::PatternStructTooFew { .. } => "E0305",
        PatternError::UnboundName { .. } => "E0306",
        PatternError::ConstantPatternType { .. } => "E0307",
    }
}

// ── Main Rendering Function ────────────────────────────────────────────

/// Render a pattern error into a formatted diagnostic string.
///
/// The output is colorless for deterministic test output. Each diagnostic
/// includes an error code, the terse `Display` message, and labeled source
/// spans.
pub fn render_diagnostic(error: &PatternError, source: &str, _filename: &str) -> String {
    let config = Config::default().with_color(false);
    let source_len = source.len();

    // Clamp a range to be valid and non-empty within source bounds;
    // ariadne needs at least a 1-char span.
    let clamp = |r: Range<usize>| -> Range<usize> {
        let s = r.start.min(source_len);
        let e = r.end.min(source_len).max(s);
        if s == e {
            s..e.saturating_add(1).min(source_len)
        } else {
            s..e
        }
    };

    let code = error_code(error);
    let msg = error.to_string();
    let span = clamp(error.span().range());

    let mut builder = Report::build(ReportKind::Error, span.clone())
        .with_code(code)
        .with_message(&msg)
        .with_config(config);

    match error {
        PatternError::Redefinition { name, prev_span, .. } => {
            builder.add_label(
                Label::new(span)
                    .with_message(format!("`{}` declared again here", name))
                    .with_color(Color::Red),
            );
            builder.add_label(
                Label::new(clamp(prev_span.range()))
                    .with_message("previous declaration here")
                    .with_color(Color::Blue),
            );
            builder.set_help("pattern variables share one scope across the whole pattern");
        }
        PatternError::PatternTaggedType { ty, .. } => {
            builder.add_label(
                Label::new(span)
                    .with_message(format!("{} is not a tagged union", ty))
                    .with_color(Color::Red),
            );
        }
        PatternError::PatternStructType { ty, .. } => {
            builder.add_label(
                Label::new(span)
                    .with_message(format!("{} is not a struct", ty))
                    .with_color(Color::Red),
            );
        }
        PatternError::UnknownMember { name, ty, .. } => {
            builder.add_label(
                Label::new(span)
                    .with_message(format!("{} has no member `{}`", ty, name))
                    .with_color(Color::Red),
            );
        }
        PatternError::PatternStructTooMany { ty, .. } => {
            builder.add_label(
                Label::new(span)
                    .with_message(format!("no field of {} left for this member", ty))
                    .with_color(Color::Red),
            );
            builder.set_help("remove the extra members");
        }
        PatternError::PatternStructTooFew { ty, .. } => {
            builder.add_label(
                Label::new(span)
                    .with_message(format!("not every field of {} is covered", ty))
                    .with_color(Color::Red),
            );
            builder.set_help("add the missing members or match the rest with `.*`");
        }
        PatternError::UnboundName { .. } => {
            builder.add_label(
                Label::new(span)
                    .with_message("not found in this scope")
                    .with_color(Color::Red),
            );
        }
        PatternError::ConstantPatternType { ty, .. } => {
            builder.add_label(
                Label::new(span)
                    .with_message(format!("{} has no packed representation", ty))
                    .with_color(Color::Red),
            );
        }
    }

    let report = builder.finish();

    let mut buf = Vec::new();
    let cache = Source::from(source);
    report
        .write(cache, &mut buf)
        .expect("failed to write diagnostic");
    String::from_utf8(buf).expect("diagnostic output should be valid UTF-8")
}
