//! Shared infrastructure for the Volt compiler.
//!
//! Currently this holds source-position tracking ([`span::Span`] and
//! [`span::LineIndex`]), shared by every stage that reports diagnostics.

pub mod span;

pub use span::{LineIndex, Span};
