//! Type and constant-value models for the Volt compiler.
//!
//! Volt is a hardware-description language, so its types describe bit-level
//! layout as well as shape:
//!
//! - [`ty`]: the nominal type model (`Ty`, `Field`, `StructDef`, `UnionDef`)
//!   with the queries the semantic passes ask of it: tagged-union and struct
//!   predicates, alias canonicalization, bit widths, field lookup.
//! - [`value`]: the constant/runtime value model (`Value`, `Bits`) used by
//!   constant folding and by pattern evaluation, including bit-range slicing
//!   over packed representations and the poisoned `Value::Bad` sentinel that
//!   stands in for results made meaningless by an earlier error.

pub mod ty;
pub mod value;

pub use ty::{Field, StructDef, Ty, UnionDef};
pub use value::{Bits, UnionValue, Value};
