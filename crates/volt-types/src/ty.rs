//! Type representation for the Volt type system.
//!
//! Defines the core `Ty` enum plus the field symbols that structs and tagged
//! unions carry. Unlike a software type system, Volt types know their
//! physical layout: packed structs and bit vectors have a definite bit
//! width, and every field records both its element position and its bit
//! offset from the aggregate's least-significant bit.

use std::fmt;

use serde::Serialize;

/// A member of a struct or tagged union.
///
/// `index` is the field's element position in declaration order; for a
/// tagged-union member it doubles as the discriminant value. `bit_offset`
/// is measured from the aggregate's least-significant bit, ascending in
/// declaration order, and is only meaningful for packed aggregates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name: String,
    pub index: u32,
    pub bit_offset: u32,
    pub ty: Ty,
}

/// A struct definition: named, ordered fields, packed or unpacked.
///
/// A packed struct is a view over a contiguous bit vector; an unpacked
/// struct is an ordered list of independently represented elements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructDef {
    pub name: String,
    pub packed: bool,
    pub fields: Vec<Field>,
}

impl StructDef {
    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A tagged-union definition: named members, exactly one active at a time,
/// identified by a discriminant equal to the member's `index`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnionDef {
    pub name: String,
    pub members: Vec<Field>,
}

impl UnionDef {
    /// Look up a member by name.
    pub fn member(&self, name: &str) -> Option<&Field> {
        self.members.iter().find(|m| m.name == name)
    }
}

/// A Volt type.
///
/// - `Bits`: a packed scalar bit vector of the given width.
/// - `Struct`: a structural aggregate, packed or unpacked.
/// - `TaggedUnion`: a discriminated union of named members.
/// - `Alias`: a typedef; transparent to all semantic queries.
/// - `Error`: the poisoned type produced by an earlier failure. Queries on
///   it answer false/zero so later passes degrade instead of cascading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Ty {
    Bits { width: u32 },
    Struct(StructDef),
    TaggedUnion(UnionDef),
    Alias { name: String, target: Box<Ty> },
    Error,
}

impl Ty {
    /// Create a packed scalar type of the given width.
    pub fn bits(width: u32) -> Ty {
        Ty::Bits { width }
    }

    /// Create a typedef wrapping another type.
    pub fn alias(name: impl Into<String>, target: Ty) -> Ty {
        Ty::Alias {
            name: name.into(),
            target: Box::new(target),
        }
    }

    /// Peel typedefs down to the underlying type.
    pub fn canonical(&self) -> &Ty {
        let mut ty = self;
        while let Ty::Alias { target, .. } = ty {
            ty = target;
        }
        ty
    }

    /// Whether the canonical type is a tagged union.
    pub fn is_tagged_union(&self) -> bool {
        matches!(self.canonical(), Ty::TaggedUnion(_))
    }

    /// Whether the canonical type is a struct (packed or unpacked).
    pub fn is_struct(&self) -> bool {
        matches!(self.canonical(), Ty::Struct(_))
    }

    /// Whether this is the poisoned error type.
    pub fn is_error(&self) -> bool {
        matches!(self.canonical(), Ty::Error)
    }

    /// Whether two types are the same after canonicalization.
    pub fn is_matching(&self, other: &Ty) -> bool {
        self.canonical() == other.canonical()
    }

    /// The width in bits of the packed representation.
    ///
    /// Unpacked structs and tagged unions have no packed representation and
    /// report zero, as does the error type.
    pub fn bit_width(&self) -> u32 {
        match self.canonical() {
            Ty::Bits { width } => *width,
            Ty::Struct(def) if def.packed => {
                def.fields.iter().map(|f| f.ty.bit_width()).sum()
            }
            Ty::Struct(_) | Ty::TaggedUnion(_) | Ty::Error => 0,
            Ty::Alias { .. } => unreachable!("canonical returned an alias"),
        }
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Bits { width } => write!(f, "bits[{}]", width),
            Ty::Struct(def) => write!(f, "{}", def.name),
            Ty::TaggedUnion(def) => write!(f, "{}", def.name),
            Ty::Alias { name, .. } => write!(f, "{}", name),
            Ty::Error => write!(f, "<error>"),
        }
    }
}
