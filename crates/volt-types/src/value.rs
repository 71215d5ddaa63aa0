//! Constant and runtime value representation.
//!
//! Values mirror the physical layouts the type system describes: a packed
//! scalar is a [`Bits`] vector, a tagged-union instance is a discriminant
//! plus the active member's payload, and an unpacked aggregate is an
//! ordered element list. `Value::Bad` is the poisoned sentinel that an
//! earlier error leaves behind; every consumer propagates it instead of
//! inventing a true/false answer.

use std::fmt;

use serde::Serialize;

// ── Bit vectors ────────────────────────────────────────────────────────

/// An arbitrary-width bit vector.
///
/// Stored as little-endian `u64` words (`words[0]` holds bits 0..64).
/// Invariant: bits at and above `width` in the last word are zero, so
/// derived equality is bit-for-bit equality at the declared width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bits {
    width: u32,
    words: Vec<u64>,
}

impl Bits {
    /// Create a vector of the given width from a `u64`, truncating or
    /// zero-extending as needed.
    pub fn new(width: u32, value: u64) -> Bits {
        let mut bits = Bits {
            width,
            words: vec![0; Self::word_count(width)],
        };
        if let Some(first) = bits.words.first_mut() {
            *first = value;
        }
        bits.mask_top();
        bits
    }

    /// Create a vector from raw little-endian words, truncating to `width`.
    pub fn from_words(width: u32, mut words: Vec<u64>) -> Bits {
        words.resize(Self::word_count(width), 0);
        let mut bits = Bits { width, words };
        bits.mask_top();
        bits
    }

    fn word_count(width: u32) -> usize {
        width.div_ceil(64) as usize
    }

    /// Zero any storage bits at or above `width`.
    fn mask_top(&mut self) {
        let rem = self.width % 64;
        if rem != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << rem) - 1;
            }
        }
    }

    /// The declared width in bits.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Read the bit at `idx` (0 = least significant). Out-of-range reads
    /// are zero.
    pub fn bit(&self, idx: u32) -> bool {
        if idx >= self.width {
            return false;
        }
        let word = self.words[(idx / 64) as usize];
        (word >> (idx % 64)) & 1 != 0
    }

    /// Whether any bit is set.
    pub fn any_set(&self) -> bool {
        self.words.iter().any(|&w| w != 0)
    }

    /// The low 64 bits as a `u64`.
    pub fn to_u64(&self) -> u64 {
        self.words.first().copied().unwrap_or(0)
    }

    /// Extract the inclusive bit range `[low, high]` as a new vector.
    ///
    /// Bit 0 is the least-significant bit. Bits beyond `width` read as
    /// zero, matching the ascending-from-LSB packing convention.
    pub fn slice(&self, high: u32, low: u32) -> Bits {
        debug_assert!(low <= high, "slice [{low}, {high}] is inverted");
        let width = high - low + 1;
        let word_off = (low / 64) as usize;
        let bit_off = low % 64;
        let mut words = vec![0u64; Self::word_count(width)];
        for (i, out) in words.iter_mut().enumerate() {
            let mut v = self.words.get(word_off + i).copied().unwrap_or(0) >> bit_off;
            if bit_off != 0 {
                let hi = self.words.get(word_off + i + 1).copied().unwrap_or(0);
                v |= hi << (64 - bit_off);
            }
            *out = v;
        }
        let mut bits = Bits { width, words };
        bits.mask_top();
        bits
    }
}

impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'h", self.width)?;
        let nibbles = self.width.div_ceil(4).max(1);
        for n in (0..nibbles).rev() {
            let mut nibble = 0u8;
            for b in 0..4 {
                if self.bit(n * 4 + b) {
                    nibble |= 1 << b;
                }
            }
            write!(f, "{:x}", nibble)?;
        }
        Ok(())
    }
}

// ── Values ─────────────────────────────────────────────────────────────

/// A tagged-union instance: which member is active, and its payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnionValue {
    pub active_member: u32,
    pub value: Value,
}

/// A Volt constant or simulation value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    /// Poisoned: a prior error makes this value meaningless.
    Bad,
    /// A packed scalar bit vector.
    Bits(Bits),
    /// A tagged-union instance.
    Union(Box<UnionValue>),
    /// An unpacked aggregate, elements in field order.
    Elements(Vec<Value>),
}

impl Value {
    /// A 1-bit scalar, the result shape of a pattern match.
    pub fn bit(value: bool) -> Value {
        Value::Bits(Bits::new(1, value as u64))
    }

    /// A tagged-union instance.
    pub fn union(active_member: u32, value: Value) -> Value {
        Value::Union(Box::new(UnionValue {
            active_member,
            value,
        }))
    }

    /// Whether this is the poisoned sentinel.
    pub fn is_bad(&self) -> bool {
        matches!(self, Value::Bad)
    }

    /// Whether this is a scalar with any bit set. Poisoned and aggregate
    /// values are not true.
    pub fn is_true(&self) -> bool {
        matches!(self, Value::Bits(bits) if bits.any_set())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_truncates_to_width() {
        let bits = Bits::new(4, 0xB7);
        assert_eq!(bits.to_u64(), 0x7);
        assert_eq!(bits.width(), 4);
    }

    #[test]
    fn slice_splits_packed_fields() {
        // 0xB7 packed as b=0xB in bits [7:4], a=0x7 in bits [3:0].
        let bits = Bits::new(8, 0xB7);
        assert_eq!(bits.slice(3, 0), Bits::new(4, 0x7));
        assert_eq!(bits.slice(7, 4), Bits::new(4, 0xB));
        assert_eq!(bits.slice(7, 0), bits);
    }

    #[test]
    fn slice_across_word_boundary() {
        let mut words = vec![0u64; 2];
        words[0] = 0xF000_0000_0000_0000;
        words[1] = 0x0000_0000_0000_000A;
        let bits = Bits::from_words(80, words);
        // Bits [67:60] straddle the word boundary: 0xAF.
        assert_eq!(bits.slice(67, 60), Bits::new(8, 0xAF));
    }

    #[test]
    fn slice_beyond_width_reads_zero() {
        let bits = Bits::new(4, 0xF);
        assert_eq!(bits.slice(7, 2), Bits::new(6, 0b11));
    }

    #[test]
    fn equality_is_width_sensitive() {
        assert_ne!(Bits::new(8, 1), Bits::new(4, 1));
        assert_eq!(Bits::new(8, 1), Bits::new(8, 1));
    }

    #[test]
    fn display_renders_sized_hex() {
        assert_eq!(Bits::new(8, 0xB7).to_string(), "8'hb7");
        assert_eq!(Bits::new(1, 1).to_string(), "1'h1");
    }

    #[test]
    fn value_truthiness() {
        assert!(Value::bit(true).is_true());
        assert!(!Value::bit(false).is_true());
        assert!(!Value::Bad.is_true());
        assert!(Value::Bad.is_bad());
        assert!(!Value::Elements(vec![]).is_true());
    }

    #[test]
    fn union_value_equality() {
        let a = Value::union(1, Value::Bits(Bits::new(4, 3)));
        let b = Value::union(1, Value::Bits(Bits::new(4, 3)));
        let c = Value::union(0, Value::Bits(Bits::new(4, 3)));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
