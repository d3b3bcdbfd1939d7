// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The sixteen boolean gates with two inputs and one output.
//!
//! A gate is identified by its truth table read as a 4-bit number: bit `i`
//! is the output for inputs `x₁ = bit 0 of i` and `x₂ = bit 1 of i`. So
//! `And` (true only for `i = 3`) is gate 8 and `Or` is gate 14.

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// Number of input combinations of a two-input gate.
pub const TRUTH_TABLE_LEN: usize = 4;

/// The `len` low bits of `n`, least significant first.
pub fn id_to_bits(n: u64, len: usize) -> Vec<bool> {
    (0..len)
        .map(|i| {
            u32::try_from(i)
                .ok()
                .and_then(|shift| n.checked_shr(shift))
                .is_some_and(|v| v & 1 == 1)
        })
        .collect()
}

/// Inverse of [`id_to_bits`]. Bits past the 64th are ignored.
pub fn bits_to_id(bits: &[bool]) -> u64 {
    bits.iter()
        .take(64)
        .enumerate()
        .fold(0, |acc, (i, &bit)| if bit { acc | (1 << i) } else { acc })
}

/// A two-input boolean gate, numbered by its truth table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum BooleanGate {
    False,
    Nor,
    X1AndNotX2,
    NotX2,
    NotX1AndX2,
    NotX1,
    Xor,
    Nand,
    And,
    Equality,
    X1,
    X2ImpliesX1,
    X2,
    X1ImpliesX2,
    Or,
    True,
}

impl BooleanGate {
    /// The gate whose truth table is `id`.
    pub fn from_id(id: u8) -> Option<Self> {
        Self::iter().nth(usize::from(id))
    }

    /// The gate with the given 4-entry truth table.
    pub fn from_bits(bits: &[bool]) -> Option<Self> {
        if bits.len() != TRUTH_TABLE_LEN {
            return None;
        }
        u8::try_from(bits_to_id(bits)).ok().and_then(Self::from_id)
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    /// Truth table, indexed by `x₁ + 2·x₂`.
    pub fn bits(self) -> [bool; TRUTH_TABLE_LEN] {
        let id = self.id();
        [0, 1, 2, 3].map(|i| (id >> i) & 1 == 1)
    }

    pub fn eval(self, x1: bool, x2: bool) -> bool {
        self.bits()[usize::from(x1) + 2 * usize::from(x2)]
    }

    /// Symbolic label, e.g. `∧` or `x₁ → x₂`.
    pub fn label(self) -> &'static str {
        match self {
            Self::False => "⊥",
            Self::Nor => "↓",
            Self::X1AndNotX2 => "x₁ ∧ ¬x₂",
            Self::NotX2 => "¬x₂",
            Self::NotX1AndX2 => "¬x₁ ∧ x₂",
            Self::NotX1 => "¬x₁",
            Self::Xor => "⊕",
            Self::Nand => "↑",
            Self::And => "∧",
            Self::Equality => "↔",
            Self::X1 => "x₁",
            Self::X2ImpliesX1 => "x₂ → x₁",
            Self::X2 => "x₂",
            Self::X1ImpliesX2 => "x₁ → x₂",
            Self::Or => "∨",
            Self::True => "⊤",
        }
    }

    /// Name of the gate; the two mixed conjunctions have none.
    pub fn description(self) -> Option<&'static str> {
        match self {
            Self::False => Some("False"),
            Self::Nor => Some("Not Or"),
            Self::X1AndNotX2 | Self::NotX1AndX2 => None,
            Self::NotX2 | Self::NotX1 => Some("Negation"),
            Self::Xor => Some("Exclusive Or"),
            Self::Nand => Some("Not And"),
            Self::And => Some("And"),
            Self::Equality => Some("Equality"),
            Self::X1 | Self::X2 => Some("Identity"),
            Self::X2ImpliesX1 | Self::X1ImpliesX2 => Some("Implication"),
            Self::Or => Some("Or"),
            Self::True => Some("True"),
        }
    }

    pub fn describe(self) -> GateDesc {
        GateDesc {
            id: self.id(),
            label: self.label(),
            description: self.description(),
            bits: self.bits(),
        }
    }
}

/// Everything the gate picker shows about a gate.
///
/// Output only; read a gate back as a [`BooleanGate`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GateDesc {
    pub id: u8,
    pub label: &'static str,
    pub description: Option<&'static str>,
    pub bits: [bool; TRUTH_TABLE_LEN],
}

/// All sixteen gates, in id order.
pub fn boolean_gates() -> Vec<GateDesc> {
    let gates: Vec<GateDesc> = BooleanGate::iter().map(BooleanGate::describe).collect();
    debug_assert_eq!(gates.len(), BooleanGate::COUNT);
    gates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixteen_gates() {
        assert_eq!(BooleanGate::COUNT, 1 << TRUTH_TABLE_LEN);
        let gates = boolean_gates();
        for (i, gate) in gates.iter().enumerate() {
            assert_eq!(usize::from(gate.id), i);
            assert_eq!(bits_to_id(&gate.bits), i as u64);
        }
    }

    #[test]
    fn test_bits_round_trip() {
        assert_eq!(id_to_bits(8, 4), vec![false, false, false, true]);
        assert_eq!(id_to_bits(6, 4), vec![false, true, true, false]);
        assert_eq!(bits_to_id(&[true, false, true]), 5);
        assert!(id_to_bits(1, 70)[0]);
        assert!(!id_to_bits(u64::MAX, 70)[69]);
    }

    #[test]
    fn test_truth_tables_match_labels() {
        for x1 in [false, true] {
            for x2 in [false, true] {
                assert!(!BooleanGate::False.eval(x1, x2));
                assert!(BooleanGate::True.eval(x1, x2));
                assert_eq!(BooleanGate::And.eval(x1, x2), x1 && x2);
                assert_eq!(BooleanGate::Or.eval(x1, x2), x1 || x2);
                assert_eq!(BooleanGate::Nand.eval(x1, x2), !(x1 && x2));
                assert_eq!(BooleanGate::Nor.eval(x1, x2), !(x1 || x2));
                assert_eq!(BooleanGate::Xor.eval(x1, x2), x1 != x2);
                assert_eq!(BooleanGate::Equality.eval(x1, x2), x1 == x2);
                assert_eq!(BooleanGate::X1.eval(x1, x2), x1);
                assert_eq!(BooleanGate::X2.eval(x1, x2), x2);
                assert_eq!(BooleanGate::NotX1.eval(x1, x2), !x1);
                assert_eq!(BooleanGate::NotX2.eval(x1, x2), !x2);
                assert_eq!(BooleanGate::X1AndNotX2.eval(x1, x2), x1 && !x2);
                assert_eq!(BooleanGate::NotX1AndX2.eval(x1, x2), !x1 && x2);
                assert_eq!(BooleanGate::X1ImpliesX2.eval(x1, x2), !x1 || x2);
                assert_eq!(BooleanGate::X2ImpliesX1.eval(x1, x2), !x2 || x1);
            }
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(BooleanGate::from_id(8), Some(BooleanGate::And));
        assert_eq!(BooleanGate::from_id(16), None);
        assert_eq!(
            BooleanGate::from_bits(&[false, true, true, false]),
            Some(BooleanGate::Xor)
        );
        assert_eq!(BooleanGate::from_bits(&[true; 5]), None);
        assert_eq!(BooleanGate::X2ImpliesX1.describe().description, Some("Implication"));
        assert_eq!(BooleanGate::X1AndNotX2.describe().description, None);
    }
}
