//! The primitive widening table.
//!
//! Widening conversions are the implicit, safe conversions of the source
//! language: every kind widens to itself, the integral kinds widen along the
//! byte → short → int → long lattice and into the floating-point kinds, and
//! float widens to double. long → float is defined as widening despite its
//! precision loss, matching the language being modeled. boolean widens to
//! nothing but itself, and narrowing-looking pairs such as int → byte are
//! illegal here; they are only reachable through an explicit cast
//! (see [`narrowing`](super::narrowing)).

use once_cell::sync::Lazy;

use crate::instr::{ConvertOp, Instruction};
use crate::manipulation::StackManipulation;
use crate::size::StackSize;
use crate::types::PrimitiveKind;

static WIDENING_TABLE: Lazy<[[StackManipulation; 8]; 8]> = Lazy::new(|| {
    std::array::from_fn(|source| {
        std::array::from_fn(|target| {
            widening_entry(PrimitiveKind::ALL[source], PrimitiveKind::ALL[target])
        })
    })
});

/// Looks up the conversion that widens `source` into `target`.
///
/// Every pair has a defined entry; pairs outside the widening lattice map to
/// [`StackManipulation::Illegal`].
pub fn widen(source: PrimitiveKind, target: PrimitiveKind) -> &'static StackManipulation {
    &WIDENING_TABLE[source as usize][target as usize]
}

fn convert(op: ConvertOp, size: StackSize, increasing: bool) -> StackManipulation {
    let size = if increasing {
        size.to_increasing_size()
    } else {
        size.to_decreasing_size()
    };
    StackManipulation::of_instruction(Instruction::Convert(op), size)
}

fn widening_entry(source: PrimitiveKind, target: PrimitiveKind) -> StackManipulation {
    use PrimitiveKind::{Boolean, Byte, Char, Double, Float, Int, Long, Short};

    match (source, target) {
        (source, target) if source == target => StackManipulation::Trivial,
        (Boolean, _) | (_, Boolean) => StackManipulation::Illegal,
        // Representation-preserving widenings among the int-like kinds.
        (Byte, Short | Int) | (Short | Char, Int) => StackManipulation::Trivial,
        (Byte | Short | Char | Int, Long) => {
            convert(ConvertOp::IntToLong, StackSize::Single, true)
        }
        (Byte | Short | Char | Int, Float) => {
            convert(ConvertOp::IntToFloat, StackSize::Zero, true)
        }
        (Byte | Short | Char | Int, Double) => {
            convert(ConvertOp::IntToDouble, StackSize::Single, true)
        }
        (Long, Float) => convert(ConvertOp::LongToFloat, StackSize::Single, false),
        (Long, Double) => convert(ConvertOp::LongToDouble, StackSize::Zero, true),
        (Float, Double) => convert(ConvertOp::FloatToDouble, StackSize::Single, true),
        _ => StackManipulation::Illegal,
    }
}
