//! The primitive narrowing table.
//!
//! Narrowing conversions are lossy and therefore only reachable through an
//! explicit cast, never through implicit assignment. Every kind narrows to
//! itself; boolean narrows to nothing else. char is unsigned, so conversions
//! between char and the signed sub-int kinds need an explicit instruction in
//! both directions: byte → char and short → char live in this table even
//! though char is not numerically smaller. Multi-step conversions such as
//! long → byte first reduce the slot category (`l2i`) and then truncate
//! (`i2b`); their size reflects only the net category change, not the
//! instruction count.

use once_cell::sync::Lazy;

use crate::instr::{ConvertOp, Instruction};
use crate::manipulation::StackManipulation;
use crate::size::StackSize;
use crate::types::PrimitiveKind;

static NARROWING_TABLE: Lazy<[[StackManipulation; 8]; 8]> = Lazy::new(|| {
    std::array::from_fn(|source| {
        std::array::from_fn(|target| {
            narrowing_entry(PrimitiveKind::ALL[source], PrimitiveKind::ALL[target])
        })
    })
});

/// Looks up the conversion that narrows `source` into `target`.
///
/// Every pair has a defined entry; pairs outside the narrowing rules map to
/// [`StackManipulation::Illegal`].
pub fn narrow(source: PrimitiveKind, target: PrimitiveKind) -> &'static StackManipulation {
    &NARROWING_TABLE[source as usize][target as usize]
}

fn truncate(ops: &[ConvertOp], size: StackSize, increasing: bool) -> StackManipulation {
    let size = if increasing {
        size.to_increasing_size()
    } else {
        size.to_decreasing_size()
    };
    StackManipulation::simple(ops.iter().map(|op| Instruction::Convert(*op)).collect(), size)
}

fn narrowing_entry(source: PrimitiveKind, target: PrimitiveKind) -> StackManipulation {
    use ConvertOp::{
        DoubleToFloat, DoubleToInt, DoubleToLong, FloatToInt, FloatToLong, IntToByte, IntToChar,
        IntToShort, LongToInt,
    };
    use PrimitiveKind::{Boolean, Byte, Char, Double, Float, Int, Long, Short};
    use StackSize::{Single, Zero};

    match (source, target) {
        (source, target) if source == target => StackManipulation::Trivial,
        (Boolean, _) | (_, Boolean) => StackManipulation::Illegal,
        // The char exceptions: unsigned representation forces a conversion
        // both ways against byte and short.
        (Byte | Short | Int, Char) => truncate(&[IntToChar], Zero, false),
        (Short | Char | Int, Byte) => truncate(&[IntToByte], Zero, false),
        (Char | Int, Short) => truncate(&[IntToShort], Zero, false),
        (Long, Byte) => truncate(&[LongToInt, IntToByte], Single, false),
        (Long, Short) => truncate(&[LongToInt, IntToShort], Single, false),
        (Long, Char) => truncate(&[LongToInt, IntToChar], Single, false),
        (Long, Int) => truncate(&[LongToInt], Single, false),
        (Float, Byte) => truncate(&[FloatToInt, IntToByte], Zero, false),
        (Float, Short) => truncate(&[FloatToInt, IntToShort], Zero, false),
        (Float, Char) => truncate(&[FloatToInt, IntToChar], Zero, false),
        (Float, Int) => truncate(&[FloatToInt], Zero, false),
        (Float, Long) => truncate(&[FloatToLong], Single, true),
        (Double, Byte) => truncate(&[DoubleToInt, IntToByte], Single, false),
        (Double, Short) => truncate(&[DoubleToInt, IntToShort], Single, false),
        (Double, Char) => truncate(&[DoubleToInt, IntToChar], Single, false),
        (Double, Int) => truncate(&[DoubleToInt], Single, false),
        (Double, Long) => truncate(&[DoubleToLong], Zero, false),
        (Double, Float) => truncate(&[DoubleToFloat], Single, false),
        // Everything that remains widens instead; byte → short in particular
        // is not a narrowing.
        _ => StackManipulation::Illegal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size::Size;

    #[test]
    fn every_kind_narrows_to_itself() {
        for kind in PrimitiveKind::ALL {
            assert_eq!(narrow(kind, kind), &StackManipulation::Trivial, "{}", kind.name());
        }
    }

    #[test]
    fn boolean_narrows_to_nothing_else() {
        for kind in PrimitiveKind::ALL {
            if kind != PrimitiveKind::Boolean {
                assert_eq!(narrow(PrimitiveKind::Boolean, kind), &StackManipulation::Illegal);
                assert_eq!(narrow(kind, PrimitiveKind::Boolean), &StackManipulation::Illegal);
            }
        }
    }

    #[test]
    fn char_conversions_are_explicit_in_both_directions() {
        assert_eq!(
            narrow(PrimitiveKind::Byte, PrimitiveKind::Char),
            &StackManipulation::of_instruction(
                Instruction::Convert(ConvertOp::IntToChar),
                Size::ZERO
            )
        );
        assert_eq!(
            narrow(PrimitiveKind::Short, PrimitiveKind::Char),
            &StackManipulation::of_instruction(
                Instruction::Convert(ConvertOp::IntToChar),
                Size::ZERO
            )
        );
        assert_eq!(
            narrow(PrimitiveKind::Char, PrimitiveKind::Byte),
            &StackManipulation::of_instruction(
                Instruction::Convert(ConvertOp::IntToByte),
                Size::ZERO
            )
        );
        assert_eq!(
            narrow(PrimitiveKind::Char, PrimitiveKind::Short),
            &StackManipulation::of_instruction(
                Instruction::Convert(ConvertOp::IntToShort),
                Size::ZERO
            )
        );
    }

    #[test]
    fn byte_to_short_is_not_a_narrowing() {
        assert_eq!(
            narrow(PrimitiveKind::Byte, PrimitiveKind::Short),
            &StackManipulation::Illegal
        );
        assert_eq!(
            narrow(PrimitiveKind::Byte, PrimitiveKind::Int),
            &StackManipulation::Illegal
        );
        assert_eq!(
            narrow(PrimitiveKind::Int, PrimitiveKind::Long),
            &StackManipulation::Illegal
        );
    }

    #[test]
    fn multi_step_narrowings_carry_net_category_delta() {
        assert_eq!(
            narrow(PrimitiveKind::Long, PrimitiveKind::Byte),
            &StackManipulation::simple(
                vec![
                    Instruction::Convert(ConvertOp::LongToInt),
                    Instruction::Convert(ConvertOp::IntToByte),
                ],
                Size::new(-1, 0)
            )
        );
        assert_eq!(
            narrow(PrimitiveKind::Double, PrimitiveKind::Char),
            &StackManipulation::simple(
                vec![
                    Instruction::Convert(ConvertOp::DoubleToInt),
                    Instruction::Convert(ConvertOp::IntToChar),
                ],
                Size::new(-1, 0)
            )
        );
    }

    #[test]
    fn float_to_long_grows_the_stack() {
        assert_eq!(
            narrow(PrimitiveKind::Float, PrimitiveKind::Long),
            &StackManipulation::of_instruction(
                Instruction::Convert(ConvertOp::FloatToLong),
                Size::new(1, 1)
            )
        );
    }

    #[test]
    fn double_narrowings() {
        assert_eq!(
            narrow(PrimitiveKind::Double, PrimitiveKind::Long),
            &StackManipulation::of_instruction(
                Instruction::Convert(ConvertOp::DoubleToLong),
                Size::ZERO
            )
        );
        assert_eq!(
            narrow(PrimitiveKind::Double, PrimitiveKind::Float),
            &StackManipulation::of_instruction(
                Instruction::Convert(ConvertOp::DoubleToFloat),
                Size::new(-1, 0)
            )
        );
    }
}
