//! Boxing of primitive values into their wrapper types.

use crate::instr::Instruction;
use crate::manipulation::StackManipulation;
use crate::size::Size;
use crate::types::{PrimitiveKind, TypeDescription};

use super::{Assigner, Typing};

/// Boxes a primitive of `source` kind and assigns the boxed value onward to
/// `target` through the supplied reference strategy.
///
/// The boxing invocation itself never fails for any non-void primitive kind;
/// the composed manipulation is valid iff the chained reference conversion
/// is. The boxing instruction is emitted before anything the reference
/// strategy emits.
pub fn assign_boxed_to(
    source: PrimitiveKind,
    target: &TypeDescription,
    reference_assigner: &dyn Assigner,
    typing: Typing,
) -> StackManipulation {
    let chained = reference_assigner.assign(&TypeDescription::wrapper(source), target, typing);
    StackManipulation::compound(vec![boxing(source), chained])
}

/// The bare boxing invocation: consumes the primitive's slots and produces
/// one reference slot.
fn boxing(kind: PrimitiveKind) -> StackManipulation {
    StackManipulation::of_instruction(
        Instruction::InvokeStatic(kind.boxing_method()),
        Size::new(1 - kind.stack_size().slots(), 0),
    )
}
