//! The uniform result type of every conversion delegate.
//!
//! A [`StackManipulation`] is either trivially valid, illegal, a concrete
//! instruction sequence with a precomputed size, or an ordered composition of
//! other manipulations. Illegality is a value, not an error: an assignment
//! that is legitimately impossible yields [`StackManipulation::Illegal`], so
//! callers can probe many conversions and aggregate diagnostics without
//! unwinding. Applying an invalid manipulation, by contrast, is a caller bug
//! and panics before anything is emitted.

use serde::Serialize;

use crate::instr::Instruction;
use crate::size::{Size, StackSize};
use crate::types::TypeDescription;

/// A sink that receives the instructions of an applied manipulation.
///
/// Instructions carry symbolic class and method references; resolving them
/// against the class being generated is the sink's concern.
pub trait InstructionSink {
    fn write(&mut self, instruction: &Instruction);
}

/// The simplest sink: a recorded instruction stream.
impl InstructionSink for Vec<Instruction> {
    fn write(&mut self, instruction: &Instruction) {
        self.push(instruction.clone());
    }
}

/// A change to the operand stack that can be validated, emitted and measured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum StackManipulation {
    /// The identity conversion: always valid, emits nothing.
    Trivial,
    /// A conversion that is not permitted. Check [`is_valid`] before
    /// applying; an illegal manipulation emits nothing.
    ///
    /// [`is_valid`]: StackManipulation::is_valid
    Illegal,
    /// A concrete instruction sequence and its net effect on the stack.
    Simple {
        instructions: Vec<Instruction>,
        size: Size,
    },
    /// An ordered composition, valid iff every part is valid.
    Compound(Vec<StackManipulation>),
}

impl StackManipulation {
    /// A manipulation emitting the given instructions with the given size.
    pub fn simple(instructions: Vec<Instruction>, size: Size) -> StackManipulation {
        StackManipulation::Simple { instructions, size }
    }

    /// A manipulation emitting a single instruction.
    pub fn of_instruction(instruction: Instruction, size: Size) -> StackManipulation {
        StackManipulation::simple(vec![instruction], size)
    }

    /// Composes manipulations in order.
    pub fn compound(parts: Vec<StackManipulation>) -> StackManipulation {
        StackManipulation::Compound(parts)
    }

    /// A manipulation that discards the topmost value of the given width.
    pub fn removal(size: StackSize) -> StackManipulation {
        match size {
            StackSize::Zero => StackManipulation::Trivial,
            StackSize::Single => {
                StackManipulation::of_instruction(Instruction::Pop, size.to_decreasing_size())
            }
            StackSize::Double => {
                StackManipulation::of_instruction(Instruction::Pop2, size.to_decreasing_size())
            }
        }
    }

    /// A manipulation that pushes the default value of a type: numeric zero,
    /// `false`, or the null reference. For void this is the identity.
    pub fn default_value(ty: &TypeDescription) -> StackManipulation {
        use crate::instr::DefaultConst;
        use crate::types::PrimitiveKind;

        let constant = match ty {
            TypeDescription::Void => return StackManipulation::Trivial,
            TypeDescription::Reference(_) => DefaultConst::AConstNull,
            TypeDescription::Primitive(kind) => match kind {
                PrimitiveKind::Long => DefaultConst::LConst0,
                PrimitiveKind::Float => DefaultConst::FConst0,
                PrimitiveKind::Double => DefaultConst::DConst0,
                _ => DefaultConst::IConst0,
            },
        };
        StackManipulation::of_instruction(
            Instruction::ConstDefault(constant),
            ty.stack_size().to_increasing_size(),
        )
    }

    /// Whether this manipulation may be applied.
    pub fn is_valid(&self) -> bool {
        match self {
            StackManipulation::Trivial | StackManipulation::Simple { .. } => true,
            StackManipulation::Illegal => false,
            StackManipulation::Compound(parts) => parts.iter().all(StackManipulation::is_valid),
        }
    }

    /// Writes this manipulation's instructions to the sink and returns its
    /// size. Instructions appear in exactly the order of composition.
    ///
    /// # Panics
    ///
    /// Panics when the manipulation is invalid, before any instruction is
    /// written. Callers must check [`is_valid`] first or propagate invalidity
    /// upward instead of applying.
    ///
    /// [`is_valid`]: StackManipulation::is_valid
    pub fn apply(&self, sink: &mut dyn InstructionSink) -> Size {
        assert!(self.is_valid(), "cannot apply an invalid stack manipulation");
        self.apply_unchecked(sink)
    }

    fn apply_unchecked(&self, sink: &mut dyn InstructionSink) -> Size {
        match self {
            StackManipulation::Trivial => Size::ZERO,
            StackManipulation::Illegal => {
                unreachable!("validity is checked before application")
            }
            StackManipulation::Simple { instructions, size } => {
                for instruction in instructions {
                    sink.write(instruction);
                }
                *size
            }
            StackManipulation::Compound(parts) => parts
                .iter()
                .fold(Size::ZERO, |size, part| {
                    size.aggregate(part.apply_unchecked(sink))
                }),
        }
    }
}
