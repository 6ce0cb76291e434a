//! Shared reference-strategy doubles and helpers for integration tests.

use opstack_assign::{
    Assigner, Instruction, Size, StackManipulation, TypeDescription, Typing,
};

/// A reference strategy that permits identity conversions and upcasts to
/// Object, and nothing else.
#[derive(Debug)]
pub struct UpcastAssigner;

impl Assigner for UpcastAssigner {
    fn assign(
        &self,
        source: &TypeDescription,
        target: &TypeDescription,
        _typing: Typing,
    ) -> StackManipulation {
        if source == target || *target == TypeDescription::object() {
            StackManipulation::Trivial
        } else {
            StackManipulation::Illegal
        }
    }
}

/// A reference strategy that additionally permits dynamically checked
/// downcasts under [`Typing::Dynamic`], refusing them under static typing.
#[derive(Debug)]
pub struct CheckcastAssigner;

impl Assigner for CheckcastAssigner {
    fn assign(
        &self,
        source: &TypeDescription,
        target: &TypeDescription,
        typing: Typing,
    ) -> StackManipulation {
        if source == target || *target == TypeDescription::object() {
            return StackManipulation::Trivial;
        }
        match (typing, target) {
            (Typing::Dynamic, TypeDescription::Reference(class)) => {
                StackManipulation::of_instruction(
                    Instruction::CheckCast(class.clone()),
                    Size::ZERO,
                )
            }
            _ => StackManipulation::Illegal,
        }
    }
}

/// Applies a manipulation into a fresh sink, returning the recorded
/// instruction stream and the measured size.
pub fn recorded(manipulation: &StackManipulation) -> (Vec<Instruction>, Size) {
    let mut code: Vec<Instruction> = Vec::new();
    let size = manipulation.apply(&mut code);
    (code, size)
}
