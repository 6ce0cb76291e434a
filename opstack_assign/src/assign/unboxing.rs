//! Unboxing of reference values into primitives.
//!
//! Unboxing comes in two shapes. When the source reference type is statically
//! known to be a wrapper, the value is unboxed directly and the resulting
//! primitive is widened to the requested target kind. When the source's
//! reference type is anything else, the wrapper to unbox from cannot be known
//! until the target primitive is: resolution is deferred, and at resolution
//! time the source is first handed to the reference strategy for a conversion
//! to the wrapper type implied by the target kind, then unboxed.

use crate::instr::Instruction;
use crate::manipulation::StackManipulation;
use crate::types::{PrimitiveKind, TypeDescription};

use super::{widening, Assigner, Typing};

/// A pending unboxing operation, created per assignment and resolved once the
/// target primitive kind is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnboxingResponsible {
    /// The source is a known wrapper type of the given kind.
    Explicit(PrimitiveKind),
    /// The source is an arbitrary reference type, captured until the target
    /// kind determines which wrapper to convert toward.
    Implicit(TypeDescription),
}

/// Selects the unboxing responsibility for a reference type.
///
/// # Panics
///
/// Panics when `source` is primitive or void; unboxing a non-reference is a
/// caller bug.
pub fn for_reference_type(source: &TypeDescription) -> UnboxingResponsible {
    assert!(
        matches!(source, TypeDescription::Reference(_)),
        "expected a reference type instead of {source}"
    );
    match source.wrapper_kind() {
        Some(kind) => UnboxingResponsible::Explicit(kind),
        None => UnboxingResponsible::Implicit(source.clone()),
    }
}

impl UnboxingResponsible {
    /// Unboxes the represented source and assigns the unboxed value to
    /// `target`, using the reference strategy for any reference-level leg.
    ///
    /// The composition is invalid if the widening step (explicit) or the
    /// reference conversion to the wrapper type (implicit) is invalid.
    pub fn assign_unboxed_to(
        &self,
        target: &TypeDescription,
        reference_assigner: &dyn Assigner,
        typing: Typing,
    ) -> StackManipulation {
        match self {
            UnboxingResponsible::Explicit(kind) => {
                let widened = widening::widen(*kind, PrimitiveKind::of(target)).clone();
                StackManipulation::compound(vec![unboxing(*kind), widened])
            }
            UnboxingResponsible::Implicit(source) => {
                let kind = PrimitiveKind::of(target);
                let to_wrapper =
                    reference_assigner.assign(source, &TypeDescription::wrapper(kind), typing);
                StackManipulation::compound(vec![to_wrapper, unboxing(kind)])
            }
        }
    }
}

/// The bare unboxing invocation: consumes one reference slot and produces the
/// primitive's slots.
fn unboxing(kind: PrimitiveKind) -> StackManipulation {
    let growth = kind.stack_size().slots() - 1;
    StackManipulation::of_instruction(
        Instruction::InvokeVirtual(kind.unboxing_method()),
        crate::size::Size::new(growth, growth),
    )
}
