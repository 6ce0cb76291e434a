//! Assignment strategies and the contracts between them.
//!
//! An [`Assigner`] turns a (source type, target type, typing mode) triple
//! into a [`StackManipulation`]. The two strategies in this module compose
//! around a caller-supplied reference strategy: the void-aware assigner
//! handles "no value" on either side, the primitive-aware assigner handles
//! widening, boxing and unboxing, and everything reference-to-reference is
//! delegated outward. Chains are built outward-in at setup time, each
//! strategy owning the next.

use serde::Serialize;

use crate::manipulation::StackManipulation;
use crate::types::TypeDescription;

pub mod boxing;
pub mod narrowing;
pub mod unboxing;
pub mod widening;

mod primitive;
mod void;

pub use primitive::PrimitiveTypeAwareAssigner;
pub use void::VoidAwareAssigner;

/// Whether an assignment may use conversions that are only sound under a
/// runtime check or a default-value substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Typing {
    /// Only conversions defined by the widening, boxing and unboxing rules
    /// are permitted; a missing value where one is required is illegal.
    Static,
    /// Additionally permits substituting a target type's default value when
    /// no source value exists, and signals to the reference strategy that a
    /// dynamically checked cast is acceptable.
    Dynamic,
}

impl Typing {
    /// Selects a typing mode from a flag.
    pub fn of(dynamic: bool) -> Typing {
        if dynamic {
            Typing::Dynamic
        } else {
            Typing::Static
        }
    }
}

/// A strategy that converts a value on the operand stack from a source type
/// to a target type.
///
/// Implemented by the strategies in this module and by the caller-supplied
/// reference-conversion strategy they delegate to. A legitimately impossible
/// assignment is reported as [`StackManipulation::Illegal`], never as a panic.
pub trait Assigner {
    fn assign(
        &self,
        source: &TypeDescription,
        target: &TypeDescription,
        typing: Typing,
    ) -> StackManipulation;
}

impl<A: Assigner + ?Sized> Assigner for &A {
    fn assign(
        &self,
        source: &TypeDescription,
        target: &TypeDescription,
        typing: Typing,
    ) -> StackManipulation {
        (**self).assign(source, target, typing)
    }
}
