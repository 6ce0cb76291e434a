//! The primitive-aware assignment strategy.

use crate::manipulation::StackManipulation;
use crate::types::TypeDescription;

use super::{boxing, unboxing, widening, Assigner, Typing};

/// An assigner that handles every assignment with a primitive on either side
/// and delegates reference-to-reference assignments to the strategy it owns.
///
/// Dispatch is four-way: primitive → primitive uses the widening table (an
/// assignment that would require narrowing is illegal; narrowing is only
/// reachable through an explicit cast), primitive → reference boxes,
/// reference → primitive unboxes, and reference → reference is none of this
/// strategy's business.
///
/// Void on either side is a caller bug here; wrap this strategy in a
/// [`VoidAwareAssigner`](super::VoidAwareAssigner) to handle "no value".
#[derive(Debug, Clone)]
pub struct PrimitiveTypeAwareAssigner<A> {
    reference_assigner: A,
}

impl<A> PrimitiveTypeAwareAssigner<A> {
    /// Creates a new primitive-aware assigner around the reference strategy
    /// it delegates to.
    pub fn new(reference_assigner: A) -> PrimitiveTypeAwareAssigner<A> {
        PrimitiveTypeAwareAssigner { reference_assigner }
    }
}

impl<A: Assigner> Assigner for PrimitiveTypeAwareAssigner<A> {
    fn assign(
        &self,
        source: &TypeDescription,
        target: &TypeDescription,
        typing: Typing,
    ) -> StackManipulation {
        assert!(
            !source.is_void() && !target.is_void(),
            "void must be handled by a void-aware assigner: {source} -> {target}"
        );
        match (source.primitive_kind(), target.primitive_kind()) {
            (Some(source_kind), Some(target_kind)) => {
                widening::widen(source_kind, target_kind).clone()
            }
            (Some(source_kind), None) => {
                boxing::assign_boxed_to(source_kind, target, &self.reference_assigner, typing)
            }
            (None, Some(_)) => unboxing::for_reference_type(source).assign_unboxed_to(
                target,
                &self.reference_assigner,
                typing,
            ),
            (None, None) => self.reference_assigner.assign(source, target, typing),
        }
    }
}
