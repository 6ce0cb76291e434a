//! The void-aware assignment strategy.

use crate::manipulation::StackManipulation;
use crate::types::TypeDescription;

use super::{Assigner, Typing};

/// An assigner that handles the "no value" type on either side of an
/// assignment and delegates everything else to the strategy it owns.
///
/// Assigning void into a typed target substitutes the target's default value,
/// but only under [`Typing::Dynamic`]; under static typing the absence of a
/// value where one is required is illegal. Assigning a value into void
/// discards it with a pop sized to the value's slot category.
#[derive(Debug, Clone)]
pub struct VoidAwareAssigner<A> {
    chained: A,
}

impl<A> VoidAwareAssigner<A> {
    /// Creates a new void-aware assigner around the strategy that handles
    /// non-void assignments.
    pub fn new(chained: A) -> VoidAwareAssigner<A> {
        VoidAwareAssigner { chained }
    }
}

impl<A: Assigner> Assigner for VoidAwareAssigner<A> {
    fn assign(
        &self,
        source: &TypeDescription,
        target: &TypeDescription,
        typing: Typing,
    ) -> StackManipulation {
        match (source.is_void(), target.is_void()) {
            (true, true) => StackManipulation::Trivial,
            (true, false) => match typing {
                Typing::Dynamic => StackManipulation::default_value(target),
                Typing::Static => StackManipulation::Illegal,
            },
            (false, true) => StackManipulation::removal(source.stack_size()),
            (false, false) => self.chained.assign(source, target, typing),
        }
    }
}
