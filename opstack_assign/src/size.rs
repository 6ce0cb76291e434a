//! Operand-stack slot accounting.
//!
//! Every conversion this crate emits is measured in slot units: the target
//! machine gives most values a single operand-stack slot and gives the two
//! double-width numeric kinds (`long` and `double`) two. A [`Size`] records
//! both the net slot impact of an instruction sequence and the maximal
//! intermediate growth it causes, which a method assembler sums over a whole
//! body to compute the stack depth the generated code must reserve.

use serde::Serialize;

/// The number of operand-stack slots a value occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StackSize {
    /// No slots; the width of `void`.
    Zero,
    /// One slot; all reference types and single-width primitives.
    Single,
    /// Two slots; `long` and `double`.
    Double,
}

impl StackSize {
    /// The slot count as a signed number, usable directly in size arithmetic.
    pub const fn slots(self) -> i32 {
        match self {
            StackSize::Zero => 0,
            StackSize::Single => 1,
            StackSize::Double => 2,
        }
    }

    /// The size of pushing a value of this width onto the stack.
    pub const fn to_increasing_size(self) -> Size {
        Size::new(self.slots(), self.slots())
    }

    /// The size of removing a value of this width from the stack.
    ///
    /// Removal never grows the stack, so the maximal component is zero.
    pub const fn to_decreasing_size(self) -> Size {
        Size::new(-self.slots(), 0)
    }
}

/// The effect of an instruction sequence on the operand stack: its net slot
/// impact and the maximal intermediate growth relative to the stack depth at
/// which the sequence starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Size {
    impact: i32,
    maximal: i32,
}

impl Size {
    /// The size of a sequence that leaves the stack untouched.
    pub const ZERO: Size = Size::new(0, 0);

    /// Creates a new size from a net impact and a maximal growth.
    pub const fn new(impact: i32, maximal: i32) -> Size {
        Size { impact, maximal }
    }

    /// The net change in stack depth after the sequence has run.
    pub const fn impact(self) -> i32 {
        self.impact
    }

    /// The largest stack growth observed at any point during the sequence.
    pub const fn maximal(self) -> i32 {
        self.maximal
    }

    /// The size of running `self` followed by `other`.
    ///
    /// The second sequence starts at the depth `self` left behind, so its
    /// maximal growth is measured on top of `self`'s net impact.
    pub fn aggregate(self, other: Size) -> Size {
        Size {
            impact: self.impact + other.impact,
            maximal: self.maximal.max(self.impact + other.maximal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_counts() {
        assert_eq!(StackSize::Zero.slots(), 0);
        assert_eq!(StackSize::Single.slots(), 1);
        assert_eq!(StackSize::Double.slots(), 2);
    }

    #[test]
    fn increasing_size_grows_by_width() {
        assert_eq!(StackSize::Single.to_increasing_size(), Size::new(1, 1));
        assert_eq!(StackSize::Double.to_increasing_size(), Size::new(2, 2));
        assert_eq!(StackSize::Zero.to_increasing_size(), Size::ZERO);
    }

    #[test]
    fn decreasing_size_never_grows() {
        assert_eq!(StackSize::Single.to_decreasing_size(), Size::new(-1, 0));
        assert_eq!(StackSize::Double.to_decreasing_size(), Size::new(-2, 0));
    }

    #[test]
    fn aggregate_adds_impacts() {
        let first = Size::new(2, 2);
        let second = Size::new(-1, 0);
        assert_eq!(first.aggregate(second), Size::new(1, 2));
    }

    #[test]
    fn aggregate_measures_growth_on_top_of_prior_impact() {
        // Push two slots, then a sequence that itself peaks at +2: the
        // composite peak is 2 + 2 = 4.
        let push_long = Size::new(2, 2);
        let push_another = Size::new(2, 2);
        assert_eq!(push_long.aggregate(push_another), Size::new(4, 4));

        // A net-negative prefix lowers the base for the second peak.
        let pop = Size::new(-1, 0);
        let push = Size::new(1, 1);
        assert_eq!(pop.aggregate(push), Size::new(0, 0));
    }

    #[test]
    fn aggregate_keeps_earlier_peak() {
        let spike = Size::new(0, 3);
        let flat = Size::ZERO;
        assert_eq!(spike.aggregate(flat), Size::new(0, 3));
    }
}
