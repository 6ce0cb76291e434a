//! Type-assignment and value-conversion engine for operand-stack code
//! generation.
//!
//! Given a value sitting on the operand stack with a source type and a
//! desired target type, this crate produces the exact, minimal instruction
//! sequence that converts the value in place and reports the resulting
//! change in stack depth. It reproduces the conversion rules of the modeled
//! stack machine: the primitive widening and narrowing tables, boxing and
//! unboxing through the wrapper types, default-value substitution for the
//! "no value" type, and the composition of all of these into a single
//! strategy that callers invoke uniformly.
//!
//! # Architecture
//!
//! Callers enter through a [`VoidAwareAssigner`], which wraps a
//! [`PrimitiveTypeAwareAssigner`], which in turn owns a caller-supplied
//! reference-conversion strategy (any [`Assigner`]). Reference-to-reference
//! assignability — upcasts, interface checks, dynamic casts — is never
//! decided here; it is delegated to that strategy at every composition point.
//!
//! Every conversion yields a [`StackManipulation`]: a validity flag plus an
//! emit-and-measure operation. Legitimate incompatibility is reported as an
//! invalid manipulation rather than an error, so a method assembler can probe
//! many assignments and report one aggregated diagnostic.
//!
//! # Example
//!
//! ```
//! use opstack_assign::{
//!     Assigner, Instruction, PrimitiveTypeAwareAssigner, StackManipulation,
//!     TypeDescription, Typing, VoidAwareAssigner,
//! };
//!
//! // A reference strategy that only allows identity and upcasts to Object.
//! struct UpcastAssigner;
//!
//! impl Assigner for UpcastAssigner {
//!     fn assign(
//!         &self,
//!         source: &TypeDescription,
//!         target: &TypeDescription,
//!         _typing: Typing,
//!     ) -> StackManipulation {
//!         if source == target || *target == TypeDescription::object() {
//!             StackManipulation::Trivial
//!         } else {
//!             StackManipulation::Illegal
//!         }
//!     }
//! }
//!
//! let assigner = VoidAwareAssigner::new(PrimitiveTypeAwareAssigner::new(UpcastAssigner));
//!
//! // Assigning an int into an Object boxes it.
//! let manipulation = assigner.assign(
//!     &TypeDescription::from_descriptor("I").unwrap(),
//!     &TypeDescription::object(),
//!     Typing::Static,
//! );
//! assert!(manipulation.is_valid());
//!
//! let mut code: Vec<Instruction> = Vec::new();
//! let size = manipulation.apply(&mut code);
//! assert_eq!(size.impact(), 0);
//! assert_eq!(code[0].to_string(), "invokestatic java/lang/Integer.valueOf:(I)Ljava/lang/Integer;");
//! ```

pub mod assign;
pub mod instr;
pub mod manipulation;
pub mod size;
pub mod types;

pub use assign::{Assigner, PrimitiveTypeAwareAssigner, Typing, VoidAwareAssigner};
pub use instr::{ConvertOp, DefaultConst, Instruction, MethodRef};
pub use manipulation::{InstructionSink, StackManipulation};
pub use size::{Size, StackSize};
pub use types::{DescriptorError, PrimitiveKind, TypeDescription};
