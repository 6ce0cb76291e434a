//! The eight primitive kinds and their fixed per-kind metadata.

use serde::Serialize;

use crate::instr::MethodRef;
use crate::size::StackSize;

use super::TypeDescription;

/// One of the eight non-void primitive kinds of the target machine.
///
/// Each kind carries constant metadata: its wrapper class, the boxing factory
/// and unboxing accessor with their exact descriptors, and its slot width.
/// The enum is closed, so conversion tables indexed by kind are checked for
/// exhaustiveness by the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveKind {
    /// All kinds in table order. Row and column indices of the conversion
    /// tables follow this order.
    pub const ALL: [PrimitiveKind; 8] = [
        PrimitiveKind::Boolean,
        PrimitiveKind::Byte,
        PrimitiveKind::Short,
        PrimitiveKind::Char,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
    ];

    /// The source-language name of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
        }
    }

    /// The single-character field descriptor of this kind.
    pub const fn descriptor(self) -> char {
        match self {
            PrimitiveKind::Boolean => 'Z',
            PrimitiveKind::Byte => 'B',
            PrimitiveKind::Short => 'S',
            PrimitiveKind::Char => 'C',
            PrimitiveKind::Int => 'I',
            PrimitiveKind::Long => 'J',
            PrimitiveKind::Float => 'F',
            PrimitiveKind::Double => 'D',
        }
    }

    /// The number of operand-stack slots a value of this kind occupies.
    pub const fn stack_size(self) -> StackSize {
        match self {
            PrimitiveKind::Long | PrimitiveKind::Double => StackSize::Double,
            _ => StackSize::Single,
        }
    }

    /// The internal name of this kind's wrapper class.
    pub const fn wrapper_class(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "java/lang/Boolean",
            PrimitiveKind::Byte => "java/lang/Byte",
            PrimitiveKind::Short => "java/lang/Short",
            PrimitiveKind::Char => "java/lang/Character",
            PrimitiveKind::Int => "java/lang/Integer",
            PrimitiveKind::Long => "java/lang/Long",
            PrimitiveKind::Float => "java/lang/Float",
            PrimitiveKind::Double => "java/lang/Double",
        }
    }

    /// The static factory that boxes a value of this kind into its wrapper.
    pub const fn boxing_method(self) -> MethodRef {
        let descriptor = match self {
            PrimitiveKind::Boolean => "(Z)Ljava/lang/Boolean;",
            PrimitiveKind::Byte => "(B)Ljava/lang/Byte;",
            PrimitiveKind::Short => "(S)Ljava/lang/Short;",
            PrimitiveKind::Char => "(C)Ljava/lang/Character;",
            PrimitiveKind::Int => "(I)Ljava/lang/Integer;",
            PrimitiveKind::Long => "(J)Ljava/lang/Long;",
            PrimitiveKind::Float => "(F)Ljava/lang/Float;",
            PrimitiveKind::Double => "(D)Ljava/lang/Double;",
        };
        MethodRef {
            owner: self.wrapper_class(),
            name: "valueOf",
            descriptor,
        }
    }

    /// The virtual accessor that unboxes a wrapper into a value of this kind.
    pub const fn unboxing_method(self) -> MethodRef {
        let (name, descriptor) = match self {
            PrimitiveKind::Boolean => ("booleanValue", "()Z"),
            PrimitiveKind::Byte => ("byteValue", "()B"),
            PrimitiveKind::Short => ("shortValue", "()S"),
            PrimitiveKind::Char => ("charValue", "()C"),
            PrimitiveKind::Int => ("intValue", "()I"),
            PrimitiveKind::Long => ("longValue", "()J"),
            PrimitiveKind::Float => ("floatValue", "()F"),
            PrimitiveKind::Double => ("doubleValue", "()D"),
        };
        MethodRef {
            owner: self.wrapper_class(),
            name,
            descriptor,
        }
    }

    /// Recognizes a wrapper class by its internal name.
    pub fn from_wrapper_class(internal_name: &str) -> Option<PrimitiveKind> {
        PrimitiveKind::ALL
            .into_iter()
            .find(|kind| kind.wrapper_class() == internal_name)
    }

    /// The kind denoted by a type description.
    ///
    /// # Panics
    ///
    /// Panics when the description is not a non-void primitive type. Passing
    /// such a type to a primitive conversion is a caller bug, not a
    /// legitimately incompatible assignment.
    pub fn of(ty: &TypeDescription) -> PrimitiveKind {
        match ty {
            TypeDescription::Primitive(kind) => *kind,
            _ => panic!("not a non-void primitive type: {ty}"),
        }
    }
}
