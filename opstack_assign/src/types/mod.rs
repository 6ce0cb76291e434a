//! The type model driving assignment dispatch.
//!
//! A [`TypeDescription`] is the crate's answer to the questions conversion
//! logic needs to ask about a type: is it void, is it primitive, which
//! primitive kind, is it exactly a wrapper class, and how many stack slots
//! does it occupy. Reference types are carried by internal name only;
//! assignability between reference types is the business of the
//! caller-supplied reference strategy, never of this crate.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::size::StackSize;

mod primitive;
#[cfg(test)]
mod tests;

pub use primitive::PrimitiveKind;

/// Internal name of the root reference type.
pub const OBJECT_CLASS: &str = "java/lang/Object";

/// A description of a type as seen by the assignment engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum TypeDescription {
    /// The "no value" type.
    Void,
    /// A non-void primitive type.
    Primitive(PrimitiveKind),
    /// A reference type, identified by its internal name. Array types keep
    /// their descriptor form (`[I`, `[Ljava/lang/Object;`) as the target
    /// machine does.
    Reference(String),
}

impl TypeDescription {
    /// A reference type with the given internal name.
    pub fn reference(internal_name: impl Into<String>) -> TypeDescription {
        TypeDescription::Reference(internal_name.into())
    }

    /// The root reference type.
    pub fn object() -> TypeDescription {
        TypeDescription::reference(OBJECT_CLASS)
    }

    /// The wrapper type of a primitive kind.
    pub fn wrapper(kind: PrimitiveKind) -> TypeDescription {
        TypeDescription::reference(kind.wrapper_class())
    }

    pub fn is_void(&self) -> bool {
        matches!(self, TypeDescription::Void)
    }

    /// Whether this is a non-void primitive type. `void` is not primitive in
    /// the sense of this crate: it participates in no conversion table.
    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeDescription::Primitive(_))
    }

    /// The primitive kind of this type, if it is a non-void primitive.
    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self {
            TypeDescription::Primitive(kind) => Some(*kind),
            _ => None,
        }
    }

    /// The primitive kind whose wrapper class this reference type is, if any.
    pub fn wrapper_kind(&self) -> Option<PrimitiveKind> {
        match self {
            TypeDescription::Reference(name) => PrimitiveKind::from_wrapper_class(name),
            _ => None,
        }
    }

    /// The number of operand-stack slots a value of this type occupies.
    pub fn stack_size(&self) -> StackSize {
        match self {
            TypeDescription::Void => StackSize::Zero,
            TypeDescription::Primitive(kind) => kind.stack_size(),
            TypeDescription::Reference(_) => StackSize::Single,
        }
    }

    /// Parses a field descriptor such as `I`, `V`, `Ljava/lang/Object;` or
    /// `[[D` into a type description.
    pub fn from_descriptor(descriptor: &str) -> Result<TypeDescription, DescriptorError> {
        let (ty, rest) = TypeDescription::parse_prefix(descriptor)?;
        if rest.is_empty() {
            Ok(ty)
        } else {
            Err(DescriptorError::TrailingInput(descriptor.to_string()))
        }
    }

    /// Parses one descriptor from the front of `input`, returning the parsed
    /// type and the unconsumed remainder.
    fn parse_prefix(input: &str) -> Result<(TypeDescription, &str), DescriptorError> {
        let mut chars = input.chars();
        let tag = chars.next().ok_or(DescriptorError::Empty)?;
        let rest = chars.as_str();
        match tag {
            'V' => Ok((TypeDescription::Void, rest)),
            'Z' => Ok((TypeDescription::Primitive(PrimitiveKind::Boolean), rest)),
            'B' => Ok((TypeDescription::Primitive(PrimitiveKind::Byte), rest)),
            'S' => Ok((TypeDescription::Primitive(PrimitiveKind::Short), rest)),
            'C' => Ok((TypeDescription::Primitive(PrimitiveKind::Char), rest)),
            'I' => Ok((TypeDescription::Primitive(PrimitiveKind::Int), rest)),
            'J' => Ok((TypeDescription::Primitive(PrimitiveKind::Long), rest)),
            'F' => Ok((TypeDescription::Primitive(PrimitiveKind::Float), rest)),
            'D' => Ok((TypeDescription::Primitive(PrimitiveKind::Double), rest)),
            'L' => match rest.find(';') {
                Some(end) => Ok((
                    TypeDescription::reference(&rest[..end]),
                    &rest[end + 1..],
                )),
                None => Err(DescriptorError::UnterminatedClass(input.to_string())),
            },
            '[' => {
                let (element, remainder) = TypeDescription::parse_prefix(rest)?;
                if element.is_void() {
                    return Err(DescriptorError::ArrayOfVoid(input.to_string()));
                }
                let consumed = &input[..input.len() - remainder.len()];
                Ok((TypeDescription::reference(consumed), remainder))
            }
            other => Err(DescriptorError::UnknownTag(other)),
        }
    }

    /// The field descriptor of this type.
    pub fn descriptor(&self) -> String {
        match self {
            TypeDescription::Void => "V".to_string(),
            TypeDescription::Primitive(kind) => kind.descriptor().to_string(),
            TypeDescription::Reference(name) => {
                if name.starts_with('[') {
                    name.clone()
                } else {
                    format!("L{name};")
                }
            }
        }
    }
}

impl fmt::Display for TypeDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescription::Void => f.write_str("void"),
            TypeDescription::Primitive(kind) => f.write_str(kind.name()),
            TypeDescription::Reference(name) => f.write_str(name),
        }
    }
}

/// A malformed field descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    #[error("empty type descriptor")]
    Empty,
    #[error("unknown type descriptor tag: {0:?}")]
    UnknownTag(char),
    #[error("unterminated class descriptor: {0}")]
    UnterminatedClass(String),
    #[error("array descriptor of void: {0}")]
    ArrayOfVoid(String),
    #[error("trailing characters after type descriptor: {0}")]
    TrailingInput(String),
}
