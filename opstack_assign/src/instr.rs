//! The instruction vocabulary of emitted conversions.
//!
//! Conversions are expressed as a small, fixed set of operand-stack
//! instructions: the fifteen primitive conversion opcodes, symbolic method
//! invocations for boxing and unboxing, the zero constants, stack discards,
//! and the dynamic cast used by reference-conversion strategies. Method and
//! class references stay symbolic; the instruction sink resolves them against
//! the class it is generating.

use std::fmt;

use serde::Serialize;

/// A symbolic reference to a method, resolved by the instruction sink.
///
/// All references emitted by this crate come from fixed per-kind tables, so
/// the fields are static strings. The descriptor uses the target machine's
/// method descriptor syntax, e.g. `(I)Ljava/lang/Integer;`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MethodRef {
    /// Internal name of the class that declares the method.
    pub owner: &'static str,
    /// The method name.
    pub name: &'static str,
    /// The method descriptor.
    pub descriptor: &'static str,
}

impl fmt::Display for MethodRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}:{}", self.owner, self.name, self.descriptor)
    }
}

/// A primitive-to-primitive conversion opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConvertOp {
    IntToLong,
    IntToFloat,
    IntToDouble,
    LongToInt,
    LongToFloat,
    LongToDouble,
    FloatToInt,
    FloatToLong,
    FloatToDouble,
    DoubleToInt,
    DoubleToLong,
    DoubleToFloat,
    IntToByte,
    IntToChar,
    IntToShort,
}

impl ConvertOp {
    /// The opcode byte of this conversion.
    pub const fn opcode(self) -> u8 {
        match self {
            ConvertOp::IntToLong => 0x85,
            ConvertOp::IntToFloat => 0x86,
            ConvertOp::IntToDouble => 0x87,
            ConvertOp::LongToInt => 0x88,
            ConvertOp::LongToFloat => 0x89,
            ConvertOp::LongToDouble => 0x8a,
            ConvertOp::FloatToInt => 0x8b,
            ConvertOp::FloatToLong => 0x8c,
            ConvertOp::FloatToDouble => 0x8d,
            ConvertOp::DoubleToInt => 0x8e,
            ConvertOp::DoubleToLong => 0x8f,
            ConvertOp::DoubleToFloat => 0x90,
            ConvertOp::IntToByte => 0x91,
            ConvertOp::IntToChar => 0x92,
            ConvertOp::IntToShort => 0x93,
        }
    }

    /// The assembler mnemonic of this conversion.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            ConvertOp::IntToLong => "i2l",
            ConvertOp::IntToFloat => "i2f",
            ConvertOp::IntToDouble => "i2d",
            ConvertOp::LongToInt => "l2i",
            ConvertOp::LongToFloat => "l2f",
            ConvertOp::LongToDouble => "l2d",
            ConvertOp::FloatToInt => "f2i",
            ConvertOp::FloatToLong => "f2l",
            ConvertOp::FloatToDouble => "f2d",
            ConvertOp::DoubleToInt => "d2i",
            ConvertOp::DoubleToLong => "d2l",
            ConvertOp::DoubleToFloat => "d2f",
            ConvertOp::IntToByte => "i2b",
            ConvertOp::IntToChar => "i2c",
            ConvertOp::IntToShort => "i2s",
        }
    }
}

/// A constant-push instruction producing a type's default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DefaultConst {
    /// `0` for the single-width integral kinds and `false` for boolean.
    IConst0,
    /// `0L`.
    LConst0,
    /// `0.0f`.
    FConst0,
    /// `0.0`.
    DConst0,
    /// The null reference.
    AConstNull,
}

impl DefaultConst {
    pub const fn opcode(self) -> u8 {
        match self {
            DefaultConst::AConstNull => 0x01,
            DefaultConst::IConst0 => 0x03,
            DefaultConst::LConst0 => 0x09,
            DefaultConst::FConst0 => 0x0b,
            DefaultConst::DConst0 => 0x0e,
        }
    }

    pub const fn mnemonic(self) -> &'static str {
        match self {
            DefaultConst::AConstNull => "aconst_null",
            DefaultConst::IConst0 => "iconst_0",
            DefaultConst::LConst0 => "lconst_0",
            DefaultConst::FConst0 => "fconst_0",
            DefaultConst::DConst0 => "dconst_0",
        }
    }
}

/// A single operand-stack instruction written to an instruction sink.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Instruction {
    /// A primitive conversion such as `i2l`.
    Convert(ConvertOp),
    /// A static method invocation, used for the boxing factories.
    InvokeStatic(MethodRef),
    /// A virtual method invocation, used for the unboxing accessors.
    InvokeVirtual(MethodRef),
    /// A default-value constant push.
    ConstDefault(DefaultConst),
    /// Discard one single-width slot.
    Pop,
    /// Discard one double-width value (two slots).
    Pop2,
    /// A dynamic cast to the named class, emitted by reference-conversion
    /// strategies supplied by the caller.
    CheckCast(String),
}

impl Instruction {
    /// The opcode byte of this instruction.
    pub fn opcode(&self) -> u8 {
        match self {
            Instruction::Convert(op) => op.opcode(),
            Instruction::InvokeStatic(_) => 0xb8,
            Instruction::InvokeVirtual(_) => 0xb6,
            Instruction::ConstDefault(constant) => constant.opcode(),
            Instruction::Pop => 0x57,
            Instruction::Pop2 => 0x58,
            Instruction::CheckCast(_) => 0xc0,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Convert(op) => f.write_str(op.mnemonic()),
            Instruction::InvokeStatic(method) => write!(f, "invokestatic {}", method),
            Instruction::InvokeVirtual(method) => write!(f, "invokevirtual {}", method),
            Instruction::ConstDefault(constant) => f.write_str(constant.mnemonic()),
            Instruction::Pop => f.write_str("pop"),
            Instruction::Pop2 => f.write_str("pop2"),
            Instruction::CheckCast(class) => write!(f, "checkcast {}", class),
        }
    }
}
