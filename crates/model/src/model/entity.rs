//! Entity records and typed ids.
//!
//! Every entity kind lives in an insertion-ordered table on the
//! [`Model`](crate::model::Model); records reference each other through the
//! typed index newtypes defined here rather than through pointers, which
//! sidesteps the reference cycles between extensions, opcodes, and
//! compression rules and keeps the whole model trivially serializable.

use serde::Serialize;

use crate::common::bitspec::BitSpec;
use crate::model::mask::OpcodeMask;

/// Index of an [`Arg`] in the model's argument table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ArgId(pub usize);

/// Index of an [`EnumDef`] in the model's enum table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct EnumId(pub usize);

/// Index of a [`TypeDef`] in the model's type table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TypeId(pub usize);

/// Index of a [`Format`] in the model's format table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct FormatId(pub usize);

/// Index of a [`Codec`] in the model's codec table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CodecId(pub usize);

/// Index of an [`Extension`] in the model's extension table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ExtensionId(pub usize);

/// Index of a [`Register`] in the model's register table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct RegisterId(pub usize);

/// Index of a [`Csr`] in the model's CSR table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CsrId(pub usize);

/// Index of an [`Opcode`] in the model's opcode table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct OpcodeId(pub usize);

/// Index of a [`Constraint`] in the model's constraint table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ConstraintId(pub usize);

/// Index of a [`Compression`] in the model's compression table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CompressionId(pub usize);

/// An operand argument: a named field of the encoded instruction.
#[derive(Clone, Debug, Serialize)]
pub struct Arg {
    /// Argument name (e.g. `rd`, `imm12`).
    pub name: String,
    /// Human-readable label.
    pub label: String,
    /// Operand type tag (e.g. `ireg`, `simm`).
    pub arg_type: String,
    /// Placement of the argument's bits in the encoding.
    pub bitspec: BitSpec,
    /// Formatter hint for disassembler output.
    pub formatter: String,
    /// Default-value hint.
    pub default: String,
}

/// A named enumeration value within a group.
#[derive(Clone, Debug, Serialize)]
pub struct EnumDef {
    /// Value name.
    pub name: String,
    /// Enumeration group the value belongs to.
    pub group: String,
    /// Numeric value.
    pub value: i64,
    /// Human-readable description.
    pub description: String,
}

/// One labelled bit-spec part of a [`TypeDef`].
#[derive(Clone, Debug, Serialize)]
pub struct TypePart {
    /// Field placement.
    pub spec: BitSpec,
    /// Field label; empty when the part is unnamed.
    pub label: String,
}

/// An encoded-instruction shape (e.g. the `r` or `i` layout).
#[derive(Clone, Debug, Serialize)]
pub struct TypeDef {
    /// Type name; codecs derive their type from this by name prefix.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Ordered field layout.
    pub parts: Vec<TypePart>,
}

/// A symbolic operand layout (e.g. `rd,rs1,rs2`).
#[derive(Clone, Debug, Serialize)]
pub struct Format {
    /// Format name.
    pub name: String,
    /// Operand-layout token; may be empty.
    pub operands: String,
}

/// A named encoding shape grouping opcodes that share a format.
#[derive(Clone, Debug, Serialize)]
pub struct Codec {
    /// Codec name; the prefix up to `_` or `+` names the codec's type.
    pub name: String,
    /// Name of the format the codec packs its operands in.
    pub format: String,
}

impl Codec {
    /// Returns the codec's type name: the name prefix up to the first `_`,
    /// or failing that the first `+`, or the whole name.
    pub fn type_name(&self) -> &str {
        match self.name.find('_').or_else(|| self.name.find('+')) {
            Some(pos) => &self.name[..pos],
            None => &self.name,
        }
    }
}

/// An ISA extension such as `rv64i`, identified by prefix, width, and alpha
/// code.
#[derive(Clone, Debug, Serialize)]
pub struct Extension {
    /// Full extension name, `prefix + width + alpha` (e.g. `rv64i`).
    pub name: String,
    /// ISA prefix (e.g. `rv`).
    pub prefix: String,
    /// Register width in bits (32, 64, or 128).
    pub isa_width: u32,
    /// Single-letter extension code (e.g. `i`).
    pub alpha_code: String,
    /// Instruction width in bits (16 for compressed extensions). Stored as
    /// scanned; the loader does not validate the value.
    pub insn_width: u32,
    /// Human-readable description.
    pub description: String,
    /// Opcodes first declared under this extension, in file order.
    pub opcodes: Vec<OpcodeId>,
}

/// An architectural register.
#[derive(Clone, Debug, Serialize)]
pub struct Register {
    /// Register name (e.g. `x2`).
    pub name: String,
    /// Register number.
    pub number: i64,
    /// ABI alias (e.g. `sp`).
    pub alias: String,
    /// Register type tag (e.g. `ireg`, `freg`).
    pub reg_type: String,
    /// Human-readable description.
    pub description: String,
}

/// A control and status register described by the metadata.
#[derive(Clone, Debug, Serialize)]
pub struct Csr {
    /// CSR number.
    pub number: i64,
    /// Access-permission tag (e.g. `urw`, `mro`).
    pub access: String,
    /// CSR name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
}

/// An opcode with its encoding masks and resolved cross-references.
///
/// `key` is globally unique; `name` (the mnemonic) recurs when the same
/// mnemonic is declared by several extensions, in which case the keys carry
/// a `.extension` suffix.
#[derive(Clone, Debug, Serialize)]
pub struct Opcode {
    /// Globally unique key.
    pub key: String,
    /// Mnemonic.
    pub name: String,
    /// 1-based insertion index.
    pub num: usize,
    /// Encoding masks that identify the opcode.
    pub masks: Vec<OpcodeMask>,
    /// Operand arguments in declaration order.
    pub args: Vec<ArgId>,
    /// The opcode's codec; always present after a successful load.
    pub codec: Option<CodecId>,
    /// Format resolved through the codec.
    pub format: Option<FormatId>,
    /// Type resolved from the codec's name prefix.
    pub ty: Option<TypeId>,
    /// Extensions declaring the opcode, as written (duplicates preserved).
    pub extensions: Vec<ExtensionId>,
    /// Compression rule in which this opcode is the compressed form.
    pub compressed: Option<CompressionId>,
    /// Compression rules in which this opcode is the expanded form.
    pub compressions: Vec<CompressionId>,
    /// Long name attached from the instructions file.
    pub long_name: String,
    /// Pseudocode attached from the instructions file.
    pub pseudocode: String,
    /// Description attached from the descriptions file.
    pub description: String,
}

impl Opcode {
    pub(crate) fn new(key: String, name: String) -> Self {
        Self {
            key,
            name,
            num: 0,
            masks: Vec::new(),
            args: Vec::new(),
            codec: None,
            format: None,
            ty: None,
            extensions: Vec::new(),
            compressed: None,
            compressions: Vec::new(),
            long_name: String::new(),
            pseudocode: String::new(),
            description: String::new(),
        }
    }
}

/// A named operand predicate used by compression rules.
#[derive(Clone, Debug, Serialize)]
pub struct Constraint {
    /// Constraint name.
    pub name: String,
    /// Predicate expression token.
    pub expression: String,
}

/// A rule stating that a compressed opcode encodes the same operation as an
/// expanded opcode when the constraints hold.
#[derive(Clone, Debug, Serialize)]
pub struct Compression {
    /// The compressed form.
    pub compressed_op: OpcodeId,
    /// The expanded form.
    pub expanded_op: OpcodeId,
    /// Constraints under which the compression applies.
    pub constraints: Vec<ConstraintId>,
}
