//! The cross-linked metadata model.
//!
//! This module defines the model storage and its lookup surface. It
//! provides:
//! 1. **Entity tables:** One insertion-ordered `Vec` per entity kind,
//!    preserving file order for deterministic generator output.
//! 2. **Name indexes:** One or more name-keyed maps per kind resolving to
//!    typed ids.
//! 3. **Parsers:** One line parser per metadata file schema, plus the opcode
//!    and compression cross-linkers.
//! 4. **Loader:** `Model::load` reads the thirteen metadata files in their
//!    fixed order.
//!
//! All entities are created during loading and never mutated afterwards; a
//! fully built model is therefore freely shareable across reader threads.

/// Entity records and typed ids.
pub mod entity;
/// Opcode encoding masks.
pub mod mask;

mod loader;
mod parse;

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;

use crate::common::error::ModelError;

pub use entity::{
    Arg, ArgId, Codec, CodecId, Compression, CompressionId, Constraint, ConstraintId, Csr, CsrId,
    EnumDef, EnumId, Extension, ExtensionId, Format, FormatId, Opcode, OpcodeId, Register,
    RegisterId, TypeDef, TypeId, TypePart,
};
pub use mask::OpcodeMask;

/// The in-memory ISA metadata model.
///
/// Construct with [`Model::load`]; the result is fully cross-linked and
/// effectively immutable. Entity tables are public for iteration in file
/// order; name lookups go through the `lookup_*` methods.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Model {
    /// Operand arguments in file order.
    pub args: Vec<Arg>,
    /// Enumeration values in file order.
    pub enums: Vec<EnumDef>,
    /// Instruction types in file order.
    pub types: Vec<TypeDef>,
    /// Operand formats in file order.
    pub formats: Vec<Format>,
    /// Codecs in file order.
    pub codecs: Vec<Codec>,
    /// Extensions in file order.
    pub extensions: Vec<Extension>,
    /// Registers in file order.
    pub registers: Vec<Register>,
    /// CSR records in file order.
    pub csrs: Vec<Csr>,
    /// Opcodes in insertion order.
    pub opcodes: Vec<Opcode>,
    /// Constraints in file order.
    pub constraints: Vec<Constraint>,
    /// Compression rules in file order.
    pub compressions: Vec<Compression>,

    args_by_name: HashMap<String, ArgId>,
    enums_by_name: HashMap<String, EnumId>,
    types_by_name: HashMap<String, TypeId>,
    formats_by_name: HashMap<String, FormatId>,
    codecs_by_name: HashMap<String, CodecId>,
    extensions_by_name: HashMap<String, ExtensionId>,
    registers_by_name: HashMap<String, RegisterId>,
    csrs_by_name: HashMap<String, CsrId>,
    opcodes_by_key: HashMap<String, OpcodeId>,
    opcodes_by_name: HashMap<String, Vec<OpcodeId>>,
    constraints_by_name: HashMap<String, ConstraintId>,
}

impl Model {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a metadata directory and returns the cross-linked model.
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError`] on the first schema violation, unresolved
    /// reference, structural inconsistency, or unreadable file. No partial
    /// model is returned.
    pub fn load(dir: &Path) -> Result<Self, ModelError> {
        let mut model = Self::new();
        model.read_metadata(dir)?;
        Ok(model)
    }

    /// Returns the argument record for `id`.
    #[inline]
    pub fn arg(&self, id: ArgId) -> &Arg {
        &self.args[id.0]
    }

    /// Returns the enum record for `id`.
    #[inline]
    pub fn enum_def(&self, id: EnumId) -> &EnumDef {
        &self.enums[id.0]
    }

    /// Returns the type record for `id`.
    #[inline]
    pub fn type_def(&self, id: TypeId) -> &TypeDef {
        &self.types[id.0]
    }

    /// Returns the format record for `id`.
    #[inline]
    pub fn format(&self, id: FormatId) -> &Format {
        &self.formats[id.0]
    }

    /// Returns the codec record for `id`.
    #[inline]
    pub fn codec(&self, id: CodecId) -> &Codec {
        &self.codecs[id.0]
    }

    /// Returns the extension record for `id`.
    #[inline]
    pub fn extension(&self, id: ExtensionId) -> &Extension {
        &self.extensions[id.0]
    }

    /// Returns the register record for `id`.
    #[inline]
    pub fn register(&self, id: RegisterId) -> &Register {
        &self.registers[id.0]
    }

    /// Returns the CSR record for `id`.
    #[inline]
    pub fn csr(&self, id: CsrId) -> &Csr {
        &self.csrs[id.0]
    }

    /// Returns the opcode record for `id`.
    #[inline]
    pub fn opcode(&self, id: OpcodeId) -> &Opcode {
        &self.opcodes[id.0]
    }

    /// Returns the constraint record for `id`.
    #[inline]
    pub fn constraint(&self, id: ConstraintId) -> &Constraint {
        &self.constraints[id.0]
    }

    /// Returns the compression record for `id`.
    #[inline]
    pub fn compression(&self, id: CompressionId) -> &Compression {
        &self.compressions[id.0]
    }

    /// Looks up an argument by name.
    pub fn lookup_arg(&self, name: &str) -> Option<ArgId> {
        self.args_by_name.get(name).copied()
    }

    /// Looks up an enum value by name.
    pub fn lookup_enum(&self, name: &str) -> Option<EnumId> {
        self.enums_by_name.get(name).copied()
    }

    /// Looks up a type by name.
    pub fn lookup_type(&self, name: &str) -> Option<TypeId> {
        self.types_by_name.get(name).copied()
    }

    /// Looks up a format by name.
    pub fn lookup_format(&self, name: &str) -> Option<FormatId> {
        self.formats_by_name.get(name).copied()
    }

    /// Looks up a codec by name.
    pub fn lookup_codec(&self, name: &str) -> Option<CodecId> {
        self.codecs_by_name.get(name).copied()
    }

    /// Looks up an extension by its full name (e.g. `rv64i`).
    pub fn lookup_extension(&self, name: &str) -> Option<ExtensionId> {
        self.extensions_by_name.get(name).copied()
    }

    /// Looks up a register by name.
    pub fn lookup_register(&self, name: &str) -> Option<RegisterId> {
        self.registers_by_name.get(name).copied()
    }

    /// Looks up a metadata CSR record by name.
    pub fn lookup_csr_by_name(&self, name: &str) -> Option<CsrId> {
        self.csrs_by_name.get(name).copied()
    }

    /// Looks up an opcode by its globally unique key.
    pub fn lookup_opcode_by_key(&self, key: &str) -> Option<OpcodeId> {
        self.opcodes_by_key.get(key).copied()
    }

    /// Returns every opcode declared under the given mnemonic, in insertion
    /// order; empty when the mnemonic is unknown.
    pub fn lookup_opcode_by_name(&self, name: &str) -> &[OpcodeId] {
        self.opcodes_by_name
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Looks up a constraint by name.
    pub fn lookup_constraint(&self, name: &str) -> Option<ConstraintId> {
        self.constraints_by_name.get(name).copied()
    }
}
