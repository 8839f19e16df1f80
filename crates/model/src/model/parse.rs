//! Line parsers and cross-linkers.
//!
//! One parser per metadata file schema. Each validates its token arity,
//! builds one entity record, and adds it to the model's insertion-ordered
//! table and name index. The opcode parser additionally resolves every
//! trailing token against the argument, codec, extension, and mask
//! vocabularies and performs mnemonic key disambiguation; the compression
//! parser links compressed/expanded opcode pairs under their constraints.

use crate::common::bitspec::BitSpec;
use crate::common::error::ModelError;
use crate::common::scan;
use crate::model::entity::{
    Arg, ArgId, Codec, CodecId, Compression, CompressionId, Constraint, ConstraintId, Csr, CsrId,
    EnumDef, EnumId, Extension, ExtensionId, Format, FormatId, Opcode, OpcodeId, Register,
    RegisterId, TypeDef, TypeId, TypePart,
};
use crate::model::mask::OpcodeMask;
use crate::model::Model;

/// Classification of one trailing token on an opcode line.
enum TokenKind {
    Arg(ArgId),
    Ignore,
    Mask(OpcodeMask),
    Codec(CodecId),
    Extension(ExtensionId),
    Unknown,
}

impl Model {
    pub(crate) fn parse_arg(&mut self, parts: &[String]) -> Result<(), ModelError> {
        if parts.len() < 6 {
            return Err(ModelError::Syntax {
                detail: format!("args requires 6 parameters: {}", parts.join(" ")),
            });
        }
        let arg = Arg {
            name: parts[0].clone(),
            label: parts[1].clone(),
            arg_type: parts[2].clone(),
            bitspec: BitSpec::parse(&parts[3])?,
            formatter: parts[4].clone(),
            default: parts[5].clone(),
        };
        self.args_by_name
            .insert(arg.name.clone(), ArgId(self.args.len()));
        self.args.push(arg);
        Ok(())
    }

    pub(crate) fn parse_enum(&mut self, parts: &[String]) -> Result<(), ModelError> {
        if parts.len() < 4 {
            return Err(ModelError::Syntax {
                detail: format!("enums requires 4 parameters: {}", parts.join(" ")),
            });
        }
        let value = EnumDef {
            name: parts[0].clone(),
            group: parts[1].clone(),
            value: scan::parse_value(&parts[2]),
            description: parts[3].clone(),
        };
        self.enums_by_name
            .insert(value.name.clone(), EnumId(self.enums.len()));
        self.enums.push(value);
        Ok(())
    }

    pub(crate) fn parse_type(&mut self, parts: &[String]) -> Result<(), ModelError> {
        if parts.len() < 2 {
            return Err(ModelError::Syntax {
                detail: format!("types requires 2 or more parameters: {}", parts.join(" ")),
            });
        }
        let mut ty = TypeDef {
            name: parts[0].clone(),
            description: parts[1].clone(),
            parts: Vec::new(),
        };
        for part in &parts[2..] {
            let (spec, label) = match part.split_once('=') {
                Some((spec, label)) => (spec, label),
                None => (part.as_str(), ""),
            };
            ty.parts.push(TypePart {
                spec: BitSpec::parse(spec)?,
                label: label.to_string(),
            });
        }
        self.types_by_name
            .insert(ty.name.clone(), TypeId(self.types.len()));
        self.types.push(ty);
        Ok(())
    }

    pub(crate) fn parse_format(&mut self, parts: &[String]) -> Result<(), ModelError> {
        if parts.is_empty() {
            return Err(ModelError::Syntax {
                detail: format!("formats requires at least 1 parameter: {}", parts.join(" ")),
            });
        }
        let format = Format {
            name: parts[0].clone(),
            operands: parts.get(1).cloned().unwrap_or_default(),
        };
        self.formats_by_name
            .insert(format.name.clone(), FormatId(self.formats.len()));
        self.formats.push(format);
        Ok(())
    }

    pub(crate) fn parse_codec(&mut self, parts: &[String]) -> Result<(), ModelError> {
        if parts.len() < 2 {
            return Err(ModelError::Syntax {
                detail: format!("codecs requires 2 parameters: {}", parts.join(" ")),
            });
        }
        let codec = Codec {
            name: parts[0].clone(),
            format: parts[1].clone(),
        };
        self.codecs_by_name
            .insert(codec.name.clone(), CodecId(self.codecs.len()));
        self.codecs.push(codec);
        Ok(())
    }

    pub(crate) fn parse_extension(&mut self, parts: &[String]) -> Result<(), ModelError> {
        if parts.len() < 5 {
            return Err(ModelError::Syntax {
                detail: format!("extensions requires 5 parameters: {}", parts.join(" ")),
            });
        }
        let extension = Extension {
            name: format!("{}{}{}", parts[0], parts[1], parts[2]),
            prefix: parts[0].clone(),
            isa_width: scan::parse_value(&parts[1]) as u32,
            alpha_code: parts[2].clone(),
            insn_width: scan::parse_value(&parts[3]) as u32,
            description: parts[4].clone(),
            opcodes: Vec::new(),
        };
        self.extensions_by_name
            .insert(extension.name.clone(), ExtensionId(self.extensions.len()));
        self.extensions.push(extension);
        Ok(())
    }

    pub(crate) fn parse_register(&mut self, parts: &[String]) -> Result<(), ModelError> {
        if parts.len() < 5 {
            return Err(ModelError::Syntax {
                detail: format!("registers requires 5 parameters: {}", parts.join(" ")),
            });
        }
        let register = Register {
            name: parts[0].clone(),
            number: scan::parse_value(&parts[1]),
            alias: parts[2].clone(),
            reg_type: parts[3].clone(),
            description: parts[4].clone(),
        };
        self.registers_by_name
            .insert(register.name.clone(), RegisterId(self.registers.len()));
        self.registers.push(register);
        Ok(())
    }

    pub(crate) fn parse_csr(&mut self, parts: &[String]) -> Result<(), ModelError> {
        if parts.len() < 4 {
            return Err(ModelError::Syntax {
                detail: format!("csrs requires 4 parameters: {}", parts.join(" ")),
            });
        }
        let csr = Csr {
            number: scan::parse_value(&parts[0]),
            access: parts[1].clone(),
            name: parts[2].clone(),
            description: parts[3].clone(),
        };
        self.csrs_by_name
            .insert(csr.name.clone(), CsrId(self.csrs.len()));
        self.csrs.push(csr);
        Ok(())
    }

    pub(crate) fn parse_constraint(&mut self, parts: &[String]) -> Result<(), ModelError> {
        if parts.len() < 2 {
            return Err(ModelError::Syntax {
                detail: format!("constraints requires 2 parameters: {}", parts.join(" ")),
            });
        }
        let constraint = Constraint {
            name: parts[0].clone(),
            expression: parts[1].clone(),
        };
        self.constraints_by_name
            .insert(constraint.name.clone(), ConstraintId(self.constraints.len()));
        self.constraints.push(constraint);
        Ok(())
    }

    /// Classifies one lowercased opcode-line token by vocabulary membership.
    fn classify(&self, token: &str) -> Result<TokenKind, ModelError> {
        if let Some(id) = self.lookup_arg(token) {
            return Ok(TokenKind::Arg(id));
        }
        if token.contains("=ignore") {
            return Ok(TokenKind::Ignore);
        }
        if token.contains('=') {
            return Ok(TokenKind::Mask(OpcodeMask::parse(token)?));
        }
        if let Some(id) = self.lookup_codec(token) {
            return Ok(TokenKind::Codec(id));
        }
        if let Some(id) = self.lookup_extension(token) {
            return Ok(TokenKind::Extension(id));
        }
        Ok(TokenKind::Unknown)
    }

    /// Inserts an opcode record for `name`, disambiguating the key when the
    /// mnemonic already exists.
    ///
    /// If a record is already keyed by the bare mnemonic, that record's key
    /// is renamed to `mnemonic.<its first extension>` and the new record is
    /// keyed `mnemonic.<extension>`; a collision between the renamed keys is
    /// fatal. Every record is also appended to the mnemonic's opcode list.
    fn create_opcode(
        &mut self,
        name: &str,
        extension: ExtensionId,
    ) -> Result<OpcodeId, ModelError> {
        let id = if let Some(existing) = self.lookup_opcode_by_key(name) {
            // linked opcodes always carry at least one extension
            let old_ext = self.opcodes[existing.0].extensions[0];
            let old_key = format!("{}.{}", name, self.extensions[old_ext.0].name);
            self.opcodes_by_key.remove(name);
            self.opcodes[existing.0].key = old_key.clone();
            self.opcodes_by_key.insert(old_key, existing);

            let new_key = format!("{}.{}", name, self.extensions[extension.0].name);
            if self.opcodes_by_key.contains_key(&new_key) {
                return Err(ModelError::Structural {
                    detail: format!("opcode with same extension already exists: {new_key}"),
                });
            }
            let id = OpcodeId(self.opcodes.len());
            let mut opcode = Opcode::new(new_key.clone(), name.to_string());
            opcode.num = self.opcodes.len() + 1;
            self.opcodes.push(opcode);
            self.opcodes_by_key.insert(new_key, id);
            id
        } else {
            let id = OpcodeId(self.opcodes.len());
            let mut opcode = Opcode::new(name.to_string(), name.to_string());
            opcode.num = self.opcodes.len() + 1;
            self.opcodes.push(opcode);
            self.opcodes_by_key.insert(name.to_string(), id);
            id
        };
        self.opcodes_by_name
            .entry(name.to_string())
            .or_default()
            .push(id);
        Ok(id)
    }

    pub(crate) fn parse_opcode(&mut self, parts: &[String]) -> Result<(), ModelError> {
        let name = parts[0].clone();

        let mut declared = Vec::new();
        for token in &parts[1..] {
            if let Some(id) = self.lookup_extension(&token.to_lowercase()) {
                declared.push(id);
            }
        }
        let Some(&first_extension) = declared.first() else {
            return Err(ModelError::Structural {
                detail: format!("no extension assigned for opcode: {name}"),
            });
        };
        let op = self.create_opcode(&name, first_extension)?;

        for token in &parts[1..] {
            let token = token.to_lowercase();
            match self.classify(&token)? {
                TokenKind::Arg(id) => self.opcodes[op.0].args.push(id),
                TokenKind::Ignore => {}
                TokenKind::Mask(mask) => self.opcodes[op.0].masks.push(mask),
                TokenKind::Codec(id) => self.attach_codec(op, id, &name)?,
                TokenKind::Extension(id) => {
                    self.opcodes[op.0].extensions.push(id);
                    // the first extension owns the opcode for generator output
                    if self.opcodes[op.0].extensions.len() == 1 {
                        self.extensions[id.0].opcodes.push(op);
                    }
                }
                TokenKind::Unknown => log::debug!("opcode {name}: unknown arg: {token}"),
            }
        }

        if self.opcodes[op.0].codec.is_none() {
            return Err(ModelError::Structural {
                detail: format!("opcode has no codec: {name}"),
            });
        }
        if self.opcodes[op.0].extensions.is_empty() {
            return Err(ModelError::Structural {
                detail: format!("opcode has no extensions: {name}"),
            });
        }
        Ok(())
    }

    /// Attaches a codec to an opcode, resolving the format named by the
    /// codec and the type named by the codec's name prefix.
    fn attach_codec(
        &mut self,
        op: OpcodeId,
        codec: CodecId,
        opcode_name: &str,
    ) -> Result<(), ModelError> {
        let format_name = self.codecs[codec.0].format.clone();
        let codec_name = self.codecs[codec.0].name.clone();
        let format = self.lookup_format(&format_name).ok_or_else(|| {
            ModelError::Reference {
                detail: format!(
                    "opcode {opcode_name} codec {codec_name} has unknown format: {format_name}"
                ),
            }
        })?;
        let type_name = self.codecs[codec.0].type_name().to_string();
        let ty = self.lookup_type(&type_name).ok_or_else(|| {
            ModelError::Reference {
                detail: format!(
                    "opcode {opcode_name} codec {codec_name} has unknown type: {type_name}"
                ),
            }
        })?;
        let opcode = &mut self.opcodes[op.0];
        opcode.codec = Some(codec);
        opcode.format = Some(format);
        opcode.ty = Some(ty);
        Ok(())
    }

    pub(crate) fn parse_compression(&mut self, parts: &[String]) -> Result<(), ModelError> {
        if parts.len() < 2 {
            return Err(ModelError::Syntax {
                detail: format!(
                    "compression requires at least 2 parameters: {}",
                    parts.join(" ")
                ),
            });
        }
        let compressed_ops = self.lookup_opcode_by_name(&parts[0]).to_vec();
        let expanded_ops = self.lookup_opcode_by_name(&parts[1]).to_vec();
        for &comp_op in &compressed_ops {
            for &exp_op in &expanded_ops {
                let mut constraints = Vec::new();
                for constraint_name in &parts[2..] {
                    let id = self.lookup_constraint(constraint_name).ok_or_else(|| {
                        ModelError::Reference {
                            detail: format!(
                                "compressed opcode {} references unknown constraint {}",
                                parts[0], constraint_name
                            ),
                        }
                    })?;
                    constraints.push(id);
                }
                let id = CompressionId(self.compressions.len());
                self.compressions.push(Compression {
                    compressed_op: comp_op,
                    expanded_op: exp_op,
                    constraints,
                });
                self.opcodes[comp_op.0].compressed = Some(id);
                self.opcodes[exp_op.0].compressions.push(id);
            }
        }
        Ok(())
    }

    pub(crate) fn parse_instruction(&mut self, parts: &[String]) {
        if parts.len() < 2 {
            return;
        }
        let long_name = parts[1].clone();
        let pseudocode = parts.get(2).cloned().unwrap_or_default();
        for id in self.lookup_opcode_by_name(&parts[0]).to_vec() {
            let opcode = &mut self.opcodes[id.0];
            opcode.long_name = long_name.clone();
            opcode.pseudocode = pseudocode.clone();
        }
    }

    pub(crate) fn parse_description(&mut self, parts: &[String]) {
        if parts.is_empty() {
            return;
        }
        let description = parts.get(1).cloned().unwrap_or_default();
        for id in self.lookup_opcode_by_name(&parts[0]).to_vec() {
            self.opcodes[id.0].description = description.clone();
        }
    }
}
