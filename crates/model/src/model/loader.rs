//! Metadata directory loader.
//!
//! Reads the thirteen metadata files in a fixed order; later files may
//! reference names introduced by earlier files, so the order is part of the
//! contract. Each line is stripped of its `#` comment tail, tokenized, and
//! dispatched to the parser for the file's schema.

use std::fs;
use std::path::Path;

use crate::common::error::ModelError;
use crate::common::scan;
use crate::model::Model;

const ARGS_FILE: &str = "args";
const ENUMS_FILE: &str = "enums";
const TYPES_FILE: &str = "types";
const FORMATS_FILE: &str = "formats";
const CODECS_FILE: &str = "codecs";
const EXTENSIONS_FILE: &str = "extensions";
const REGISTERS_FILE: &str = "registers";
const CSRS_FILE: &str = "csrs";
const OPCODES_FILE: &str = "opcodes";
const CONSTRAINTS_FILE: &str = "constraints";
const COMPRESSION_FILE: &str = "compression";
const INSTRUCTIONS_FILE: &str = "instructions";
const DESCRIPTIONS_FILE: &str = "descriptions";

impl Model {
    /// Reads every metadata file under `dir` into the model.
    ///
    /// # Errors
    ///
    /// Returns the first [`ModelError`] encountered; the model must then be
    /// discarded.
    pub fn read_metadata(&mut self, dir: &Path) -> Result<(), ModelError> {
        for parts in read_file(&dir.join(ARGS_FILE))? {
            self.parse_arg(&parts)?;
        }
        for parts in read_file(&dir.join(ENUMS_FILE))? {
            self.parse_enum(&parts)?;
        }
        for parts in read_file(&dir.join(TYPES_FILE))? {
            self.parse_type(&parts)?;
        }
        for parts in read_file(&dir.join(FORMATS_FILE))? {
            self.parse_format(&parts)?;
        }
        for parts in read_file(&dir.join(CODECS_FILE))? {
            self.parse_codec(&parts)?;
        }
        for parts in read_file(&dir.join(EXTENSIONS_FILE))? {
            self.parse_extension(&parts)?;
        }
        for parts in read_file(&dir.join(REGISTERS_FILE))? {
            self.parse_register(&parts)?;
        }
        for parts in read_file(&dir.join(CSRS_FILE))? {
            self.parse_csr(&parts)?;
        }
        for parts in read_file(&dir.join(OPCODES_FILE))? {
            self.parse_opcode(&parts)?;
        }
        for parts in read_file(&dir.join(CONSTRAINTS_FILE))? {
            self.parse_constraint(&parts)?;
        }
        for parts in read_file(&dir.join(COMPRESSION_FILE))? {
            self.parse_compression(&parts)?;
        }
        for parts in read_file(&dir.join(INSTRUCTIONS_FILE))? {
            self.parse_instruction(&parts);
        }
        for parts in read_file(&dir.join(DESCRIPTIONS_FILE))? {
            self.parse_description(&parts);
        }
        Ok(())
    }
}

/// Reads one metadata file into tokenized records, skipping empty lines.
fn read_file(path: &Path) -> Result<Vec<Vec<String>>, ModelError> {
    let text = fs::read_to_string(path).map_err(|e| ModelError::Io {
        path: path.display().to_string(),
        detail: e.to_string(),
    })?;
    let mut records = Vec::new();
    for line in text.lines() {
        // The tail from the first '#' is cut before tokenizing, so a '#'
        // inside a quoted token still starts a comment (historical quirk of
        // the metadata language; kept for compatibility).
        let line = match line.find('#') {
            Some(pos) => line[..pos].trim(),
            None => line,
        };
        let parts = scan::parse_line(line);
        if parts.is_empty() {
            continue;
        }
        records.push(parts);
    }
    Ok(records)
}
