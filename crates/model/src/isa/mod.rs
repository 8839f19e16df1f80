//! ISA-level operations.
//!
//! Expansion of compact ISA specification strings (e.g. `rv64imafd`) into
//! ordered extension lists, and the static CSR metadata table.

/// Static CSR number metadata.
pub mod csr;

use crate::common::error::ModelError;
use crate::model::{ExtensionId, Model};

impl Model {
    /// Expands a compact ISA string such as `rv64g` into the declared
    /// extensions, in encounter order.
    ///
    /// The string is lowercased; the longest registered prefix and the
    /// register width following it are matched; the first `g` in the
    /// remainder is replaced by `imafd`; every remaining letter is resolved
    /// as `prefix + width + letter`. An empty string yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError`] when the prefix or width cannot be matched,
    /// a letter names no registered extension, or an extension is named
    /// twice.
    pub fn decode_isa_extensions(&self, isa_spec: &str) -> Result<Vec<ExtensionId>, ModelError> {
        if isa_spec.is_empty() {
            return Ok(Vec::new());
        }
        let spec = isa_spec.to_lowercase();

        let mut prefix = "";
        for ext in &self.extensions {
            if spec.starts_with(&ext.prefix) && ext.prefix.len() > prefix.len() {
                prefix = &ext.prefix;
            }
        }
        let mut width = 0u32;
        let mut width_len = 0;
        if !prefix.is_empty() {
            for ext in &self.extensions {
                let width_str = ext.isa_width.to_string();
                if spec[prefix.len()..].starts_with(&width_str) {
                    width = ext.isa_width;
                    width_len = width_str.len();
                }
            }
        }
        if prefix.is_empty() || width == 0 {
            return Err(ModelError::Syntax {
                detail: format!("illegal isa spec: {isa_spec}"),
            });
        }

        let offset = prefix.len() + width_len;
        let spec = spec.replacen('g', "imafd", 1);

        let mut list: Vec<ExtensionId> = Vec::new();
        for letter in spec[offset..].chars() {
            let probe = format!("{}{}", &spec[..offset], letter);
            let ext = self
                .lookup_extension(&probe)
                .ok_or_else(|| ModelError::Reference {
                    detail: format!("illegal isa spec: {isa_spec}: missing extension: {probe}"),
                })?;
            if list.contains(&ext) {
                return Err(ModelError::Structural {
                    detail: format!("illegal isa spec: {isa_spec}: duplicate extension: {probe}"),
                });
            }
            list.push(ext);
        }
        Ok(list)
    }
}
