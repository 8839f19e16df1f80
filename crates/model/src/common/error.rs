//! Loader error definitions.
//!
//! All metadata schema violations surface as a single [`ModelError`]. The
//! loader is all-or-nothing: the first error aborts the load and no partial
//! model is returned, because a partially linked model would leak invalid
//! data into generated artifacts.

use std::fmt;

/// Error raised while loading or cross-linking metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModelError {
    /// Malformed bit-range, bit-spec, or mask, or a line with too few tokens.
    Syntax {
        /// Description naming the offending token or line.
        detail: String,
    },

    /// A name used by an opcode, compression rule, or ISA spec that is not
    /// defined by any earlier metadata file.
    Reference {
        /// Description naming the missing definition.
        detail: String,
    },

    /// A cross-linking violation: an opcode with no codec or extension, or a
    /// duplicated disambiguated opcode key.
    Structural {
        /// Description naming the offending opcode.
        detail: String,
    },

    /// A metadata file could not be read.
    Io {
        /// Path of the file that failed to open.
        path: String,
        /// Operating-system error description.
        detail: String,
    },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::Syntax { detail } => write!(f, "syntax error: {detail}"),
            ModelError::Reference { detail } => write!(f, "unresolved reference: {detail}"),
            ModelError::Structural { detail } => write!(f, "structural error: {detail}"),
            ModelError::Io { path, detail } => write!(f, "error opening {path}: {detail}"),
        }
    }
}

impl std::error::Error for ModelError {}
