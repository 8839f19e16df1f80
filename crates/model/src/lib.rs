//! RISC-V instruction-set metadata model.
//!
//! This crate parses a directory of plain-text metadata files describing a
//! RISC-V instruction set and builds a cross-linked in-memory model of the
//! ISA. It provides:
//! 1. **Scanning:** Line tokenization with quoted tokens and C-style numeric literals.
//! 2. **Bit algebra:** Bit-ranges, gather/scatter bit-specifications, and opcode bit masks.
//! 3. **Model:** Insertion-ordered entity tables with name indexes and typed ids.
//! 4. **Linking:** Opcode resolution against codecs, formats, types, extensions,
//!    and compression rules, including mnemonic key disambiguation.
//! 5. **ISA decoding:** Expansion of compact ISA strings such as `rv64g`.
//! 6. **Rendering:** Generator-facing formatters for masks, keys, and extraction
//!    expressions.
//!
//! The model is the input to downstream generators (decoder trees,
//! disassembler tables, documentation). Any schema violation aborts the load
//! with a single [`ModelError`]; no partial model is ever returned.

/// Shared primitives (scanning, bit-ranges, bit-specs, errors).
pub mod common;
/// ISA-level operations (ISA-spec decoding, static CSR metadata).
pub mod isa;
/// Entity records, storage, parsers, and the metadata loader.
pub mod model;
/// Generator-facing string formatters.
pub mod render;

/// Closed bit interval `[msb, lsb]`; use `BitRange::parse` or `str::parse`.
pub use crate::common::bitrange::BitRange;
/// Gather/scatter bit placement specification; see `BitSpec::parse`.
pub use crate::common::bitspec::{BitSeg, BitSpec};
/// Loader error; construct a model with `Model::load` to receive one.
pub use crate::common::error::ModelError;
/// The fully cross-linked metadata model; construct with `Model::load`.
pub use crate::model::Model;
