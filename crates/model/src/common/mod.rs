//! Common primitives shared across the metadata model.
//!
//! This module provides the fundamental building blocks used by the parsers
//! and the linker. It includes:
//! 1. **Scanning:** Whitespace/quote/comment tokenization and C-style numeric parsing.
//! 2. **Bit-Ranges:** Closed `[msb, lsb]` intervals with round-trip rendering.
//! 3. **Bit-Specs:** Gather/scatter patterns describing immediate reconstruction.
//! 4. **Error Handling:** The single error type returned by the loader.

/// Bit-range interval type.
pub mod bitrange;

/// Gather/scatter bit-specification type.
pub mod bitspec;

/// Loader error type.
pub mod error;

/// Line tokenizer and numeric literal scanning.
pub mod scan;

pub use bitrange::BitRange;
pub use bitspec::{BitSeg, BitSpec};
pub use error::ModelError;
pub use scan::{parse_line, parse_value};
