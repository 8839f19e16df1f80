//! Bit-range intervals.
//!
//! A bit-range is a closed interval `[msb, lsb]` with `msb >= lsb`, naming
//! bit positions in an encoded instruction. The textual form is `"msb:lsb"`,
//! or just `"n"` for a single bit.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::common::error::ModelError;
use crate::common::scan;

/// A closed bit interval `[msb, lsb]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BitRange {
    /// Most significant bit position (inclusive).
    pub msb: usize,
    /// Least significant bit position (inclusive).
    pub lsb: usize,
}

impl BitRange {
    /// Creates a bit-range from explicit bounds.
    #[inline]
    pub fn new(msb: usize, lsb: usize) -> Self {
        Self { msb, lsb }
    }

    /// Parses `"msb:lsb"` or `"n"` (the latter yields `msb == lsb == n`).
    ///
    /// More than two `:`-separated components is a syntax error. Components
    /// are scanned permissively in base 10.
    pub fn parse(text: &str) -> Result<Self, ModelError> {
        let comps: Vec<&str> = text.split(':').collect();
        match comps.len() {
            1 => {
                let n = scan::scan_decimal(comps[0]);
                Ok(Self { msb: n, lsb: n })
            }
            2 => Ok(Self {
                msb: scan::scan_decimal(comps[0]),
                lsb: scan::scan_decimal(comps[1]),
            }),
            _ => Err(ModelError::Syntax {
                detail: format!("invalid bitrange: {text}"),
            }),
        }
    }

    /// Returns true when `bit` falls inside the interval (inclusive).
    #[inline]
    pub fn contains(&self, bit: usize) -> bool {
        bit <= self.msb && bit >= self.lsb
    }

    /// Renders `msb<sep>lsb`, collapsed to `msb` when the range is a single
    /// bit and `collapse` is set.
    pub fn render(&self, sep: &str, collapse: bool) -> String {
        if collapse && self.msb == self.lsb {
            self.msb.to_string()
        } else {
            format!("{}{}{}", self.msb, sep, self.lsb)
        }
    }
}

impl fmt::Display for BitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(":", true))
    }
}

impl FromStr for BitRange {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
