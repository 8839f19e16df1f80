//! Opcode encoding masks.
//!
//! A mask is an equality `range = value` over an encoded bitfield; the full
//! mask set of an opcode identifies its encoding. The textual forms are
//! `msb..lsb=value` and `n=value`, with the value written in decimal or
//! `0x` hexadecimal.

use std::fmt;

use serde::Serialize;

use crate::common::bitrange::BitRange;
use crate::common::error::ModelError;
use crate::common::scan;

/// A `bit-range = value` equality over the encoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OpcodeMask {
    /// The encoded bitfield the equality constrains.
    pub range: BitRange,
    /// The value the bitfield must hold.
    pub value: i64,
}

impl OpcodeMask {
    /// Parses `msb..lsb=value` or `n=value`.
    ///
    /// Exactly one `=` must be present and the left side must have one or
    /// two `..`-separated components; anything else is a syntax error. The
    /// value accepts decimal or `0x` hexadecimal only.
    pub fn parse(text: &str) -> Result<Self, ModelError> {
        let parts: Vec<&str> = text.split('=').collect();
        if parts.len() != 2 {
            return Err(ModelError::Syntax {
                detail: format!("bit mask {text} must be in form n..m=v"),
            });
        }
        let range_parts: Vec<&str> = parts[0].split("..").collect();
        let range = match range_parts.len() {
            1 => {
                let n = scan::scan_decimal(range_parts[0]);
                BitRange::new(n, n)
            }
            2 => BitRange::new(
                scan::scan_decimal(range_parts[0]),
                scan::scan_decimal(range_parts[1]),
            ),
            _ => {
                return Err(ModelError::Syntax {
                    detail: format!("bit mask {text} must be in form n..m=v"),
                })
            }
        };
        let value = if let Some(hex) = parts[1].strip_prefix("0x") {
            scan::scan_radix(hex, 16) as i64
        } else {
            scan::scan_radix(parts[1], 10) as i64
        };
        Ok(Self { range, value })
    }
}

impl fmt::Display for OpcodeMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}={}", self.range.msb, self.range.lsb, self.value)
    }
}
