//! Gather/scatter bit-specifications.
//!
//! A bit-specification describes how bits gathered from an encoded
//! instruction scatter into logical immediate positions. The textual form is
//! a comma-separated list of segments in `gather[scatter|scatter|…]` shape:
//!
//! ```text
//! 0
//! 11:7
//! 12[5],6:2[4:0]
//! 31:25[12|10:5],11:7[4:1|11]
//! ```
//!
//! When the `[scatter]` group is omitted the bits are right-justified from
//! bit 0; the canonical rendering still prints the (empty) brackets so that
//! rendering and parsing round-trip.

use std::fmt;

use serde::Serialize;

use crate::common::bitrange::BitRange;
use crate::common::error::ModelError;

/// One segment of a bit-specification: a gather range in the encoding and
/// the scatter ranges it lands in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BitSeg {
    /// Source range in the encoded instruction.
    pub gather: BitRange,
    /// Destination ranges in the logical value; empty means right-justified.
    pub scatter: Vec<BitRange>,
}

/// An ordered list of gather/scatter segments.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BitSpec {
    /// Segments in declaration order.
    pub segments: Vec<BitSeg>,
}

impl BitSpec {
    /// Parses a comma-separated list of `gather[scatter|…]` segments.
    ///
    /// An absent or empty bracket group yields an empty scatter list.
    pub fn parse(text: &str) -> Result<Self, ModelError> {
        let mut segments = Vec::new();
        for comp in text.split(',') {
            match (comp.find('['), comp.find(']')) {
                (Some(open), Some(close)) if open < close => {
                    let gather = BitRange::parse(&comp[..open])?;
                    let scatter_spec = &comp[open + 1..close];
                    let mut scatter = Vec::new();
                    if !scatter_spec.is_empty() {
                        for part in scatter_spec.split('|') {
                            scatter.push(BitRange::parse(part)?);
                        }
                    }
                    segments.push(BitSeg { gather, scatter });
                }
                _ => segments.push(BitSeg {
                    gather: BitRange::parse(comp)?,
                    scatter: Vec::new(),
                }),
            }
        }
        Ok(Self { segments })
    }

    /// Returns true when some segment's gather range contains `bit`.
    pub fn matches_bit(&self, bit: usize) -> bool {
        self.segments.iter().any(|seg| seg.gather.contains(bit))
    }

    /// Renders the type-template projection used by code generators.
    ///
    /// The form is `imm_t<W, S<msb,lsb, B<r>,…>, …>` where `W` is one plus
    /// the maximum scatter msb across all segments.
    pub fn to_template(&self) -> String {
        let mut msb = 0;
        for seg in &self.segments {
            for sc in &seg.scatter {
                if sc.msb > msb {
                    msb = sc.msb;
                }
            }
        }
        let mut out = format!("imm_t<{}, ", msb + 1);
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str("S<");
            out.push_str(&seg.gather.render(",", false));
            out.push_str(", ");
            for (j, sc) in seg.scatter.iter().enumerate() {
                if j > 0 {
                    out.push(',');
                }
                out.push_str("B<");
                out.push_str(&sc.render(",", true));
                out.push('>');
            }
            out.push('>');
        }
        out.push('>');
        out
    }
}

impl fmt::Display for BitSpec {
    /// Canonical rendering: `gather[s1|s2|…]` per segment, comma-joined.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}[", seg.gather.render(":", true))?;
            for (j, sc) in seg.scatter.iter().enumerate() {
                if j > 0 {
                    f.write_str("|")?;
                }
                f.write_str(&sc.render(":", true))?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}
