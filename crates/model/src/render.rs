//! Generator-facing string formatters.
//!
//! Pure rendering helpers used by the table, decoder, and documentation
//! generators that consume the model: opcode mask columns, sanitized key
//! names, ISA short names, and C-style bitfield extraction expressions.

use crate::common::bitrange::BitRange;
use crate::model::{Model, OpcodeId};

/// Renders an opcode's mask set as a padded column of `msb..lsb=value`
/// entries.
pub fn opcode_mask(model: &Model, id: OpcodeId) -> String {
    let mut out = format!("{:20}", "");
    for mask in &model.opcode(id).masks {
        out.push(' ');
        out.push_str(&mask.to_string());
    }
    out
}

/// Renders an opcode name or key as an identifier.
///
/// A leading `@` is stripped and every `.` is replaced by `dot`; `use_key`
/// selects the disambiguated key over the bare mnemonic.
pub fn opcode_format(
    prefix: &str,
    model: &Model,
    id: OpcodeId,
    dot: char,
    use_key: bool,
) -> String {
    let opcode = model.opcode(id);
    let name = if use_key { &opcode.key } else { &opcode.name };
    let name = name.strip_prefix('@').unwrap_or(name);
    format!("{}{}", prefix, name.replace('.', &dot.to_string()))
}

/// Renders the right-aligned `/* name */ ` comment generators place before
/// table rows; empty when `no_comment` is set.
pub fn opcode_comment(model: &Model, id: OpcodeId, no_comment: bool, use_key: bool) -> String {
    if no_comment {
        return String::new();
    }
    let name = opcode_format("", model, id, '.', use_key);
    format!("/* {name:>20} */ ")
}

/// Returns the ISA short name (`prefix + alpha`, e.g. `rvc`) of the opcode's
/// owning extension.
pub fn opcode_isa_shortname(model: &Model, id: OpcodeId) -> String {
    let opcode = model.opcode(id);
    // linked opcodes always carry at least one extension
    let ext = model.extension(opcode.extensions[0]);
    format!("{}{}", ext.prefix, ext.alpha_code)
}

/// Compresses a descending list of set bit positions into contiguous runs.
pub fn bitmask_to_bitrange(bits: &[usize]) -> Vec<BitRange> {
    let mut runs: Vec<BitRange> = Vec::new();
    for &bit in bits {
        match runs.last_mut() {
            Some(run) if bit + 1 == run.lsb => run.lsb = bit,
            _ => runs.push(BitRange::new(bit, bit)),
        }
    }
    runs
}

/// Renders a C-style extraction expression gathering the given bits of
/// `var`, most significant run first.
///
/// Each run is shifted right so that it lands in the next available
/// destination slot, starting at the total bit count minus one and moving
/// down. With `comment` set, a `/* var[a|b:c] */` trailer names the source
/// runs.
pub fn format_bitmask(bits: &[usize], var: &str, comment: bool) -> String {
    let runs = bitmask_to_bitrange(bits);
    let total = bits.len();
    let mut out = String::new();

    let mut range_start = total;
    for (i, run) in runs.iter().enumerate() {
        let range_end = range_start - (run.msb - run.lsb);
        // bits are descending, so the run's msb is at least range_start - 1
        let shift = run.msb + 1 - range_start;
        if i > 0 {
            out.push_str(" | ");
        }
        out.push_str(&format!("(({var} >> {shift}) & 0b"));
        for b in (1..=total).rev() {
            out.push(if b <= range_start && b >= range_end {
                '1'
            } else {
                '0'
            });
        }
        out.push(')');
        range_start -= run.msb - run.lsb + 1;
    }

    if comment {
        out.push_str(&format!(" /* {var}["));
        for (i, run) in runs.iter().enumerate() {
            if i > 0 {
                out.push('|');
            }
            out.push_str(&run.render(":", true));
        }
        out.push_str("] */");
    }
    out
}
