//! Bit-Range Unit Tests.
//!
//! Verifies `"msb:lsb"` parsing, single-bit collapse, round-trip rendering,
//! and interval membership.

use rvmeta_core::BitRange;

// ══════════════════════════════════════════════════════════
// 1. Parsing
// ══════════════════════════════════════════════════════════

#[test]
fn parse_two_components() {
    let r = BitRange::parse("31:25").expect("valid bitrange");
    assert_eq!(r.msb, 31);
    assert_eq!(r.lsb, 25);
}

#[test]
fn parse_single_bit() {
    let r = BitRange::parse("7").expect("valid bitrange");
    assert_eq!(r.msb, 7);
    assert_eq!(r.lsb, 7);
}

#[test]
fn parse_rejects_three_components() {
    let err = BitRange::parse("1:2:3").expect_err("three components must fail");
    assert!(
        err.to_string().contains("invalid bitrange"),
        "Expected bitrange diagnostic, got '{}'",
        err
    );
}

#[test]
fn parse_via_from_str() {
    let r: BitRange = "12:5".parse().expect("valid bitrange");
    assert_eq!(r, BitRange::new(12, 5));
}

// ══════════════════════════════════════════════════════════
// 2. Rendering
// ══════════════════════════════════════════════════════════

#[test]
fn render_multi_bit() {
    assert_eq!(BitRange::new(31, 25).render(":", true), "31:25");
}

#[test]
fn render_single_bit_collapsed() {
    assert_eq!(BitRange::new(7, 7).render(":", true), "7");
}

#[test]
fn render_single_bit_uncollapsed() {
    assert_eq!(BitRange::new(7, 7).render(":", false), "7:7");
}

#[test]
fn render_custom_separator() {
    assert_eq!(BitRange::new(31, 25).render(",", false), "31,25");
}

#[test]
fn roundtrip_through_rendering() {
    for text in ["31:25", "7", "12:5", "0", "15:15"] {
        let r = BitRange::parse(text).expect("valid bitrange");
        let again = BitRange::parse(&r.render(":", true)).expect("rendered form parses");
        assert_eq!(r, again, "Round-trip changed '{}'", text);
        let again = BitRange::parse(&r.render(":", false)).expect("rendered form parses");
        assert_eq!(r, again, "Uncollapsed round-trip changed '{}'", text);
    }
}

// ══════════════════════════════════════════════════════════
// 3. Membership
// ══════════════════════════════════════════════════════════

#[test]
fn contains_is_inclusive() {
    let r = BitRange::new(31, 25);
    assert!(r.contains(31));
    assert!(r.contains(25));
    assert!(r.contains(28));
    assert!(!r.contains(24));
    assert!(!r.contains(32));
}
