//! Metadata Loader Unit Tests.
//!
//! Loads the fixture corpus end to end and verifies table contents, opcode
//! invariants, attachment of instruction/description text, the comment-strip
//! quirk, failure paths, and JSON serialization of the loaded model.

use std::collections::HashSet;
use std::fs;

use rvmeta_core::{Model, ModelError};

use crate::common::{load_default, load_with, write_metadata};

// ══════════════════════════════════════════════════════════
// 1. Successful load
// ══════════════════════════════════════════════════════════

#[test]
fn default_fixture_loads() {
    let model = load_default();
    assert_eq!(model.args.len(), 9);
    assert_eq!(model.enums.len(), 4);
    assert_eq!(model.types.len(), 5);
    assert_eq!(model.formats.len(), 5);
    assert_eq!(model.codecs.len(), 7);
    assert_eq!(model.extensions.len(), 9);
    assert_eq!(model.registers.len(), 4);
    assert_eq!(model.csrs.len(), 3);
    assert_eq!(model.opcodes.len(), 11);
    assert_eq!(model.constraints.len(), 3);
    assert_eq!(model.compressions.len(), 2);
}

#[test]
fn tables_preserve_file_order() {
    let model = load_default();
    assert_eq!(model.args[0].name, "rd");
    assert_eq!(model.extensions[0].name, "rv32i");
    assert_eq!(model.extensions[8].name, "rv64c");
    assert_eq!(model.opcodes[0].name, "lui");
}

#[test]
fn every_opcode_is_fully_linked() {
    let model = load_default();
    let mut keys = HashSet::new();
    for (index, op) in model.opcodes.iter().enumerate() {
        let codec = model.codec(op.codec.unwrap_or_else(|| panic!("{} has no codec", op.key)));
        let format = model.format(op.format.expect("format resolved"));
        let ty = model.type_def(op.ty.expect("type resolved"));
        assert_eq!(
            format.name, codec.format,
            "Opcode {} format must come from its codec",
            op.key
        );
        assert_eq!(
            ty.name,
            codec.type_name(),
            "Opcode {} type must come from the codec name prefix",
            op.key
        );
        assert!(
            !op.extensions.is_empty(),
            "Opcode {} must have an extension",
            op.key
        );
        assert_eq!(op.num, index + 1, "Opcode {} num is its 1-based index", op.key);
        assert!(keys.insert(op.key.clone()), "Duplicate opcode key {}", op.key);
    }
}

#[test]
fn overloaded_mnemonic_is_disambiguated() {
    let model = load_default();
    assert!(
        model.lookup_opcode_by_key("addi").is_none(),
        "Bare 'addi' key must be renamed"
    );
    let rv32 = model
        .lookup_opcode_by_key("addi.rv32i")
        .expect("addi.rv32i exists");
    let rv64 = model
        .lookup_opcode_by_key("addi.rv64i")
        .expect("addi.rv64i exists");
    let by_name = model.lookup_opcode_by_name("addi");
    assert_eq!(by_name, &[rv32, rv64]);
    for &id in by_name {
        assert!(
            model.opcode(id).key.contains('.'),
            "Disambiguated key must carry an extension suffix"
        );
    }
}

#[test]
fn single_line_multi_extension_opcode_keeps_bare_key() {
    // lui is declared once for rv32i and rv64i; no renaming happens
    let model = load_default();
    let lui = model.lookup_opcode_by_key("lui").expect("lui exists");
    assert_eq!(model.opcode(lui).extensions.len(), 2);
}

#[test]
fn first_extension_owns_the_opcode() {
    let model = load_default();
    let rv32i = model.lookup_extension("rv32i").expect("rv32i exists");
    let owned: Vec<&str> = model
        .extension(rv32i)
        .opcodes
        .iter()
        .map(|&id| model.opcode(id).name.as_str())
        .collect();
    assert_eq!(owned, ["lui", "addi", "add", "slli", "@hint.nop"]);

    // the rv64i variant of addi is owned by rv64i, lui is not repeated there
    let rv64i = model.lookup_extension("rv64i").expect("rv64i exists");
    let owned: Vec<&str> = model
        .extension(rv64i)
        .opcodes
        .iter()
        .map(|&id| model.opcode(id).name.as_str())
        .collect();
    assert_eq!(owned, ["addi"]);

    // c.addi is owned by rv32c, so rv64c owns nothing
    let rv64c = model.lookup_extension("rv64c").expect("rv64c exists");
    assert!(model.extension(rv64c).opcodes.is_empty());
}

#[test]
fn duplicate_extensions_on_one_line_are_preserved() {
    let model = load_with(&[(
        "opcodes",
        "dup rd rs1 imm12 i 6..2=0x04 1..0=3 rv32i rv32i\n",
    )])
    .expect("duplicate extension tokens load");
    let id = model.lookup_opcode_by_key("dup").expect("dup exists");
    assert_eq!(
        model.opcode(id).extensions.len(),
        2,
        "Extension duplicates are recorded as written"
    );
    let rv32i = model.lookup_extension("rv32i").expect("rv32i exists");
    assert_eq!(
        model.extension(rv32i).opcodes.len(),
        1,
        "The owning list records the opcode once"
    );
}

#[test]
fn masks_and_args_are_attached() {
    let model = load_default();
    let lui = model.lookup_opcode_by_key("lui").expect("lui exists");
    let op = model.opcode(lui);
    assert_eq!(op.args.len(), 2);
    assert_eq!(model.arg(op.args[0]).name, "rd");
    assert_eq!(model.arg(op.args[1]).name, "imm20");
    assert_eq!(op.masks.len(), 2);
    assert_eq!(op.masks[0].range.msb, 6);
    assert_eq!(op.masks[0].value, 13);
}

#[test]
fn extension_fields_are_parsed() {
    let model = load_default();
    let rv32c = model.lookup_extension("rv32c").expect("rv32c exists");
    let ext = model.extension(rv32c);
    assert_eq!(ext.prefix, "rv");
    assert_eq!(ext.isa_width, 32);
    assert_eq!(ext.alpha_code, "c");
    assert_eq!(ext.insn_width, 16);
}

#[test]
fn extension_width_columns_are_not_validated() {
    // the width columns scan permissively like every other numeric field;
    // an unusual width is stored as-is and a malformed column parses to zero
    let extensions = "\
rv  32  i  32    \"RV32I Base Integer Instruction Set\"
rv  32  x  48    \"RV32X Experimental Wide Instructions\"
rv  32  y  junk  \"RV32Y Malformed Width Column\"
";
    let opcodes = "nop rd rs1 imm12 i 6..2=0x04 rv32i\n";
    let model = load_with(&[("extensions", extensions), ("opcodes", opcodes)])
        .expect("odd width columns load");

    let x = model.lookup_extension("rv32x").expect("rv32x exists");
    assert_eq!(model.extension(x).insn_width, 48);

    let y = model.lookup_extension("rv32y").expect("rv32y exists");
    assert_eq!(
        model.extension(y).insn_width, 0,
        "A non-numeric width column scans to zero, not an error"
    );
}

#[test]
fn csr_records_are_keyed_by_name() {
    let model = load_default();
    let id = model.lookup_csr_by_name("mstatus").expect("mstatus exists");
    assert_eq!(model.csr(id).number, 0x300);
    assert_eq!(model.csr(id).access, "mrw");
}

// ══════════════════════════════════════════════════════════
// 2. Instruction and description attachment
// ══════════════════════════════════════════════════════════

#[test]
fn instruction_text_attaches_to_every_variant() {
    let model = load_default();
    for &id in model.lookup_opcode_by_name("addi") {
        let op = model.opcode(id);
        assert_eq!(op.long_name, "add immediate");
        assert_eq!(op.pseudocode, "rd = rs1 + imm");
        assert_eq!(
            op.description,
            "Adds the sign-extended 12-bit immediate to register rs1."
        );
    }
}

#[test]
fn short_instruction_line_is_skipped() {
    // the fixture instructions file carries a bare "mul" line
    let model = load_default();
    let mul = model.lookup_opcode_by_key("mul").expect("mul exists");
    assert_eq!(model.opcode(mul).long_name, "");
}

#[test]
fn comment_tail_is_stripped_before_tokenizing() {
    let model = load_default();
    let lui = model.lookup_opcode_by_key("lui").expect("lui exists");
    // the fixture line ends in "# U-type", which never reaches the parser
    assert_eq!(
        model.opcode(lui).description,
        "Builds a 32-bit constant from the upper immediate."
    );
}

#[test]
fn hash_inside_quoted_token_still_starts_a_comment() {
    // the raw-line strip runs before tokenization, so quoting does not
    // protect '#'
    let model = load_with(&[("descriptions", "addi \"has a # inside\"\n")])
        .expect("quirky description loads");
    let id = model.lookup_opcode_by_name("addi")[0];
    assert_eq!(model.opcode(id).description, "has a");
}

// ══════════════════════════════════════════════════════════
// 3. Failure paths
// ══════════════════════════════════════════════════════════

#[test]
fn missing_file_is_an_io_error() {
    let dir = write_metadata(&[]);
    fs::remove_file(dir.path().join("opcodes")).expect("remove opcodes file");
    let err = Model::load(dir.path()).expect_err("missing file must fail");
    match err {
        ModelError::Io { ref path, .. } => {
            assert!(path.ends_with("opcodes"), "Expected opcodes path, got '{}'", path)
        }
        other => panic!("Expected Io error, got {:?}", other),
    }
}

#[test]
fn short_arg_line_is_a_syntax_error() {
    let err = load_with(&[("args", "tooshort a b\n")]).expect_err("short args line must fail");
    assert!(
        err.to_string().contains("args requires 6 parameters"),
        "Expected arity diagnostic, got '{}'",
        err
    );
}

#[test]
fn short_extension_line_is_a_syntax_error() {
    let err =
        load_with(&[("extensions", "rv 32\n")]).expect_err("short extensions line must fail");
    assert!(err.to_string().contains("extensions requires 5 parameters"));
}

#[test]
fn opcode_without_extension_fails() {
    let err = load_with(&[("opcodes", "orphan rd rs1 imm12 i 6..2=0x04\n")])
        .expect_err("opcode without extension must fail");
    assert!(
        err.to_string().contains("no extension assigned for opcode: orphan"),
        "Expected missing-extension diagnostic, got '{}'",
        err
    );
}

#[test]
fn opcode_without_codec_fails() {
    let err = load_with(&[("opcodes", "nocodec rd rs1 imm12 6..2=0x04 rv32i\n")])
        .expect_err("opcode without codec must fail");
    assert!(
        err.to_string().contains("opcode has no codec: nocodec"),
        "Expected missing-codec diagnostic, got '{}'",
        err
    );
}

#[test]
fn unknown_codec_format_names_opcode_and_format() {
    let codecs = "weird nosuchfmt\n";
    let opcodes = "wop rd weird rv32i\n";
    let err = load_with(&[("codecs", codecs), ("opcodes", opcodes)])
        .expect_err("unknown format must fail");
    let text = err.to_string();
    assert!(text.contains("wop"), "Diagnostic must name the opcode: '{}'", text);
    assert!(
        text.contains("nosuchfmt"),
        "Diagnostic must name the format: '{}'",
        text
    );
}

#[test]
fn unknown_codec_type_fails() {
    // format resolves, but no type is named "q"
    let codecs = "q_x rd,imm\n";
    let opcodes = "qop rd q_x 6..2=0x04 rv32i\n";
    let err = load_with(&[("codecs", codecs), ("opcodes", opcodes)])
        .expect_err("unknown type must fail");
    assert!(
        err.to_string().contains("unknown type: q"),
        "Expected type diagnostic, got '{}'",
        err
    );
}

#[test]
fn unrecognized_opcode_token_is_discarded() {
    let model = load_with(&[(
        "opcodes",
        "lui rd imm20 u 6..2=0x0D 1..0=3 rv32i xyzzy\n",
    )])
    .expect("unknown trailing token is only a warning");
    let lui = model.lookup_opcode_by_key("lui").expect("lui exists");
    assert_eq!(model.opcode(lui).args.len(), 2);
}

// ══════════════════════════════════════════════════════════
// 4. Serialization
// ══════════════════════════════════════════════════════════

#[test]
fn loaded_model_serializes_to_json() {
    let model = load_default();
    let json = serde_json::to_string(&model).expect("model serializes");
    assert!(json.contains("\"addi.rv32i\""));
    assert!(json.contains("\"addi.rv64i\""));
    assert!(json.contains("\"rv64d\""));
}
