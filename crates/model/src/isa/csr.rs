//! Static CSR number metadata.
//!
//! A fixed table mapping 16-bit CSR numbers to their access permission,
//! short name, and description. The table may contain duplicate numbers;
//! the lookup index is built lazily on first access and later rows
//! overwrite earlier ones.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

/// CSR access permission classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CsrPerm {
    /// User-mode read/write.
    Urw,
    /// User-mode read-only.
    Uro,
    /// Supervisor-mode read/write.
    Srw,
    /// Supervisor-mode read-only.
    Sro,
    /// Hypervisor-mode read/write.
    Hrw,
    /// Hypervisor-mode read-only.
    Hro,
    /// Machine-mode read/write.
    Mrw,
    /// Machine-mode read-only.
    Mro,
}

/// One static CSR metadata record.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct CsrDef {
    /// CSR number.
    pub num: u16,
    /// Access permission class.
    pub perm: CsrPerm,
    /// Short name.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
}

const fn def(num: u16, perm: CsrPerm, name: &'static str, description: &'static str) -> CsrDef {
    CsrDef {
        num,
        perm,
        name,
        description,
    }
}

/// The static CSR metadata table, in specification order.
pub static CSR_TABLE: &[CsrDef] = &[
    def(0x001, CsrPerm::Urw, "fflags", "Floating-Point Accrued Exceptions"),
    def(0x002, CsrPerm::Urw, "frm", "Floating-Point Dynamic Rounding Mode"),
    def(0x003, CsrPerm::Urw, "fcsr", "Floating-Point Control and Status Register (frm + fflags)"),
    def(0xC00, CsrPerm::Uro, "cycle", "Cycle counter for RDCYCLE instruction"),
    def(0xC01, CsrPerm::Uro, "time", "Timer for RDTIME instruction"),
    def(0xC02, CsrPerm::Uro, "instret", "Instructions-retired counter for RDINSTRET instruction"),
    def(0xC80, CsrPerm::Uro, "cycleh", "Upper 32 bits of cycle, RV32I only"),
    def(0xC81, CsrPerm::Uro, "timeh", "Upper 32 bits of time, RV32I only"),
    def(0xC82, CsrPerm::Uro, "instreth", "Upper 32 bits of instret, RV32I only"),
    def(0x100, CsrPerm::Srw, "sstatus", "Supervisor status register"),
    def(0x101, CsrPerm::Srw, "stvec", "Supervisor trap handler base address"),
    def(0x104, CsrPerm::Srw, "sie", "Supervisor interrupt-enable register"),
    def(0x121, CsrPerm::Srw, "stimecmp", "Wall-clock timer compare value"),
    def(0xD01, CsrPerm::Sro, "stime", "Supervisor wall-clock time register"),
    def(0xD81, CsrPerm::Sro, "stimeh", "Upper 32 bits of stime, RV32I only"),
    def(0x140, CsrPerm::Srw, "sscratch", "Scratch register for supervisor trap handlers"),
    def(0x141, CsrPerm::Srw, "sepc", "Supervisor exception program counter"),
    def(0xD42, CsrPerm::Sro, "scause", "Supervisor trap cause"),
    def(0xD43, CsrPerm::Sro, "sbadaddr", "Supervisor bad address"),
    def(0x144, CsrPerm::Srw, "sip", "Supervisor interrupt pending"),
    def(0x180, CsrPerm::Srw, "sptbr", "Page-table base register"),
    def(0x181, CsrPerm::Srw, "sasid", "Address-space ID"),
    def(0x900, CsrPerm::Srw, "cyclew", "Cycle counter for RDCYCLE instruction"),
    def(0x901, CsrPerm::Srw, "timew", "Timer for RDTIME instruction"),
    def(0x902, CsrPerm::Srw, "instretw", "Instructions-retired counter for RDINSTRET instruction"),
    def(0x980, CsrPerm::Srw, "cyclehw", "Upper 32 bits of cycle, RV32I only"),
    def(0x981, CsrPerm::Srw, "timehw", "Upper 32 bits of time, RV32I only"),
    def(0x982, CsrPerm::Srw, "instrethw", "Upper 32 bits of instret, RV32I only"),
    def(0x200, CsrPerm::Hrw, "hstatus", "Hypervisor status register"),
    def(0x201, CsrPerm::Hrw, "htvec", "Hypervisor trap handler base address"),
    def(0x202, CsrPerm::Hrw, "htdeleg", "Hypervisor trap delegation register"),
    def(0x221, CsrPerm::Hrw, "htimecmp", "Hypervisor wall-clock timer compare value"),
    def(0xE01, CsrPerm::Hro, "htime", "Hypervisor wall-clock time register"),
    def(0xE81, CsrPerm::Hro, "htimeh", "Upper 32 bits of htime, RV32I only"),
    def(0x240, CsrPerm::Hrw, "hscratch", "Scratch register for hypervisor trap handlers"),
    def(0x241, CsrPerm::Hrw, "hepc", "Hypervisor exception program counter"),
    def(0x242, CsrPerm::Hrw, "hcause", "Hypervisor trap cause"),
    def(0x243, CsrPerm::Hrw, "hbadaddr", "Hypervisor bad address"),
    def(0xA01, CsrPerm::Hrw, "stimew", "Supervisor wall-clock timer"),
    def(0xA81, CsrPerm::Hrw, "stimehw", "Upper 32 bits of supervisor wall-clock timer, RV32I only"),
    def(0xF00, CsrPerm::Mro, "mcpuid", "CPU description"),
    def(0xF01, CsrPerm::Mro, "mimpid", "Vendor ID and version number"),
    def(0xF10, CsrPerm::Mro, "mhartid", "Hardware thread ID"),
    def(0x300, CsrPerm::Mrw, "mstatus", "Machine status register"),
    def(0x301, CsrPerm::Mrw, "mtvec", "Machine trap-handler base address"),
    def(0x302, CsrPerm::Mrw, "mtdeleg", "Machine trap delegation register"),
    def(0x304, CsrPerm::Mrw, "mie", "Machine interrupt-enable register"),
    def(0x321, CsrPerm::Mrw, "mtimecmp", "Machine wall-clock timer compare value"),
    // The specification repeats the machine trap-setup block; the repeated
    // rows are kept so the last-duplicate-wins index rule stays observable.
    def(0x300, CsrPerm::Mrw, "mstatus", "Machine status register"),
    def(0x301, CsrPerm::Mrw, "mtvec", "Machine trap-handler base address"),
    def(0x302, CsrPerm::Mrw, "mtdeleg", "Machine trap delegation register"),
    def(0x304, CsrPerm::Mrw, "mie", "Machine interrupt-enable register"),
    def(0x321, CsrPerm::Mrw, "mtimecmp", "Machine wall-clock timer compare value"),
    def(0x340, CsrPerm::Mrw, "mscratch", "Scratch register for machine trap handlers"),
    def(0x341, CsrPerm::Mrw, "mepc", "Machine exception program counter"),
    def(0x342, CsrPerm::Mrw, "mcause", "Machine trap cause"),
    def(0x343, CsrPerm::Mrw, "mbadaddr", "Machine bad address"),
    def(0x344, CsrPerm::Mrw, "mip", "Machine interrupt pending"),
    def(0x380, CsrPerm::Mrw, "mbase", "Base register"),
    def(0x381, CsrPerm::Mrw, "mbound", "Bound register"),
    def(0x382, CsrPerm::Mrw, "mibase", "Instruction base register"),
    def(0x383, CsrPerm::Mrw, "mibound", "Instruction bound register"),
    def(0x384, CsrPerm::Mrw, "mdbase", "Data base register"),
    def(0x385, CsrPerm::Mrw, "mdbound", "Data bound register"),
    def(0xB01, CsrPerm::Mrw, "htimew", "Hypervisor wall-clock timer"),
    def(0xB81, CsrPerm::Mrw, "htimehw", "Upper 32 bits of hypervisor wall-clock timer, RV32I only"),
    def(0x780, CsrPerm::Mrw, "mtohost", "Output register to host"),
    def(0x781, CsrPerm::Mrw, "mfromhost", "Input register from host"),
];

static CSR_MAP: LazyLock<HashMap<u16, &'static CsrDef>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for entry in CSR_TABLE {
        map.insert(entry.num, entry);
    }
    map
});

/// Looks up the static metadata record for a CSR number.
///
/// Returns `None` for numbers the table does not describe. When the table
/// holds duplicates of a number, the last row wins.
pub fn lookup_csr(num: u16) -> Option<&'static CsrDef> {
    CSR_MAP.get(&num).copied()
}
