//! CSR map for the AXI-Stream FIFO bridge.
//!
//! Offsets are relative to the block's base address. The datapath is
//! 128 bits wide per direction, exposed as four 32-bit TDATA lanes; each
//! direction additionally has one control register, a TVALID trigger and
//! a TREADY status register.
//!
//! ```text
//! 0x00–0x0C  RX TDATA lanes        (RW)
//! 0x10       RX control            (RW)
//! 0x20–0x2C  TX TDATA lanes        (RW)
//! 0x30       TX control            (RW)
//! 0x40/0x44  RX trigger / status   (pulse / RO)
//! 0x48/0x52  TX trigger / status   (pulse / RO)  // sic, see TX_STATUS_TREADY
//! ```

/// Default physical base address of the CSR block.
pub const CSR_BASE: usize = 0x2000_0000;

/// Size of the mapped CSR window in bytes.
///
/// Covers the highest decoded offset (`TX_STATUS_TREADY` at 0x52, four
/// bytes wide) with headroom to the next 32-byte boundary.
pub const CSR_WINDOW: usize = 0x60;

// ── RX FIFO data lanes ───────────────────────────────────────────────────────

/// RX TDATA bits 31:0.
pub const RX_FIFO_TDATA_31_0: usize = 0x00;
/// RX TDATA bits 63:32.
pub const RX_FIFO_TDATA_63_32: usize = 0x04;
/// RX TDATA bits 95:64.
pub const RX_FIFO_TDATA_95_64: usize = 0x08;
/// RX TDATA bits 127:96.
pub const RX_FIFO_TDATA_127_96: usize = 0x0C;

// ── TX FIFO data lanes ───────────────────────────────────────────────────────

/// TX TDATA bits 31:0.
pub const TX_FIFO_TDATA_31_0: usize = 0x20;
/// TX TDATA bits 63:32.
pub const TX_FIFO_TDATA_63_32: usize = 0x24;
/// TX TDATA bits 95:64.
pub const TX_FIFO_TDATA_95_64: usize = 0x28;
/// TX TDATA bits 127:96.
pub const TX_FIFO_TDATA_127_96: usize = 0x2C;

// ── Control ──────────────────────────────────────────────────────────────────

/// RX control register (TKEEP/TLAST/TUSER fields, see [`crate::fields`]).
pub const RX_FIFO_CONTROL: usize = 0x10;
/// TX control register, same field layout as RX.
pub const TX_FIFO_CONTROL: usize = 0x30;

// ── Handshake ────────────────────────────────────────────────────────────────

/// RX TVALID trigger — write 1 to assert; hardware clears after transfer.
pub const RX_TRIGGER_TVALID: usize = 0x40;
/// RX TREADY status — read-only, reflects FIFO state.
pub const RX_STATUS_TREADY: usize = 0x44;
/// TX TVALID trigger.
pub const TX_TRIGGER_TVALID: usize = 0x48;
/// TX TREADY status.
///
/// Sic: 0x52 breaks the +4 stride the RX side uses (0x4C would be the
/// regular spot) and is not 4-byte aligned. This matches the shipped
/// address decode — do not renumber without a silicon change.
pub const TX_STATUS_TREADY: usize = 0x52;

/// Access class of a register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Plain read/write storage.
    ReadWrite,
    /// Write-to-pulse trigger; readable, cleared by hardware.
    Trigger,
    /// Read-only status, value depends on FIFO state.
    ReadOnly,
}

/// One entry in the declarative register table.
#[derive(Debug, Clone, Copy)]
pub struct RegDef {
    /// Register name as printed in reports.
    pub name: &'static str,
    /// Byte offset from the block base.
    pub offset: usize,
    /// Access class.
    pub access: Access,
}

/// All eight TDATA lane registers, RX lanes first, probe order.
pub const DATA_REGS: &[RegDef] = &[
    RegDef { name: "RX_FIFO_TDATA_31_0",   offset: RX_FIFO_TDATA_31_0,   access: Access::ReadWrite },
    RegDef { name: "RX_FIFO_TDATA_63_32",  offset: RX_FIFO_TDATA_63_32,  access: Access::ReadWrite },
    RegDef { name: "RX_FIFO_TDATA_95_64",  offset: RX_FIFO_TDATA_95_64,  access: Access::ReadWrite },
    RegDef { name: "RX_FIFO_TDATA_127_96", offset: RX_FIFO_TDATA_127_96, access: Access::ReadWrite },
    RegDef { name: "TX_FIFO_TDATA_31_0",   offset: TX_FIFO_TDATA_31_0,   access: Access::ReadWrite },
    RegDef { name: "TX_FIFO_TDATA_63_32",  offset: TX_FIFO_TDATA_63_32,  access: Access::ReadWrite },
    RegDef { name: "TX_FIFO_TDATA_95_64",  offset: TX_FIFO_TDATA_95_64,  access: Access::ReadWrite },
    RegDef { name: "TX_FIFO_TDATA_127_96", offset: TX_FIFO_TDATA_127_96, access: Access::ReadWrite },
];

/// Both control registers, RX first, probe order.
pub const CONTROL_REGS: &[RegDef] = &[
    RegDef { name: "RX_FIFO_CONTROL", offset: RX_FIFO_CONTROL, access: Access::ReadWrite },
    RegDef { name: "TX_FIFO_CONTROL", offset: TX_FIFO_CONTROL, access: Access::ReadWrite },
];

/// Trigger/status register pairs, one per direction.
#[derive(Debug, Clone, Copy)]
pub struct HandshakeDef {
    /// Direction label as printed in reports ("RX" / "TX").
    pub direction: &'static str,
    /// TVALID trigger register.
    pub trigger: RegDef,
    /// TREADY status register.
    pub status: RegDef,
}

/// Handshake pairs in probe order.
pub const HANDSHAKE_REGS: &[HandshakeDef] = &[
    HandshakeDef {
        direction: "RX",
        trigger: RegDef { name: "RX_TRIGGER_TVALID", offset: RX_TRIGGER_TVALID, access: Access::Trigger },
        status:  RegDef { name: "RX_STATUS_TREADY",  offset: RX_STATUS_TREADY,  access: Access::ReadOnly },
    },
    HandshakeDef {
        direction: "TX",
        trigger: RegDef { name: "TX_TRIGGER_TVALID", offset: TX_TRIGGER_TVALID, access: Access::Trigger },
        status:  RegDef { name: "TX_STATUS_TREADY",  offset: TX_STATUS_TREADY,  access: Access::ReadOnly },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lane_registers_stride_by_four() {
        for w in DATA_REGS[..4].windows(2) {
            assert_eq!(w[1].offset - w[0].offset, 4);
        }
        for w in DATA_REGS[4..].windows(2) {
            assert_eq!(w[1].offset - w[0].offset, 4);
        }
    }

    #[test]
    fn register_offsets_non_overlapping() {
        let mut offsets: Vec<usize> = DATA_REGS
            .iter()
            .chain(CONTROL_REGS)
            .map(|r| r.offset)
            .collect();
        for h in HANDSHAKE_REGS {
            offsets.push(h.trigger.offset);
            offsets.push(h.status.offset);
        }
        offsets.sort_unstable();
        for w in offsets.windows(2) {
            assert!(w[1] - w[0] >= 4, "registers at {:#x}/{:#x} overlap", w[0], w[1]);
        }
    }

    #[test]
    fn window_covers_every_register() {
        for h in HANDSHAKE_REGS {
            assert!(h.status.offset + 4 <= CSR_WINDOW);
            assert!(h.trigger.offset + 4 <= CSR_WINDOW);
        }
        assert!(TX_FIFO_CONTROL + 4 <= CSR_WINDOW);
    }

    #[test]
    fn tx_status_keeps_shipped_decode() {
        // 0x52, not the regular 0x4C — matches silicon as shipped.
        assert_eq!(TX_STATUS_TREADY, 0x52);
        assert_ne!(TX_STATUS_TREADY % 4, 0);
    }
}
