// SPDX-License-Identifier: AGPL-3.0-only

//! Simulated register file
//!
//! Implements [`CsrBus`] over a plain byte array the size of the CSR
//! window. Every register behaves as simple read/write storage — no
//! hardware side effects are modeled, so a trigger register reads back
//! exactly what was written and status registers hold whatever they
//! were preset to. This is the CI path: the whole conformance suite
//! runs against `SimBus` without a FIFO bridge present.
//!
//! Accessors work at arbitrary byte offsets because the TX status
//! register sits at 0x52, off the 4-byte grid (see the chip crate).
//! Values are stored little-endian, matching the bridge's bus.

use crate::bus::CsrBus;
use axisfifo_chip::regs;
use tracing::trace;

/// RAM-backed register file covering the CSR window.
#[derive(Debug, Clone)]
pub struct SimBus {
    mem: [u8; regs::CSR_WINDOW],
}

impl SimBus {
    /// Create a register file with every register at its reset value (0).
    pub fn new() -> Self {
        Self {
            mem: [0; regs::CSR_WINDOW],
        }
    }

    /// Preset the RX and TX TREADY status registers.
    ///
    /// On hardware these are read-only and reflect FIFO state; the
    /// simulation lets tests pin them to a known level.
    #[must_use]
    pub fn with_tready(mut self, rx: u32, tx: u32) -> Self {
        self.store(regs::RX_STATUS_TREADY, rx);
        self.store(regs::TX_STATUS_TREADY, tx);
        self
    }

    /// Preset an arbitrary register, bypassing access-class semantics.
    pub fn preset(&mut self, offset: usize, value: u32) {
        self.store(offset, value);
    }

    fn load(&self, offset: usize) -> u32 {
        let m = &self.mem[offset..offset + 4];
        u32::from_le_bytes([m[0], m[1], m[2], m[3]])
    }

    fn store(&mut self, offset: usize, value: u32) {
        self.mem[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
    }
}

impl Default for SimBus {
    fn default() -> Self {
        Self::new()
    }
}

impl CsrBus for SimBus {
    fn read32(&self, offset: usize) -> u32 {
        assert!(offset + 4 <= regs::CSR_WINDOW, "register offset out of bounds");
        let value = self.load(offset);
        trace!("sim read  @ {offset:#04x} = {value:#010x}");
        value
    }

    fn write32(&mut self, offset: usize, value: u32) {
        assert!(offset + 4 <= regs::CSR_WINDOW, "register offset out of bounds");
        trace!("sim write @ {offset:#04x} = {value:#010x}");
        self.store(offset, value);
    }

    fn window(&self) -> usize {
        regs::CSR_WINDOW
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_reset_to_zero() {
        let bus = SimBus::new();
        assert_eq!(bus.read32(regs::RX_FIFO_TDATA_31_0), 0);
        assert_eq!(bus.read32(regs::TX_FIFO_CONTROL), 0);
    }

    #[test]
    fn write_read_round_trip_all_patterns() {
        let mut bus = SimBus::new();
        for v in [0x1234_5678, 0x8000_0000, 0xFFFF_FFFF, 0x0000_0000] {
            bus.write32(regs::TX_FIFO_TDATA_31_0, v);
            assert_eq!(bus.read32(regs::TX_FIFO_TDATA_31_0), v);
        }
    }

    #[test]
    fn msb_pattern_survives_literally() {
        // No sign-extension or truncation across the 32-bit boundary.
        let mut bus = SimBus::new();
        bus.write32(regs::TX_FIFO_TDATA_31_0, 0x8000_0000);
        assert_eq!(bus.read32(regs::TX_FIFO_TDATA_31_0), 0x8000_0000);
    }

    #[test]
    fn unaligned_tx_status_is_addressable() {
        let bus = SimBus::new().with_tready(1, 1);
        assert_eq!(bus.read32(regs::TX_STATUS_TREADY), 1);
        assert_eq!(bus.read32(regs::RX_STATUS_TREADY), 1);
    }

    #[test]
    fn adjacent_registers_do_not_alias() {
        let mut bus = SimBus::new();
        bus.write32(regs::RX_FIFO_TDATA_31_0, 0xFFFF_FFFF);
        assert_eq!(bus.read32(regs::RX_FIFO_TDATA_63_32), 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn out_of_window_read_panics() {
        let bus = SimBus::new();
        let _ = bus.read32(regs::CSR_WINDOW);
    }
}
