//! FIFO bridge device handle
//!
//! The device handle is the explicit stand-in for what used to be an
//! ambient global base address: it is constructed once, owns the bus,
//! and is passed into every probe. Register access goes through the
//! declarative [`RegDef`] table entries, never through raw offsets.

use axisfifo_chip::RegDef;

use crate::bus::{select_bus, BusSelection, CsrBus};
use crate::error::Result;

/// Handle to one AXI-Stream FIFO bridge CSR block.
#[derive(Debug)]
pub struct FifoDevice {
    bus: Box<dyn CsrBus>,
}

impl FifoDevice {
    /// Open a device at `base` using the given bus selection.
    ///
    /// # Errors
    ///
    /// Returns error if a forced hardware selection cannot map the
    /// CSR window.
    pub fn open(selection: BusSelection, base: usize) -> Result<Self> {
        let bus = select_bus(selection, base)?;
        tracing::debug!("Opened FIFO device, window {:#x} bytes", bus.window());
        Ok(Self { bus })
    }

    /// Wrap an already-constructed bus (used by tests to keep a handle
    /// on a preset simulated register file).
    pub fn from_bus(bus: Box<dyn CsrBus>) -> Self {
        Self { bus }
    }

    /// Read a register through its table entry.
    pub fn read(&self, reg: &RegDef) -> u32 {
        self.bus.read32(reg.offset)
    }

    /// Write a register through its table entry.
    pub fn write(&mut self, reg: &RegDef, value: u32) {
        self.bus.write32(reg.offset, value);
    }

    /// OR `mask` into a register (read-modify-write).
    pub fn set_bits(&mut self, reg: &RegDef, mask: u32) {
        self.bus.set_bits(reg.offset, mask);
    }
}
