//! Conformance checker for the AXI-Stream FIFO bridge CSR block.
//!
//! The bridge exposes a 128-bit streaming datapath per direction as four
//! 32-bit TDATA lanes, a control register carrying the TKEEP/TLAST/TUSER
//! sideband fields, and a TVALID/TREADY handshake pair. This crate
//! writes known patterns through every register, reads them back and
//! collects the observations into a console report for bring-up.
//!
//! # Bus hierarchy
//!
//! ```text
//! Hardware:
//!   DevMemBus — /dev/mem mmap of the physical CSR window (root)
//!
//! Development / CI:
//!   SimBus    — RAM-backed register file, no hardware required
//! ```
//!
//! # Quick start
//!
//! ```
//! use axisfifo_driver::{run_conformance, BusSelection, FifoDevice};
//! use axisfifo_chip::CSR_BASE;
//!
//! # fn main() -> axisfifo_driver::Result<()> {
//! let mut dev = FifoDevice::open(BusSelection::Sim, CSR_BASE)?;
//! let report = run_conformance(&mut dev);
//! print!("{report}");
//! assert_eq!(report.checks_failed(), 0);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod backends;
mod bus;
mod device;
mod error;
pub mod probe;
mod report;

/// Register map constants (re-exported from axisfifo-chip).
pub mod csr {
    pub use axisfifo_chip::fields::{CONTROL_FIELDS, FIELD_UNION_MASK};
    pub use axisfifo_chip::regs::{
        CONTROL_REGS, CSR_BASE, CSR_WINDOW, DATA_REGS, HANDSHAKE_REGS,
    };
}

pub use backends::{DevMemBus, SimBus};
pub use bus::{select_bus, BusSelection, CsrBus};
pub use device::FifoDevice;
pub use error::{FifoError, Result};
pub use probe::data::TEST_PATTERNS;
pub use probe::run_conformance;
pub use report::{Expected, IsolationCheck, Observation, Report, ValueStyle};

/// Commonly used types.
pub mod prelude {
    pub use crate::{
        run_conformance, BusSelection, CsrBus, FifoDevice, FifoError, Report, Result, SimBus,
    };
}
