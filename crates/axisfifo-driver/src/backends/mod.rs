//! Bus backends
//!
//! ```text
//! Hardware:
//!   DevMemBus — /dev/mem mmap of the physical CSR window
//!
//! Development / CI:
//!   SimBus    — RAM-backed register file, no hardware required
//! ```

pub mod devmem;
pub mod sim;

pub use devmem::DevMemBus;
pub use sim::SimBus;
