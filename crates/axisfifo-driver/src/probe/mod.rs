// SPDX-License-Identifier: AGPL-3.0-only

//! Conformance probes
//!
//! Three probes cover the register map, run in a fixed order by
//! [`run_conformance`]:
//!
//! 1. [`data`] — pattern write/read over every TDATA lane
//! 2. [`fields`] — per-field set/extract on the control registers plus
//!    the field-isolation check
//! 3. [`handshake`] — TVALID trigger round-trip and a single TREADY
//!    sample per direction
//!
//! Probes mutate registers as a side effect; only the bitfield probe
//! restores what it found.

pub mod data;
pub mod fields;
pub mod handshake;

use axisfifo_chip::regs::CONTROL_REGS;

use crate::device::FifoDevice;
use crate::report::Report;

/// Run the full conformance suite against one device.
///
/// Data lanes first, then each control register (value patterns, then
/// bitfields), then the trigger/status pairs. Failures surface only in
/// the returned report; the suite itself never errors.
pub fn run_conformance(dev: &mut FifoDevice) -> Report {
    let mut report = Report::new();
    tracing::debug!("Starting register conformance run");

    data::probe_data_registers(dev, &mut report);

    for reg in CONTROL_REGS {
        data::probe_register(dev, reg, &mut report);
        fields::probe_control_fields(dev, reg, &mut report);
    }

    handshake::probe_handshake(dev, &mut report);

    tracing::debug!(
        "Conformance run done: {} observations, {} checks failed",
        report.observations().count(),
        report.checks_failed()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::SimBus;

    #[test]
    fn full_run_on_simulated_bus_passes() {
        let mut dev = FifoDevice::from_bus(Box::new(SimBus::new()));
        let report = run_conformance(&mut dev);
        assert_eq!(report.checks_failed(), 0);
        assert_eq!(report.mismatches(), 0);
    }

    #[test]
    fn full_run_observation_count() {
        // 8 data regs × 4 patterns + 2 control regs × (4 patterns + 6 fields)
        // + 2 directions × (2 trigger + 1 status)
        let mut dev = FifoDevice::from_bus(Box::new(SimBus::new()));
        let report = run_conformance(&mut dev);
        assert_eq!(report.observations().count(), 32 + 20 + 6);
        assert_eq!(report.checks().count(), 2);
    }
}
