//! Trigger/status probe
//!
//! Per direction: assert TVALID (write 1), observe the readback; write
//! 0 to stand in for the hardware auto-clear, observe again; then take
//! a single TREADY sample with no expected literal — its level depends
//! on FIFO state. One sample per signal, no retry and no polling.

use axisfifo_chip::regs::HANDSHAKE_REGS;
use tracing::trace;

use crate::device::FifoDevice;
use crate::report::{Expected, Observation, Report, ValueStyle};

/// Probe the TVALID/TREADY pairs for both directions.
pub fn probe_handshake(dev: &mut FifoDevice, report: &mut Report) {
    for pair in HANDSHAKE_REGS {
        trace!("Handshake probe, {} direction", pair.direction);

        report.section(format!("Testing {} TRIGGER.TVALID...", pair.direction));
        dev.write(&pair.trigger, 1);
        report.observe(Observation {
            label: format!("{} TVALID after write", pair.direction),
            observed: dev.read(&pair.trigger),
            expected: Expected::Value(1),
            style: ValueStyle::Dec,
        });

        // Simulate the hardware clearing TVALID after the transfer.
        dev.write(&pair.trigger, 0);
        report.observe(Observation {
            label: format!("{} TVALID after auto-clear", pair.direction),
            observed: dev.read(&pair.trigger),
            expected: Expected::Value(0),
            style: ValueStyle::Dec,
        });

        report.section(format!("Testing {} STATUS.TREADY...", pair.direction));
        report.observe(Observation {
            label: format!("{} TREADY", pair.direction),
            observed: dev.read(&pair.status),
            expected: Expected::HardwareDependent,
            style: ValueStyle::Dec,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::SimBus;

    #[test]
    fn trigger_round_trip() {
        let mut dev = FifoDevice::from_bus(Box::new(SimBus::new()));
        let mut report = Report::new();
        probe_handshake(&mut dev, &mut report);
        // 2 directions × (after-write, after-clear, status)
        assert_eq!(report.observations().count(), 6);
        assert_eq!(report.mismatches(), 0);
    }

    #[test]
    fn status_sample_carries_preset_level() {
        let bus = SimBus::new().with_tready(1, 0);
        let mut dev = FifoDevice::from_bus(Box::new(bus));
        let mut report = Report::new();
        probe_handshake(&mut dev, &mut report);

        let status: Vec<&Observation> = report
            .observations()
            .filter(|o| o.label.ends_with("TREADY"))
            .collect();
        assert_eq!(status[0].observed, 1); // RX
        assert_eq!(status[1].observed, 0); // TX
        assert_eq!(
            status[0].to_string(),
            "RX TREADY = 1 (expected: depends on FIFO state)"
        );
    }

    #[test]
    fn triggers_left_deasserted() {
        let mut dev = FifoDevice::from_bus(Box::new(SimBus::new()));
        let mut report = Report::new();
        probe_handshake(&mut dev, &mut report);
        for pair in HANDSHAKE_REGS {
            assert_eq!(dev.read(&pair.trigger), 0);
        }
    }
}
