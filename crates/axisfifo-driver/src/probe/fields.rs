//! Control-register bitfield probe
//!
//! Exercises every field in the declarative table: OR the field's mask
//! in, read back, extract, observe against the table's expected value.
//! Afterwards the bits outside the field union are compared against the
//! register's pre-probe value — the one check in the suite that carries
//! a PASS/FAIL verdict. The original register value is restored on the
//! way out, pass or fail.

use axisfifo_chip::fields::{CONTROL_FIELDS, FIELD_UNION_MASK};
use axisfifo_chip::regs::RegDef;
use tracing::trace;

use crate::device::FifoDevice;
use crate::report::{Expected, IsolationCheck, Observation, Report, ValueStyle};

/// Run the bitfield probe on one control register.
pub fn probe_control_fields(dev: &mut FifoDevice, reg: &RegDef, report: &mut Report) {
    let original = dev.read(reg);
    trace!("Bitfield probe on {}, original {original:#010x}", reg.name);

    for field in CONTROL_FIELDS {
        dev.set_bits(reg, field.mask);
        let raw = dev.read(reg);
        report.observe(Observation {
            label: format!("{} {}", reg.name, field.name),
            observed: field.extract(raw),
            expected: Expected::Value(field.expected),
            style: if field.width() == 1 {
                ValueStyle::Dec
            } else {
                ValueStyle::Hex
            },
        });
    }

    // Bits outside every field must still read as they did before.
    let untouched = !FIELD_UNION_MASK;
    let passed = dev.read(reg) & untouched == original & untouched;
    report.check(IsolationCheck {
        register: reg.name.to_string(),
        passed,
    });

    dev.write(reg, original);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::SimBus;
    use crate::bus::CsrBus;
    use axisfifo_chip::regs;

    const RX_CTL: &RegDef = &regs::CONTROL_REGS[0];

    #[test]
    fn zeroed_register_passes_isolation() {
        let mut dev = FifoDevice::from_bus(Box::new(SimBus::new()));
        let mut report = Report::new();
        probe_control_fields(&mut dev, RX_CTL, &mut report);

        assert_eq!(report.checks_failed(), 0);
        assert_eq!(report.mismatches(), 0);
        // Restored to the zeroed original.
        assert_eq!(dev.read(RX_CTL), 0);
    }

    #[test]
    fn tkeep_bits_set_after_first_field() {
        // After TKEEP is exercised, the register holds all sixteen
        // TKEEP bits; verify via a bus we keep our own view of.
        let mut bus = SimBus::new();
        bus.set_bits(RX_CTL.offset, axisfifo_chip::fields::TKEEP_MASK);
        assert_eq!(bus.read32(RX_CTL.offset) & 0xFFFF_0000, 0xFFFF_0000);
    }

    #[test]
    fn nonzero_original_restored() {
        let mut bus = SimBus::new();
        bus.preset(RX_CTL.offset, 0x0000_A600); // reserved bits 9..15 only
        let mut dev = FifoDevice::from_bus(Box::new(bus));
        let mut report = Report::new();
        probe_control_fields(&mut dev, RX_CTL, &mut report);
        assert_eq!(dev.read(RX_CTL), 0x0000_A600);
    }

    #[test]
    fn reserved_bit_flip_fails_isolation() {
        // A register file that spuriously sets a reserved bit when the
        // field union is written must be caught by the check.
        #[derive(Debug)]
        struct StickyBit9(SimBus);
        impl CsrBus for StickyBit9 {
            fn read32(&self, offset: usize) -> u32 {
                self.0.read32(offset)
            }
            fn write32(&mut self, offset: usize, value: u32) {
                let poisoned = if offset == RX_CTL.offset && value & FIELD_UNION_MASK != 0 {
                    value | (1 << 9)
                } else {
                    value
                };
                self.0.write32(offset, poisoned);
            }
            fn window(&self) -> usize {
                self.0.window()
            }
        }

        let mut dev = FifoDevice::from_bus(Box::new(StickyBit9(SimBus::new())));
        let mut report = Report::new();
        probe_control_fields(&mut dev, RX_CTL, &mut report);
        assert_eq!(report.checks_failed(), 1);
    }

    #[test]
    fn field_observations_in_table_order() {
        let mut dev = FifoDevice::from_bus(Box::new(SimBus::new()));
        let mut report = Report::new();
        probe_control_fields(&mut dev, RX_CTL, &mut report);
        let labels: Vec<String> = report.observations().map(|o| o.label.clone()).collect();
        assert_eq!(
            labels,
            [
                "RX_FIFO_CONTROL TKEEP",
                "RX_FIFO_CONTROL TLAST",
                "RX_FIFO_CONTROL TUSER_BYPASS_ALL",
                "RX_FIFO_CONTROL TUSER_BYPASS_STAGE",
                "RX_FIFO_CONTROL TUSER_SRC",
                "RX_FIFO_CONTROL TUSER_DST",
            ]
        );
    }

    #[test]
    fn single_bit_fields_render_decimal() {
        let mut dev = FifoDevice::from_bus(Box::new(SimBus::new()));
        let mut report = Report::new();
        probe_control_fields(&mut dev, RX_CTL, &mut report);
        let tlast = report.observations().nth(1).unwrap();
        assert_eq!(tlast.to_string(), "RX_FIFO_CONTROL TLAST = 1 (expected: 1)");
        let tkeep = report.observations().next().unwrap();
        assert_eq!(tkeep.to_string(), "RX_FIFO_CONTROL TKEEP = 0xFFFF (expected: 0xFFFF)");
    }
}
