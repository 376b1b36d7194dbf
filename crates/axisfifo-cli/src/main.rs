//! `axisfifo` — console conformance checker for the AXI-Stream FIFO bridge.
//!
//! ```text
//! USAGE:
//!   axisfifo check [--sim] [--base <hex>]   Run the full conformance suite
//!   axisfifo data                           Data lane probe only
//!   axisfifo fields                         Control bitfield probe only
//!   axisfifo handshake                      Trigger/status probe only
//!   axisfifo map                            Print the register map
//! ```
//!
//! The process always exits 0; conformance verdicts live in the printed
//! report, not in the exit status.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use axisfifo_chip::{fields, regs};
use axisfifo_driver::probe::{data, fields as field_probe, handshake};
use axisfifo_driver::{run_conformance, BusSelection, FifoDevice, Report};

#[derive(Parser)]
#[command(name = "axisfifo", about = "AXI-Stream FIFO bridge CSR conformance checker", version)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Args)]
struct BusArgs {
    /// Use the simulated register file instead of hardware.
    #[arg(long)]
    sim: bool,

    /// Physical base address of the CSR block (hex).
    #[arg(long, value_parser = parse_hex, default_value = "0x20000000")]
    base: usize,
}

impl BusArgs {
    fn open(&self) -> axisfifo_driver::Result<FifoDevice> {
        let selection = if self.sim {
            BusSelection::Sim
        } else {
            BusSelection::Auto
        };
        FifoDevice::open(selection, self.base)
    }
}

#[derive(Subcommand)]
enum Cmd {
    /// Run the full conformance suite: data lanes, control bitfields,
    /// trigger/status.
    Check(BusArgs),
    /// Probe the eight TDATA lane registers.
    Data(BusArgs),
    /// Probe the control registers: value patterns plus bitfields.
    Fields(BusArgs),
    /// Probe the TVALID triggers and TREADY status registers.
    Handshake(BusArgs),
    /// Print the register map and field layout.
    Map,
}

fn parse_hex(s: &str) -> Result<usize, String> {
    let t = s.trim_start_matches("0x").trim_start_matches("0X");
    usize::from_str_radix(t, 16).map_err(|e| format!("invalid hex address {s:?}: {e}"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Cmd::Check(bus) => cmd_check(&bus)?,
        Cmd::Data(bus) => cmd_data(&bus)?,
        Cmd::Fields(bus) => cmd_fields(&bus)?,
        Cmd::Handshake(bus) => cmd_handshake(&bus)?,
        Cmd::Map => cmd_map(),
    }

    Ok(())
}

fn cmd_check(bus: &BusArgs) -> Result<()> {
    println!("Starting register test...");
    let mut dev = bus.open()?;
    let report = run_conformance(&mut dev);
    print!("{report}");
    println!();
    summarize(&report);
    println!("Test completed.");
    Ok(())
}

fn cmd_data(bus: &BusArgs) -> Result<()> {
    let mut dev = bus.open()?;
    let mut report = Report::new();
    data::probe_data_registers(&mut dev, &mut report);
    print!("{report}");
    Ok(())
}

fn cmd_fields(bus: &BusArgs) -> Result<()> {
    let mut dev = bus.open()?;
    let mut report = Report::new();
    for reg in regs::CONTROL_REGS {
        data::probe_register(&mut dev, reg, &mut report);
        field_probe::probe_control_fields(&mut dev, reg, &mut report);
    }
    print!("{report}");
    println!();
    summarize(&report);
    Ok(())
}

fn cmd_handshake(bus: &BusArgs) -> Result<()> {
    let mut dev = bus.open()?;
    let mut report = Report::new();
    handshake::probe_handshake(&mut dev, &mut report);
    print!("{report}");
    Ok(())
}

fn cmd_map() {
    println!("CSR base: {:#x}  window: {:#x} bytes", regs::CSR_BASE, regs::CSR_WINDOW);
    println!();

    println!("Registers:");
    for reg in regs::DATA_REGS.iter().chain(regs::CONTROL_REGS) {
        println!("  +{:#04x}  {:<22} {:?}", reg.offset, reg.name, reg.access);
    }
    for pair in regs::HANDSHAKE_REGS {
        println!(
            "  +{:#04x}  {:<22} {:?}",
            pair.trigger.offset, pair.trigger.name, pair.trigger.access
        );
        println!(
            "  +{:#04x}  {:<22} {:?}",
            pair.status.offset, pair.status.name, pair.status.access
        );
    }
    println!();

    println!("Control register fields:");
    for f in fields::CONTROL_FIELDS {
        println!(
            "  {:<20} mask {:#010x}  shift {:>2}  width {:>2}",
            f.name,
            f.mask,
            f.shift,
            f.width()
        );
    }
    println!(
        "  {:<20} mask {:#010x}  (reserved bits stay outside every field)",
        "union", fields::FIELD_UNION_MASK
    );
}

fn summarize(report: &Report) {
    let checks = report.checks().count();
    let failed = report.checks_failed();
    let mismatches = report.mismatches();
    println!(
        "Summary: {} observations, {}/{} isolation checks passed, {} literal mismatches",
        report.observations().count(),
        checks - failed,
        checks,
        mismatches
    );
}
