// SPDX-License-Identifier: AGPL-3.0-only

//! Conformance report
//!
//! Probes append observations and checks to a [`Report`]; the report
//! renders the line-oriented console format the bring-up flow expects,
//! one observation per line:
//!
//! ```text
//! RX_FIFO_TDATA_31_0 = 0x12345678 (expected: 0x12345678)
//! RX_FIFO_CONTROL TKEEP = 0xFFFF (expected: 0xFFFF)
//! RX_FIFO_CONTROL TLAST = 1 (expected: 1)
//! RX TREADY = 0 (expected: depends on FIFO state)
//! RX_FIFO_CONTROL - Other fields remain unchanged (PASS)
//! ```
//!
//! Only isolation checks carry a verdict; plain observations leave the
//! comparison to the reader.

use std::fmt;

/// How a value is rendered: hex for registers and wide fields, decimal
/// for single-bit flags and handshake levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueStyle {
    /// `0x12345678`
    Hex,
    /// `1`
    Dec,
}

/// What an observation is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// Authoring-time literal.
    Value(u32),
    /// No literal exists; depends on FIFO state.
    HardwareDependent,
}

/// One observed register or field value.
#[derive(Debug, Clone)]
pub struct Observation {
    /// Line label, e.g. `RX_FIFO_CONTROL TKEEP` or `RX TVALID after write`.
    pub label: String,
    /// Value read back.
    pub observed: u32,
    /// Comparison target.
    pub expected: Expected,
    /// Rendering style for both values.
    pub style: ValueStyle,
}

impl Observation {
    /// Whether the observed value matches a literal expectation.
    /// Hardware-dependent observations always match.
    pub fn matches(&self) -> bool {
        match self.expected {
            Expected::Value(v) => self.observed == v,
            Expected::HardwareDependent => true,
        }
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.style, self.expected) {
            (ValueStyle::Hex, Expected::Value(e)) => write!(
                f,
                "{} = 0x{:X} (expected: 0x{:X})",
                self.label, self.observed, e
            ),
            (ValueStyle::Dec, Expected::Value(e)) => {
                write!(f, "{} = {} (expected: {})", self.label, self.observed, e)
            }
            (ValueStyle::Hex, Expected::HardwareDependent) => write!(
                f,
                "{} = 0x{:X} (expected: depends on FIFO state)",
                self.label, self.observed
            ),
            (ValueStyle::Dec, Expected::HardwareDependent) => write!(
                f,
                "{} = {} (expected: depends on FIFO state)",
                self.label, self.observed
            ),
        }
    }
}

/// Field-isolation verdict for one control register.
#[derive(Debug, Clone)]
pub struct IsolationCheck {
    /// Control register name.
    pub register: String,
    /// True if bits outside the field union were untouched.
    pub passed: bool,
}

impl fmt::Display for IsolationCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed {
            write!(f, "{} - Other fields remain unchanged (PASS)", self.register)
        } else {
            write!(f, "{} - Other fields changed (FAIL)", self.register)
        }
    }
}

#[derive(Debug, Clone)]
enum Line {
    Section(String),
    Observation(Observation),
    Check(IsolationCheck),
}

/// Ordered collection of everything one run observed.
#[derive(Debug, Clone, Default)]
pub struct Report {
    lines: Vec<Line>,
}

impl Report {
    /// Empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new section, e.g. `Testing RX FIFO TDATA registers:`.
    pub fn section(&mut self, title: impl Into<String>) {
        self.lines.push(Line::Section(title.into()));
    }

    /// Append an observation.
    pub fn observe(&mut self, obs: Observation) {
        self.lines.push(Line::Observation(obs));
    }

    /// Append an isolation check.
    pub fn check(&mut self, check: IsolationCheck) {
        self.lines.push(Line::Check(check));
    }

    /// All observations in order.
    pub fn observations(&self) -> impl Iterator<Item = &Observation> {
        self.lines.iter().filter_map(|l| match l {
            Line::Observation(o) => Some(o),
            _ => None,
        })
    }

    /// All isolation checks in order.
    pub fn checks(&self) -> impl Iterator<Item = &IsolationCheck> {
        self.lines.iter().filter_map(|l| match l {
            Line::Check(c) => Some(c),
            _ => None,
        })
    }

    /// Number of failed isolation checks.
    pub fn checks_failed(&self) -> usize {
        self.checks().filter(|c| !c.passed).count()
    }

    /// Number of observations whose literal expectation did not match.
    pub fn mismatches(&self) -> usize {
        self.observations().filter(|o| !o.matches()).count()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            match line {
                Line::Section(title) => writeln!(f, "\n{title}")?,
                Line::Observation(o) => writeln!(f, "{o}")?,
                Line::Check(c) => writeln!(f, "{c}")?,
            }
        }
        Ok(())
    }
}
