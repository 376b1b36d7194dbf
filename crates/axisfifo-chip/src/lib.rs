//! Silicon model of the AXI-Stream FIFO CSR block.
//!
//! This crate has **no dependencies** and **no hardware access** — it is a
//! pure model of the register block exposed by the streaming FIFO bridge:
//! register offsets, access classes, and control-register bitfield
//! geometry. Everything the probes need to know about the silicon lives
//! here as declarative const tables, so the driver crate never duplicates
//! per-register or per-field logic.
//!
//! # Crate organisation
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`regs`] | CSR offsets, access classes, the register table |
//! | [`fields`] | Control-register bitfield masks, shifts, field table |

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod fields;
pub mod regs;

pub use fields::{FieldDef, CONTROL_FIELDS, FIELD_UNION_MASK};
pub use regs::{Access, RegDef, CSR_BASE, CSR_WINDOW};
