//! Control-register bitfield geometry.
//!
//! Both control registers share this layout:
//!
//! ```text
//!  31          16  15..9   8      7      6     5..3   2..0
//! ┌───────────────┬──────┬──────┬──────┬──────┬──────┬──────┐
//! │     TKEEP     │ rsvd │TLAST │BYP_  │BYP_  │ SRC  │ DST  │
//! │               │      │      │ALL   │STAGE │      │      │
//! └───────────────┴──────┴──────┴──────┴──────┴──────┴──────┘
//! ```
//!
//! The probe consumes [`CONTROL_FIELDS`] generically — mask, shift and
//! expected value all come from the table, never from per-field code.
//!
//! ## Flagged discrepancy (TUSER_SRC / TUSER_DST)
//!
//! Early bring-up notes listed expected extraction values `0xAA` at
//! shift 19 for TUSER_SRC and `0xBB` at shift 27 for TUSER_DST. Neither
//! fits a 3-bit field, and the shifts do not match the declared masks
//! (`0b111 << 3`, `0b111 << 0`). This table follows the declared
//! geometry: shift is the mask's trailing-zero count and the expected
//! value is the field's all-ones pattern (`mask >> shift`). The legacy
//! values are recorded here so the mismatch stays visible, not adopted.

/// TKEEP byte-validity field, one bit per byte of the 128-bit datapath.
pub const TKEEP_MASK: u32 = 0xFFFF_0000;
/// TLAST end-of-packet flag.
pub const TLAST_MASK: u32 = 1 << 8;
/// TUSER sideband: bypass the whole pipeline.
pub const TUSER_BYPASS_ALL_MASK: u32 = 1 << 7;
/// TUSER sideband: bypass a single stage.
pub const TUSER_BYPASS_STAGE_MASK: u32 = 1 << 6;
/// TUSER sideband: source routing id, 3 bits.
pub const TUSER_SRC_MASK: u32 = 0b111 << 3;
/// TUSER sideband: destination routing id, 3 bits.
pub const TUSER_DST_MASK: u32 = 0b111;

/// One entry in the declarative field table.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    /// Field name as printed in reports.
    pub name: &'static str,
    /// Bits belonging to this field.
    pub mask: u32,
    /// Right-shift that moves the field to bit 0.
    pub shift: u32,
    /// Value the field extracts to after its mask is ORed in.
    pub expected: u32,
}

impl FieldDef {
    const fn new(name: &'static str, mask: u32) -> Self {
        let shift = mask.trailing_zeros();
        Self { name, mask, shift, expected: mask >> shift }
    }

    /// Extract this field from a raw register value.
    #[must_use]
    pub const fn extract(&self, raw: u32) -> u32 {
        (raw & self.mask) >> self.shift
    }

    /// Field width in bits.
    #[must_use]
    pub const fn width(&self) -> u32 {
        (self.mask >> self.shift).count_ones()
    }
}

/// All control-register fields, probe order.
pub const CONTROL_FIELDS: &[FieldDef] = &[
    FieldDef::new("TKEEP", TKEEP_MASK),
    FieldDef::new("TLAST", TLAST_MASK),
    FieldDef::new("TUSER_BYPASS_ALL", TUSER_BYPASS_ALL_MASK),
    FieldDef::new("TUSER_BYPASS_STAGE", TUSER_BYPASS_STAGE_MASK),
    // Legacy bring-up notes: expected 0xAA @ shift 19 — rejected, see module doc.
    FieldDef::new("TUSER_SRC", TUSER_SRC_MASK),
    // Legacy bring-up notes: expected 0xBB @ shift 27 — rejected, see module doc.
    FieldDef::new("TUSER_DST", TUSER_DST_MASK),
];

/// Union of every field mask; bit 9..15 reserved range stays outside it.
pub const FIELD_UNION_MASK: u32 = TKEEP_MASK
    | TLAST_MASK
    | TUSER_BYPASS_ALL_MASK
    | TUSER_BYPASS_STAGE_MASK
    | TUSER_SRC_MASK
    | TUSER_DST_MASK;
