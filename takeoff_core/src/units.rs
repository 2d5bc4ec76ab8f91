//! # Units and Rounding
//!
//! Metric unit conversions and the rounding rules shared by every
//! assembly calculator.
//!
//! ## Design Philosophy
//!
//! Dimensions travel as plain `f64` with the unit spelled in the field
//! name (`deck_length_m`, `joist_spacing_mm`), matching the JSON wire
//! format, so these helpers stay simple functions rather than wrapper
//! types:
//! - Member spans and areas: metres (m)
//! - Spacings, covers and section sizes: millimetres (mm)
//! - Volumes: cubic metres (m3), with litres for display
//!
//! ## Rounding Rules
//!
//! Purchasable quantities always round UP: you cannot order 9.3 joists.
//! Waste factors are applied to the raw quantity first and the result is
//! ceiling-rounded once, never per intermediate step.
//!
//! ## Example
//!
//! ```rust
//! use takeoff_core::units::{apply_waste_factor, ceiling_units, mm_to_m, DEFAULT_WASTE_FACTOR};
//!
//! let boards = apply_waste_factor(422.0, DEFAULT_WASTE_FACTOR);
//! assert_eq!(ceiling_units(boards), 465);
//! assert_eq!(mm_to_m(450.0), 0.45);
//! ```

// ============================================================================
// Conversion Constants
// ============================================================================

/// Millimetres per metre
pub const MM_PER_M: f64 = 1000.0;

/// Litres per cubic metre
pub const LITRES_PER_M3: f64 = 1000.0;

/// Default allowance for off-cuts and breakage (10%)
pub const DEFAULT_WASTE_FACTOR: f64 = 1.10;

// ============================================================================
// Conversions
// ============================================================================

/// Convert millimetres to metres
pub fn mm_to_m(mm: f64) -> f64 {
    mm / MM_PER_M
}

/// Convert metres to millimetres
pub fn m_to_mm(m: f64) -> f64 {
    m * MM_PER_M
}

/// Convert cubic metres to litres
pub fn m3_to_litres(m3: f64) -> f64 {
    m3 * LITRES_PER_M3
}

// ============================================================================
// Rounding
// ============================================================================

/// Round a fractional quantity up to whole purchasable units.
///
/// Negative or non-finite inputs clamp to zero; validation upstream is
/// expected to have rejected them already.
pub fn ceiling_units(raw_quantity: f64) -> u32 {
    if !raw_quantity.is_finite() {
        return 0;
    }
    raw_quantity.ceil().max(0.0) as u32
}

/// Round a length in metres up to the next whole centimetre.
///
/// Used for custom-cut lengths (e.g. roof sheets cut to the slope) where
/// suppliers take orders in centimetre increments.
pub fn ceil_to_cm(length_m: f64) -> f64 {
    (length_m * 100.0).ceil() / 100.0
}

/// Apply a waste factor to a raw quantity.
///
/// The factor is a multiplier (1.10 = 10% waste). Apply before the final
/// [`ceiling_units`] call, not after.
pub fn apply_waste_factor(quantity: f64, waste_factor: f64) -> f64 {
    quantity * waste_factor
}
