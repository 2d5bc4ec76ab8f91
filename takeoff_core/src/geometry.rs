//! # Geometry Primitives
//!
//! Pure area, volume and slope formulas shared by the assembly
//! calculators. Everything here works in metres and is unit-agnostic
//! beyond that; validation of the inputs belongs to the calculators.
//!
//! ## Example
//!
//! ```rust
//! use takeoff_core::geometry::{pitched_slope_length, rectangle_area};
//!
//! // One side of a 6 m wide gable at 15 degrees
//! let slope = pitched_slope_length(3.0, 15.0);
//! assert!((slope - 3.106).abs() < 0.001);
//!
//! let deck = rectangle_area(4.8, 3.6);
//! assert!((deck - 17.28).abs() < 1e-9);
//! ```

use std::f64::consts::PI;

/// Area of a rectangle (m2)
pub fn rectangle_area(length_m: f64, width_m: f64) -> f64 {
    length_m * width_m
}

/// Perimeter of a rectangle (m)
pub fn rectangle_perimeter(length_m: f64, width_m: f64) -> f64 {
    2.0 * (length_m + width_m)
}

/// Volume of a rectangular prism (m3)
pub fn box_volume(length_m: f64, width_m: f64, depth_m: f64) -> f64 {
    length_m * width_m * depth_m
}

/// Volume of a vertical cylinder (m3), e.g. a drilled footing hole
pub fn cylinder_volume(radius_m: f64, depth_m: f64) -> f64 {
    PI * radius_m * radius_m * depth_m
}

/// Hypotenuse from a horizontal run and a vertical rise (m).
///
/// Used for stair stringers where both legs are known directly.
pub fn slope_length(run_m: f64, rise_m: f64) -> f64 {
    run_m.hypot(rise_m)
}

/// Slope length from a horizontal run and a pitch angle in degrees.
///
/// `run / cos(pitch)` gives the rafter or sheet length up one side of a
/// pitched roof. The caller is responsible for keeping the pitch well
/// below 90 degrees; calculators validate it against practical bounds.
pub fn pitched_slope_length(run_m: f64, pitch_deg: f64) -> f64 {
    run_m / pitch_deg.to_radians().cos()
}
