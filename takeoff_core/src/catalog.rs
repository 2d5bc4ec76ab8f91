//! # Stock Length Catalog
//!
//! Suppliers sell lineal material in fixed increments; you order the
//! shortest stocked length that covers the cut you need. This module
//! owns that lookup for every calculator so swapping a supplier's
//! catalog never touches calculation logic.
//!
//! ## Assumptions
//!
//! - Catalog lengths are strictly increasing and positive (enforced at
//!   construction)
//! - A required length longer than the longest stocked length is an
//!   error, never silently clamped
//!
//! ## Example
//!
//! ```rust
//! use takeoff_core::catalog::StockLengthCatalog;
//!
//! let catalog = StockLengthCatalog::timber_default();
//! assert_eq!(catalog.resolve(1.2).unwrap(), 1.8);
//! assert_eq!(catalog.resolve(4.8).unwrap(), 4.8);
//! assert!(catalog.resolve(6.5).is_err());
//! ```

use serde::Serialize;

use crate::errors::{TakeoffError, TakeoffResult};

/// Standard treated pine / hardwood lengths stocked by Australian
/// timber yards (m)
const TIMBER_LENGTHS_M: [f64; 8] = [1.8, 2.4, 3.0, 3.6, 4.2, 4.8, 5.4, 6.0];

/// Standard plasterboard sheet heights (m)
const PLASTERBOARD_LENGTHS_M: [f64; 7] = [2.4, 3.0, 3.6, 4.2, 4.8, 5.4, 6.0];

/// An ordered list of purchasable stock lengths in metres.
///
/// Construction validates the ordering rules, so every held catalog is
/// known-good and `resolve` can simply scan for the first fit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockLengthCatalog {
    lengths_m: Vec<f64>,
}

impl StockLengthCatalog {
    /// Build a catalog from explicit lengths.
    ///
    /// Lengths must be non-empty, finite, positive and strictly
    /// increasing; anything else is an [`TakeoffError::InvalidCatalog`].
    pub fn new(lengths_m: Vec<f64>) -> TakeoffResult<Self> {
        if lengths_m.is_empty() {
            return Err(TakeoffError::invalid_catalog("catalog has no stock lengths"));
        }
        for length in &lengths_m {
            if !length.is_finite() || *length <= 0.0 {
                return Err(TakeoffError::invalid_catalog(format!(
                    "stock length {length} is not a positive finite number"
                )));
            }
        }
        for pair in lengths_m.windows(2) {
            if pair[1] <= pair[0] {
                return Err(TakeoffError::invalid_catalog(format!(
                    "stock lengths must be strictly increasing ({} followed by {})",
                    pair[0], pair[1]
                )));
            }
        }
        Ok(StockLengthCatalog { lengths_m })
    }

    /// Standard timber yard lengths: 1.8 m to 6.0 m in 0.6 m steps
    pub fn timber_default() -> Self {
        StockLengthCatalog {
            lengths_m: TIMBER_LENGTHS_M.to_vec(),
        }
    }

    /// Standard plasterboard sheet heights: 2.4 m to 6.0 m
    pub fn plasterboard_default() -> Self {
        StockLengthCatalog {
            lengths_m: PLASTERBOARD_LENGTHS_M.to_vec(),
        }
    }

    /// Resolve a required cut length to the shortest stocked length that
    /// covers it.
    ///
    /// # Returns
    ///
    /// * `Ok(length)` - Smallest stocked length >= `required_length_m`
    /// * `Err(ExceedsCatalogRange)` - Requirement is longer than anything stocked
    /// * `Err(InvalidDimension)` - Requirement is non-positive or non-finite
    pub fn resolve(&self, required_length_m: f64) -> TakeoffResult<f64> {
        if !required_length_m.is_finite() || required_length_m <= 0.0 {
            return Err(TakeoffError::invalid_dimension(
                "requiredLengthM",
                required_length_m.to_string(),
                "Required length must be positive",
            ));
        }
        for length in &self.lengths_m {
            if *length >= required_length_m {
                return Ok(*length);
            }
        }
        Err(TakeoffError::exceeds_catalog_range(
            required_length_m,
            self.longest_m(),
        ))
    }

    /// Longest stocked length (m)
    pub fn longest_m(&self) -> f64 {
        // Non-empty by construction
        self.lengths_m[self.lengths_m.len() - 1]
    }

    /// The stocked lengths in ascending order
    pub fn lengths(&self) -> &[f64] {
        &self.lengths_m
    }
}

impl Default for StockLengthCatalog {
    fn default() -> Self {
        StockLengthCatalog::timber_default()
    }
}
