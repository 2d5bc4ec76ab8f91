//! # Stair Calculator
//!
//! Straight open-riser timber stairs off a deck edge. Riser count comes
//! from the total rise and the maximum legal riser height; the top
//! landing is the deck surface itself, so tread count is one less than
//! riser count.
//!
//! ## Assumptions
//!
//! - Maximum riser defaults to 190 mm and going to 250 mm, both
//!   overridable per job.
//! - Two stringers carry the treads; stairs wider than 900 mm get a
//!   third.

use serde::{Deserialize, Serialize};

use crate::assemblies::{positive_or, require_positive};
use crate::catalog::StockLengthCatalog;
use crate::errors::TakeoffResult;
use crate::geometry::slope_length;
use crate::quote::MaterialLine;
use crate::units::{ceiling_units, mm_to_m};

/// Maximum riser height when none is supplied (mm)
pub const DEFAULT_MAX_RISER_MM: f64 = 190.0;

/// Tread going when none is supplied (mm)
pub const DEFAULT_GOING_MM: f64 = 250.0;

/// Stairs wider than this need a third stringer (mm)
pub const STRINGER_WIDTH_THRESHOLD_MM: f64 = 900.0;

/// Input parameters for a straight stair run.
///
/// ## JSON Example
///
/// ```json
/// {
///   "totalRiseMM": 2700.0,
///   "stairWidthMM": 900.0,
///   "stringerLabel": "250x50 LVL"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StairInput {
    /// Total vertical rise from ground to deck surface (mm)
    #[serde(rename = "totalRiseMM")]
    pub total_rise_mm: Option<f64>,

    /// Stair width (mm)
    #[serde(rename = "stairWidthMM")]
    pub stair_width_mm: Option<f64>,

    /// Maximum riser height (mm); default 190
    #[serde(rename = "maxRiserMM")]
    pub max_riser_mm: Option<f64>,

    /// Tread going (mm); default 250
    #[serde(rename = "goingMM")]
    pub going_mm: Option<f64>,

    /// Stringer material label, e.g. "250x50 LVL"
    pub stringer_label: Option<String>,
}

struct Checked {
    rise_mm: f64,
    width_mm: f64,
    max_riser_mm: f64,
    going_mm: f64,
}

impl StairInput {
    fn checked(&self) -> TakeoffResult<Checked> {
        let checked = Checked {
            rise_mm: require_positive(self.total_rise_mm, "totalRiseMM")?,
            width_mm: require_positive(self.stair_width_mm, "stairWidthMM")?,
            max_riser_mm: positive_or(self.max_riser_mm, "maxRiserMM", DEFAULT_MAX_RISER_MM)?,
            going_mm: positive_or(self.going_mm, "goingMM", DEFAULT_GOING_MM)?,
        };
        Ok(checked)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> TakeoffResult<()> {
        self.checked().map(|_| ())
    }
}

/// Calculate stair materials: treads and stringers.
pub fn calculate(
    input: &StairInput,
    catalog: &StockLengthCatalog,
) -> TakeoffResult<Vec<MaterialLine>> {
    let checked = input.checked()?;

    let risers = ceiling_units(checked.rise_mm / checked.max_riser_mm);
    let treads = risers.saturating_sub(1);

    let stringer_count = if checked.width_mm > STRINGER_WIDTH_THRESHOLD_MM {
        3
    } else {
        2
    };

    // Stringer runs the stair slope: horizontal run is one going per tread
    let run_m = mm_to_m(treads as f64 * checked.going_mm);
    let stringer_stock_m = catalog.resolve(slope_length(run_m, mm_to_m(checked.rise_mm)))?;

    let stringer_description = match &input.stringer_label {
        Some(label) => format!("{label} stringers"),
        None => "Stair stringers".to_string(),
    };

    let mut lines = Vec::new();
    if treads > 0 {
        lines.push(MaterialLine::count_at_length(
            "Stair treads",
            treads,
            mm_to_m(checked.width_mm),
        ));
    }
    lines.push(MaterialLine::count_at_length(
        stringer_description,
        stringer_count,
        stringer_stock_m,
    ));

    Ok(lines)
}
