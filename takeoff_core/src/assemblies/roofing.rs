//! # Roofing Calculator
//!
//! Sheet roofing for a gable roof: sheets cut to the slope, ridge and
//! barge flashing, and optionally the rafters underneath.
//!
//! ## Assumptions
//!
//! - Symmetric gable: the ridge splits the width, so the horizontal run
//!   of each pitch is half the roof width
//! - Sheet cover is the effective width per sheet after side laps,
//!   760 mm for standard corrugated Colorbond
//! - Sheets are custom cut to the slope length, rounded up to the next
//!   centimetre; they are not catalog lengths
//! - Flashing is ordered in lineal metres of the plan perimeter plus
//!   waste, left unrounded for the supplier to cut
//!
//! ## Example
//!
//! ```rust
//! use takeoff_core::assemblies::roofing::{calculate, RoofInput};
//! use takeoff_core::catalog::StockLengthCatalog;
//!
//! let input = RoofInput {
//!     roof_width_m: Some(6.0),
//!     roof_length_m: Some(8.0),
//!     pitch_deg: Some(15.0),
//!     ..Default::default()
//! };
//! let lines = calculate(&input, &StockLengthCatalog::timber_default()).unwrap();
//! assert_eq!(lines[0].raw_quantity, 72.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::assemblies::{positive_or, require_positive, waste_factor_or};
use crate::catalog::StockLengthCatalog;
use crate::errors::{TakeoffError, TakeoffResult};
use crate::geometry::{pitched_slope_length, rectangle_area, rectangle_perimeter};
use crate::quote::{format_length_m, MaterialLine, Unit};
use crate::units::{apply_waste_factor, ceil_to_cm, ceiling_units, m_to_mm, mm_to_m};

/// Effective cover of a corrugated Colorbond sheet (mm)
pub const COLORBOND_COVER_MM: f64 = 760.0;

/// Steepest pitch the gable formulas are sensible for (degrees)
pub const MAX_PITCH_DEG: f64 = 60.0;

/// Input parameters for a gable sheet roof.
///
/// ## JSON Example
///
/// ```json
/// {
///   "roofWidthM": 6.0,
///   "roofLengthM": 8.0,
///   "pitchDeg": 15.0,
///   "rafterSpacingMM": 900.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoofInput {
    /// Roof width across the gable (m); the run of each pitch is half this
    pub roof_width_m: Option<f64>,

    /// Roof length along the ridge (m)
    pub roof_length_m: Option<f64>,

    /// Roof pitch (degrees)
    pub pitch_deg: Option<f64>,

    /// Effective sheet cover (mm); default 760 (corrugated Colorbond)
    #[serde(rename = "sheetCoverMM")]
    pub sheet_cover_mm: Option<f64>,

    /// Sheet profile label, e.g. "Colorbond Custom Orb"
    pub sheet_profile: Option<String>,

    /// Rafter spacing (mm); rafters are only quantified when given
    #[serde(rename = "rafterSpacingMM")]
    pub rafter_spacing_mm: Option<f64>,

    /// Waste multiplier for sheets and flashing; default 1.10
    pub waste_factor: Option<f64>,
}

struct Checked {
    width_m: f64,
    length_m: f64,
    pitch_deg: f64,
    sheet_cover_mm: f64,
    rafter_spacing_mm: Option<f64>,
    waste_factor: f64,
}

impl RoofInput {
    fn checked(&self) -> TakeoffResult<Checked> {
        let width_m = require_positive(self.roof_width_m, "roofWidthM")?;
        let length_m = require_positive(self.roof_length_m, "roofLengthM")?;
        let pitch_deg = require_positive(self.pitch_deg, "pitchDeg")?;
        if pitch_deg > MAX_PITCH_DEG {
            return Err(TakeoffError::invalid_dimension(
                "pitchDeg",
                pitch_deg.to_string(),
                "Pitch must be 60 degrees or less",
            ));
        }
        let rafter_spacing_mm = match self.rafter_spacing_mm {
            Some(spacing) => Some(require_positive(Some(spacing), "rafterSpacingMM")?),
            None => None,
        };
        let checked = Checked {
            width_m,
            length_m,
            pitch_deg,
            sheet_cover_mm: positive_or(self.sheet_cover_mm, "sheetCoverMM", COLORBOND_COVER_MM)?,
            rafter_spacing_mm,
            waste_factor: waste_factor_or(self.waste_factor, "wasteFactor")?,
        };
        Ok(checked)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> TakeoffResult<()> {
        self.checked().map(|_| ())
    }
}

/// Calculate roofing materials: rafters (when spacing is given), sheets
/// cut to the slope, and flashing.
pub fn calculate(
    input: &RoofInput,
    catalog: &StockLengthCatalog,
) -> TakeoffResult<Vec<MaterialLine>> {
    let checked = input.checked()?;

    let run_m = checked.width_m / 2.0;
    let slope_m = pitched_slope_length(run_m, checked.pitch_deg);
    let cut_length_m = ceil_to_cm(slope_m);
    let area_m2 = rectangle_area(checked.length_m, slope_m) * 2.0;

    let mut lines = Vec::new();

    if let Some(spacing_mm) = checked.rafter_spacing_mm {
        let per_pitch = ceiling_units(m_to_mm(checked.length_m) / spacing_mm) + 1;
        let rafter_stock_m = catalog.resolve(slope_m)?;
        lines.push(MaterialLine::count_at_length(
            "Rafters",
            per_pitch * 2,
            rafter_stock_m,
        ));
    }

    let sheet_count = ceiling_units(apply_waste_factor(
        area_m2 / mm_to_m(checked.sheet_cover_mm),
        checked.waste_factor,
    ));
    let profile = input.sheet_profile.as_deref().unwrap_or("Colorbond");
    let sheet_description = format!("{profile} roofing sheets");
    lines.push(MaterialLine::new(
        sheet_description.clone(),
        format!(
            "{sheet_count}x {sheet_description} @ {}m",
            format_length_m(cut_length_m)
        ),
        sheet_count as f64,
        Unit::Sheet,
    ));

    let flashing_lm = apply_waste_factor(
        rectangle_perimeter(checked.length_m, checked.width_m),
        checked.waste_factor,
    );
    lines.push(MaterialLine::measured(
        "Ridge and barge flashing",
        flashing_lm,
        1,
        Unit::LinealMetre,
    ));

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TakeoffError;

    fn six_by_eight_roof() -> RoofInput {
        RoofInput {
            roof_width_m: Some(6.0),
            roof_length_m: Some(8.0),
            pitch_deg: Some(15.0),
            ..Default::default()
        }
    }

    fn calc(input: &RoofInput) -> Vec<MaterialLine> {
        calculate(input, &StockLengthCatalog::timber_default()).unwrap()
    }

    #[test]
    fn test_sheet_count_six_by_eight_at_fifteen_degrees() {
        let lines = calc(&six_by_eight_roof());
        // slope = 3 / cos(15) = 3.106 m; area = 8 x 3.106 x 2 = 49.69 m2
        // 49.69 / 0.76 = 65.4 sheets, x1.10 -> 72
        assert_eq!(lines[0].raw_quantity, 72.0);
        assert_eq!(lines[0].unit, Unit::Sheet);
        assert_eq!(
            lines[0].order_amount,
            "72x Colorbond roofing sheets @ 3.11m"
        );
    }

    #[test]
    fn test_flashing_perimeter_with_waste() {
        let lines = calc(&six_by_eight_roof());
        let flashing = &lines[1];
        // 2 x (8 + 6) = 28 m plan perimeter, x1.10
        assert!((flashing.raw_quantity - 30.8).abs() < 1e-9);
        assert_eq!(flashing.unit, Unit::LinealMetre);
        assert_eq!(flashing.order_amount, "30.8 LM Ridge and barge flashing");
    }

    #[test]
    fn test_rafters_only_when_spacing_given() {
        assert_eq!(calc(&six_by_eight_roof()).len(), 2);

        let with_rafters = RoofInput {
            rafter_spacing_mm: Some(900.0),
            ..six_by_eight_roof()
        };
        let lines = calc(&with_rafters);
        assert_eq!(lines.len(), 3);
        // ceil(8000 / 900) + 1 = 10 per pitch, two pitches, slope stocked at 3.6 m
        assert_eq!(lines[0].order_amount, "20x Rafters @ 3.6m");
    }

    #[test]
    fn test_steeper_pitch_needs_more_sheets() {
        let steep = RoofInput {
            pitch_deg: Some(30.0),
            ..six_by_eight_roof()
        };
        assert!(calc(&steep)[0].raw_quantity > calc(&six_by_eight_roof())[0].raw_quantity);
    }

    #[test]
    fn test_custom_profile_and_cover() {
        let input = RoofInput {
            sheet_profile: Some("Trimdek".to_string()),
            sheet_cover_mm: Some(820.0),
            ..six_by_eight_roof()
        };
        let lines = calc(&input);
        assert!(lines[0].order_amount.contains("Trimdek roofing sheets"));
        // Wider cover, fewer sheets: 49.69 / 0.82 x 1.1 -> 67
        assert_eq!(lines[0].raw_quantity, 67.0);
    }

    #[test]
    fn test_pitch_bounds() {
        let flat = RoofInput {
            pitch_deg: Some(0.0),
            ..six_by_eight_roof()
        };
        assert!(calculate(&flat, &StockLengthCatalog::timber_default()).is_err());

        let vertical = RoofInput {
            pitch_deg: Some(75.0),
            ..six_by_eight_roof()
        };
        let err = calculate(&vertical, &StockLengthCatalog::timber_default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DIMENSION");
    }

    #[test]
    fn test_missing_pitch() {
        let input = RoofInput {
            pitch_deg: None,
            ..six_by_eight_roof()
        };
        assert_eq!(
            calculate(&input, &StockLengthCatalog::timber_default()).unwrap_err(),
            TakeoffError::missing_input_field("pitchDeg")
        );
    }

    #[test]
    fn test_wire_field_names() {
        let json = r#"{"roofWidthM": 6.0, "roofLengthM": 8.0, "pitchDeg": 15.0, "sheetCoverMM": 760.0}"#;
        let input: RoofInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.sheet_cover_mm, Some(760.0));
        assert!(input.validate().is_ok());
    }
}
