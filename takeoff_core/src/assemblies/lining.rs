//! # Wall Lining Calculator
//!
//! Plasterboard sheets and consumables for lining a room. Sheets are
//! stood vertically, so sheet height comes from the plasterboard stock
//! catalog and the sheet count from the summed wall lengths against the
//! sheet width.
//!
//! A ceiling height past the tallest stocked sheet is an error rather
//! than a clamp; horizontal sheeting for tall rooms is a different job
//! and must be priced as one.

use serde::{Deserialize, Serialize};

use crate::assemblies::{positive_or, require_positive};
use crate::catalog::StockLengthCatalog;
use crate::errors::{TakeoffError, TakeoffResult};
use crate::quote::{MaterialLine, Unit};
use crate::units::{ceiling_units, m_to_mm};

/// Standard plasterboard sheet width (m)
pub const DEFAULT_SHEET_WIDTH_M: f64 = 1.2;

/// One roll of joint tape covers this many sheets
pub const SHEETS_PER_TAPE_ROLL: f64 = 20.0;

/// One 20 kg compound bucket covers this many sheets, per coat
pub const SHEETS_PER_COMPOUND_BUCKET: f64 = 30.0;

/// Fixing screws per sheet
pub const SCREWS_PER_SHEET: f64 = 50.0;

/// Screws in one box
pub const SCREWS_PER_BOX: f64 = 500.0;

/// Input parameters for plasterboard wall lining.
///
/// ## JSON Example
///
/// ```json
/// {
///   "wallLengthsM": [4.2, 3.6, 4.2, 3.6],
///   "ceilingHeightM": 2.4
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiningInput {
    /// Length of each wall to line (m)
    pub wall_lengths_m: Option<Vec<f64>>,

    /// Ceiling height, which selects the sheet height (m)
    pub ceiling_height_m: Option<f64>,

    /// Sheet width (m); default 1.2
    pub sheet_width_m: Option<f64>,
}

struct Checked {
    total_wall_length_m: f64,
    ceiling_height_m: f64,
    sheet_width_m: f64,
}

impl LiningInput {
    fn checked(&self) -> TakeoffResult<Checked> {
        let walls = self
            .wall_lengths_m
            .as_ref()
            .ok_or_else(|| TakeoffError::missing_input_field("wallLengthsM"))?;
        if walls.is_empty() {
            return Err(TakeoffError::invalid_dimension(
                "wallLengthsM",
                "[]",
                "Must contain at least one wall length",
            ));
        }
        for &length in walls {
            if !length.is_finite() || length <= 0.0 {
                return Err(TakeoffError::invalid_dimension(
                    "wallLengthsM",
                    length.to_string(),
                    "Each wall length must be a positive number",
                ));
            }
        }

        let checked = Checked {
            total_wall_length_m: walls.iter().sum(),
            ceiling_height_m: require_positive(self.ceiling_height_m, "ceilingHeightM")?,
            sheet_width_m: positive_or(self.sheet_width_m, "sheetWidthM", DEFAULT_SHEET_WIDTH_M)?,
        };
        Ok(checked)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> TakeoffResult<()> {
        self.checked().map(|_| ())
    }
}

/// Calculate plasterboard sheets plus tape, compound and screws.
///
/// `catalog` carries the stocked sheet heights, not timber lengths.
pub fn calculate(
    input: &LiningInput,
    catalog: &StockLengthCatalog,
) -> TakeoffResult<Vec<MaterialLine>> {
    let checked = input.checked()?;

    let sheet_height_m = catalog.resolve(checked.ceiling_height_m)?;
    let sheets = ceiling_units(checked.total_wall_length_m / checked.sheet_width_m);

    let tape_rolls = ceiling_units(sheets as f64 / SHEETS_PER_TAPE_ROLL);
    let compound_buckets = ceiling_units(sheets as f64 / SHEETS_PER_COMPOUND_BUCKET);
    let screw_boxes = ceiling_units(sheets as f64 * SCREWS_PER_SHEET / SCREWS_PER_BOX);

    let sheet_description = format!(
        "{:.0}x{:.0} Plasterboard sheets",
        m_to_mm(sheet_height_m),
        m_to_mm(checked.sheet_width_m)
    );

    Ok(vec![
        MaterialLine::count_with_unit(sheet_description, sheets, Unit::Sheet),
        MaterialLine::count_with_unit("Wall tape", tape_rolls, Unit::Roll),
        MaterialLine::count("Base coat buckets (20kg)", compound_buckets),
        MaterialLine::count("Top coat buckets (20kg)", compound_buckets),
        MaterialLine::count_with_unit("Plasterboard screw boxes", screw_boxes, Unit::Box),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_wall_room() -> LiningInput {
        LiningInput {
            wall_lengths_m: Some(vec![4.2, 3.6, 4.2, 3.6]),
            ceiling_height_m: Some(2.4),
            sheet_width_m: None,
        }
    }

    #[test]
    fn test_sheet_count_and_size() {
        let lines = calculate(&four_wall_room(), &StockLengthCatalog::plasterboard_default()).unwrap();
        // 15.6 m of wall / 1.2 m sheets = 13 exactly
        assert_eq!(lines[0].order_amount, "13x 2400x1200 Plasterboard sheets");
        assert_eq!(lines[0].unit, Unit::Sheet);
    }

    #[test]
    fn test_sheet_height_resolved_upward() {
        let input = LiningInput {
            ceiling_height_m: Some(2.55),
            ..four_wall_room()
        };
        let lines = calculate(&input, &StockLengthCatalog::plasterboard_default()).unwrap();
        assert!(lines[0].order_amount.contains("3000x1200"));
    }

    #[test]
    fn test_ceiling_above_tallest_sheet() {
        let input = LiningInput {
            ceiling_height_m: Some(6.5),
            ..four_wall_room()
        };
        let err = calculate(&input, &StockLengthCatalog::plasterboard_default()).unwrap_err();
        assert_eq!(err.error_code(), "EXCEEDS_CATALOG_RANGE");
    }

    #[test]
    fn test_consumable_ratios() {
        let input = LiningInput {
            // 30 m of wall -> 25 sheets
            wall_lengths_m: Some(vec![10.0, 5.0, 10.0, 5.0]),
            ceiling_height_m: Some(2.4),
            sheet_width_m: None,
        };
        let lines = calculate(&input, &StockLengthCatalog::plasterboard_default()).unwrap();
        assert_eq!(lines[0].raw_quantity, 25.0);
        // tape: ceil(25 / 20), compound: ceil(25 / 30) per coat,
        // screws: ceil(25 x 50 / 500)
        assert_eq!(lines[1].order_amount, "2x Wall tape");
        assert_eq!(lines[2].order_amount, "1x Base coat buckets (20kg)");
        assert_eq!(lines[3].order_amount, "1x Top coat buckets (20kg)");
        assert_eq!(lines[4].order_amount, "3x Plasterboard screw boxes");
    }

    #[test]
    fn test_custom_sheet_width() {
        let input = LiningInput {
            sheet_width_m: Some(0.9),
            ..four_wall_room()
        };
        let lines = calculate(&input, &StockLengthCatalog::plasterboard_default()).unwrap();
        // 15.6 / 0.9 = 17.33 -> 18 sheets of the narrow stock
        assert_eq!(lines[0].order_amount, "18x 2400x900 Plasterboard sheets");
    }

    #[test]
    fn test_missing_wall_list() {
        let input = LiningInput {
            wall_lengths_m: None,
            ..four_wall_room()
        };
        assert_eq!(
            calculate(&input, &StockLengthCatalog::plasterboard_default()).unwrap_err(),
            TakeoffError::missing_input_field("wallLengthsM")
        );
    }

    #[test]
    fn test_empty_wall_list() {
        let input = LiningInput {
            wall_lengths_m: Some(vec![]),
            ..four_wall_room()
        };
        let err = calculate(&input, &StockLengthCatalog::plasterboard_default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DIMENSION");
    }

    #[test]
    fn test_negative_wall_length() {
        let input = LiningInput {
            wall_lengths_m: Some(vec![4.2, -3.6]),
            ..four_wall_room()
        };
        let err = calculate(&input, &StockLengthCatalog::plasterboard_default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DIMENSION");
    }

    #[test]
    fn test_wire_field_names() {
        let json = r#"{"wallLengthsM": [4.2, 3.6, 4.2, 3.6], "ceilingHeightM": 2.4}"#;
        let input: LiningInput = serde_json::from_str(json).unwrap();
        assert_eq!(input, four_wall_room());
    }
}
