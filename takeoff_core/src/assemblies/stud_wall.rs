//! # Stud Wall Calculator
//!
//! Framing for a single straight wall: studs at spacing plus the top
//! and bottom plates.

use serde::{Deserialize, Serialize};

use crate::assemblies::{require_positive, waste_factor_or};
use crate::catalog::StockLengthCatalog;
use crate::errors::TakeoffResult;
use crate::quote::{MaterialLine, Unit};
use crate::units::{apply_waste_factor, ceiling_units, mm_to_m};

/// Input parameters for a framed stud wall.
///
/// ## JSON Example
///
/// ```json
/// {
///   "wallLengthMM": 6000.0,
///   "wallHeightMM": 2400.0,
///   "studSpacingMM": 450.0,
///   "studSize": "90x45"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudWallInput {
    /// Wall length (mm)
    #[serde(rename = "wallLengthMM")]
    pub wall_length_mm: Option<f64>,

    /// Wall height, which is the stud length (mm)
    #[serde(rename = "wallHeightMM")]
    pub wall_height_mm: Option<f64>,

    /// Stud spacing centre to centre (mm)
    #[serde(rename = "studSpacingMM")]
    pub stud_spacing_mm: Option<f64>,

    /// Stud size label, e.g. "90x45"
    pub stud_size: Option<String>,

    /// Waste multiplier for plate lineal metres; default 1.10
    pub waste_factor: Option<f64>,
}

struct Checked {
    length_mm: f64,
    height_mm: f64,
    spacing_mm: f64,
    waste_factor: f64,
}

impl StudWallInput {
    fn checked(&self) -> TakeoffResult<Checked> {
        let checked = Checked {
            length_mm: require_positive(self.wall_length_mm, "wallLengthMM")?,
            height_mm: require_positive(self.wall_height_mm, "wallHeightMM")?,
            spacing_mm: require_positive(self.stud_spacing_mm, "studSpacingMM")?,
            waste_factor: waste_factor_or(self.waste_factor, "wasteFactor")?,
        };
        Ok(checked)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> TakeoffResult<()> {
        self.checked().map(|_| ())
    }
}

/// Calculate framing materials: studs and wall plates.
pub fn calculate(
    input: &StudWallInput,
    catalog: &StockLengthCatalog,
) -> TakeoffResult<Vec<MaterialLine>> {
    let checked = input.checked()?;

    let stud_count = ceiling_units(checked.length_mm / checked.spacing_mm) + 1;
    let stud_stock_m = catalog.resolve(mm_to_m(checked.height_mm))?;

    // Top and bottom plate run the full wall
    let plate_lm = apply_waste_factor(2.0 * mm_to_m(checked.length_mm), checked.waste_factor);

    let (stud_description, plate_description) = match &input.stud_size {
        Some(size) => (format!("{size} studs"), format!("{size} wall plates")),
        None => ("Studs".to_string(), "Wall plates".to_string()),
    };

    Ok(vec![
        MaterialLine::count_at_length(stud_description, stud_count, stud_stock_m),
        MaterialLine::measured(plate_description, plate_lm, 1, Unit::LinealMetre),
    ])
}
