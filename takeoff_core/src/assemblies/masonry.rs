//! # Masonry Wall Calculator
//!
//! Bricks, mortar and wall ties for a single-skin wall.
//!
//! ## Assumptions
//!
//! - Standard Australian brick face of 230 x 76 mm unless overridden
//! - Mortar at [`MORTAR_PER_BRICK_M3`] per laid brick, joints included
//! - Ties at [`WALL_TIES_PER_M2`] per square metre, no waste applied
//!   (ties come boxed well in excess)

use serde::{Deserialize, Serialize};

use crate::assemblies::{positive_or, require_positive, waste_factor_or};
use crate::errors::TakeoffResult;
use crate::geometry::rectangle_area;
use crate::quote::{MaterialLine, Unit};
use crate::units::{apply_waste_factor, ceiling_units, mm_to_m};

/// Standard brick face length (mm)
pub const STANDARD_BRICK_LENGTH_MM: f64 = 230.0;

/// Standard brick face height (mm)
pub const STANDARD_BRICK_HEIGHT_MM: f64 = 76.0;

/// Mortar volume per laid brick (m3), 10 mm joints
pub const MORTAR_PER_BRICK_M3: f64 = 0.0005;

/// Wall ties per square metre of wall
pub const WALL_TIES_PER_M2: f64 = 2.5;

/// Input parameters for a single-skin brick wall.
///
/// ## JSON Example
///
/// ```json
/// {
///   "wallLengthM": 5.0,
///   "wallHeightM": 2.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MasonryWallInput {
    /// Wall length (m)
    pub wall_length_m: Option<f64>,

    /// Wall height (m)
    pub wall_height_m: Option<f64>,

    /// Brick face length (mm); default 230
    #[serde(rename = "brickLengthMM")]
    pub brick_length_mm: Option<f64>,

    /// Brick face height (mm); default 76
    #[serde(rename = "brickHeightMM")]
    pub brick_height_mm: Option<f64>,

    /// Mortar volume per brick (m3); default 0.0005
    pub mortar_per_brick_m3: Option<f64>,

    /// Wall ties per square metre; default 2.5
    pub ties_per_m2: Option<f64>,

    /// Waste multiplier for bricks; default 1.10
    pub waste_factor: Option<f64>,
}

struct Checked {
    length_m: f64,
    height_m: f64,
    brick_length_mm: f64,
    brick_height_mm: f64,
    mortar_per_brick_m3: f64,
    ties_per_m2: f64,
    waste_factor: f64,
}

impl MasonryWallInput {
    fn checked(&self) -> TakeoffResult<Checked> {
        let checked = Checked {
            length_m: require_positive(self.wall_length_m, "wallLengthM")?,
            height_m: require_positive(self.wall_height_m, "wallHeightM")?,
            brick_length_mm: positive_or(
                self.brick_length_mm,
                "brickLengthMM",
                STANDARD_BRICK_LENGTH_MM,
            )?,
            brick_height_mm: positive_or(
                self.brick_height_mm,
                "brickHeightMM",
                STANDARD_BRICK_HEIGHT_MM,
            )?,
            mortar_per_brick_m3: positive_or(
                self.mortar_per_brick_m3,
                "mortarPerBrickM3",
                MORTAR_PER_BRICK_M3,
            )?,
            ties_per_m2: positive_or(self.ties_per_m2, "tiesPerM2", WALL_TIES_PER_M2)?,
            waste_factor: waste_factor_or(self.waste_factor, "wasteFactor")?,
        };
        Ok(checked)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> TakeoffResult<()> {
        self.checked().map(|_| ())
    }
}

/// Calculate masonry materials: bricks, mortar, wall ties.
pub fn calculate(input: &MasonryWallInput) -> TakeoffResult<Vec<MaterialLine>> {
    let checked = input.checked()?;

    let area_m2 = rectangle_area(checked.length_m, checked.height_m);
    let face_area_m2 = mm_to_m(checked.brick_length_mm) * mm_to_m(checked.brick_height_mm);

    let brick_count = ceiling_units(apply_waste_factor(
        area_m2 / face_area_m2,
        checked.waste_factor,
    ));
    let mortar_m3 = brick_count as f64 * checked.mortar_per_brick_m3;
    let tie_count = ceiling_units(area_m2 * checked.ties_per_m2);

    Ok(vec![
        MaterialLine::count(
            format!(
                "Bricks {:.0}x{:.0}",
                checked.brick_length_mm, checked.brick_height_mm
            ),
            brick_count,
        ),
        MaterialLine::measured("Mortar", mortar_m3, 3, Unit::CubicMetre),
        MaterialLine::count("Wall ties", tie_count),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TakeoffError;

    fn ten_square_wall() -> MasonryWallInput {
        MasonryWallInput {
            wall_length_m: Some(5.0),
            wall_height_m: Some(2.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_brick_count_with_waste() {
        let lines = calculate(&ten_square_wall()).unwrap();
        // 10 m2 / (0.23 * 0.076) = 572.1 bricks, x1.10 -> 630
        assert_eq!(lines[0].order_amount, "630x Bricks 230x76");
        assert_eq!(lines[0].unit, Unit::Each);
    }

    #[test]
    fn test_mortar_from_brick_count() {
        let lines = calculate(&ten_square_wall()).unwrap();
        assert_eq!(lines[1].order_amount, "0.315 m3 Mortar");
        assert!((lines[1].raw_quantity - 0.315).abs() < 1e-9);
    }

    #[test]
    fn test_ties_skip_waste() {
        let lines = calculate(&ten_square_wall()).unwrap();
        // ceil(10 x 2.5), waste factor deliberately not applied
        assert_eq!(lines[2].order_amount, "25x Wall ties");
    }

    #[test]
    fn test_zero_waste_factor_allowed() {
        let input = MasonryWallInput {
            waste_factor: Some(1.0),
            ..ten_square_wall()
        };
        let lines = calculate(&input).unwrap();
        // ceil(572.08) without the 10%
        assert_eq!(lines[0].raw_quantity, 573.0);
    }

    #[test]
    fn test_custom_brick_format() {
        let input = MasonryWallInput {
            brick_length_mm: Some(390.0),
            brick_height_mm: Some(190.0),
            ..ten_square_wall()
        };
        let lines = calculate(&input).unwrap();
        assert!(lines[0].material_description.contains("390x190"));
        // Bigger faces, far fewer units
        assert!(lines[0].raw_quantity < 200.0);
    }

    #[test]
    fn test_missing_height() {
        let input = MasonryWallInput {
            wall_height_m: None,
            ..ten_square_wall()
        };
        assert_eq!(
            calculate(&input).unwrap_err(),
            TakeoffError::missing_input_field("wallHeightM")
        );
    }

    #[test]
    fn test_wire_field_names() {
        let json = r#"{"wallLengthM": 5.0, "wallHeightM": 2.0, "brickLengthMM": 290.0}"#;
        let input: MasonryWallInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.brick_length_mm, Some(290.0));
        assert!(input.validate().is_ok());
    }
}
