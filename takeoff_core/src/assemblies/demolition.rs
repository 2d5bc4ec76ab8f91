//! # Demolition Calculator
//!
//! Debris volume and skip bin loads for taking down a wall. Volume is
//! the solid wall volume; no bulking factor is applied, so treat the
//! skip count as a floor when quoting loose rubble.

use serde::{Deserialize, Serialize};

use crate::assemblies::{positive_or, require_positive};
use crate::errors::TakeoffResult;
use crate::geometry::box_volume;
use crate::quote::{MaterialLine, Unit};
use crate::units::{ceiling_units, mm_to_m};

/// Skip bin capacity when none is supplied (m3)
pub const DEFAULT_SKIP_VOLUME_M3: f64 = 6.0;

/// Input parameters for wall demolition.
///
/// ## JSON Example
///
/// ```json
/// {
///   "wallLengthM": 6.0,
///   "wallHeightM": 2.4,
///   "wallThicknessMM": 110.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DemolitionInput {
    /// Wall length (m)
    pub wall_length_m: Option<f64>,

    /// Wall height (m)
    pub wall_height_m: Option<f64>,

    /// Wall thickness (mm); 110 for single-skin brick
    #[serde(rename = "wallThicknessMM")]
    pub wall_thickness_mm: Option<f64>,

    /// Skip bin capacity (m3); default 6.0
    pub skip_volume_m3: Option<f64>,
}

struct Checked {
    length_m: f64,
    height_m: f64,
    thickness_mm: f64,
    skip_volume_m3: f64,
}

impl DemolitionInput {
    fn checked(&self) -> TakeoffResult<Checked> {
        let checked = Checked {
            length_m: require_positive(self.wall_length_m, "wallLengthM")?,
            height_m: require_positive(self.wall_height_m, "wallHeightM")?,
            thickness_mm: require_positive(self.wall_thickness_mm, "wallThicknessMM")?,
            skip_volume_m3: positive_or(self.skip_volume_m3, "skipVolumeM3", DEFAULT_SKIP_VOLUME_M3)?,
        };
        Ok(checked)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> TakeoffResult<()> {
        self.checked().map(|_| ())
    }
}

/// Calculate demolition debris volume and skip loads.
pub fn calculate(input: &DemolitionInput) -> TakeoffResult<Vec<MaterialLine>> {
    let checked = input.checked()?;

    let debris_m3 = box_volume(
        checked.length_m,
        checked.height_m,
        mm_to_m(checked.thickness_mm),
    );
    let skip_loads = ceiling_units(debris_m3 / checked.skip_volume_m3);

    Ok(vec![
        MaterialLine::measured("Demolition debris", debris_m3, 2, Unit::CubicMetre),
        MaterialLine::count("Skip bin loads", skip_loads),
    ])
}
