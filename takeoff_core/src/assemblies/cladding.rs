//! # Cladding Calculator
//!
//! Weatherboard cladding for a single wall face. Boards are laid in
//! horizontal courses; each course exposes `boardCoverMM` of face, so
//! course count comes from the wall height and board count per course
//! from the wall length.

use serde::{Deserialize, Serialize};

use crate::assemblies::{require_positive, waste_factor_or};
use crate::errors::TakeoffResult;
use crate::quote::MaterialLine;
use crate::units::{apply_waste_factor, ceiling_units, m_to_mm};

/// Input parameters for weatherboard cladding.
///
/// ## JSON Example
///
/// ```json
/// {
///   "wallLengthM": 8.0,
///   "wallHeightM": 2.4,
///   "boardCoverMM": 170.0,
///   "boardLengthM": 4.2,
///   "profile": "Hardie plank"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CladdingInput {
    /// Wall length (m)
    pub wall_length_m: Option<f64>,

    /// Wall height (m)
    pub wall_height_m: Option<f64>,

    /// Exposed cover per course (mm), i.e. board width minus overlap
    #[serde(rename = "boardCoverMM")]
    pub board_cover_mm: Option<f64>,

    /// Length of a supplied board (m)
    pub board_length_m: Option<f64>,

    /// Board profile label, e.g. "Hardie plank"
    pub profile: Option<String>,

    /// Waste multiplier applied to the board count; default 1.10
    pub waste_factor: Option<f64>,
}

struct Checked {
    length_m: f64,
    height_m: f64,
    cover_mm: f64,
    board_length_m: f64,
    waste_factor: f64,
}

impl CladdingInput {
    fn checked(&self) -> TakeoffResult<Checked> {
        let checked = Checked {
            length_m: require_positive(self.wall_length_m, "wallLengthM")?,
            height_m: require_positive(self.wall_height_m, "wallHeightM")?,
            cover_mm: require_positive(self.board_cover_mm, "boardCoverMM")?,
            board_length_m: require_positive(self.board_length_m, "boardLengthM")?,
            waste_factor: waste_factor_or(self.waste_factor, "wasteFactor")?,
        };
        Ok(checked)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> TakeoffResult<()> {
        self.checked().map(|_| ())
    }
}

/// Calculate cladding boards for one wall face.
pub fn calculate(input: &CladdingInput) -> TakeoffResult<Vec<MaterialLine>> {
    let checked = input.checked()?;

    let courses = ceiling_units(m_to_mm(checked.height_m) / checked.cover_mm);
    let boards_per_course = ceiling_units(checked.length_m / checked.board_length_m);
    let boards = ceiling_units(apply_waste_factor(
        courses as f64 * boards_per_course as f64,
        checked.waste_factor,
    ));

    let description = match &input.profile {
        Some(profile) => format!("{profile} cladding boards"),
        None => "Cladding boards".to_string(),
    };

    Ok(vec![MaterialLine::count_at_length(
        description,
        boards,
        checked.board_length_m,
    )])
}
