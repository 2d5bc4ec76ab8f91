//! # Assembly Calculators
//!
//! This module contains the per-assembly quantity calculators. Each
//! assembly follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable, camelCase wire names)
//! - `validate()` - Required fields present, dimensions positive and finite
//! - `calculate(input, ...) -> TakeoffResult<Vec<MaterialLine>>` - Pure function
//!
//! Structural dimensions are never defaulted: a missing deck width is a
//! [`MissingInputField`](crate::errors::TakeoffError::MissingInputField)
//! error, not a guess. Ordering policy knobs (waste factors, bag volume,
//! brick format and so on) do carry documented defaults and can be
//! overridden per request.
//!
//! ## Available Assemblies
//!
//! - [`deck`] - Bearers, joists, stumps, boards and fixings
//! - [`footings`] - Posts, drilled holes and concrete
//! - [`masonry`] - Bricks, mortar and wall ties
//! - [`roofing`] - Sheets, flashings and rafters
//! - [`stud_wall`] - Studs and wall plates
//! - [`cladding`] - Weatherboards
//! - [`stairs`] - Stringers and treads
//! - [`demolition`] - Debris volume and skip bins
//! - [`lining`] - Plasterboard sheets and consumables

pub mod cladding;
pub mod deck;
pub mod demolition;
pub mod footings;
pub mod lining;
pub mod masonry;
pub mod roofing;
pub mod stairs;
pub mod stud_wall;

use serde::{Deserialize, Serialize};

use crate::catalog::StockLengthCatalog;
use crate::errors::{TakeoffError, TakeoffResult};
use crate::quote::MaterialLine;
use crate::site::ResolvedSite;

// Re-export input types for request building
pub use cladding::CladdingInput;
pub use deck::DeckInput;
pub use demolition::DemolitionInput;
pub use footings::FootingInput;
pub use lining::LiningInput;
pub use masonry::MasonryWallInput;
pub use roofing::RoofInput;
pub use stairs::StairInput;
pub use stud_wall::StudWallInput;

/// Enum wrapper for all assembly request types.
///
/// This allows one quote request to carry heterogeneous assemblies
/// while keeping clean tagged-JSON serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AssemblyRequest {
    /// Timber deck: substructure, decking and fixings
    Deck(DeckInput),
    /// Post or stump footings with concrete
    Footings(FootingInput),
    /// Single-skin brick wall
    MasonryWall(MasonryWallInput),
    /// Gable sheet roof
    Roof(RoofInput),
    /// Framed stud wall
    StudWall(StudWallInput),
    /// Weatherboard cladding
    Cladding(CladdingInput),
    /// Straight timber stair
    Stairs(StairInput),
    /// Wall demolition and disposal
    Demolition(DemolitionInput),
    /// Plasterboard wall lining
    WallLining(LiningInput),
}

impl AssemblyRequest {
    /// Get the assembly type as a string
    pub fn assembly_type(&self) -> &'static str {
        match self {
            AssemblyRequest::Deck(_) => "Deck",
            AssemblyRequest::Footings(_) => "Footings",
            AssemblyRequest::MasonryWall(_) => "MasonryWall",
            AssemblyRequest::Roof(_) => "Roof",
            AssemblyRequest::StudWall(_) => "StudWall",
            AssemblyRequest::Cladding(_) => "Cladding",
            AssemblyRequest::Stairs(_) => "Stairs",
            AssemblyRequest::Demolition(_) => "Demolition",
            AssemblyRequest::WallLining(_) => "WallLining",
        }
    }

    /// Human-facing name for list displays
    pub fn label(&self) -> &'static str {
        match self {
            AssemblyRequest::Deck(_) => "Timber deck",
            AssemblyRequest::Footings(_) => "Post footings",
            AssemblyRequest::MasonryWall(_) => "Masonry wall",
            AssemblyRequest::Roof(_) => "Gable roof",
            AssemblyRequest::StudWall(_) => "Stud wall",
            AssemblyRequest::Cladding(_) => "Weatherboard cladding",
            AssemblyRequest::Stairs(_) => "Timber stairs",
            AssemblyRequest::Demolition(_) => "Wall demolition",
            AssemblyRequest::WallLining(_) => "Plasterboard lining",
        }
    }

    /// Whether this assembly's quantities depend on resolved site
    /// parameters (footing embedment)
    pub fn requires_site(&self) -> bool {
        matches!(
            self,
            AssemblyRequest::Deck(_) | AssemblyRequest::Footings(_)
        )
    }

    /// Run the calculator for this assembly.
    ///
    /// Footing-bearing assemblies need `site`; passing `None` for one of
    /// those is a [`MissingRegionalParameter`](TakeoffError::MissingRegionalParameter)
    /// error. Wall lining selects sheet heights from the plasterboard
    /// catalog rather than the timber catalog supplied here.
    pub fn calculate(
        &self,
        catalog: &StockLengthCatalog,
        site: Option<&ResolvedSite>,
    ) -> TakeoffResult<Vec<MaterialLine>> {
        match self {
            AssemblyRequest::Deck(input) => {
                let site = require_site(site, "Deck")?;
                deck::calculate(input, catalog, site)
            }
            AssemblyRequest::Footings(input) => {
                let site = require_site(site, "Footings")?;
                footings::calculate(input, catalog, site)
            }
            AssemblyRequest::MasonryWall(input) => masonry::calculate(input),
            AssemblyRequest::Roof(input) => roofing::calculate(input, catalog),
            AssemblyRequest::StudWall(input) => stud_wall::calculate(input, catalog),
            AssemblyRequest::Cladding(input) => cladding::calculate(input),
            AssemblyRequest::Stairs(input) => stairs::calculate(input, catalog),
            AssemblyRequest::Demolition(input) => demolition::calculate(input),
            AssemblyRequest::WallLining(input) => {
                lining::calculate(input, &StockLengthCatalog::plasterboard_default())
            }
        }
    }
}

fn require_site<'a>(
    site: Option<&'a ResolvedSite>,
    assembly: &str,
) -> TakeoffResult<&'a ResolvedSite> {
    site.ok_or_else(|| {
        TakeoffError::missing_regional_parameter(format!(
            "{assembly} assembly requires resolved site parameters"
        ))
    })
}

// ============================================================================
// Shared Field Checks
// ============================================================================

/// A required dimension: must be present, finite and positive
pub(crate) fn require_positive(value: Option<f64>, field: &str) -> TakeoffResult<f64> {
    let value = value.ok_or_else(|| TakeoffError::missing_input_field(field))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(TakeoffError::invalid_dimension(
            field,
            value.to_string(),
            "Must be a positive number",
        ));
    }
    Ok(value)
}

/// A required dimension that may legitimately be zero (e.g. a board gap)
pub(crate) fn require_non_negative(value: Option<f64>, field: &str) -> TakeoffResult<f64> {
    let value = value.ok_or_else(|| TakeoffError::missing_input_field(field))?;
    if !value.is_finite() || value < 0.0 {
        return Err(TakeoffError::invalid_dimension(
            field,
            value.to_string(),
            "Must be zero or a positive number",
        ));
    }
    Ok(value)
}

/// A required count: must be present and at least 1
pub(crate) fn require_count(value: Option<u32>, field: &str) -> TakeoffResult<u32> {
    let value = value.ok_or_else(|| TakeoffError::missing_input_field(field))?;
    if value == 0 {
        return Err(TakeoffError::invalid_dimension(
            field,
            value.to_string(),
            "Count must be at least 1",
        ));
    }
    Ok(value)
}

/// An optional policy knob with a documented default; when supplied it
/// must be finite and positive
pub(crate) fn positive_or(value: Option<f64>, field: &str, default: f64) -> TakeoffResult<f64> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 => Err(TakeoffError::invalid_dimension(
            field,
            v.to_string(),
            "Must be a positive number",
        )),
        Some(v) => Ok(v),
        None => Ok(default),
    }
}

/// An optional waste factor: a multiplier of at least 1.0 (1.10 = 10%)
pub(crate) fn waste_factor_or(value: Option<f64>, field: &str) -> TakeoffResult<f64> {
    match value {
        Some(f) if !f.is_finite() || f < 1.0 => Err(TakeoffError::invalid_dimension(
            field,
            f.to_string(),
            "Waste factor must be at least 1.0 (1.10 adds 10% waste)",
        )),
        Some(f) => Ok(f),
        None => Ok(crate::units::DEFAULT_WASTE_FACTOR),
    }
}
