//! # Footing Calculator
//!
//! Quantifies post or stump footings: the posts themselves at a stocked
//! length, the concrete to backfill the drilled holes, and the premix
//! bags that volume translates to.
//!
//! ## Assumptions
//!
//! - Holes are drilled to the resolved site embedment depth and filled
//!   full depth (the post displaces little enough to ignore)
//! - Hole diameter is a multiple of the post width, 3x by default
//! - Premix bags yield [`BAG_VOLUME_M3`] each (20 kg bag ~ 0.01 m3)
//!
//! ## Example
//!
//! ```rust
//! use takeoff_core::assemblies::footings::{calculate, FootingInput};
//! use takeoff_core::catalog::StockLengthCatalog;
//! use takeoff_core::site::{RegionCode, SiteSpec};
//!
//! let input = FootingInput {
//!     post_height_mm: Some(600.0),
//!     post_width_mm: Some(90.0),
//!     post_count: Some(12),
//!     ..Default::default()
//! };
//! let site = SiteSpec::for_region(RegionCode::Qld).resolve().unwrap();
//! let lines = calculate(&input, &StockLengthCatalog::timber_default(), &site).unwrap();
//! assert_eq!(lines.len(), 3);
//! ```

use serde::{Deserialize, Serialize};

use crate::assemblies::{positive_or, require_count, require_positive};
use crate::catalog::StockLengthCatalog;
use crate::errors::TakeoffResult;
use crate::geometry::cylinder_volume;
use crate::quote::{MaterialLine, Unit};
use crate::site::ResolvedSite;
use crate::units::{ceiling_units, m3_to_litres, mm_to_m, MM_PER_M};

/// Drilled hole diameter as a multiple of post width
pub const HOLE_DIAMETER_MULTIPLIER: f64 = 3.0;

/// Concrete yield of one 20 kg premix bag (m3)
pub const BAG_VOLUME_M3: f64 = 0.01;

/// Input parameters for standalone footings.
///
/// ## JSON Example
///
/// ```json
/// {
///   "postHeightMM": 600.0,
///   "postWidthMM": 90.0,
///   "postCount": 12
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FootingInput {
    /// Post height above ground (mm)
    #[serde(rename = "postHeightMM")]
    pub post_height_mm: Option<f64>,

    /// Post section width (mm), drives the hole diameter
    #[serde(rename = "postWidthMM")]
    pub post_width_mm: Option<f64>,

    /// Number of posts to set
    pub post_count: Option<u32>,

    /// Concrete yield per premix bag (m3); default 0.01 (20 kg bag)
    pub bag_volume_m3: Option<f64>,

    /// Hole diameter as a multiple of post width; default 3.0
    pub hole_diameter_multiplier: Option<f64>,

    /// Supplier wording for the post line, e.g. "Cypress posts 125x125"
    pub stump_label: Option<String>,
}

struct Checked {
    height_mm: f64,
    width_mm: f64,
    count: u32,
    bag_volume_m3: f64,
    hole_multiplier: f64,
}

impl FootingInput {
    fn checked(&self) -> TakeoffResult<Checked> {
        let checked = Checked {
            height_mm: require_positive(self.post_height_mm, "postHeightMM")?,
            width_mm: require_positive(self.post_width_mm, "postWidthMM")?,
            count: require_count(self.post_count, "postCount")?,
            bag_volume_m3: positive_or(self.bag_volume_m3, "bagVolumeM3", BAG_VOLUME_M3)?,
            hole_multiplier: positive_or(
                self.hole_diameter_multiplier,
                "holeDiameterMultiplier",
                HOLE_DIAMETER_MULTIPLIER,
            )?,
        };
        Ok(checked)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> TakeoffResult<()> {
        self.checked().map(|_| ())
    }
}

/// Calculate footing materials: posts, concrete volume and premix bags.
///
/// # Arguments
///
/// * `input` - Footing parameters
/// * `catalog` - Stock lengths for the post line
/// * `site` - Resolved site, supplies the embedment depth
///
/// # Returns
///
/// * `Ok(lines)` - Post, concrete and bag lines in that order
/// * `Err(TakeoffError)` - Invalid input or post length beyond the catalog
pub fn calculate(
    input: &FootingInput,
    catalog: &StockLengthCatalog,
    site: &ResolvedSite,
) -> TakeoffResult<Vec<MaterialLine>> {
    let checked = input.checked()?;
    let label = match &input.stump_label {
        Some(label) => label.clone(),
        None => default_post_label(checked.width_mm),
    };
    let spec = FootingSpec {
        label: &label,
        count: checked.count,
        post_height_mm: checked.height_mm,
        post_width_mm: checked.width_mm,
        hole_multiplier: checked.hole_multiplier,
        bag_volume_m3: checked.bag_volume_m3,
    };
    footing_lines(&spec, catalog, site)
}

/// Default supplier wording for a square treated pine post
pub(crate) fn default_post_label(width_mm: f64) -> String {
    format!("Treated pine stumps {width_mm:.0}x{width_mm:.0}")
}

/// Checked parameters for one set of identical footings
pub(crate) struct FootingSpec<'a> {
    pub label: &'a str,
    pub count: u32,
    pub post_height_mm: f64,
    pub post_width_mm: f64,
    pub hole_multiplier: f64,
    pub bag_volume_m3: f64,
}

/// Shared post/concrete/bag line builder, also used by the deck
/// calculator for its stump block.
pub(crate) fn footing_lines(
    spec: &FootingSpec,
    catalog: &StockLengthCatalog,
    site: &ResolvedSite,
) -> TakeoffResult<Vec<MaterialLine>> {
    let embedment_mm = site.embedment_depth_mm;
    let required_length_m = (spec.post_height_mm + embedment_mm) / MM_PER_M;
    let stock_length_m = catalog.resolve(required_length_m)?;

    let hole_radius_m = mm_to_m(spec.post_width_mm) * spec.hole_multiplier / 2.0;
    let per_hole_m3 = cylinder_volume(hole_radius_m, mm_to_m(embedment_mm));
    let total_m3 = per_hole_m3 * spec.count as f64;
    let bags = ceiling_units(total_m3 / spec.bag_volume_m3);

    Ok(vec![
        MaterialLine::count_at_length(spec.label, spec.count, stock_length_m),
        MaterialLine::new(
            "Concrete",
            format!(
                "{total_m3:.2} m3 Concrete ({:.0} L, {} holes)",
                m3_to_litres(total_m3),
                spec.count
            ),
            total_m3,
            Unit::CubicMetre,
        ),
        MaterialLine::count_with_unit("Premix concrete bags", bags, Unit::Bag),
    ])
}
