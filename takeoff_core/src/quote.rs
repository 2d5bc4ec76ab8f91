//! # Quote Assembly
//!
//! The outer envelope of the engine: a [`QuoteRequest`] carries a site
//! block plus any number of assembly requests, and [`assemble_quote`]
//! turns it into one [`QuoteResult`] with a flat material list.
//!
//! Calculators append lines in a stable order and the assembler
//! concatenates them in request order, so a quote reads top to bottom
//! the way the job would be built. The first calculator error aborts
//! the whole quote; there are no partial results to mislead a purchaser.
//!
//! ## Example
//!
//! ```rust
//! use takeoff_core::assemblies::demolition::DemolitionInput;
//! use takeoff_core::assemblies::AssemblyRequest;
//! use takeoff_core::catalog::StockLengthCatalog;
//! use takeoff_core::quote::{assemble_quote, QuoteRequest};
//! use takeoff_core::site::SiteSpec;
//!
//! let request = QuoteRequest {
//!     site: SiteSpec::default(),
//!     assemblies: vec![AssemblyRequest::Demolition(DemolitionInput {
//!         wall_length_m: Some(6.0),
//!         wall_height_m: Some(2.4),
//!         wall_thickness_mm: Some(110.0),
//!         skip_volume_m3: None,
//!     })],
//! };
//! let quote = assemble_quote(&request, &StockLengthCatalog::timber_default()).unwrap();
//! assert_eq!(quote.lines.len(), 2);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assemblies::AssemblyRequest;
use crate::catalog::StockLengthCatalog;
use crate::errors::{TakeoffError, TakeoffResult};
use crate::site::ResolvedSite;

/// Disclaimer appended to every quote note
pub const MATERIALS_ONLY_DISCLAIMER: &str =
    "This estimate is for materials only. Always confirm with your supplier or engineer before purchasing.";

// ============================================================================
// Units and Material Lines
// ============================================================================

/// Purchasable unit for a material line, serialized as the supplier code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "EA")]
    Each,
    #[serde(rename = "LM")]
    LinealMetre,
    #[serde(rename = "m2")]
    SquareMetre,
    #[serde(rename = "m3")]
    CubicMetre,
    #[serde(rename = "L")]
    Litre,
    #[serde(rename = "bags")]
    Bag,
    #[serde(rename = "sheets")]
    Sheet,
    #[serde(rename = "rolls")]
    Roll,
    #[serde(rename = "boxes")]
    Box,
}

impl Unit {
    /// Supplier-style unit code
    pub fn code(&self) -> &'static str {
        match self {
            Unit::Each => "EA",
            Unit::LinealMetre => "LM",
            Unit::SquareMetre => "m2",
            Unit::CubicMetre => "m3",
            Unit::Litre => "L",
            Unit::Bag => "bags",
            Unit::Sheet => "sheets",
            Unit::Roll => "rolls",
            Unit::Box => "boxes",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One orderable material in a quote.
///
/// `order_amount` is the human-readable order string ("10x 90x45 joists
/// @ 4.2m"); `raw_quantity` keeps the number behind it for pricing and
/// totals.
///
/// ## JSON Example
///
/// ```json
/// {
///   "materialDescription": "90x45 joists",
///   "orderAmount": "10x 90x45 joists @ 4.2m",
///   "rawQuantity": 10.0,
///   "unit": "EA"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialLine {
    /// What the material is, as a supplier would list it
    pub material_description: String,

    /// Ready-to-send order wording, quantities included
    pub order_amount: String,

    /// Quantity in `unit`s before display formatting
    pub raw_quantity: f64,

    /// Unit the quantity is counted in
    pub unit: Unit,
}

impl MaterialLine {
    /// Build a line with explicit order wording
    pub fn new(
        material_description: impl Into<String>,
        order_amount: impl Into<String>,
        raw_quantity: f64,
        unit: Unit,
    ) -> Self {
        MaterialLine {
            material_description: material_description.into(),
            order_amount: order_amount.into(),
            raw_quantity,
            unit,
        }
    }

    /// Counted items: "12x Wall ties"
    pub fn count(description: impl Into<String>, count: u32) -> Self {
        let description = description.into();
        let order_amount = format!("{count}x {description}");
        MaterialLine::new(description, order_amount, count as f64, Unit::Each)
    }

    /// Counted items in a non-Each unit: "25x Premix concrete bags"
    pub fn count_with_unit(description: impl Into<String>, count: u32, unit: Unit) -> Self {
        let description = description.into();
        let order_amount = format!("{count}x {description}");
        MaterialLine::new(description, order_amount, count as f64, unit)
    }

    /// Counted items cut to a length: "10x 90x45 joists @ 4.2m"
    pub fn count_at_length(description: impl Into<String>, count: u32, length_m: f64) -> Self {
        let description = description.into();
        let order_amount = format!(
            "{count}x {description} @ {}m",
            format_length_m(length_m)
        );
        MaterialLine::new(description, order_amount, count as f64, Unit::Each)
    }

    /// Measured quantity: "0.46 m3 mortar", "30.8 LM flashing"
    pub fn measured(
        description: impl Into<String>,
        quantity: f64,
        decimals: usize,
        unit: Unit,
    ) -> Self {
        let description = description.into();
        let order_amount = format!("{quantity:.decimals$} {} {description}", unit.code());
        MaterialLine::new(description, order_amount, quantity, unit)
    }
}

/// Format a length in metres for order wording: one decimal where the
/// centimetres are zero ("4.2m"), two otherwise ("3.11m").
pub(crate) fn format_length_m(length_m: f64) -> String {
    let rounded = (length_m * 100.0).round() / 100.0;
    if ((rounded * 10.0).round() - rounded * 10.0).abs() < 1e-9 {
        format!("{rounded:.1}")
    } else {
        format!("{rounded:.2}")
    }
}

// ============================================================================
// Request and Result Envelopes
// ============================================================================

/// A complete take-off request: one site block, any number of assemblies.
///
/// ## JSON Example
///
/// ```json
/// {
///   "site": { "region": "VIC", "soilClass": "M" },
///   "assemblies": [
///     { "type": "MasonryWall", "wallLengthM": 5.0, "wallHeightM": 2.0 },
///     { "type": "Roof", "roofWidthM": 6.0, "roofLengthM": 8.0, "pitchDeg": 15.0 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Site parameters, consulted only by footing-bearing assemblies
    #[serde(default)]
    pub site: crate::site::SiteSpec,

    /// Assemblies to quantify, in quote order
    #[serde(default)]
    pub assemblies: Vec<AssemblyRequest>,
}

/// A generated quote: identity, timestamp, material lines and a note.
///
/// The line list serializes as `structuredMaterials` to match the wire
/// format consumed by downstream quote formatters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    /// Unique id for this quote
    pub quote_id: Uuid,

    /// Generation timestamp (UTC)
    pub generated_at: DateTime<Utc>,

    /// Material lines in calculator order
    #[serde(rename = "structuredMaterials")]
    pub lines: Vec<MaterialLine>,

    /// Site summary and materials-only disclaimer
    pub note: String,
}

/// Assemble a quote from a request.
///
/// Site parameters are resolved at most once, and only when an assembly
/// actually needs them; a masonry-only request carries no region and
/// still succeeds. Calculator errors propagate immediately.
///
/// # Arguments
///
/// * `request` - Site block plus assemblies to quantify
/// * `catalog` - Stock lengths for lineal timber members
///
/// # Returns
///
/// * `Ok(QuoteResult)` - Material lines in request order plus a note
/// * `Err(TakeoffError)` - First validation or resolution failure
pub fn assemble_quote(
    request: &QuoteRequest,
    catalog: &StockLengthCatalog,
) -> TakeoffResult<QuoteResult> {
    if request.assemblies.is_empty() {
        return Err(TakeoffError::missing_input_field("assemblies"));
    }

    let mut resolved_site: Option<ResolvedSite> = None;
    let mut lines = Vec::new();
    for assembly in &request.assemblies {
        let site = if assembly.requires_site() {
            match resolved_site {
                Some(site) => Some(site),
                None => {
                    let site = request.site.resolve()?;
                    resolved_site = Some(site);
                    Some(site)
                }
            }
        } else {
            None
        };
        lines.extend(assembly.calculate(catalog, site.as_ref())?);
    }

    Ok(QuoteResult {
        quote_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        lines,
        note: build_note(resolved_site.as_ref()),
    })
}

fn build_note(site: Option<&ResolvedSite>) -> String {
    match site {
        Some(site) => format!("Assumes {}. {MATERIALS_ONLY_DISCLAIMER}", site.summary()),
        None => format!("No site parameters applied. {MATERIALS_ONLY_DISCLAIMER}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemblies::deck::DeckInput;
    use crate::assemblies::demolition::DemolitionInput;
    use crate::assemblies::masonry::MasonryWallInput;
    use crate::site::{RegionCode, SiteSpec};

    fn masonry_request() -> AssemblyRequest {
        AssemblyRequest::MasonryWall(MasonryWallInput {
            wall_length_m: Some(5.0),
            wall_height_m: Some(2.0),
            ..Default::default()
        })
    }

    fn deck_request() -> AssemblyRequest {
        AssemblyRequest::Deck(DeckInput {
            deck_length_m: Some(4.0),
            deck_width_m: Some(4.0),
            deck_height_mm: Some(600.0),
            joist_spacing_mm: Some(450.0),
            bearer_spacing_mm: Some(1800.0),
            stump_spacing_mm: Some(1500.0),
            stump_width_mm: Some(90.0),
            board_width_mm: Some(90.0),
            board_gap_mm: Some(5.0),
            board_length_m: Some(4.8),
            joist_size: Some("90x45".to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn test_unit_codes() {
        assert_eq!(Unit::Each.code(), "EA");
        assert_eq!(Unit::LinealMetre.code(), "LM");
        assert_eq!(Unit::Bag.to_string(), "bags");
        assert_eq!(serde_json::to_string(&Unit::CubicMetre).unwrap(), "\"m3\"");
    }

    #[test]
    fn test_material_line_constructors() {
        let ties = MaterialLine::count("Wall ties", 50);
        assert_eq!(ties.order_amount, "50x Wall ties");
        assert_eq!(ties.raw_quantity, 50.0);
        assert_eq!(ties.unit, Unit::Each);

        let joists = MaterialLine::count_at_length("90x45 joists", 10, 4.2);
        assert_eq!(joists.order_amount, "10x 90x45 joists @ 4.2m");

        let mortar = MaterialLine::measured("mortar", 0.456, 3, Unit::CubicMetre);
        assert_eq!(mortar.order_amount, "0.456 m3 mortar");
    }

    #[test]
    fn test_format_length_m() {
        assert_eq!(format_length_m(4.2), "4.2");
        assert_eq!(format_length_m(3.1058), "3.11");
        assert_eq!(format_length_m(6.0), "6.0");
        assert_eq!(format_length_m(1.8), "1.8");
    }

    #[test]
    fn test_material_line_wire_names() {
        let line = MaterialLine::count("Bricks 230x76", 912);
        let json = serde_json::to_string(&line).unwrap();
        assert!(json.contains("\"materialDescription\""));
        assert!(json.contains("\"orderAmount\""));
        assert!(json.contains("\"rawQuantity\""));
        assert!(json.contains("\"unit\":\"EA\""));
    }

    #[test]
    fn test_assemble_quote_without_site_for_masonry() {
        // No region anywhere: masonry does not need one
        let request = QuoteRequest {
            site: SiteSpec::default(),
            assemblies: vec![masonry_request()],
        };
        let quote = assemble_quote(&request, &StockLengthCatalog::timber_default()).unwrap();
        assert_eq!(quote.lines.len(), 3);
        assert!(quote.note.starts_with("No site parameters applied."));
        assert!(quote.note.contains(MATERIALS_ONLY_DISCLAIMER));
    }

    #[test]
    fn test_assemble_quote_requires_site_for_deck() {
        let request = QuoteRequest {
            site: SiteSpec::default(),
            assemblies: vec![deck_request()],
        };
        let err = assemble_quote(&request, &StockLengthCatalog::timber_default()).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_REGIONAL_PARAMETER");
    }

    #[test]
    fn test_assemble_quote_site_noted_once() {
        let request = QuoteRequest {
            site: SiteSpec::for_region(RegionCode::Vic),
            assemblies: vec![deck_request(), masonry_request()],
        };
        let quote = assemble_quote(&request, &StockLengthCatalog::timber_default()).unwrap();
        assert!(quote.note.contains("region VIC"));
        assert!(quote.note.contains("650 mm"));
    }

    #[test]
    fn test_assemble_quote_preserves_request_order() {
        let request = QuoteRequest {
            site: SiteSpec::for_region(RegionCode::Vic),
            assemblies: vec![masonry_request(), deck_request()],
        };
        let quote = assemble_quote(&request, &StockLengthCatalog::timber_default()).unwrap();
        // Masonry lines (bricks first) precede deck lines (joists first)
        assert!(quote.lines[0].material_description.contains("Bricks"));
        let joist_index = quote
            .lines
            .iter()
            .position(|l| l.material_description.to_lowercase().contains("joists"))
            .unwrap();
        assert!(joist_index > 2);
    }

    #[test]
    fn test_assemble_quote_first_error_wins() {
        let bad_masonry = AssemblyRequest::MasonryWall(MasonryWallInput {
            wall_length_m: None,
            wall_height_m: Some(2.0),
            ..Default::default()
        });
        let request = QuoteRequest {
            site: SiteSpec::for_region(RegionCode::Vic),
            assemblies: vec![bad_masonry, deck_request()],
        };
        let err = assemble_quote(&request, &StockLengthCatalog::timber_default()).unwrap_err();
        assert_eq!(
            err,
            TakeoffError::missing_input_field("wallLengthM")
        );
    }

    #[test]
    fn test_assemble_quote_rejects_empty() {
        let request = QuoteRequest {
            site: SiteSpec::default(),
            assemblies: vec![],
        };
        let err = assemble_quote(&request, &StockLengthCatalog::timber_default()).unwrap_err();
        assert_eq!(err, TakeoffError::missing_input_field("assemblies"));
    }

    #[test]
    fn test_quote_result_round_trip() {
        let request = QuoteRequest {
            site: SiteSpec::default(),
            assemblies: vec![AssemblyRequest::Demolition(DemolitionInput {
                wall_length_m: Some(6.0),
                wall_height_m: Some(2.4),
                wall_thickness_mm: Some(110.0),
                skip_volume_m3: None,
            })],
        };
        let quote = assemble_quote(&request, &StockLengthCatalog::timber_default()).unwrap();
        let json = serde_json::to_string_pretty(&quote).unwrap();
        assert!(json.contains("\"structuredMaterials\""));
        assert!(json.contains("\"quoteId\""));
        assert!(json.contains("\"generatedAt\""));

        let roundtrip: QuoteResult = serde_json::from_str(&json).unwrap();
        assert_eq!(quote, roundtrip);
    }

    #[test]
    fn test_quote_request_wire_format() {
        let json = r#"{
            "site": { "region": "VIC" },
            "assemblies": [
                { "type": "MasonryWall", "wallLengthM": 5.0, "wallHeightM": 2.0 }
            ]
        }"#;
        let request: QuoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.assemblies.len(), 1);
        assert_eq!(request.site.region, Some(RegionCode::Vic));
    }
}
