//! # Deck Calculator
//!
//! Quantifies a rectangular timber deck: joists, bearers, stumps with
//! their concrete, decking boards and fixings.
//!
//! ## Assumptions
//!
//! - Joists span the deck length and are spaced across the width; the
//!   count is spaces-plus-one
//! - Bearers run across the width under the joists, spaced along the
//!   length up to the given maximum bearer spacing
//! - Stumps are spaced along each bearer; every bearer gets the same
//!   post count
//! - Boards run across the width; rows of boards cover the length
//! - Two screws per board/joist crossing
//!
//! Every dimension here is structural and therefore required; only the
//! waste factor and the size labels are optional.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "deckLengthM": 4.0,
//!   "deckWidthM": 4.0,
//!   "deckHeightMM": 600.0,
//!   "joistSpacingMM": 450.0,
//!   "bearerSpacingMM": 1800.0,
//!   "stumpSpacingMM": 1500.0,
//!   "stumpWidthMM": 90.0,
//!   "boardWidthMM": 90.0,
//!   "boardGapMM": 5.0,
//!   "boardLengthM": 4.8,
//!   "joistSize": "90x45",
//!   "bearerSize": "140x45"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::assemblies::footings::{default_post_label, footing_lines, FootingSpec};
use crate::assemblies::footings::{BAG_VOLUME_M3, HOLE_DIAMETER_MULTIPLIER};
use crate::assemblies::{require_non_negative, require_positive, waste_factor_or};
use crate::catalog::StockLengthCatalog;
use crate::errors::TakeoffResult;
use crate::quote::MaterialLine;
use crate::site::ResolvedSite;
use crate::units::{apply_waste_factor, ceiling_units, m_to_mm};

/// Input parameters for a timber deck.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeckInput {
    /// Deck length (m); joists span this direction
    pub deck_length_m: Option<f64>,

    /// Deck width (m); bearers span this direction
    pub deck_width_m: Option<f64>,

    /// Finished deck height above ground (mm)
    #[serde(rename = "deckHeightMM")]
    pub deck_height_mm: Option<f64>,

    /// Joist spacing centre to centre (mm)
    #[serde(rename = "joistSpacingMM")]
    pub joist_spacing_mm: Option<f64>,

    /// Maximum bearer spacing along the deck length (mm)
    #[serde(rename = "bearerSpacingMM")]
    pub bearer_spacing_mm: Option<f64>,

    /// Maximum stump spacing along each bearer (mm)
    #[serde(rename = "stumpSpacingMM")]
    pub stump_spacing_mm: Option<f64>,

    /// Stump section width (mm), drives the footing hole diameter
    #[serde(rename = "stumpWidthMM")]
    pub stump_width_mm: Option<f64>,

    /// Decking board face width (mm)
    #[serde(rename = "boardWidthMM")]
    pub board_width_mm: Option<f64>,

    /// Gap between board edges (mm); zero is allowed
    #[serde(rename = "boardGapMM")]
    pub board_gap_mm: Option<f64>,

    /// Purchased decking board length (m)
    pub board_length_m: Option<f64>,

    /// Joist size label, e.g. "90x45"
    pub joist_size: Option<String>,

    /// Bearer size label, e.g. "140x45"
    pub bearer_size: Option<String>,

    /// Decking board label, e.g. "Merbau 90x19"
    pub decking_board_size: Option<String>,

    /// Stump size label, e.g. "100x100 H5"
    pub stump_size: Option<String>,

    /// Waste multiplier for boards; default 1.10
    pub waste_factor: Option<f64>,
}

struct Checked {
    length_m: f64,
    width_m: f64,
    height_mm: f64,
    joist_spacing_mm: f64,
    bearer_spacing_mm: f64,
    stump_spacing_mm: f64,
    stump_width_mm: f64,
    board_width_mm: f64,
    board_gap_mm: f64,
    board_length_m: f64,
    waste_factor: f64,
}

impl DeckInput {
    fn checked(&self) -> TakeoffResult<Checked> {
        let checked = Checked {
            length_m: require_positive(self.deck_length_m, "deckLengthM")?,
            width_m: require_positive(self.deck_width_m, "deckWidthM")?,
            height_mm: require_positive(self.deck_height_mm, "deckHeightMM")?,
            joist_spacing_mm: require_positive(self.joist_spacing_mm, "joistSpacingMM")?,
            bearer_spacing_mm: require_positive(self.bearer_spacing_mm, "bearerSpacingMM")?,
            stump_spacing_mm: require_positive(self.stump_spacing_mm, "stumpSpacingMM")?,
            stump_width_mm: require_positive(self.stump_width_mm, "stumpWidthMM")?,
            board_width_mm: require_positive(self.board_width_mm, "boardWidthMM")?,
            board_gap_mm: require_non_negative(self.board_gap_mm, "boardGapMM")?,
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

/// Calculate deck materials.
///
/// Lines come out in build order: joists, bearers, the stump block
/// (posts, concrete, premix bags), boards, screws.
///
/// # Arguments
///
/// * `input` - Deck parameters
/// * `catalog` - Stock lengths for joists, bearers and stumps
/// * `site` - Resolved site, supplies the stump embedment depth
pub fn calculate(
    input: &DeckInput,
    catalog: &StockLengthCatalog,
    site: &ResolvedSite,
) -> TakeoffResult<Vec<MaterialLine>> {
    let checked = input.checked()?;

    // Joists: spaces across the width, plus the closing member
    let joist_count = ceiling_units(m_to_mm(checked.width_m) / checked.joist_spacing_mm) + 1;
    let joist_stock_m = catalog.resolve(checked.length_m)?;

    // Bearers: count derived from the length against maximum spacing
    let bearer_count = ceiling_units(m_to_mm(checked.length_m) / checked.bearer_spacing_mm) + 1;
    let bearer_stock_m = catalog.resolve(checked.width_m)?;

    // Stumps: same post layout under every bearer
    let stumps_per_bearer =
        ceiling_units(m_to_mm(checked.width_m) / checked.stump_spacing_mm) + 1;
    let stump_count = bearer_count * stumps_per_bearer;
    let stump_label = match &input.stump_size {
        Some(size) => format!("Treated pine stumps {size}"),
        None => default_post_label(checked.stump_width_mm),
    };

    // Boards: full rows across the width, rows along the length
    let boards_per_row = ceiling_units(
        m_to_mm(checked.width_m) / (checked.board_width_mm + checked.board_gap_mm),
    );
    let rows = ceiling_units(checked.length_m / checked.board_length_m);
    let board_count = ceiling_units(apply_waste_factor(
        boards_per_row as f64 * rows as f64,
        checked.waste_factor,
    ));

    let screw_count = ceiling_units(joist_count as f64 * board_count as f64 * 2.0);

    let mut lines = vec![
        MaterialLine::count_at_length(
            labelled(&input.joist_size, "joists", "Joists"),
            joist_count,
            joist_stock_m,
        ),
        MaterialLine::count_at_length(
            labelled(&input.bearer_size, "bearers", "Bearers"),
            bearer_count,
            bearer_stock_m,
        ),
    ];
    lines.extend(footing_lines(
        &FootingSpec {
            label: &stump_label,
            count: stump_count,
            post_height_mm: checked.height_mm,
            post_width_mm: checked.stump_width_mm,
            hole_multiplier: HOLE_DIAMETER_MULTIPLIER,
            bag_volume_m3: BAG_VOLUME_M3,
        },
        catalog,
        site,
    )?);
    lines.push(MaterialLine::count_at_length(
        labelled(&input.decking_board_size, "decking boards", "Decking boards"),
        board_count,
        checked.board_length_m,
    ));
    lines.push(MaterialLine::count("Decking screws", screw_count));

    Ok(lines)
}

fn labelled(size: &Option<String>, noun: &str, plain: &str) -> String {
    match size {
        Some(size) => format!("{size} {noun}"),
        None => plain.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TakeoffError;
    use crate::site::{RegionCode, SiteSpec, SoilClass};

    fn vic_class_s_site() -> ResolvedSite {
        SiteSpec {
            region: Some(RegionCode::Vic),
            soil_class: Some(SoilClass::S),
            embedment_override_mm: None,
        }
        .resolve()
        .unwrap()
    }

    fn four_by_four_deck() -> DeckInput {
        DeckInput {
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
            bearer_size: Some("140x45".to_string()),
            ..Default::default()
        }
    }

    fn calc(input: &DeckInput) -> Vec<MaterialLine> {
        calculate(
            input,
            &StockLengthCatalog::timber_default(),
            &vic_class_s_site(),
        )
        .unwrap()
    }

    #[test]
    fn test_joist_count_and_length() {
        let lines = calc(&four_by_four_deck());
        // ceil(4000 / 450) + 1 = 10 joists, 4.0 m span stocked at 4.2 m
        assert_eq!(lines[0].order_amount, "10x 90x45 joists @ 4.2m");
        assert_eq!(lines[0].raw_quantity, 10.0);
    }

    #[test]
    fn test_joist_count_exact_division() {
        let input = DeckInput {
            joist_spacing_mm: Some(500.0),
            ..four_by_four_deck()
        };
        // 4000 / 500 lands exactly on 8 spaces, so 9 joists
        assert_eq!(calc(&input)[0].raw_quantity, 9.0);
    }

    #[test]
    fn test_bearer_count_derived_from_length() {
        let lines = calc(&four_by_four_deck());
        // ceil(4000 / 1800) + 1 = 4 bearers across the 4.0 m width
        assert_eq!(lines[1].order_amount, "4x 140x45 bearers @ 4.2m");

        let longer = DeckInput {
            deck_length_m: Some(5.4),
            ..four_by_four_deck()
        };
        assert_eq!(calc(&longer)[1].raw_quantity, 4.0);

        let longest = DeckInput {
            deck_length_m: Some(5.5),
            ..four_by_four_deck()
        };
        assert_eq!(calc(&longest)[1].raw_quantity, 5.0);
    }

    #[test]
    fn test_stump_block_follows_bearers() {
        let lines = calc(&four_by_four_deck());
        // 4 bearers x (ceil(4000 / 1500) + 1) = 16 stumps at 1.2 m -> 1.8 m
        assert_eq!(
            lines[2].order_amount,
            "16x Treated pine stumps 90x90 @ 1.8m"
        );
        assert!(lines[3].material_description.contains("Concrete"));
        assert!(lines[3].order_amount.contains("16 holes"));
        assert!(lines[4].material_description.contains("Premix"));
    }

    #[test]
    fn test_board_count_with_waste() {
        let lines = calc(&four_by_four_deck());
        // ceil(4000 / 95) = 43 per row, 1 row of 4.8 m boards, x1.10 -> 48
        assert_eq!(lines[5].order_amount, "48x Decking boards @ 4.8m");
    }

    #[test]
    fn test_screws_two_per_crossing() {
        let lines = calc(&four_by_four_deck());
        // 10 joists x 48 boards x 2
        assert_eq!(lines[6].order_amount, "960x Decking screws");
    }

    #[test]
    fn test_board_count_monotonic_in_width() {
        let narrow = calc(&four_by_four_deck())[5].raw_quantity;
        let wide = calc(&DeckInput {
            deck_width_m: Some(4.5),
            ..four_by_four_deck()
        })[5]
            .raw_quantity;
        assert!(wide >= narrow);
    }

    #[test]
    fn test_missing_width_named_on_the_wire() {
        let input = DeckInput {
            deck_width_m: None,
            ..four_by_four_deck()
        };
        let err = calculate(
            &input,
            &StockLengthCatalog::timber_default(),
            &vic_class_s_site(),
        )
        .unwrap_err();
        assert_eq!(err, TakeoffError::missing_input_field("deckWidthM"));
    }

    #[test]
    fn test_no_silent_spacing_default() {
        let input = DeckInput {
            bearer_spacing_mm: None,
            ..four_by_four_deck()
        };
        let err = calculate(
            &input,
            &StockLengthCatalog::timber_default(),
            &vic_class_s_site(),
        )
        .unwrap_err();
        assert_eq!(err, TakeoffError::missing_input_field("bearerSpacingMM"));
    }

    #[test]
    fn test_span_beyond_catalog_errors() {
        let input = DeckInput {
            deck_length_m: Some(6.5),
            ..four_by_four_deck()
        };
        let err = calculate(
            &input,
            &StockLengthCatalog::timber_default(),
            &vic_class_s_site(),
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "EXCEEDS_CATALOG_RANGE");
    }

    #[test]
    fn test_wire_field_names() {
        let json = r#"{
            "deckLengthM": 4.0,
            "deckWidthM": 4.0,
            "deckHeightMM": 600.0,
            "joistSpacingMM": 450.0,
            "bearerSpacingMM": 1800.0,
            "stumpSpacingMM": 1500.0,
            "stumpWidthMM": 90.0,
            "boardWidthMM": 90.0,
            "boardGapMM": 5.0,
            "boardLengthM": 4.8
        }"#;
        let input: DeckInput = serde_json::from_str(json).unwrap();
        assert!(input.validate().is_ok());
        assert_eq!(input.deck_height_mm, Some(600.0));
        assert_eq!(input.joist_size, None);
    }

    #[test]
    fn test_serialization_round_trip() {
        let input = four_by_four_deck();
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"deckHeightMM\""));
        let roundtrip: DeckInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
