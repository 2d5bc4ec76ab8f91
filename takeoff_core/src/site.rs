//! # Regional Site Parameters
//!
//! Footing embedment depth depends on where the job is and what the
//! ground is like. This module holds the per-region defaults, the
//! AS 2870 soil classes and the resolution logic that turns a request's
//! site block into one concrete embedment depth.
//!
//! ## Resolution Rules
//!
//! - An explicit `embedmentOverrideMM` always wins.
//! - Otherwise the region is required; there is no fallback region. A
//!   request that needs footings but names no region is rejected.
//! - The regional base depth is adjusted by the soil class allowance.
//!   Class P (problem sites) has no tabulated depth and must be
//!   overridden explicitly.
//!
//! ## Example
//!
//! ```rust
//! use takeoff_core::site::{RegionCode, SiteSpec, SoilClass};
//!
//! let site = SiteSpec {
//!     region: Some(RegionCode::Vic),
//!     soil_class: Some(SoilClass::M),
//!     embedment_override_mm: None,
//! };
//! let resolved = site.resolve().unwrap();
//! assert_eq!(resolved.embedment_depth_mm, 650.0);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{TakeoffError, TakeoffResult};

// ============================================================================
// Regions
// ============================================================================

/// Australian state/territory codes with tabulated footing defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionCode {
    #[serde(rename = "VIC")]
    Vic,
    #[serde(rename = "NSW")]
    Nsw,
    #[serde(rename = "QLD")]
    Qld,
}

impl RegionCode {
    /// All supported regions
    pub const ALL: [RegionCode; 3] = [RegionCode::Vic, RegionCode::Nsw, RegionCode::Qld];

    /// Wire code for this region
    pub fn code(&self) -> &'static str {
        match self {
            RegionCode::Vic => "VIC",
            RegionCode::Nsw => "NSW",
            RegionCode::Qld => "QLD",
        }
    }

    /// Parse a region code, case-insensitively.
    ///
    /// Unknown regions fail closed rather than assuming a default state.
    pub fn parse(code: &str) -> TakeoffResult<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "VIC" => Ok(RegionCode::Vic),
            "NSW" => Ok(RegionCode::Nsw),
            "QLD" => Ok(RegionCode::Qld),
            other => Err(TakeoffError::missing_regional_parameter(format!(
                "no parameters tabulated for region '{other}' (supported: VIC, NSW, QLD)"
            ))),
        }
    }
}

impl FromStr for RegionCode {
    type Err = TakeoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RegionCode::parse(s)
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// Soil Classes
// ============================================================================

/// AS 2870 site soil classifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilClass {
    /// Stable sand or rock, little ground movement
    A,
    /// Slightly reactive clay or silt
    S,
    /// Moderately reactive clay
    M,
    /// Highly reactive clay
    H,
    /// Extremely reactive clay
    E,
    /// Problem site (soft, fill, mine subsidence); needs an engineer
    P,
}

impl SoilClass {
    /// All classifications
    pub const ALL: [SoilClass; 6] = [
        SoilClass::A,
        SoilClass::S,
        SoilClass::M,
        SoilClass::H,
        SoilClass::E,
        SoilClass::P,
    ];

    /// Extra embedment added to the regional base depth (mm).
    ///
    /// Reactive clays move more, so stumps go deeper. Class P has no
    /// tabulated allowance; those sites need a site-specific depth.
    pub fn embedment_allowance_mm(&self) -> Option<f64> {
        match self {
            SoilClass::A | SoilClass::S => Some(0.0),
            SoilClass::M => Some(50.0),
            SoilClass::H => Some(100.0),
            SoilClass::E => Some(150.0),
            SoilClass::P => None,
        }
    }

    /// Human-readable classification name
    pub fn description(&self) -> &'static str {
        match self {
            SoilClass::A => "stable sand/rock",
            SoilClass::S => "slightly reactive clay",
            SoilClass::M => "moderately reactive clay",
            SoilClass::H => "highly reactive clay",
            SoilClass::E => "extremely reactive clay",
            SoilClass::P => "problem site",
        }
    }
}

impl fmt::Display for SoilClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoilClass::A => write!(f, "A"),
            SoilClass::S => write!(f, "S"),
            SoilClass::M => write!(f, "M"),
            SoilClass::H => write!(f, "H"),
            SoilClass::E => write!(f, "E"),
            SoilClass::P => write!(f, "P"),
        }
    }
}

// ============================================================================
// Regional Profiles
// ============================================================================

/// Tabulated footing defaults for one region
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionalProfile {
    pub region: RegionCode,

    /// Base stump embedment depth for the region (mm)
    pub embedment_depth_mm: f64,

    /// Soil class assumed when the request names none
    pub default_soil_class: SoilClass,
}

impl RegionalProfile {
    /// Look up the tabulated profile for a region.
    ///
    /// Base depths: VIC and NSW 600 mm, QLD 450 mm. Victorian and NSW
    /// defaults assume class M clay; coastal QLD tabulates class S sand.
    pub fn for_region(region: RegionCode) -> Self {
        match region {
            RegionCode::Vic => RegionalProfile {
                region,
                embedment_depth_mm: 600.0,
                default_soil_class: SoilClass::M,
            },
            RegionCode::Nsw => RegionalProfile {
                region,
                embedment_depth_mm: 600.0,
                default_soil_class: SoilClass::M,
            },
            RegionCode::Qld => RegionalProfile {
                region,
                embedment_depth_mm: 450.0,
                default_soil_class: SoilClass::S,
            },
        }
    }
}

// ============================================================================
// Site Specification and Resolution
// ============================================================================

/// Site block of a quote request, all fields optional on the wire.
///
/// ## JSON Example
///
/// ```json
/// {
///   "region": "VIC",
///   "soilClass": "M"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSpec {
    /// Region the job is in
    pub region: Option<RegionCode>,

    /// AS 2870 soil classification, if known
    pub soil_class: Option<SoilClass>,

    /// Explicit embedment depth (mm); overrides all tabulated values
    #[serde(rename = "embedmentOverrideMM")]
    pub embedment_override_mm: Option<f64>,
}

impl SiteSpec {
    /// Convenience constructor for a region with tabulated defaults
    pub fn for_region(region: RegionCode) -> Self {
        SiteSpec {
            region: Some(region),
            soil_class: None,
            embedment_override_mm: None,
        }
    }

    /// Resolve the specification into one concrete embedment depth.
    ///
    /// # Returns
    ///
    /// * `Ok(ResolvedSite)` - Depth resolved from override or tables
    /// * `Err(MissingRegionalParameter)` - No override and no region, or
    ///   class P without an override
    /// * `Err(InvalidDimension)` - Override is non-positive or non-finite
    pub fn resolve(&self) -> TakeoffResult<ResolvedSite> {
        if let Some(depth_mm) = self.embedment_override_mm {
            if !depth_mm.is_finite() || depth_mm <= 0.0 {
                return Err(TakeoffError::invalid_dimension(
                    "embedmentOverrideMM",
                    depth_mm.to_string(),
                    "Embedment depth must be positive",
                ));
            }
            return Ok(ResolvedSite {
                region: self.region,
                soil_class: self.soil_class,
                embedment_depth_mm: depth_mm,
            });
        }

        let region = self.region.ok_or_else(|| {
            TakeoffError::missing_regional_parameter(
                "request needs footings but names no region and no explicit embedment depth",
            )
        })?;
        let profile = RegionalProfile::for_region(region);
        let soil_class = self.soil_class.unwrap_or(profile.default_soil_class);
        let allowance = soil_class.embedment_allowance_mm().ok_or_else(|| {
            TakeoffError::missing_regional_parameter(format!(
                "class {soil_class} ({}) has no tabulated embedment; supply embedmentOverrideMM",
                soil_class.description()
            ))
        })?;

        Ok(ResolvedSite {
            region: Some(region),
            soil_class: Some(soil_class),
            embedment_depth_mm: profile.embedment_depth_mm + allowance,
        })
    }
}

/// Outcome of site resolution: one embedment depth plus the parameters
/// it came from, for the quote note.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedSite {
    pub region: Option<RegionCode>,
    pub soil_class: Option<SoilClass>,
    pub embedment_depth_mm: f64,
}

impl ResolvedSite {
    /// One-line summary for quote notes
    pub fn summary(&self) -> String {
        match (self.region, self.soil_class) {
            (Some(region), Some(soil)) => format!(
                "region {region}, soil class {soil}, stump embedment {:.0} mm",
                self.embedment_depth_mm
            ),
            (Some(region), None) => format!(
                "region {region}, stump embedment {:.0} mm (explicit)",
                self.embedment_depth_mm
            ),
            _ => format!(
                "stump embedment {:.0} mm (explicit)",
                self.embedment_depth_mm
            ),
        }
    }
}
