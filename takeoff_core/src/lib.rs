//! # takeoff_core - Material Quantity Take-Off Engine
//!
//! `takeoff_core` is the computational heart of Takeoff, turning structural
//! dimensions into orderable material quantities with a clean, LLM-friendly
//! API. All inputs and outputs are JSON-serializable, making it ideal for
//! integration with AI assistants via MCP or similar protocols.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Fail Closed**: Missing dimensions or regions are errors, never
//!   silently defaulted
//!
//! ## Quick Start
//!
//! ```rust
//! use takeoff_core::assemblies::{AssemblyRequest, MasonryWallInput};
//! use takeoff_core::{assemble_quote, QuoteRequest, SiteSpec, StockLengthCatalog};
//!
//! let request = QuoteRequest {
//!     site: SiteSpec::default(),
//!     assemblies: vec![AssemblyRequest::MasonryWall(MasonryWallInput {
//!         wall_length_m: Some(5.0),
//!         wall_height_m: Some(2.0),
//!         ..Default::default()
//!     })],
//! };
//!
//! let quote = assemble_quote(&request, &StockLengthCatalog::timber_default()).unwrap();
//!
//! // Serialize to JSON for storage or transmission
//! let json = serde_json::to_string_pretty(&quote).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Stock length catalogs and the standard-length resolver
//! - [`units`] - Unit conversions, ceiling rounding, waste factors
//! - [`geometry`] - Area, perimeter, volume and slope primitives
//! - [`site`] - Region codes, soil classes, embedment resolution
//! - [`assemblies`] - One quantity calculator per structural assembly
//! - [`quote`] - Request/result envelopes and the quote assembler
//! - [`pricing`] - Price book and fuzzy description matching
//! - [`errors`] - Structured error types

pub mod assemblies;
pub mod catalog;
pub mod errors;
pub mod geometry;
pub mod pricing;
pub mod quote;
pub mod site;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use catalog::StockLengthCatalog;
pub use errors::{TakeoffError, TakeoffResult};
pub use quote::{assemble_quote, MaterialLine, QuoteRequest, QuoteResult, Unit};
pub use site::{RegionCode, ResolvedSite, SiteSpec, SoilClass};
