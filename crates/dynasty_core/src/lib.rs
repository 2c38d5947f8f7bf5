//! # dynasty_core - Player Identity Resolution for the Dynasty Tracker
//!
//! This library decides whether a newly entered honor record (award,
//! all-conference or all-American selection) refers to a player already in
//! the tracker's historical roster, a probable transfer of a known player,
//! or an entirely new player.
//!
//! ## Features
//! - Deterministic classification (same inputs = same dispositions)
//! - Conservative matching: exact name equality plus a 5-year eligibility
//!   window; ambiguous cases are routed to the operator, never guessed
//! - JSON API for easy integration with the browser shell
//! - Compressed roster snapshot loading for offline batch runs

pub mod api;
pub mod data;
pub mod error;
pub mod models;
pub mod resolver;

// Re-export main API functions
pub use api::{
    describe_last_honor_json, resolve_entry_json, resolve_honors_json, ResolveEntryRequest,
    ResolveEntryResponse, ResolveRequest, ResolveResponse, RESOLVE_SCHEMA_VERSION,
};
pub use error::{Result, TrackerError};

// Re-export the data model
pub use models::{AwardHonor, Designation, HonorEntry, Player, SelectionHonor};

// Re-export the resolver
pub use resolver::{
    describe_last_honor, resolve_batch, resolve_entry, AutoLink, Disposition, HonorBatchOutcome,
    HonorSummary, MatchKind, RosterRef, TransferCandidate, ELIGIBILITY_WINDOW_YEARS,
};

// Re-export the roster snapshot loader
pub use data::{get_roster_index, RosterIndex, ROSTER_CACHE_ENV};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
