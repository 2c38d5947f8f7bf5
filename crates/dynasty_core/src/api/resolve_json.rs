//! JSON string-in / string-out entrypoints for the browser shell.
//!
//! The tracker front end owns all Sheets/Firestore glue; it hands the
//! resolver a materialized roster plus the freshly entered honor rows and
//! gets back the three-way disposition it needs to drive auto-linking,
//! confirmation prompts, and new-player creation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TrackerError};
use crate::models::{HonorEntry, Player};
use crate::resolver::{
    describe_last_honor, resolve_batch, resolve_entry, Disposition, HonorBatchOutcome,
    HonorSummary, MatchKind,
};

pub const RESOLVE_SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Deserialize)]
pub struct ResolveRequest {
    pub schema_version: u8,
    pub entries: Vec<HonorEntry>,
    pub players: Vec<Player>,
}

#[derive(Debug, Deserialize)]
pub struct ResolveEntryRequest {
    pub schema_version: u8,
    pub entry: HonorEntry,
    pub players: Vec<Player>,
}

/// Wire shape of a single-entry disposition: `match_type` plus the matched
/// player (by roster position) and its history sets when applicable.
#[derive(Debug, Serialize)]
pub struct ResolveEntryResponse {
    pub schema_version: u8,
    pub match_type: MatchKind,
    pub player_index: Option<usize>,
    pub player_name: Option<String>,
    pub existing_teams: Vec<String>,
    pub existing_years: Vec<i32>,
}

#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub schema_version: u8,
    pub auto_link: Vec<AutoLinkRecord>,
    pub needs_confirmation: Vec<ConfirmationRecord>,
    pub new_players: Vec<NewPlayerRecord>,
}

/// Entry safely linked to an existing player without operator review.
#[derive(Debug, Serialize)]
pub struct AutoLinkRecord {
    pub entry: HonorEntry,
    /// Position of the matched player in the request's `players` array.
    pub player_index: usize,
    pub player_name: String,
    pub player_team: String,
}

/// Entry that needs the operator to confirm a probable transfer.
#[derive(Debug, Serialize)]
pub struct ConfirmationRecord {
    pub entry: HonorEntry,
    pub player_index: usize,
    pub player_name: String,
    pub existing_teams: Vec<String>,
    pub existing_years: Vec<i32>,
    /// Most recent recorded honor of the matched player, for the prompt.
    pub last_honor: Option<HonorSummary>,
}

#[derive(Debug, Serialize)]
pub struct NewPlayerRecord {
    pub entry: HonorEntry,
}

impl ResolveResponse {
    /// Flatten a batch outcome into the wire shape, referencing matched
    /// players by their index in the roster the caller supplied.
    pub fn from_outcome(outcome: HonorBatchOutcome<'_>) -> Self {
        let auto_link = outcome
            .auto_link
            .into_iter()
            .map(|link| AutoLinkRecord {
                entry: link.entry,
                player_index: link.player.index,
                player_name: link.player.player.name.clone(),
                player_team: link.player.player.team.clone(),
            })
            .collect();

        let needs_confirmation = outcome
            .needs_confirmation
            .into_iter()
            .map(|candidate| ConfirmationRecord {
                last_honor: describe_last_honor(candidate.player.player),
                entry: candidate.entry,
                player_index: candidate.player.index,
                player_name: candidate.player.player.name.clone(),
                existing_teams: candidate.existing_teams,
                existing_years: candidate.existing_years,
            })
            .collect();

        let new_players =
            outcome.new_players.into_iter().map(|entry| NewPlayerRecord { entry }).collect();

        ResolveResponse {
            schema_version: RESOLVE_SCHEMA_VERSION,
            auto_link,
            needs_confirmation,
            new_players,
        }
    }
}

fn check_schema_version(found: u8) -> Result<()> {
    if found != RESOLVE_SCHEMA_VERSION {
        return Err(TrackerError::UnsupportedSchemaVersion {
            found,
            expected: RESOLVE_SCHEMA_VERSION,
        });
    }
    Ok(())
}

/// Resolve a batch of honor entries against a roster snapshot.
///
/// Malformed JSON and unsupported schema versions are caller bugs and fail
/// fast; sparse or empty fields inside well-formed entries/players are
/// expected steady state and never error.
pub fn resolve_honors_json(request_json: &str) -> Result<String> {
    let request: ResolveRequest = serde_json::from_str(request_json)
        .map_err(|e| TrackerError::InvalidRequest(format!("invalid JSON request: {e}")))?;
    check_schema_version(request.schema_version)?;

    let outcome = resolve_batch(request.entries, &request.players);
    debug!(
        auto_link = outcome.auto_link.len(),
        needs_confirmation = outcome.needs_confirmation.len(),
        new_players = outcome.new_players.len(),
        roster = request.players.len(),
        "resolved honor batch"
    );

    let response = ResolveResponse::from_outcome(outcome);
    serde_json::to_string(&response).map_err(|e| TrackerError::Serialization(e.to_string()))
}

/// Resolve a single honor entry against a roster snapshot.
pub fn resolve_entry_json(request_json: &str) -> Result<String> {
    let request: ResolveEntryRequest = serde_json::from_str(request_json)
        .map_err(|e| TrackerError::InvalidRequest(format!("invalid JSON request: {e}")))?;
    check_schema_version(request.schema_version)?;

    let disposition = resolve_entry(&request.entry, &request.players);
    let match_type = disposition.kind();
    let response = match disposition {
        Disposition::New => ResolveEntryResponse {
            schema_version: RESOLVE_SCHEMA_VERSION,
            match_type,
            player_index: None,
            player_name: None,
            existing_teams: Vec::new(),
            existing_years: Vec::new(),
        },
        Disposition::Exact { player, existing_teams, existing_years }
        | Disposition::Transfer { player, existing_teams, existing_years } => {
            ResolveEntryResponse {
                schema_version: RESOLVE_SCHEMA_VERSION,
                match_type,
                player_index: Some(player.index),
                player_name: Some(player.player.name.clone()),
                existing_teams,
                existing_years,
            }
        }
    };

    serde_json::to_string(&response).map_err(|e| TrackerError::Serialization(e.to_string()))
}

/// Summarize a single player's most recent honor (`null` when the player
/// has neither dated honors nor a team).
pub fn describe_last_honor_json(player_json: &str) -> Result<String> {
    let player: Player = serde_json::from_str(player_json)
        .map_err(|e| TrackerError::InvalidRequest(format!("invalid player JSON: {e}")))?;

    let summary = describe_last_honor(&player);
    serde_json::to_string(&summary).map_err(|e| TrackerError::Serialization(e.to_string()))
}
