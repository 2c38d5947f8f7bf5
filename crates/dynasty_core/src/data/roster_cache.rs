//! Roster snapshot loader for offline batch resolution.
//!
//! Artifact: `data/exports/roster.v1.msgpack.lz4`
//! Format: LZ4 (size-prepended) + MessagePack(serde) of `RosterIndex`.

use crate::models::Player;
use lz4_flex::decompress_size_prepended;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Env var for overriding the roster cache path.
pub const ROSTER_CACHE_ENV: &str = "DT_ROSTER_CACHE_PATH";

/// Default relative path used when `DT_ROSTER_CACHE_PATH` is not set.
pub const DEFAULT_ROSTER_CACHE_REL_PATH: &str = "data/exports/roster.v1.msgpack.lz4";

/// The shipped historical roster. Players are kept as an ordered sequence,
/// not a map: insertion order is the resolver's tie-break between
/// same-name candidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterIndex {
    pub players: Vec<Player>,
    pub count: u32,
    pub schema_version: String,
}

static ROSTER_INDEX: OnceCell<RosterIndex> = OnceCell::new();

fn resolve_cache_path() -> PathBuf {
    if let Ok(path) = env::var(ROSTER_CACHE_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    PathBuf::from(DEFAULT_ROSTER_CACHE_REL_PATH)
}

pub fn load_index_from_lz4_bytes(lz4_bytes: &[u8]) -> Result<RosterIndex, String> {
    // The cache is normally size-prepended LZ4 around MessagePack, but some
    // local workflows write the MessagePack payload bare. Prefer the
    // simplest successful decode.
    if let Ok(index) = rmp_serde::from_slice::<RosterIndex>(lz4_bytes) {
        return Ok(index);
    }

    let msgpack_bytes =
        decompress_size_prepended(lz4_bytes).map_err(|e| format!("LZ4 decompress failed: {e}"))?;

    rmp_serde::from_slice::<RosterIndex>(&msgpack_bytes)
        .map_err(|e| format!("MessagePack deserialize failed: {e}"))
}

pub fn load_index_from_path(path: &Path) -> Result<RosterIndex, String> {
    let bytes = std::fs::read(path)
        .map_err(|e| format!("Failed to read roster cache at '{}': {e}", path.display()))?;
    load_index_from_lz4_bytes(&bytes)
}

/// Load (or return the cached) RosterIndex.
///
/// Resolution order:
/// 1) `DT_ROSTER_CACHE_PATH` if set
/// 2) `data/exports/roster.v1.msgpack.lz4` (relative)
pub fn get_roster_index() -> Result<&'static RosterIndex, String> {
    ROSTER_INDEX.get_or_try_init(|| load_index_from_path(&resolve_cache_path()))
}
