//! Roster Builder Library
//!
//! Roster JSON → MessagePack → LZ4 compression → SHA256 checksum.
//! Produces the snapshot artifact `dynasty_core::data` loads at runtime.

use anyhow::{Context, Result};
use dynasty_core::data::RosterIndex;
use dynasty_core::Player;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

/// Cache metadata written alongside the snapshot artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheMetadata {
    /// Schema version (e.g. "v1")
    pub schema_version: String,
    /// SHA256 checksum (hex string)
    pub checksum: String,
    /// Creation time (RFC3339)
    pub created_at: String,
    /// Input JSON size (bytes)
    pub original_size: u64,
    /// Compressed size (bytes)
    pub compressed_size: u64,
    /// Compressed / original
    pub compression_ratio: f64,
    /// Players in the snapshot
    pub player_count: u32,
    /// Players carrying at least one honor record
    pub honored_player_count: u32,
}

/// Build a roster snapshot from a JSON array of players.
///
/// Unlike a generic passthrough cache, the input is parsed into typed
/// `Player` records first, so a malformed roster fails the build instead of
/// surfacing at resolution time.
pub fn build_roster_cache(
    input_json: &Path,
    output_msgpack_lz4: &Path,
    schema_version: &str,
) -> Result<CacheMetadata> {
    let json_str = fs::read_to_string(input_json)
        .with_context(|| format!("Failed to read roster JSON: {}", input_json.display()))?;

    let original_size = json_str.len() as u64;

    let players: Vec<Player> =
        serde_json::from_str(&json_str).context("Failed to parse roster JSON")?;

    let honored_player_count = players
        .iter()
        .filter(|p| {
            !p.awards.is_empty() || !p.all_americans.is_empty() || !p.all_conference.is_empty()
        })
        .count() as u32;

    let index = RosterIndex {
        count: players.len() as u32,
        schema_version: schema_version.to_string(),
        players,
    };

    let msgpack_bytes =
        rmp_serde::to_vec(&index).context("Failed to serialize roster to MessagePack")?;

    let compressed = lz4_flex::compress_prepend_size(&msgpack_bytes);
    let compressed_size = compressed.len() as u64;

    let mut hasher = Sha256::new();
    hasher.update(&compressed);
    let checksum = format!("{:x}", hasher.finalize());

    if let Some(parent) = output_msgpack_lz4.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    fs::write(output_msgpack_lz4, &compressed).with_context(|| {
        format!("Failed to write output file: {}", output_msgpack_lz4.display())
    })?;

    let compression_ratio = compressed_size as f64 / original_size.max(1) as f64;

    Ok(CacheMetadata {
        schema_version: schema_version.to_string(),
        checksum,
        created_at: chrono::Utc::now().to_rfc3339(),
        original_size,
        compressed_size,
        compression_ratio,
        player_count: index.count,
        honored_player_count,
    })
}

/// Verify a snapshot artifact against its expected SHA256 checksum.
pub fn verify_roster_cache(cache_file: &Path, expected_checksum: &str) -> Result<bool> {
    let bytes = fs::read(cache_file)
        .with_context(|| format!("Failed to read cache file: {}", cache_file.display()))?;

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    let actual = format!("{:x}", hasher.finalize());

    Ok(actual == expected_checksum)
}

/// Load a snapshot artifact back into a `RosterIndex`.
pub fn load_roster_cache(cache_file: &Path) -> Result<RosterIndex> {
    dynasty_core::data::load_index_from_path(cache_file)
        .map_err(|e| anyhow::anyhow!("Failed to load roster cache: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_roster_json() -> serde_json::Value {
        serde_json::json!([
            {
                "name": "Jane Doe",
                "team": "BAMA",
                "roster_year": 2023,
                "awards": [{"year": 2022, "award": "Heisman Trophy", "team": "BAMA"}]
            },
            {"name": "John Smith", "team": "OSU", "roster_year": 2021}
        ])
    }

    #[test]
    fn test_build_verify_and_load() -> Result<()> {
        let mut temp_json = NamedTempFile::new()?;
        temp_json.write_all(sample_roster_json().to_string().as_bytes())?;

        let temp_output = NamedTempFile::new()?;
        let output_path = temp_output.path();

        let metadata = build_roster_cache(temp_json.path(), output_path, "v1")?;

        assert_eq!(metadata.schema_version, "v1");
        assert_eq!(metadata.player_count, 2);
        assert_eq!(metadata.honored_player_count, 1);
        assert!(verify_roster_cache(output_path, &metadata.checksum)?);

        let index = load_roster_cache(output_path)?;
        assert_eq!(index.count, 2);
        assert_eq!(index.players[0].name, "Jane Doe");
        assert_eq!(index.players[1].team, "OSU");

        Ok(())
    }

    #[test]
    fn test_checksum_detects_tampering() -> Result<()> {
        let mut temp_json = NamedTempFile::new()?;
        temp_json.write_all(sample_roster_json().to_string().as_bytes())?;

        let temp_output = NamedTempFile::new()?;
        let metadata = build_roster_cache(temp_json.path(), temp_output.path(), "v1")?;

        let mut bytes = fs::read(temp_output.path())?;
        bytes[0] ^= 0xFF;
        fs::write(temp_output.path(), &bytes)?;

        assert!(!verify_roster_cache(temp_output.path(), &metadata.checksum)?);
        Ok(())
    }

    #[test]
    fn test_malformed_roster_fails_build() -> Result<()> {
        let mut temp_json = NamedTempFile::new()?;
        temp_json.write_all(br#"{"not": "an array"}"#)?;

        let temp_output = NamedTempFile::new()?;
        let result = build_roster_cache(temp_json.path(), temp_output.path(), "v1");
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn test_loaded_roster_resolves_entries() -> Result<()> {
        let mut temp_json = NamedTempFile::new()?;
        temp_json.write_all(sample_roster_json().to_string().as_bytes())?;

        let temp_output = NamedTempFile::new()?;
        build_roster_cache(temp_json.path(), temp_output.path(), "v1")?;
        let index = load_roster_cache(temp_output.path())?;

        let entries = vec![dynasty_core::HonorEntry::new("Jane Doe", "BAMA", 2024)];
        let outcome = dynasty_core::resolve_batch(entries, &index.players);
        assert_eq!(outcome.auto_link.len(), 1);

        Ok(())
    }
}
