//! Roster Builder CLI
//!
//! Builds compressed roster snapshots and runs batch honor resolution
//! against them from the command line.

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
use dynasty_core::{describe_last_honor, resolve_batch, HonorEntry, Player, ResolveResponse};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "roster_builder")]
#[command(about = "Build roster snapshots and resolve honor entries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Build a roster snapshot from a JSON player array
    Build {
        /// Input roster JSON file path
        #[arg(long)]
        r#in: PathBuf,

        /// Output MsgPack+LZ4 file path
        #[arg(long)]
        out: PathBuf,

        /// Schema version (e.g., "v1")
        #[arg(long, default_value = "v1")]
        schema_version: String,

        /// Verify snapshot after building
        #[arg(long, default_value = "false")]
        verify: bool,

        /// Output metadata JSON file
        #[arg(long)]
        metadata: Option<PathBuf>,
    },

    /// Resolve honor entries against a roster (snapshot or raw JSON)
    Resolve {
        /// Roster file: .msgpack.lz4 snapshot or .json player array.
        /// Defaults to the shipped snapshot (DT_ROSTER_CACHE_PATH aware).
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Honor entries JSON file (array of {name, team, year})
        #[arg(long)]
        entries: PathBuf,

        /// Write the full resolution response JSON here
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { r#in, out, schema_version, verify, metadata } => {
            println!("🔨 Building roster snapshot...");
            println!("   Input:  {}", r#in.display());
            println!("   Output: {}", out.display());
            println!("   Schema: {}", schema_version);

            let meta = roster_builder::build_roster_cache(&r#in, &out, &schema_version)?;

            print_metadata(&meta);

            if verify {
                verify_snapshot_integrity(&out, &meta.checksum)?;
            }

            if let Some(metadata_path) = metadata {
                save_metadata(&metadata_path, &meta)?;
            }
        }

        Commands::Resolve { roster, entries, out } => {
            let players = load_players(roster.as_deref())?;
            let entry_list = load_entries(&entries)?;

            println!(
                "🔎 Resolving {} honor entries against {} roster players...",
                entry_list.len(),
                players.len()
            );

            let outcome = resolve_batch(entry_list, &players);

            println!("   ✅ auto-linked:        {}", outcome.auto_link.len());
            println!("   ⚠️  needs confirmation: {}", outcome.needs_confirmation.len());
            println!("   🆕 new players:        {}", outcome.new_players.len());

            for candidate in &outcome.needs_confirmation {
                let known = match describe_last_honor(candidate.player.player) {
                    Some(summary) => summary.to_string(),
                    None => "no recorded history".to_string(),
                };
                println!(
                    "      {} ({} {}) → last known: {}",
                    candidate.entry.name,
                    candidate.entry.team,
                    candidate.entry.year.map_or("?".to_string(), |y| y.to_string()),
                    known
                );
            }

            if let Some(out_path) = out {
                let response = ResolveResponse::from_outcome(outcome);
                let json = serde_json::to_string_pretty(&response)?;
                std::fs::write(&out_path, json).with_context(|| {
                    format!("Failed to write response: {}", out_path.display())
                })?;
                println!("\n📄 Response saved to: {}", out_path.display());
            }
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn load_players(roster: Option<&Path>) -> Result<Vec<Player>> {
    match roster {
        Some(path) if path.extension().is_some_and(|ext| ext == "json") => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read roster: {}", path.display()))?;
            serde_json::from_str(&json).context("Failed to parse roster JSON")
        }
        Some(path) => Ok(roster_builder::load_roster_cache(path)?.players),
        None => {
            let index = dynasty_core::data::get_roster_index()
                .map_err(|e| anyhow::anyhow!("Failed to load shipped roster snapshot: {e}"))?;
            Ok(index.players.clone())
        }
    }
}

#[cfg(feature = "cli")]
fn load_entries(entries: &Path) -> Result<Vec<HonorEntry>> {
    let json = std::fs::read_to_string(entries)
        .with_context(|| format!("Failed to read entries: {}", entries.display()))?;
    serde_json::from_str(&json).context("Failed to parse entries JSON")
}

#[cfg(feature = "cli")]
fn print_metadata(meta: &roster_builder::CacheMetadata) {
    println!("\n✅ Snapshot built successfully!");
    println!("   Players:         {} ({} with honors)", meta.player_count, meta.honored_player_count);
    println!(
        "   Original size:   {} bytes ({:.2} KB)",
        meta.original_size,
        meta.original_size as f64 / 1024.0
    );
    println!(
        "   Compressed size: {} bytes ({:.2} KB)",
        meta.compressed_size,
        meta.compressed_size as f64 / 1024.0
    );
    println!("   Compression:     {:.1}%", meta.compression_ratio * 100.0);
    println!("   Checksum:        {}", meta.checksum);
    println!("   Created:         {}", meta.created_at);
}

#[cfg(feature = "cli")]
fn verify_snapshot_integrity(cache_path: &Path, checksum: &str) -> Result<()> {
    println!("\n🔍 Verifying snapshot integrity...");
    let is_valid = roster_builder::verify_roster_cache(cache_path, checksum)?;

    if is_valid {
        println!("✅ Snapshot verification passed");
        Ok(())
    } else {
        anyhow::bail!("❌ Snapshot verification failed - checksum mismatch!")
    }
}

#[cfg(feature = "cli")]
fn save_metadata(path: &PathBuf, meta: &roster_builder::CacheMetadata) -> Result<()> {
    let metadata_json = serde_json::to_string_pretty(meta)?;
    std::fs::write(path, metadata_json)?;
    println!("\n📄 Metadata saved to: {}", path.display());
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("roster_builder CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
