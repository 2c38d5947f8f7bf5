//! Identity classification for newly entered honor records.
//!
//! Given an honor entry (name, team, year) and the historical roster, decide
//! whether the entry refers to a player already on record (auto-link), a
//! probable transfer of a known player (ask the operator to confirm), or a
//! brand-new player. Matching is deliberately conservative: exact name
//! equality after trim+lowercase, no edit-distance, no suffix stripping.
//! Noisy bulk entry is resolved by the operator, not guessed at here.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::{HonorEntry, Player};

/// Two dated records more than this many years apart cannot belong to the
/// same collegiate career.
pub const ELIGIBILITY_WINDOW_YEARS: i32 = 5;

/// Classification outcome kinds, as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    New,
    Exact,
    Transfer,
}

/// A matched roster player: its position in the roster slice the entry was
/// resolved against, plus the borrowed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterRef<'a> {
    pub index: usize,
    pub player: &'a Player,
}

/// Result of classifying a single honor entry against the roster.
///
/// Exactly one variant is produced for every input; classification never
/// fails. `existing_teams` and `existing_years` are the matched candidate's
/// full history sets (teams uppercased, years ascending) so the caller can
/// render a confirmation prompt without re-deriving them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition<'a> {
    /// No existing record plausibly refers to the same individual.
    New,
    /// Same person, same team, within the eligibility window: safe to
    /// auto-link without operator review.
    Exact { player: RosterRef<'a>, existing_teams: Vec<String>, existing_years: Vec<i32> },
    /// Same person by name and window, different team. Could be a transfer
    /// or a same-name coincidence, so the operator decides.
    Transfer { player: RosterRef<'a>, existing_teams: Vec<String>, existing_years: Vec<i32> },
}

impl<'a> Disposition<'a> {
    pub fn kind(&self) -> MatchKind {
        match self {
            Disposition::New => MatchKind::New,
            Disposition::Exact { .. } => MatchKind::Exact,
            Disposition::Transfer { .. } => MatchKind::Transfer,
        }
    }

    pub fn player(&self) -> Option<RosterRef<'a>> {
        match self {
            Disposition::New => None,
            Disposition::Exact { player, .. } | Disposition::Transfer { player, .. } => {
                Some(*player)
            }
        }
    }
}

/// An entry that resolved to an existing player on the same team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoLink<'a> {
    pub entry: HonorEntry,
    pub player: RosterRef<'a>,
}

/// An entry that resolved to an existing player on a different team and
/// needs operator confirmation before linking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferCandidate<'a> {
    pub entry: HonorEntry,
    pub player: RosterRef<'a>,
    pub existing_teams: Vec<String>,
    pub existing_years: Vec<i32>,
}

/// Stable three-way partition of a batch of honor entries.
///
/// Every input entry lands in exactly one bucket, and entries keep their
/// relative input order within each bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HonorBatchOutcome<'a> {
    pub auto_link: Vec<AutoLink<'a>>,
    pub needs_confirmation: Vec<TransferCandidate<'a>>,
    pub new_players: Vec<HonorEntry>,
}

impl HonorBatchOutcome<'_> {
    pub fn total(&self) -> usize {
        self.auto_link.len() + self.needs_confirmation.len() + self.new_players.len()
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

fn within_window(entry_year: Option<i32>, history: &BTreeSet<i32>) -> bool {
    let Some(year) = entry_year else {
        return false;
    };
    history.iter().any(|&y| (year - y).abs() <= ELIGIBILITY_WINDOW_YEARS)
}

/// Classify a single honor entry against the roster.
///
/// The roster is scanned in order and the first name-matching candidate
/// whose year history falls within the eligibility window wins: candidates
/// outside the window are skipped, and once a candidate passes the window
/// the scan stops even if a later candidate would have matched the team
/// too. Callers that want best-match semantics should pre-sort the roster.
///
/// Pure and infallible: inputs are never mutated and every input produces
/// exactly one disposition.
pub fn resolve_entry<'a>(entry: &HonorEntry, players: &'a [Player]) -> Disposition<'a> {
    if entry.name.is_empty() {
        return Disposition::New;
    }

    let entry_name = normalize_name(&entry.name);
    let entry_team = entry.team.to_uppercase();

    for (index, player) in players.iter().enumerate() {
        if normalize_name(&player.name) != entry_name {
            continue;
        }

        let years = player.year_history();
        if !within_window(entry.year, &years) {
            // Outside the window this is a different person who happens to
            // share the name; keep scanning the remaining name matches.
            continue;
        }

        let teams = player.team_history();
        let existing_teams: Vec<String> = teams.iter().cloned().collect();
        let existing_years: Vec<i32> = years.iter().copied().collect();
        let player = RosterRef { index, player };

        return if teams.contains(&entry_team) {
            Disposition::Exact { player, existing_teams, existing_years }
        } else {
            Disposition::Transfer { player, existing_teams, existing_years }
        };
    }

    Disposition::New
}

/// Classify a batch of honor entries against a fixed roster snapshot.
///
/// Entries are independent: each is classified exactly as `resolve_entry`
/// would classify it alone, then bucketed. The partition is stable.
pub fn resolve_batch<'a>(entries: Vec<HonorEntry>, players: &'a [Player]) -> HonorBatchOutcome<'a> {
    let mut outcome = HonorBatchOutcome::default();

    for entry in entries {
        match resolve_entry(&entry, players) {
            Disposition::New => outcome.new_players.push(entry),
            Disposition::Exact { player, .. } => {
                outcome.auto_link.push(AutoLink { entry, player });
            }
            Disposition::Transfer { player, existing_teams, existing_years } => {
                outcome.needs_confirmation.push(TransferCandidate {
                    entry,
                    player,
                    existing_teams,
                    existing_years,
                });
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AwardHonor, Designation, SelectionHonor};
    use proptest::prelude::*;

    fn roster_player(name: &str, team: &str, roster_year: i32) -> Player {
        Player {
            name: name.to_string(),
            team: team.to_string(),
            roster_year: Some(roster_year),
            ..Player::default()
        }
    }

    #[test]
    fn empty_name_never_matches() {
        let players = vec![roster_player("", "OSU", 2024)];
        let entry = HonorEntry { name: String::new(), team: "OSU".to_string(), year: Some(2024) };

        let disposition = resolve_entry(&entry, &players);
        assert_eq!(disposition, Disposition::New);
        assert!(disposition.player().is_none());
    }

    #[test]
    fn unknown_name_is_new() {
        let players = vec![roster_player("Jane Doe", "BAMA", 2023)];
        let entry = HonorEntry::new("John Smith", "BAMA", 2023);
        assert_eq!(resolve_entry(&entry, &players).kind(), MatchKind::New);
    }

    #[test]
    fn empty_roster_is_new() {
        let entry = HonorEntry::new("Jane Doe", "BAMA", 2024);
        assert_eq!(resolve_entry(&entry, &[]).kind(), MatchKind::New);
    }

    #[test]
    fn same_team_within_window_is_exact() {
        let players = vec![roster_player("Jane Doe", "BAMA", 2023)];
        let entry = HonorEntry::new("jane doe", "bama", 2024);

        match resolve_entry(&entry, &players) {
            Disposition::Exact { player, existing_teams, existing_years } => {
                assert_eq!(player.index, 0);
                assert_eq!(existing_teams, vec!["BAMA"]);
                assert_eq!(existing_years, vec![2023]);
            }
            other => panic!("expected exact match, got {other:?}"),
        }
    }

    #[test]
    fn different_team_within_window_is_transfer() {
        let players = vec![roster_player("Jane Doe", "OSU", 2022)];
        let entry = HonorEntry::new("Jane Doe", "MICH", 2024);

        match resolve_entry(&entry, &players) {
            Disposition::Transfer { player, existing_teams, .. } => {
                assert_eq!(player.player.name, "Jane Doe");
                assert!(existing_teams.contains(&"OSU".to_string()));
            }
            other => panic!("expected transfer, got {other:?}"),
        }
    }

    #[test]
    fn window_boundary_at_five_years() {
        let players = vec![roster_player("Jane Doe", "BAMA", 2020)];

        let at_limit = HonorEntry::new("Jane Doe", "BAMA", 2025);
        assert_eq!(resolve_entry(&at_limit, &players).kind(), MatchKind::Exact);

        let past_limit = HonorEntry::new("Jane Doe", "BAMA", 2026);
        assert_eq!(resolve_entry(&past_limit, &players).kind(), MatchKind::New);
    }

    #[test]
    fn window_applies_backwards_too() {
        let players = vec![roster_player("Jane Doe", "BAMA", 2025)];
        let entry = HonorEntry::new("Jane Doe", "BAMA", 2020);
        assert_eq!(resolve_entry(&entry, &players).kind(), MatchKind::Exact);
    }

    #[test]
    fn name_comparison_trims_and_ignores_case() {
        let players = vec![roster_player("john smith", "OSU", 2023)];
        let entry = HonorEntry::new("  John Smith ", "osu", 2024);
        assert_eq!(resolve_entry(&entry, &players).kind(), MatchKind::Exact);
    }

    #[test]
    fn entry_without_year_never_matches() {
        let players = vec![roster_player("Jane Doe", "BAMA", 2023)];
        let entry =
            HonorEntry { name: "Jane Doe".to_string(), team: "BAMA".to_string(), year: None };
        assert_eq!(resolve_entry(&entry, &players).kind(), MatchKind::New);
    }

    #[test]
    fn player_without_dated_history_is_never_matched() {
        // Known limitation, preserved from the source behavior: a player with
        // a team but no dated record has no eligibility window, so even a
        // perfect name+team match classifies as new.
        let players = vec![Player {
            name: "Jane Doe".to_string(),
            team: "BAMA".to_string(),
            ..Player::default()
        }];
        let entry = HonorEntry::new("Jane Doe", "BAMA", 2024);
        assert_eq!(resolve_entry(&entry, &players).kind(), MatchKind::New);
    }

    #[test]
    fn out_of_window_candidate_is_skipped_not_terminal() {
        // Two players share the name; the first is a decade out of window and
        // must not stop the scan from reaching the second.
        let players =
            vec![roster_player("Jane Doe", "BAMA", 2010), roster_player("Jane Doe", "BAMA", 2023)];
        let entry = HonorEntry::new("Jane Doe", "BAMA", 2024);

        match resolve_entry(&entry, &players) {
            Disposition::Exact { player, .. } => assert_eq!(player.index, 1),
            other => panic!("expected exact match on second candidate, got {other:?}"),
        }
    }

    #[test]
    fn first_window_match_wins_even_if_later_candidate_is_exact() {
        // Order sensitivity, preserved from the source behavior: the first
        // candidate passing the window returns immediately as a transfer even
        // though the second candidate would have been an exact team match.
        let players =
            vec![roster_player("Jane Doe", "OSU", 2023), roster_player("Jane Doe", "BAMA", 2023)];
        let entry = HonorEntry::new("Jane Doe", "BAMA", 2024);

        match resolve_entry(&entry, &players) {
            Disposition::Transfer { player, .. } => assert_eq!(player.index, 0),
            other => panic!("expected transfer on first candidate, got {other:?}"),
        }
    }

    #[test]
    fn team_match_considers_full_affiliation_history() {
        let player = Player {
            name: "Jane Doe".to_string(),
            team: "LSU".to_string(),
            roster_year: Some(2023),
            awards: vec![AwardHonor {
                year: Some(2021),
                award: "Heisman Trophy".to_string(),
                team: "BAMA".to_string(),
            }],
            all_conference: vec![SelectionHonor {
                year: Some(2020),
                designation: Designation::First,
                position: "QB".to_string(),
                school: "OSU".to_string(),
            }],
            ..Player::default()
        };

        // Entry names an earlier affiliation, not the primary team.
        let entry = HonorEntry::new("Jane Doe", "osu", 2024);
        assert_eq!(resolve_entry(&entry, &[player]).kind(), MatchKind::Exact);
    }

    #[test]
    fn missing_entry_team_is_transfer_within_window() {
        let players = vec![roster_player("Jane Doe", "BAMA", 2023)];
        let entry =
            HonorEntry { name: "Jane Doe".to_string(), team: String::new(), year: Some(2024) };
        assert_eq!(resolve_entry(&entry, &players).kind(), MatchKind::Transfer);
    }

    #[test]
    fn honor_years_extend_the_window() {
        // roster_year alone is out of window, but an all-American year pulls
        // the entry back inside it.
        let player = Player {
            name: "Jane Doe".to_string(),
            team: "BAMA".to_string(),
            roster_year: Some(2015),
            all_americans: vec![SelectionHonor {
                year: Some(2019),
                designation: Designation::First,
                position: "RB".to_string(),
                school: "BAMA".to_string(),
            }],
            ..Player::default()
        };
        let entry = HonorEntry::new("Jane Doe", "BAMA", 2024);
        assert_eq!(resolve_entry(&entry, &[player]).kind(), MatchKind::Exact);
    }

    #[test]
    fn resolution_is_deterministic() {
        let players =
            vec![roster_player("Jane Doe", "OSU", 2022), roster_player("Jane Doe", "BAMA", 2023)];
        let entry = HonorEntry::new("Jane Doe", "MICH", 2024);

        let first = resolve_entry(&entry, &players);
        let second = resolve_entry(&entry, &players);
        assert_eq!(first, second);
    }

    #[test]
    fn batch_partitions_every_entry_in_order() {
        let players =
            vec![roster_player("Jane Doe", "BAMA", 2023), roster_player("John Smith", "OSU", 2022)];
        let entries = vec![
            HonorEntry::new("Jane Doe", "BAMA", 2024),   // exact
            HonorEntry::new("John Smith", "MICH", 2023), // transfer
            HonorEntry::new("New Guy", "ND", 2024),      // new
            HonorEntry::new("jane doe", "bama", 2023),   // exact
            HonorEntry::new("Another Guy", "ND", 2024),  // new
        ];

        let outcome = resolve_batch(entries, &players);

        assert_eq!(outcome.total(), 5);
        assert_eq!(outcome.auto_link.len(), 2);
        assert_eq!(outcome.needs_confirmation.len(), 1);
        assert_eq!(outcome.new_players.len(), 2);

        // Relative input order survives within each bucket.
        assert_eq!(outcome.auto_link[0].entry.name, "Jane Doe");
        assert_eq!(outcome.auto_link[1].entry.name, "jane doe");
        assert_eq!(outcome.new_players[0].name, "New Guy");
        assert_eq!(outcome.new_players[1].name, "Another Guy");
    }

    #[test]
    fn career_scenario_exact_transfer_then_new() {
        let players = vec![roster_player("Jane Doe", "BAMA", 2023)];

        let same_team = HonorEntry::new("jane doe", "bama", 2024);
        assert_eq!(resolve_entry(&same_team, &players).kind(), MatchKind::Exact);

        let new_team = HonorEntry::new("Jane Doe", "LSU", 2024);
        match resolve_entry(&new_team, &players) {
            Disposition::Transfer { existing_teams, .. } => {
                assert_eq!(existing_teams, vec!["BAMA"]);
            }
            other => panic!("expected transfer, got {other:?}"),
        }

        let next_decade = HonorEntry::new("Jane Doe", "BAMA", 2030);
        assert_eq!(resolve_entry(&next_decade, &players).kind(), MatchKind::New);
    }

    fn entry_strategy() -> impl Strategy<Value = HonorEntry> {
        (
            prop_oneof![Just(String::new()), "[A-Da-d ]{0,8}"],
            prop_oneof![Just(String::new()), "[A-D]{2,4}"],
            proptest::option::of(2000i32..2030),
        )
            .prop_map(|(name, team, year)| HonorEntry { name, team, year })
    }

    fn player_strategy() -> impl Strategy<Value = Player> {
        (
            prop_oneof![Just(String::new()), "[A-Da-d ]{0,8}"],
            prop_oneof![Just(String::new()), "[A-D]{2,4}"],
            proptest::option::of(2000i32..2030),
        )
            .prop_map(|(name, team, roster_year)| Player {
                name,
                team,
                roster_year,
                ..Player::default()
            })
    }

    proptest! {
        #[test]
        fn every_entry_gets_exactly_one_disposition(
            entry in entry_strategy(),
            players in proptest::collection::vec(player_strategy(), 0..8),
        ) {
            let first = resolve_entry(&entry, &players);
            let second = resolve_entry(&entry, &players);

            // Deterministic, and a matched player is always present exactly
            // when the kind says so.
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.player().is_some(), first.kind() != MatchKind::New);
        }

        #[test]
        fn batch_partition_is_complete(
            entries in proptest::collection::vec(entry_strategy(), 0..16),
            players in proptest::collection::vec(player_strategy(), 0..8),
        ) {
            let expected = entries.len();
            let outcome = resolve_batch(entries, &players);
            prop_assert_eq!(outcome.total(), expected);
        }
    }
}
