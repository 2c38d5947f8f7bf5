use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Team designation for all-American / all-conference selections.
///
/// Source data uses the strings `first` / `second` / `freshman`; anything
/// else (including a missing field) falls back to `Freshman`, matching the
/// tracker's historical import behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Designation {
    First,
    Second,
    #[default]
    #[serde(other)]
    Freshman,
}

impl Designation {
    /// Display label used in honor summaries ("1st Team", "2nd Team", "Freshman").
    pub fn label(&self) -> &'static str {
        match self {
            Designation::First => "1st Team",
            Designation::Second => "2nd Team",
            Designation::Freshman => "Freshman",
        }
    }
}

/// A national or conference award (Heisman, Biletnikoff, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AwardHonor {
    #[serde(default)]
    pub year: Option<i32>,

    #[serde(default)]
    pub award: String,

    #[serde(default)]
    pub team: String,
}

/// An all-American or all-conference selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SelectionHonor {
    #[serde(default)]
    pub year: Option<i32>,

    #[serde(default)]
    pub designation: Designation,

    #[serde(default)]
    pub position: String,

    #[serde(default)]
    pub school: String,
}

/// Historical player record as persisted by the surrounding application.
///
/// Every field is sparse: the tracker accumulates these records over many
/// seasons of bulk entry, so a player may be known only by name, only by a
/// roster appearance, or only through honor records. The resolver reads
/// these records and never creates, updates, or deletes one; it defines no
/// key for them either, so callers address players positionally in
/// whatever sequence they pass in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Player {
    #[serde(default)]
    pub name: String,

    /// Most recent / primary team abbreviation (e.g. "BAMA").
    #[serde(default)]
    pub team: String,

    #[serde(default)]
    pub position: Option<String>,

    /// A season in which the player appeared on a roster.
    #[serde(default)]
    pub roster_year: Option<i32>,

    #[serde(default)]
    pub awards: Vec<AwardHonor>,

    #[serde(default)]
    pub all_americans: Vec<SelectionHonor>,

    #[serde(default)]
    pub all_conference: Vec<SelectionHonor>,

    /// Additional known team affiliations beyond `team`.
    #[serde(default)]
    pub teams: Vec<String>,
}

impl Player {
    /// Every season this player has a dated record for: the union of all
    /// `year` fields across awards, all-American and all-conference
    /// selections, plus `roster_year`. May be empty: a player known only
    /// by name has no eligibility window and can never be matched by year.
    pub fn year_history(&self) -> BTreeSet<i32> {
        let mut years = BTreeSet::new();
        years.extend(self.awards.iter().filter_map(|a| a.year));
        years.extend(self.all_americans.iter().filter_map(|s| s.year));
        years.extend(self.all_conference.iter().filter_map(|s| s.year));
        years.extend(self.roster_year);
        years
    }

    /// Every team this player is known to have played for, uppercased for
    /// comparison: `team`, award teams, selection schools, and the `teams`
    /// list. Empty strings are never members.
    pub fn team_history(&self) -> BTreeSet<String> {
        let mut teams = BTreeSet::new();
        let mut add = |t: &str| {
            if !t.is_empty() {
                teams.insert(t.to_uppercase());
            }
        };

        add(&self.team);
        for award in &self.awards {
            add(&award.team);
        }
        for selection in &self.all_americans {
            add(&selection.school);
        }
        for selection in &self.all_conference {
            add(&selection.school);
        }
        for team in &self.teams {
            add(team);
        }
        teams
    }
}
