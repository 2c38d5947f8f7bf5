use serde::{Deserialize, Serialize};

/// A single operator-entered claim that a named player earned an honor
/// for a given team in a given season.
///
/// Entries arrive from bulk data entry, so every field may be missing or
/// noisy: an absent `team` deserializes to the empty string and an absent
/// `year` means no eligibility window can ever be satisfied. The entry is
/// consumed once by the resolver and then either discarded or merged into a
/// `Player` record by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HonorEntry {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub team: String,

    /// Season the honor was earned (e.g. 2024).
    #[serde(default)]
    pub year: Option<i32>,
}

impl HonorEntry {
    pub fn new(name: impl Into<String>, team: impl Into<String>, year: i32) -> Self {
        Self { name: name.into(), team: team.into(), year: Some(year) }
    }
}
