//! Most-recent-honor summaries for transfer-confirmation prompts.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;

use crate::models::Player;

/// Human-readable summary of a player's most recent recorded honor, shown
/// when asking the operator to confirm a probable transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HonorSummary {
    /// Season of the honor; `None` when the player is known only by team
    /// affiliation with no dated roster appearance.
    pub year: Option<i32>,
    pub description: String,
    pub team: String,
}

impl HonorSummary {
    /// Season rendered for display, "Unknown" when undated.
    pub fn year_label(&self) -> String {
        match self.year {
            Some(year) => year.to_string(),
            None => "Unknown".to_string(),
        }
    }
}

impl fmt::Display for HonorSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} ({})", self.description, self.team, self.year_label())
    }
}

/// Summarize a player's most recent recorded honor.
///
/// All dated honor records (awards, all-American and all-conference
/// selections) are flattened and the newest wins; on a season tie, awards
/// rank before all-American before all-conference. Undated records are
/// skipped. A player with no dated honors but a known team falls back to a
/// plain roster summary; a player with neither yields `None`.
pub fn describe_last_honor(player: &Player) -> Option<HonorSummary> {
    let mut honors: Vec<HonorSummary> = Vec::new();

    for award in &player.awards {
        if let Some(year) = award.year {
            honors.push(HonorSummary {
                year: Some(year),
                description: format!("{} winner", award.award),
                team: award.team.clone(),
            });
        }
    }
    for selection in &player.all_americans {
        if let Some(year) = selection.year {
            honors.push(HonorSummary {
                year: Some(year),
                description: format!(
                    "{} All-American ({})",
                    selection.designation.label(),
                    selection.position
                ),
                team: selection.school.clone(),
            });
        }
    }
    for selection in &player.all_conference {
        if let Some(year) = selection.year {
            honors.push(HonorSummary {
                year: Some(year),
                description: format!(
                    "{} All-Conference ({})",
                    selection.designation.label(),
                    selection.position
                ),
                team: selection.school.clone(),
            });
        }
    }

    honors.sort_by_key(|h| Reverse(h.year));
    if let Some(latest) = honors.into_iter().next() {
        return Some(latest);
    }

    if !player.team.is_empty() {
        return Some(HonorSummary {
            year: player.roster_year,
            description: player.position.clone().unwrap_or_else(|| "Player".to_string()),
            team: player.team.clone(),
        });
    }

    None
}
