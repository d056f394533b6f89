// Per-run value records: the three supply shapes and the enriched output row.

use std::fmt;

use crate::position::{Position, RosterSlot};

/// Games in a regular season.
pub const SEASON_GAMES: u32 = 162;

// ---------------------------------------------------------------------------
// Supply shapes
// ---------------------------------------------------------------------------

/// One team's progress through the season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSchedule {
    pub team_name: String,
    pub team_id: u32,
    pub games_played: u32,
    pub games_remaining: u32,
}

impl TeamSchedule {
    /// Build a schedule from a won/lost record. Games remaining saturate at
    /// zero so `games_played + games_remaining == SEASON_GAMES` holds for any
    /// record that fits in a season.
    pub fn from_record(team_name: impl Into<String>, team_id: u32, wins: u32, losses: u32) -> Self {
        let games_played = wins + losses;
        TeamSchedule {
            team_name: team_name.into(),
            team_id,
            games_played,
            games_remaining: SEASON_GAMES.saturating_sub(games_played),
        }
    }
}

/// Rest-of-season projection for a hitter. Counting stats are fractional
/// because projection systems publish them that way. A stat the source left
/// blank is NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct HitterProjection {
    pub player_name: String,
    pub team_short_name: String,
    pub singles: f64,
    pub doubles: f64,
    pub triples: f64,
    pub home_runs: f64,
    pub runs: f64,
    pub runs_batted_in: f64,
    pub stolen_bases: f64,
    pub walks: f64,
    pub strikeouts: f64,
    pub games_played: f64,
}

/// Position eligibility and draft standing for one player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerPositions {
    pub player_name: String,
    /// Position tokens as published, e.g. "2B,SS" or "1B/OF".
    pub eligible_positions: String,
    pub rank: u32,
    pub adp: Option<f64>,
}

// ---------------------------------------------------------------------------
// Eligibility
// ---------------------------------------------------------------------------

/// A player's eligible positions after the position join. Players missing
/// from the position table are `Unknown`, which matches no position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    Known(String),
    Unknown,
}

impl Eligibility {
    /// Rendering of `Unknown` in output tables.
    pub const UNKNOWN_LABEL: &'static str = "N/A";

    pub fn is_known(&self) -> bool {
        matches!(self, Eligibility::Known(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Eligibility::Known(s) => s,
            Eligibility::Unknown => Self::UNKNOWN_LABEL,
        }
    }

    /// Substring containment of the position token, so "C" also matches
    /// any eligibility string that spells "C" inside another token.
    pub fn contains(&self, position: Position) -> bool {
        match self {
            Eligibility::Known(s) => s.contains(position.token()),
            Eligibility::Unknown => false,
        }
    }

    /// Whether the player may fill `slot`.
    pub fn fills(&self, slot: &RosterSlot) -> bool {
        slot.positions.iter().any(|&p| self.contains(p))
    }
}

impl fmt::Display for Eligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Output rows
// ---------------------------------------------------------------------------

/// A projection joined with its team's schedule and its position entry,
/// plus every derived metric. Rate fields are `None` when a join missed or
/// a denominator was zero. `fantasy_points` is `None` when a stat is blank.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedHitter {
    pub projection: HitterProjection,
    pub games_remaining: Option<u32>,
    pub eligibility: Eligibility,
    pub rank: Option<u32>,
    pub adp: Option<f64>,
    pub fantasy_points: Option<f64>,
    pub games_remaining_ratio: Option<f64>,
    pub fantasy_points_per_game: Option<f64>,
    pub fantasy_points_per_week: Option<f64>,
    pub vorp_per_game: Option<f64>,
    pub adjusted_vorp_per_game: Option<f64>,
    pub vorp_per_week: Option<f64>,
    pub adjusted_vorp_per_week: Option<f64>,
}

impl EnrichedHitter {
    pub fn name(&self) -> &str {
        &self.projection.player_name
    }
}

/// Replacement-level scoring rate at one position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplacementBaseline {
    pub position: Position,
    pub replacement_points_per_game: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::STARTING_SLOTS;

    #[test]
    fn schedule_from_record_sums_to_season() {
        let s = TeamSchedule::from_record("New York Yankees", 147, 50, 31);
        assert_eq!(s.games_played, 81);
        assert_eq!(s.games_remaining, 81);
        assert_eq!(s.games_played + s.games_remaining, SEASON_GAMES);
    }

    #[test]
    fn schedule_from_finished_record_has_no_games_left() {
        let s = TeamSchedule::from_record("Boston Red Sox", 111, 90, 72);
        assert_eq!(s.games_remaining, 0);
    }

    #[test]
    fn unknown_eligibility_matches_nothing() {
        let e = Eligibility::Unknown;
        assert_eq!(e.as_str(), "N/A");
        assert!(!e.is_known());
        for slot in STARTING_SLOTS {
            assert!(!e.fills(slot));
        }
    }

    #[test]
    fn eligibility_uses_substring_containment() {
        let e = Eligibility::Known("2B,SS".into());
        assert!(e.contains(Position::SecondBase));
        assert!(e.contains(Position::ShortStop));
        assert!(!e.contains(Position::Outfield));
        // "MI" slot takes 2B or SS; "CI" takes 1B or 3B
        assert!(e.fills(&STARTING_SLOTS[8]));
        assert!(!e.fills(&STARTING_SLOTS[9]));
    }

    #[test]
    fn dh_only_player_fills_util_but_not_dedicated_slots() {
        let e = Eligibility::Known("DH".into());
        assert!(!e.fills(&STARTING_SLOTS[0]));
        assert!(e.fills(&STARTING_SLOTS[10]));
    }

    #[test]
    fn eligibility_display_pads_like_str() {
        assert_eq!(format!("[{:<5}]", Eligibility::Unknown), "[N/A  ]");
        assert_eq!(format!("[{}]", Eligibility::Known("C,1B".into())), "[C,1B]");
    }
}
