// Hitter positions and the roster slots used to carve out starters.

use std::fmt;

/// Hitter positions in the canonical position vocabulary. Left, center and
/// right field are already folded into `Outfield` by the time data reaches
/// the valuation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Catcher,
    FirstBase,
    SecondBase,
    ThirdBase,
    ShortStop,
    Outfield,
    DesignatedHitter,
}

/// Positions that receive a replacement baseline, in evaluation order.
pub const BASELINE_POSITIONS: &[Position] = &[
    Position::Catcher,
    Position::FirstBase,
    Position::SecondBase,
    Position::ThirdBase,
    Position::ShortStop,
    Position::Outfield,
];

impl Position {
    /// Parse a position token.
    ///
    /// "LF", "CF" and "RF" all map to `Outfield`.
    pub fn from_str_pos(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "C" => Some(Position::Catcher),
            "1B" => Some(Position::FirstBase),
            "2B" => Some(Position::SecondBase),
            "3B" => Some(Position::ThirdBase),
            "SS" => Some(Position::ShortStop),
            "OF" | "LF" | "CF" | "RF" => Some(Position::Outfield),
            "DH" => Some(Position::DesignatedHitter),
            _ => None,
        }
    }

    /// The token this position is written as in an eligibility string.
    pub fn token(&self) -> &'static str {
        match self {
            Position::Catcher => "C",
            Position::FirstBase => "1B",
            Position::SecondBase => "2B",
            Position::ThirdBase => "3B",
            Position::ShortStop => "SS",
            Position::Outfield => "OF",
            Position::DesignatedHitter => "DH",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.token())
    }
}

// ---------------------------------------------------------------------------
// Roster slots
// ---------------------------------------------------------------------------

/// A starting roster slot: any player eligible at one of `positions` can
/// fill it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterSlot {
    pub label: &'static str,
    pub positions: &'static [Position],
}

const ANY_HITTER: &[Position] = &[
    Position::Catcher,
    Position::FirstBase,
    Position::SecondBase,
    Position::ThirdBase,
    Position::ShortStop,
    Position::Outfield,
    Position::DesignatedHitter,
];

/// Starting lineup of one team, in the order starters are drafted out of the
/// pool. Overlapping slots are intentional: each is filled from whatever the
/// earlier slots left behind.
pub const STARTING_SLOTS: &[RosterSlot] = &[
    RosterSlot { label: "C", positions: &[Position::Catcher] },
    RosterSlot { label: "2B", positions: &[Position::SecondBase] },
    RosterSlot { label: "SS", positions: &[Position::ShortStop] },
    RosterSlot { label: "3B", positions: &[Position::ThirdBase] },
    RosterSlot { label: "1B", positions: &[Position::FirstBase] },
    RosterSlot { label: "OF", positions: &[Position::Outfield] },
    RosterSlot { label: "OF", positions: &[Position::Outfield] },
    RosterSlot { label: "OF", positions: &[Position::Outfield] },
    RosterSlot { label: "MI", positions: &[Position::SecondBase, Position::ShortStop] },
    RosterSlot { label: "CI", positions: &[Position::FirstBase, Position::ThirdBase] },
    RosterSlot { label: "UTIL", positions: ANY_HITTER },
    RosterSlot { label: "UTIL", positions: ANY_HITTER },
    RosterSlot { label: "UTIL", positions: ANY_HITTER },
];

/// Teams in the league; one starter per slot per team.
pub const LEAGUE_TEAMS: usize = 12;
