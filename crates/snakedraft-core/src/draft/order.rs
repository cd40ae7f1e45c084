// Snake draft order: maps a global pick counter to round, slot, and team.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of rounds in a standard draft.
pub const DEFAULT_ROUNDS: u32 = 17;

// ---------------------------------------------------------------------------
// League size
// ---------------------------------------------------------------------------

/// Supported league sizes. Baseline tables only exist for these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum LeagueSize {
    Ten,
    Twelve,
}

impl LeagueSize {
    pub fn teams(&self) -> u32 {
        match self {
            LeagueSize::Ten => 10,
            LeagueSize::Twelve => 12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unsupported league size {0} (expected 10 or 12)")]
pub struct ParseLeagueSizeError(pub u32);

impl TryFrom<u32> for LeagueSize {
    type Error = ParseLeagueSizeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            10 => Ok(LeagueSize::Ten),
            12 => Ok(LeagueSize::Twelve),
            other => Err(ParseLeagueSizeError(other)),
        }
    }
}

impl From<LeagueSize> for u32 {
    fn from(size: LeagueSize) -> Self {
        size.teams()
    }
}

impl fmt::Display for LeagueSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.teams())
    }
}

// ---------------------------------------------------------------------------
// Draft order oracle
// ---------------------------------------------------------------------------

/// Snake draft order for a fixed league size and round count.
///
/// Picks and teams are both 1-indexed. Odd rounds run team 1 to N, even
/// rounds run N back to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftOrder {
    teams: u32,
    rounds: u32,
}

impl DraftOrder {
    pub fn new(league_size: LeagueSize, rounds: u32) -> Self {
        DraftOrder {
            teams: league_size.teams(),
            rounds,
        }
    }

    /// Standard 17-round snake draft.
    pub fn standard(league_size: LeagueSize) -> Self {
        Self::new(league_size, DEFAULT_ROUNDS)
    }

    pub fn teams(&self) -> u32 {
        self.teams
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn total_picks(&self) -> u32 {
        self.rounds * self.teams
    }

    /// `ceil(pick / teams)`.
    pub fn round_of(&self, pick: u32) -> u32 {
        pick.div_ceil(self.teams)
    }

    /// Position of `pick` within its round, 1..=teams.
    pub fn pick_in_round(&self, pick: u32) -> u32 {
        (pick.saturating_sub(1) % self.teams) + 1
    }

    /// Team id on the clock at `pick`.
    pub fn team_on_clock(&self, pick: u32) -> u32 {
        let slot = self.pick_in_round(pick);
        if self.round_of(pick) % 2 == 1 {
            slot
        } else {
            self.teams - slot + 1
        }
    }

    /// Whether `team_id` owns `pick`.
    pub fn is_team_turn(&self, pick: u32, team_id: u32) -> bool {
        let slot = self.pick_in_round(pick);
        if self.round_of(pick) % 2 == 1 {
            slot == team_id
        } else {
            slot + team_id == self.teams + 1
        }
    }

    /// Absolute pick number that `team_id` holds in `round`.
    ///
    /// `None` when the round or team is outside the draft.
    pub fn pick_number_for(&self, round: u32, team_id: u32) -> Option<u32> {
        if round == 0 || round > self.rounds || team_id == 0 || team_id > self.teams {
            return None;
        }
        let slot = if round % 2 == 0 {
            self.teams - team_id + 1
        } else {
            team_id
        };
        Some((round - 1) * self.teams + slot)
    }

    /// First pick at or after `from` that belongs to `team_id`.
    pub fn next_pick_for(&self, team_id: u32, from: u32) -> Option<u32> {
        let round = self.round_of(from.max(1));
        (round..=round + 1)
            .filter_map(|r| self.pick_number_for(r, team_id))
            .find(|&pick| pick >= from)
    }

    /// The draft is over once the counter passes the final pick.
    pub fn is_complete(&self, pick: u32) -> bool {
        pick > self.total_picks()
    }
}
