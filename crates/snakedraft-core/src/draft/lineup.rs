// Starting lineup template and greedy slot assignment.

use std::fmt;

use serde::Serialize;

use super::player::{Player, Position};

/// The kind of a starting lineup slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SlotKind {
    /// Only players at this position.
    Dedicated(Position),
    /// RB, WR or TE.
    Flex,
    /// Any position, including a second QB.
    Superflex,
}

impl SlotKind {
    pub fn accepts(&self, position: Position) -> bool {
        match self {
            SlotKind::Dedicated(pos) => *pos == position,
            SlotKind::Flex => position.is_flex_eligible(),
            SlotKind::Superflex => true,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SlotKind::Dedicated(pos) => pos.display_str(),
            SlotKind::Flex => "FLEX",
            SlotKind::Superflex => "SFLX",
        }
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Starting slots in fill order: dedicated, then flex, then superflex.
pub const LINEUP_TEMPLATE: [SlotKind; 10] = [
    SlotKind::Dedicated(Position::Quarterback),
    SlotKind::Dedicated(Position::RunningBack),
    SlotKind::Dedicated(Position::RunningBack),
    SlotKind::Dedicated(Position::WideReceiver),
    SlotKind::Dedicated(Position::WideReceiver),
    SlotKind::Dedicated(Position::TightEnd),
    SlotKind::Flex,
    SlotKind::Flex,
    SlotKind::Flex,
    SlotKind::Superflex,
];

/// Number of starting slots in the template.
pub const STARTING_SLOTS: usize = LINEUP_TEMPLATE.len();

/// Dedicated starters required at `position`.
pub fn dedicated_starters(position: Position) -> usize {
    LINEUP_TEMPLATE
        .iter()
        .filter(|kind| **kind == SlotKind::Dedicated(position))
        .count()
}

/// A single starting slot and its occupant.
#[derive(Debug, Clone, Serialize)]
pub struct LineupSlot<'a> {
    pub kind: SlotKind,
    pub player: Option<&'a Player>,
}

/// A roster split into starters and bench.
#[derive(Debug, Clone, Serialize)]
pub struct Lineup<'a> {
    pub slots: Vec<LineupSlot<'a>>,
    pub bench: Vec<&'a Player>,
}

impl<'a> Lineup<'a> {
    /// Assign `roster` to the lineup template in a single greedy pass.
    ///
    /// Each slot takes the highest-projected unassigned player it accepts.
    /// Ties keep roster order. No slot is revisited once filled, so the
    /// result is not guaranteed to be the optimal assignment.
    pub fn fill(roster: &[&'a Player]) -> Self {
        let mut ranked: Vec<&'a Player> = roster.to_vec();
        ranked.sort_by(|a, b| {
            b.projected_points
                .partial_cmp(&a.projected_points)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut used = vec![false; ranked.len()];
        let mut slots = Vec::with_capacity(STARTING_SLOTS);

        for kind in LINEUP_TEMPLATE {
            let pick = ranked
                .iter()
                .enumerate()
                .find(|(i, p)| !used[*i] && kind.accepts(p.position))
                .map(|(i, p)| (i, *p));

            let player = pick.map(|(i, p)| {
                used[i] = true;
                p
            });
            slots.push(LineupSlot { kind, player });
        }

        let bench = ranked
            .iter()
            .zip(used.iter())
            .filter(|(_, u)| !**u)
            .map(|(p, _)| *p)
            .collect();

        Lineup { slots, bench }
    }

    /// Number of starting slots with a player in them.
    pub fn starters_filled(&self) -> usize {
        self.slots.iter().filter(|s| s.player.is_some()).count()
    }

    pub fn unfilled(&self) -> usize {
        STARTING_SLOTS - self.starters_filled()
    }

    pub fn starters(&self) -> impl Iterator<Item = &'a Player> + '_ {
        self.slots.iter().filter_map(|s| s.player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::player::PlayerStats;

    fn player(id: &str, position: Position, projected: f64) -> Player {
        Player::new(id, id, "FA", position, PlayerStats::default(), projected)
    }

    fn refs(players: &[Player]) -> Vec<&Player> {
        players.iter().collect()
    }

    #[test]
    fn template_has_ten_starters() {
        assert_eq!(STARTING_SLOTS, 10);
        assert_eq!(dedicated_starters(Position::Quarterback), 1);
        assert_eq!(dedicated_starters(Position::RunningBack), 2);
        assert_eq!(dedicated_starters(Position::WideReceiver), 2);
        assert_eq!(dedicated_starters(Position::TightEnd), 1);
    }

    #[test]
    fn empty_roster_fills_nothing() {
        let lineup = Lineup::fill(&[]);
        assert_eq!(lineup.starters_filled(), 0);
        assert_eq!(lineup.unfilled(), 10);
        assert!(lineup.bench.is_empty());
    }

    #[test]
    fn slot_acceptance() {
        assert!(SlotKind::Flex.accepts(Position::TightEnd));
        assert!(!SlotKind::Flex.accepts(Position::Quarterback));
        assert!(SlotKind::Superflex.accepts(Position::Quarterback));
        assert!(!SlotKind::Dedicated(Position::RunningBack).accepts(Position::WideReceiver));
    }

    #[test]
    fn dedicated_slots_take_best_at_position() {
        let players = vec![
            player("rb-low", Position::RunningBack, 100.0),
            player("rb-high", Position::RunningBack, 200.0),
            player("rb-mid", Position::RunningBack, 150.0),
        ];
        let lineup = Lineup::fill(&refs(&players));
        let rb_slots: Vec<&str> = lineup
            .slots
            .iter()
            .filter(|s| s.kind == SlotKind::Dedicated(Position::RunningBack))
            .filter_map(|s| s.player.map(|p| p.id.as_str()))
            .collect();
        assert_eq!(rb_slots, vec!["rb-high", "rb-mid"]);
        // third RB goes to flex
        assert_eq!(lineup.slots[6].player.map(|p| p.id.as_str()), Some("rb-low"));
        assert!(lineup.bench.is_empty());
    }

    #[test]
    fn second_qb_lands_in_superflex() {
        let players = vec![
            player("qb1", Position::Quarterback, 300.0),
            player("qb2", Position::Quarterback, 250.0),
            player("qb3", Position::Quarterback, 200.0),
        ];
        let lineup = Lineup::fill(&refs(&players));
        assert_eq!(lineup.slots[0].player.map(|p| p.id.as_str()), Some("qb1"));
        assert_eq!(lineup.slots[9].kind, SlotKind::Superflex);
        assert_eq!(lineup.slots[9].player.map(|p| p.id.as_str()), Some("qb2"));
        assert_eq!(lineup.starters_filled(), 2);
        assert_eq!(lineup.bench.len(), 1);
        assert_eq!(lineup.bench[0].id.as_str(), "qb3");
    }

    #[test]
    fn full_roster_overflows_to_bench() {
        let mut players = vec![
            player("qb1", Position::Quarterback, 300.0),
            player("qb2", Position::Quarterback, 280.0),
            player("te1", Position::TightEnd, 150.0),
        ];
        for i in 0..5 {
            players.push(player(&format!("rb{}", i), Position::RunningBack, 200.0 - i as f64));
            players.push(player(&format!("wr{}", i), Position::WideReceiver, 190.0 - i as f64));
        }
        let lineup = Lineup::fill(&refs(&players));
        assert_eq!(lineup.starters_filled(), 10);
        assert_eq!(lineup.unfilled(), 0);
        assert_eq!(lineup.bench.len(), players.len() - 10);
        assert_eq!(lineup.starters().count(), 10);
    }
}
