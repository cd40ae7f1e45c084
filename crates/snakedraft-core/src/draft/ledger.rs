// Draft ledger: the single owner of the player pool and draft progress.
//
// Every mutation (draft, undraft, league size change) recomputes VBD for the
// whole pool before returning, so reads never see stale values.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use super::order::{DraftOrder, LeagueSize, DEFAULT_ROUNDS};
use super::player::{DraftSlot, Player, PlayerId, Position, ALL_POSITIONS};
use crate::config::Config;
use crate::valuation::needs::{analyze_team_needs, TeamNeedsAnalysis};
use crate::valuation::recommend::{self, PlayerRecommendation};
use crate::valuation::strategy::DraftStrategy;
use crate::valuation::value::{roster_value_report, RosterValueReport};
use crate::valuation::vbd::{apply_vbd, position_remaining_ratio};

// ---------------------------------------------------------------------------
// Settings and errors
// ---------------------------------------------------------------------------

/// League and user settings that drive the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DraftSettings {
    pub league_size: LeagueSize,
    /// The user's team, 1-indexed.
    pub user_team: u32,
    pub strategy: DraftStrategy,
    pub rounds: u32,
}

impl Default for DraftSettings {
    fn default() -> Self {
        DraftSettings {
            league_size: LeagueSize::Ten,
            user_team: 1,
            strategy: DraftStrategy::Balanced,
            rounds: DEFAULT_ROUNDS,
        }
    }
}

impl From<&Config> for DraftSettings {
    fn from(config: &Config) -> Self {
        DraftSettings {
            league_size: config.league.size,
            user_team: config.league.user_team,
            strategy: config.strategy,
            rounds: config.league.rounds,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("unknown player id `{0}`")]
    UnknownPlayer(PlayerId),

    #[error("player `{id}` was already drafted by team {team_id} at pick {pick_number}")]
    AlreadyDrafted {
        id: PlayerId,
        team_id: u32,
        pick_number: u32,
    },

    #[error("player `{0}` has not been drafted")]
    NotDrafted(PlayerId),

    #[error("team {team} is outside 1..={teams}")]
    TeamOutOfRange { team: u32, teams: u32 },

    #[error("pick {pick} is outside 1..={total}")]
    PickOutOfRange { pick: u32, total: u32 },

    #[error("the draft is complete")]
    DraftComplete,
}

// ---------------------------------------------------------------------------
// Read models
// ---------------------------------------------------------------------------

/// One completed pick, as recorded when it was made.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickRecord {
    pub pick_number: u32,
    pub round: u32,
    pub team_id: u32,
    pub player_id: PlayerId,
    pub player_name: String,
    pub position: Position,
    pub recorded_at: DateTime<Utc>,
}

/// A single cell of the draft board grid.
#[derive(Debug, Clone, Serialize)]
pub struct BoardCell<'a> {
    pub pick_number: u32,
    pub round: u32,
    pub team_id: u32,
    pub player: Option<&'a Player>,
}

/// Filters for [`DraftLedger::rankings`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankingQuery {
    pub position: Option<Position>,
    /// Case-insensitive substring match on player name or NFL team.
    pub search: Option<String>,
    pub available_only: bool,
    pub limit: Option<usize>,
}

// ---------------------------------------------------------------------------
// Ledger
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct DraftLedger {
    players: Vec<Player>,
    index: HashMap<PlayerId, usize>,
    settings: DraftSettings,
    current_pick: u32,
    pick_log: Vec<PickRecord>,
}

impl DraftLedger {
    /// Take ownership of the pool and score it. The draft starts at pick 1.
    ///
    /// Draft status already present on the players is kept.
    pub fn new(players: Vec<Player>, settings: DraftSettings) -> Self {
        let index = players
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();
        let mut ledger = DraftLedger {
            players,
            index,
            settings,
            current_pick: 1,
            pick_log: Vec::new(),
        };
        ledger.recompute();
        info!(
            "Draft ledger ready: {} players, {} teams, user team {}, strategy {}",
            ledger.players.len(),
            settings.league_size,
            settings.user_team,
            settings.strategy
        );
        ledger
    }

    fn recompute(&mut self) {
        apply_vbd(&mut self.players, self.settings.league_size);
    }

    pub fn order(&self) -> DraftOrder {
        DraftOrder::new(self.settings.league_size, self.settings.rounds)
    }

    pub fn settings(&self) -> &DraftSettings {
        &self.settings
    }

    // -- settings ----------------------------------------------------------

    /// Change the league size and rescore the pool.
    ///
    /// A user team beyond the new size is moved to the last slot.
    pub fn set_league_size(&mut self, league_size: LeagueSize) {
        self.settings.league_size = league_size;
        if self.settings.user_team > league_size.teams() {
            warn!(
                "user team {} does not exist in a {}-team league; using team {}",
                self.settings.user_team,
                league_size,
                league_size.teams()
            );
            self.settings.user_team = league_size.teams();
        }
        self.recompute();
        info!("League size set to {}", league_size);
    }

    pub fn set_user_team(&mut self, team: u32) -> Result<(), LedgerError> {
        self.check_team(team)?;
        self.settings.user_team = team;
        info!("User team set to {}", team);
        Ok(())
    }

    pub fn set_strategy(&mut self, strategy: DraftStrategy) {
        self.settings.strategy = strategy;
        info!("Draft strategy set to {}", strategy);
    }

    fn check_team(&self, team: u32) -> Result<(), LedgerError> {
        let teams = self.settings.league_size.teams();
        if team == 0 || team > teams {
            return Err(LedgerError::TeamOutOfRange { team, teams });
        }
        Ok(())
    }

    fn position_of(&self, id: &PlayerId) -> Result<usize, LedgerError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| LedgerError::UnknownPlayer(id.clone()))
    }

    // -- mutations ---------------------------------------------------------

    /// Record `id` as taken by `team` at `pick_number`.
    ///
    /// The draft continues from the pick after `pick_number`.
    pub fn draft_player(
        &mut self,
        id: &PlayerId,
        team: u32,
        pick_number: u32,
    ) -> Result<&Player, LedgerError> {
        let idx = self.position_of(id)?;
        if let Some(slot) = self.players[idx].draft {
            return Err(LedgerError::AlreadyDrafted {
                id: id.clone(),
                team_id: slot.team_id,
                pick_number: slot.pick_number,
            });
        }
        self.check_team(team)?;
        let order = self.order();
        if pick_number == 0 || order.is_complete(pick_number) {
            return Err(LedgerError::PickOutOfRange {
                pick: pick_number,
                total: order.total_picks(),
            });
        }

        let player = &mut self.players[idx];
        player.draft = Some(DraftSlot {
            team_id: team,
            pick_number,
        });
        self.pick_log.push(PickRecord {
            pick_number,
            round: order.round_of(pick_number),
            team_id: team,
            player_id: player.id.clone(),
            player_name: player.name.clone(),
            position: player.position,
            recorded_at: Utc::now(),
        });
        info!(
            "Pick {}: team {} takes {} ({})",
            pick_number, team, player.name, player.position
        );

        self.current_pick = pick_number + 1;
        self.recompute();
        Ok(&self.players[idx])
    }

    /// Draft `id` for whichever team is on the clock.
    pub fn draft_on_clock(&mut self, id: &PlayerId) -> Result<&Player, LedgerError> {
        let pick = self.current_pick;
        let team = self.team_on_clock().ok_or(LedgerError::DraftComplete)?;
        self.draft_player(id, team, pick)
    }

    /// Return a drafted player to the pool.
    ///
    /// The draft rewinds to that player's pick if it came earlier.
    pub fn undraft_player(&mut self, id: &PlayerId) -> Result<&Player, LedgerError> {
        let idx = self.position_of(id)?;
        let slot = self.players[idx]
            .draft
            .take()
            .ok_or_else(|| LedgerError::NotDrafted(id.clone()))?;

        self.pick_log.retain(|record| record.player_id != *id);
        self.current_pick = self.current_pick.min(slot.pick_number);
        info!(
            "Undid pick {}: {} returns to the pool",
            slot.pick_number, self.players[idx].name
        );

        self.recompute();
        Ok(&self.players[idx])
    }

    // -- reads -------------------------------------------------------------

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.index.get(id).map(|&i| &self.players[i])
    }

    pub fn available_players(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| !p.is_drafted()).collect()
    }

    /// Drafted players in pick order.
    pub fn drafted_players(&self) -> Vec<&Player> {
        let mut drafted: Vec<&Player> = self.players.iter().filter(|p| p.is_drafted()).collect();
        drafted.sort_by_key(|p| p.draft_pick());
        drafted
    }

    /// Players drafted by `team`, in pick order.
    pub fn team_roster(&self, team: u32) -> Vec<&Player> {
        let mut roster: Vec<&Player> = self
            .players
            .iter()
            .filter(|p| p.drafted_by() == Some(team))
            .collect();
        roster.sort_by_key(|p| p.draft_pick());
        roster
    }

    pub fn user_roster(&self) -> Vec<&Player> {
        self.team_roster(self.settings.user_team)
    }

    pub fn current_pick(&self) -> u32 {
        self.current_pick
    }

    pub fn current_round(&self) -> u32 {
        self.order().round_of(self.current_pick)
    }

    pub fn is_complete(&self) -> bool {
        self.order().is_complete(self.current_pick)
    }

    /// Team on the clock, or `None` once every pick is made.
    pub fn team_on_clock(&self) -> Option<u32> {
        if self.is_complete() {
            return None;
        }
        Some(self.order().team_on_clock(self.current_pick))
    }

    pub fn is_user_turn(&self) -> bool {
        !self.is_complete()
            && self
                .order()
                .is_team_turn(self.current_pick, self.settings.user_team)
    }

    pub fn team_needs(&self, team: u32) -> TeamNeedsAnalysis<'_> {
        analyze_team_needs(&self.team_roster(team))
    }

    /// Top picks for the user at the current pick. Empty once the draft is over.
    pub fn recommendations(&self) -> Vec<PlayerRecommendation<'_>> {
        if self.is_complete() {
            return Vec::new();
        }
        recommend::recommend(
            &self.available_players(),
            &self.user_roster(),
            self.current_pick,
            self.settings.league_size,
            self.settings.strategy,
        )
    }

    /// The user's best pick right now, `None` once the draft is over.
    pub fn top_recommendation(&self) -> Option<&Player> {
        if self.is_complete() {
            return None;
        }
        recommend::top_recommendation(
            &self.available_players(),
            &self.user_roster(),
            self.current_pick,
            self.settings.league_size,
            self.settings.strategy,
        )
    }

    /// Whether `id` is one of the user's current recommendations.
    pub fn is_recommended(&self, id: &PlayerId) -> bool {
        !self.is_complete()
            && recommend::is_recommended(
                id,
                &self.available_players(),
                &self.user_roster(),
                self.current_pick,
                self.settings.league_size,
                self.settings.strategy,
            )
    }

    /// Next pick the user's team holds, counting the current one.
    pub fn user_next_pick(&self) -> Option<u32> {
        self.order()
            .next_pick_for(self.settings.user_team, self.current_pick)
    }

    /// Share of each position still undrafted.
    pub fn remaining_by_position(&self) -> Vec<(Position, f64)> {
        ALL_POSITIONS
            .iter()
            .map(|&pos| (pos, position_remaining_ratio(&self.players, pos)))
            .collect()
    }

    pub fn roster_value(&self, team: u32) -> RosterValueReport<'_> {
        roster_value_report(&self.team_roster(team))
    }

    /// Every pick slot of the draft, with the player taken there if any.
    pub fn draft_board(&self) -> Vec<BoardCell<'_>> {
        let order = self.order();
        let by_pick: HashMap<u32, &Player> = self
            .players
            .iter()
            .filter_map(|p| p.draft_pick().map(|pick| (pick, p)))
            .collect();

        (1..=order.total_picks())
            .map(|pick| BoardCell {
                pick_number: pick,
                round: order.round_of(pick),
                team_id: order.team_on_clock(pick),
                player: by_pick.get(&pick).copied(),
            })
            .collect()
    }

    /// Players matching `query`, highest VBD first.
    pub fn rankings(&self, query: &RankingQuery) -> Vec<&Player> {
        let needle = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut ranked: Vec<&Player> = self
            .players
            .iter()
            .filter(|p| !query.available_only || !p.is_drafted())
            .filter(|p| query.position.is_none_or(|pos| p.position == pos))
            .filter(|p| match &needle {
                Some(n) => p.name.to_lowercase().contains(n) || p.team.to_lowercase().contains(n),
                None => true,
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.vbd_score
                .partial_cmp(&a.vbd_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        if let Some(limit) = query.limit {
            ranked.truncate(limit);
        }
        ranked
    }

    pub fn pick_log(&self) -> &[PickRecord] {
        &self.pick_log
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::player::PlayerStats;
    use crate::valuation::needs::{NeedPriority, TeamGrade};

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    fn player(id: &str, name: &str, team: &str, position: Position, projected: f64) -> Player {
        Player::new(id, name, team, position, PlayerStats::default(), projected)
    }

    fn four_player_pool() -> Vec<Player> {
        vec![
            player("qb1", "Josh Allen", "BUF", Position::Quarterback, 300.0),
            player("rb1", "Bijan Robinson", "ATL", Position::RunningBack, 250.0),
            player("wr1", "Ja'Marr Chase", "CIN", Position::WideReceiver, 230.0),
            player("te1", "Brock Bowers", "LV", Position::TightEnd, 150.0),
        ]
    }

    fn ledger() -> DraftLedger {
        DraftLedger::new(four_player_pool(), DraftSettings::default())
    }

    fn id(s: &str) -> PlayerId {
        PlayerId::from(s)
    }

    /// `count` running backs projected 200, 195, 190, ...
    fn rb_pool(count: usize) -> Vec<Player> {
        (0..count)
            .map(|i| {
                player(
                    &format!("rb{}", i),
                    &format!("Back {}", i),
                    "FA",
                    Position::RunningBack,
                    200.0 - 5.0 * i as f64,
                )
            })
            .collect()
    }

    #[test]
    fn small_pool_vbd_equals_projection() {
        let ledger = ledger();
        for p in ledger.players() {
            assert!(approx_eq(p.vbd_score, p.projected_points, 1e-9), "{}", p.name);
        }
    }

    #[test]
    fn drafting_advances_pick_and_roster() {
        let mut ledger = ledger();
        ledger.draft_player(&id("rb1"), 1, 1).unwrap();

        assert_eq!(ledger.current_pick(), 2);
        let roster: Vec<&str> = ledger.team_roster(1).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(roster, vec!["rb1"]);
        let drafted = ledger.player(&id("rb1")).unwrap();
        assert_eq!(drafted.drafted_by(), Some(1));
        assert_eq!(drafted.draft_pick(), Some(1));
        assert_eq!(ledger.available_players().len(), 3);
    }

    #[test]
    fn draft_errors() {
        let mut ledger = ledger();
        assert_eq!(
            ledger.draft_player(&id("nobody"), 1, 1).unwrap_err(),
            LedgerError::UnknownPlayer(id("nobody"))
        );
        assert_eq!(
            ledger.draft_player(&id("qb1"), 11, 1).unwrap_err(),
            LedgerError::TeamOutOfRange { team: 11, teams: 10 }
        );
        assert_eq!(
            ledger.draft_player(&id("qb1"), 1, 0).unwrap_err(),
            LedgerError::PickOutOfRange { pick: 0, total: 170 }
        );
        assert_eq!(
            ledger.draft_player(&id("qb1"), 1, 171).unwrap_err(),
            LedgerError::PickOutOfRange { pick: 171, total: 170 }
        );

        ledger.draft_player(&id("qb1"), 3, 3).unwrap();
        assert_eq!(
            ledger.draft_player(&id("qb1"), 4, 4).unwrap_err(),
            LedgerError::AlreadyDrafted {
                id: id("qb1"),
                team_id: 3,
                pick_number: 3
            }
        );
        // failed drafts leave state untouched
        assert_eq!(ledger.current_pick(), 4);
        assert_eq!(ledger.pick_log().len(), 1);
    }

    #[test]
    fn draft_on_clock_follows_snake_order() {
        let mut ledger = DraftLedger::new(rb_pool(25), DraftSettings::default());
        for i in 0..11 {
            ledger.draft_on_clock(&id(&format!("rb{}", i))).unwrap();
        }
        // pick 10 -> team 10, pick 11 -> team 10 again
        assert_eq!(ledger.player(&id("rb9")).unwrap().drafted_by(), Some(10));
        assert_eq!(ledger.player(&id("rb10")).unwrap().drafted_by(), Some(10));
        assert_eq!(ledger.current_round(), 2);
        assert_eq!(ledger.team_on_clock(), Some(9));
    }

    #[test]
    fn undraft_restores_player_and_rewinds() {
        let mut ledger = ledger();
        ledger.draft_player(&id("qb1"), 1, 1).unwrap();
        ledger.draft_player(&id("rb1"), 2, 2).unwrap();
        assert_eq!(ledger.current_pick(), 3);

        ledger.undraft_player(&id("qb1")).unwrap();
        assert_eq!(ledger.current_pick(), 1);
        assert!(!ledger.player(&id("qb1")).unwrap().is_drafted());
        assert_eq!(ledger.pick_log().len(), 1);
        assert_eq!(ledger.pick_log()[0].player_id, id("rb1"));

        assert_eq!(
            ledger.undraft_player(&id("qb1")).unwrap_err(),
            LedgerError::NotDrafted(id("qb1"))
        );
    }

    #[test]
    fn undraft_later_pick_keeps_current_pick() {
        let mut ledger = ledger();
        ledger.draft_player(&id("qb1"), 5, 5).unwrap();
        ledger.draft_player(&id("wr1"), 1, 2).unwrap();
        // drafting at pick 2 moved the counter back to 3
        assert_eq!(ledger.current_pick(), 3);
        ledger.undraft_player(&id("qb1")).unwrap();
        assert_eq!(ledger.current_pick(), 3);
    }

    #[test]
    fn drafting_shifts_baselines() {
        let mut ledger = DraftLedger::new(rb_pool(22), DraftSettings::default());
        // 20th back projects 105
        assert!(approx_eq(ledger.player(&id("rb0")).unwrap().vbd_score, 95.0, 1e-9));
        ledger.draft_player(&id("rb0"), 1, 1).unwrap();
        // 20th remaining back is now the 21st overall (100)
        assert!(approx_eq(ledger.player(&id("rb0")).unwrap().vbd_score, 100.0, 1e-9));
        assert!(approx_eq(ledger.player(&id("rb1")).unwrap().vbd_score, 95.0, 1e-9));
    }

    #[test]
    fn drafted_status_is_consistent() {
        let mut ledger = ledger();
        ledger.draft_player(&id("te1"), 2, 2).unwrap();
        for p in ledger.players() {
            assert_eq!(p.is_drafted(), p.drafted_by().is_some());
            assert_eq!(p.is_drafted(), p.draft_pick().is_some());
        }
    }

    #[test]
    fn league_size_change_rescores_and_clamps_user_team() {
        let settings = DraftSettings {
            league_size: LeagueSize::Twelve,
            user_team: 12,
            ..DraftSettings::default()
        };
        let mut ledger = DraftLedger::new(rb_pool(26), settings);
        // 24th back projects 85
        assert!(approx_eq(ledger.player(&id("rb0")).unwrap().vbd_score, 115.0, 1e-9));

        ledger.set_league_size(LeagueSize::Ten);
        assert_eq!(ledger.settings().user_team, 10);
        assert!(approx_eq(ledger.player(&id("rb0")).unwrap().vbd_score, 95.0, 1e-9));
    }

    #[test]
    fn user_turn_tracks_snake_order() {
        let mut ledger = DraftLedger::new(rb_pool(25), DraftSettings::default());
        ledger.set_user_team(10).unwrap();
        assert!(!ledger.is_user_turn());
        for i in 0..9 {
            ledger.draft_on_clock(&id(&format!("rb{}", i))).unwrap();
        }
        assert!(ledger.is_user_turn());
        assert!(ledger.set_user_team(0).is_err());
        assert!(ledger.set_user_team(11).is_err());
    }

    #[test]
    fn recommendations_stop_when_complete() {
        let settings = DraftSettings {
            rounds: 1,
            ..DraftSettings::default()
        };
        let mut ledger = DraftLedger::new(rb_pool(12), settings);
        assert!(!ledger.recommendations().is_empty());
        for i in 0..10 {
            ledger.draft_on_clock(&id(&format!("rb{}", i))).unwrap();
        }
        assert!(ledger.is_complete());
        assert_eq!(ledger.team_on_clock(), None);
        assert!(!ledger.is_user_turn());
        assert!(ledger.recommendations().is_empty());
        assert_eq!(
            ledger.draft_on_clock(&id("rb10")).unwrap_err(),
            LedgerError::DraftComplete
        );
    }

    #[test]
    fn team_needs_for_empty_team() {
        let ledger = ledger();
        let needs = ledger.team_needs(4);
        assert_eq!(needs.grade, TeamGrade::F);
        assert!(needs
            .position_needs
            .iter()
            .all(|n| n.priority == NeedPriority::Critical));
        assert!(ledger.roster_value(4).grade.is_none());
    }

    #[test]
    fn board_covers_every_pick() {
        let mut ledger = ledger();
        ledger.draft_player(&id("wr1"), 10, 11).unwrap();
        let board = ledger.draft_board();
        assert_eq!(board.len(), 170);
        let cell = &board[10];
        assert_eq!((cell.pick_number, cell.round, cell.team_id), (11, 2, 10));
        assert_eq!(cell.player.map(|p| p.id.as_str()), Some("wr1"));
        assert!(board[0].player.is_none());
    }

    #[test]
    fn rankings_filter_and_sort() {
        let mut ledger = ledger();
        ledger.draft_player(&id("qb1"), 1, 1).unwrap();

        let all = ledger.rankings(&RankingQuery::default());
        let order: Vec<&str> = all.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(order, vec!["qb1", "rb1", "wr1", "te1"]);

        let available = ledger.rankings(&RankingQuery {
            available_only: true,
            limit: Some(2),
            ..RankingQuery::default()
        });
        let order: Vec<&str> = available.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(order, vec!["rb1", "wr1"]);

        let by_team = ledger.rankings(&RankingQuery {
            search: Some("cin".into()),
            ..RankingQuery::default()
        });
        assert_eq!(by_team.len(), 1);
        assert_eq!(by_team[0].id.as_str(), "wr1");

        let tes = ledger.rankings(&RankingQuery {
            position: Some(Position::TightEnd),
            search: Some("  ".into()),
            ..RankingQuery::default()
        });
        assert_eq!(tes.len(), 1);
    }

    #[test]
    fn top_recommendation_and_marks_follow_the_clock() {
        let mut ledger = ledger();
        let top = ledger.top_recommendation().map(|p| p.id.clone()).unwrap();
        assert!(ledger.is_recommended(&top));
        assert_eq!(ledger.recommendations()[0].player.id, top);

        ledger.draft_on_clock(&top).unwrap();
        // drafted players drop out of the recommendations
        assert!(!ledger.is_recommended(&top));
        assert!(!ledger.is_recommended(&id("nobody")));
    }

    #[test]
    fn recommendation_marks_clear_when_complete() {
        let settings = DraftSettings {
            rounds: 1,
            ..DraftSettings::default()
        };
        let mut ledger = DraftLedger::new(rb_pool(12), settings);
        for i in 0..10 {
            ledger.draft_on_clock(&id(&format!("rb{}", i))).unwrap();
        }
        assert!(ledger.top_recommendation().is_none());
        assert!(!ledger.is_recommended(&id("rb10")));
        assert_eq!(ledger.user_next_pick(), None);
    }

    #[test]
    fn user_next_pick_follows_snake_order() {
        let mut ledger = ledger();
        ledger.set_user_team(3).unwrap();
        assert_eq!(ledger.user_next_pick(), Some(3));
        ledger.draft_player(&id("qb1"), 3, 3).unwrap();
        assert_eq!(ledger.user_next_pick(), Some(18));
    }

    #[test]
    fn remaining_share_per_position() {
        let mut ledger = ledger();
        ledger.draft_player(&id("rb1"), 1, 1).unwrap();
        let remaining = ledger.remaining_by_position();
        assert_eq!(remaining.len(), 4);
        assert!(remaining.contains(&(Position::RunningBack, 0.0)));
        assert!(remaining.contains(&(Position::Quarterback, 1.0)));
    }

    #[test]
    fn pick_log_records_picks() {
        let mut ledger = ledger();
        let before = Utc::now();
        ledger.draft_player(&id("te1"), 7, 7).unwrap();
        let record = &ledger.pick_log()[0];
        assert_eq!(record.pick_number, 7);
        assert_eq!(record.round, 1);
        assert_eq!(record.team_id, 7);
        assert_eq!(record.player_name, "Brock Bowers");
        assert_eq!(record.position, Position::TightEnd);
        assert!(record.recorded_at >= before);
    }
}
