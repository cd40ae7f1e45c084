// Plain-text and JSON rendering of engine output.

use serde::Serialize;

use snakedraft_core::draft::ledger::{BoardCell, DraftLedger, PickRecord};
use snakedraft_core::draft::player::{Player, Position};
use snakedraft_core::valuation::needs::TeamNeedsAnalysis;
use snakedraft_core::valuation::recommend::PlayerRecommendation;
use snakedraft_core::valuation::strategy::DraftStrategy;
use snakedraft_core::valuation::value::RosterValueReport;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Snapshot of where the draft stands.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusView {
    pub current_pick: u32,
    pub current_round: u32,
    pub total_picks: u32,
    pub team_on_clock: Option<u32>,
    pub user_team: u32,
    pub is_user_turn: bool,
    pub league_size: u32,
    pub strategy: DraftStrategy,
    pub drafted: usize,
    pub available: usize,
    pub complete: bool,
    /// Next pick the user holds, counting the current one.
    pub user_next_pick: Option<u32>,
    /// Name of the user's best pick right now.
    pub top_pick: Option<String>,
    pub remaining: Vec<PositionRemaining>,
}

/// Share of a position's players still undrafted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionRemaining {
    pub position: Position,
    pub ratio: f64,
}

impl StatusView {
    pub fn from_ledger(ledger: &DraftLedger) -> Self {
        let settings = ledger.settings();
        StatusView {
            current_pick: ledger.current_pick(),
            current_round: ledger.current_round(),
            total_picks: ledger.order().total_picks(),
            team_on_clock: ledger.team_on_clock(),
            user_team: settings.user_team,
            is_user_turn: ledger.is_user_turn(),
            league_size: settings.league_size.teams(),
            strategy: settings.strategy,
            drafted: ledger.drafted_players().len(),
            available: ledger.available_players().len(),
            complete: ledger.is_complete(),
            user_next_pick: ledger.user_next_pick(),
            top_pick: ledger
                .top_recommendation()
                .map(|p| format!("{} ({})", p.name, p.position)),
            remaining: ledger
                .remaining_by_position()
                .into_iter()
                .map(|(position, ratio)| PositionRemaining { position, ratio })
                .collect(),
        }
    }
}

pub fn status(view: &StatusView) -> String {
    if view.complete {
        return format!(
            "Draft complete: {} picks made ({} teams, strategy {})",
            view.drafted, view.league_size, view.strategy
        );
    }
    let clock = match view.team_on_clock {
        Some(team) if view.is_user_turn => format!("team {} (you)", team),
        Some(team) => format!("team {}", team),
        None => "-".to_string(),
    };
    let next = view
        .user_next_pick
        .map(|pick| format!(", your next pick #{}", pick))
        .unwrap_or_default();
    let remaining: Vec<String> = view
        .remaining
        .iter()
        .map(|r| format!("{} {:.0}%", r.position, r.ratio * 100.0))
        .collect();
    let mut out = format!(
        "Pick {}/{} (round {}), on the clock: {}\n\
         League: {} teams, you are team {}{}, strategy {}\n\
         Players: {} drafted, {} available ({})",
        view.current_pick,
        view.total_picks,
        view.current_round,
        clock,
        view.league_size,
        view.user_team,
        next,
        view.strategy,
        view.drafted,
        view.available,
        remaining.join(", ")
    );
    if let Some(top) = &view.top_pick {
        out.push_str(&format!("\nTop pick: {}", top));
    }
    out
}

// ---------------------------------------------------------------------------
// Players
// ---------------------------------------------------------------------------

fn player_line(player: &Player, recommended: bool) -> String {
    let adp = player
        .adp
        .map(|a| format!("{:.1}", a))
        .unwrap_or_else(|| "-".to_string());
    let drafted = match player.draft {
        Some(slot) => format!("  [team {} #{}]", slot.team_id, slot.pick_number),
        None if recommended => "  *".to_string(),
        None => String::new(),
    };
    format!(
        "{:<12} {:<24} {:<4} {:<3} {:>7.1} {:>7.1} {:>6}{}",
        player.id.as_str(),
        player.name,
        player.team,
        player.position,
        player.projected_points,
        player.vbd_score,
        adp,
        drafted
    )
}

/// Player table, one row per player in the given order. Rows for which
/// `recommended` holds end with `*`.
pub fn players(players: &[&Player], recommended: impl Fn(&Player) -> bool) -> String {
    if players.is_empty() {
        return "No players match.".to_string();
    }
    let mut out = format!(
        "{:<12} {:<24} {:<4} {:<3} {:>7} {:>7} {:>6}\n",
        "ID", "NAME", "TEAM", "POS", "PROJ", "VBD", "ADP"
    );
    let rows: Vec<String> = players
        .iter()
        .map(|&p| player_line(p, recommended(p)))
        .collect();
    out.push_str(&rows.join("\n"));
    out
}

// ---------------------------------------------------------------------------
// Recommendations
// ---------------------------------------------------------------------------

pub fn recommendations(recs: &[PlayerRecommendation<'_>]) -> String {
    if recs.is_empty() {
        return "No recommendations: the draft is over or no players remain.".to_string();
    }
    recs.iter()
        .enumerate()
        .map(|(i, rec)| {
            format!(
                "{}. {} ({}, {}) score {:.1}  [{}]\n   {}",
                i + 1,
                rec.player.name,
                rec.player.position,
                rec.player.team,
                rec.score,
                rec.player.id.as_str(),
                rec.reason
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ---------------------------------------------------------------------------
// Needs and value
// ---------------------------------------------------------------------------

pub fn needs(team: u32, analysis: &TeamNeedsAnalysis<'_>) -> String {
    let mut out = format!(
        "Team {}: grade {} ({}/100)\n",
        team, analysis.grade, analysis.score
    );

    for need in &analysis.position_needs {
        out.push_str(&format!(
            "  {:<3} {:<8} {} rostered, {} starter(s), {} more for depth\n",
            need.position,
            need.priority.label(),
            need.filled,
            need.required,
            need.depth
        ));
    }

    out.push_str("Lineup:\n");
    for slot in &analysis.lineup.slots {
        let who = slot
            .player
            .map(|p| format!("{} ({:.1})", p.name, p.projected_points))
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!("  {:<5} {}\n", slot.kind.label(), who));
    }
    let starting: f64 = analysis.lineup.starters().map(|p| p.projected_points).sum();
    out.push_str(&format!("  starters project {:.1} pts\n", starting));
    if !analysis.lineup.bench.is_empty() {
        let bench: Vec<&str> = analysis.lineup.bench.iter().map(|p| p.name.as_str()).collect();
        out.push_str(&format!("  BENCH {}\n", bench.join(", ")));
    }

    for line in &analysis.recommendations {
        out.push_str(&format!("* {}\n", line));
    }
    out.trim_end().to_string()
}

pub fn value(team: u32, report: &RosterValueReport<'_>) -> String {
    let grade = match (report.grade, report.score) {
        (Some(grade), Some(score)) => format!("{} ({}/100)", grade, score),
        _ => "n/a (empty roster)".to_string(),
    };
    let mut out = format!(
        "Team {}: value grade {}\n  total VBD {:.1}, average {:.1}, top five {:.1}\n",
        team, grade, report.total_vbd, report.average_vbd, report.top_five_vbd
    );

    for pv in &report.by_position {
        out.push_str(&format!(
            "  {:<3} {} player(s), total {:.1}, avg {:.1}, strength {:.0}\n",
            pv.position, pv.count, pv.total_vbd, pv.average_vbd, pv.strength
        ));
    }
    if let Some(best) = report.best_value {
        out.push_str(&format!("  best value:  {} ({:.1})\n", best.name, best.vbd_score));
    }
    if let Some(worst) = report.worst_value {
        out.push_str(&format!("  worst value: {} ({:.1})\n", worst.name, worst.vbd_score));
    }
    out.trim_end().to_string()
}

// ---------------------------------------------------------------------------
// Board and log
// ---------------------------------------------------------------------------

/// Board cells, optionally limited to one round.
pub fn board(cells: &[BoardCell<'_>], round: Option<u32>) -> String {
    let rows: Vec<String> = cells
        .iter()
        .filter(|cell| round.is_none_or(|r| cell.round == r))
        .map(|cell| {
            let who = cell
                .player
                .map(|p| format!("{} ({})", p.name, p.position))
                .unwrap_or_else(|| "-".to_string());
            format!(
                "R{:<2} #{:<3} team {:<2} {}",
                cell.round, cell.pick_number, cell.team_id, who
            )
        })
        .collect();

    if rows.is_empty() {
        return "No picks in that round.".to_string();
    }
    rows.join("\n")
}

pub fn pick_log(records: &[PickRecord]) -> String {
    if records.is_empty() {
        return "No picks yet.".to_string();
    }
    records
        .iter()
        .map(|r| {
            format!(
                "#{:<3} R{:<2} team {:<2} {} ({}) at {}",
                r.pick_number,
                r.round,
                r.team_id,
                r.player_name,
                r.position,
                r.recorded_at.format("%H:%M:%S")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use snakedraft_core::draft::ledger::DraftSettings;
    use snakedraft_core::draft::player::{PlayerId, PlayerStats, Position};

    fn ledger() -> DraftLedger {
        let players = vec![
            Player::new("qb", "Josh Allen", "BUF", Position::Quarterback, PlayerStats::default(), 300.0),
            Player::new("rb", "Bijan Robinson", "ATL", Position::RunningBack, PlayerStats::default(), 250.0),
            Player::new("wr", "Ja'Marr Chase", "CIN", Position::WideReceiver, PlayerStats::default(), 230.0),
        ];
        DraftLedger::new(players, DraftSettings::default())
    }

    #[test]
    fn status_text_and_json() {
        let mut ledger = ledger();
        let view = StatusView::from_ledger(&ledger);
        let text = status(&view);
        assert!(text.contains("on the clock: team 1 (you)"));
        assert!(text.contains("you are team 1, your next pick #1"));
        assert!(text.contains("(QB 100%, RB 100%, WR 100%, TE 0%)"));
        assert!(text.contains("\nTop pick: "));

        ledger.draft_on_clock(&PlayerId::from("qb")).unwrap();
        let view = StatusView::from_ledger(&ledger);
        assert_eq!(view.current_pick, 2);
        assert_eq!(view.drafted, 1);
        assert!(status(&view).contains("on the clock: team 2\n"));

        let parsed: serde_json::Value = serde_json::from_str(&json(&view).unwrap()).unwrap();
        assert_eq!(parsed["team_on_clock"], 2);
        assert_eq!(parsed["strategy"], "balanced");
        assert_eq!(parsed["league_size"], 10);
        assert_eq!(parsed["user_next_pick"], 20);
        assert_eq!(parsed["remaining"][0]["position"], "QB");
        assert_eq!(parsed["remaining"][0]["ratio"], 0.0);
    }

    #[test]
    fn status_when_complete_has_no_next_pick() {
        let mut ledger = DraftLedger::new(
            ledger().players().to_vec(),
            DraftSettings {
                rounds: 1,
                ..DraftSettings::default()
            },
        );
        for (pick, id) in [(1, "qb"), (2, "rb"), (10, "wr")] {
            ledger.draft_player(&PlayerId::from(id), 1, pick).unwrap();
        }
        let view = StatusView::from_ledger(&ledger);
        assert!(view.complete);
        assert_eq!(view.user_next_pick, None);
        assert_eq!(view.top_pick, None);
        assert!(status(&view).starts_with("Draft complete: 3 picks made"));
    }

    #[test]
    fn player_table_lists_every_row() {
        let ledger = ledger();
        let all: Vec<&Player> = ledger.players().iter().collect();
        let text = players(&all, |_| false);
        assert_eq!(text.lines().count(), 4);
        assert!(text.contains("Bijan Robinson"));
        assert!(!text.contains('*'));
        assert_eq!(players(&[], |_| true), "No players match.");
    }

    #[test]
    fn player_table_marks_recommended_rows() {
        let ledger = ledger();
        let all: Vec<&Player> = ledger.players().iter().collect();
        let text = players(&all, |p| ledger.is_recommended(&p.id));
        let marked = text.lines().filter(|row| row.ends_with("  *")).count();
        // three players, all of them in the top three
        assert_eq!(marked, 3);
        let top = ledger.top_recommendation().unwrap();
        assert!(text
            .lines()
            .any(|row| row.starts_with(top.id.as_str()) && row.ends_with("  *")));
    }

    #[test]
    fn recommendations_json_has_player_and_breakdown() {
        let ledger = ledger();
        let recs = ledger.recommendations();
        let parsed: serde_json::Value = serde_json::from_str(&json(&recs).unwrap()).unwrap();
        let first = &parsed[0];
        assert!(first["player"]["name"].is_string());
        assert!(first["breakdown"]["round"].is_number());
        assert!(recommendations(&recs).starts_with("1. "));
    }

    #[test]
    fn needs_and_value_text() {
        let mut ledger = ledger();
        ledger.draft_player(&PlayerId::from("rb"), 3, 3).unwrap();

        let text = needs(3, &ledger.team_needs(3));
        assert!(text.starts_with("Team 3: grade"));
        assert!(text.contains("Bijan Robinson (250.0)"));
        assert!(text.contains("starters project 250.0 pts"));

        let text = value(3, &ledger.roster_value(3));
        assert!(text.contains("best value:  Bijan Robinson"));
        assert!(value(4, &ledger.roster_value(4)).contains("n/a (empty roster)"));
    }

    #[test]
    fn board_filters_by_round() {
        let mut ledger = ledger();
        ledger.draft_player(&PlayerId::from("wr"), 10, 11).unwrap();
        let board_text = board(&ledger.draft_board(), Some(2));
        assert_eq!(board_text.lines().count(), 10);
        assert!(board_text.lines().next().unwrap_or_default().contains("Ja'Marr Chase (WR)"));
        assert_eq!(board(&ledger.draft_board(), Some(40)), "No picks in that round.");
        assert!(pick_log(ledger.pick_log()).starts_with("#11  R2  team 10 Ja'Marr Chase (WR)"));
    }
}
