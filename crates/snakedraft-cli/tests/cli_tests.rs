// Scripted sessions against the bundled sample pool.

use std::path::Path;

use snakedraft::commands::parse_command;
use snakedraft::session::{Reply, Session};
use snakedraft_core::draft::ledger::{DraftLedger, DraftSettings};
use snakedraft_core::draft::order::LeagueSize;
use snakedraft_core::valuation::projections::{load_players, PointsSource};
use snakedraft_core::valuation::scoring::ScoringSettings;
use snakedraft_core::valuation::strategy::DraftStrategy;

/// Sample data shipped at the repository root (cwd is the crate root).
const SAMPLE_PLAYERS: &str = "../../data/sample_players.csv";

fn sample_session(league_size: LeagueSize, user_team: u32) -> Session {
    let players = load_players(
        Path::new(SAMPLE_PLAYERS),
        PointsSource::Calculated,
        &ScoringSettings::default(),
    )
    .unwrap();
    let settings = DraftSettings {
        league_size,
        user_team,
        strategy: DraftStrategy::Balanced,
        rounds: 17,
    };
    Session::new(DraftLedger::new(players, settings))
}

fn run(session: &mut Session, line: &str) -> String {
    match session.handle(parse_command(line).unwrap().unwrap()) {
        Reply::Text(text) => text,
        Reply::Quit => panic!("unexpected quit on `{}`", line),
    }
}

#[test]
fn sample_pool_loads_every_skill_player() {
    let session = sample_session(LeagueSize::Twelve, 1);
    // 55 skill players; the kicker is skipped
    assert_eq!(session.ledger().players().len(), 55);
}

#[test]
fn drafting_the_top_recommendation_each_user_turn() {
    let mut session = sample_session(LeagueSize::Ten, 3);

    // three rounds: the user takes the top recommendation, everyone else the
    // best available by VBD
    for _ in 0..30 {
        let ledger = session.ledger();
        let pick = if ledger.is_user_turn() {
            ledger.recommendations()[0].player.id.clone()
        } else {
            let available = ledger.rankings(&Default::default());
            available
                .iter()
                .find(|p| !p.is_drafted())
                .map(|p| p.id.clone())
                .unwrap()
        };
        let reply = run(&mut session, &format!("draft {}", pick.as_str()));
        assert!(reply.starts_with("Pick "), "{}", reply);
    }

    let ledger = session.ledger();
    assert_eq!(ledger.current_pick(), 31);
    assert_eq!(ledger.current_round(), 4);
    assert_eq!(ledger.team_roster(3).len(), 3);
    // snake order: team 3 picks 3, 18 and 23
    let picks: Vec<u32> = ledger
        .team_roster(3)
        .iter()
        .filter_map(|p| p.draft_pick())
        .collect();
    assert_eq!(picks, vec![3, 18, 23]);

    assert_eq!(run(&mut session, "log").lines().count(), 30);
    assert_eq!(run(&mut session, "board 2").lines().count(), 10);
    assert!(run(&mut session, "value").starts_with("Team 3: value grade"));
    assert!(run(&mut session, "needs 3").starts_with("Team 3: grade"));
}

#[test]
fn undo_rewinds_the_clock() {
    let mut session = sample_session(LeagueSize::Twelve, 1);
    let first = run(&mut session, "top 1");
    let id = first
        .lines()
        .nth(1)
        .and_then(|row| row.split_whitespace().next())
        .unwrap()
        .to_string();

    run(&mut session, &format!("draft {}", id));
    assert_eq!(session.ledger().current_pick(), 2);
    run(&mut session, &format!("undraft {}", id));
    assert_eq!(session.ledger().current_pick(), 1);
    assert!(run(&mut session, "status").starts_with("Pick 1/204"));
}

#[test]
fn json_status_reflects_settings_changes() {
    let mut session = sample_session(LeagueSize::Twelve, 12);
    run(&mut session, "league 10");
    run(&mut session, "strategy zero-rb");

    let status: serde_json::Value = serde_json::from_str(&run(&mut session, "json status")).unwrap();
    assert_eq!(status["league_size"], 10);
    assert_eq!(status["user_team"], 10);
    assert_eq!(status["strategy"], "zero-rb");
    assert_eq!(status["total_picks"], 170);

    let recs: serde_json::Value = serde_json::from_str(&run(&mut session, "json recs")).unwrap();
    assert_eq!(recs.as_array().map(|a| a.len()), Some(3));
}
