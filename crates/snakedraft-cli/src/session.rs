// Command dispatch against a draft ledger.

use tracing::warn;

use snakedraft_core::draft::ledger::{DraftLedger, RankingQuery};

use crate::commands::{Command, JsonView, HELP};
use crate::render::{self, StatusView};

/// Result of handling one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

/// Interactive draft session: one ledger plus the commands that drive it.
pub struct Session {
    ledger: DraftLedger,
}

impl Session {
    pub fn new(ledger: DraftLedger) -> Self {
        Session { ledger }
    }

    pub fn ledger(&self) -> &DraftLedger {
        &self.ledger
    }

    /// Run `command`. Engine errors are reported as text, never returned.
    pub fn handle(&mut self, command: Command) -> Reply {
        let text = match command {
            Command::Quit => return Reply::Quit,
            Command::Help => HELP.to_string(),

            Command::Recommendations => {
                let mut out = String::new();
                if !self.ledger.is_user_turn() && !self.ledger.is_complete() {
                    out.push_str("(not your pick yet)\n");
                }
                out.push_str(&render::recommendations(&self.ledger.recommendations()));
                out
            }
            Command::Needs(team) => {
                let team = team.unwrap_or(self.ledger.settings().user_team);
                render::needs(team, &self.ledger.team_needs(team))
            }
            Command::Value(team) => {
                let team = team.unwrap_or(self.ledger.settings().user_team);
                render::value(team, &self.ledger.roster_value(team))
            }
            Command::Top { position, limit } => self.player_table(&RankingQuery {
                position,
                search: None,
                available_only: true,
                limit: Some(limit),
            }),
            Command::Search(text) => self.player_table(&RankingQuery {
                search: Some(text),
                ..RankingQuery::default()
            }),

            Command::Draft { player, team } => {
                let result = match team {
                    Some(team) => {
                        let pick = self.ledger.current_pick();
                        self.ledger.draft_player(&player, team, pick)
                    }
                    None => self.ledger.draft_on_clock(&player),
                };
                match result {
                    Ok(p) => match (p.drafted_by(), p.draft_pick()) {
                        (Some(team), Some(pick)) => {
                            format!("Pick {}: team {} takes {} ({})", pick, team, p.name, p.position)
                        }
                        _ => format!("Drafted {}", p.name),
                    },
                    Err(e) => {
                        warn!("draft rejected: {}", e);
                        format!("error: {}", e)
                    }
                }
            }
            Command::Undraft(player) => match self.ledger.undraft_player(&player) {
                Ok(p) => format!("{} is back in the pool", p.name),
                Err(e) => {
                    warn!("undraft rejected: {}", e);
                    format!("error: {}", e)
                }
            },

            Command::Board(round) => render::board(&self.ledger.draft_board(), round),
            Command::Log => render::pick_log(self.ledger.pick_log()),
            Command::Status => render::status(&StatusView::from_ledger(&self.ledger)),

            Command::Strategy(strategy) => {
                self.ledger.set_strategy(strategy);
                format!("Strategy set to {}: {}", strategy, strategy.description())
            }
            Command::League(size) => {
                self.ledger.set_league_size(size);
                format!(
                    "League size set to {} (you are team {})",
                    size,
                    self.ledger.settings().user_team
                )
            }
            Command::Team(team) => match self.ledger.set_user_team(team) {
                Ok(()) => format!("You are now team {}", team),
                Err(e) => {
                    warn!("team change rejected: {}", e);
                    format!("error: {}", e)
                }
            },

            Command::Json(view) => self.json(view),
        };
        Reply::Text(text)
    }

    /// Ranked players with the user's current recommendations marked.
    fn player_table(&self, query: &RankingQuery) -> String {
        render::players(&self.ledger.rankings(query), |p| {
            self.ledger.is_recommended(&p.id)
        })
    }

    fn json(&self, view: JsonView) -> String {
        let result = match view {
            JsonView::Recommendations => render::json(&self.ledger.recommendations()),
            JsonView::Needs => {
                render::json(&self.ledger.team_needs(self.ledger.settings().user_team))
            }
            JsonView::Status => render::json(&StatusView::from_ledger(&self.ledger)),
        };
        result.unwrap_or_else(|e| {
            warn!("failed to serialize {:?}: {}", view, e);
            format!("error: {}", e)
        })
    }
}
