// Line-oriented command parsing.
//
// Each stdin line becomes one `Command`; arguments are whitespace separated
// except for `search`, which takes the rest of the line.

use snakedraft_core::draft::order::LeagueSize;
use snakedraft_core::draft::player::{PlayerId, Position};
use snakedraft_core::valuation::strategy::DraftStrategy;

/// Rows shown by `top` when no count is given.
pub const DEFAULT_TOP_LIMIT: usize = 10;

/// Views available as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonView {
    Recommendations,
    Needs,
    Status,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Recommendations,
    /// Needs for a team, the user's team when `None`.
    Needs(Option<u32>),
    Value(Option<u32>),
    Top {
        position: Option<Position>,
        limit: usize,
    },
    Search(String),
    /// Draft a player, at the current pick, for `team` or the team on the clock.
    Draft {
        player: PlayerId,
        team: Option<u32>,
    },
    Undraft(PlayerId),
    Board(Option<u32>),
    Log,
    Status,
    Strategy(DraftStrategy),
    League(LeagueSize),
    Team(u32),
    Json(JsonView),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCommandError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("`{command}` needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("`{command}`: {message}")]
    InvalidArgument {
        command: &'static str,
        message: String,
    },
}

fn invalid(command: &'static str, message: impl ToString) -> ParseCommandError {
    ParseCommandError::InvalidArgument {
        command,
        message: message.to_string(),
    }
}

fn missing(command: &'static str, argument: &'static str) -> ParseCommandError {
    ParseCommandError::MissingArgument { command, argument }
}

fn parse_number(command: &'static str, token: &str) -> Result<u32, ParseCommandError> {
    token
        .parse::<u32>()
        .map_err(|_| invalid(command, format!("`{}` is not a number", token)))
}

fn optional_number(command: &'static str, token: Option<&str>) -> Result<Option<u32>, ParseCommandError> {
    token.map(|t| parse_number(command, t)).transpose()
}

/// Parse one input line. Blank lines parse to `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, ParseCommandError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    if word.is_empty() {
        return Ok(None);
    }
    let mut args = rest.split_whitespace();

    let command = match word.to_lowercase().as_str() {
        "recs" | "r" => Command::Recommendations,
        "needs" => Command::Needs(optional_number("needs", args.next())?),
        "value" => Command::Value(optional_number("value", args.next())?),
        "top" => parse_top(args.collect())?,
        "search" | "find" => {
            if rest.is_empty() {
                return Err(missing("search", "some text"));
            }
            Command::Search(rest.to_string())
        }
        "draft" | "d" => {
            let player = args.next().ok_or_else(|| missing("draft", "a player id"))?;
            Command::Draft {
                player: PlayerId::from(player),
                team: optional_number("draft", args.next())?,
            }
        }
        "undraft" | "undo" => {
            let player = args.next().ok_or_else(|| missing("undraft", "a player id"))?;
            Command::Undraft(PlayerId::from(player))
        }
        "board" => Command::Board(optional_number("board", args.next())?),
        "log" => Command::Log,
        "status" | "s" => Command::Status,
        "strategy" => {
            let name = args.next().ok_or_else(|| missing("strategy", "a strategy name"))?;
            Command::Strategy(name.parse().map_err(|e| invalid("strategy", e))?)
        }
        "league" => {
            let size = args.next().ok_or_else(|| missing("league", "a size (10 or 12)"))?;
            let size = parse_number("league", size)?;
            Command::League(LeagueSize::try_from(size).map_err(|e| invalid("league", e))?)
        }
        "team" => {
            let team = args.next().ok_or_else(|| missing("team", "a team number"))?;
            Command::Team(parse_number("team", team)?)
        }
        "json" => {
            let view = match args.next().map(str::to_lowercase).as_deref() {
                Some("recs") => JsonView::Recommendations,
                Some("needs") => JsonView::Needs,
                Some("status") => JsonView::Status,
                Some(other) => return Err(invalid("json", format!("unknown view `{}`", other))),
                None => return Err(missing("json", "a view (recs, needs or status)")),
            };
            Command::Json(view)
        }
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(ParseCommandError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}

/// `top [POS] [N]`, in either order.
fn parse_top(args: Vec<&str>) -> Result<Command, ParseCommandError> {
    let mut position = None;
    let mut limit = DEFAULT_TOP_LIMIT;

    for arg in args {
        if let Ok(n) = arg.parse::<usize>() {
            limit = n;
        } else {
            position = Some(arg.parse::<Position>().map_err(|e| invalid("top", e))?);
        }
    }

    Ok(Command::Top { position, limit })
}

pub const HELP: &str = "\
Commands:
  recs                 top three picks for your team
  needs [team]         positional needs and lineup
  value [team]         roster value report
  top [POS] [N]        best available players by VBD
  search <text>        find players by name or NFL team
  draft <id> [team]    record a pick at the current pick number
  undraft <id>         return a player to the pool
  board [round]        draft board
  log                  picks made so far
  status               pick, round and team on the clock
  strategy <name>      balanced, qb-heavy, hero-rb, zero-rb, hero-wr, zero-wr, vbd-only
  league <10|12>       change league size
  team <n>             change your draft slot
  json <recs|needs|status>
  help
  quit";
