// Snake draft assistant entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config
// 3. Load the player pool and compute projections
// 4. Build the draft ledger
// 5. Read commands from stdin until `quit` or EOF

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use snakedraft::commands::parse_command;
use snakedraft::session::{Reply, Session};
use snakedraft_core::config;
use snakedraft_core::draft::ledger::{DraftLedger, DraftSettings};
use snakedraft_core::valuation::projections;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. Initialize tracing (log to file, not terminal)
    init_tracing()?;
    info!("Snake draft assistant starting up");

    // 2. Load config
    let (config, base_dir) =
        config::load_config(cli.config_dir.as_deref()).context("failed to load configuration")?;
    info!(
        "Config loaded from {}: {} teams, user team {}, strategy {}",
        base_dir.display(),
        config.league.size,
        config.league.user_team,
        config.strategy
    );

    // 3. Load the player pool
    let players_path = config.players_path(&base_dir);
    let players = projections::load_players(&players_path, config.points_source, &config.scoring)
        .with_context(|| format!("failed to load players from {}", players_path.display()))?;

    // 4. Build the ledger (computes initial VBD)
    let ledger = DraftLedger::new(players, DraftSettings::from(&config));
    let mut session = Session::new(ledger);

    // 5. Command loop
    run(&mut session, io::stdin().lock(), io::stdout().lock())?;

    info!(
        "Snake draft assistant shut down at pick {} ({} picks logged)",
        session.ledger().current_pick(),
        session.ledger().pick_log().len()
    );
    Ok(())
}

/// Snake draft assistant: VBD rankings and pick recommendations.
#[derive(Parser, Debug)]
#[command(name = "snakedraft", version)]
struct Cli {
    /// Directory holding `config/` and `defaults/` (default: current directory)
    #[arg(long)]
    config_dir: Option<PathBuf>,
}

fn run(session: &mut Session, input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
    writeln!(output, "Snake draft assistant. Type `help` for commands.")?;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line.context("failed to read from stdin")?;
        match parse_command(&line) {
            Ok(Some(command)) => match session.handle(command) {
                Reply::Text(text) => writeln!(output, "{}", text)?,
                Reply::Quit => break,
            },
            Ok(None) => {}
            Err(e) => {
                warn!("rejected input {:?}: {}", line, e);
                writeln!(output, "error: {}", e)?;
            }
        }
        write!(output, "> ")?;
        output.flush()?;
    }

    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which carries the session).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("snakedraft.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("snakedraft=info,snakedraft_core=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use snakedraft_core::draft::player::{Player, PlayerStats, Position};

    fn session() -> Session {
        let players = vec![
            Player::new("qb", "Josh Allen", "BUF", Position::Quarterback, PlayerStats::default(), 300.0),
            Player::new("rb", "Bijan Robinson", "ATL", Position::RunningBack, PlayerStats::default(), 250.0),
        ];
        Session::new(DraftLedger::new(players, DraftSettings::default()))
    }

    #[test]
    fn config_dir_flag() {
        let cli = Cli::try_parse_from(["snakedraft", "--config-dir", "/tmp/league"]).unwrap();
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/league")));

        let cli = Cli::try_parse_from(["snakedraft"]).unwrap();
        assert_eq!(cli.config_dir, None);

        assert!(Cli::try_parse_from(["snakedraft", "--league", "12"]).is_err());
    }

    #[test]
    fn loop_runs_until_quit() {
        let mut s = session();
        let input = "draft qb\n\nbogus\nquit\ndraft rb\n";
        let mut output = Vec::new();
        run(&mut s, input.as_bytes(), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Pick 1: team 1 takes Josh Allen (QB)"));
        assert!(text.contains("error: unknown command `bogus`"));
        // nothing after quit runs
        assert_eq!(s.ledger().pick_log().len(), 1);
    }

    #[test]
    fn loop_stops_at_end_of_input() {
        let mut s = session();
        let mut output = Vec::new();
        run(&mut s, "status\n".as_bytes(), &mut output).unwrap();
        assert!(String::from_utf8(output).unwrap().contains("Pick 1/170"));
    }
}
