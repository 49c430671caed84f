use std::io::{self, BufRead, Write};

use chess_rules::config::AppConfig;
use chess_rules::engine::{Coordinate, Game};

fn main() -> io::Result<()> {
    let config = AppConfig::from_env();

    // Initialize tracing (structured logging).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with_writer(io::stderr)
        .init();

    tracing::info!("chess-rules v{} starting", env!("CARGO_PKG_VERSION"));

    let mut game = Game::new();
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    writeln!(out, "{}", game.board().render(config.unicode))?;
    prompt(&mut out, &game)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line == "quit" {
            break;
        }

        match parse_move(line) {
            Some((from, to)) => play(&mut out, &mut game, from, to, &config)?,
            None => writeln!(out, "expected four numbers: rank file rank file, or 'quit'")?,
        }
        prompt(&mut out, &game)?;
    }
    Ok(())
}

fn play(
    out: &mut impl Write,
    game: &mut Game,
    from: Coordinate,
    to: Coordinate,
    config: &AppConfig,
) -> io::Result<()> {
    if !game.select(from) {
        writeln!(out, "cannot select {from}")?;
        return Ok(());
    }
    if config.show_hints {
        writeln!(out, "legal: {:?}", game.legal_destinations(from))?;
    }

    match game.move_to(to) {
        Ok(true) => {
            writeln!(out, "{}", game.board().render(config.unicode))?;
            if game.is_in_check(game.turn()) {
                writeln!(out, "{} is in check", game.turn())?;
            }
        }
        Ok(false) => writeln!(out, "{from} -> {to} is not legal")?,
        Err(e) => {
            tracing::error!(error = %e, "board rejected a legal move");
            return Err(io::Error::other(e));
        }
    }
    Ok(())
}

fn prompt(out: &mut impl Write, game: &Game) -> io::Result<()> {
    write!(out, "{} to move> ", game.turn())?;
    out.flush()
}

/// Parse `"r f r f"` into two on-board coordinates.
fn parse_move(line: &str) -> Option<(Coordinate, Coordinate)> {
    let nums: Vec<i8> = line
        .split_whitespace()
        .map(|t| t.parse().ok())
        .collect::<Option<_>>()?;
    match nums.as_slice() {
        &[r1, f1, r2, f2] => {
            let from = Coordinate::try_new(r1, f1).ok()?;
            let to = Coordinate::try_new(r2, f2).ok()?;
            Some((from, to))
        }
        _ => None,
    }
}
