//! Line-oriented driver for the rules engine.
//!
//! Stands in for a renderer during development: reads one command per line
//! from stdin and answers on stdout.
//!
//! ```text
//! rules_shell [--setup FILE] [--verbose]
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chess_rules::{GameEngine, GameStatus, Setup, Square};
use tracing::{Level, info, warn};

struct Args {
    setup: Option<PathBuf>,
    verbose: bool,
}

fn print_usage() {
    println!("Usage: rules_shell [--setup FILE] [--verbose]");
    println!();
    println!("Commands:");
    println!("  board               print the board (row 7 on top)");
    println!("  dests R C           legal destinations of the piece on (R,C)");
    println!("  move R1 C1 R2 C2    commit a move for the side to move");
    println!("  status              side to move and game status");
    println!("  json                board snapshot as JSON");
    println!("  reset               back to the standard starting position");
    println!("  quit                exit");
}

fn parse_args() -> Result<Option<Args>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let mut args = Args {
        setup: None,
        verbose: false,
    };

    let mut i = 0;
    while i < argv.len() {
        match argv[i].as_str() {
            "--setup" | "-s" => {
                let Some(path) = argv.get(i + 1) else {
                    bail!("--setup requires a file path");
                };
                args.setup = Some(PathBuf::from(path));
                i += 1;
            }
            "--verbose" | "-v" => args.verbose = true,
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            other => bail!("unknown argument: {other}"),
        }
        i += 1;
    }
    Ok(Some(args))
}

fn parse_coords<const N: usize>(parts: &[&str]) -> Option<[i8; N]> {
    if parts.len() != N {
        return None;
    }
    let mut out = [0i8; N];
    for (slot, p) in out.iter_mut().zip(parts) {
        *slot = p.parse().ok()?;
    }
    Some(out)
}

fn format_squares(squares: impl IntoIterator<Item = Square>) -> String {
    let items: Vec<String> = squares.into_iter().map(|s| s.to_string()).collect();
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(" ")
    }
}

/// Handle one command line. Returns `false` when the session should end.
fn handle_line(engine: &mut GameEngine, line: &str, out: &mut impl Write) -> Result<bool> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((&cmd, rest)) = parts.split_first() else {
        return Ok(true);
    };

    match cmd {
        "board" => write!(out, "{}", engine.board())?,
        "dests" => match parse_coords::<2>(rest) {
            Some([r, c]) => {
                let dests = engine.legal_destinations(Square::new(r, c));
                writeln!(out, "{}", format_squares(dests))?;
            }
            None => writeln!(out, "error: usage: dests R C")?,
        },
        "move" => match parse_coords::<4>(rest) {
            Some([r1, c1, r2, c2]) => {
                match engine.try_commit_move(Square::new(r1, c1), Square::new(r2, c2)) {
                    Ok(mv) => {
                        let status = engine.status();
                        if status.is_terminal() {
                            let winner = (status == GameStatus::Checkmate)
                                .then(|| engine.side_to_move().other());
                            info!(%status, ?winner, "game over");
                        }
                        match mv.captured {
                            Some(c) => {
                                writeln!(out, "ok {status} captured {}", c.cased_symbol())?
                            }
                            None => writeln!(out, "ok {status}")?,
                        }
                    }
                    Err(err) => writeln!(out, "illegal {err}")?,
                }
            }
            None => writeln!(out, "error: usage: move R1 C1 R2 C2")?,
        },
        "status" => writeln!(out, "{} {}", engine.side_to_move(), engine.status())?,
        "json" => writeln!(out, "{}", engine.snapshot().to_json()?)?,
        "reset" => {
            engine.reset();
            writeln!(out, "ok")?;
        }
        "quit" | "exit" => return Ok(false),
        other => writeln!(out, "error: unknown command '{other}'")?,
    }
    out.flush()?;
    Ok(true)
}

fn main() -> Result<()> {
    let Some(args) = parse_args()? else {
        return Ok(());
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let mut engine = match &args.setup {
        Some(path) => {
            let setup = Setup::load(path)?;
            let engine = GameEngine::from_setup(&setup)
                .with_context(|| format!("invalid setup in {}", path.display()))?;
            info!(path = %path.display(), "loaded setup");
            engine
        }
        None => GameEngine::new(),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(err) => {
                warn!(%err, "stdin closed");
                break;
            }
        };
        if !handle_line(&mut engine, line.trim(), &mut stdout)? {
            break;
        }
    }
    Ok(())
}
