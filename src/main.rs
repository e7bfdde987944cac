use std::io::{self, BufRead, Write};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use plum_checkers::engine::config::EngineConfig;
use plum_checkers::engine::rule_engine::RuleEngine;
use plum_checkers::game_state::checkers_types::Square;
use plum_checkers::utils::click_handler::{
    caption, handle_pointer_click, handle_square_click, BoardGeometry, ClickOutcome,
};
use plum_checkers::utils::render_board::render_board;

const HELP: &str = "commands: <row> <col> | px <x> <y> | reset | help | quit";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = EngineConfig::from_env()?;
    let mut engine = RuleEngine::with_config(config);
    info!(config = ?engine.config(), starting_side = %engine.current_side(), "engine ready");
    let geometry = BoardGeometry::default();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print_state(&mut stdout, &engine)?;
    writeln!(stdout, "{HELP}")?;

    for line in stdin.lock().lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        let outcome = match words.as_slice() {
            [] => continue,
            ["quit"] | ["exit"] => break,
            ["help"] => {
                writeln!(stdout, "{HELP}")?;
                continue;
            }
            ["reset"] => {
                engine.reset();
                ClickOutcome::Reset
            }
            ["px", x, y] => match (x.parse::<f64>(), y.parse::<f64>()) {
                (Ok(x), Ok(y)) => handle_pointer_click(&mut engine, &geometry, x, y),
                _ => {
                    warn!(%line, "unreadable pixel coordinates");
                    continue;
                }
            },
            [row, col] => match (row.parse::<i8>(), col.parse::<i8>()) {
                (Ok(row), Ok(col)) => handle_square_click(&mut engine, Square::new(row, col)),
                _ => {
                    warn!(%line, "unreadable square");
                    continue;
                }
            },
            _ => {
                writeln!(stdout, "{HELP}")?;
                continue;
            }
        };

        if let ClickOutcome::Rejected(err) = &outcome {
            writeln!(stdout, "Invalid move: {err}")?;
        }
        print_state(&mut stdout, &engine)?;
    }

    Ok(())
}

fn print_state(out: &mut impl Write, engine: &RuleEngine) -> io::Result<()> {
    writeln!(out, "{}", render_board(engine))?;
    writeln!(out, "{}", caption(engine))?;
    out.flush()
}
