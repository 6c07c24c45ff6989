use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use checkers_engine::config::AppConfig;
use checkers_engine::view::{render_text, Snapshot};
use checkers_engine::{GameState, MoveError, Square};

/// Play checkers in the terminal, two players at one keyboard.
#[derive(Parser)]
#[command(name = "checkers", about = "Two-player checkers in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "checkers.toml")]
    config: PathBuf,

    /// Print a JSON snapshot after every accepted move
    #[arg(long)]
    json: bool,

    /// Do not mark legal targets of a selected piece
    #[arg(long)]
    no_highlight: bool,

    /// Do not print row/column rulers
    #[arg(long)]
    no_coordinates: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if cli.json {
        config.display.json = true;
    }
    if cli.no_highlight {
        config.display.highlight = false;
    }
    if cli.no_coordinates {
        config.display.coordinates = false;
    }

    let mut state = GameState::new_game();
    let mut selected: Option<Square> = None;

    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}", render_text(&state, selected, &config));
        print!("{} > ", state.turn());
        io::stdout().flush().ok();

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("reading input")?;
        let cmd = line.trim();
        if cmd.is_empty() {
            continue;
        }

        let words: Vec<&str> = cmd.split_whitespace().collect();
        match words.as_slice() {
            ["help"] => {
                print_help();
                continue;
            }
            ["exit"] | ["quit"] | ["q"] => break,
            ["new"] => {
                state = GameState::new_game();
                selected = None;
                println!("New game.");
                continue;
            }
            ["moves"] => {
                let moves = state.legal_moves();
                if moves.is_empty() {
                    println!("No legal moves.");
                }
                for mv in moves {
                    println!("  {mv}");
                }
                continue;
            }
            ["json"] => {
                println!("{}", Snapshot::of(&state).to_json()?);
                continue;
            }
            ["select", sq] | ["s", sq] => {
                match sq.parse::<Square>() {
                    Ok(sq) => selected = Some(sq),
                    Err(e) => println!("{e}"),
                }
                continue;
            }
            [from, to] => {
                let (from, to) = match (from.parse::<Square>(), to.parse::<Square>()) {
                    (Ok(f), Ok(t)) => (f, t),
                    (Err(e), _) | (_, Err(e)) => {
                        println!("{e}");
                        continue;
                    }
                };
                play(&mut state, from, to, &config)?;
                selected = state.pending_chain();
            }
            _ => println!("Unknown input '{cmd}'. Type 'help' for commands."),
        }
    }

    Ok(())
}

fn play(state: &mut GameState, from: Square, to: Square, config: &AppConfig) -> Result<()> {
    match state.apply_move_mut(from, to) {
        Ok(applied) => {
            println!("Played {}", applied.mv);
            if applied.promoted {
                println!("Crowned!");
            }
            if applied.chain {
                println!("Jump again from {to}.");
            }
            if config.display.json {
                println!("{}", Snapshot::of(state).to_json()?);
            }
        }
        // The piece stays where it was; only report why.
        Err(MoveError::GameOver { winner }) => {
            println!("The game is over ({winner} won). Type 'new' to play again.")
        }
        Err(e) => println!("Rejected: {e}"),
    }
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  <from> <to>     move a piece, squares as row,col (e.g. '5,0 4,1' or '50 41')");
    println!("  select <sq>     show where the piece on <sq> may go");
    println!("  moves           list every legal move");
    println!("  json            print the game as JSON");
    println!("  new             start a new game");
    println!("  help            show this help");
    println!("  quit            leave");
}
