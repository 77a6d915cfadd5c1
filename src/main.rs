//! Terminal front end: play against the engine over stdin.
//!
//! Run with:
//! `cargo run --release -- --depth 2`
//! `cargo run --release -- --engine light --seed 7`
//! `cargo run --release -- --opponent random`
//! `RUST_LOG=arcade_chess=debug cargo run -- --config session.json`

use std::io::{self, BufRead, Write};

use arcade_chess::errors::{ChessErrors, ChessResult};
use arcade_chess::game_state::chess_types::Color;
use arcade_chess::session::game_session::GameSession;
use arcade_chess::session::notifications::{GameEvent, GameObserver, GameOutcome};
use arcade_chess::session::session_config::{Opponent, SessionConfig};
use arcade_chess::utils::long_algebraic::square_from_algebraic;
use arcade_chess::utils::render_game_state::render_game_state;
use tracing_subscriber::EnvFilter;

const HELP: &str = "commands: <move> (e.g. e2e4), moves [square], undo, reset, board, quit";

struct ConsoleObserver;

impl GameObserver for ConsoleObserver {
    fn notify(&mut self, event: &GameEvent) -> ChessResult<()> {
        match event {
            GameEvent::MoveMade(mv) => println!("{} plays {mv}", mv.piece_moved.color),
            GameEvent::Check(color) => println!("{color} is in check"),
            GameEvent::GameOver { outcome, score } => match outcome {
                GameOutcome::Checkmate { winner } => {
                    println!("Checkmate, {winner} wins. Score: {score}")
                }
                GameOutcome::Stalemate => println!("Stalemate. Score: {score}"),
            },
            GameEvent::Capture(_) => {}
        }
        Ok(())
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn parse_config(args: &[String]) -> ChessResult<SessionConfig> {
    let mut config = match flag_value(args, "--config") {
        Some(path) => SessionConfig::from_json_file(path)?,
        None => SessionConfig::default(),
    };

    if let Some(depth) = flag_value(args, "--depth") {
        config.search_depth = depth
            .parse()
            .map_err(|_| ChessErrors::InvalidConfig(format!("bad --depth {depth}")))?;
    }
    if let Some(seed) = flag_value(args, "--seed") {
        config.seed = Some(
            seed.parse()
                .map_err(|_| ChessErrors::InvalidConfig(format!("bad --seed {seed}")))?,
        );
    }
    if let Some(side) = flag_value(args, "--engine") {
        config.engine_color = match side {
            "light" | "white" => Some(Color::Light),
            "dark" | "black" => Some(Color::Dark),
            "none" => None,
            other => {
                return Err(ChessErrors::InvalidConfig(format!(
                    "bad --engine {other}, expected light, dark or none"
                )))
            }
        };
    }

    if let Some(kind) = flag_value(args, "--opponent") {
        config.opponent = match kind {
            "minimax" => Opponent::Minimax,
            "random" => Opponent::Random,
            other => {
                return Err(ChessErrors::InvalidConfig(format!(
                    "bad --opponent {other}, expected minimax or random"
                )))
            }
        };
    }

    config.validate()?;
    Ok(config)
}

fn print_board(session: &GameSession) {
    println!("{}", render_game_state(session.game_state(), &[]));
    if !session.is_terminal() {
        println!("{} to move", session.side_to_move());
    }
}

fn main() -> ChessResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_config(&args)?;
    let mut session = GameSession::new(config)?;
    session.add_observer(Box::new(ConsoleObserver));

    println!("{HELP}");
    session.play_engine_turn();
    print_board(&session);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };

        match command {
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "board" => print_board(&session),
            "undo" => {
                session.undo_turn();
                print_board(&session);
            }
            "reset" => {
                session.reset();
                session.play_engine_turn();
                print_board(&session);
            }
            "moves" => {
                let listed: Vec<String> = match words.next().map(square_from_algebraic) {
                    Some(Ok(square)) => {
                        let targets: Vec<_> = session.legal_moves_from(square).map(|m| m.end).collect();
                        println!("{}", render_game_state(session.game_state(), &targets));
                        session.legal_moves_from(square).map(|m| m.to_short_notation()).collect()
                    }
                    Some(Err(e)) => {
                        println!("{e}");
                        continue;
                    }
                    None => session.legal_moves().iter().map(|m| m.to_short_notation()).collect(),
                };
                println!("{}", listed.join(" "));
            }
            text => match session.attempt_long_algebraic(text) {
                Ok(true) => print_board(&session),
                Ok(false) => println!("illegal move: {text}"),
                Err(e) => println!("{e}; {HELP}"),
            },
        }
        io::stdout().flush()?;
    }

    Ok(())
}
