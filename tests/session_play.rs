use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use arcade_chess::game_state::chess_types::*;
use arcade_chess::move_generation::perft::perft;
use arcade_chess::session::game_session::GameSession;
use arcade_chess::session::notifications::GameOutcome;
use arcade_chess::session::session_config::{Opponent, SessionConfig};

#[test]
fn random_human_against_engine_keeps_invariants() {
    let config = SessionConfig {
        engine_color: Some(Color::Dark),
        search_depth: 2,
        seed: Some(2024),
        ..SessionConfig::default()
    };
    let mut session = GameSession::new(config).unwrap();
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..60 {
        if session.is_terminal() {
            break;
        }
        assert_eq!(session.side_to_move(), Color::Light);
        let mv = *session.legal_moves().choose(&mut rng).unwrap();
        assert!(mv.piece_moved.color == Color::Light);
        assert!(session.attempt_move(mv.start, mv.end));
        assert!(session.game_state().validate().is_ok());
        for reply in session.legal_moves() {
            assert_eq!(reply.piece_moved.color, session.side_to_move());
        }
    }

    // Walk the whole game back; undo must land on the start position.
    while session.undo_turn() > 0 {}
    assert_eq!(*session.game_state(), GameState::new_game());
    assert_eq!(session.legal_moves().len(), 20);
}

fn random_opponent_line(seed: u64) -> Vec<String> {
    let config = SessionConfig {
        opponent: Opponent::Random,
        seed: Some(seed),
        ..SessionConfig::default()
    };
    let mut session = GameSession::new(config).unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    while !session.is_terminal() && session.game_state().ply_count() < 80 {
        let mv = *session.legal_moves().choose(&mut rng).unwrap();
        assert!(session.attempt_move(mv.start, mv.end));
    }
    let mut line = Vec::new();
    while let Some(mv) = session.undo() {
        line.push(mv.to_long_algebraic());
    }
    line
}

#[test]
fn random_opponent_is_reproducible_when_seeded() {
    let line = random_opponent_line(31);
    assert!(line.len() >= 2);
    assert_eq!(line, random_opponent_line(31));
}

#[test]
fn fools_mate_against_scripted_play() {
    let config = SessionConfig {
        engine_color: None,
        ..SessionConfig::default()
    };
    let mut session = GameSession::new(config).unwrap();
    for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        assert!(session.attempt_long_algebraic(text).unwrap());
    }
    assert_eq!(
        session.outcome(),
        Some(GameOutcome::Checkmate { winner: Color::Dark })
    );
    let fen = session.game_state().get_fen();
    assert_eq!(
        fen,
        "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 1"
    );
}

#[test]
fn perft_through_public_api() {
    let mut game = GameState::new_game();
    assert_eq!(perft(&mut game, 3).nodes, 8902);
    assert_eq!(game, GameState::new_game());
}
