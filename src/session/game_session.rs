//! Game session controller: one game between a human and the engine (or
//! two humans), driven by the host's input layer.
//!
//! The session owns the board and keeps the legal move list of the side to
//! move current after every apply and undo, so renderers and input handlers
//! can read it without regenerating. Engine replies are played synchronously
//! right after the human move they answer.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::{legal_moves, MoveList};
use crate::moves::chess_move::Move;
use crate::session::notifications::{final_score, GameEvent, GameObserver, GameOutcome};
use crate::session::session_config::{Opponent, SessionConfig};
use crate::utils::long_algebraic::squares_from_long_algebraic;

pub struct GameSession {
    game: GameState,
    moves: MoveList,
    config: SessionConfig,
    engine: Option<Box<dyn Engine>>,
    fallback: RandomEngine,
    observers: Vec<Box<dyn GameObserver>>,
    started_at: DateTime<Utc>,
    game_over_reported: bool,
}

impl GameSession {
    /// New game from the start position with the engine `config.opponent` names.
    pub fn new(config: SessionConfig) -> ChessResult<Self> {
        config.validate()?;
        let engine = config.engine_color.map(|_| build_engine(&config));
        Ok(Self::with_parts(config, engine, GameState::new_game()))
    }

    /// New game with a caller-supplied engine for `config.engine_color`.
    pub fn with_engine(config: SessionConfig, engine: Box<dyn Engine>) -> ChessResult<Self> {
        config.validate()?;
        Ok(Self::with_parts(config, Some(engine), GameState::new_game()))
    }

    /// Start from an arbitrary position, e.g. for puzzles and tests.
    pub fn from_fen(config: SessionConfig, fen: &str) -> ChessResult<Self> {
        let game = GameState::from_fen(fen)?;
        let mut session = Self::new(config)?;
        session.moves = legal_moves(&game);
        session.game = game;
        Ok(session)
    }

    fn with_parts(config: SessionConfig, engine: Option<Box<dyn Engine>>, game: GameState) -> Self {
        let moves = legal_moves(&game);
        Self {
            game,
            moves,
            config,
            engine,
            fallback: RandomEngine::from_seed(config.seed),
            observers: Vec::new(),
            started_at: Utc::now(),
            game_over_reported: false,
        }
    }

    pub fn add_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn game_state(&self) -> &GameState {
        &self.game
    }

    pub fn side_to_move(&self) -> Color {
        self.game.side_to_move()
    }

    pub fn legal_moves(&self) -> &[Move] {
        &self.moves.moves
    }

    pub fn legal_moves_from(&self, square: Square) -> impl Iterator<Item = &Move> + '_ {
        self.moves.moves.iter().filter(move |mv| mv.start == square)
    }

    pub fn in_check(&self) -> bool {
        self.moves.in_check
    }

    pub fn is_terminal(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.moves.is_checkmate() {
            Some(GameOutcome::Checkmate {
                winner: self.game.side_to_move().opposite(),
            })
        } else if self.moves.is_stalemate() {
            Some(GameOutcome::Stalemate)
        } else {
            None
        }
    }

    fn is_engine_turn(&self) -> bool {
        self.engine.is_some() && self.config.engine_color == Some(self.game.side_to_move())
    }

    /// Play the human move `start -> end` if it is legal, then the engine reply.
    ///
    /// Returns `false` without touching the game when no legal move matches,
    /// the game is over, or it is the engine's turn.
    pub fn attempt_move(&mut self, start: Square, end: Square) -> bool {
        if self.is_terminal() || self.is_engine_turn() {
            debug!(%start, %end, "move attempt outside the human's turn");
            return false;
        }
        let Some(mv) = self
            .moves
            .moves
            .iter()
            .find(|mv| mv.start == start && mv.end == end)
            .copied()
        else {
            debug!(%start, %end, "rejected illegal move");
            return false;
        };

        self.play(mv);
        if !self.is_terminal() && self.is_engine_turn() {
            self.play_engine_turn();
        }
        true
    }

    /// [`attempt_move`](Self::attempt_move) from long algebraic text such as `e2e4`.
    pub fn attempt_long_algebraic(&mut self, text: &str) -> ChessResult<bool> {
        let (start, end) = squares_from_long_algebraic(text)?;
        Ok(self.attempt_move(start, end))
    }

    /// Let the engine move if it is its turn. Returns the move played.
    pub fn play_engine_turn(&mut self) -> Option<Move> {
        if self.is_terminal() || !self.is_engine_turn() {
            return None;
        }
        let engine = self.engine.as_mut()?;

        let chosen = match engine.choose_move(&mut self.game, &self.moves.moves) {
            Ok(output) => {
                for line in &output.info_lines {
                    debug!(engine = engine.name(), "{line}");
                }
                output.best_move
            }
            Err(e) => {
                warn!(error = %e, engine = engine.name(), "engine failed");
                None
            }
        };

        // The game must progress once it is the engine's turn.
        let mv = match chosen {
            Some(mv) if self.moves.moves.contains(&mv) => mv,
            _ => {
                warn!("engine gave no usable move, playing a random one");
                self.fallback.pick(&self.moves.moves)?
            }
        };
        self.play(mv);
        Some(mv)
    }

    fn play(&mut self, mv: Move) {
        self.game.apply_move(&mv);
        self.moves = legal_moves(&self.game);
        info!(
            ply = self.game.ply_count(),
            mv = %mv,
            fen = %self.game.get_fen(),
            "move played"
        );

        self.notify(GameEvent::MoveMade(mv));
        if mv.is_capture() {
            self.notify(GameEvent::Capture(mv));
        }
        if self.moves.in_check {
            self.notify(GameEvent::Check(self.game.side_to_move()));
        }
        self.report_game_over();
    }

    fn report_game_over(&mut self) {
        if self.game_over_reported {
            return;
        }
        let Some(outcome) = self.outcome() else {
            return;
        };
        self.game_over_reported = true;

        let score = match outcome {
            GameOutcome::Checkmate { winner } if self.config.engine_color != Some(winner) => {
                final_score(Utc::now() - self.started_at)
            }
            _ => 0,
        };
        info!(?outcome, score, "game over");
        self.notify(GameEvent::GameOver { outcome, score });
    }

    fn notify(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            if let Err(e) = observer.notify(&event) {
                warn!(error = %e, ?event, "observer failed");
            }
        }
    }

    /// Take back one ply.
    pub fn undo(&mut self) -> Option<Move> {
        let mv = self.game.undo_last()?;
        self.moves = legal_moves(&self.game);
        self.game_over_reported = false;
        info!(ply = self.game.ply_count(), mv = %mv, "move undone");
        Some(mv)
    }

    /// Take back plies until a human is to move again. Returns how many were undone.
    pub fn undo_turn(&mut self) -> usize {
        let mut undone = 0;
        while self.undo().is_some() {
            undone += 1;
            if !self.is_engine_turn() {
                break;
            }
        }
        undone
    }

    /// Back to the start position with the clock restarted.
    pub fn reset(&mut self) {
        self.game = GameState::new_game();
        self.moves = legal_moves(&self.game);
        self.started_at = Utc::now();
        self.game_over_reported = false;
        if let Some(engine) = self.engine.as_mut() {
            engine.new_game();
        }
        info!("game reset");
    }
}

fn build_engine(config: &SessionConfig) -> Box<dyn Engine> {
    match (config.opponent, config.seed) {
        (Opponent::Minimax, Some(seed)) => Box::new(MinimaxEngine::with_seed(config.search_depth, seed)),
        (Opponent::Minimax, None) => Box::new(MinimaxEngine::new(config.search_depth)),
        (Opponent::Random, seed) => Box::new(RandomEngine::from_seed(seed)),
    }
}
