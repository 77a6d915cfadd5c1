use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::PinsAndChecks;
use crate::moves::chess_move::Move;
use crate::moves::directions::Direction;

/// Everything a per-piece generator needs for one generation pass.
///
/// `pins` is `None` for pseudo-legal generation; king safety, pins and the
/// castling attack tests are then skipped.
pub struct GenerationContext<'a> {
    pub game: &'a GameState,
    pub color: Color,
    pub pins: Option<&'a PinsAndChecks>,
}

impl<'a> GenerationContext<'a> {
    pub fn pseudo(game: &'a GameState) -> Self {
        Self {
            game,
            color: game.side_to_move(),
            pins: None,
        }
    }

    pub fn legal(game: &'a GameState, pins: &'a PinsAndChecks) -> Self {
        Self {
            game,
            color: game.side_to_move(),
            pins: Some(pins),
        }
    }

    #[inline]
    pub fn is_legal_pass(&self) -> bool {
        self.pins.is_some()
    }

    /// Whether a pin allows the piece on `from` to travel along `direction`.
    #[inline]
    pub fn pin_allows(&self, from: Square, direction: Direction) -> bool {
        self.pins.map_or(true, |pins| pins.allows(from, direction))
    }

    #[inline]
    pub fn is_pinned(&self, from: Square) -> bool {
        self.pins
            .and_then(|pins| pins.pin_direction(from))
            .is_some()
    }

    #[inline]
    pub fn enemy_on(&self, square: Square) -> Option<Piece> {
        self.game
            .piece_at(square)
            .filter(|piece| piece.color != self.color)
    }
}

/// Ray-cast moves for bishops, rooks and queens.
pub fn push_sliding_moves(
    ctx: &GenerationContext<'_>,
    from: Square,
    piece: Piece,
    directions: &[Direction],
    out: &mut Vec<Move>,
) {
    for &direction in directions {
        if !ctx.pin_allows(from, direction) {
            continue;
        }
        let mut cursor = from;
        while let Some(to) = cursor.offset(direction.0, direction.1) {
            cursor = to;
            match ctx.game.piece_at(to) {
                None => out.push(Move::new(from, to, piece, None)),
                Some(target) if target.color != ctx.color => {
                    out.push(Move::new(from, to, piece, Some(target)));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}
