//! Terminal-oriented Unicode board renderer.

use crate::game_state::chess_types::*;

/// Render the board with rank 8 on top, optionally marking `highlight`
/// squares (e.g. the legal destinations of a selected piece) with `*`.
pub fn render_game_state(game_state: &GameState, highlight: &[Square]) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank = Square::new(row, 0).rank_char();
        out.push(rank);
        out.push(' ');

        for col in 0..8u8 {
            let square = Square::new(row, col);
            let glyph = match game_state.piece_at(square) {
                Some(piece) => piece_to_unicode(piece),
                None if highlight.contains(&square) => '*',
                None => '·',
            };
            out.push(glyph);
            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_start_position() {
        let text = render_game_state(&GameState::new_game(), &[]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[5], "4 · · · · · · · · 4");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
    }

    #[test]
    fn marks_highlighted_empty_squares() {
        let e3 = Square::new(5, 4);
        let e2 = Square::new(6, 4);
        let text = render_game_state(&GameState::new_game(), &[e3, e2]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[6], "3 · · · · * · · · 3");
        // Occupied squares keep their glyph.
        assert_eq!(lines[7], "2 ♙ ♙ ♙ ♙ ♙ ♙ ♙ ♙ 2");
    }
}
