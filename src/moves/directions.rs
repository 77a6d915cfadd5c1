//! Fixed `(d_row, d_col)` offset tables for every piece kind.

pub type Direction = (i8, i8);

pub const ORTHOGONAL: [Direction; 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

pub const DIAGONAL: [Direction; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Orthogonal rays first, then diagonal rays.
pub const ALL_RAYS: [Direction; 8] = [
    (-1, 0),
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

pub const KNIGHT_OFFSETS: [Direction; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [Direction; 8] = ALL_RAYS;

#[inline]
pub const fn is_diagonal(direction: Direction) -> bool {
    direction.0 != 0 && direction.1 != 0
}

#[inline]
pub const fn reversed(direction: Direction) -> Direction {
    (-direction.0, -direction.1)
}
