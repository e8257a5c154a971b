use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::core::config::{BOARD_SIZE, DIVISIONS, PIECE_HEIGHT, TILE_SIZE};

/** File letters indexed by column: the h-file sits at column 0, the a-file at
column 7. Ranks grow with rows, rank = row + 1. */
const FILE_LETTERS: [char; 8] = ['h', 'g', 'f', 'e', 'd', 'c', 'b', 'a'];

/// Cell of the 8x8 matrix, 0-based. Immutable value type with a lossless
/// mapping to algebraic notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChessPosition {
    pub row: u8,
    pub column: u8,
}

/// Renderer-space point, y up.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldPosition {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl ChessPosition {
    pub fn new(row: u8, column: u8) -> ChessPosition {
        assert!(
            row < DIVISIONS && column < DIVISIONS,
            "position out of range: row {row}, column {column}"
        );
        ChessPosition { row, column }
    }

    /// Algebraic notation of this cell, e.g. "e4".
    pub fn notation(&self) -> String {
        format!(
            "{}{}",
            FILE_LETTERS[self.column as usize],
            self.row + 1
        )
    }

    /// Inverse of [`notation`](Self::notation). Malformed input is a
    /// programming error: every position originates from the fixed grid.
    pub fn from_notation(notation: &str) -> ChessPosition {
        let mut chars = notation.chars();
        let (file, rank) = (
            chars.next().unwrap_or_else(|| panic!("empty notation")),
            chars
                .next()
                .unwrap_or_else(|| panic!("notation without rank: {notation:?}")),
        );
        assert!(chars.next().is_none(), "malformed notation: {notation:?}");
        let column = FILE_LETTERS
            .iter()
            .position(|&letter| letter == file)
            .unwrap_or_else(|| panic!("invalid file letter: {notation:?}"));
        let row = rank
            .to_digit(10)
            .filter(|rank| (1..=8).contains(rank))
            .unwrap_or_else(|| panic!("invalid rank digit: {notation:?}"));
        ChessPosition::new(row as u8 - 1, column as u8)
    }

    /// Center of this cell's tile in renderer space. The a8 corner tile sits
    /// at the minimum x/z corner of the board plane.
    pub fn world_center(&self) -> WorldPosition {
        let origin = -BOARD_SIZE / 2.0 + TILE_SIZE / 2.0;
        WorldPosition {
            x: origin + self.row as f32 * TILE_SIZE,
            y: PIECE_HEIGHT,
            z: origin + self.column as f32 * TILE_SIZE,
        }
    }
}

impl Display for ChessPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.notation())
    }
}
