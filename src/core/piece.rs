use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::core::position::ChessPosition;

#[derive(PartialEq, Eq, Debug, Default, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    #[default]
    White,
}

impl Color {
    pub fn opposite(self) -> Color {
        if self == Color::White {
            Color::Black
        } else {
            Color::White
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(if self == &Self::White {
            "White"
        } else {
            "Black"
        })
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// Lowercase letter used when talking to the rules engine.
    pub fn letter(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }
}

/// Handle into the orchestrator's piece collection. Pieces are addressed by
/// id so the scene graph never holds references into game state.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct PieceId(pub(crate) usize);

impl PieceId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single visual piece. Created once at setup and never destroyed: capture
/// flips a flag and parks the model off-board, so undo can resurrect the
/// piece without reconstruction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceType,
    pub color: Color,
    /// Sequence number among same-kind, same-color pieces (pawns 1..=8).
    pub number: u8,
    pub position: ChessPosition,
    pub selected: bool,
    pub captured: bool,
    pub promoted_to: Option<PieceType>,
}

impl Piece {
    pub fn new(kind: PieceType, color: Color, number: u8, position: ChessPosition) -> Piece {
        Piece {
            kind,
            color,
            number,
            position,
            selected: false,
            captured: false,
            promoted_to: None,
        }
    }

    /// Movement class the rules engine should use: the promoted kind once a
    /// pawn has promoted, the birth kind otherwise. Identity never changes.
    pub fn effective_kind(&self) -> PieceType {
        self.promoted_to.unwrap_or(self.kind)
    }

    pub fn promote(&mut self, kind: PieceType) {
        assert!(
            self.kind == PieceType::Pawn,
            "trying to promote a non-pawn piece"
        );
        self.promoted_to = Some(kind);
    }
}

fn pawn_row(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

fn major_row(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

/// Rank a pawn of `color` promotes on.
pub fn promotion_row(color: Color) -> u8 {
    major_row(color.opposite())
}

/// The 32 starting pieces. Rooks stand on columns 0 and 7, knights on 1 and
/// 6, bishops on 2 and 5; with the a-file at column 7 the queen lands on
/// column 4 (the d-file) and the king on column 3 (the e-file).
pub fn starting_pieces() -> Vec<Piece> {
    let mut pieces = Vec::with_capacity(32);
    for color in [Color::White, Color::Black] {
        for column in 0..8u8 {
            pieces.push(Piece::new(
                PieceType::Pawn,
                color,
                column + 1,
                ChessPosition::new(pawn_row(color), column),
            ));
        }
        let row = major_row(color);
        for (kind, columns) in [
            (PieceType::Rook, &[0u8, 7][..]),
            (PieceType::Knight, &[1u8, 6][..]),
            (PieceType::Bishop, &[2u8, 5][..]),
            (PieceType::Queen, &[4u8][..]),
            (PieceType::King, &[3u8][..]),
        ] {
            for (index, &column) in columns.iter().enumerate() {
                pieces.push(Piece::new(
                    kind,
                    color,
                    index as u8 + 1,
                    ChessPosition::new(row, column),
                ));
            }
        }
    }
    pieces
}
