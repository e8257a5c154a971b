use log::debug;

use crate::core::board::Tile;
use crate::core::piece::{Color, Piece, PieceType};
use crate::core::position::WorldPosition;
use crate::definitions::WinCondition;

/// Notifications the orchestrator pushes to the rendering/UI layer. All of
/// them are fire-and-forget: nothing flows back into game state. Default
/// bodies are no-ops so an adapter only implements what it renders.
pub trait SceneAdapter {
    fn highlight_tile(&mut self, _tile: &Tile) {}
    fn clear_highlights(&mut self) {}
    fn piece_selected(&mut self, _piece: &Piece) {}
    fn piece_deselected(&mut self, _piece: &Piece) {}
    fn move_piece(&mut self, _piece: &Piece, _target: WorldPosition) {}
    fn show_capture(&mut self, _piece: &Piece) {}
    fn hide_capture(&mut self, _piece: &Piece) {}
    /// Ask the UI for a promotion type. The answer comes back through
    /// `GameController::handle_promotion_choice`.
    fn request_promotion_choice(&mut self) {}
    fn show_turn_controls(&mut self) {}
    fn hide_turn_controls(&mut self) {}
    fn show_game_over(&mut self, _condition: WinCondition, _winner: Color) {}
}

/// Adapter that renders nothing. Useful for headless runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullScene;

impl SceneAdapter for NullScene {}

/// Debug adapter that narrates events through the `log` crate and can dump
/// the piece set as a unicode board.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextScene;

fn piece_glyph(kind: PieceType, color: Color) -> char {
    match (color, kind) {
        (Color::White, PieceType::Pawn) => '♙',
        (Color::White, PieceType::Knight) => '♘',
        (Color::White, PieceType::Bishop) => '♗',
        (Color::White, PieceType::Rook) => '♖',
        (Color::White, PieceType::Queen) => '♕',
        (Color::White, PieceType::King) => '♔',
        (Color::Black, PieceType::Pawn) => '♟',
        (Color::Black, PieceType::Knight) => '♞',
        (Color::Black, PieceType::Bishop) => '♝',
        (Color::Black, PieceType::Rook) => '♜',
        (Color::Black, PieceType::Queen) => '♛',
        (Color::Black, PieceType::King) => '♚',
    }
}

impl TextScene {
    /// Render the non-captured pieces as an 8x8 text grid, rank 8 on top.
    pub fn render<'a>(pieces: impl IntoIterator<Item = &'a Piece> + Clone) -> String {
        let mut output = String::new();
        for row in (0..8u8).rev() {
            output.push_str(&format!("{} | ", row + 1));
            for column in (0..8u8).rev() {
                let glyph = pieces
                    .clone()
                    .into_iter()
                    .find(|piece| {
                        !piece.captured
                            && piece.position.row == row
                            && piece.position.column == column
                    })
                    .map(|piece| piece_glyph(piece.effective_kind(), piece.color))
                    .unwrap_or('.');
                output.push(glyph);
                output.push(' ');
            }
            output.push('\n');
        }
        output.push_str("    a b c d e f g h\n");
        output
    }
}

impl SceneAdapter for TextScene {
    fn highlight_tile(&mut self, tile: &Tile) {
        debug!("highlight {}", tile.position());
    }

    fn clear_highlights(&mut self) {
        debug!("clear highlights");
    }

    fn piece_selected(&mut self, piece: &Piece) {
        debug!("selected {} {:?} at {}", piece.color, piece.kind, piece.position);
    }

    fn piece_deselected(&mut self, piece: &Piece) {
        debug!("deselected {} {:?}", piece.color, piece.kind);
    }

    fn move_piece(&mut self, piece: &Piece, target: WorldPosition) {
        debug!(
            "move {} {:?} -> {} ({:.3}, {:.3}, {:.3})",
            piece.color, piece.kind, piece.position, target.x, target.y, target.z
        );
    }

    fn show_capture(&mut self, piece: &Piece) {
        debug!("captured {} {:?} #{}", piece.color, piece.kind, piece.number);
    }

    fn hide_capture(&mut self, piece: &Piece) {
        debug!("capture undone for {} {:?} #{}", piece.color, piece.kind, piece.number);
    }

    fn request_promotion_choice(&mut self) {
        debug!("promotion choice requested");
    }

    fn show_game_over(&mut self, condition: WinCondition, winner: Color) {
        debug!("game over: {condition:?}, winner {winner}");
    }
}
