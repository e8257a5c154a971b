use serde::{Deserialize, Serialize};

use crate::core::piece::{Color, PieceType};
use crate::core::position::ChessPosition;

/// Move descriptor submitted to the rules engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub from: ChessPosition,
    pub to: ChessPosition,
    pub promotion: Option<PieceType>,
}

/// What the rules engine reports back for an applied (or undone) move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: ChessPosition,
    pub to: ChessPosition,
    /// Color of the side that made the move.
    pub color: Color,
    pub captured: bool,
}

/// The external chess-rules collaborator: legality, history, check and
/// terminal detection all live behind this seam. The orchestrator never
/// second-guesses it.
pub trait RulesEngine {
    /// Legal destinations for a piece of `kind` standing on `from`. Empty
    /// when the piece cannot move at all.
    fn moves_from(&self, kind: PieceType, from: ChessPosition) -> Vec<ChessPosition>;

    /// Apply a move to the internal model. `None` signals rejection.
    fn apply_move(&mut self, request: MoveRequest) -> Option<MoveRecord>;

    /// Undo the engine's last move. `None` when there is nothing to undo.
    fn undo_last_move(&mut self) -> Option<MoveRecord>;

    fn in_check(&self) -> bool;
    fn game_over(&self) -> bool;
    fn checkmate(&self) -> bool;
    fn stalemate(&self) -> bool;
    fn draw(&self) -> bool;
    fn threefold_repetition(&self) -> bool;
    fn insufficient_material(&self) -> bool;

    fn current_turn(&self) -> Color;
    fn history(&self) -> Vec<MoveRecord>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinCondition {
    Checkmate,
    Stalemate,
    Draw,
    ThreefoldRepetition,
    InsufficientMaterial,
}

/// Where the orchestrator stands inside one turn. `AwaitingPromotion` and
/// `Committed` gate further selection and move input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TurnPhase {
    #[default]
    Idle,
    Selected,
    AwaitingPromotion,
    Committed,
}

/// Read-only view of the game for the presentation layer. Owned and mutated
/// only by the orchestrator's transition functions.
#[derive(Clone, Debug, Default)]
pub struct GameState {
    pub turn: Color,
    pub in_check: Option<Color>,
    pub game_over: bool,
    pub winner: Option<Color>,
    pub win_condition: Option<WinCondition>,
    pub move_history: Vec<MoveRecord>,
}
