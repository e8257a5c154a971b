mod core;
pub mod definitions;
pub mod scene;

// module re-exports
pub use self::core::*;

pub use self::core::board::{Board, Tile};
pub use self::core::game::GameController;
pub use self::core::ledger::CaptureLedger;
pub use self::core::piece::{starting_pieces, Color, Piece, PieceId, PieceType};
pub use self::core::position::{ChessPosition, WorldPosition};
pub use definitions::{GameState, MoveRecord, MoveRequest, RulesEngine, TurnPhase, WinCondition};
pub use scene::{NullScene, SceneAdapter, TextScene};
