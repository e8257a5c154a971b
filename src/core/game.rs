use log::{debug, info, trace};

use crate::core::board::Board;
use crate::core::config::capture_rest_position;
use crate::core::ledger::CaptureLedger;
use crate::core::piece::{promotion_row, starting_pieces, Piece, PieceId, PieceType};
use crate::core::position::ChessPosition;
use crate::definitions::{GameState, MoveRequest, RulesEngine, TurnPhase, WinCondition};
use crate::scene::SceneAdapter;

/// A chosen but not yet finished move. Present from the moment a destination
/// is picked until the turn ends; its existence gates further click input,
/// and undo reads it to know a rollback is possible.
#[derive(Clone, Copy, Debug)]
struct PendingMove {
    piece: PieceId,
    from: ChessPosition,
    to: ChessPosition,
    promotion: Option<PieceType>,
}

/// The move orchestration state machine. Mediates clicks against the tile
/// grid and the piece set, delegates legality to the rules engine, and keeps
/// all three representations in step through commit, promotion, undo and
/// turn transition.
///
/// Rejected input (wrong color, unmarked tile, wrong phase) is a silent
/// no-op: this is an interactive surface, not an API. Disagreement between
/// the engine, the ledger and the piece set is a bug and panics.
pub struct GameController<R: RulesEngine, S: SceneAdapter> {
    engine: R,
    scene: S,
    board: Board,
    pieces: Vec<Piece>,
    ledger: CaptureLedger,
    state: GameState,
    phase: TurnPhase,
    selected: Option<PieceId>,
    /// Pre-move square of the selected piece, recorded at selection time so
    /// undo can walk the mover back.
    origin: Option<ChessPosition>,
    pending: Option<PendingMove>,
}

impl<R: RulesEngine, S: SceneAdapter> GameController<R, S> {
    pub fn new(engine: R, scene: S) -> Self {
        Self::with_pieces(engine, scene, starting_pieces())
    }

    pub(crate) fn with_pieces(engine: R, scene: S, pieces: Vec<Piece>) -> Self {
        let state = GameState {
            turn: engine.current_turn(),
            ..Default::default()
        };
        GameController {
            engine,
            scene,
            board: Board::new(),
            pieces,
            ledger: CaptureLedger::new(),
            state,
            phase: TurnPhase::Idle,
            selected: None,
            origin: None,
            pending: None,
        }
    }

    // --- lookups for the presentation layer ---

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.0]
    }

    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces
            .iter()
            .enumerate()
            .map(|(index, piece)| (PieceId(index), piece))
    }

    /// The non-captured piece standing on `position`, if any.
    pub fn piece_at(&self, position: ChessPosition) -> Option<PieceId> {
        self.pieces
            .iter()
            .position(|piece| !piece.captured && piece.position == position)
            .map(PieceId)
    }

    pub fn selected_piece(&self) -> Option<PieceId> {
        self.selected
    }

    pub fn ledger(&self) -> &CaptureLedger {
        &self.ledger
    }

    pub fn engine(&self) -> &R {
        &self.engine
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    // --- click dispatch ---

    /// A click landed on a piece model.
    pub fn handle_piece_click(&mut self, id: PieceId) {
        if !self.accepting_input() {
            return;
        }
        trace!("piece click: {:?}", self.pieces[id.0]);
        match self.selected {
            None => self.select_piece(id),
            Some(selected) if selected == id => self.deselect_piece(),
            Some(selected) => {
                if self.pieces[id.0].color == self.pieces[selected.0].color {
                    // switching selection never counts as a move
                    self.deselect_piece();
                    self.select_piece(id);
                } else {
                    // enemy piece: treat as a click on its tile
                    let target = self.pieces[id.0].position;
                    self.handle_tile_click(target);
                }
            }
        }
    }

    /// A click landed on a bare tile. Only meaningful with a selection and a
    /// marked tile; everything deeper was already settled by the engine when
    /// the marks were computed.
    pub fn handle_tile_click(&mut self, position: ChessPosition) {
        if !self.accepting_input() || self.phase != TurnPhase::Selected {
            return;
        }
        if !self.board.is_marked(position) {
            trace!("click on unmarked tile {position}, ignored");
            return;
        }
        let selected = self
            .selected
            .expect("in Selected phase without a selected piece");
        let from = self
            .origin
            .expect("in Selected phase without a recorded origin");
        self.pending = Some(PendingMove {
            piece: selected,
            from,
            to: position,
            promotion: None,
        });
        let mover = &self.pieces[selected.0];
        if mover.effective_kind() == PieceType::Pawn && position.row == promotion_row(mover.color) {
            // Defer everything until the promotion type is known: nothing on
            // the board or in the engine changes before then, so there is no
            // committed-but-wrong-type state to roll back.
            debug!("pawn reaches {position}, awaiting promotion choice");
            self.phase = TurnPhase::AwaitingPromotion;
            self.scene.request_promotion_choice();
            return;
        }
        self.commit_move();
    }

    /// The UI answered a promotion prompt.
    pub fn handle_promotion_choice(&mut self, kind: PieceType) {
        if self.phase != TurnPhase::AwaitingPromotion {
            return;
        }
        if matches!(kind, PieceType::Pawn | PieceType::King) {
            return;
        }
        let pending = self
            .pending
            .as_mut()
            .expect("awaiting promotion without a pending move");
        pending.promotion = Some(kind);
        let piece = pending.piece;
        self.pieces[piece.0].promote(kind);
        debug!("promotion choice: {kind:?}");
        self.commit_move();
    }

    // --- selection ---

    fn select_piece(&mut self, id: PieceId) {
        if self.phase != TurnPhase::Idle {
            return;
        }
        let piece = &self.pieces[id.0];
        if piece.captured || piece.color != self.state.turn {
            return;
        }
        let destinations = self.engine.moves_from(piece.effective_kind(), piece.position);
        if destinations.is_empty() {
            trace!("{} {:?} at {} has no moves", piece.color, piece.kind, piece.position);
            return;
        }
        self.selected = Some(id);
        self.origin = Some(piece.position);
        self.pieces[id.0].selected = true;
        self.scene.piece_selected(&self.pieces[id.0]);
        for destination in destinations {
            self.board.mark(destination);
            self.scene.highlight_tile(self.board.tile_at(destination));
        }
        self.phase = TurnPhase::Selected;
        self.check_invariants();
    }

    fn deselect_piece(&mut self) {
        let Some(selected) = self.selected.take() else {
            return;
        };
        self.pieces[selected.0].selected = false;
        self.scene.piece_deselected(&self.pieces[selected.0]);
        self.board.unmark_all();
        self.scene.clear_highlights();
        self.origin = None;
        self.phase = TurnPhase::Idle;
        self.check_invariants();
    }

    // --- commit / undo / end turn ---

    fn commit_move(&mut self) {
        let pending = self
            .pending
            .expect("commit without a pending move");
        let request = MoveRequest {
            from: pending.from,
            to: pending.to,
            promotion: pending.promotion,
        };
        // The destinations came from the engine, so rejection here means the
        // representations have drifted apart. Abort loudly before mutating.
        let record = self.engine.apply_move(request).unwrap_or_else(|| {
            panic!(
                "rules engine rejected its own move {} -> {}",
                pending.from, pending.to
            )
        });

        if record.captured {
            let victim = self
                .piece_at(pending.to)
                .unwrap_or_else(|| {
                    panic!("engine reported a capture but {} is empty", pending.to)
                });
            let color = self.pieces[victim.0].color;
            assert!(
                color != self.pieces[pending.piece.0].color,
                "capture of a same-color piece at {}",
                pending.to
            );
            self.pieces[victim.0].captured = true;
            self.ledger.push(color, victim);
            let rest = capture_rest_position(color, self.ledger.len(color) - 1);
            self.scene.move_piece(&self.pieces[victim.0], rest);
            self.scene.show_capture(&self.pieces[victim.0]);
            info!("{color} {:?} captured on {}", self.pieces[victim.0].kind, pending.to);
        }

        let mover = pending.piece;
        self.pieces[mover.0].position = pending.to;
        self.pieces[mover.0].selected = false;
        self.scene
            .move_piece(&self.pieces[mover.0], pending.to.world_center());
        self.scene.piece_deselected(&self.pieces[mover.0]);
        self.board.unmark_all();
        self.scene.clear_highlights();
        self.selected = None;
        self.phase = TurnPhase::Committed;
        self.scene.show_turn_controls();
        debug!(
            "committed {} -> {} ({})",
            pending.from, pending.to, self.state.turn
        );
        self.check_invariants();
    }

    /// Roll the committed move back. Permanent once the turn has ended.
    pub fn undo(&mut self) {
        if self.phase != TurnPhase::Committed {
            return;
        }
        // Defensive: a stale Committed flag with nothing inside the engine
        // to undo degrades to a no-op.
        let Some(record) = self.engine.undo_last_move() else {
            return;
        };
        let pending = self
            .pending
            .take()
            .expect("committed move without pending state");
        let from = self.origin.take().expect("committed move without an origin");

        let mover = pending.piece;
        self.pieces[mover.0].position = from;
        if pending.promotion.is_some() {
            self.pieces[mover.0].promoted_to = None;
        }
        self.scene
            .move_piece(&self.pieces[mover.0], from.world_center());

        if record.captured {
            // The victim stood on the destination square before the capture.
            let color = record.color.opposite();
            let victim = self.ledger.pop(color);
            self.pieces[victim.0].captured = false;
            self.pieces[victim.0].position = record.to;
            self.scene.hide_capture(&self.pieces[victim.0]);
            self.scene
                .move_piece(&self.pieces[victim.0], record.to.world_center());
        }

        self.phase = TurnPhase::Idle;
        self.scene.hide_turn_controls();
        info!("undid {} -> {}", record.from, record.to);
        self.check_invariants();
    }

    /// Make the committed move permanent, evaluate check and game end, and
    /// hand the turn over.
    pub fn end_turn(&mut self) {
        if self.phase != TurnPhase::Committed {
            return;
        }
        self.pending = None;
        self.origin = None;

        let mover = self.state.turn;
        if self.engine.game_over() {
            let condition = self.win_condition();
            self.state.game_over = true;
            self.state.win_condition = Some(condition);
            self.state.winner = Some(mover);
            self.state.in_check = self.engine.in_check().then(|| mover.opposite());
            info!("game over: {condition:?}, winner {mover}");
            self.scene.show_game_over(condition, mover);
        } else if self.engine.in_check() {
            self.state.in_check = Some(mover.opposite());
            debug!("{} is in check", mover.opposite());
        } else {
            self.state.in_check = None;
        }

        let latest = self
            .engine
            .history()
            .last()
            .copied()
            .expect("turn ended with an empty engine history");
        self.state.move_history.push(latest);
        self.state.turn = self.engine.current_turn();
        self.phase = TurnPhase::Idle;
        self.scene.hide_turn_controls();
        debug!("turn passes to {}", self.state.turn);
        self.check_invariants();
    }

    /// Full reinitialization: fresh engine, fresh pieces, empty ledger.
    pub fn reset(&mut self)
    where
        R: Default,
    {
        self.engine = R::default();
        self.pieces = starting_pieces();
        self.board = Board::new();
        self.ledger.clear();
        self.state = GameState {
            turn: self.engine.current_turn(),
            ..Default::default()
        };
        self.phase = TurnPhase::Idle;
        self.selected = None;
        self.origin = None;
        self.pending = None;
        self.scene.clear_highlights();
        self.scene.hide_turn_controls();
        info!("game reset");
    }

    // --- internals ---

    fn accepting_input(&self) -> bool {
        !self.state.game_over
            && matches!(self.phase, TurnPhase::Idle | TurnPhase::Selected)
    }

    /// First matching terminal condition, in priority order.
    fn win_condition(&self) -> WinCondition {
        if self.engine.checkmate() {
            WinCondition::Checkmate
        } else if self.engine.stalemate() {
            WinCondition::Stalemate
        } else if self.engine.draw() {
            WinCondition::Draw
        } else if self.engine.threefold_repetition() {
            WinCondition::ThreefoldRepetition
        } else if self.engine.insufficient_material() {
            WinCondition::InsufficientMaterial
        } else {
            panic!("engine reports game over without a terminal condition")
        }
    }

    fn check_invariants(&self) {
        #[cfg(debug_assertions)]
        {
            let selected_count = self
                .pieces
                .iter()
                .filter(|piece| piece.selected)
                .count();
            assert!(selected_count <= 1, "more than one piece selected");
            assert_eq!(
                selected_count == 1,
                self.selected.is_some(),
                "selection flag and handle disagree"
            );
            let captured_count = self
                .pieces
                .iter()
                .filter(|piece| piece.captured)
                .count();
            assert_eq!(
                captured_count,
                self.ledger.total(),
                "ledger and captured flags disagree"
            );
            if self.pending.is_none() && self.phase == TurnPhase::Idle {
                assert_eq!(
                    self.state.move_history.len(),
                    self.engine.history().len(),
                    "history length drifted from the engine"
                );
            }
            if self.phase == TurnPhase::Idle || self.phase == TurnPhase::Selected {
                assert!(
                    self.board.marked_tiles().count() == 0 || self.selected.is_some(),
                    "marked tiles without a selection"
                );
            }
        }
    }
}
