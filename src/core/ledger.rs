use crate::core::piece::{Color, PieceId};

/// Two per-color stacks of captured pieces, popped in LIFO order by undo.
/// Each stack is keyed by the color of the pieces *in* it: capturing a black
/// knight pushes onto the black stack, and undoing that capture must pop the
/// same knight back off it.
#[derive(Clone, Debug, Default)]
pub struct CaptureLedger {
    white: Vec<PieceId>,
    black: Vec<PieceId>,
}

impl CaptureLedger {
    pub fn new() -> CaptureLedger {
        Default::default()
    }

    fn stack(&mut self, color: Color) -> &mut Vec<PieceId> {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    pub fn push(&mut self, color: Color, piece: PieceId) {
        self.stack(color).push(piece);
    }

    /// Pop the most recent capture of `color`. An empty stack here means the
    /// orchestrator and the rules engine disagree about move history, which
    /// is a bug, not a user-facing condition.
    pub fn pop(&mut self, color: Color) -> PieceId {
        self.stack(color)
            .pop()
            .unwrap_or_else(|| panic!("capture ledger for {color} popped while empty"))
    }

    pub fn len(&self, color: Color) -> usize {
        match color {
            Color::White => self.white.len(),
            Color::Black => self.black.len(),
        }
    }

    pub fn total(&self) -> usize {
        self.white.len() + self.black.len()
    }

    pub fn is_empty(&self) -> bool {
        self.white.is_empty() && self.black.is_empty()
    }

    pub fn pieces(&self, color: Color) -> &[PieceId] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub fn clear(&mut self) {
        self.white.clear();
        self.black.clear();
    }
}
