use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chess_scene::{
    Board, ChessPosition, Color, GameController, MoveRecord, MoveRequest, NullScene, PieceType,
    RulesEngine,
};

/// Engine that lets a knight shuttle between b1 and c3 forever. Enough to
/// drive the full select -> commit -> undo cycle without real rule lookups.
#[derive(Default)]
struct ShuttleEngine {
    turn: Color,
    moves: Vec<MoveRecord>,
}

impl RulesEngine for ShuttleEngine {
    fn moves_from(&self, kind: PieceType, from: ChessPosition) -> Vec<ChessPosition> {
        if kind != PieceType::Knight {
            return Vec::new();
        }
        match from.notation().as_str() {
            "b1" => vec![ChessPosition::from_notation("c3")],
            "c3" => vec![ChessPosition::from_notation("b1")],
            _ => Vec::new(),
        }
    }

    fn apply_move(&mut self, request: MoveRequest) -> Option<MoveRecord> {
        let record = MoveRecord {
            from: request.from,
            to: request.to,
            color: self.turn,
            captured: false,
        };
        self.moves.push(record);
        self.turn = self.turn.opposite();
        Some(record)
    }

    fn undo_last_move(&mut self) -> Option<MoveRecord> {
        let record = self.moves.pop()?;
        self.turn = self.turn.opposite();
        Some(record)
    }

    fn in_check(&self) -> bool {
        false
    }

    fn game_over(&self) -> bool {
        false
    }

    fn checkmate(&self) -> bool {
        false
    }

    fn stalemate(&self) -> bool {
        false
    }

    fn draw(&self) -> bool {
        false
    }

    fn threefold_repetition(&self) -> bool {
        false
    }

    fn insufficient_material(&self) -> bool {
        false
    }

    fn current_turn(&self) -> Color {
        self.turn
    }

    fn history(&self) -> Vec<MoveRecord> {
        self.moves.clone()
    }
}

fn select_commit_undo(game: &mut GameController<ShuttleEngine, NullScene>) {
    let knight = game
        .piece_at(ChessPosition::from_notation("b1"))
        .expect("knight on its square");
    game.handle_piece_click(knight);
    game.handle_tile_click(ChessPosition::from_notation("c3"));
    game.undo();
}

fn mark_cycle(board: &mut Board) {
    for row in 0..8u8 {
        for column in 0..8u8 {
            board.mark(ChessPosition::new(row, column));
        }
    }
    board.unmark_all();
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("notation round trip", |b| {
        b.iter(|| {
            let position = black_box(ChessPosition::new(3, 4));
            ChessPosition::from_notation(&position.notation())
        })
    });
    c.bench_function("board mark cycle", |b| {
        let mut board = Board::new();
        b.iter(|| mark_cycle(black_box(&mut board)))
    });
    c.bench_function("select-commit-undo cycle", |b| {
        let mut game = GameController::new(ShuttleEngine::default(), NullScene);
        b.iter(|| select_commit_undo(black_box(&mut game)))
    });
    c.bench_function("controller setup", |b| {
        b.iter(|| GameController::new(ShuttleEngine::default(), NullScene))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
