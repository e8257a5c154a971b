use log::trace;

use crate::core::config::TILE_COUNT;
use crate::core::position::ChessPosition;

/// Identity-bearing cell of the grid. Created once at board initialization
/// and never destroyed; the only mutation is the advisory `marked` flag.
/// Occupancy is resolved by querying pieces, never stored here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    position: ChessPosition,
    marked: bool,
}

impl Tile {
    pub fn position(&self) -> ChessPosition {
        self.position
    }

    /// Whether this tile is currently highlighted as a legal destination.
    /// Carries no legality meaning of its own.
    pub fn marked(&self) -> bool {
        self.marked
    }
}

/// The 64-tile grid with O(1) lookup by matrix index or algebraic notation.
#[derive(Clone, Debug)]
pub struct Board {
    tiles: Vec<Tile>,
}

#[inline]
fn tile_index(position: ChessPosition) -> usize {
    position.row as usize * 8 + position.column as usize
}

impl Board {
    pub fn new() -> Board {
        let tiles = (0..TILE_COUNT)
            .map(|index| Tile {
                position: ChessPosition::new((index / 8) as u8, (index % 8) as u8),
                marked: false,
            })
            .collect();
        Board { tiles }
    }

    pub fn tile_at(&self, position: ChessPosition) -> &Tile {
        &self.tiles[tile_index(position)]
    }

    pub fn tile_by_notation(&self, notation: &str) -> &Tile {
        self.tile_at(ChessPosition::from_notation(notation))
    }

    /// Flag a tile as a legal destination of the current selection. Idempotent.
    pub fn mark(&mut self, position: ChessPosition) {
        trace!("marking tile {position}");
        self.tiles[tile_index(position)].marked = true;
    }

    /// Drop every mark. Always safe to call, marks or not.
    pub fn unmark_all(&mut self) {
        for tile in self.tiles.iter_mut() {
            tile.marked = false;
        }
    }

    pub fn is_marked(&self, position: ChessPosition) -> bool {
        self.tiles[tile_index(position)].marked
    }

    pub fn marked_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|tile| tile.marked)
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
