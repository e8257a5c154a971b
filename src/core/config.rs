use crate::core::piece::Color;
use crate::core::position::WorldPosition;

/** Board geometry in renderer units: a 0.5m x 0.5m board split into 8x8 tiles. */
pub const BOARD_SIZE: f32 = 0.5;
pub const DIVISIONS: u8 = 8;
pub const TILE_SIZE: f32 = BOARD_SIZE / DIVISIONS as f32;
pub const TILE_COUNT: usize = (DIVISIONS as usize) * (DIVISIONS as usize);

/** Resting height of a piece above its tile center. */
pub const PIECE_HEIGHT: f32 = 0.0;

/** Gap between the board edge and the captured-piece rows. */
const CAPTURE_MARGIN: f32 = TILE_SIZE * 1.5;

/// Off-board resting place for a captured piece. Captured white pieces line up
/// on black's side of the table and vice versa, one tile apart in capture order.
pub fn capture_rest_position(color: Color, slot: usize) -> WorldPosition {
    let edge = BOARD_SIZE / 2.0 + CAPTURE_MARGIN;
    let x = match color {
        Color::White => -edge,
        Color::Black => edge,
    };
    let z = -BOARD_SIZE / 2.0 + TILE_SIZE / 2.0 + slot as f32 * TILE_SIZE;
    WorldPosition {
        x,
        y: PIECE_HEIGHT,
        z,
    }
}
