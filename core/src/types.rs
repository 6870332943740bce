/// Stable identifier of a tile, unique across a puzzle.
pub type TileId = u16;

/// Identifier of a row, `1..=ROW_COUNT`.
pub type RowId = u8;

/// Number of rows on a board.
pub const ROW_COUNT: usize = 4;

/// Number of tile slots in a row.
pub const ROW_CAPACITY: usize = 4;

/// Number of tiles in a full puzzle.
pub const TILE_COUNT: usize = ROW_COUNT * ROW_CAPACITY;

/// Row ids in display order.
pub fn row_ids() -> impl Iterator<Item = RowId> {
    1..=ROW_COUNT as RowId
}
