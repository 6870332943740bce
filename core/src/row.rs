use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Tiles held by a row, inline up to [`ROW_CAPACITY`].
pub type RowTiles = SmallVec<[Tile; ROW_CAPACITY]>;

/// Theme and color of a row the player has marked as solved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockData {
    pub color: Color,
    pub theme: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    id: RowId,
    tiles: RowTiles,
    notes: String,
    lock: Option<LockData>,
}

impl Row {
    pub fn new(id: RowId, tiles: impl IntoIterator<Item = Tile>) -> Self {
        Self {
            id,
            tiles: tiles.into_iter().collect(),
            notes: String::new(),
            lock: None,
        }
    }

    pub const fn id(&self) -> RowId {
        self.id
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn lock(&self) -> Option<&LockData> {
        self.lock.as_ref()
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_some()
    }

    pub fn contains(&self, tile_id: TileId) -> bool {
        self.slot_of(tile_id).is_some()
    }

    pub fn slot_of(&self, tile_id: TileId) -> Option<usize> {
        self.tiles.iter().position(|tile| tile.id() == tile_id)
    }

    /// Texts of the row's tiles joined with `", "`.
    pub fn to_text(&self) -> String {
        self.tiles
            .iter()
            .map(Tile::text)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub(crate) fn tiles_mut(&mut self) -> &mut RowTiles {
        &mut self.tiles
    }

    pub(crate) fn set_notes(&mut self, notes: String) {
        self.notes = notes;
    }

    pub(crate) fn set_lock(&mut self, lock: Option<LockData>) {
        self.lock = lock;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_text_joins_words_in_slot_order() {
        let row = Row::new(
            1,
            [Tile::new(1, "BASS"), Tile::new(2, "PIKE"), Tile::new(3, "SOLE")],
        );

        assert_eq!(row.to_text(), "BASS, PIKE, SOLE");
        assert_eq!(row.slot_of(2), Some(1));
        assert!(!row.contains(4));
    }

    #[test]
    fn locked_row_round_trips_through_json() {
        let mut row = Row::new(2, [Tile::new(5, "EWE")]);
        row.set_lock(Some(LockData {
            color: Color::rgb(0xff, 0, 0),
            theme: "Animals".into(),
        }));

        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"#ff0000\""));

        let back: Row = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }
}
