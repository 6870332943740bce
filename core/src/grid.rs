use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::*;

/// Canonical arrangement of a puzzle: [`ROW_COUNT`] rows and the rows excluded from shuffles.
///
/// Tiles only ever change places, the multiset of tile ids is fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridData")]
pub struct Grid {
    rows: Vec<Row>,
    exclusions: ExclusionSet,
}

/// Unchecked serialized form of a [`Grid`].
#[derive(Deserialize)]
struct GridData {
    rows: Vec<Row>,
    exclusions: ExclusionSet,
}

impl TryFrom<GridData> for Grid {
    type Error = PuzzleError;

    fn try_from(data: GridData) -> Result<Self> {
        let mut grid = Self::from_rows(data.rows)?;
        for row in data.exclusions.excluded_rows() {
            grid.set_excluded(row, true)?;
        }
        for row in row_ids() {
            if grid.row(row).is_some_and(Row::is_locked) {
                grid.exclusions.set(row, true);
            }
        }
        Ok(grid)
    }
}

impl Grid {
    /// Validates and wraps already-grouped rows. Rows may hold fewer tiles than they have slots.
    pub fn from_rows(rows: Vec<Row>) -> Result<Self> {
        if rows.len() != ROW_COUNT {
            return Err(PuzzleError::InvalidRowCount {
                expected: ROW_COUNT,
                found: rows.len(),
            });
        }

        let mut seen = HashSet::new();
        for (row, expected_id) in rows.iter().zip(row_ids()) {
            if row.id() != expected_id {
                return Err(PuzzleError::UnknownRow(row.id()));
            }
            if row.len() > ROW_CAPACITY {
                return Err(PuzzleError::RowOverCapacity(row.id()));
            }
            for tile in row.tiles() {
                if !seen.insert(tile.id()) {
                    return Err(PuzzleError::DuplicateTile(tile.id()));
                }
            }
        }

        Ok(Self {
            rows,
            exclusions: ExclusionSet::new(),
        })
    }

    /// Deals exactly [`TILE_COUNT`] tiles into rows of [`ROW_CAPACITY`], keeping their order.
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Result<Self> {
        let tiles: Vec<Tile> = tiles.into_iter().collect();
        if tiles.len() != TILE_COUNT {
            return Err(PuzzleError::InvalidTileCount {
                expected: TILE_COUNT,
                found: tiles.len(),
            });
        }

        let mut tiles = tiles.into_iter();
        let rows = row_ids()
            .map(|id| Row::new(id, tiles.by_ref().take(ROW_CAPACITY)))
            .collect();
        Self::from_rows(rows)
    }

    /// Builds a board from typed words, numbering tiles from 1 in input order.
    pub fn from_words<S: Into<String>>(words: impl IntoIterator<Item = S>) -> Result<Self> {
        Self::from_tiles(
            words
                .into_iter()
                .zip(1..)
                .map(|(word, id)| Tile::new(id, word)),
        )
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub fn exclusions(&self) -> &ExclusionSet {
        &self.exclusions
    }

    pub fn is_excluded(&self, row: RowId) -> bool {
        self.exclusions.is_excluded(row)
    }

    pub fn tile_count(&self) -> usize {
        self.rows.iter().map(Row::len).sum()
    }

    /// All tile ids on the board, sorted.
    pub fn tile_ids(&self) -> Vec<TileId> {
        let mut ids: Vec<_> = self
            .rows
            .iter()
            .flat_map(Row::tiles)
            .map(Tile::id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Row index and slot of a tile.
    pub fn locate(&self, tile_id: TileId) -> Option<(usize, usize)> {
        self.rows
            .iter()
            .enumerate()
            .find_map(|(index, row)| row.slot_of(tile_id).map(|slot| (index, slot)))
    }

    pub fn row_of(&self, tile_id: TileId) -> Option<&Row> {
        self.locate(tile_id).map(|(index, _)| &self.rows[index])
    }

    pub fn tile(&self, tile_id: TileId) -> Option<&Tile> {
        self.locate(tile_id)
            .map(|(index, slot)| &self.rows[index].tiles()[slot])
    }

    /// Swaps the slots of two tiles, in the same row or across rows.
    ///
    /// Unknown ids and `source == target` leave the board untouched.
    pub fn move_tile(&mut self, source: TileId, target: TileId) -> MoveOutcome {
        if source == target {
            return MoveOutcome::NoChange;
        }

        let (Some(from), Some(to)) = (self.locate(source), self.locate(target)) else {
            log::warn!("ignoring move of unknown tile: {} -> {}", source, target);
            return MoveOutcome::NoChange;
        };

        if from.0 == to.0 {
            self.rows[from.0].tiles_mut().swap(from.1, to.1);
        } else {
            let ((low_row, low_slot), (high_row, high_slot)) =
                if from.0 < to.0 { (from, to) } else { (to, from) };
            let (head, tail) = self.rows.split_at_mut(high_row);
            core::mem::swap(
                &mut head[low_row].tiles_mut()[low_slot],
                &mut tail[0].tiles_mut()[high_slot],
            );
        }

        log::debug!("swapped tiles {} and {}", source, target);
        MoveOutcome::Swapped
    }

    /// Randomly redistributes the tiles of every row that is not excluded.
    ///
    /// Included rows keep their tile counts and their order, excluded and locked rows are not touched.
    pub fn shuffle(&mut self, shuffler: &mut Shuffler) {
        let Self { rows, exclusions } = self;

        let mut pool = Vec::with_capacity(TILE_COUNT);
        let mut counts = Vec::with_capacity(ROW_COUNT);
        for row in rows.iter_mut() {
            if row.is_locked() || exclusions.is_excluded(row.id()) {
                continue;
            }
            let tiles = core::mem::take(row.tiles_mut());
            counts.push((row.id(), tiles.len()));
            pool.extend(tiles);
        }

        shuffler.shuffle(&mut pool);

        let mut pool = pool.into_iter();
        for (id, count) in &counts {
            if let Some(row) = rows.iter_mut().find(|row| row.id() == *id) {
                row.tiles_mut().extend(pool.by_ref().take(*count));
            }
        }

        log::debug!("shuffled tiles across {} rows", counts.len());
    }

    /// Marks a row as solved with a theme and color, and keeps it out of shuffles.
    pub fn lock_row(&mut self, row: RowId, color: Color, theme: impl Into<String>) -> Result<()> {
        let theme = theme.into();
        log::debug!("lock row {}: {:?} {}", row, theme, color);
        self.row_mut(row)?.set_lock(Some(LockData { color, theme }));
        self.exclusions.set(row, true);
        Ok(())
    }

    /// Removes a row's lock and includes it in shuffles again.
    pub fn clear_lock(&mut self, row: RowId) -> Result<()> {
        log::debug!("clear lock of row {}", row);
        self.row_mut(row)?.set_lock(None);
        self.exclusions.set(row, false);
        Ok(())
    }

    pub fn set_notes(&mut self, row: RowId, notes: impl Into<String>) -> Result<()> {
        self.row_mut(row)?.set_notes(notes.into());
        Ok(())
    }

    /// Locked rows stay excluded until their lock is cleared.
    pub fn set_excluded(&mut self, row: RowId, excluded: bool) -> Result<()> {
        if self.row_mut(row)?.is_locked() && !excluded {
            return Err(PuzzleError::RowLocked(row));
        }
        self.exclusions.set(row, excluded);
        Ok(())
    }

    /// First palette color not already used by a locked row.
    pub fn next_palette_color(&self) -> Color {
        PALETTE
            .iter()
            .copied()
            .find(|color| {
                !self
                    .rows
                    .iter()
                    .filter_map(Row::lock)
                    .any(|lock| lock.color == *color)
            })
            .unwrap_or_default()
    }

    fn row_mut(&mut self, id: RowId) -> Result<&mut Row> {
        self.rows
            .iter_mut()
            .find(|row| row.id() == id)
            .ok_or(PuzzleError::UnknownRow(id))
    }
}
