use alloc::string::String;

use crate::*;

/// Lock overlay state, at most one row is edited at a time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    Closed,
    Editing(RowId),
}

impl Overlay {
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Editing(_))
    }
}

/// Player intents, produced by the view from drag, click and form events.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    BeginDrag(TileId),
    CompleteDrop { source: TileId, target: TileId },
    CancelDrag,
    Shuffle,
    SetNotes { row: RowId, notes: String },
    SetExcluded { row: RowId, excluded: bool },
    OpenLock(RowId),
    SubmitLock { color: Option<Color>, theme: String },
    ClearLock,
    CloseOverlay,
}

/// Mutable state of one loaded puzzle, owned by the top-level view.
#[derive(Clone, Debug)]
pub struct Session {
    grid: Grid,
    features: Features,
    overlay: Overlay,
    dragging: Option<TileId>,
    shuffler: Shuffler,
    shuffle_count: u32,
}

impl Session {
    pub fn new(grid: Grid, features: Features, seed: u64) -> Self {
        Self {
            grid,
            features,
            overlay: Overlay::Closed,
            dragging: None,
            shuffler: Shuffler::from_seed(seed),
            shuffle_count: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn features(&self) -> Features {
        self.features
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    /// Row being edited in the lock overlay.
    pub fn overlay_row(&self) -> Option<&Row> {
        match self.overlay {
            Overlay::Closed => None,
            Overlay::Editing(id) => self.grid.row(id),
        }
    }

    pub fn dragging(&self) -> Option<TileId> {
        self.dragging
    }

    pub fn shuffle_count(&self) -> u32 {
        self.shuffle_count
    }

    /// Whether a tile may be picked up or dropped on.
    pub fn can_drag(&self, tile_id: TileId) -> bool {
        self.grid
            .row_of(tile_id)
            .is_some_and(|row| !row.is_locked())
    }

    pub fn apply(&mut self, command: Command) -> Result<Outcome> {
        use Command::*;
        use Outcome::*;

        log::debug!("apply {:?}", command);

        Ok(match command {
            BeginDrag(tile) => {
                if !self.can_drag(tile) {
                    return Ok(NoChange);
                }
                let previous = self.dragging.replace(tile);
                if previous == Some(tile) { NoChange } else { Changed }
            }
            CompleteDrop { source, target } => {
                let dragging = self.dragging.take();
                if dragging != Some(source) {
                    log::trace!("drop of {} without matching drag ({:?})", source, dragging);
                    return Ok(if dragging.is_some() { Changed } else { NoChange });
                }
                // the drag marker changed even when the target refuses the tile
                if !self.can_drag(target) {
                    return Ok(Changed);
                }
                self.grid.move_tile(source, target);
                Changed
            }
            CancelDrag => {
                if self.dragging.take().is_some() {
                    Changed
                } else {
                    NoChange
                }
            }
            Shuffle => {
                self.grid.shuffle(&mut self.shuffler);
                self.shuffle_count = self.shuffle_count.saturating_add(1);
                Changed
            }
            SetNotes { row, notes } => {
                self.features.require(Features::NOTES, "notes")?;
                self.grid.set_notes(row, notes)?;
                Changed
            }
            SetExcluded { row, excluded } => {
                self.features.require(Features::NOTES, "notes")?;
                if self.grid.row(row).is_none() {
                    return Err(PuzzleError::UnknownRow(row));
                }
                if self.grid.is_excluded(row) == excluded {
                    return Ok(NoChange);
                }
                self.grid.set_excluded(row, excluded)?;
                Changed
            }
            OpenLock(row) => {
                self.features.require(Features::LOCKING, "locking")?;
                if self.overlay.is_open() {
                    return Ok(NoChange);
                }
                if self.grid.row(row).is_none() {
                    return Err(PuzzleError::UnknownRow(row));
                }
                self.overlay = Overlay::Editing(row);
                Changed
            }
            SubmitLock { color, theme } => {
                let row = self.editing_row()?;
                let color = match color {
                    Some(color) if self.features.contains(Features::COLOR_TAGGING) => color,
                    _ => self.grid.next_palette_color(),
                };
                self.grid.lock_row(row, color, theme)?;
                self.overlay = Overlay::Closed;
                Changed
            }
            ClearLock => {
                let row = self.editing_row()?;
                self.grid.clear_lock(row)?;
                self.overlay = Overlay::Closed;
                Changed
            }
            CloseOverlay => {
                if self.overlay.is_open() {
                    self.overlay = Overlay::Closed;
                    Changed
                } else {
                    NoChange
                }
            }
        })
    }

    fn editing_row(&self) -> Result<RowId> {
        match self.overlay {
            Overlay::Editing(row) => Ok(row),
            Overlay::Closed => Err(PuzzleError::NoOverlayOpen),
        }
    }
}
