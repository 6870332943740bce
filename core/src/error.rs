use thiserror::Error;

use crate::{RowId, TileId};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("Expected {expected} tiles, found {found}")]
    InvalidTileCount { expected: usize, found: usize },
    #[error("Tile id {0} appears more than once")]
    DuplicateTile(TileId),
    #[error("Expected {expected} rows, found {found}")]
    InvalidRowCount { expected: usize, found: usize },
    #[error("Row {0} holds more tiles than it has slots")]
    RowOverCapacity(RowId),
    #[error("No row with id {0}")]
    UnknownRow(RowId),
    #[error("Row {0} is locked")]
    RowLocked(RowId),
    #[error("Color must be written as #rrggbb")]
    InvalidColor,
    #[error("Card position {0} is out of range")]
    InvalidCardPosition(u16),
    #[error("Feature {0} is not enabled")]
    FeatureDisabled(&'static str),
    #[error("No lock overlay is open")]
    NoOverlayOpen,
}

pub type Result<T> = core::result::Result<T, PuzzleError>;
