#![no_std]

extern crate alloc;

pub use color::*;
pub use error::*;
pub use exclusion::*;
pub use features::*;
pub use grid::*;
pub use row::*;
pub use session::*;
pub use shuffle::*;
pub use tile::*;
pub use types::*;

mod color;
mod error;
mod exclusion;
mod features;
mod grid;
mod row;
mod session;
mod shuffle;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    NoChange,
    Swapped,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Swapped => true,
        }
    }
}

/// Result of a [`Command`] applied to a [`Session`], tells the view whether to redraw.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    NoChange,
    Changed,
}

impl Outcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}
