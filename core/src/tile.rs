use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::TileId;

/// A single word on the board. Only its position changes after creation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    id: TileId,
    text: String,
}

impl Tile {
    pub fn new(id: TileId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    pub const fn id(&self) -> TileId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
