//! Wire format of the daily puzzle feed and its mapping onto a [`Grid`].

use chabon_core::{Grid, PuzzleError, Tile};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use date::*;

mod date;

pub const FEED_BASE_URL: &str = "https://www.nytimes.com/svc/connections/v2";

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Could not decode puzzle feed: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Puzzle feed does not form a board: {0}")]
    Board(#[from] PuzzleError),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyPuzzle {
    #[serde(default)]
    pub print_date: Option<String>,
    pub categories: Vec<Category>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub title: String,
    pub cards: Vec<Card>,
}

/// One word of the puzzle. `position` is its zero-based slot on the starting board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub position: u16,
    #[serde(default)]
    pub content: String,
}

impl DailyPuzzle {
    pub fn from_json(body: &str) -> Result<Self, FeedError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Cards of every category, in board order.
    pub fn ordered_cards(&self) -> Vec<&Card> {
        let mut cards: Vec<_> = self
            .categories
            .iter()
            .flat_map(|category| &category.cards)
            .collect();
        cards.sort_by_key(|card| card.position);
        cards
    }

    /// Lays the cards out on a fresh board, tile ids are `position + 1`.
    pub fn to_grid(&self) -> Result<Grid, FeedError> {
        let tiles = self
            .ordered_cards()
            .into_iter()
            .map(|card| -> Result<Tile, PuzzleError> {
                let id = card
                    .position
                    .checked_add(1)
                    .ok_or(PuzzleError::InvalidCardPosition(card.position))?;
                Ok(Tile::new(id, card.content.clone()))
            })
            .collect::<Result<Vec<_>, PuzzleError>>()?;

        log::debug!(
            "daily puzzle {:?}: {} cards",
            self.print_date.as_deref().unwrap_or("?"),
            tiles.len()
        );
        Ok(Grid::from_tiles(tiles)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // categories list their cards out of board order, as the feed does
    const SAMPLE: &str = r#"{
        "status": "OK",
        "id": 266,
        "print_date": "2024-03-03",
        "editor": "Puzzle Desk",
        "categories": [
            {"title": "FISH", "cards": [
                {"content": "BASS", "position": 5},
                {"content": "PIKE", "position": 0},
                {"content": "SOLE", "position": 10},
                {"content": "CARP", "position": 15}
            ]},
            {"title": "INSTRUMENTS", "cards": [
                {"content": "DRUM", "position": 1},
                {"content": "HARP", "position": 6},
                {"content": "OBOE", "position": 11},
                {"content": "TUBA", "position": 12}
            ]},
            {"title": "COLORS", "cards": [
                {"content": "TEAL", "position": 2},
                {"content": "RUST", "position": 7},
                {"content": "SAGE", "position": 8},
                {"content": "PLUM", "position": 13}
            ]},
            {"title": "BIRDS", "cards": [
                {"content": "WREN", "position": 3},
                {"content": "KITE", "position": 4},
                {"content": "ROOK", "position": 9},
                {"content": "SWAN", "position": 14}
            ]}
        ]
    }"#;

    #[test]
    fn cards_are_ordered_by_position_across_categories() {
        let puzzle = DailyPuzzle::from_json(SAMPLE).unwrap();

        let positions: Vec<_> = puzzle.ordered_cards().iter().map(|c| c.position).collect();

        assert_eq!(positions, (0..16).collect::<Vec<_>>());
        assert_eq!(puzzle.categories[0].title, "FISH");
        assert_eq!(puzzle.print_date.as_deref(), Some("2024-03-03"));
    }

    #[test]
    fn grid_rows_follow_card_positions() {
        let grid = DailyPuzzle::from_json(SAMPLE).unwrap().to_grid().unwrap();

        let texts: Vec<_> = grid.rows().iter().map(|row| row.to_text()).collect();
        assert_eq!(
            texts,
            [
                "PIKE, DRUM, TEAL, WREN",
                "KITE, BASS, HARP, RUST",
                "SAGE, ROOK, SOLE, OBOE",
                "TUBA, PLUM, SWAN, CARP",
            ]
        );
        assert_eq!(grid.tile(1).unwrap().text(), "PIKE");
        assert_eq!(grid.tile(16).unwrap().text(), "CARP");
    }

    #[test]
    fn short_feed_is_rejected() {
        let body = r#"{"categories": [{"cards": [{"content": "ONE", "position": 0}]}]}"#;

        let err = DailyPuzzle::from_json(body).unwrap().to_grid().unwrap_err();

        assert!(matches!(
            err,
            FeedError::Board(PuzzleError::InvalidTileCount {
                expected: 16,
                found: 1
            })
        ));
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = DailyPuzzle::from_json("<html>not json</html>").unwrap_err();

        assert!(matches!(err, FeedError::Decode(_)));
    }
}
