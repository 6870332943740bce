use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::RowId;

/// Rows that a shuffle must leave alone. A row with no entry is included.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionSet {
    rows: HashMap<RowId, bool>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, row: RowId, excluded: bool) {
        self.rows.insert(row, excluded);
    }

    pub fn is_excluded(&self, row: RowId) -> bool {
        self.rows.get(&row).copied().unwrap_or(false)
    }

    pub fn excluded_rows(&self) -> impl Iterator<Item = RowId> + '_ {
        self.rows
            .iter()
            .filter_map(|(&row, &excluded)| excluded.then_some(row))
    }
}

impl FromIterator<(RowId, bool)> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = (RowId, bool)>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
