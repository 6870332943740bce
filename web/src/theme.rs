use crate::utils::StorageKey;
use serde::{Deserialize, Serialize};

/// Color scheme of the page, kept by the [`App`](crate::app::App) and saved between visits.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub(crate) const fn class(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub(crate) const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl StorageKey for Theme {
    const KEY: &'static str = "chabon:theme";
}
