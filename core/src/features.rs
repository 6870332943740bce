use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Board affordances that can be switched on independently.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Features: u8 {
        /// Double-click a row to lock it with a theme, locked rows skip shuffles.
        const LOCKING       = 1;
        /// Per-row notes field and manual exclude checkbox.
        const NOTES         = 1 << 1;
        /// Let the player pick the lock color instead of using the palette.
        const COLOR_TAGGING = 1 << 2;
    }
}

impl Features {
    pub(crate) fn require(self, feature: Features, name: &'static str) -> crate::Result<()> {
        if self.contains(feature) {
            Ok(())
        } else {
            Err(crate::PuzzleError::FeatureDisabled(name))
        }
    }
}

impl Default for Features {
    fn default() -> Self {
        Self::LOCKING | Self::COLOR_TAGGING
    }
}
