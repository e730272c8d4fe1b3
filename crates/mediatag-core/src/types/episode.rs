use std::fmt;

use serde::{Deserialize, Serialize};

/// Season and episode numbers found in a release name.
///
/// Every field uses `0` for "unknown". `episode_start` and `episode_end`
/// are reserved for episode ranges; no standard rule fills them yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Episode {
    /// Season number.
    pub season: u32,
    /// Episode number.
    pub episode: u32,
    /// First episode of a range.
    pub episode_start: u32,
    /// Last episode of a range.
    pub episode_end: u32,
}

impl Episode {
    /// Creates an episode record with the given season and episode.
    #[must_use]
    pub fn new(season: u32, episode: u32) -> Self {
        Self {
            season,
            episode,
            ..Self::default()
        }
    }

    /// Returns `true` if either the season or the episode was found.
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.season != 0 || self.episode != 0
    }
}

impl fmt::Display for Episode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.season, self.episode) {
            (0, 0) => write!(f, "unknown"),
            (0, ep) => write!(f, "E{ep:02}"),
            (season, 0) => write!(f, "S{season:02}"),
            (season, ep) => write!(f, "S{season:02}E{ep:02}"),
        }
    }
}
