use crate::battle::rng::StdRandom;
use crate::errors::RosterResult;
use crate::roster::GameData;
use std::path::PathBuf;
use tracing::info;

/// Startup settings for a game session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// RON roster to load instead of the built-in one.
    pub roster_path: Option<PathBuf>,
    /// Fixed seed for reproducible battles.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn load_game_data(&self) -> RosterResult<GameData> {
        match &self.roster_path {
            Some(path) => GameData::load(path),
            None => {
                info!("using built-in roster");
                GameData::builtin()
            }
        }
    }

    pub fn random_source(&self) -> StdRandom {
        match self.seed {
            Some(seed) => {
                info!(seed, "seeded random source");
                StdRandom::seeded(seed)
            }
            None => StdRandom::from_os(),
        }
    }
}
