use serde::Deserialize;
use tracing::warn;

use std::path::Path;

use crate::{error::ConfigError, solver::UNBOUNDED_DEPTH, tic_tac_toe};

/// How the computer plays one game
#[derive(Debug, Clone, PartialEq)]
pub struct GameSettings {
    /// Moves searched ahead of each candidate action
    pub depth: u32,
    /// Chance that a computer move is the optimal one rather than a random one
    pub optimal_probability: f64,
}

impl GameSettings {
    /// Tic-tac-toe is searched to the end of the game
    pub fn tic_tac_toe() -> Self {
        Self {
            depth: UNBOUNDED_DEPTH,
            optimal_probability: 0.4,
        }
    }

    pub fn connect_four() -> Self {
        Self {
            depth: 4,
            optimal_probability: 0.4,
        }
    }

    fn validate(&self, game: &str) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::Validation(format!(
                "{}.depth must be > 0",
                game
            )));
        }
        if !(0.0..=1.0).contains(&self.optimal_probability) {
            return Err(ConfigError::Validation(format!(
                "{}.optimal_probability must be in [0, 1]",
                game
            )));
        }
        Ok(())
    }
}

/// One `[game]` table as written in the file; missing keys fall back to
/// that game's own defaults
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SettingsTable {
    depth: Option<u32>,
    optimal_probability: Option<f64>,
}

impl SettingsTable {
    fn over(self, defaults: GameSettings) -> GameSettings {
        GameSettings {
            depth: self.depth.unwrap_or(defaults.depth),
            optimal_probability: self
                .optimal_probability
                .unwrap_or(defaults.optimal_probability),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    tic_tac_toe: SettingsTable,
    connect_four: SettingsTable,
}

impl From<ConfigFile> for EngineConfig {
    fn from(file: ConfigFile) -> Self {
        Self {
            tic_tac_toe: file.tic_tac_toe.over(GameSettings::tic_tac_toe()),
            connect_four: file.connect_four.over(GameSettings::connect_four()),
        }
    }
}

/// Top-level configuration, loadable from TOML
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "ConfigFile")]
pub struct EngineConfig {
    pub tic_tac_toe: GameSettings,
    pub connect_four: GameSettings,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tic_tac_toe: GameSettings::tic_tac_toe(),
            connect_four: GameSettings::connect_four(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tic_tac_toe.validate("tic_tac_toe")?;
        self.connect_four.validate("connect_four")?;

        // the exact evaluator only scores finished boards
        let cells = (tic_tac_toe::SIZE * tic_tac_toe::SIZE) as u32;
        if self.tic_tac_toe.depth < cells {
            return Err(ConfigError::Validation(format!(
                "tic_tac_toe.depth must be at least {}",
                cells
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Game, TicTacToeRules};

    #[test]
    fn empty_file_gives_defaults() -> anyhow::Result<()> {
        let config = EngineConfig::from_toml("")?;

        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.tic_tac_toe.depth, UNBOUNDED_DEPTH);
        assert_eq!(config.connect_four.depth, 4);
        Ok(())
    }

    #[test]
    fn partial_tables_keep_other_defaults() -> anyhow::Result<()> {
        let config = EngineConfig::from_toml("[connect_four]\ndepth = 2\n")?;

        assert_eq!(config.connect_four.depth, 2);
        assert_eq!(config.connect_four.optimal_probability, 0.4);
        assert_eq!(config.tic_tac_toe, GameSettings::tic_tac_toe());
        Ok(())
    }

    #[test]
    fn partial_table_keeps_connect_four_depth() -> anyhow::Result<()> {
        let config = EngineConfig::from_toml("[connect_four]\noptimal_probability = 0.8\n")?;

        assert_eq!(config.connect_four.depth, 4);
        assert_eq!(config.connect_four.optimal_probability, 0.8);
        assert_eq!(config.tic_tac_toe, GameSettings::tic_tac_toe());
        Ok(())
    }

    #[test]
    fn rejects_tic_tac_toe_depth_shorter_than_a_game() {
        let err = EngineConfig::from_toml("[tic_tac_toe]\ndepth = 2\n").unwrap_err();

        assert_eq!(
            err.to_string(),
            "config validation error: tic_tac_toe.depth must be at least 9"
        );
    }

    #[test]
    fn tic_tac_toe_depth_covering_the_board_plays() -> anyhow::Result<()> {
        let config = EngineConfig::from_toml("[tic_tac_toe]\ndepth = 9\n")?;
        let mut game = Game::new(TicTacToeRules::new(), config.tic_tac_toe.depth);

        game.play_optimal()?;
        assert_eq!(game.state().occupied(), 1);
        Ok(())
    }

    #[test]
    fn rejects_zero_depth() {
        let err = EngineConfig::from_toml("[tic_tac_toe]\ndepth = 0\n").unwrap_err();

        assert_eq!(
            err.to_string(),
            "config validation error: tic_tac_toe.depth must be > 0"
        );
    }

    #[test]
    fn rejects_probability_out_of_range() {
        let err =
            EngineConfig::from_toml("[connect_four]\noptimal_probability = 1.5\n").unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = EngineConfig::from_toml("[connect_four\n").unwrap_err();

        assert!(matches!(err, ConfigError::TomlParse(_)));
    }
}
