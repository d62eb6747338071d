use std::path::Path;

use crate::engine::GameConfig;
use crate::error::ConfigError;
use crate::game::Player;

/// Who makes the first move. Red always opens, so this decides the
/// computer's colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    Human,
    Computer,
}

/// Settings for a single game.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Winning run length N
    pub connect: usize,
    /// Search depth in plies
    pub depth: u32,
    pub first: FirstPlayer,
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            connect: 4,
            depth: 5,
            first: FirstPlayer::Human,
        }
    }
}

impl GameSettings {
    /// Colour the computer plays with these settings.
    pub fn computer(&self) -> Player {
        match self.first {
            FirstPlayer::Human => Player::Yellow,
            FirstPlayer::Computer => Player::Red,
        }
    }

    /// Validate and convert into the engine's immutable config.
    pub fn to_game_config(&self) -> Result<GameConfig, ConfigError> {
        GameConfig::new(self.connect, self.depth, self.computer())
    }
}

/// Settings for the headless engine-vs-random benchmark.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HeadlessSettings {
    /// Games played with the engine on each colour
    pub games: usize,
    /// Seed for the random opponent; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for HeadlessSettings {
    fn default() -> Self {
        HeadlessSettings {
            games: 20,
            seed: None,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameSettings,
    pub headless: HeadlessSettings,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.game.to_game_config()?;
        if self.headless.games == 0 {
            return Err(ConfigError::InvalidConfig(
                "headless.games must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.game.connect, 4);
        assert_eq!(config.game.depth, 5);
        assert_eq!(config.game.computer(), Player::Yellow);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[game]
connect = 5
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.connect, 5);
        // Other fields should be defaults
        assert_eq!(config.game.depth, 5);
        assert_eq!(config.game.first, FirstPlayer::Human);
        assert_eq!(config.headless.games, 20);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.game.connect, default.game.connect);
        assert_eq!(config.headless.games, default.headless.games);
    }

    #[test]
    fn test_first_player_parses_lowercase() {
        let config: AppConfig = toml::from_str("[game]\nfirst = \"computer\"\n").unwrap();
        assert_eq!(config.game.first, FirstPlayer::Computer);
        assert_eq!(config.game.computer(), Player::Red);
        assert!(toml::from_str::<AppConfig>("[game]\nfirst = \"nobody\"\n").is_err());
    }

    #[test]
    fn test_validation_rejects_connect_out_of_range() {
        for connect in [2, 7] {
            let mut config = AppConfig::default();
            config.game.connect = connect;
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_validation_rejects_zero_depth() {
        let mut config = AppConfig::default();
        config.game.depth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_games() {
        let mut config = AppConfig::default();
        config.headless.games = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_to_game_config() {
        let settings = GameSettings {
            connect: 3,
            depth: 2,
            first: FirstPlayer::Computer,
        };
        let config = settings.to_game_config().unwrap();
        assert_eq!(config.connect(), 3);
        assert_eq!(config.depth(), 2);
        assert_eq!(config.computer(), Player::Red);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.game.connect, 4);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect_n.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[game]
connect = 6
depth = 3
first = "computer"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.game.connect, 6);
        assert_eq!(config.game.depth, 3);
        // Others are defaults
        assert_eq!(config.headless.games, 20);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect_n.toml");
        std::fs::write(&path, "[game]\nconnect = 9\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::FileRead { .. })
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
