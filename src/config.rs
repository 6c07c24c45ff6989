use std::path::Path;

use crate::error::ConfigError;

/// Settings for the terminal front end, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub glyphs: Glyphs,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Print row/column rulers around the board.
    pub coordinates: bool,
    /// Mark the legal targets of the selected piece.
    pub highlight: bool,
    /// Print a JSON snapshot of the game after every accepted move.
    pub json: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            coordinates: true,
            highlight: true,
            json: false,
        }
    }
}

/// Characters used by the text renderer.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Glyphs {
    pub red_man: char,
    pub red_king: char,
    pub black_man: char,
    pub black_king: char,
    pub dark_empty: char,
    pub light_empty: char,
    pub highlight: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Glyphs {
            red_man: 'r',
            red_king: 'R',
            black_man: 'b',
            black_king: 'B',
            dark_empty: '.',
            light_empty: ' ',
            highlight: '*',
        }
    }
}

impl Glyphs {
    fn named(&self) -> [(&'static str, char); 7] {
        [
            ("red_man", self.red_man),
            ("red_king", self.red_king),
            ("black_man", self.black_man),
            ("black_king", self.black_king),
            ("dark_empty", self.dark_empty),
            ("light_empty", self.light_empty),
            ("highlight", self.highlight),
        ]
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            display: DisplayConfig::default(),
            glyphs: Glyphs::default(),
        }
    }
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
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let named = self.glyphs.named();

        // The light-square filler is the only glyph allowed to be blank.
        for (name, c) in named.iter().filter(|(name, _)| *name != "light_empty") {
            if c.is_whitespace() {
                return Err(ConfigError::Validation(format!(
                    "glyphs.{name} must not be whitespace"
                )));
            }
        }

        for (i, (a_name, a)) in named.iter().enumerate() {
            if let Some((b_name, _)) = named[i + 1..].iter().find(|(_, b)| b == a) {
                return Err(ConfigError::Validation(format!(
                    "glyphs.{a_name} and glyphs.{b_name} must differ"
                )));
            }
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
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
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[display]
json = true
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert!(config.display.json);
        assert!(config.display.highlight);
        assert_eq!(config.glyphs, Glyphs::default());
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_validation_rejects_duplicate_glyphs() {
        let mut config = AppConfig::default();
        config.glyphs.red_king = config.glyphs.black_king;
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: glyphs.red_king and glyphs.black_king must differ"
        );
    }

    #[test]
    fn test_validation_rejects_blank_piece_glyph() {
        let mut config = AppConfig::default();
        config.glyphs.red_man = ' ';
        config.glyphs.light_empty = '#';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_checkers.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("checkers.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[display]
coordinates = false

[glyphs]
red_man = "o"
red_king = "O"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert!(!config.display.coordinates);
        assert_eq!(config.glyphs.red_man, 'o');
        assert_eq!(config.glyphs.red_king, 'O');
        assert_eq!(config.glyphs.black_man, 'b');
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[glyphs]\nblack_man = \"r\"\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let text = AppConfig::default_toml().unwrap();
        let config: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
