use crate::registry::SetRegistry;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Run configuration: the set registry table, the deck-ID offset constant
/// and the directory layout. Loaded from an optional config file plus
/// `DATAPREP_*` environment overrides; anything missing falls back to the
/// production defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepSettings {
    /// Set code -> reserved ID offset.
    pub sets: SetRegistry,
    /// Single run-level offset added on top of a set's offset for deck IDs.
    pub deck_offset: i64,
    pub cards_dir: PathBuf,
    pub decks_dir: PathBuf,
    pub images_dir: PathBuf,
    pub master_catalog: PathBuf,
}

impl Default for PrepSettings {
    fn default() -> Self {
        Self {
            sets: SetRegistry::classic(),
            deck_offset: 900,
            cards_dir: PathBuf::from("Assets/Data/Cards"),
            decks_dir: PathBuf::from("Assets/Data/Decks"),
            images_dir: PathBuf::from("Assets/Data/Cards/CardImages"),
            master_catalog: PathBuf::from(
                "Assets/Resources/Profiles/DeckProfiles/cardProfiles.json",
            ),
        }
    }
}

impl PrepSettings {
    /// Load settings, layering an explicit config file (or a `dataprep.*`
    /// file in the working directory) under environment overrides.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::with_name(path),
            None => File::with_name("dataprep").required(false),
        };
        Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix("DATAPREP"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = PrepSettings::default();
        assert_eq!(settings.deck_offset, 900);
        assert_eq!(settings.sets.lookup("base1").unwrap(), 1000);
        assert_eq!(settings.cards_dir, PathBuf::from("Assets/Data/Cards"));
    }
}
