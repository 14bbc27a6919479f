use std::path::{Path, PathBuf};
use std::{error::Error, fmt, fs, io};

use serde::{Deserialize, Serialize};

use crate::engine::SCRIPTED_MACHINE;

/// File name used when the caller does not supply a config path.
pub const DEFAULT_FILE_NAME: &str = "steno_taskbar.json";

/// Persisted shell settings.
///
/// The shell only interprets what it needs at engine construction time;
/// everything else in the file belongs to collaborators and survives a
/// load/save round trip untouched by virtue of being absent here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Which stenotype machine to read strokes from.
    pub machine_type: String,
    /// Optional dictionary file; must exist when set.
    pub dictionary_path: Option<PathBuf>,
    /// Whether the engine should log raw strokes to the raw display.
    pub log_strokes: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            machine_type: SCRIPTED_MACHINE.to_string(),
            dictionary_path: None,
            log_strokes: true,
        }
    }
}

/// Resolves the settings path for a caller-supplied argument.
#[must_use]
pub fn settings_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_NAME))
}

/// Loads settings from `path`; a missing file yields the defaults.
pub fn load(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(path).map_err(SettingsError::Io)?;
    serde_json::from_str(&raw).map_err(SettingsError::Parse)
}

/// Saves settings to `path`, creating parent directories as needed.
pub fn save(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(SettingsError::Io)?;
    }

    let raw = serde_json::to_string_pretty(settings).map_err(SettingsError::Parse)?;
    fs::write(path, raw).map_err(SettingsError::Io)
}

#[derive(Debug)]
pub enum SettingsError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(error) => write!(f, "settings file error: {error}"),
            Self::Parse(error) => write!(f, "settings file is not valid JSON: {error}"),
        }
    }
}

impl Error for SettingsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(error) => Some(error),
            Self::Parse(error) => Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load(&dir.path().join("nope.json")).unwrap();

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn settings_survive_a_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            machine_type: "scripted".into(),
            dictionary_path: Some(PathBuf::from("main.json")),
            log_strokes: false,
        };

        save(&path, &settings).unwrap();
        assert_eq!(load(&path).unwrap(), settings);
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"machine_type": "scripted", "translator": {}}"#).unwrap();

        let settings = load(&path).unwrap();
        assert_eq!(settings.machine_type, "scripted");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();

        assert!(matches!(load(&path), Err(SettingsError::Parse(_))));
    }

    #[test]
    fn explicit_path_wins_over_default() {
        let explicit = PathBuf::from("/tmp/custom.json");
        assert_eq!(settings_path(Some(&explicit)), explicit);
        assert_eq!(settings_path(None), PathBuf::from(DEFAULT_FILE_NAME));
    }
}
