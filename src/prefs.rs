use std::{
    fmt, fs,
    io::{BufWriter, Write},
    path::PathBuf,
};

use serde::{Deserialize, Serialize};

const PREFS_VERSION: u64 = 1;

/// Consent copy shown before the flag is first accepted.
pub const DATA_CONSENT_NOTICE: &str = "By using this service, you consent to the collection and \
     analysis of data for improving user experience and services. We collect and process your \
     data to provide personalized legal assistance and enhance our services.";

/// Durable, origin-scoped user preferences. Mutated only by explicit user
/// action; the consent flag is set once and never cleared by the
/// application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub language: String,
    pub country: String,
    #[serde(rename = "dataConsentAccepted", default)]
    pub data_consent_accepted: bool,
}

impl Preferences {
    pub fn new(language: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            country: country.into(),
            data_consent_accepted: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefsError {
    pub message: String,
}

impl fmt::Display for PrefsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for PrefsError {}

fn storage_error(message: impl Into<String>) -> PrefsError {
    PrefsError {
        message: message.into(),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedPreferences {
    version: u64,
    #[serde(flatten)]
    preferences: Preferences,
}

/// File-backed preference store. Writes go through a temp file, fsync, and
/// rename so a crash mid-save never corrupts the previous state.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// `None` when no preferences were ever saved.
    pub fn load(&self) -> Result<Option<Preferences>, PrefsError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(storage_error(format!(
                    "failed to read preferences '{}': {err}",
                    self.path.display()
                )));
            }
        };

        let parsed: PersistedPreferences = serde_json::from_str(&content).map_err(|err| {
            storage_error(format!(
                "failed to parse preferences '{}': {err}",
                self.path.display()
            ))
        })?;
        if parsed.version != PREFS_VERSION {
            return Err(storage_error(format!(
                "unsupported preferences version {} at '{}'",
                parsed.version,
                self.path.display()
            )));
        }

        Ok(Some(parsed.preferences))
    }

    pub fn save(&self, preferences: &Preferences) -> Result<(), PrefsError> {
        let parent = self.path.parent().ok_or_else(|| {
            storage_error(format!(
                "preferences path '{}' has no parent",
                self.path.display()
            ))
        })?;
        fs::create_dir_all(parent).map_err(|err| {
            storage_error(format!(
                "failed to create preferences directory '{}': {err}",
                parent.display()
            ))
        })?;

        let persisted = PersistedPreferences {
            version: PREFS_VERSION,
            preferences: preferences.clone(),
        };

        let tmp_path = self.path.with_extension("tmp");
        let file = fs::File::create(&tmp_path).map_err(|err| {
            storage_error(format!(
                "failed to create temp file '{}': {err}",
                tmp_path.display()
            ))
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &persisted).map_err(|err| {
            storage_error(format!(
                "failed to serialize preferences '{}': {err}",
                tmp_path.display()
            ))
        })?;
        writer.write_all(b"\n").and_then(|_| writer.flush()).map_err(|err| {
            storage_error(format!(
                "failed to flush preferences '{}': {err}",
                tmp_path.display()
            ))
        })?;
        writer
            .into_inner()
            .map_err(|err| {
                storage_error(format!(
                    "failed to finalize preferences '{}': {err}",
                    tmp_path.display()
                ))
            })?
            .sync_all()
            .map_err(|err| {
                storage_error(format!(
                    "failed to sync preferences '{}': {err}",
                    tmp_path.display()
                ))
            })?;

        fs::rename(&tmp_path, &self.path).map_err(|err| {
            storage_error(format!(
                "failed to replace preferences '{}' from '{}': {err}",
                self.path.display(),
                tmp_path.display()
            ))
        })?;

        if let Ok(parent_file) = fs::File::open(parent) {
            let _ = parent_file.sync_all();
        }

        Ok(())
    }
}
