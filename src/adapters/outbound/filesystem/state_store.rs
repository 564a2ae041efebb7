use crate::application::state::LicenseState;
use crate::license_generation::domain::ServerInfoPatch;
use crate::ports::outbound::StateRepository;
use crate::shared::error::LicenseError;
use crate::shared::security::{validate_not_symlink, validate_regular_file};
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Key under which the state record is stored
pub const STORAGE_KEY: &str = "license-store";

#[derive(Serialize, Deserialize, Default)]
struct StoredDocument {
    #[serde(rename = "license-store", default)]
    state: LicenseState,
}

/// JsonStateStore adapter persisting [`LicenseState`] as JSON
///
/// The document holds a single key, `license-store`, mapping to the flat
/// state record. Saves go to a temporary file in the same folder that is
/// then renamed over the target, so a crash never leaves half a file.
pub struct JsonStateStore {
    path: PathBuf,
    server_defaults: ServerInfoPatch,
}

impl JsonStateStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            server_defaults: ServerInfoPatch::default(),
        }
    }

    /// Server values for a state that has never been saved
    pub fn with_server_defaults(mut self, defaults: ServerInfoPatch) -> Self {
        self.server_defaults = defaults;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_error(&self, details: impl Into<String>) -> anyhow::Error {
        LicenseError::StateLoadError {
            path: self.path.clone(),
            details: details.into(),
        }
        .into()
    }
}

impl StateRepository for JsonStateStore {
    fn load(&self) -> Result<LicenseState> {
        if fs::symlink_metadata(&self.path).is_err() {
            return Ok(LicenseState::default().with_server_info(&self.server_defaults));
        }

        validate_regular_file(&self.path, "State file")?;
        let content = fs::read_to_string(&self.path).map_err(|e| self.load_error(e.to_string()))?;
        if content.trim().is_empty() {
            return Ok(LicenseState::default().with_server_info(&self.server_defaults));
        }

        let document: StoredDocument =
            serde_json::from_str(&content).map_err(|e| self.load_error(e.to_string()))?;
        Ok(document.state)
    }

    fn save(&self, state: &LicenseState) -> Result<()> {
        let write_error = |details: String| LicenseError::FileWriteError {
            path: self.path.clone(),
            details,
        };

        if fs::symlink_metadata(&self.path).is_ok() {
            validate_not_symlink(&self.path, "write")?;
        }

        let directory = match self.path.parent() {
            Some(parent) if parent != Path::new("") => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&directory).map_err(|e| write_error(e.to_string()))?;

        let document = StoredDocument {
            state: state.clone(),
        };
        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| write_error(format!("Failed to serialize state: {}", e)))?;

        let mut temp = NamedTempFile::new_in(&directory).map_err(|e| write_error(e.to_string()))?;
        temp.write_all(json.as_bytes())
            .map_err(|e| write_error(e.to_string()))?;
        temp.persist(&self.path)
            .map_err(|e| write_error(e.error.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::state::ThemeMode;
    use crate::license_generation::domain::ProductType;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonStateStore::new(temp_dir.path().join("state.json"))
            .with_server_defaults(ServerInfoPatch {
                isv_port: Some("6000".to_string()),
                ..Default::default()
            });

        let state = store.load().unwrap();
        assert!(state.license.products.is_empty());
        assert_eq!(state.license.server_info.isv_port, "6000");
        assert_eq!(state.license.server_info.communication_port, "5053");
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("state.json");
        let store = JsonStateStore::new(path.clone());

        let state = LicenseState::default()
            .add_product(ProductType::Cinema4D)
            .with_global_notes("hello")
            .toggle_theme();
        store.save(&state).unwrap();

        assert!(path.exists());
        assert_eq!(store.load().unwrap(), state);
    }

    #[test]
    fn test_saved_document_uses_storage_key() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        let store = JsonStateStore::new(path.clone());

        store.save(&LicenseState::default()).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(json[STORAGE_KEY]["serverInfo"].is_object());
        assert_eq!(json[STORAGE_KEY]["previewFontSize"], 0.8);
    }

    #[test]
    fn test_load_partial_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        fs::write(
            &path,
            r#"{"license-store": {"serverInfo": {"hostname": "srv1"}, "themeMode": "dark"}}"#,
        )
        .unwrap();

        let state = JsonStateStore::new(path).load().unwrap();
        assert_eq!(state.license.server_info.hostname, "srv1");
        assert_eq!(state.license.server_info.communication_port, "5053");
        assert_eq!(state.preferences.app_zoom_factor, 1.0);
        assert_eq!(state.preferences.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_load_corrupt_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        fs::write(&path, "{not json").unwrap();

        let result = JsonStateStore::new(path).load();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to load saved state"));
    }
}
