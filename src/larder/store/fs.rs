use super::DataStore;
use crate::error::{LarderError, Result};
use crate::migrate::migrate_collection;
use crate::model::Ingredient;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const DATA_FILENAME: &str = "ingredients.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn write_collection(&self, ingredients: &[Ingredient]) -> Result<()> {
        self.ensure_dir()?;

        let data_file = self.data_file();
        let staging = data_file.with_extension("json.tmp");
        let content =
            serde_json::to_string_pretty(ingredients).map_err(LarderError::Serialization)?;

        fs::write(&staging, content).map_err(LarderError::Io)?;
        fs::rename(&staging, &data_file).map_err(LarderError::Io)?;

        info!(
            path = %data_file.display(),
            count = ingredients.len(),
            "collection saved"
        );
        Ok(())
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(LarderError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_all(&self) -> Result<Vec<Ingredient>> {
        let data_file = self.data_file();
        if !data_file.exists() {
            debug!(path = %data_file.display(), "no collection yet");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&data_file).map_err(LarderError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let raw: serde_json::Value =
            serde_json::from_str(&content).map_err(LarderError::Serialization)?;
        let migration = migrate_collection(raw, Utc::now().date_naive())?;

        if migration.upgraded > 0 {
            // A failed write-back leaves the old file; the upgrade is redone next load.
            match self.write_collection(&migration.ingredients) {
                Ok(()) => info!(upgraded = migration.upgraded, "upgraded stored records"),
                Err(e) => warn!(error = %e, "could not write upgraded records back"),
            }
        }
        Ok(migration.ingredients)
    }

    fn save_all(&mut self, ingredients: &[Ingredient]) -> Result<()> {
        self.write_collection(ingredients)
    }
}
