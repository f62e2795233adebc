use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::document::GardenDocument;
use crate::error::{GardenError, Result};

/// Default backing file, resolved against the working directory.
pub const DEFAULT_DATA_FILE: &str = "my_garden_data.json";

/// Owns the journal's backing file. The store only loads and saves whole
/// documents; appends live on [`GardenDocument`] and the caller saves
/// after every mutation. One process, one user, one file — two stores
/// pointed at the same path will clobber each other's last save.
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// A store over the given backing file. The file does not have to
    /// exist yet; [`Store::load`] treats an absent file as an empty
    /// journal.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Store { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole document. An absent file yields a fresh document
    /// with three empty collections; a present-but-malformed file is
    /// fatal, with no recovery.
    pub fn load(&self) -> Result<GardenDocument> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no journal at {}, starting empty", self.path.display());
                return Ok(GardenDocument::default());
            }
            Err(e) => return Err(e.into()),
        };

        let document =
            serde_json::from_str(&text).map_err(|source| GardenError::StartupLoad {
                path: self.path.clone(),
                source,
            })?;
        Ok(document)
    }

    /// Serialize the entire document and replace the backing file.
    /// Writes to a temp file in the target's directory and renames over
    /// the old file, so a crash mid-save leaves the previous journal
    /// intact. The in-memory document is never rolled back on failure.
    pub fn save(&self, document: &GardenDocument) -> Result<()> {
        let json = serde_json::to_string_pretty(document)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.persist_err(e))?;
        tmp.write_all(json.as_bytes())
            .map_err(|e| self.persist_err(e))?;
        tmp.persist(&self.path)
            .map_err(|e| self.persist_err(e.error))?;

        log::debug!(
            "saved {} zones, {} plants, {} observations to {}",
            document.zones.len(),
            document.plants.len(),
            document.observations_log.len(),
            self.path.display()
        );
        Ok(())
    }

    fn persist_err(&self, source: std::io::Error) -> GardenError {
        GardenError::Persist {
            path: self.path.clone(),
            source,
        }
    }
}
