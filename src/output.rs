/// Persisting finished documents

use crate::{Document, Result};
use std::path::{Path, PathBuf};

/// Destination for finished documents
pub trait DocumentSink {
    /// Persist `document`, returning where it ended up
    fn persist(&mut self, document: &Document) -> Result<PathBuf>;
}

/// Writes `<dir>/<title>.pdf`, creating `dir` when it does not exist yet
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, document: &Document) -> PathBuf {
        self.dir.join(format!("{}.pdf", document.title))
    }
}

impl DocumentSink for DirectorySink {
    fn persist(&mut self, document: &Document) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(document);
        std::fs::write(&path, document.to_pdf())?;
        log::info!("wrote {}", path.display());
        Ok(path)
    }
}
