use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

/// Local storage for the last used player name.
pub trait NameStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, name: &str) -> io::Result<()>;
}

/// Keeps the name in a single small file.
#[derive(Debug, Clone)]
pub struct FileNameStore {
    path: PathBuf,
}

impl FileNameStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NameStore for FileNameStore {
    fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let name = contents.trim();
                (!name.is_empty()).then(|| name.to_string())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "failed to read saved name");
                None
            }
        }
    }

    fn save(&self, name: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, name)
    }
}
