use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub const ALPHABETS: &str = "alphabets.json";
pub const VOCABULARY: &str = "vocabulary.json";
pub const LESSONS: &str = "lessons.json";
pub const USER: &str = "user.json";
pub const LIBRARY_TEXT: &str = "library_text.json";
pub const LIBRARY_AUDIO: &str = "library_audio.json";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// What reading a document actually found on disk.
#[derive(Debug)]
pub enum Loaded {
    Found(Value),
    Missing,
    Corrupt(StoreError),
}

impl Loaded {
    /// The stored value, or an empty list when nothing usable was found.
    pub fn or_default(self) -> Value {
        match self {
            Loaded::Found(value) => value,
            Loaded::Missing | Loaded::Corrupt(_) => Value::Array(Vec::new()),
        }
    }
}

/// A directory of independent JSON documents, each read and rewritten whole.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    pub fn load(&self, name: &str) -> Loaded {
        let path = self.path(name);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("{} does not exist yet", path.display());
                return Loaded::Missing;
            }
            Err(e) => {
                log::warn!("Failed to read {}: {}", path.display(), e);
                return Loaded::Corrupt(e.into());
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Loaded::Found(value),
            Err(e) => {
                log::warn!("Invalid JSON in {}: {}", path.display(), e);
                Loaded::Corrupt(e.into())
            }
        }
    }

    /// Never fails: absent, unreadable and malformed documents read as `[]`.
    pub fn read(&self, name: &str) -> Value {
        self.load(name).or_default()
    }

    /// Overwrites the document with pretty-printed JSON, non-ASCII kept as is.
    pub fn save<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<(), StoreError> {
        let body = serde_json::to_string_pretty(value)?;
        fs::write(self.path(name), body)?;
        Ok(())
    }
}
