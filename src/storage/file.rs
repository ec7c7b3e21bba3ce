use super::{Storage, StorageError, StorageResult};
use log::*;
use std::{
    fs,
    io::{self, ErrorKind, Write},
    path::{Path, PathBuf},
};

const FILE_EXTENSION: &str = "json";
const TEMP_EXTENSION: &str = "json.tmp";

/// Stores each key as `<key>.json` inside a data directory.
///
#[derive(Clone, Debug)]
pub struct FileStorage {
    dir_path: PathBuf,
}

impl FileStorage {
    /// Return a new instance rooted at the given directory, creating it if
    /// it does not exist yet.
    ///
    pub fn new(dir_path: impl AsRef<Path>) -> StorageResult<Self> {
        let dir_path = dir_path.as_ref().to_path_buf();
        if !dir_path.exists() {
            debug!("Creating storage directory {}...", dir_path.display());
            fs::create_dir_all(&dir_path).map_err(|e| StorageError::CreateDirectory {
                path: dir_path.clone(),
                source: e,
            })?;
        }
        Ok(FileStorage { dir_path })
    }

    /// Returns the path of the file holding the given key.
    ///
    pub fn file_path(&self, key: &str) -> PathBuf {
        self.dir_path.join(format!("{}.{}", key, FILE_EXTENSION))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let file_path = self.file_path(key);
        match fs::read_to_string(&file_path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read {
                path: file_path,
                source: e,
            }),
        }
    }

    /// Write to a sibling temporary file first and rename it over the target,
    /// so readers only ever see a complete value. The temporary file is
    /// removed again if any step fails.
    ///
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let file_path = self.file_path(key);
        let temp_path = self.dir_path.join(format!("{}.{}", key, TEMP_EXTENSION));

        let result = write_temp(&temp_path, value)
            .map_err(|e| write_error(&temp_path, e))
            .and_then(|()| {
                fs::rename(&temp_path, &file_path).map_err(|e| write_error(&file_path, e))
            });
        if let Err(e) = result {
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                if cleanup.kind() != ErrorKind::NotFound {
                    warn!("Failed to remove {}: {}", temp_path.display(), cleanup);
                }
            }
            return Err(e);
        }

        trace!("Wrote {} bytes to {}", value.len(), file_path.display());
        Ok(())
    }
}

fn write_temp(temp_path: &Path, value: &str) -> io::Result<()> {
    let mut file = fs::File::create(temp_path)?;
    file.write_all(value.as_bytes())?;
    file.sync_all()
}

fn write_error(path: &Path, source: io::Error) -> StorageError {
    StorageError::Write {
        path: path.to_path_buf(),
        source,
    }
}
