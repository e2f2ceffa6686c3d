//! JSON-file token store: `{ "accessToken": "..." }`.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use forms::{ACCESS_TOKEN_KEY, StorageError, TokenStore};
use serde_json::{Map, Value};

#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn storage_error(path: &Path, error: impl std::fmt::Display) -> StorageError {
    StorageError(format!("{}: {error}", path.display()))
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let map: Map<String, Value> = serde_json::from_str(&raw).ok()?;
        map.get(ACCESS_TOKEN_KEY)?.as_str().map(ToOwned::to_owned)
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| storage_error(parent, e))?;
        }
        let mut map = Map::new();
        map.insert(ACCESS_TOKEN_KEY.to_owned(), Value::String(token.to_owned()));
        let body = serde_json::to_string_pretty(&map).map_err(|e| storage_error(&self.path, e))?;

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&self.path).map_err(|e| storage_error(&self.path, e))?;

        // `mode` only applies on creation; tighten a file left by an older save.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(0o600))
                .map_err(|e| storage_error(&self.path, e))?;
        }
        file.write_all(body.as_bytes()).map_err(|e| storage_error(&self.path, e))
    }

    fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(storage_error(&self.path, e)),
        }
    }
}
