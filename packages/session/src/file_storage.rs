//! # Filesystem-backed session storage
//!
//! [`FileStorage`] is the [`SessionStorage`] used by native consumers (the CLI). Each
//! key is a file under a base directory, holding the raw value as UTF-8 text, so a
//! session survives process restarts the way `localStorage` survives page reloads.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── token          # bearer token
//! └── userData       # JSON-serialised UserProfile
//! ```
//!
//! On unix every item file is created owner-only (`0600`): the token is a credential
//! and other local users must not read it.
//!
//! Use `dirs::data_dir()`-style platform directories from the consumer to choose a
//! base, e.g. `~/.local/share/safepath/` on Linux.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::storage::SessionStorage;

/// Filesystem-backed SessionStorage for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn item_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }

    fn write_item(&self, key: &str, value: &str) -> std::io::Result<()> {
        let path = self.item_path(key);
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
            options.mode(0o600);
            // mode() only applies on creation; tighten files left by older writes
            if path.exists() {
                std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600))?;
            }
        }
        let mut file = options.open(&path)?;
        file.write_all(value.as_bytes())
    }
}

impl SessionStorage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        match std::fs::read_to_string(self.item_path(key)) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Failed to read session item {}: {}", key, e);
                None
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create session dir {}: {}", self.base.display(), e);
            return;
        }
        if let Err(e) = self.write_item(key, value) {
            tracing::warn!("Failed to write session item {}: {}", key, e);
        }
    }

    fn remove_item(&self, key: &str) {
        match std::fs::remove_file(self.item_path(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove session item {}: {}", key, e),
        }
    }
}
