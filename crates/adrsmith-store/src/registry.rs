// ABOUTME: File-backed ADR registry over a single flat directory of ADR-*.md files.
// ABOUTME: Saves write verbatim and overwrite silently; listings re-read the directory every call.

use std::fs;
use std::path::{Path, PathBuf};

use adrsmith_core::AdrId;
use thiserror::Error;

/// Errors that can occur during registry operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// One stored ADR read back from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAdr {
    pub adr_id: AdrId,
    pub file_name: String,
    pub content: String,
}

/// Registry of rendered ADRs, backed by a single flat directory.
///
/// The root path is injected at construction; nothing here depends on the
/// process working directory. Saves overwrite an existing file of the same
/// name without conflict detection, so identifier granularity is the only
/// collision guard.
pub struct AdrStore {
    root: PathBuf,
}

impl AdrStore {
    /// Open the registry at the given root, creating the directory (and any
    /// missing parents) if absent.
    pub fn open(root: &Path) -> Result<Self, StoreError> {
        fs::create_dir_all(root)?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// The registry's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `content` verbatim to `<root>/ADR-<id>.md` and return the path.
    /// An existing file of the same name is silently overwritten.
    pub fn save(&self, adr_id: &AdrId, content: &str) -> Result<PathBuf, StoreError> {
        let path = self.root.join(adr_id.file_name());
        fs::write(&path, content)?;
        tracing::debug!("saved ADR {} to {}", adr_id, path.display());
        Ok(path)
    }

    /// Enumerate all stored ADRs, newest-first for timestamped identifiers.
    ///
    /// Re-reads the directory and every matching file's full content on each
    /// call. Entries are ordered by file name descending; files that do not
    /// match the `ADR-*.md` pattern are ignored.
    pub fn list(&self) -> Result<Vec<StoredAdr>, StoreError> {
        let mut adrs = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let file_name = entry.file_name().to_string_lossy().to_string();
            let Some(adr_id) = AdrId::from_file_name(&file_name) else {
                continue;
            };

            let content = fs::read_to_string(entry.path())?;
            adrs.push(StoredAdr {
                adr_id,
                file_name,
                content,
            });
        }

        adrs.sort_by(|a, b| b.file_name.cmp(&a.file_name));
        Ok(adrs)
    }

    /// Read back one stored ADR by file name. Returns Ok(None) when the name
    /// does not match the registry pattern or the file does not exist.
    pub fn read(&self, file_name: &str) -> Result<Option<StoredAdr>, StoreError> {
        let Some(adr_id) = AdrId::from_file_name(file_name) else {
            return Ok(None);
        };

        let path = self.root.join(&adr_id.file_name());
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(StoredAdr {
                adr_id,
                file_name: file_name.to_string(),
                content,
            })),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
