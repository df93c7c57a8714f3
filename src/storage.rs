//! Filesystem access used by the pipeline.
//!
//! Only the collector and the writer go through [`Storage`]; every other stage
//! works on plain values. [`MemoryStorage`] lets tests run the whole pipeline
//! without touching the disk.

use std::{
    cell::RefCell,
    collections::{BTreeMap, BTreeSet},
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::error::FsError;

/// One child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub path: PathBuf,
    pub is_dir: bool,
}

pub trait Storage {
    fn list_entries(&self, dir: &Path) -> Result<Vec<DirEntry>, FsError>;
    fn read_text(&self, path: &Path) -> Result<String, FsError>;
    /// Replaces the whole content of `path`. The parent directory must exist.
    fn write_text(&self, path: &Path, text: &str) -> Result<(), FsError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn list_entries(&self, dir: &Path) -> Result<Vec<DirEntry>, FsError> {
        let list_err = |source| FsError::ListDir {
            path: dir.to_owned(),
            source,
        };

        let mut entries = vec![];
        for entry in std::fs::read_dir(dir).map_err(list_err)? {
            let entry = entry.map_err(list_err)?;
            let meta = entry.metadata().map_err(list_err)?;
            entries.push(DirEntry {
                path: entry.path(),
                is_dir: meta.is_dir(),
            });
        }
        Ok(entries)
    }

    fn read_text(&self, path: &Path) -> Result<String, FsError> {
        std::fs::read_to_string(path).map_err(|source| FsError::ReadFile {
            path: path.to_owned(),
            source,
        })
    }

    fn write_text(&self, path: &Path, text: &str) -> Result<(), FsError> {
        // std::fs::write does not create missing parents, which is what we want
        std::fs::write(path, text).map_err(|source| FsError::WriteFile {
            path: path.to_owned(),
            source,
        })
    }
}

/// In-memory tree of text files.
///
/// A directory exists when it was registered with [`MemoryStorage::with_dir`]
/// or when some file lives below it.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: RefCell<BTreeMap<PathBuf, String>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(self, dir: impl Into<PathBuf>) -> Self {
        self.add_dir(&dir.into());
        self
    }

    pub fn with_file(self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.files.borrow_mut().insert(path, text.into());
        self
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    fn add_dir(&self, dir: &Path) {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in dir.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_owned());
        }
    }

    fn has_dir(&self, dir: &Path) -> bool {
        dir.as_os_str().is_empty() || self.dirs.borrow().contains(dir)
    }
}

fn not_found(what: &str, path: &Path) -> std::io::Error {
    std::io::Error::new(ErrorKind::NotFound, format!("no such {what}: {path:?}"))
}

impl Storage for MemoryStorage {
    fn list_entries(&self, dir: &Path) -> Result<Vec<DirEntry>, FsError> {
        if !self.has_dir(dir) {
            return Err(FsError::ListDir {
                path: dir.to_owned(),
                source: not_found("directory", dir),
            });
        }

        let is_child = |p: &Path| p.parent() == Some(dir);
        let subdirs = self
            .dirs
            .borrow()
            .iter()
            .filter(|p| is_child(p))
            .map(|p| DirEntry {
                path: p.clone(),
                is_dir: true,
            })
            .collect::<Vec<_>>();
        let files = self
            .files
            .borrow()
            .keys()
            .filter(|p| is_child(p))
            .map(|p| DirEntry {
                path: p.clone(),
                is_dir: false,
            })
            .collect::<Vec<_>>();

        Ok(subdirs.into_iter().chain(files).collect())
    }

    fn read_text(&self, path: &Path) -> Result<String, FsError> {
        self.get(path).ok_or_else(|| FsError::ReadFile {
            path: path.to_owned(),
            source: not_found("file", path),
        })
    }

    fn write_text(&self, path: &Path, text: &str) -> Result<(), FsError> {
        let parent = path.parent().unwrap_or(Path::new(""));
        if !self.has_dir(parent) {
            return Err(FsError::WriteFile {
                path: path.to_owned(),
                source: not_found("directory", parent),
            });
        }
        self.files
            .borrow_mut()
            .insert(path.to_owned(), text.to_string());
        Ok(())
    }
}
