use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FsError {
    #[error("cannot list directory {path:?}: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot read {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write {path:?}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            FsError::ListDir { path, .. }
            | FsError::ReadFile { path, .. }
            | FsError::WriteFile { path, .. } => path,
        }
    }
}
