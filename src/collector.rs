use std::{
    collections::VecDeque,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{error::FsError, storage::Storage};

/// File name suffixes treated as documents.
pub const DOCUMENT_EXTENSIONS: [&str; 2] = [".md", ".mdx"];

pub fn is_document(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .is_some_and(|name| DOCUMENT_EXTENSIONS.iter().any(|ext| name.ends_with(ext)))
}

/// Walks `root` and every directory below it, returning all document files.
///
/// Paths come back sorted so that the result does not depend on the order the
/// platform lists directories in.
pub fn collect_documents(storage: &impl Storage, root: &Path) -> Result<Vec<PathBuf>, FsError> {
    let mut documents = vec![];

    let mut q = VecDeque::new();
    q.push_back(root.to_path_buf());
    while let Some(dir) = q.pop_front() {
        for entry in storage.list_entries(&dir)? {
            if entry.is_dir {
                q.push_back(entry.path);
            } else if is_document(&entry.path) {
                debug!("found document {:?}", entry.path);
                documents.push(entry.path);
            }
        }
    }

    documents.sort();
    Ok(documents)
}
