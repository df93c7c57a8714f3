use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

use chrono::NaiveDate;
use log::{debug, info, warn};
use regex::Regex;

use crate::{
    collector::collect_documents,
    config::Config,
    error::FsError,
    metadata::{parse_header, Metadata},
    renderer::render_index,
    storage::Storage,
};

pub mod data;
pub mod utils;

use data::Entry;
use utils::{group_by_year, link_for, sort_entries};

/// A fully rendered index, not yet written anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    pub text: String,
    pub entry_count: usize,
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub output: PathBuf,
    pub entry_count: usize,
}

static ISO_DATE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("valid date pattern"));

/// Whether `date` starts with a zero-padded `YYYY-MM-DD` calendar date.
/// Anything after those ten characters (a time, say) is not checked.
pub fn is_iso_date(date: &str) -> bool {
    let Some(prefix) = ISO_DATE_PREFIX.find(date) else {
        return false;
    };
    NaiveDate::parse_from_str(prefix.as_str(), "%Y-%m-%d").is_ok()
}

/// Builds the entry for a document, or `None` when `title` or `date` is
/// missing or empty. Such documents are drafts, not errors.
pub fn build_entry(docs_root: &Path, path: &Path, metadata: &Metadata) -> Option<Entry> {
    let title = metadata.get("title").filter(|v| !v.is_empty())?;
    let date = metadata.get("date").filter(|v| !v.is_empty())?;

    if !is_iso_date(date) {
        // still indexed, but ordering against other dates may be off
        warn!("{path:?}: date {date:?} is not in YYYY-MM-DD form");
    }

    Some(Entry {
        title: title.clone(),
        date: date.clone(),
        link: link_for(docs_root, path),
    })
}

/// Collects, parses, sorts and renders everything in memory.
pub fn generate(storage: &impl Storage, config: &Config) -> Result<Index, FsError> {
    let mut entries = vec![];
    for path in collect_documents(storage, &config.scan_dir())? {
        let content = storage.read_text(&path)?;
        let metadata = parse_header(&content);
        match build_entry(&config.docs_root, &path, &metadata) {
            Some(entry) => entries.push(entry),
            None => debug!("skipping {path:?}: no title or date"),
        }
    }

    sort_entries(&mut entries);
    let entry_count = entries.len();
    let groups = group_by_year(entries);

    Ok(Index {
        text: render_index(&config.site_title, &config.footer, &groups),
        entry_count,
    })
}

/// Overwrites `output` with the rendered index.
pub fn write_index(storage: &impl Storage, output: &Path, index: &Index) -> Result<(), FsError> {
    storage.write_text(output, &index.text)?;
    info!("wrote {} entries to {output:?}", index.entry_count);
    Ok(())
}

/// Runs the whole pipeline. Nothing is written unless generation succeeded.
pub fn run(storage: &impl Storage, config: &Config) -> Result<Report, FsError> {
    let index = generate(storage, config)?;
    let output = config.output_path();
    write_index(storage, &output, &index)?;

    Ok(Report {
        output,
        entry_count: index.entry_count,
    })
}
