use std::{
    borrow::Borrow,
    cmp::Ordering,
    collections::BTreeMap,
    path::{Component, Path},
};

use crate::collector::DOCUMENT_EXTENSIONS;

use super::data::{Entry, YearGroup};

/// Newest first. Dates are compared as plain strings.
pub(crate) fn sort_entry<T: Borrow<Entry>>(a: &T, b: &T) -> Ordering {
    b.borrow().date.cmp(&a.borrow().date)
}

/// Sorts in place; `sort_by` is stable so entries sharing a date keep their
/// input order.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(sort_entry);
}

/// First four characters of `date`, or all of it when shorter.
pub fn year_of(date: &str) -> &str {
    match date.char_indices().nth(4) {
        Some((i, _)) => &date[..i],
        None => date,
    }
}

/// Splits already sorted entries into year groups, newest year first.
pub fn group_by_year(entries: Vec<Entry>) -> Vec<YearGroup> {
    let mut years: BTreeMap<String, Vec<Entry>> = BTreeMap::new();
    for entry in entries {
        years
            .entry(year_of(&entry.date).to_string())
            .or_default()
            .push(entry);
    }

    years
        .into_iter()
        .rev()
        .map(|(year, entries)| YearGroup { year, entries })
        .collect()
}

/// Site link of a document: relative to `docs_root`, without the document
/// extension, with a leading `/`.
pub fn link_for(docs_root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(docs_root).unwrap_or(path);
    let joined = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/");

    let stem = DOCUMENT_EXTENSIONS
        .iter()
        .find_map(|ext| joined.strip_suffix(ext))
        .unwrap_or(&joined);
    format!("/{stem}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, date: &str) -> Entry {
        Entry {
            title: title.to_string(),
            date: date.to_string(),
            link: format!("/blog/{title}"),
        }
    }

    fn titles(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn sorts_newest_first() {
        let mut entries = vec![
            entry("b", "2023-12-20"),
            entry("a", "2024-01-05"),
            entry("c", "2024-03-01"),
        ];
        sort_entries(&mut entries);
        assert_eq!(titles(&entries), ["c", "a", "b"]);
    }

    #[test]
    fn equal_dates_keep_input_order() {
        let mut entries = vec![
            entry("first", "2024-01-01"),
            entry("newer", "2024-02-01"),
            entry("second", "2024-01-01"),
            entry("third", "2024-01-01"),
        ];
        sort_entries(&mut entries);
        assert_eq!(titles(&entries), ["newer", "first", "second", "third"]);
    }

    #[test]
    fn year_is_a_character_prefix() {
        assert_eq!(year_of("2024-01-05"), "2024");
        assert_eq!(year_of("2024"), "2024");
        assert_eq!(year_of("99"), "99");
        assert_eq!(year_of("二〇二四年一月"), "二〇二四");
    }

    #[test]
    fn groups_by_year_descending() {
        let mut entries = vec![
            entry("old", "2022-06-01"),
            entry("a", "2024-01-05"),
            entry("b", "2023-12-20"),
            entry("c", "2024-07-30"),
        ];
        sort_entries(&mut entries);
        let groups = group_by_year(entries);

        let years: Vec<&str> = groups.iter().map(|g| g.year.as_str()).collect();
        assert_eq!(years, ["2024", "2023", "2022"]);
        assert_eq!(titles(&groups[0].entries), ["c", "a"]);
        assert_eq!(titles(&groups[1].entries), ["b"]);
        assert_eq!(titles(&groups[2].entries), ["old"]);
    }

    #[test]
    fn no_entries_no_groups() {
        assert!(group_by_year(vec![]).is_empty());
    }

    #[test]
    fn link_is_relative_to_docs_root() {
        assert_eq!(
            link_for(Path::new("docs"), Path::new("docs/blog/2024/post-one.md")),
            "/blog/2024/post-one"
        );
        assert_eq!(
            link_for(Path::new("docs"), Path::new("docs/blog/a.mdx")),
            "/blog/a"
        );
        assert_eq!(
            link_for(Path::new("docs"), Path::new("docs/blog/v1.2.md")),
            "/blog/v1.2"
        );
    }
}
