use std::fmt::Write as _;

use crate::generator::data::YearGroup;

/// Renders the index document.
///
/// `groups` must already be ordered; every group is written as given.
pub fn render_index(site_title: &str, footer: &str, groups: &[YearGroup]) -> String {
    let mut res = String::new();
    let _ = write!(res, "# {site_title}'s Blog\n\n");

    for group in groups {
        let _ = write!(res, "## {}年\n\n", group.year);
        for entry in &group.entries {
            let _ = writeln!(res, "- [{}]({}) - {}", entry.title, entry.link, entry.date);
        }
        res.push('\n');
    }

    let _ = write!(res, "---\n\n*{footer}*\n");
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::data::Entry;

    fn group(year: &str, entries: &[(&str, &str, &str)]) -> YearGroup {
        YearGroup {
            year: year.to_string(),
            entries: entries
                .iter()
                .map(|(title, link, date)| Entry {
                    title: title.to_string(),
                    link: link.to_string(),
                    date: date.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn renders_exact_layout() {
        let groups = vec![
            group(
                "2024",
                &[
                    ("Third", "/blog/c", "2024-06-01"),
                    ("First Post", "/blog/a", "2024-01-05"),
                ],
            ),
            group("2023", &[("Second Post", "/blog/b", "2023-12-20")]),
        ];
        let text = render_index("Colin3191", "built with a tool", &groups);
        assert_eq!(
            text,
            concat!(
                "# Colin3191's Blog\n",
                "\n",
                "## 2024年\n",
                "\n",
                "- [Third](/blog/c) - 2024-06-01\n",
                "- [First Post](/blog/a) - 2024-01-05\n",
                "\n",
                "## 2023年\n",
                "\n",
                "- [Second Post](/blog/b) - 2023-12-20\n",
                "\n",
                "---\n",
                "\n",
                "*built with a tool*\n",
            )
        );
    }

    #[test]
    fn renders_without_entries() {
        let text = render_index("Colin3191", "footer", &[]);
        assert_eq!(text, "# Colin3191's Blog\n\n---\n\n*footer*\n");
    }
}
