use std::path::PathBuf;

pub const DEFAULT_DOCS_ROOT: &str = "docs";
pub const DEFAULT_BLOG_DIR: &str = "blog";
pub const DEFAULT_OUTPUT: &str = "index.md";
pub const DEFAULT_SITE_TITLE: &str = "Colin3191";
pub const DEFAULT_FOOTER: &str = "博客使用 [Rspress](https://rspress.dev) 构建 • 持续更新中...";

/// Everything a run needs. Paths in `blog_dir` and `output` are relative to
/// `docs_root`, and links are derived relative to `docs_root` as well.
#[derive(Debug, Clone)]
pub struct Config {
    pub docs_root: PathBuf,
    pub blog_dir: PathBuf,
    pub output: PathBuf,

    pub site_title: String,
    pub footer: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            docs_root: PathBuf::from(DEFAULT_DOCS_ROOT),
            blog_dir: PathBuf::from(DEFAULT_BLOG_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT),
            site_title: DEFAULT_SITE_TITLE.to_string(),
            footer: DEFAULT_FOOTER.to_string(),
        }
    }
}

impl Config {
    /// Directory the collector walks.
    pub fn scan_dir(&self) -> PathBuf {
        self.docs_root.join(&self.blog_dir)
    }

    pub fn output_path(&self) -> PathBuf {
        self.docs_root.join(&self.output)
    }
}
