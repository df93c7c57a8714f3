//! Generates the blog index page of a documentation site.
//!
//! Every document below the blog directory that carries a `title` and a
//! `date` in its header block becomes one bullet line, grouped by year and
//! sorted newest first.

pub mod collector;
pub mod config;
pub mod error;
pub mod generator;
pub mod metadata;
pub mod renderer;
pub mod storage;

pub use config::Config;
pub use error::FsError;
pub use generator::{generate, run, Index, Report};
pub use storage::{FsStorage, MemoryStorage, Storage};
