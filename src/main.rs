use std::path::PathBuf;

use anyhow::Context;
use blog_index::{config, Config, FsStorage};
use clap::{command, Arg};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command!()
        .args(&[
            Arg::new("root")
                .long("root")
                .help("Documents root. Links and the output path are relative to it.")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value(config::DEFAULT_DOCS_ROOT),
            Arg::new("blog_dir")
                .long("blog-dir")
                .help("Directory under the root that holds the posts")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value(config::DEFAULT_BLOG_DIR),
            Arg::new("output")
                .long("output")
                .help("Index file under the root. Existing content will be overwritten.")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value(config::DEFAULT_OUTPUT),
            Arg::new("site_title")
                .long("site-title")
                .help("Name shown in the index heading")
                .default_value(config::DEFAULT_SITE_TITLE),
        ])
        .get_matches();

    let config = Config {
        docs_root: matches.get_one::<PathBuf>("root").unwrap().to_owned(),
        blog_dir: matches.get_one::<PathBuf>("blog_dir").unwrap().to_owned(),
        output: matches.get_one::<PathBuf>("output").unwrap().to_owned(),
        site_title: matches.get_one::<String>("site_title").unwrap().to_owned(),
        ..Config::default()
    };

    let report = blog_index::run(&FsStorage, &config)
        .with_context(|| format!("while generating {:?}", config.output_path()))?;

    let name = report
        .output
        .file_name()
        .unwrap_or(report.output.as_os_str())
        .to_string_lossy();
    println!("Generated {} with {} posts.", name, report.entry_count);

    Ok(())
}
