// src/main.rs

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notion_blog::{
    get_article_from_notion, get_database, BlogSettings, Command, CommandLineInput,
    DatabaseQuery, NotionHttpClient,
};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("notion_blog.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    // stdout carries the JSON, so logs go to stderr
    let console_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("console", Box::new(console_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("console")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Writes `value` as JSON to `output`, or to stdout when none is given.
fn emit_json<T: Serialize>(value: &T, pretty: bool, output: Option<&Path>) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    match output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("✓ Saved to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose).context("Failed to initialize logging")?;

    let settings = BlogSettings::resolve(&cli).context("Invalid configuration")?;
    log::debug!("Using Notion token {}", settings.api_key);
    let client = NotionHttpClient::new(&settings.api_key)?;

    match cli.command {
        Command::Article {
            slug,
            pretty,
            output,
        } => {
            let response = get_article_from_notion(&client, &settings, &slug)
                .await
                .with_context(|| format!("Failed to render article '{}'", slug))?;
            emit_json(&response, pretty, output.as_deref())?;
        }
        Command::List {
            pretty,
            published_only,
            filter,
            sorts,
        } => {
            let query = DatabaseQuery { filter, sorts };
            let mut summaries =
                get_database(&client, &settings.database_id, &settings.site_url, &query)
                    .await
                    .with_context(|| {
                        format!("Failed to query database {}", settings.database_id)
                    })?;
            if published_only {
                summaries.retain(|summary| summary.is_published());
            }
            emit_json(&summaries, pretty, None)?;
        }
    }

    Ok(())
}
