// src/config.rs
use crate::constants::DEFAULT_SITE_URL;
use crate::error::AppError;
use crate::types::{ApiKey, DatabaseId, Slug, ValidatedUrl};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const TOKEN_ENV: &str = "NOTION_TOKEN";
pub const DATABASE_ENV: &str = "NOTION_DATABASE_ID";
pub const SITE_URL_ENV: &str = "BLOG_SITE_URL";

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Public site URL used to build permalinks (overrides BLOG_SITE_URL)
    #[arg(long, global = true)]
    pub site_url: Option<String>,

    /// Notion database holding the articles (overrides NOTION_DATABASE_ID)
    #[arg(long, global = true)]
    pub database_id: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render one article as JSON
    Article {
        /// The article's slug, as stored in the database's Slug property
        slug: Slug,

        /// Pretty-print the JSON output
        #[arg(long, default_value_t = false)]
        pretty: bool,

        /// Write the JSON to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List article summaries as JSON
    List {
        /// Pretty-print the JSON output
        #[arg(long, default_value_t = false)]
        pretty: bool,

        /// Only list articles whose Published box is checked
        #[arg(long, default_value_t = false)]
        published_only: bool,

        /// Notion filter object for the database query, as JSON
        #[arg(long, value_parser = parse_json)]
        filter: Option<serde_json::Value>,

        /// Notion sort object, as JSON; repeat for several sort keys
        #[arg(long = "sort", value_parser = parse_json)]
        sorts: Vec<serde_json::Value>,
    },
}

fn parse_json(input: &str) -> Result<serde_json::Value, String> {
    serde_json::from_str(input).map_err(|e| format!("invalid JSON: {}", e))
}

/// Resolved settings for talking to the blog database.
#[derive(Debug, Clone)]
pub struct BlogSettings {
    pub api_key: ApiKey,
    pub database_id: DatabaseId,
    pub site_url: ValidatedUrl,
}

impl BlogSettings {
    /// Resolves settings from CLI input and the process environment.
    pub fn resolve(cli: &CommandLineInput) -> Result<Self, AppError> {
        Self::resolve_with(cli, |key| std::env::var(key).ok())
    }

    /// Resolves settings with `lookup` standing in for the environment.
    ///
    /// CLI values win over the environment; the site URL falls back to
    /// [`DEFAULT_SITE_URL`].
    pub fn resolve_with<F>(cli: &CommandLineInput, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(TOKEN_ENV).ok_or_else(|| {
            AppError::MissingConfiguration(format!("{} environment variable not set", TOKEN_ENV))
        })?;
        let api_key = ApiKey::new(token)?;

        let database_input = cli
            .database_id
            .clone()
            .or_else(|| lookup(DATABASE_ENV))
            .ok_or_else(|| {
                AppError::MissingConfiguration(format!(
                    "{} not set and no --database-id given",
                    DATABASE_ENV
                ))
            })?;
        let database_id = DatabaseId::parse(&database_input)?;

        let site_input = cli
            .site_url
            .clone()
            .or_else(|| lookup(SITE_URL_ENV))
            .unwrap_or_else(|| DEFAULT_SITE_URL.to_string());
        let site_url = ValidatedUrl::parse(&site_input)?;

        Ok(BlogSettings {
            api_key,
            database_id,
            site_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const TOKEN: &str = "secret_abcdefghijklmnopqrstuvwxyz";
    const DATABASE: &str = "a1b2c3d4e5f67890abcdef1234567890";

    fn cli(args: &[&str]) -> CommandLineInput {
        let mut argv = vec!["notion-blog"];
        argv.extend_from_slice(args);
        CommandLineInput::parse_from(argv)
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_resolve_from_environment() {
        let settings = BlogSettings::resolve_with(
            &cli(&["list"]),
            env(&[(TOKEN_ENV, TOKEN), (DATABASE_ENV, DATABASE)]),
        )
        .unwrap();

        assert_eq!(settings.database_id.as_str(), DATABASE);
        assert_eq!(settings.site_url.base(), DEFAULT_SITE_URL);
    }

    #[test]
    fn test_cli_overrides_environment() {
        let settings = BlogSettings::resolve_with(
            &cli(&[
                "--site-url",
                "https://blog.example.com/",
                "--database-id",
                "ffffffffffffffffffffffffffffffff",
                "article",
                "hello",
            ]),
            env(&[
                (TOKEN_ENV, TOKEN),
                (DATABASE_ENV, DATABASE),
                (SITE_URL_ENV, "https://ignored.example.com"),
            ]),
        )
        .unwrap();

        assert_eq!(settings.database_id.as_str(), "ffffffffffffffffffffffffffffffff");
        assert_eq!(settings.site_url.base(), "https://blog.example.com");
    }

    #[test]
    fn test_missing_token() {
        let result = BlogSettings::resolve_with(&cli(&["list"]), env(&[(DATABASE_ENV, DATABASE)]));
        assert!(matches!(result, Err(AppError::MissingConfiguration(_))));
    }

    #[test]
    fn test_missing_database() {
        let result = BlogSettings::resolve_with(&cli(&["list"]), env(&[(TOKEN_ENV, TOKEN)]));
        assert!(matches!(result, Err(AppError::MissingConfiguration(_))));
    }

    #[test]
    fn test_invalid_values_are_validation_errors() {
        let result = BlogSettings::resolve_with(
            &cli(&["list"]),
            env(&[(TOKEN_ENV, "short"), (DATABASE_ENV, DATABASE)]),
        );
        assert!(matches!(result, Err(AppError::ValidationError(_))));

        let result = BlogSettings::resolve_with(
            &cli(&["--site-url", "ftp://example.com", "list"]),
            env(&[(TOKEN_ENV, TOKEN), (DATABASE_ENV, DATABASE)]),
        );
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_article_command_parses_slug() {
        match cli(&["article", "my-post", "--pretty"]).command {
            Command::Article { slug, pretty, output } => {
                assert_eq!(slug.as_str(), "my-post");
                assert!(pretty);
                assert!(output.is_none());
            }
            other => panic!("Expected article command, got {:?}", other),
        }
    }

    #[test]
    fn test_list_command_parses_query_options() {
        match cli(&[
            "list",
            "--filter",
            r#"{"property":"Published","checkbox":{"equals":true}}"#,
            "--sort",
            r#"{"property":"Date","direction":"descending"}"#,
            "--sort",
            r#"{"timestamp":"created_time","direction":"ascending"}"#,
        ])
        .command
        {
            Command::List { filter, sorts, .. } => {
                assert_eq!(filter.unwrap()["checkbox"]["equals"], true);
                assert_eq!(sorts.len(), 2);
                assert_eq!(sorts[0]["property"], "Date");
            }
            other => panic!("Expected list command, got {:?}", other),
        }

        let rejected = CommandLineInput::try_parse_from(["notion-blog", "list", "--filter", "{oops"]);
        assert!(rejected.is_err());
    }
}
