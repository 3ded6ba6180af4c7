// src/articles/mod.rs
//! The blog's two entry points: listing articles and rendering one by slug.

mod database;
mod expand;

pub use database::{collect_articles, summarize_page};
pub use expand::{expand_children, splice_children};

use crate::api::{DatabaseQuery, NotionRepository};
use crate::config::BlogSettings;
use crate::error::AppError;
use crate::formatting::render_article;
use crate::model::{ArticleResponse, ArticleSummary, RenderedArticle};
use crate::types::{DatabaseId, Slug, ValidatedUrl};

/// Queries the blog database and maps every returned row to a summary.
///
/// `query` is passed to Notion unchanged, so filtering and ordering happen
/// server side.
pub async fn get_database(
    repo: &dyn NotionRepository,
    database_id: &DatabaseId,
    site_url: &ValidatedUrl,
    query: &DatabaseQuery,
) -> Result<Vec<ArticleSummary>, AppError> {
    let pages = repo.query_database(database_id.as_notion_id(), query).await?;
    log::info!("Database {} returned {} rows", database_id, pages.len());
    Ok(collect_articles(&pages, site_url))
}

/// Finds the article with `slug`, fetches its blocks one level deep and
/// renders them.
pub async fn get_article_from_notion(
    repo: &dyn NotionRepository,
    settings: &BlogSettings,
    slug: &Slug,
) -> Result<ArticleResponse, AppError> {
    let summaries = get_database(
        repo,
        &settings.database_id,
        &settings.site_url,
        &DatabaseQuery::default(),
    )
    .await?;

    let summary = summaries
        .into_iter()
        .find(|summary| summary.slug == slug.as_str())
        .ok_or_else(|| AppError::ArticleNotFound {
            slug: slug.to_string(),
            database_id: settings.database_id.to_string(),
        })?;
    log::info!("Found article '{}' as page {}", slug, summary.id);

    let page = repo.retrieve_page(summary.id.as_notion_id()).await?;
    log::debug!("Retrieved page '{}' ({})", page.title(), page.url);

    let blocks = repo.retrieve_children(summary.id.as_notion_id()).await?;
    log::info!("Page {} has {} top-level blocks", summary.id, blocks.len());

    let blocks = expand_children(repo, blocks).await?;
    let content = render_article(&blocks);

    Ok(ArticleResponse {
        article: RenderedArticle {
            summary,
            content,
            excerpt: String::new(),
        },
        related: Vec::new(),
    })
}
