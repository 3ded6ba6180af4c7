use crate::types::PageId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Publication state. Only an unchecked `Published` box makes a draft; a row
/// without the property is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    #[default]
    Open,
    Draft,
}

/// The metadata half of an article row.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleData {
    pub tags: BTreeSet<String>,
    pub title: String,
    pub date: Option<String>,
    pub category: String,
    pub written_by: Vec<String>,
    pub thumbnail: String,
    pub description: String,
    pub status: ArticleStatus,
}

/// One row of the blog database, ready for listing pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub id: PageId,
    pub slug: String,
    pub permalink: String,
    pub data: ArticleData,
}

impl ArticleSummary {
    pub fn is_published(&self) -> bool {
        self.data.status == ArticleStatus::Open
    }
}

/// A summary plus its rendered body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedArticle {
    #[serde(flatten)]
    pub summary: ArticleSummary,
    pub content: String,
    pub excerpt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleResponse {
    pub article: RenderedArticle,
    pub related: Vec<ArticleSummary>,
}
