// src/api/mod.rs
//! Notion API access: the three calls an article needs.
//!
//! I/O lives in [`client`], decoding in [`parser`], and the mapping from
//! `notion-client` types to the domain model in [`notion_client_adapter`].

pub mod client;
pub mod notion_client_adapter;
pub mod parser;
mod responses;
mod simple_pagination;
mod types;

use crate::error::AppError;
use crate::model::{Block, Page};
use crate::types::NotionId;

/// The ability to read a blog database and its pages from Notion.
///
/// Business logic depends on this trait, never on HTTP details.
#[async_trait::async_trait]
pub trait NotionRepository: Send + Sync {
    /// All rows of a database matching `query`, every result page followed.
    async fn query_database(
        &self,
        database: &NotionId,
        query: &DatabaseQuery,
    ) -> Result<Vec<Page>, AppError>;

    async fn retrieve_page(&self, id: &NotionId) -> Result<Page, AppError>;

    /// Direct children of a block or page. Grandchildren are not fetched.
    async fn retrieve_children(&self, parent: &NotionId) -> Result<Vec<Block>, AppError>;
}

pub use client::NotionHttpClient;
pub use types::{DatabaseQuery, PaginatedResponse};
