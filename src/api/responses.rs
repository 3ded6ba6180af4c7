// src/api/responses.rs
//! Wire types: `notion-client`'s serde models plus the list envelopes.

pub use notion_client::objects::error::Error as NotionError;

use super::types::PaginatedResponse;
use crate::error::AppError;
use serde::Deserialize;

/// A page object kept as raw JSON until conversion.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct RawPage(pub serde_json::Value);

/// Database query response; rows stay raw so property values keep their wire form.
pub type QueryDatabaseResponse = PaginatedResponse<RawPage>;

/// Block children kept as raw JSON so one undecodable block cannot sink the list.
pub type RetrieveBlockChildrenResponse = PaginatedResponse<serde_json::Value>;

/// Trait for converting notion-client types to domain types
pub trait ToDomain<T> {
    fn to_domain(self) -> Result<T, AppError>;
}

impl ToDomain<crate::model::Page> for RawPage {
    fn to_domain(self) -> Result<crate::model::Page, AppError> {
        super::notion_client_adapter::page_from_value(self.0)
    }
}

impl ToDomain<crate::model::Block> for serde_json::Value {
    fn to_domain(self) -> Result<crate::model::Block, AppError> {
        super::notion_client_adapter::block_from_value(self)
    }
}

impl QueryDatabaseResponse {
    pub fn into_domain_pages(self) -> Result<Vec<crate::model::Page>, AppError> {
        self.results.into_iter().map(ToDomain::to_domain).collect()
    }
}

impl RetrieveBlockChildrenResponse {
    pub fn into_domain_blocks(self) -> Result<Vec<crate::model::Block>, AppError> {
        self.results.into_iter().map(ToDomain::to_domain).collect()
    }
}
