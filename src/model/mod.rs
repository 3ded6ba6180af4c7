mod article;
mod block;
pub mod blocks;
pub mod common;
mod property_value;

pub use article::{ArticleData, ArticleResponse, ArticleStatus, ArticleSummary, RenderedArticle};
pub use block::Block;
pub use blocks::*;
pub use common::*;
pub use property_value::{PropertyTypeValue, PropertyValue};

use crate::types::{PageId, PropertyName};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A Notion page; for this crate, one row of the blog database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub title: PageTitle,
    pub url: String,
    pub properties: HashMap<PropertyName, PropertyValue>,
    pub archived: bool,
}

impl Page {
    pub fn title(&self) -> &PageTitle {
        &self.title
    }
}

/// Page title
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageTitle(String);

impl PageTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PageTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
