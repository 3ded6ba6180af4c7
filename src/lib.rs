// src/lib.rs
//! notion-blog library: turns a Notion database into blog article summaries
//! and a Notion page's blocks into article HTML.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Entry points**: `get_database`, `get_article_from_notion`
//! - **Error handling**: `AppError`, `ValidationError`
//! - **Configuration**: `BlogSettings`, `CommandLineInput`
//! - **Domain model**: `Page`, `Block`, `ArticleSummary`, etc.
//! - **API client**: `NotionHttpClient`, `NotionRepository`, parsers
//! - **Formatting**: `render_article`, `render_blocks`, `HtmlBlockRenderer`

mod api;
mod articles;
mod config;
mod constants;
mod error;
mod formatting;
mod model;
mod types;

// --- Entry Points ---
pub use crate::articles::{
    collect_articles, expand_children, get_article_from_notion, get_database, splice_children,
    summarize_page,
};

// --- Error Handling ---
pub use crate::error::{AppError, NotionClientError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{BlogSettings, Command, CommandLineInput};

// --- Domain Model ---
pub use crate::model::{
    ArticleData, ArticleResponse, ArticleStatus, ArticleSummary, Block, BlockCommon, Page,
    PageTitle, PropertyTypeValue, PropertyValue, RenderedArticle,
};

// --- Block Types ---
pub use crate::model::blocks::{
    BookmarkBlock, CalloutBlock, ChildDatabaseBlock, ChildPageBlock, CodeBlock, ColumnBlock,
    ColumnListBlock, DividerBlock, EmbedBlock, ExternalFile, FileObject, HeadingBlock, Icon,
    ImageBlock, ListItemBlock, NotionFile, ParagraphBlock, QuoteBlock, TextBlockContent,
    ToDoBlock, ToggleBlock, UnsupportedBlock, VideoBlock,
};

// --- Domain Types ---
pub use crate::types::{
    Annotations, ApiKey, BlockId, Color, DatabaseId, DateValue, EquationData, File, FileSource,
    Link, NotionId, PageId, PropertyName, RichTextItem, RichTextType, SelectOption, Slug, User,
    ValidatedUrl,
};

// --- API Client ---
pub use crate::api::{
    client::ApiResponse,
    parser::{
        parse_block_response, parse_blocks_pagination, parse_page_response,
        parse_pages_pagination,
    },
    DatabaseQuery, NotionHttpClient, NotionRepository, PaginatedResponse,
};

// --- Formatting ---
pub use crate::formatting::{
    parse_youtube_video_id, render_article, render_blocks, rich_text_to_html, BlockRenderer,
    HtmlBlockRenderer,
};
