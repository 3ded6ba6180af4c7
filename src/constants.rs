// src/constants.rs
//! Operational constants for talking to Notion and rendering articles.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// How many objects the Notion API returns per page of results.
///
/// 100 is the API maximum.
pub const NOTION_API_PAGE_SIZE: usize = 100;

/// Upper bound on result pages followed for a single list call.
pub const NOTION_MAX_RESULT_PAGES: usize = 100;

/// Notion API version the request headers declare.
pub const NOTION_API_VERSION: &str = "2022-06-28";

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Estimated characters per block, used to pre-allocate output strings.
pub const CHARS_PER_BLOCK_ESTIMATE: usize = 256;

/// Where YouTube video ids are embedded from.
pub const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// The site-relative endpoint that renders bookmark previews.
pub const BOOKMARK_EMBED_PATH: &str = "/embed/?url=";

/// Shown in place of a column's content, which is two levels below the page
/// and never fetched.
pub const COLUMN_PLACEHOLDER: &str = "カラム";

// ---------------------------------------------------------------------------
// Configuration defaults
// ---------------------------------------------------------------------------

/// Site URL used for permalinks when none is configured.
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
