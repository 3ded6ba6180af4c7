// src/formatting/mod.rs
//! Renders Notion block trees into article HTML.

pub mod block_renderer;
mod html;
mod html_visitor;
mod rich_text;
mod youtube;

pub use self::block_renderer::{render_article, render_blocks, BlockRenderer};
pub use self::html_visitor::HtmlBlockRenderer;
pub use self::rich_text::rich_text_to_html;
pub use self::youtube::parse_youtube_video_id;
