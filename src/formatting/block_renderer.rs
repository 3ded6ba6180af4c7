// src/formatting/block_renderer.rs
//! Block rendering engine: turns a block list into article HTML.

use super::html_visitor::HtmlBlockRenderer;
use crate::constants::CHARS_PER_BLOCK_ESTIMATE;
use crate::model::Block;

const ARTICLE_OPEN: &str = "<div><div class=\"bg-white py-6 sm:py-8 lg:py-12\"><article class=\"max-w-screen-md px-4 md:px-8 mx-auto\"><section>";
const ARTICLE_CLOSE: &str = "</section></article></div></div>";

/// Trait for rendering blocks into HTML.
pub trait BlockRenderer {
    /// Render one block, including whatever children its markup embeds.
    fn render_block(&self, block: &Block) -> String;

    /// Render siblings in order, grouping consecutive list items.
    fn render_children(&self, blocks: &[Block]) -> String
    where
        Self: Sized,
    {
        render_blocks(self, blocks)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Bulleted,
    Numbered,
}

impl ListKind {
    fn of(block: &Block) -> Option<Self> {
        match block {
            Block::BulletedListItem(_) => Some(ListKind::Bulleted),
            Block::NumberedListItem(_) => Some(ListKind::Numbered),
            _ => None,
        }
    }

    fn open_tag(self) -> &'static str {
        match self {
            ListKind::Bulleted => "<ul>",
            ListKind::Numbered => "<ol>",
        }
    }

    fn close_tag(self) -> &'static str {
        match self {
            ListKind::Bulleted => "</ul>",
            ListKind::Numbered => "</ol>",
        }
    }
}

/// Renders siblings with `renderer`, wrapping each run of same-kind list items
/// in one `<ul>` or `<ol>`.
pub fn render_blocks<R: BlockRenderer>(renderer: &R, blocks: &[Block]) -> String {
    let mut output = String::with_capacity(blocks.len() * CHARS_PER_BLOCK_ESTIMATE);
    let mut open_list: Option<ListKind> = None;

    for block in blocks {
        let kind = ListKind::of(block);
        if kind != open_list {
            if let Some(previous) = open_list {
                output.push_str(previous.close_tag());
            }
            if let Some(next) = kind {
                output.push_str(next.open_tag());
            }
            open_list = kind;
        }
        output.push_str(&renderer.render_block(block));
    }

    if let Some(previous) = open_list {
        output.push_str(previous.close_tag());
    }

    output
}

/// Renders a page's blocks into the full article document.
pub fn render_article(blocks: &[Block]) -> String {
    let body = HtmlBlockRenderer.render_children(blocks);
    log::debug!("Rendered {} blocks into {} bytes", blocks.len(), body.len());
    format!("{}{}{}", ARTICLE_OPEN, body, ARTICLE_CLOSE)
}
