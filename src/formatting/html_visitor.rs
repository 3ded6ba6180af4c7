// src/formatting/html_visitor.rs
//! Per-block HTML markup.

use super::block_renderer::BlockRenderer;
use super::html::{escape_attr, escape_text};
use super::rich_text::rich_text_to_html;
use super::youtube::{parse_youtube_video_id, youtube_embed_html};
use crate::constants::{BOOKMARK_EMBED_PATH, COLUMN_PLACEHOLDER};
use crate::model::*;
use crate::types::{first_plain_text, plain_text_of};
use url::Url;

const TWEET_HOSTS: &[&str] = &[
    "twitter.com",
    "www.twitter.com",
    "mobile.twitter.com",
    "x.com",
    "www.x.com",
];

/// Formats Notion blocks as article HTML.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlBlockRenderer;

impl BlockRenderer for HtmlBlockRenderer {
    fn render_block(&self, block: &Block) -> String {
        match block {
            Block::Paragraph(b) => format!("<p>{}</p>", rich_text_to_html(&b.content.rich_text)),
            Block::Heading1(b) => format_heading(1, &b.content),
            Block::Heading2(b) => format_heading(2, &b.content),
            Block::Heading3(b) => format_heading(3, &b.content),
            Block::BulletedListItem(b) | Block::NumberedListItem(b) => format!(
                "<li>{}{}</li>",
                rich_text_to_html(&b.content.rich_text),
                self.render_children(&b.common.children)
            ),
            Block::ToDo(b) => format_todo(b),
            Block::Toggle(b) => format!(
                "<details><summary>{}</summary>{}</details>",
                rich_text_to_html(&b.content.rich_text),
                self.render_children(&b.common.children)
            ),
            Block::Quote(b) => format!(
                "<div class=\"quote\"><div class=\"quote-prepend\">“</div><div class=\"quote-inner\">{}</div><div class=\"quote-append\">”</div></div>",
                rich_text_to_html(&b.content.rich_text)
            ),
            Block::Callout(b) => format_callout(b),
            Block::Code(b) => format!(
                "<pre><code class=\"language-{}\">{}</code></pre>",
                escape_attr(&b.language),
                escape_text(&plain_text_of(&b.content.rich_text))
            ),
            Block::Divider(_) => "<hr/>".to_string(),
            Block::Image(b) => format_image(b),
            Block::Video(b) => format_video(b),
            Block::Bookmark(b) => format_bookmark(b),
            Block::Embed(b) => format_embed(b),
            Block::ChildPage(b) => format!("<p>{}</p>", escape_text(&b.title)),
            Block::ChildDatabase(b) => format!("<div>{}</div>", escape_text(&b.title)),
            Block::ColumnList(b) => format!(
                "<div class=\"flex\">{}</div>",
                self.render_children(&b.common.children)
            ),
            Block::Column(_) => format!("<div class=\"flex-1\">{}</div>", COLUMN_PLACEHOLDER),
            Block::Unsupported(b) => format_unsupported(b),
        }
    }
}

// --- Block-type formatters ---

fn format_heading(level: u8, content: &TextBlockContent) -> String {
    format!(
        "<h{level}>{}</h{level}>",
        rich_text_to_html(&content.rich_text),
        level = level
    )
}

fn format_todo(b: &ToDoBlock) -> String {
    let id = escape_attr(&b.common.id.to_hyphenated());
    let checked = if b.checked { " checked=\"\"" } else { "" };
    format!(
        "<div><label for=\"{id}\"><input type=\"checkbox\" id=\"{id}\"{checked}/> {}</label></div>",
        rich_text_to_html(&b.content.rich_text),
        id = id,
        checked = checked
    )
}

fn format_callout(b: &CalloutBlock) -> String {
    let icon = match &b.icon {
        Some(Icon::Emoji { emoji }) => format!("<span>{}</span>", escape_text(emoji)),
        _ => String::new(),
    };
    format!(
        "<div class=\"callout\">{}<div class=\"callout-inner\">{}</div></div>",
        icon,
        rich_text_to_html(&b.content.rich_text)
    )
}

fn format_image(b: &ImageBlock) -> String {
    let caption = first_plain_text(&b.caption);
    let figcaption = if caption.is_empty() {
        String::new()
    } else {
        format!("<figcaption>{}</figcaption>", escape_text(&caption))
    };
    format!(
        "<figure><img src=\"{}\" alt=\"{}\"/>{}</figure>",
        escape_attr(b.image.url()),
        escape_attr(&caption),
        figcaption
    )
}

/// Only external YouTube links produce markup.
fn format_video(b: &VideoBlock) -> String {
    let FileObject::External { external } = &b.video else {
        log::debug!("Skipping hosted video in block {}", b.common.id);
        return String::new();
    };

    match Url::parse(&external.url)
        .ok()
        .and_then(|url| parse_youtube_video_id(&url))
    {
        Some(video_id) => youtube_embed_html(&video_id),
        None => {
            log::warn!(
                "Video block {} has no usable YouTube URL: {}",
                b.common.id,
                external.url
            );
            String::new()
        }
    }
}

fn format_bookmark(b: &BookmarkBlock) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(b.url.as_bytes()).collect();
    format!(
        "<iframe title=\"bookmark\" src=\"{}{}\" class=\"embed\"></iframe>",
        BOOKMARK_EMBED_PATH, encoded
    )
}

fn format_embed(b: &EmbedBlock) -> String {
    let url = escape_attr(&b.url);
    if is_tweet(&b.url) {
        format!(
            "<blockquote class=\"twitter-tweet\"><a href=\"{url}\">{}</a></blockquote>",
            escape_text(&b.url),
            url = url
        )
    } else {
        format!(
            "<iframe title=\"embed\" src=\"{}\" class=\"embed\"></iframe>",
            url
        )
    }
}

/// Any https link on a Twitter host, whatever its path.
fn is_tweet(raw: &str) -> bool {
    let Ok(url) = Url::parse(raw) else {
        return false;
    };
    url.scheme() == "https"
        && url
            .host_str()
            .map(|host| TWEET_HOSTS.contains(&host.to_ascii_lowercase().as_str()))
            .unwrap_or(false)
}

fn format_unsupported(b: &UnsupportedBlock) -> String {
    let label = if b.block_type == "unsupported" {
        "unsupported by Notion API"
    } else {
        b.block_type.as_str()
    };
    format!("❌ Unsupported block ({})", escape_text(label))
}
