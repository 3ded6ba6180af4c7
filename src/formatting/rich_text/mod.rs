// src/formatting/rich_text/mod.rs
//! Formats Notion rich text runs as inline HTML.

mod annotations;

use super::html::escape_text;
use crate::types::{EquationData, Link, RichTextItem, RichTextType};
use annotations::HtmlStyleRenderer;

/// Renders a run list as inline HTML, each run escaped and styled.
pub fn rich_text_to_html(items: &[RichTextItem]) -> String {
    items.iter().map(render_item).collect()
}

fn render_item(item: &RichTextItem) -> String {
    match &item.text_type {
        // Equations ignore styling
        RichTextType::Equation(EquationData { expression }) => {
            format!("<span class=\"equation\">{}</span>", escape_text(expression))
        }

        RichTextType::Mention => HtmlStyleRenderer::apply_styles(
            escape_text(&item.plain_text),
            &item.annotations,
            item.href.as_deref(),
        ),

        RichTextType::Text { content, link } => {
            let url = link
                .as_ref()
                .map(|Link { url }| url.as_str())
                .or(item.href.as_deref());
            HtmlStyleRenderer::apply_styles(escape_text(content), &item.annotations, url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Annotations, Color};

    #[test]
    fn test_plain_text_formatting() {
        let items = vec![RichTextItem::plain_text("Hello World")];
        assert_eq!(rich_text_to_html(&items), "Hello World");
    }

    #[test]
    fn test_runs_are_concatenated() {
        let items = vec![
            RichTextItem::plain_text("Hello "),
            RichTextItem::plain_text("World").with_annotations(Annotations {
                bold: true,
                ..Default::default()
            }),
        ];
        assert_eq!(rich_text_to_html(&items), "Hello <strong>World</strong>");
    }

    #[test]
    fn test_text_is_escaped() {
        let items = vec![RichTextItem::plain_text("a < b && <script>")];
        assert_eq!(
            rich_text_to_html(&items),
            "a &lt; b &amp;&amp; &lt;script&gt;"
        );
    }

    #[test]
    fn test_link_wraps_colour() {
        let items = vec![RichTextItem::plain_text("docs")
            .with_annotations(Annotations {
                color: Color::Blue,
                ..Default::default()
            })
            .with_link("https://example.com/?a=1&b=\"2\"")];

        assert_eq!(
            rich_text_to_html(&items),
            "<a href=\"https://example.com/?a=1&amp;b=&quot;2&quot;\"><span class=\"notion-blue\">docs</span></a>"
        );
    }

    #[test]
    fn test_href_used_when_text_has_no_link() {
        let mut item = RichTextItem::plain_text("page");
        item.href = Some("https://www.notion.so/abc".to_string());
        assert_eq!(
            rich_text_to_html(&[item]),
            "<a href=\"https://www.notion.so/abc\">page</a>"
        );
    }

    #[test]
    fn test_equation() {
        let item = RichTextItem {
            text_type: RichTextType::Equation(EquationData {
                expression: "a<b".to_string(),
            }),
            annotations: Annotations {
                bold: true,
                ..Default::default()
            },
            plain_text: "a<b".to_string(),
            href: None,
        };
        assert_eq!(
            rich_text_to_html(&[item]),
            "<span class=\"equation\">a&lt;b</span>"
        );
    }

    #[test]
    fn test_mention_uses_plain_text_and_href() {
        let item = RichTextItem {
            text_type: RichTextType::Mention,
            annotations: Annotations::default(),
            plain_text: "@Ada".to_string(),
            href: None,
        };
        assert_eq!(rich_text_to_html(&[item.clone()]), "@Ada");

        let linked = RichTextItem {
            href: Some("https://www.notion.so/page".to_string()),
            ..item
        };
        assert_eq!(
            rich_text_to_html(&[linked]),
            "<a href=\"https://www.notion.so/page\">@Ada</a>"
        );
    }
}
