// src/formatting/rich_text/annotations.rs
//! Annotation processing for rich text.

use crate::formatting::html::escape_attr;
use crate::types::{Annotations, Color};

/// Wraps already-escaped content in the tags its annotations call for.
pub struct HtmlStyleRenderer;

impl HtmlStyleRenderer {
    /// Tags nest innermost first: code, s, u, em, strong, colour span, then the link.
    pub fn apply_styles(content: String, annotations: &Annotations, link: Option<&str>) -> String {
        let mut result = content;

        if annotations.code {
            result = format!("<code>{}</code>", result);
        }

        if annotations.strikethrough {
            result = format!("<s>{}</s>", result);
        }

        if annotations.underline {
            result = format!("<u>{}</u>", result);
        }

        if annotations.italic {
            result = format!("<em>{}</em>", result);
        }

        if annotations.bold {
            result = format!("<strong>{}</strong>", result);
        }

        if annotations.color != Color::Default {
            result = format!(
                "<span class=\"{}\">{}</span>",
                color_to_css_class(annotations.color),
                result
            );
        }

        if let Some(url) = link {
            result = format!("<a href=\"{}\">{}</a>", escape_attr(url), result);
        }

        result
    }
}

/// CSS class for a non-default colour, e.g. `notion-red_background`.
pub fn color_to_css_class(color: Color) -> String {
    format!("notion-{}", color.as_str())
}
