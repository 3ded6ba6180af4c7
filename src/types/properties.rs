use super::Color;
use serde::{Deserialize, Serialize};

/// What a rich text run holds. Each variant carries only its own data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RichTextType {
    Text { content: String, link: Option<Link> },
    Mention,
    Equation(EquationData),
}

/// A styled text fragment.
///
/// `plain_text` is what Notion would show for any variant and is the fallback
/// when a variant has nothing better to offer (mentions, for instance).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextItem {
    pub text_type: RichTextType,
    pub annotations: Annotations,
    pub plain_text: String,
    pub href: Option<String>,
}

impl RichTextItem {
    /// Unstyled, unlinked text.
    pub fn plain_text(text: &str) -> Self {
        Self {
            text_type: RichTextType::Text {
                content: text.to_string(),
                link: None,
            },
            annotations: Annotations::default(),
            plain_text: text.to_string(),
            href: None,
        }
    }

    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    pub fn with_link(mut self, url: &str) -> Self {
        if let RichTextType::Text { link, .. } = &mut self.text_type {
            *link = Some(Link {
                url: url.to_string(),
            });
        }
        self.href = Some(url.to_string());
        self
    }
}

/// Concatenated plain text of a run list.
pub fn plain_text_of(items: &[RichTextItem]) -> String {
    items.iter().map(|item| item.plain_text.as_str()).collect()
}

/// Plain text of the first run, or empty.
pub fn first_plain_text(items: &[RichTextItem]) -> String {
    items
        .first()
        .map(|item| item.plain_text.clone())
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquationData {
    pub expression: String,
}

/// Select or multi-select option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub name: String,
}

/// Date value. `start` is Notion's ISO 8601 string, a bare date or a datetime
/// with its original offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateValue {
    pub start: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: Option<String>,
}

/// Where a file lives. Notion distinguishes links it merely stores from files it hosts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FileSource {
    External { url: String },
    Hosted { url: String },
}



/// An entry of a `files` property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    pub name: String,
    pub source: FileSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_plain_text() {
        let items = vec![
            RichTextItem::plain_text("first"),
            RichTextItem::plain_text("second"),
        ];
        assert_eq!(first_plain_text(&items), "first");
        assert_eq!(plain_text_of(&items), "firstsecond");
        assert_eq!(first_plain_text(&[]), "");
    }

    #[test]
    fn test_with_link_sets_href() {
        let item = RichTextItem::plain_text("docs").with_link("https://example.com");
        assert_eq!(item.href.as_deref(), Some("https://example.com"));
        match item.text_type {
            RichTextType::Text { link, .. } => {
                assert_eq!(link.unwrap().url, "https://example.com")
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
