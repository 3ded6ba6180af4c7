// src/articles/database.rs
//! Maps blog database rows to article summaries.

use crate::model::{ArticleData, ArticleStatus, ArticleSummary, Page, PropertyTypeValue};
use crate::types::{first_plain_text, FileSource, ValidatedUrl};

/// Maps each row to a summary, in query order.
pub fn collect_articles(pages: &[Page], site_url: &ValidatedUrl) -> Vec<ArticleSummary> {
    pages.iter().map(|page| summarize_page(page, site_url)).collect()
}

/// Builds a summary from a row's properties.
///
/// Property names are matched lower-cased; a property whose type does not fit
/// the field it names is ignored.
pub fn summarize_page(page: &Page, site_url: &ValidatedUrl) -> ArticleSummary {
    let mut data = ArticleData::default();
    let mut slug = String::new();

    for (name, property) in &page.properties {
        match (name.to_field_key().as_str(), &property.type_specific_value) {
            ("page", PropertyTypeValue::Title { title }) => {
                data.title = first_plain_text(title);
            }
            ("slug", PropertyTypeValue::RichText { rich_text }) => {
                slug = first_plain_text(rich_text);
            }
            ("description", PropertyTypeValue::RichText { rich_text }) => {
                data.description = first_plain_text(rich_text);
            }
            ("date", PropertyTypeValue::Date { date }) => {
                data.date = date.as_ref().map(|d| d.start.clone());
            }
            ("category", PropertyTypeValue::Select { select }) => {
                data.category = select
                    .as_ref()
                    .map(|option| option.name.clone())
                    .unwrap_or_default();
            }
            ("tags", PropertyTypeValue::MultiSelect { multi_select }) => {
                data.tags = multi_select.iter().map(|o| o.name.clone()).collect();
            }
            ("authors", PropertyTypeValue::People { people }) => {
                data.written_by = people.iter().filter_map(|u| u.name.clone()).collect();
            }
            ("thumbnail", PropertyTypeValue::Files { files }) => {
                data.thumbnail = files
                    .first()
                    .map(|file| match &file.source {
                        FileSource::External { .. } => file.name.clone(),
                        FileSource::Hosted { url } => url.clone(),
                    })
                    .unwrap_or_default();
            }
            ("published", PropertyTypeValue::Checkbox { checkbox }) => {
                data.status = if *checkbox {
                    ArticleStatus::Open
                } else {
                    ArticleStatus::Draft
                };
            }
            (key, _) => {
                log::trace!("Ignoring property '{}' on page {}", key, page.id);
            }
        }
    }

    let permalink = format!("{}/{}/{}", site_url.base(), data.category, slug);

    ArticleSummary {
        id: page.id.clone(),
        slug,
        permalink,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PageTitle, PropertyValue};
    use crate::types::{
        DateValue, File, PageId, PropertyName, RichTextItem, SelectOption, User,
    };
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn page_with(properties: Vec<(&str, PropertyTypeValue)>) -> Page {
        Page {
            id: PageId::parse("550e8400e29b41d4a716446655440000").unwrap(),
            title: PageTitle::default(),
            url: "https://www.notion.so/550e8400e29b41d4a716446655440000".to_string(),
            properties: properties
                .into_iter()
                .map(|(name, value)| (PropertyName::new(name), PropertyValue::new(value)))
                .collect::<HashMap<_, _>>(),
            archived: false,
        }
    }

    fn rich(text: &str) -> Vec<RichTextItem> {
        vec![RichTextItem::plain_text(text), RichTextItem::plain_text(" and more")]
    }

    fn site() -> ValidatedUrl {
        ValidatedUrl::parse("https://blog.example.com/").unwrap()
    }

    #[test]
    fn test_full_row_mapping() {
        let page = page_with(vec![
            ("Page", PropertyTypeValue::Title { title: rich("Hello Notion") }),
            ("Slug", PropertyTypeValue::RichText { rich_text: rich("hello-notion") }),
            ("Description", PropertyTypeValue::RichText { rich_text: rich("An intro") }),
            (
                "Date",
                PropertyTypeValue::Date {
                    date: Some(DateValue {
                        start: "2024-05-17T08:00:00.000+09:00".to_string(),
                    }),
                },
            ),
            (
                "Category",
                PropertyTypeValue::Select {
                    select: Some(SelectOption { name: "tech".to_string() }),
                },
            ),
            (
                "Tags",
                PropertyTypeValue::MultiSelect {
                    multi_select: vec![
                        SelectOption { name: "rust".to_string() },
                        SelectOption { name: "notion".to_string() },
                        SelectOption { name: "rust".to_string() },
                    ],
                },
            ),
            (
                "Authors",
                PropertyTypeValue::People {
                    people: vec![
                        User { id: "u1".to_string(), name: Some("Ada".to_string()) },
                        User { id: "u2".to_string(), name: None },
                        User { id: "u3".to_string(), name: Some("Grace".to_string()) },
                    ],
                },
            ),
            ("Published", PropertyTypeValue::Checkbox { checkbox: true }),
        ]);

        let summary = summarize_page(&page, &site());

        assert_eq!(summary.slug, "hello-notion");
        assert_eq!(summary.permalink, "https://blog.example.com/tech/hello-notion");
        assert_eq!(summary.data.title, "Hello Notion");
        assert_eq!(summary.data.description, "An intro");
        assert_eq!(
            summary.data.date.as_deref(),
            Some("2024-05-17T08:00:00.000+09:00")
        );
        assert_eq!(summary.data.category, "tech");
        assert_eq!(
            summary.data.tags.iter().cloned().collect::<Vec<_>>(),
            vec!["notion".to_string(), "rust".to_string()]
        );
        assert_eq!(summary.data.written_by, vec!["Ada".to_string(), "Grace".to_string()]);
        assert_eq!(summary.data.status, ArticleStatus::Open);
    }

    #[test]
    fn test_missing_properties_use_defaults_and_open_status() {
        let summary = summarize_page(&page_with(vec![]), &site());

        assert_eq!(summary.slug, "");
        assert_eq!(summary.data.title, "");
        assert_eq!(summary.data.date, None);
        assert!(summary.data.tags.is_empty());
        assert_eq!(summary.data.status, ArticleStatus::Open);
        assert_eq!(summary.permalink, "https://blog.example.com//");
    }

    #[test]
    fn test_unchecked_published_is_draft() {
        let page = page_with(vec![("published", PropertyTypeValue::Checkbox { checkbox: false })]);
        assert_eq!(summarize_page(&page, &site()).data.status, ArticleStatus::Draft);
    }

    #[test]
    fn test_thumbnail_external_uses_name_hosted_uses_url() {
        let external = page_with(vec![(
            "Thumbnail",
            PropertyTypeValue::Files {
                files: vec![File {
                    name: "cover.png".to_string(),
                    source: FileSource::External {
                        url: "https://cdn.example.com/cover.png".to_string(),
                    },
                }],
            },
        )]);
        assert_eq!(summarize_page(&external, &site()).data.thumbnail, "cover.png");

        let hosted = page_with(vec![(
            "Thumbnail",
            PropertyTypeValue::Files {
                files: vec![File {
                    name: "cover.png".to_string(),
                    source: FileSource::Hosted {
                        url: "https://s3.example.com/signed".to_string(),
                    },
                }],
            },
        )]);
        assert_eq!(
            summarize_page(&hosted, &site()).data.thumbnail,
            "https://s3.example.com/signed"
        );
    }

    #[test]
    fn test_mismatched_types_are_ignored() {
        let page = page_with(vec![
            (
                "Tags",
                PropertyTypeValue::Select {
                    select: Some(SelectOption { name: "solo".to_string() }),
                },
            ),
            ("Slug", PropertyTypeValue::Title { title: rich("not-a-slug") }),
            ("Rating", PropertyTypeValue::Other { property_type: "number".to_string() }),
        ]);

        let summary = summarize_page(&page, &site());
        assert!(summary.data.tags.is_empty());
        assert_eq!(summary.slug, "");
    }

    #[test]
    fn test_collect_preserves_order() {
        let first = page_with(vec![("slug", PropertyTypeValue::RichText { rich_text: rich("a") })]);
        let mut second =
            page_with(vec![("slug", PropertyTypeValue::RichText { rich_text: rich("b") })]);
        second.id = PageId::parse("660e8400e29b41d4a716446655440000").unwrap();

        let slugs: Vec<_> = collect_articles(&[first, second], &site())
            .into_iter()
            .map(|s| s.slug)
            .collect();
        assert_eq!(slugs, vec!["a", "b"]);
    }
}
