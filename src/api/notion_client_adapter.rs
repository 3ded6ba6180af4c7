// src/api/notion_client_adapter.rs
//! Adapter layer for converting notion-client types to our domain model.

use crate::error::{AppError, NotionClientError};
use crate::model::blocks::*;
use crate::model::common::BlockCommon;
use crate::model::{Block, Page, PageTitle, PropertyTypeValue, PropertyValue};
use crate::types::{
    Annotations, BlockId, Color, DateValue, EquationData, File, FileSource, Link, PageId,
    PropertyName, RichTextItem, RichTextType, SelectOption, User,
};
use notion_client::objects::block::BlockType;
use notion_client::objects::page::PageProperty;
use serde_json::Value;
use std::collections::HashMap;

/// Decodes one raw page object.
///
/// Date starts are taken from the raw JSON: the typed decode turns a datetime
/// into UTC and loses the offset the page was written with.
pub fn page_from_value(raw: Value) -> Result<Page, AppError> {
    let notion_page = serde_json::from_value::<notion_client::objects::page::Page>(raw.clone())
        .map_err(|e| NotionClientError::Deserialization {
            source: e,
            body: raw.get("id").map(Value::to_string).unwrap_or_default(),
        })?;
    convert_page(notion_page, &raw)
}

/// Convert notion-client Page to our domain Page
fn convert_page(
    notion_page: notion_client::objects::page::Page,
    raw: &Value,
) -> Result<Page, AppError> {
    let id = PageId::parse(&notion_page.id)?;
    let properties = convert_page_properties(notion_page.properties, raw.get("properties"))?;
    let title = extract_page_title(&properties);

    Ok(Page {
        id,
        title,
        url: notion_page.url,
        properties,
        archived: notion_page.archived,
    })
}

/// Decodes one raw block object.
///
/// The raw value is kept alongside the typed decode: it supplies the type tag
/// for blocks we have no variant for, and fields `notion-client` does not model
/// (image captions, the API spelling of code languages). A block the typed
/// decode rejects becomes [`Block::Unsupported`] rather than an error.
pub fn block_from_value(raw: Value) -> Result<Block, AppError> {
    let common = convert_block_common(&raw)?;
    let raw_type = raw
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or("unsupported")
        .to_string();

    match serde_json::from_value::<notion_client::objects::block::Block>(raw.clone()) {
        Ok(notion_block) => convert_block(notion_block, &raw, common, &raw_type),
        Err(e) => {
            log::warn!(
                "Block {} of type '{}' could not be decoded ({}); rendering as unsupported",
                common.id,
                raw_type,
                e
            );
            Ok(Block::Unsupported(UnsupportedBlock {
                common,
                block_type: raw_type,
            }))
        }
    }
}

fn convert_block(
    notion_block: notion_client::objects::block::Block,
    raw: &Value,
    common: BlockCommon,
    raw_type: &str,
) -> Result<Block, AppError> {
    let block = match notion_block.block_type {
        BlockType::Paragraph { paragraph } => Block::Paragraph(ParagraphBlock {
            common,
            content: convert_text_block_content(paragraph.rich_text, paragraph.color)?,
        }),

        BlockType::Heading1 { heading_1 } => Block::Heading1(HeadingBlock {
            common,
            content: convert_text_block_content(heading_1.rich_text, heading_1.color)?,
        }),

        BlockType::Heading2 { heading_2 } => Block::Heading2(HeadingBlock {
            common,
            content: convert_text_block_content(heading_2.rich_text, heading_2.color)?,
        }),

        BlockType::Heading3 { heading_3 } => Block::Heading3(HeadingBlock {
            common,
            content: convert_text_block_content(heading_3.rich_text, heading_3.color)?,
        }),

        BlockType::BulletedListItem { bulleted_list_item } => {
            Block::BulletedListItem(ListItemBlock {
                common,
                content: convert_text_block_content(
                    bulleted_list_item.rich_text,
                    Some(bulleted_list_item.color),
                )?,
            })
        }

        BlockType::NumberedListItem { numbered_list_item } => {
            Block::NumberedListItem(ListItemBlock {
                common,
                content: convert_text_block_content(
                    numbered_list_item.rich_text,
                    Some(numbered_list_item.color),
                )?,
            })
        }

        BlockType::ToDo { to_do } => Block::ToDo(ToDoBlock {
            common,
            content: convert_text_block_content(to_do.rich_text, to_do.color)?,
            checked: to_do.checked.unwrap_or(false),
        }),

        BlockType::Toggle { toggle } => Block::Toggle(ToggleBlock {
            common,
            content: convert_text_block_content(toggle.rich_text, Some(toggle.color))?,
        }),

        BlockType::Quote { quote } => Block::Quote(QuoteBlock {
            common,
            content: convert_text_block_content(quote.rich_text, Some(quote.color))?,
        }),

        BlockType::Callout { callout } => Block::Callout(CalloutBlock {
            common,
            icon: callout.icon.map(convert_icon),
            content: convert_text_block_content(callout.rich_text, Some(callout.color))?,
        }),

        BlockType::Code { code } => Block::Code(CodeBlock {
            common,
            language: code_language(raw),
            content: convert_text_block_content(code.rich_text, None)?,
        }),

        BlockType::Divider { .. } => Block::Divider(DividerBlock { common }),

        BlockType::Image { image } => Block::Image(ImageBlock {
            common,
            image: convert_file_object(image.file_type),
            caption: raw_caption(raw, "image"),
        }),

        BlockType::Video { video } => Block::Video(VideoBlock {
            common,
            video: convert_file_object(video.file_type),
        }),

        BlockType::Bookmark { bookmark } => Block::Bookmark(BookmarkBlock {
            common,
            url: bookmark.url,
        }),

        BlockType::Embed { embed } => Block::Embed(EmbedBlock {
            common,
            url: embed.url,
        }),

        BlockType::ChildPage { child_page } => Block::ChildPage(ChildPageBlock {
            common,
            title: child_page.title,
        }),

        BlockType::ChildDatabase { child_database } => {
            Block::ChildDatabase(ChildDatabaseBlock {
                common,
                title: child_database.title,
            })
        }

        BlockType::ColumnList { .. } => Block::ColumnList(ColumnListBlock { common }),

        BlockType::Column { .. } => Block::Column(ColumnBlock { common }),

        _ => {
            log::debug!("Block {} has unmapped type '{}'", common.id, raw_type);
            Block::Unsupported(UnsupportedBlock {
                common,
                block_type: raw_type.to_string(),
            })
        }
    };

    Ok(block)
}

/// Reads the header fields straight from the raw object.
fn convert_block_common(raw: &Value) -> Result<BlockCommon, AppError> {
    let id = raw.get("id").and_then(Value::as_str).ok_or_else(|| {
        NotionClientError::ConversionError {
            message: "Block missing required ID field".to_string(),
        }
    })?;

    Ok(BlockCommon {
        id: BlockId::parse(id)?,
        children: Vec::new(),
        has_children: raw
            .get("has_children")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        archived: raw.get("archived").and_then(Value::as_bool).unwrap_or(false),
    })
}

fn code_language(raw: &Value) -> String {
    raw.pointer("/code/language")
        .and_then(Value::as_str)
        .unwrap_or("plain text")
        .to_string()
}

fn raw_caption(raw: &Value, block_type: &str) -> Vec<RichTextItem> {
    let Some(caption) = raw.get(block_type).and_then(|payload| payload.get("caption")) else {
        return Vec::new();
    };

    serde_json::from_value::<Vec<notion_client::objects::rich_text::RichText>>(caption.clone())
        .map_err(AppError::from)
        .and_then(convert_rich_text_array)
        .unwrap_or_else(|e| {
            log::warn!("Ignoring undecodable {} caption: {}", block_type, e);
            Vec::new()
        })
}

fn convert_text_block_content(
    rich_text: Vec<notion_client::objects::rich_text::RichText>,
    color: Option<notion_client::objects::block::TextColor>,
) -> Result<TextBlockContent, AppError> {
    Ok(TextBlockContent {
        rich_text: convert_rich_text_array(rich_text)?,
        color: color.map(convert_block_color).unwrap_or_default(),
    })
}

pub(crate) fn convert_rich_text_array(
    rich_texts: Vec<notion_client::objects::rich_text::RichText>,
) -> Result<Vec<RichTextItem>, AppError> {
    rich_texts.into_iter().map(convert_rich_text).collect()
}

fn convert_rich_text(
    rich_text: notion_client::objects::rich_text::RichText,
) -> Result<RichTextItem, AppError> {
    use notion_client::objects::rich_text::RichText as NcRichText;

    let item = match rich_text {
        NcRichText::Text {
            text,
            annotations,
            plain_text,
            href,
        } => RichTextItem {
            plain_text: plain_text.unwrap_or_else(|| text.content.clone()),
            text_type: RichTextType::Text {
                content: text.content,
                link: text.link.map(|link| Link { url: link.url }),
            },
            annotations: convert_annotations(annotations.unwrap_or_default()),
            href,
        },

        NcRichText::Mention {
            annotations,
            plain_text,
            href,
            ..
        } => RichTextItem {
            text_type: RichTextType::Mention,
            annotations: convert_annotations(annotations),
            plain_text,
            href,
        },

        NcRichText::Equation {
            equation,
            annotations,
            plain_text,
            href,
        } => RichTextItem {
            text_type: RichTextType::Equation(EquationData {
                expression: equation.expression,
            }),
            annotations: convert_annotations(annotations),
            plain_text,
            href,
        },

        _ => {
            log::debug!("Unsupported rich text type; rendering as empty text");
            RichTextItem::plain_text("")
        }
    };

    Ok(item)
}

fn convert_annotations(annotations: notion_client::objects::rich_text::Annotations) -> Annotations {
    Annotations {
        bold: annotations.bold,
        italic: annotations.italic,
        strikethrough: annotations.strikethrough,
        underline: annotations.underline,
        code: annotations.code,
        color: convert_rich_text_color(annotations.color),
    }
}

fn convert_file_object(file: notion_client::objects::file::File) -> FileObject {
    use notion_client::objects::file::File as NcFile;

    match file {
        NcFile::External { external } => FileObject::External {
            external: ExternalFile { url: external.url },
        },
        NcFile::File { file } => FileObject::File {
            file: NotionFile {
                url: file.url,
                expiry_time: Some(file.expiry_time),
            },
        },
    }
}

fn convert_icon(icon: notion_client::objects::block::Icon) -> Icon {
    use notion_client::objects::block::Icon as NcIcon;

    match icon {
        NcIcon::Emoji(notion_client::objects::emoji::Emoji::Emoji { emoji }) => {
            Icon::Emoji { emoji }
        }
        NcIcon::File(file) => match convert_file_object(file) {
            FileObject::File { file } => Icon::File { file },
            FileObject::External { external } => Icon::External { external },
        },
    }
}

/// Generates a conversion from a notion-client colour enum, backgrounds included.
macro_rules! impl_color_conversion {
    ($fn_name:ident, $source:ty) => {
        fn $fn_name(color: $source) -> Color {
            match color {
                <$source>::Default => Color::Default,
                <$source>::Gray => Color::Gray,
                <$source>::Brown => Color::Brown,
                <$source>::Orange => Color::Orange,
                <$source>::Yellow => Color::Yellow,
                <$source>::Green => Color::Green,
                <$source>::Blue => Color::Blue,
                <$source>::Purple => Color::Purple,
                <$source>::Pink => Color::Pink,
                <$source>::Red => Color::Red,
                <$source>::GrayBackground => Color::GrayBackground,
                <$source>::BrownBackground => Color::BrownBackground,
                <$source>::OrangeBackground => Color::OrangeBackground,
                <$source>::YellowBackground => Color::YellowBackground,
                <$source>::GreenBackground => Color::GreenBackground,
                <$source>::BlueBackground => Color::BlueBackground,
                <$source>::PurpleBackground => Color::PurpleBackground,
                <$source>::PinkBackground => Color::PinkBackground,
                <$source>::RedBackground => Color::RedBackground,
            }
        }
    };
}

impl_color_conversion!(convert_block_color, notion_client::objects::block::TextColor);
impl_color_conversion!(
    convert_rich_text_color,
    notion_client::objects::rich_text::TextColor
);

fn extract_page_title(properties: &HashMap<PropertyName, PropertyValue>) -> PageTitle {
    properties
        .values()
        .find_map(|property| match &property.type_specific_value {
            PropertyTypeValue::Title { title } => {
                Some(PageTitle::new(crate::types::plain_text_of(title)))
            }
            _ => None,
        })
        .unwrap_or_else(|| PageTitle::new("Untitled"))
}

/// Converts every property; one that fails is logged and skipped.
fn convert_page_properties(
    properties: HashMap<String, PageProperty>,
    raw_properties: Option<&Value>,
) -> Result<HashMap<PropertyName, PropertyValue>, AppError> {
    let mut converted = HashMap::new();

    for (name, property) in properties {
        let raw_start = raw_properties
            .and_then(|all| all.get(&name))
            .and_then(|property| property.get("date"))
            .and_then(|date| date.get("start"))
            .and_then(Value::as_str);

        match convert_page_property(property, raw_start) {
            Ok(value) => {
                converted.insert(PropertyName::new(name), value);
            }
            Err(e) => {
                log::warn!(
                    "Failed to convert page property '{}': {}. Skipping.",
                    name,
                    e
                );
            }
        }
    }

    Ok(converted)
}

fn format_date(dod: notion_client::objects::page::DateOrDateTime) -> String {
    match dod {
        notion_client::objects::page::DateOrDateTime::Date(d) => d.format("%Y-%m-%d").to_string(),
        notion_client::objects::page::DateOrDateTime::DateTime(dt) => {
            dt.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
        }
    }
}

/// The start as Notion wrote it; the typed value is only a fallback.
fn convert_notion_date(
    d: notion_client::objects::page::DatePropertyValue,
    raw_start: Option<&str>,
) -> Option<DateValue> {
    let start = match raw_start {
        Some(start) => start.to_string(),
        None => d.start.map(format_date)?,
    };
    Some(DateValue { start })
}

fn convert_file_ref(f: notion_client::objects::page::FilePropertyValue) -> File {
    use notion_client::objects::file::File as NcFile;

    let source = match f.file {
        NcFile::External { external } => FileSource::External { url: external.url },
        NcFile::File { file } => FileSource::Hosted { url: file.url },
    };
    File {
        name: f.name,
        source,
    }
}

fn convert_page_property(
    property: PageProperty,
    raw_start: Option<&str>,
) -> Result<PropertyValue, AppError> {
    let value = match property {
        PageProperty::Title { title, .. } => PropertyTypeValue::Title {
            title: convert_rich_text_array(title)?,
        },
        PageProperty::RichText { rich_text, .. } => PropertyTypeValue::RichText {
            rich_text: convert_rich_text_array(rich_text)?,
        },
        PageProperty::Checkbox { checkbox, .. } => PropertyTypeValue::Checkbox { checkbox },
        PageProperty::Select { select, .. } => PropertyTypeValue::Select {
            select: select.and_then(|s| s.name).map(|name| SelectOption { name }),
        },
        PageProperty::MultiSelect { multi_select, .. } => PropertyTypeValue::MultiSelect {
            multi_select: multi_select
                .into_iter()
                .filter_map(|s| s.name)
                .map(|name| SelectOption { name })
                .collect(),
        },
        PageProperty::Date { date, .. } => PropertyTypeValue::Date {
            date: date.and_then(|d| convert_notion_date(d, raw_start)),
        },
        PageProperty::People { people, .. } => PropertyTypeValue::People {
            people: people
                .into_iter()
                .map(|user| User {
                    id: user.id,
                    name: user.name,
                })
                .collect(),
        },
        PageProperty::Files { files, .. } => PropertyTypeValue::Files {
            files: files.into_iter().map(convert_file_ref).collect(),
        },
        other => PropertyTypeValue::Other {
            property_type: unmapped_property_type(&other).to_string(),
        },
    };

    Ok(PropertyValue::new(value))
}

/// Notion's type tag for the property kinds an article row does not read.
fn unmapped_property_type(property: &PageProperty) -> &'static str {
    match property {
        PageProperty::Title { .. } => "title",
        PageProperty::RichText { .. } => "rich_text",
        PageProperty::Number { .. } => "number",
        PageProperty::Checkbox { .. } => "checkbox",
        PageProperty::Url { .. } => "url",
        PageProperty::Email { .. } => "email",
        PageProperty::PhoneNumber { .. } => "phone_number",
        PageProperty::Select { .. } => "select",
        PageProperty::MultiSelect { .. } => "multi_select",
        PageProperty::Status { .. } => "status",
        PageProperty::Date { .. } => "date",
        PageProperty::People { .. } => "people",
        PageProperty::Files { .. } => "files",
        PageProperty::CreatedTime { .. } => "created_time",
        PageProperty::CreatedBy { .. } => "created_by",
        PageProperty::LastEditedTime { .. } => "last_edited_time",
        PageProperty::LastEditedBy { .. } => "last_edited_by",
        PageProperty::Relation { .. } => "relation",
        PageProperty::Formula { .. } => "formula",
        PageProperty::Rollup { .. } => "rollup",
        PageProperty::UniqueID { .. } => "unique_id",
        PageProperty::Verification { .. } => "verification",
        PageProperty::Button { .. } => "button",
    }
}
