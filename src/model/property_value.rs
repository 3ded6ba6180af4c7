use crate::types::*;
use serde::{Deserialize, Serialize};

/// Property value: wraps a typed value with its property ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyValue {
    pub id: String,
    #[serde(flatten)]
    pub type_specific_value: PropertyTypeValue,
}

impl PropertyValue {
    pub fn new(type_specific_value: PropertyTypeValue) -> Self {
        Self {
            id: String::new(),
            type_specific_value,
        }
    }
}

/// The property kinds an article row is read from. Everything else is `Other`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyTypeValue {
    Title { title: Vec<RichTextItem> },
    RichText { rich_text: Vec<RichTextItem> },
    Select { select: Option<SelectOption> },
    MultiSelect { multi_select: Vec<SelectOption> },
    Date { date: Option<DateValue> },
    People { people: Vec<User> },
    Files { files: Vec<File> },
    Checkbox { checkbox: bool },
    Other { property_type: String },
}
