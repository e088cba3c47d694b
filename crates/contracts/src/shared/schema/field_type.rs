//! Field type enumeration for entity schemas

use serde::{Deserialize, Serialize};

/// Closed set of field types a schema can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    #[default]
    Text,
    Textarea,
    Number,
    Currency,
    Percent,
    Date,
    DateTime,
    Time,
    Select,
    MultiSelect,
    Relation,
    RichText,
    File,
    Image,
    Switch,
    Email,
    Phone,
    Url,
    Color,
    Rating,
    Tags,
    Json,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Number => "number",
            Self::Currency => "currency",
            Self::Percent => "percent",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Time => "time",
            Self::Select => "select",
            Self::MultiSelect => "multiselect",
            Self::Relation => "relation",
            Self::RichText => "richtext",
            Self::File => "file",
            Self::Image => "image",
            Self::Switch => "switch",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Url => "url",
            Self::Color => "color",
            Self::Rating => "rating",
            Self::Tags => "tags",
            Self::Json => "json",
        }
    }

    /// Values stored as free text (including option keys and relation ids)
    pub fn is_textual(&self) -> bool {
        matches!(
            self,
            Self::Text
                | Self::Textarea
                | Self::RichText
                | Self::Email
                | Self::Phone
                | Self::Url
                | Self::Color
                | Self::Time
                | Self::File
                | Self::Image
                | Self::Select
                | Self::Relation
        )
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Number | Self::Currency | Self::Percent | Self::Rating
        )
    }

    pub fn is_temporal(&self) -> bool {
        matches!(self, Self::Date | Self::DateTime)
    }

    /// Types whose value is a list of strings
    pub fn is_list(&self) -> bool {
        matches!(self, Self::MultiSelect | Self::Tags)
    }

    /// Types that must declare `options`
    pub fn requires_options(&self) -> bool {
        matches!(self, Self::Select | Self::MultiSelect)
    }

    /// HTML input type used by the generic form renderer
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Number | Self::Currency | Self::Percent | Self::Rating => "number",
            Self::Date => "date",
            Self::DateTime => "datetime-local",
            Self::Time => "time",
            Self::Email => "email",
            Self::Phone => "tel",
            Self::Url => "url",
            Self::Color => "color",
            _ => "text",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_do_not_overlap() {
        let all = [
            FieldType::Text,
            FieldType::Number,
            FieldType::Date,
            FieldType::MultiSelect,
            FieldType::Switch,
            FieldType::Json,
        ];
        for ty in all {
            let hits = [ty.is_textual(), ty.is_numeric(), ty.is_temporal(), ty.is_list()]
                .iter()
                .filter(|b| **b)
                .count();
            assert!(hits <= 1, "{} falls into several categories", ty.as_str());
        }
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&FieldType::MultiSelect).unwrap();
        assert_eq!(json, "\"multi_select\"");
    }
}
