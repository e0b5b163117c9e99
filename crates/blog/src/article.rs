use serde::{Deserialize, Serialize};

/// One blog entry, as persisted in the article file.
///
/// The `content` field is trusted, admin-authored HTML; it is stored
/// and served as-is. Dates are display strings, not parsed values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub category: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
