use serde::{Deserialize, Deserializer, Serialize};

use crate::request::DEFAULT_CATEGORY_COLOR;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Style class token used for the category avatar.
    #[serde(default = "default_color", deserialize_with = "null_as_default_color")]
    pub color: String,
}

fn default_color() -> String {
    DEFAULT_CATEGORY_COLOR.to_string()
}

fn null_as_default_color<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_color))
}
