use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::ExportError;

/// Envelope shared by database query and block children responses.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub results: Vec<ResultRow>,
}

/// One result entry. Database rows carry `properties`, block rows carry
/// `paragraph`; everything but `id` defaults when absent so both shapes
/// come through the same struct.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultRow {
    pub id: String,
    #[serde(default)]
    pub last_edited_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub has_children: bool,
    #[serde(default)]
    pub paragraph: Paragraph,
    #[serde(default)]
    pub properties: RowProperties,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub text: Vec<TextFragment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextFragment {
    #[serde(default)]
    pub plain_text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RowProperties {
    #[serde(rename = "Processed", default)]
    pub processed: CheckboxProperty,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckboxProperty {
    #[serde(default)]
    pub checkbox: bool,
}

/// Parses a response body into its result rows.
pub fn parse_rows(body: &str) -> Result<Vec<ResultRow>, ExportError> {
    let response: QueryResponse = serde_json::from_str(body)?;
    Ok(response.results)
}
