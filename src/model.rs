use chrono::{DateTime, Utc};

use crate::notion::model::ResultRow;

/// One database row tracked across the run. `processed` starts from the
/// checkbox on the row and flips once the page's update succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    pub id: String,
    pub last_edited_time: Option<DateTime<Utc>>,
    pub processed: bool,
}

impl From<&ResultRow> for PageRecord {
    fn from(row: &ResultRow) -> Self {
        PageRecord {
            id: row.id.clone(),
            last_edited_time: row.last_edited_time,
            processed: row.properties.processed.checkbox,
        }
    }
}

/// One non-empty paragraph fragment lifted out of a page's blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRecord {
    pub id: String,
    pub last_edited_time: Option<DateTime<Utc>>,
    pub content: String,
}
