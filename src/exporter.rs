//! One-shot export pass over the lesson database.

use std::io::Write;

use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::error::ExportError;
use crate::flashcard::{Flashcard, DELIMITER};
use crate::model::{BlockRecord, PageRecord};
use crate::notion::model::{parse_rows, ResultRow};
use crate::notion::{
    build_processed_body, build_query_body, resource_route, ResourceType, Transport,
};

/// Drives one sequential pass: query the database, extract cards from every
/// unprocessed page, then mark each consumed page as processed.
pub struct Exporter<'a> {
    transport: &'a dyn Transport,
    base_url: String,
    page_size: u32,
}

impl<'a> Exporter<'a> {
    pub fn new(transport: &'a dyn Transport, base_url: &str, page_size: u32) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            page_size,
        }
    }

    /// Runs one export pass against `database_id`, writing flashcard lines to
    /// `out`. Returns every row the query yielded; `processed` on each record
    /// reflects the updates made during this run.
    #[instrument(skip_all)]
    pub async fn run(
        &self,
        database_id: &str,
        out: &mut dyn Write,
    ) -> Result<Vec<PageRecord>, ExportError> {
        let query = build_query_body(self.page_size);
        let rows = self
            .fetch_rows(ResourceType::Database, database_id, Some(&query))
            .await?;
        info!(rows = rows.len(), "queried lesson database");

        let mut pages: Vec<PageRecord> = rows.iter().map(PageRecord::from).collect();
        for page in &mut pages {
            if page.processed {
                debug!(page_id = %page.id, "page already processed, skipping");
                continue;
            }

            let blocks = self.fetch_rows(ResourceType::Block, &page.id, None).await?;
            let records = process_blocks(&blocks, out)?;
            debug!(page_id = %page.id, blocks = records.len(), "extracted page blocks");

            match self.mark_processed(&page.id).await {
                Ok(()) => page.processed = true,
                Err(ExportError::UpdateRejected { status, .. }) => {
                    warn!(page_id = %page.id, %status, "processed update rejected, page stays eligible for the next run");
                }
                Err(err) => return Err(err),
            }
        }
        Ok(pages)
    }

    /// Sends one fetch and parses the rows out of its body. A body that does
    /// not match the expected shape, error payloads included, is logged and
    /// treated as an empty result.
    async fn fetch_rows(
        &self,
        resource: ResourceType,
        object_id: &str,
        body: Option<&Value>,
    ) -> Result<Vec<ResultRow>, ExportError> {
        let (path, method) = resource_route(resource, &self.base_url, object_id);
        let response = self.transport.send(method, &path, body).await?;
        match parse_rows(&response.body) {
            Ok(rows) => Ok(rows),
            Err(err) => {
                warn!(status = %response.status, error = %err, "unexpected notion response, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    async fn mark_processed(&self, page_id: &str) -> Result<(), ExportError> {
        let (path, method) = resource_route(ResourceType::Page, &self.base_url, page_id);
        let body = build_processed_body();
        let response = self.transport.send(method, &path, Some(&body)).await?;
        if !response.status.is_success() {
            return Err(ExportError::UpdateRejected {
                page_id: page_id.to_string(),
                status: response.status,
            });
        }
        info!(page_id, "marked page processed");
        Ok(())
    }
}

/// Walks block rows, keeping one record per non-empty paragraph fragment and
/// writing a flashcard line for every fragment carrying the delimiter. A
/// malformed fragment is logged and skipped without touching its siblings.
pub fn process_blocks(
    rows: &[ResultRow],
    out: &mut dyn Write,
) -> Result<Vec<BlockRecord>, ExportError> {
    let mut records = Vec::new();
    for row in rows {
        for fragment in &row.paragraph.text {
            if fragment.plain_text.is_empty() {
                continue;
            }
            let record = BlockRecord {
                id: row.id.clone(),
                last_edited_time: row.last_edited_time,
                content: fragment.plain_text.clone(),
            };
            if record.content.contains(DELIMITER) {
                match Flashcard::parse(&record.content) {
                    Ok(card) => writeln!(out, "{card}")?,
                    Err(err) => {
                        warn!(block_id = %record.id, error = %err, "skipping malformed flashcard")
                    }
                }
            }
            records.push(record);
        }
    }
    Ok(records)
}
