//! One-way flashcard export from a Notion lesson database.
//!
//! Queries a database of lesson pages, parses `word ^ translation ^ example`
//! paragraphs out of each unprocessed page's blocks, prints one import line
//! per card and ticks the page's `Processed` checkbox so the next run only
//! sees new lessons.

pub mod config;
pub mod error;
pub mod exporter;
pub mod flashcard;
pub mod model;
pub mod notion;
