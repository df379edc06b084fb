//! Flashcard parsing and line rendering.

use std::fmt;

use crate::error::ExportError;

/// Separates word, translation and example sentence inside a block's text.
pub const DELIMITER: char = '^';

/// Language tag written into every output line. The lesson database carries
/// no per-card language, so the tag is fixed.
pub const SOURCE_LANGUAGE: &str = "JP";

/// One card, rendered as `example;word;JP;translation` for import. Embedded
/// semicolons are not escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    pub word: String,
    pub translation: String,
    pub example: String,
}

impl Flashcard {
    /// Splits `content` on [`DELIMITER`] into word, translation and example,
    /// trimming surrounding whitespace. Segments past the third are ignored.
    pub fn parse(content: &str) -> Result<Flashcard, ExportError> {
        let mut parts = content.split(DELIMITER).map(str::trim);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(word), Some(translation), Some(example)) => Ok(Flashcard {
                word: word.to_string(),
                translation: translation.to_string(),
                example: example.to_string(),
            }),
            _ => Err(ExportError::MalformedFlashcard {
                content: content.to_string(),
            }),
        }
    }
}

impl fmt::Display for Flashcard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{};{};{};{}",
            self.example, self.word, SOURCE_LANGUAGE, self.translation
        )
    }
}
