//! schema.rs
//!
//! Column-layout detection for tabular export rows.
//!
//! Exports disagree about column order: some put the book first, some lead
//! with a numeric index, some have no verse column at all. Rather than asking
//! the user, the parser inspects the first sufficiently wide row of a source
//! and infers which column holds what:
//!
//! - a field naming a canonical book (exact match) claims the book column,
//! - the first remaining field parsing to a number in `1..=150` claims the
//!   chapter column (150 chapters is the canonical maximum, in 시편),
//! - the next numeric field in `1..=176` claims the verse column (시편 119
//!   has 176 verses),
//! - the longest still-unclaimed field becomes the text column.
//!
//! When detection cannot place both a book and a chapter column, a positional
//! fallback is assumed instead. Either way the layout is fixed after the first
//! attempt and reused for every later row of the same source.

use crate::books;

/// Highest chapter number a detected chapter column may hold.
pub const CHAPTER_MAX: u32 = 150;
/// Highest verse number a detected verse column may hold.
pub const VERSE_MAX: u32 = 176;

/// Column indices for the four record parts. `None` means the column is
/// unknown or absent; rows read under a schema with no verse column get an
/// empty verse label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnSchema {
    pub book: Option<usize>,
    pub chapter: Option<usize>,
    pub verse: Option<usize>,
    pub text: Option<usize>,
}

/// Detection state threaded through one parse pass. Starts undetected; the
/// first row with at least four fields locks the layout in.
#[derive(Debug, Clone, Default)]
pub struct SchemaState {
    pub columns: ColumnSchema,
    pub detected: bool,
}

/// Parses a leading run of ASCII digits, ignoring leading whitespace and
/// anything after the digits. This is the number reading used throughout row
/// classification, so "3장" reads as 3 and "1:1" as 1; a field with no digit
/// prefix is simply not numeric.
pub fn parse_leading_int(field: &str) -> Option<u32> {
    let trimmed = field.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    if end == 0 {
        return None;
    }
    trimmed[..end].parse().ok()
}

/// Inspects one row and proposes a column layout.
///
/// Each field is claimed by at most one role, scanning left to right; the
/// text column is chosen afterwards as the longest (in characters) field not
/// already claimed. A role that no field qualifies for stays `None`.
pub fn detect_columns(fields: &[String]) -> ColumnSchema {
    let mut schema = ColumnSchema::default();

    for (idx, field) in fields.iter().enumerate() {
        let number = parse_leading_int(field);
        if schema.book.is_none() && books::abbreviation_for(field).is_some() {
            schema.book = Some(idx);
        } else if schema.chapter.is_none()
            && matches!(number, Some(n) if n >= 1 && n <= CHAPTER_MAX)
        {
            schema.chapter = Some(idx);
        } else if schema.verse.is_none()
            && matches!(number, Some(n) if n >= 1 && n <= VERSE_MAX)
        {
            schema.verse = Some(idx);
        }
    }

    let mut max_chars = 0;
    for (idx, field) in fields.iter().enumerate() {
        if Some(idx) == schema.book || Some(idx) == schema.chapter || Some(idx) == schema.verse {
            continue;
        }
        let chars = field.chars().count();
        if chars > max_chars {
            max_chars = chars;
            schema.text = Some(idx);
        }
    }

    schema
}

/// Positional layout assumed when detection fails: `book,chapter,verse,text`,
/// shifted right by one when the row is five fields or wider and its third
/// field is numeric (a leading index column).
fn fallback_columns(fields: &[String]) -> ColumnSchema {
    if fields.len() >= 5 && parse_leading_int(&fields[2]).is_some() {
        ColumnSchema {
            book: Some(1),
            chapter: Some(2),
            verse: Some(3),
            text: Some(4),
        }
    } else {
        ColumnSchema {
            book: Some(0),
            chapter: Some(1),
            verse: Some(2),
            text: Some(3),
        }
    }
}

impl SchemaState {
    /// Runs detection once, on the first row wide enough to carry signal
    /// (four or more fields). Narrower rows leave the state untouched so a
    /// later row gets the chance instead.
    ///
    /// A detected layout is adopted only when it places both the book and the
    /// chapter column; its text column defaults to the last field when none
    /// stood out. Otherwise the positional fallback is adopted.
    pub fn ensure_detected(&mut self, fields: &[String]) {
        if self.detected || fields.len() < 4 {
            return;
        }

        let mut proposed = detect_columns(fields);
        if proposed.book.is_some() && proposed.chapter.is_some() {
            if proposed.text.is_none() {
                proposed.text = Some(fields.len() - 1);
            }
            self.columns = proposed;
        } else {
            self.columns = fallback_columns(fields);
        }
        self.detected = true;
    }
}
