//! content.rs
//!
//! The normalized content store and the parse pass that fills it.
//!
//! [`parse_bible_text`] walks export text line by line, skips headers and
//! blanks, extracts verse records through the strategy cascade, normalizes
//! their book tokens, and aggregates the survivors into per-book, per-chapter
//! text blocks. Verses are appended in encounter order, never re-sorted, so a
//! source that lists verse 3 before verse 1 produces a chapter that reads 3
//! before 1. Books and chapters likewise remember first-seen order.
//!
//! The pass never fails; lines that fit no strategy or name no canonical book
//! contribute nothing. What it does report is [`ParseDiagnostics`]: how much
//! was loaded, plus a short preview of the first few accepted verses for
//! surfacing in a UI.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::books;
use crate::extract::{self, VerseRecord};
use crate::schema::SchemaState;

/// How many accepted verses the diagnostics preview keeps.
pub const PREVIEW_LINES: usize = 3;
/// How many characters of verse text a preview line shows before truncating.
pub const PREVIEW_TEXT_CHARS: usize = 30;

/// Accumulated text per chapter of one book, in first-seen chapter order.
#[derive(Debug, Clone, Default)]
pub struct BookContent {
    chapters: HashMap<u32, String>,
    order: Vec<u32>,
}

impl BookContent {
    /// The aggregated text of one chapter. Each appended verse contributes
    /// `"{절}. {본문}\n\n"`.
    pub fn chapter(&self, number: u32) -> Option<&str> {
        self.chapters.get(&number).map(String::as_str)
    }

    /// Chapter numbers in the order they first appeared.
    pub fn chapter_numbers(&self) -> &[u32] {
        &self.order
    }

    fn append_verse(&mut self, chapter: u32, verse: &str, text: &str) {
        let block = match self.chapters.entry(chapter) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                self.order.push(chapter);
                entry.insert(String::new())
            }
        };
        block.push_str(verse);
        block.push_str(". ");
        block.push_str(text);
        block.push_str("\n\n");
    }
}

/// All loaded books, keyed by canonical abbreviation, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    books: HashMap<String, BookContent>,
    order: Vec<String>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    pub fn has_book(&self, abbr: &str) -> bool {
        self.books.contains_key(abbr)
    }

    pub fn book(&self, abbr: &str) -> Option<&BookContent> {
        self.books.get(abbr)
    }

    /// Canonical abbreviations of the loaded books, in first-seen order.
    pub fn book_abbreviations(&self) -> &[String] {
        &self.order
    }

    /// The aggregated text of `abbr` chapter `chapter`, if loaded.
    pub fn chapter_text(&self, abbr: &str, chapter: u32) -> Option<&str> {
        self.books.get(abbr).and_then(|book| book.chapter(chapter))
    }

    /// Appends one verse to its chapter block, creating book and chapter
    /// buckets on first use. `abbr` must already be canonical; the parse pass
    /// normalizes before calling this.
    pub fn append_verse(&mut self, abbr: &str, chapter: u32, verse: &str, text: &str) {
        let book = match self.books.entry(abbr.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                self.order.push(abbr.to_string());
                entry.insert(BookContent::default())
            }
        };
        book.append_verse(chapter, verse, text);
    }
}

/// What a parse pass loaded, for display next to the compiled plan.
#[derive(Debug, Clone, Default)]
pub struct ParseDiagnostics {
    pub book_count: usize,
    pub total_verses: usize,
    /// Up to [`PREVIEW_LINES`] formatted samples of the first accepted verses.
    pub preview: Vec<String>,
}

impl ParseDiagnostics {
    /// One-line load summary, e.g. `총 2권, 약 31절 로드됨`.
    pub fn summary(&self) -> String {
        format!("총 {}권, 약 {}절 로드됨", self.book_count, self.total_verses)
    }
}

/// A filled store together with its diagnostics.
#[derive(Debug, Clone, Default)]
pub struct ParsedContent {
    pub store: ContentStore,
    pub diagnostics: ParseDiagnostics,
}

fn preview_line(abbr: &str, record: &VerseRecord) -> String {
    let total_chars = record.text.chars().count();
    let snippet: String = record.text.chars().take(PREVIEW_TEXT_CHARS).collect();
    let ellipsis = if total_chars > PREVIEW_TEXT_CHARS { "..." } else { "" };
    format!(
        "[{} {}:{}] {}{}",
        abbr, record.chapter, record.verse, snippet, ellipsis
    )
}

/// Parses one blob of export text into a [`ContentStore`].
///
/// The blob may mix every supported line shape; the column schema is detected
/// once per call, on the first tabular row wide enough to judge. Unusable
/// lines are skipped silently.
///
/// # Examples
///
/// ```
/// use bible_reading_plan::content::parse_bible_text;
///
/// let parsed = parse_bible_text("창세기 1:1 태초에 하나님이 천지를 창조하시니라");
/// assert_eq!(parsed.diagnostics.total_verses, 1);
/// assert!(parsed.store.has_book("창"));
/// ```
pub fn parse_bible_text(raw: &str) -> ParsedContent {
    let mut store = ContentStore::new();
    let mut total_verses = 0;
    let mut preview = Vec::new();
    let mut state = SchemaState::default();

    for raw_line in raw.lines() {
        // U+FEFF is not whitespace to `trim`, and payloads that arrive
        // without passing through `fileio` still carry their BOM.
        let line = raw_line.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
        if line.is_empty() || extract::is_header_line(line) {
            continue;
        }

        let record = match extract::extract_record(line, &mut state) {
            Some(record) => record,
            None => continue,
        };
        let abbr = match books::normalize_book(&record.book_token) {
            Some(abbr) => abbr,
            None => continue,
        };

        store.append_verse(abbr, record.chapter, &record.verse, &record.text);
        total_verses += 1;
        if preview.len() < PREVIEW_LINES {
            preview.push(preview_line(abbr, &record));
        }
    }

    let diagnostics = ParseDiagnostics {
        book_count: store.book_count(),
        total_verses,
        preview,
    };
    ParsedContent { store, diagnostics }
}
