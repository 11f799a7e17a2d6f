//! extract.rs
//!
//! Turns one line of export data into a verse record, or nothing.
//!
//! Three reading strategies are tried in a fixed order on each line:
//!
//! 1. **Combined reference** (comma lines only): one field is a `장:절`
//!    reference like `1:1`, another names a book, and the longest remaining
//!    field is the verse text.
//! 2. **Column schema** (comma lines only): the line is read positionally
//!    under the layout locked in by [`SchemaState`], detecting that layout
//!    first if it has not been locked yet.
//! 3. **Free text**: the whole line matches `책이름 장:절 본문`, with an
//!    optional ignored digit prefix before the name.
//!
//! A later strategy runs only when every earlier one declined the line. A
//! strategy that reads the line but produces an unusable record (no book
//! token, or no positive chapter number) still claims it; the record is then
//! dropped rather than reinterpreted. Records leave this module with their
//! book token raw, not yet normalized.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::books;
use crate::schema::{parse_leading_int, SchemaState};
use crate::tokenizer::split_row;

/// One extracted verse, book token still raw. The verse label stays a string
/// because exports carry ranges ("1-3") and letter suffixes ("12a") there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseRecord {
    pub book_token: String,
    pub chapter: u32,
    pub verse: String,
    pub text: String,
}

// A field that is exactly a chapter:verse reference.
static COMBINED_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+:\d+$").unwrap());

// A whole line in free-text form, e.g. "01창세기 1:1 태초에 ...".
static FREE_TEXT_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d*?)([가-힣]+)\s+(\d+):(\d+)\s+(.*)$").unwrap());

/// True for lines that describe the data rather than contain it. Matches
/// English `Book,...` headers, anything mentioning "성경", and short lines
/// that name both 장 and 절 (column captions). The 50-character cap keeps
/// actual verse text, which routinely contains both words, off this path.
pub fn is_header_line(line: &str) -> bool {
    line.starts_with("Book")
        || line.starts_with("book")
        || line.contains("성경")
        || (line.contains('장') && line.contains('절') && line.chars().count() < 50)
}

/// Strategy 1: a row carrying a combined `장:절` reference field.
///
/// Needs three things in the row: the first field matching `장:절`, any other
/// field naming a book (leading index digits allowed), and at least one field
/// beyond those two; the longest such field, by character count, becomes the
/// text. Declines the row when any of the three is missing.
pub fn extract_combined_reference(fields: &[String]) -> Option<VerseRecord> {
    let ref_idx = fields.iter().position(|f| COMBINED_REF.is_match(f))?;
    let (chapter_str, verse_str) = fields[ref_idx].split_once(':')?;

    let book_idx = fields
        .iter()
        .enumerate()
        .find(|(idx, field)| *idx != ref_idx && books::is_book_token(field))
        .map(|(idx, _)| idx)?;

    let mut text_idx = None;
    let mut max_chars = 0;
    for (idx, field) in fields.iter().enumerate() {
        if idx == ref_idx || idx == book_idx {
            continue;
        }
        let chars = field.chars().count();
        if text_idx.is_none() || chars > max_chars {
            text_idx = Some(idx);
            max_chars = chars;
        }
    }
    let text_idx = text_idx?;

    Some(VerseRecord {
        book_token: books::clean_book_token(&fields[book_idx]).to_string(),
        chapter: chapter_str.parse().unwrap_or(0),
        verse: verse_str.to_string(),
        text: fields[text_idx].clone(),
    })
}

/// Strategy 2: positional read under the source's column schema.
///
/// Locks the schema in on first use (see [`SchemaState::ensure_detected`]),
/// then requires the row to reach the book, chapter, and text columns; the
/// verse column alone may be missing, in which case the verse label is empty.
/// A reachable chapter field that does not parse yields chapter 0, which
/// still claims the line.
pub fn extract_with_schema(fields: &[String], state: &mut SchemaState) -> Option<VerseRecord> {
    state.ensure_detected(fields);
    if !state.detected {
        return None;
    }

    let book_col = state.columns.book?;
    let chapter_col = state.columns.chapter?;
    let text_col = state.columns.text?;
    if fields.len() <= book_col.max(chapter_col).max(text_col) {
        return None;
    }

    let verse = state
        .columns
        .verse
        .and_then(|col| fields.get(col))
        .cloned()
        .unwrap_or_default();

    Some(VerseRecord {
        book_token: fields[book_col].clone(),
        chapter: parse_leading_int(&fields[chapter_col]).unwrap_or(0),
        verse,
        text: fields[text_col].clone(),
    })
}

/// Strategy 3: the whole line as `책이름 장:절 본문`.
pub fn extract_free_text(line: &str) -> Option<VerseRecord> {
    let caps = FREE_TEXT_LINE.captures(line)?;
    Some(VerseRecord {
        book_token: caps[2].to_string(),
        chapter: caps[3].parse().unwrap_or(0),
        verse: caps[4].to_string(),
        text: caps[5].to_string(),
    })
}

/// Runs the strategy cascade on one trimmed, non-header line.
///
/// Comma lines go through strategies 1 and 2 on the tokenized fields; any
/// line left unclaimed is offered to the free-text strategy whole. A claimed
/// record is finally gated on having a non-empty book token and a positive
/// chapter; failing that gate drops the line without trying later strategies.
pub fn extract_record(line: &str, state: &mut SchemaState) -> Option<VerseRecord> {
    let mut record = None;

    if line.contains(',') {
        let fields = split_row(line);
        record = extract_combined_reference(&fields)
            .or_else(|| extract_with_schema(&fields, state));
    }
    if record.is_none() {
        record = extract_free_text(line);
    }

    record.filter(|r| !r.book_token.is_empty() && r.chapter > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_combined_reference_row_is_read() {
        let record = extract_combined_reference(&fields(&["01창", "1:1", "본문"]));
        assert_eq!(
            record,
            Some(VerseRecord {
                book_token: "창".to_string(),
                chapter: 1,
                verse: "1".to_string(),
                text: "본문".to_string(),
            })
        );
    }

    #[test]
    fn test_combined_reference_takes_the_longest_text_field() {
        let record = extract_combined_reference(&fields(&["1:3", "창", "짧다", "더 긴 본문이다"]));
        let record = record.unwrap();
        assert_eq!(record.chapter, 1);
        assert_eq!(record.verse, "3");
        assert_eq!(record.text, "더 긴 본문이다");
    }

    #[test]
    fn test_combined_reference_declines_without_a_book() {
        assert_eq!(extract_combined_reference(&fields(&["1:1", "모름", "본문"])), None);
    }

    #[test]
    fn test_combined_reference_declines_without_a_text_field() {
        assert_eq!(extract_combined_reference(&fields(&["1:1", "창"])), None);
    }

    #[test]
    fn test_schema_read_uses_detected_columns() {
        let mut state = SchemaState::default();
        let record =
            extract_with_schema(&fields(&["창세기", "1", "2", "그 땅이 혼돈하고 공허하며"]), &mut state);
        let record = record.unwrap();
        assert_eq!(record.book_token, "창세기");
        assert_eq!(record.chapter, 1);
        assert_eq!(record.verse, "2");
        assert_eq!(record.text, "그 땅이 혼돈하고 공허하며");
    }

    #[test]
    fn test_schema_read_declines_rows_missing_needed_columns() {
        let mut state = SchemaState::default();
        state.ensure_detected(&fields(&["창세기", "1", "1", "태초에 하나님이"]));
        assert_eq!(extract_with_schema(&fields(&["창세기", "2"]), &mut state), None);
    }

    #[test]
    fn test_missing_verse_column_yields_empty_verse_label() {
        let mut state = SchemaState::default();
        // Three claims succeed (book, chapter, text) but nothing looks like a
        // verse column, so rows read with an empty verse label.
        state.ensure_detected(&fields(&["창세기", "1", "본문이 꽤 길게 들어간다", "메모"]));
        assert!(state.detected);
        assert_eq!(state.columns.book, Some(0));
        let record = extract_with_schema(
            &fields(&["출애굽기", "2", "다른 본문이 꽤 길게 들어간다", "메모"]),
            &mut state,
        );
        assert_eq!(record.unwrap().verse, "");
    }

    #[test]
    fn test_free_text_line_is_read() {
        let record = extract_free_text("창세기 1:1 태초에 하나님이 천지를 창조하시니라").unwrap();
        assert_eq!(record.book_token, "창세기");
        assert_eq!(record.chapter, 1);
        assert_eq!(record.verse, "1");
        assert_eq!(record.text, "태초에 하나님이 천지를 창조하시니라");
    }

    #[test]
    fn test_free_text_digit_prefix_is_dropped() {
        let record = extract_free_text("01창세기 3:16 여자에게 이르시되").unwrap();
        assert_eq!(record.book_token, "창세기");
        assert_eq!(record.chapter, 3);
    }

    #[test]
    fn test_free_text_declines_unshaped_lines() {
        assert_eq!(extract_free_text("그냥 텍스트 한 줄"), None);
        assert_eq!(extract_free_text("창세기 본문 없음"), None);
    }

    #[test]
    fn test_header_lines_are_recognized() {
        assert!(is_header_line("Book,Chapter,Verse,Text"));
        assert!(is_header_line("book,chapter,verse,text"));
        assert!(is_header_line("개역한글 성경 데이터"));
        assert!(is_header_line("책,장,절,내용"));
    }

    #[test]
    fn test_long_verse_text_mentioning_both_caption_words_is_not_a_header() {
        let line = "그 두루마리를 여러 장 읽고 또 한 절 한 절 깊이 묵상하며 밤이 새도록 기록하였더라 하는 긴 본문";
        assert!(line.chars().count() >= 50);
        assert!(!is_header_line(line));
    }

    #[test]
    fn test_cascade_prefers_the_combined_reference() {
        let mut state = SchemaState::default();
        // Both strategy 1 and a positional read could claim this row; the
        // combined reference wins and supplies the verse label.
        let record = extract_record("창세기,1:5,빛을 낮이라 부르시니라", &mut state).unwrap();
        assert_eq!(record.verse, "5");
        assert_eq!(record.text, "빛을 낮이라 부르시니라");
    }

    #[test]
    fn test_cascade_rescues_comma_bearing_free_text() {
        let mut state = SchemaState::default();
        let record = extract_record("창세기 1:2 땅이 혼돈하고, 공허하며", &mut state).unwrap();
        assert_eq!(record.book_token, "창세기");
        assert_eq!(record.text, "땅이 혼돈하고, 공허하며");
    }

    #[test]
    fn test_schema_claim_with_bad_chapter_suppresses_free_text() {
        let mut state = SchemaState::default();
        // The positional fallback reads this row with an unparsable chapter
        // field. The claim stands, so the free-text reading (which would have
        // succeeded) is never attempted and the line is dropped.
        assert_eq!(
            extract_record("창세기 1:1 본문,없음,없음,없음", &mut state),
            None
        );
        assert!(state.detected);
    }

    #[test]
    fn test_chapter_zero_is_dropped_at_the_gate() {
        let mut state = SchemaState::default();
        assert_eq!(extract_record("창,0:5,본문", &mut state), None);
    }

    #[test]
    fn test_unknown_book_tokens_pass_through_unnormalized() {
        let record = extract_free_text("모르는책 1:1 본문").unwrap();
        assert_eq!(record.book_token, "모르는책");
    }
}
