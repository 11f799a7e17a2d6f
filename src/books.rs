//! books.rs
//!
//! Canonical Bible book names and the normalizer that maps the many spellings
//! found in exported data files onto a single abbreviation per book. The table
//! covers all 66 books of the Korean Protestant canon and additionally accepts
//! a handful of alias spellings that show up in real exports (e.g. "사시기" for
//! "사사기", "아가서" for "아가", and the particle-less "데살로니가전" forms).
//!
//! All storage and lookups downstream of the normalizer use the abbreviation
//! ("창", "삼상", "계", ...) as the key, so two rows naming the same book in
//! different ways land in the same bucket.

use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

lazy_static! {
    /// Full (or alias) book name to canonical abbreviation. 70 keys map onto
    /// the 66 canonical abbreviations; the surplus keys are alias spellings.
    static ref BOOK_ABBREVIATIONS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        // Old Testament
        m.insert("창세기", "창");
        m.insert("출애굽기", "출");
        m.insert("레위기", "레");
        m.insert("민수기", "민");
        m.insert("신명기", "신");
        m.insert("여호수아", "수");
        m.insert("사사기", "삿");
        m.insert("사시기", "삿");
        m.insert("룻기", "룻");
        m.insert("사무엘상", "삼상");
        m.insert("사무엘하", "삼하");
        m.insert("열왕기상", "왕상");
        m.insert("열왕기하", "왕하");
        m.insert("역대상", "대상");
        m.insert("역대하", "대하");
        m.insert("에스라", "스");
        m.insert("느헤미야", "느");
        m.insert("에스더", "에");
        m.insert("욥기", "욥");
        m.insert("시편", "시");
        m.insert("잠언", "잠");
        m.insert("전도서", "전");
        m.insert("아가", "아");
        m.insert("아가서", "아");
        m.insert("이사야", "사");
        m.insert("예레미야", "렘");
        m.insert("예레미야애가", "애");
        m.insert("에스겔", "겔");
        m.insert("다니엘", "단");
        m.insert("호세아", "호");
        m.insert("요엘", "욜");
        m.insert("아모스", "암");
        m.insert("오바댜", "옵");
        m.insert("요나", "욘");
        m.insert("미가", "미");
        m.insert("나훔", "나");
        m.insert("하박국", "합");
        m.insert("스바냐", "습");
        m.insert("학개", "학");
        m.insert("스가랴", "슥");
        m.insert("말라기", "말");
        // New Testament
        m.insert("마태복음", "마");
        m.insert("마가복음", "막");
        m.insert("누가복음", "누");
        m.insert("요한복음", "요");
        m.insert("사도행전", "행");
        m.insert("로마서", "롬");
        m.insert("고린도전서", "고전");
        m.insert("고린도후서", "고후");
        m.insert("갈라디아서", "갈");
        m.insert("에베소서", "엡");
        m.insert("빌립보서", "빌");
        m.insert("골로새서", "골");
        m.insert("데살로니가전서", "살전");
        m.insert("데살로니가전", "살전");
        m.insert("데살로니가후서", "살후");
        m.insert("데살로니가후", "살후");
        m.insert("디모데전서", "딤전");
        m.insert("디모데후서", "딤후");
        m.insert("디도서", "딛");
        m.insert("빌레몬서", "몬");
        m.insert("히브리서", "히");
        m.insert("야고보서", "약");
        m.insert("베드로전서", "벧전");
        m.insert("베드로후서", "벧후");
        m.insert("요한일서", "요일");
        m.insert("요한이서", "요이");
        m.insert("요한삼서", "요삼");
        m.insert("유다서", "유");
        m.insert("요한계시록", "계");
        m
    };

    /// The canonical abbreviations themselves, so that data already keyed by
    /// abbreviation ("창", "롬", ...) is accepted as a book token too.
    static ref CANONICAL_ABBREVIATIONS: HashSet<&'static str> =
        BOOK_ABBREVIATIONS.values().copied().collect();
}

/// Looks up a token verbatim: returns the canonical abbreviation when the token
/// is exactly a known full name, alias, or abbreviation. No cleanup is applied,
/// so "01창세기" does not match here.
///
/// Schema detection uses this strict form; see [`normalize_book`] for the
/// permissive form used everywhere else.
pub fn abbreviation_for(token: &str) -> Option<&'static str> {
    if let Some(&abbr) = BOOK_ABBREVIATIONS.get(token) {
        return Some(abbr);
    }
    CANONICAL_ABBREVIATIONS.get(token).copied()
}

/// Strips a leading run of ASCII digits and surrounding whitespace from a book
/// token. Exports commonly prefix book names with an ordering index ("01창세기",
/// "66계"); the digits carry no meaning for identification.
pub fn clean_book_token(token: &str) -> &str {
    token
        .trim_start_matches(|c: char| c.is_ascii_digit())
        .trim()
}

/// Normalizes a raw book token to its canonical abbreviation.
///
/// The token is first cleaned with [`clean_book_token`], then matched against
/// the full names, aliases, and abbreviations. Returns `None` for anything the
/// canon does not contain; callers drop such records silently.
///
/// # Examples
///
/// ```
/// use bible_reading_plan::books::normalize_book;
///
/// assert_eq!(normalize_book("창세기"), Some("창"));
/// assert_eq!(normalize_book("01창세기"), Some("창"));
/// assert_eq!(normalize_book("창"), Some("창"));
/// assert_eq!(normalize_book("외경"), None);
/// ```
pub fn normalize_book(token: &str) -> Option<&'static str> {
    abbreviation_for(clean_book_token(token))
}

/// True when the token names a canonical book after cleanup. Used by the
/// combined-reference reader to find the book column in a row.
pub fn is_book_token(token: &str) -> bool {
    normalize_book(token).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_names_map_to_abbreviations() {
        assert_eq!(normalize_book("창세기"), Some("창"));
        assert_eq!(normalize_book("사무엘상"), Some("삼상"));
        assert_eq!(normalize_book("요한계시록"), Some("계"));
    }

    #[test]
    fn test_alias_spellings_share_the_canonical_abbreviation() {
        assert_eq!(normalize_book("사사기"), Some("삿"));
        assert_eq!(normalize_book("사시기"), Some("삿"));
        assert_eq!(normalize_book("아가"), Some("아"));
        assert_eq!(normalize_book("아가서"), Some("아"));
        assert_eq!(normalize_book("데살로니가전서"), Some("살전"));
        assert_eq!(normalize_book("데살로니가전"), Some("살전"));
        assert_eq!(normalize_book("데살로니가후"), Some("살후"));
    }

    #[test]
    fn test_abbreviations_pass_through_unchanged() {
        assert_eq!(normalize_book("창"), Some("창"));
        assert_eq!(normalize_book("고전"), Some("고전"));
        assert_eq!(normalize_book("벧후"), Some("벧후"));
    }

    #[test]
    fn test_leading_index_digits_are_ignored() {
        assert_eq!(normalize_book("01창세기"), Some("창"));
        assert_eq!(normalize_book("66요한계시록"), Some("계"));
        assert_eq!(normalize_book("40마"), Some("마"));
        assert_eq!(clean_book_token("01창세기"), "창세기");
        assert_eq!(clean_book_token("창세기"), "창세기");
    }

    #[test]
    fn test_unknown_tokens_are_rejected() {
        assert_eq!(normalize_book("외경"), None);
        assert_eq!(normalize_book(""), None);
        assert_eq!(normalize_book("123"), None);
        assert!(!is_book_token("Genesis"));
    }

    #[test]
    fn test_strict_lookup_skips_cleanup() {
        assert_eq!(abbreviation_for("창세기"), Some("창"));
        assert_eq!(abbreviation_for("창"), Some("창"));
        assert_eq!(abbreviation_for("01창세기"), None);
        assert_eq!(abbreviation_for(" 창세기"), None);
    }

    #[test]
    fn test_canon_has_sixty_six_books() {
        assert_eq!(CANONICAL_ABBREVIATIONS.len(), 66);
        assert_eq!(BOOK_ABBREVIATIONS.len(), 70);
    }
}
