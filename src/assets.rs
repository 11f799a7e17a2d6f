//! assets.rs
//!
//! Data compiled into the library: the chronological reading schedule and a
//! small sample of verse text used when no external source resolves. Both
//! live under `src/data/` and are embedded with `include_str!`, so shipping
//! the library needs no data directory at runtime.

/// The built-in 90-day chronological reading schedule, one day per line in
/// the `"{일차}. {책이름} {장번호들}"` shape the plan compiler reads.
pub const READING_SCHEDULE: &str = include_str!("data/plan.txt");

/// Built-in fallback verse sample in the free-text line shape. Far from a
/// whole Bible; just enough for the app to stay readable offline.
pub const DEFAULT_BIBLE_TEXT: &str = include_str!("data/default_text.txt");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::parse_bible_text;
    use crate::plan::{compile_plan, total_chapters};

    #[test]
    fn test_schedule_covers_ninety_days_and_the_whole_canon() {
        // Compiled against an empty store every scheduled chapter still
        // appears (as a placeholder), which proves every line parses.
        let empty = parse_bible_text("").store;
        let days = compile_plan(READING_SCHEDULE, &empty);
        assert_eq!(days.len(), 90);
        assert_eq!(total_chapters(&days), 1189);
        assert_eq!(days[0].day, 1);
        assert_eq!(days[89].day, 90);
    }

    #[test]
    fn test_schedule_books_all_normalize() {
        let empty = parse_bible_text("").store;
        for day in compile_plan(READING_SCHEDULE, &empty) {
            for chapter in &day.chapters {
                assert!(
                    !chapter.content.contains("(?)"),
                    "unknown book {} on day {}",
                    chapter.book,
                    day.day
                );
            }
        }
    }

    #[test]
    fn test_default_text_parses_into_the_store() {
        let parsed = parse_bible_text(DEFAULT_BIBLE_TEXT);
        assert_eq!(parsed.diagnostics.book_count, 3);
        assert_eq!(parsed.diagnostics.total_verses, 12);
        assert_eq!(parsed.store.book_abbreviations(), ["창", "시", "요"]);
        assert!(parsed
            .store
            .chapter_text("창", 1)
            .unwrap()
            .starts_with("1. 태초에 하나님이 천지를 창조하시니라"));
    }
}
