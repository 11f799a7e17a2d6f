//! plan.rs
//!
//! Compiles a day-numbered reading schedule against a [`ContentStore`].
//!
//! Schedule text is one day per line, `"{일차}. {항목, 항목, ...}"`, where each
//! entry names a book followed by a chapter range (`1-3`), list (`1,3,5`), or
//! single chapter. Every scheduled chapter becomes a [`CompiledChapter`] whose
//! content is either the loaded chapter text or a Korean placeholder explaining
//! what was missing, so a compiled plan is always fully readable. Days are
//! emitted in schedule order; the compiler never reorders or deduplicates.
//!
//! Lines that do not look like a day, and entries that do not look like a
//! reading, are skipped without complaint. A day whose entries all fail to
//! produce chapters is omitted entirely.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::books;
use crate::content::ContentStore;

// "{일차}. {나머지}" with at least one space after the dot.
static DAY_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\.\s+(.*)").unwrap());

// "{책이름} {장번호들}" where the chapter part is digits, commas, and dashes.
static READING_ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([가-힣\s]+?)\s+([\d,-]+)$").unwrap());

/// One scheduled chapter, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledChapter {
    /// Stable handle for UI state, `"day{일차}-{책이름}-{장}"`.
    pub id: String,
    /// The book name as the schedule wrote it.
    pub book: String,
    pub chapter: u32,
    /// Display title, `"{책이름} {장}장"`.
    pub title: String,
    /// Chapter text, or a placeholder when the store lacks it.
    pub content: String,
}

/// One day of the compiled plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledDayPlan {
    pub day: u32,
    pub chapters: Vec<CompiledChapter>,
}

/// Expands the chapter part of a schedule entry into chapter numbers.
///
/// A dashed range is inclusive and ascending; `3-1` is empty. A comma list
/// keeps its written order. Anything unparsable contributes nothing.
pub fn expand_chapter_list(part: &str) -> Vec<u32> {
    if part.contains('-') {
        let mut ends = part.split('-');
        let start = ends.next().and_then(|s| s.trim().parse::<u32>().ok());
        let end = ends.next().and_then(|s| s.trim().parse::<u32>().ok());
        match (start, end) {
            (Some(start), Some(end)) => (start..=end).collect(),
            _ => Vec::new(),
        }
    } else if part.contains(',') {
        part.split(',')
            .filter_map(|n| n.trim().parse().ok())
            .collect()
    } else {
        part.trim().parse().into_iter().collect()
    }
}

fn compile_chapter(
    day: u32,
    book_name: &str,
    chapter: u32,
    abbr: Option<&str>,
    store: &ContentStore,
) -> CompiledChapter {
    let content = match abbr {
        Some(abbr) if store.has_book(abbr) => match store.chapter_text(abbr, chapter) {
            Some(text) => text.to_string(),
            None => format!(
                "(본문이 없습니다. 데이터 파일에 {} {}장이 포함되어 있는지 확인해주세요.)",
                book_name, chapter
            ),
        },
        _ => format!(
            "(본문 없음 - {}({}) 데이터를 찾을 수 없습니다. 성경책 데이터가 없습니다.)",
            book_name,
            abbr.unwrap_or("?")
        ),
    };

    CompiledChapter {
        id: format!("day{}-{}-{}", day, book_name, chapter),
        book: book_name.to_string(),
        chapter,
        title: format!("{} {}장", book_name, chapter),
        content,
    }
}

/// Compiles `schedule` against `store`.
///
/// # Examples
///
/// ```
/// use bible_reading_plan::content::parse_bible_text;
/// use bible_reading_plan::plan::compile_plan;
///
/// let parsed = parse_bible_text("창세기 1:1 태초에 하나님이 천지를 창조하시니라");
/// let days = compile_plan("1. 창세기 1", &parsed.store);
/// assert_eq!(days[0].chapters[0].title, "창세기 1장");
/// ```
pub fn compile_plan(schedule: &str, store: &ContentStore) -> Vec<CompiledDayPlan> {
    let mut days = Vec::new();

    for raw_line in schedule.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let caps = match DAY_LINE.captures(line) {
            Some(caps) => caps,
            None => continue,
        };
        let day: u32 = match caps[1].parse() {
            Ok(day) => day,
            Err(_) => continue,
        };

        let mut chapters = Vec::new();
        for raw_entry in caps[2].split(',') {
            let entry = raw_entry.trim();
            if entry.is_empty() {
                continue;
            }
            let entry_caps = match READING_ENTRY.captures(entry) {
                Some(caps) => caps,
                None => continue,
            };
            let book_name = entry_caps[1].trim().to_string();
            let abbr = books::normalize_book(&book_name);

            for chapter in expand_chapter_list(entry_caps[2].trim()) {
                chapters.push(compile_chapter(day, &book_name, chapter, abbr, store));
            }
        }

        if !chapters.is_empty() {
            days.push(CompiledDayPlan { day, chapters });
        }
    }

    days
}

/// Compiles the bundled chronological schedule against `store`.
pub fn compile_default_plan(store: &ContentStore) -> Vec<CompiledDayPlan> {
    compile_plan(crate::assets::READING_SCHEDULE, store)
}

/// Total chapter count across all compiled days, used for progress display.
pub fn total_chapters(days: &[CompiledDayPlan]) -> usize {
    days.iter().map(|day| day.chapters.len()).sum()
}
