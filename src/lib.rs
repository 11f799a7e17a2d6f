//! Parsing and plan-compilation core for a Korean chronological
//! Bible-reading app.
//!
//! Church-shared Bible text files come in wildly different shapes: quoted
//! and unquoted CSV, columns in any order, combined `장:절` reference
//! fields, or plain `책이름 장:절 본문` lines, often with stray headers and
//! decoration mixed in. This crate reads all of them with one forgiving
//! pipeline and compiles the result against a built-in 90-day chronological
//! schedule:
//!
//! - **`tokenizer`**: quote-aware splitting of one export line into fields.
//! - **`schema`**: per-source detection of which column holds what.
//! - **`extract`**: the three-strategy reading of a line into a verse record.
//! - **`books`**: normalization of book names onto canonical abbreviations.
//! - **`content`**: the per-book, per-chapter store and parse diagnostics.
//! - **`plan`**: compiling schedule lines into day-by-day readings, with
//!   Korean placeholders where text is missing.
//! - **`sources`**: assembling fetched source payloads, with fallback to the
//!   bundled sample text.
//! - **`assets`**: the bundled schedule and sample text.
//! - **`dates`**: calendar labels for plan days.
//! - **`fileio`**: reading local export files.
//!
//! Bad lines never abort a parse; they are skipped, and scheduled chapters
//! with no loaded text compile to explanatory placeholders, so the compiled
//! plan is always complete and readable.
//!
//! # Usage
//!
//! ```
//! use bible_reading_plan::build_default_reading_plan;
//!
//! let plan = build_default_reading_plan();
//! assert_eq!(plan.days.len(), 90);
//!
//! // Day 1 starts with 창세기 1장; the bundled sample carries its text.
//! let first = &plan.days[0].chapters[0];
//! assert_eq!(first.title, "창세기 1장");
//! assert!(first.content.starts_with("1. 태초에"));
//! ```

pub mod assets;
pub mod books;
pub mod content;
pub mod dates;
pub mod extract;
pub mod fileio;
pub mod plan;
pub mod schema;
pub mod sources;
pub mod tokenizer;

/// A fully compiled reading plan plus what the parse pass reported.
#[derive(Debug, Clone)]
pub struct CompiledPlan {
    pub days: Vec<plan::CompiledDayPlan>,
    pub diagnostics: content::ParseDiagnostics,
}

/// Parses `raw_text` and compiles the bundled chronological schedule
/// against it.
pub fn build_reading_plan(raw_text: &str) -> CompiledPlan {
    let parsed = content::parse_bible_text(raw_text);
    let days = plan::compile_default_plan(&parsed.store);
    CompiledPlan {
        days,
        diagnostics: parsed.diagnostics,
    }
}

/// Compiles the bundled schedule against the bundled sample text. This is
/// the offline no-source path; every chapter the sample does not cover
/// compiles to a placeholder.
pub fn build_default_reading_plan() -> CompiledPlan {
    build_reading_plan(assets::DEFAULT_BIBLE_TEXT)
}
