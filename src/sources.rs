//! sources.rs
//!
//! Assembles the raw text blob the parser runs on.
//!
//! The core never performs network I/O itself; whatever fetches remote
//! sources hands their per-source outcomes in here. Assembly joins the
//! successful payloads in order and applies two checks: any failed source
//! aborts the whole assembly (named by its 1-based position), and a
//! combined payload under 100 characters is rejected as not plausibly
//! being Bible data. Callers that want "always have something to read"
//! behavior use [`resolve_source_text`], which falls back to the bundled
//! sample text and surfaces the error alongside it instead of failing.

use std::path::Path;

use thiserror::Error;

use crate::assets;
use crate::fileio;

/// Minimum character count for an assembled payload to be believable.
pub const MIN_COMBINED_CHARS: usize = 100;

/// Why source assembly produced no usable text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// A source could not be fetched or read. `index` is 1-based, matching
    /// how the sources are listed to the user.
    #[error("파일 #{index} 연결 실패: {reason}")]
    Fetch { index: usize, reason: String },

    /// Everything fetched, but the combined payload is too short to be real.
    #[error("가져온 데이터가 너무 짧거나 올바르지 않습니다.")]
    TooShort,
}

/// Joins per-source fetch outcomes into one parseable blob.
///
/// The first failed source wins; later results are not inspected. Successful
/// payloads are joined with a newline so a record ending one source cannot
/// run into the first line of the next.
pub fn assemble_sources<I>(parts: I) -> Result<String, SourceError>
where
    I: IntoIterator<Item = Result<String, String>>,
{
    let mut payloads = Vec::new();
    for (idx, part) in parts.into_iter().enumerate() {
        match part {
            Ok(text) => payloads.push(text),
            Err(reason) => {
                return Err(SourceError::Fetch {
                    index: idx + 1,
                    reason,
                })
            }
        }
    }

    let combined = payloads.join("\n");
    if combined.chars().count() < MIN_COMBINED_CHARS {
        return Err(SourceError::TooShort);
    }
    Ok(combined)
}

/// Resolves the text to parse, falling back to the bundled sample.
///
/// With no sources configured the sample is used and that is not an error;
/// with sources configured, any assembly failure still yields the sample but
/// reports what went wrong so the caller can show it.
pub fn resolve_source_text<I>(parts: I) -> (String, Option<SourceError>)
where
    I: IntoIterator<Item = Result<String, String>>,
{
    let parts: Vec<_> = parts.into_iter().collect();
    if parts.is_empty() {
        return (assets::DEFAULT_BIBLE_TEXT.to_string(), None);
    }
    match assemble_sources(parts) {
        Ok(text) => (text, None),
        Err(err) => (assets::DEFAULT_BIBLE_TEXT.to_string(), Some(err)),
    }
}

/// File-based source list: reads every path and assembles the contents under
/// the same rules, with unreadable files reported like failed fetches.
pub fn assemble_files<P: AsRef<Path>>(paths: &[P]) -> Result<String, SourceError> {
    let parts: Vec<Result<String, String>> = paths
        .iter()
        .map(|path| fileio::read_blob(path).map_err(|err| err.to_string()))
        .collect();
    assemble_sources(parts)
}
