//! tokenizer.rs
//!
//! Splits a single line of loosely CSV-shaped export data into trimmed fields.
//!
//! Real-world Bible exports are not strict CSV: quoting is optional, quotes are
//! sometimes left unterminated, and delimiters appear inside quoted verse text.
//! The splitter therefore follows forgiving rules rather than a strict grammar:
//!
//! - a comma outside quotes ends the current field,
//! - a double quote toggles quoted state and is not emitted,
//! - a doubled quote (`""`) inside a quoted region emits one literal quote,
//! - every field is trimmed of surrounding whitespace,
//! - an unterminated quote simply runs to the end of the line.

/// Splits one line into its fields.
///
/// The final field is always emitted, so the number of fields is the number of
/// separating commas plus one; `"a,,b"` yields `["a", "", "b"]`.
///
/// # Examples
///
/// ```
/// use bible_reading_plan::tokenizer::split_row;
///
/// assert_eq!(split_row("창,1,1,태초에"), vec!["창", "1", "1", "태초에"]);
/// assert_eq!(split_row(r#""a,b",c"#), vec!["a,b", "c"]);
/// ```
pub fn split_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    // Doubled quote inside a quoted region is an escaped quote.
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());

    fields
}
