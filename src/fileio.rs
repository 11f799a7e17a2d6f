//! Text-based I/O for locally saved Bible exports.
//!
//! Export files come straight out of spreadsheet tools, which on Windows
//! like to prepend a UTF-8 byte order mark; the reader strips it so the
//! first line tokenizes like every other line. Encoding is assumed UTF-8
//! throughout.

use std::fs;
use std::io;
use std::path::Path;

/// Reads a whole export file (assumed UTF-8) into a string.
///
/// This function:
/// - Opens the file at the specified path.
/// - Reads the entire contents into a string.
/// - Removes a leading UTF-8 byte order mark (BOM) if present.
///
/// Line splitting is left to the parser, which trims every line anyway.
///
/// # Arguments
///
/// * `filename` - A path-like value that specifies the file to read.
///
/// # Returns
///
/// * `Ok(String)` containing the file contents if successful.
/// * `Err(io::Error)` if there is an error opening or reading the file.
///
/// # Examples
///
/// ```no_run
/// use bible_reading_plan::fileio::read_blob;
///
/// # fn main() -> std::io::Result<()> {
/// let raw = read_blob("data/bible_export.csv")?;
/// println!("{} bytes", raw.len());
/// # Ok(())
/// # }
/// ```
pub fn read_blob<P: AsRef<Path>>(filename: P) -> io::Result<String> {
    let content = fs::read_to_string(filename)?;

    // Strip the UTF-8 BOM if it exists.
    if let Some(stripped) = content.strip_prefix('\u{FEFF}') {
        return Ok(stripped.to_string());
    }
    Ok(content)
}
