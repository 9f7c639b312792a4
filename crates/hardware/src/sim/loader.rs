//! Memory Image Loader.
//!
//! Program and data images are plain text:
//! 1. **Comments:** Lines whose first non-blank character is `#` are skipped,
//!    as are blank lines.
//! 2. **Bytes:** The leading token of every other line is a run of hex digits
//!    read two per byte. `2005` is one instruction word; `20` then `05` on
//!    consecutive lines is the same word. Anything after whitespace or `#`
//!    on the line is ignored.
//! 3. **Placement:** Bytes are stored consecutively from address 0.
//!
//! Data memory dumps use the same format with one byte per line.

use std::fs;
use std::path::Path;

use crate::common::{LoadError, MEM_SIZE, ReportError};

/// Parses an image from text.
///
/// # Errors
///
/// Returns [`LoadError::InvalidDigit`] or [`LoadError::OddDigits`] for a
/// malformed line, and [`LoadError::TooLarge`] if the image exceeds 64 KiB.
///
/// # Examples
///
/// ```
/// use xsim_core::sim::loader::parse_image;
///
/// let image = parse_image("# LIZ r0, 5\n8005\n68\n00\n").unwrap();
/// assert_eq!(image, vec![0x80, 0x05, 0x68, 0x00]);
/// ```
pub fn parse_image(text: &str) -> Result<Vec<u8>, LoadError> {
    let mut bytes = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let body = line.trim_start();
        if body.is_empty() || body.starts_with('#') {
            continue;
        }
        let token = body
            .split(|c: char| c.is_whitespace() || c == '#')
            .next()
            .unwrap_or_default();
        if token.len() % 2 != 0 {
            return Err(LoadError::OddDigits { line: line_no });
        }
        let mut digits = token.chars().map(|c| {
            c.to_digit(16)
                .map(|d| d as u8)
                .ok_or(LoadError::InvalidDigit {
                    line: line_no,
                    found: c,
                })
        });
        while let Some(hi) = digits.next() {
            let lo = digits.next().ok_or(LoadError::OddDigits { line: line_no })?;
            bytes.push((hi? << 4) | lo?);
        }
    }
    if bytes.len() > MEM_SIZE {
        return Err(LoadError::TooLarge {
            len: bytes.len(),
            capacity: MEM_SIZE,
        });
    }
    Ok(bytes)
}

/// Reads and parses an image file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, or any parse error
/// from [`parse_image`].
pub fn load_image(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_image(&text)
}

/// Formats bytes as an image, one upper-case byte per line.
pub fn format_image(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02X}\n")).collect()
}

/// Writes bytes to `path` as an image.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the write fails.
pub fn write_image(path: impl AsRef<Path>, bytes: &[u8]) -> Result<(), ReportError> {
    let path = path.as_ref();
    fs::write(path, format_image(bytes)).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
