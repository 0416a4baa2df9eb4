//! Interactive candidate picker
//!
//! Prints a numbered menu to the prompt stream and reads one line of input.
//! Besides a menu number, the user may type any path: an image file is taken
//! as-is even when it is not in the menu, and a directory yields its first
//! image. This escape hatch is deliberate, so the menu is a suggestion rather
//! than a closed list.

use crate::candidates::{images_in_dir, is_dir, is_image_file, path_from_line};
use crate::error::{Error, Result};
use log::debug;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Parse a 1-based menu number into a 0-based index
///
/// Only the leading integer counts, so `2x` and `2.png` both select entry 2.
///
/// # Returns
/// `None` when the input does not start with an integer or it is outside `1..=count`
pub fn parse_index(input: &str, count: usize) -> Option<usize> {
    let unsigned = input.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(input);
    let sign_len = input.len() - unsigned.len();
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let number: i64 = input[..sign_len + digits].parse().ok()?;
    if number < 1 || number as u64 > count as u64 {
        return None;
    }
    Some(number as usize - 1)
}

fn write_menu(prompt: &mut dyn Write, candidates: &[PathBuf]) -> std::io::Result<()> {
    writeln!(prompt, "Select an image to render:")?;
    for (i, candidate) in candidates.iter().enumerate() {
        writeln!(prompt, "  {}) {}", i + 1, candidate.display())?;
    }
    write!(
        prompt,
        "Enter number (1-{}) or a path (default 1): ",
        candidates.len()
    )?;
    prompt.flush()
}

/// Ask the user to choose one of `candidates`
///
/// # Arguments
/// * `candidates` - Non-empty, sorted candidate set
/// * `input` - Stream the answer is read from
/// * `prompt` - Diagnostic stream the menu is written to
///
/// # Returns
/// The chosen path, or `Error::InvalidSelection` if the answer names neither a
/// menu entry nor a usable path
pub fn pick(
    candidates: &[PathBuf],
    input: &mut dyn BufRead,
    prompt: &mut dyn Write,
) -> Result<PathBuf> {
    assert!(!candidates.is_empty(), "picker needs at least one candidate");

    // The menu is cosmetic; a closed stderr must not block the selection
    if let Err(e) = write_menu(prompt, candidates) {
        debug!("could not write picker menu: {}", e);
    }

    let mut line = Vec::new();
    input.read_until(b'\n', &mut line).map_err(Error::StdinRead)?;
    let raw = line.trim_ascii();
    let answer = String::from_utf8_lossy(raw);

    if raw.is_empty() {
        return Ok(candidates[0].clone());
    }

    if let Some(index) = parse_index(&answer, candidates.len()) {
        return Ok(candidates[index].clone());
    }

    // Anything else is taken as a literal path
    if let Some(path) = path_from_line(raw) {
        if is_image_file(&path) {
            debug!("picker accepted literal path {}", path.display());
            return Ok(path);
        }
        if is_dir(&path) {
            if let Some(first) = images_in_dir(&path).into_iter().next() {
                return Ok(first);
            }
        }
    }

    Err(Error::InvalidSelection(answer.into_owned()))
}
