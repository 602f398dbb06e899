//! Program Image Loader.
//!
//! This module reads the textual machine-code images produced by the E20
//! assembler. It performs:
//! 1. **Line parsing:** Each line must read `ram[<addr>] = 16'b<bits>;` followed by anything.
//! 2. **Sequencing:** Addresses start at 0 and increase by exactly one per line.
//! 3. **Bounds:** No address may reach the memory size.
//!
//! ```
//! use e20_core::sim::loader::parse_image;
//!
//! let image = parse_image("ram[0] = 16'b0100000000000000; // halt\n").unwrap();
//! assert_eq!(image, vec![0x4000]);
//! ```

use std::fs;
use std::path::Path;

use tracing::info;

use crate::common::constants::MEM_SIZE;
use crate::common::error::LoadError;

/// Parses an image held in memory into the words it assigns, in address order.
///
/// # Errors
///
/// Returns the first [`LoadError`] encountered: a malformed line, an address
/// out of sequence, or an address beyond the end of memory.
pub fn parse_image(text: &str) -> Result<Vec<u16>, LoadError> {
    let mut words = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let (addr, value) = parse_line(line).ok_or_else(|| LoadError::Parse {
            line: index + 1,
            text: line.to_string(),
        })?;

        if addr != words.len() {
            return Err(LoadError::OutOfSequence {
                expected: words.len(),
                found: addr,
            });
        }
        if addr >= MEM_SIZE {
            return Err(LoadError::TooBig(addr));
        }
        words.push(value);
    }

    Ok(words)
}

/// Reads and parses the image file at `path`.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, otherwise any error
/// from [`parse_image`].
pub fn load_image(path: impl AsRef<Path>) -> Result<Vec<u16>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_image(&text)?;
    info!(path = %path.display(), words = words.len(), "program image loaded");
    Ok(words)
}

/// Splits `ram[<addr>] = 16'b<bits>;<rest>` into its address and value.
fn parse_line(line: &str) -> Option<(usize, u16)> {
    let rest = line.strip_prefix("ram[")?;
    let (addr, rest) = rest.split_once(']')?;
    let rest = rest.strip_prefix(" = 16'b")?;
    let (bits, _) = rest.split_once(';')?;

    if !is_digits(addr) || !is_digits(bits) {
        return None;
    }

    let addr = addr.parse::<usize>().ok()?;
    let value = u16::from_str_radix(bits, 2).ok()?;
    Some((addr, value))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
