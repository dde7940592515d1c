//! Loading and splitting schematic input.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};

use crate::grid::{Grid, Schematic};

const NL: u8 = b'\n';
const CR: u8 = b'\r';
const VT: u8 = 0x0b;
const FF: u8 = 0x0c;
const FS: u8 = 0x1c;
const GS: u8 = 0x1d;
const RS: u8 = 0x1e;

/// Errors raised while turning input into a [Schematic].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum InputError {
    #[error("schematic is empty")]
    Empty,
    #[error("failed to read `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read the file at `path` into memory.
pub fn read(path: &Path) -> Result<Vec<u8>, InputError> {
    fs::read(path).map_err(|source| InputError::Io {
        path: path.to_owned(),
        source,
    })
}

/// Read and parse the schematic at `path`.
#[inline]
pub fn load(path: &Path) -> anyhow::Result<Schematic> {
    return inner(path).with_context(|| anyhow!("{}", path.display()));

    #[inline]
    fn inner(path: &Path) -> anyhow::Result<Schematic> {
        let data = read(path)?;
        let grid = Schematic::parse(&data)?;

        log::debug!(
            "loaded {} rows ({} columns padded)",
            grid.rows_len(),
            grid.columns_len()
        );

        Ok(grid)
    }
}

/// Split input into lines.
///
/// Lines break at `\n`, `\r\n`, a lone `\r`, the ASCII vertical tab, form
/// feed and file, group and record separators, and at the UTF-8 encodings of
/// U+0085, U+2028 and U+2029. A final line break does not produce an extra
/// empty line.
///
/// # Examples
///
/// ```
/// let lines = schematic::input::lines(b"12.\r\n..*\r.4.\n").collect::<Vec<_>>();
/// assert_eq!(lines, [&b"12."[..], &b"..*"[..], &b".4."[..]]);
///
/// assert_eq!(schematic::input::lines(b"").count(), 0);
/// assert_eq!(schematic::input::lines(b"\n").count(), 1);
/// ```
pub fn lines(data: &[u8]) -> Lines<'_> {
    Lines { data }
}

/// Length of the line break at the start of `data`, if there is one.
#[inline]
fn line_break(data: &[u8]) -> Option<usize> {
    match data {
        [CR, NL, ..] => Some(2),
        [NL | CR | VT | FF | FS | GS | RS, ..] => Some(1),
        // U+0085
        [0xc2, 0x85, ..] => Some(2),
        // U+2028 and U+2029
        [0xe2, 0x80, 0xa8 | 0xa9, ..] => Some(3),
        _ => None,
    }
}

/// Iterator over lines.
///
/// See [lines].
pub struct Lines<'a> {
    data: &'a [u8],
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let data = self.data;

        if data.is_empty() {
            return None;
        }

        for at in 0..data.len() {
            if let Some(len) = line_break(&data[at..]) {
                self.data = &data[at + len..];
                return Some(&data[..at]);
            }
        }

        self.data = &[];
        Some(data)
    }
}
