//! The schematic grid and neighborhood lookups.

#[cfg(test)]
mod tests;

use core::fmt::{self, Write};

use arrayvec::ArrayVec;
use bstr::ByteSlice;

use crate::cell::{classify, FILLER};
use crate::input::InputError;

/// A coordinate in the grid.
///
/// Ordering is row-major, which is also the order cells are scanned in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub row: usize,
    pub column: usize,
}

impl Pos {
    #[inline]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

/// Read-only access to rows of characters which might differ in length.
pub trait Grid {
    /// Get number of rows in the grid.
    fn rows_len(&self) -> usize;

    /// Access the specified row in the grid.
    fn row(&self, row: usize) -> Option<&[char]>;

    /// Iterate over rows in the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use schematic::prelude::*;
    ///
    /// let grid = Schematic::from_rows(["12", "3", "456"])?;
    /// let lens = grid.rows().map(|row| row.len()).collect::<Vec<_>>();
    /// assert_eq!(lens, [3, 2, 4]);
    /// # Ok::<_, schematic::InputError>(())
    /// ```
    #[inline]
    fn rows(&self) -> Rows<'_, Self> {
        Rows {
            grid: self,
            row: 0,
        }
    }

    /// Get the character at the given position.
    ///
    /// # Examples
    ///
    /// ```
    /// use schematic::prelude::*;
    ///
    /// let grid = Schematic::from_rows(["1é", "3"])?;
    /// assert_eq!(grid.try_get(Pos::new(0, 1)), Some('é'));
    /// assert_eq!(grid.try_get(Pos::new(0, 2)), Some(FILLER));
    /// assert_eq!(grid.try_get(Pos::new(1, 2)), None);
    /// assert_eq!(grid.try_get(Pos::new(2, 0)), None);
    /// # Ok::<_, schematic::InputError>(())
    /// ```
    #[inline]
    fn try_get(&self, pos: Pos) -> Option<char> {
        self.row(pos.row)?.get(pos.column).copied()
    }

    /// Get the character at the given position.
    #[inline]
    #[track_caller]
    fn get(&self, pos: Pos) -> char {
        match self.try_get(pos) {
            Some(c) => c,
            None => panic!("missing row `{}`, column `{}`", pos.row, pos.column),
        }
    }

    /// Collect the distinct symbol positions in the 8-connected neighborhood
    /// of `pos`, in row-major order.
    ///
    /// Rows are clamped to the grid and columns to the length of the row of
    /// `pos`. Positions which don't exist in a shorter neighboring row are
    /// skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use schematic::prelude::*;
    ///
    /// let grid = Schematic::from_rows(["#..", ".5.", "..*"])?;
    /// let found = grid.neighbors(Pos::new(1, 1));
    /// assert_eq!(&found[..], &[Pos::new(0, 0), Pos::new(2, 2)]);
    /// # Ok::<_, schematic::InputError>(())
    /// ```
    fn neighbors(&self, pos: Pos) -> ArrayVec<Pos, 8> {
        let mut out = ArrayVec::new();

        let Some(len) = self.row(pos.row).map(<[char]>::len) else {
            return out;
        };

        let rows = pos.row.saturating_sub(1)..pos.row.saturating_add(2).min(self.rows_len());
        let columns = pos.column.saturating_sub(1)..pos.column.saturating_add(2).min(len);

        for row in rows {
            for column in columns.clone() {
                let at = Pos::new(row, column);

                if at == pos {
                    continue;
                }

                let Some(c) = self.try_get(at) else {
                    continue;
                };

                if classify(c).is_symbol() {
                    out.push(at);
                }
            }
        }

        out
    }
}

impl<G> Grid for &G
where
    G: ?Sized + Grid,
{
    #[inline]
    fn rows_len(&self) -> usize {
        (**self).rows_len()
    }

    #[inline]
    fn row(&self, row: usize) -> Option<&[char]> {
        (**self).row(row)
    }
}

/// Iterator over rows in a [Grid].
///
/// See [Grid::rows].
pub struct Rows<'a, G: ?Sized> {
    grid: &'a G,
    row: usize,
}

impl<'a, G> Iterator for Rows<'a, G>
where
    G: ?Sized + Grid,
{
    type Item = &'a [char];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let row = self.grid.row(self.row)?;
        self.row += 1;
        Some(row)
    }
}

/// A schematic where every row carries one trailing sentinel [FILLER].
///
/// The sentinel guarantees that a digit run touching the end of a row is
/// always followed by a non-digit.
///
/// Every cell is one character. Rows are decoded as UTF-8 and each invalid
/// sequence becomes a single [char::REPLACEMENT_CHARACTER].
#[derive(Clone)]
pub struct Schematic {
    /// Padded rows stored back to back.
    data: Vec<char>,
    /// Start and end of each row in `data`.
    spans: Vec<(usize, usize)>,
    /// Length of the widest padded row.
    columns: usize,
}

impl Schematic {
    /// Construct a schematic out of unpadded rows.
    ///
    /// Errors with [InputError::Empty] if there are no rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use schematic::prelude::*;
    ///
    /// let grid = Schematic::from_rows(["1*", "2\u{b0}3"])?;
    /// assert_eq!(grid.row(0), Some(&['1', '*', '.'][..]));
    /// assert_eq!(grid.row(1), Some(&['2', '\u{b0}', '3', '.'][..]));
    /// assert_eq!(grid.columns_len(), 4);
    /// # Ok::<_, schematic::InputError>(())
    /// ```
    pub fn from_rows<I>(rows: I) -> Result<Self, InputError>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut data = Vec::new();
        let mut spans = Vec::new();
        let mut columns = 0;

        for row in rows {
            let start = data.len();
            data.extend(row.as_ref().chars());
            data.push(FILLER);
            spans.push((start, data.len()));
            columns = columns.max(data.len() - start);
        }

        if spans.is_empty() {
            return Err(InputError::Empty);
        }

        let this = Self {
            data,
            spans,
            columns,
        };

        if this.is_ragged() {
            log::debug!(
                "ragged schematic: {} rows, widest row is {} columns",
                this.rows_len(),
                this.columns
            );
        }

        Ok(this)
    }

    /// Parse a schematic out of raw input.
    ///
    /// See [crate::input::lines] for how lines are split.
    #[inline]
    pub fn parse(data: &[u8]) -> Result<Self, InputError> {
        Self::from_rows(crate::input::lines(data))
    }

    /// Get the length of the widest row, including its sentinel.
    #[inline]
    pub fn columns_len(&self) -> usize {
        self.columns
    }

    /// Test if rows differ in length.
    pub fn is_ragged(&self) -> bool {
        self.spans.iter().any(|&(s, e)| e - s != self.columns)
    }
}

impl Grid for Schematic {
    #[inline]
    fn rows_len(&self) -> usize {
        self.spans.len()
    }

    #[inline]
    fn row(&self, row: usize) -> Option<&[char]> {
        let &(start, end) = self.spans.get(row)?;
        self.data.get(start..end)
    }
}

impl fmt::Debug for Schematic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.rows().map(|row| row.iter().collect::<String>()))
            .finish()
    }
}

impl fmt::Display for Schematic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &c in row {
                f.write_char(c)?;
            }

            f.write_char('\n')?;
        }

        Ok(())
    }
}
