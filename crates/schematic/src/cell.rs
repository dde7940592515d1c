//! Classification of individual schematic cells.

/// The filler character, also used as the sentinel padding on every row.
pub const FILLER: char = '.';

/// The category of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// A decimal digit, holding its value.
    Digit(u8),
    /// The `.` filler.
    Filler,
    /// Anything else, holding the character.
    Symbol(char),
}

impl Cell {
    /// Test if the cell is a symbol.
    #[inline]
    pub fn is_symbol(self) -> bool {
        matches!(self, Cell::Symbol(..))
    }
}

/// Classify a single character.
///
/// Every character maps to exactly one category. Only the ASCII digits count
/// as digits.
///
/// # Examples
///
/// ```
/// use schematic::{classify, Cell};
///
/// assert_eq!(classify('7'), Cell::Digit(7));
/// assert_eq!(classify('.'), Cell::Filler);
/// assert_eq!(classify('*'), Cell::Symbol('*'));
/// assert_eq!(classify('é'), Cell::Symbol('é'));
/// ```
#[inline]
pub fn classify(c: char) -> Cell {
    match c {
        '0'..='9' => Cell::Digit(c as u8 - b'0'),
        FILLER => Cell::Filler,
        c => Cell::Symbol(c),
    }
}
