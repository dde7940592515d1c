//! Engine schematic scanning.
//!
//! A schematic is a grid of digits, filler (`.`) and symbols. Numbers touching
//! a symbol (diagonals included) are part numbers, and symbols touching
//! exactly two numbers are gears.
//!
//! ```
//! use schematic::prelude::*;
//!
//! let grid = Schematic::from_rows(["467..114..", "...*......", "..35..633."])?;
//! let scan = schematic::scan(&grid);
//!
//! assert_eq!(scan.part_sum(), 467 + 35);
//! assert_eq!(schematic::gear_ratio_sum(&scan, GearRule::AnySymbol), 467 * 35);
//! # Ok::<_, schematic::InputError>(())
//! ```

pub mod cell;
pub mod cli;
pub mod gear;
pub mod grid;
pub mod input;
pub mod scan;

#[cfg(test)]
mod testing;

pub use self::cell::{classify, Cell, FILLER};
pub use self::gear::{gear_ratio_sum, GearRule};
pub use self::grid::{Grid, Pos, Schematic};
pub use self::input::InputError;
pub use self::scan::{scan, Scan, SymbolParts};

/// The two answers derived from a schematic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Answer {
    /// Sum of all part numbers.
    pub part1: u64,
    /// Sum of all gear ratios.
    pub part2: u64,
}

impl core::fmt::Display for Answer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Part 1: {}", self.part1)?;
        write!(f, "Part 2: {}", self.part2)
    }
}

/// Scan the schematic and reduce its gears.
#[inline]
pub fn solve(grid: &Schematic, rule: GearRule) -> Answer {
    let scan = scan(grid);

    Answer {
        part1: scan.part_sum(),
        part2: gear_ratio_sum(&scan, rule),
    }
}

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::cell::{Cell, FILLER};
    pub use crate::gear::GearRule;
    pub use crate::grid::{Grid, Pos, Schematic};
    pub use crate::scan::Scan;
    pub use crate::Answer;
    pub use anyhow::{anyhow, bail, Context, Result};
    pub use bstr::{BStr, ByteSlice};
}
