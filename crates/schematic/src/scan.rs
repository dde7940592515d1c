//! Single pass accumulation of part numbers.
//!
//! Cells are visited in row-major order. Digits extend the number being
//! assembled and contribute the symbols around them, and the first non-digit
//! after a digit run commits the number. Every row of a [Schematic] ends in a
//! sentinel filler, so no run survives past the end of its row.


use std::collections::BTreeMap;

use crate::cell::{classify, Cell};
use crate::grid::{Grid, Pos, Schematic};

/// Numbers found next to a single symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolParts {
    symbol: char,
    numbers: Vec<u64>,
}

impl SymbolParts {
    /// The symbol character.
    #[inline]
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Adjacent numbers in the order they were committed.
    #[inline]
    pub fn numbers(&self) -> &[u64] {
        &self.numbers
    }
}

/// The outcome of scanning a schematic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan {
    part_sum: u64,
    symbols: BTreeMap<Pos, SymbolParts>,
}

impl Scan {
    /// Sum of every number touching at least one symbol.
    #[inline]
    pub fn part_sum(&self) -> u64 {
        self.part_sum
    }

    /// Look up the numbers adjacent to the symbol at `pos`.
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<&SymbolParts> {
        self.symbols.get(&pos)
    }

    /// Iterate over symbols which touch at least one number, in row-major
    /// order.
    pub fn symbols(&self) -> impl Iterator<Item = (Pos, &SymbolParts)> + '_ {
        self.symbols.iter().map(|(&pos, parts)| (pos, parts))
    }

    /// Iterate over symbols with exactly two adjacent numbers, regardless of
    /// which symbol it is.
    ///
    /// # Examples
    ///
    /// ```
    /// use schematic::prelude::*;
    ///
    /// let grid = Schematic::from_rows(["2*3", "..4", "5#."])?;
    /// let scan = schematic::scan(&grid);
    ///
    /// // `*` touches three numbers, `#` touches two.
    /// let gears = scan.gears().collect::<Vec<_>>();
    /// assert_eq!(gears, [(Pos::new(2, 1), '#', [4, 5])]);
    /// # Ok::<_, schematic::InputError>(())
    /// ```
    pub fn gears(&self) -> impl Iterator<Item = (Pos, char, [u64; 2])> + '_ {
        self.symbols().filter_map(|(pos, parts)| match *parts.numbers() {
            [a, b] => Some((pos, parts.symbol(), [a, b])),
            _ => None,
        })
    }
}

/// Scan the schematic.
///
/// Scanning is total and keeps no state between calls.
pub fn scan(grid: &Schematic) -> Scan {
    let mut acc = Accumulator::default();

    for (row, data) in grid.rows().enumerate() {
        for (column, &c) in data.iter().enumerate() {
            acc.step(grid, Pos::new(row, column), c);
        }
    }

    acc.finish()
}

/// State threaded through the scan.
#[derive(Default)]
struct Accumulator {
    part_sum: u64,
    symbols: BTreeMap<Pos, SymbolParts>,
    /// The number being assembled, if any digit has been seen since the last
    /// commit.
    number: Option<u64>,
    /// Distinct symbols touching the number being assembled, in discovery
    /// order.
    adjacent: Vec<Pos>,
}

impl Accumulator {
    fn step(&mut self, grid: &Schematic, pos: Pos, c: char) {
        let Cell::Digit(d) = classify(c) else {
            self.commit(grid);
            return;
        };

        let n = self.number.unwrap_or_default();
        self.number = Some(n.wrapping_mul(10).wrapping_add(u64::from(d)));

        // Every digit is inspected, a symbol might only touch the middle of a
        // long number.
        for at in grid.neighbors(pos) {
            if !self.adjacent.contains(&at) {
                self.adjacent.push(at);
            }
        }
    }

    fn commit(&mut self, grid: &Schematic) {
        let Some(number) = self.number.take() else {
            return;
        };

        if self.adjacent.is_empty() {
            log::trace!("{number}: no adjacent symbol");
            return;
        }

        log::trace!("{number}: touches {} symbol(s)", self.adjacent.len());
        self.part_sum = self.part_sum.wrapping_add(number);

        for pos in self.adjacent.drain(..) {
            self.symbols
                .entry(pos)
                .or_insert_with(|| SymbolParts {
                    symbol: grid.get(pos),
                    numbers: Vec::new(),
                })
                .numbers
                .push(number);
        }
    }

    fn finish(self) -> Scan {
        debug_assert!(
            self.number.is_none() && self.adjacent.is_empty(),
            "digit run not terminated by sentinel"
        );

        log::debug!(
            "part sum {} across {} symbol(s)",
            self.part_sum,
            self.symbols.len()
        );

        Scan {
            part_sum: self.part_sum,
            symbols: self.symbols,
        }
    }
}
