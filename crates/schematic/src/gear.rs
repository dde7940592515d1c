//! Gear ratio reduction.

use crate::scan::Scan;

/// Which symbols can act as gears.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GearRule {
    /// Any symbol with exactly two adjacent numbers.
    #[default]
    AnySymbol,
    /// Only `*` symbols with exactly two adjacent numbers.
    Asterisk,
}

impl GearRule {
    #[inline]
    fn accepts(self, symbol: char) -> bool {
        match self {
            GearRule::AnySymbol => true,
            GearRule::Asterisk => symbol == '*',
        }
    }
}

/// Sum the products of the two numbers adjacent to every gear.
///
/// Symbols with fewer or more than two adjacent numbers contribute nothing.
///
/// # Examples
///
/// ```
/// use schematic::prelude::*;
///
/// let grid = Schematic::from_rows(["3.4", "#.*", "5.6"])?;
/// let scan = schematic::scan(&grid);
///
/// assert_eq!(schematic::gear_ratio_sum(&scan, GearRule::AnySymbol), 15 + 24);
/// assert_eq!(schematic::gear_ratio_sum(&scan, GearRule::Asterisk), 24);
/// # Ok::<_, schematic::InputError>(())
/// ```
pub fn gear_ratio_sum(scan: &Scan, rule: GearRule) -> u64 {
    let mut sum = 0u64;

    for (pos, symbol, [a, b]) in scan.gears() {
        if !rule.accepts(symbol) {
            log::trace!("{pos}: skipping `{symbol}`");
            continue;
        }

        sum = sum.wrapping_add(a.wrapping_mul(b));
    }

    sum
}
