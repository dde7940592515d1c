//! Shared fixtures for tests.

/// The canonical example schematic.
pub(crate) const SAMPLE: &str = include_str!("../../../inputs/sample.txt");

/// Parse a schematic out of a literal, panicking on failure.
pub(crate) fn grid(input: &str) -> crate::grid::Schematic {
    crate::grid::Schematic::parse(input.as_bytes()).expect("valid schematic")
}
