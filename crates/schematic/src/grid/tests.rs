use super::{Grid, Pos, Schematic};
use crate::input::InputError;

fn text(row: Option<&[char]>) -> Option<String> {
    Some(row?.iter().collect())
}

#[test]
fn test_neighbors_clamp_to_corners() {
    let grid = Schematic::from_rows(["1#", "*."]).unwrap();

    assert_eq!(
        &grid.neighbors(Pos::new(0, 0))[..],
        &[Pos::new(0, 1), Pos::new(1, 0)]
    );

    let grid = Schematic::from_rows([".*", "#1"]).unwrap();

    assert_eq!(
        &grid.neighbors(Pos::new(1, 1))[..],
        &[Pos::new(0, 1), Pos::new(1, 0)]
    );
}

#[test]
fn test_neighbors_excludes_self() {
    let grid = Schematic::from_rows(["***", "*$*", "***"]).unwrap();
    let found = grid.neighbors(Pos::new(1, 1));
    assert_eq!(found.len(), 8);
    assert!(!found.contains(&Pos::new(1, 1)));
}

#[test]
fn test_neighbors_ragged_rows() {
    // Columns clamp to the length of the inspected row, which puts the `+`
    // out of reach. The short top row has nothing at columns 2 and 3.
    let grid = Schematic::from_rows(["#", "..5", "....+"]).unwrap();
    assert_eq!(&grid.neighbors(Pos::new(1, 3))[..], &[] as &[Pos]);

    let grid = Schematic::from_rows(["#", "5..", "+.."]).unwrap();
    assert_eq!(
        &grid.neighbors(Pos::new(1, 0))[..],
        &[Pos::new(0, 0), Pos::new(2, 0)]
    );
}

#[test]
fn test_neighbors_missing_row() {
    let grid = Schematic::from_rows(["#1"]).unwrap();
    assert!(grid.neighbors(Pos::new(4, 0)).is_empty());
}

#[test]
fn test_neighbors_multibyte_symbol() {
    let grid = Schematic::from_rows(["..1", "\u{e9}.."]).unwrap();
    assert!(grid.neighbors(Pos::new(0, 2)).is_empty());
    assert_eq!(&grid.neighbors(Pos::new(0, 1))[..], &[Pos::new(1, 0)]);
}

#[test]
fn test_schematic_pads_rows() {
    let grid = Schematic::from_rows(["..12", "3", ""]).unwrap();

    assert_eq!(grid.rows_len(), 3);
    assert_eq!(text(grid.row(0)).as_deref(), Some("..12."));
    assert_eq!(text(grid.row(1)).as_deref(), Some("3."));
    assert_eq!(text(grid.row(2)).as_deref(), Some("."));
    assert_eq!(grid.row(3), None);
    assert_eq!(grid.columns_len(), 5);
    assert!(grid.is_ragged());
    assert_eq!(grid.get(Pos::new(0, 3)), '2');
}

#[test]
fn test_schematic_rectangular() {
    let grid = Schematic::from_rows(["12", "34"]).unwrap();
    assert!(!grid.is_ragged());
    assert_eq!(grid.to_string(), "12.\n34.\n");
}

#[test]
fn test_schematic_counts_characters() {
    // Two, three and four byte encodings all take up one column.
    let grid = Schematic::from_rows(["1\u{e9}2", "3\u{20ac}4", "5\u{1f527}6"]).unwrap();

    assert!(!grid.is_ragged());
    assert_eq!(grid.columns_len(), 4);
    assert_eq!(grid.get(Pos::new(0, 1)), '\u{e9}');
    assert_eq!(grid.get(Pos::new(1, 1)), '\u{20ac}');
    assert_eq!(grid.get(Pos::new(2, 1)), '\u{1f527}');
    assert_eq!(grid.get(Pos::new(2, 2)), '6');
}

#[test]
fn test_schematic_replaces_invalid_utf8() {
    let grid = Schematic::from_rows([&b"1\xff2"[..], &b"3\xe2\x824"[..]]).unwrap();

    assert_eq!(text(grid.row(0)).as_deref(), Some("1\u{fffd}2."));
    assert_eq!(text(grid.row(1)).as_deref(), Some("3\u{fffd}4."));
    assert_eq!(grid.columns_len(), 4);
}

#[test]
fn test_schematic_requires_rows() {
    let rows: [&str; 0] = [];
    assert!(matches!(Schematic::from_rows(rows), Err(InputError::Empty)));
}

#[test]
#[should_panic(expected = "missing row `0`, column `9`")]
fn test_get_out_of_bounds() {
    let grid = Schematic::from_rows(["1"]).unwrap();
    grid.get(Pos::new(0, 9));
}
