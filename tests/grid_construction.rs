//! Maze text parsing and validation

use std::io::Write;

use maze_solver::{Cell, Coord, Endpoint, Error, Grid};

#[test]
fn test_parse_example_maze() {
    let grid = Grid::parse("S.###\n...#E\n##.#.\n#....\n#####\n").unwrap();

    assert_eq!((grid.rows(), grid.cols()), (5, 5));
    assert_eq!(grid.start(), Coord::new(0, 0));
    assert_eq!(grid.goal(), Coord::new(1, 4));
    assert_eq!(grid.cell(Coord::new(0, 2)), Some(Cell::Wall));
    assert_eq!(grid.cell(Coord::new(3, 1)), Some(Cell::Open));
    assert_eq!(grid.cell(Coord::new(5, 0)), None);
    assert!(!grid.is_passable(Coord::new(-1, 0)));
    assert_eq!(grid.passable_cells().count(), 12);
}

#[test]
fn test_display_round_trips_text() {
    let text = "S.#\n..E";
    let grid: Grid = text.parse().unwrap();
    assert_eq!(grid.to_string(), text);
}

#[test]
fn test_windows_line_endings_and_blank_edges() {
    let grid = Grid::parse("\r\n\nS.\r\n.E\r\n\n").unwrap();
    assert_eq!((grid.rows(), grid.cols()), (2, 2));
    assert_eq!(grid.goal(), Coord::new(1, 1));
}

#[test]
fn test_missing_endpoints() {
    let err = Grid::parse("..#\n..E").unwrap_err();
    assert!(matches!(
        err,
        Error::MissingEndpoint {
            endpoint: Endpoint::Start
        }
    ));

    let err = Grid::parse("S.#\n...").unwrap_err();
    assert!(matches!(
        err,
        Error::MissingEndpoint {
            endpoint: Endpoint::Goal
        }
    ));
}

#[test]
fn test_duplicate_endpoint_names_both_cells() {
    let err = Grid::parse("S.E\n..S").unwrap_err();
    match err {
        Error::DuplicateEndpoint {
            endpoint,
            first,
            second,
        } => {
            assert_eq!(endpoint, Endpoint::Start);
            assert_eq!(first, Coord::new(0, 0));
            assert_eq!(second, Coord::new(1, 2));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_malformed_text() {
    assert!(matches!(Grid::parse(""), Err(Error::EmptyGrid)));
    assert!(matches!(Grid::parse("\n\n"), Err(Error::EmptyGrid)));
    assert!(matches!(
        Grid::parse("S..\n.E"),
        Err(Error::RaggedRow {
            row: 1,
            expected: 3,
            got: 2
        })
    ));
    assert!(matches!(
        Grid::parse("S.x\n..E"),
        Err(Error::InvalidCellCharacter {
            character: 'x',
            row: 0,
            col: 2
        })
    ));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "S#\n.E\n").unwrap();
    let grid = Grid::load(file.path()).unwrap();
    assert_eq!(grid.start(), Coord::new(0, 0));

    let missing = file.path().with_extension("does-not-exist");
    let err = Grid::load(&missing).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().starts_with("failed to read maze file"));
}
