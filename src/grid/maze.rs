//! Parsed maze grid and its neighborhood queries

use std::{fmt, fs, path::Path, str::FromStr};

use super::{Action, Cell, Coord, Endpoint};
use crate::{Error, Result};

/// A rectangular maze with exactly one start and one goal cell
///
/// Cells are stored row-major and never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    start: Coord,
    goal: Coord,
}

impl Grid {
    /// Build a grid from rows of cell symbols (`S`, `E`, `#`, `.`).
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyGrid`] if there are no rows or the first row is empty
    /// - [`Error::RaggedRow`] if a row's length differs from the first row
    /// - [`Error::InvalidCellCharacter`] for any other symbol
    /// - [`Error::DuplicateEndpoint`] if `S` or `E` occurs twice
    /// - [`Error::MissingEndpoint`] if `S` or `E` is absent
    pub fn from_rows<R: AsRef<[char]>>(raw: &[R]) -> Result<Self> {
        let cols = raw.first().map(|row| row.as_ref().len()).unwrap_or(0);
        if cols == 0 {
            return Err(Error::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(raw.len() * cols);
        let mut start: Option<Coord> = None;
        let mut goal: Option<Coord> = None;

        for (r, row) in raw.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(Error::RaggedRow {
                    row: r,
                    expected: cols,
                    got: row.len(),
                });
            }

            for (c, &symbol) in row.iter().enumerate() {
                let cell = Cell::from_char(symbol).ok_or(Error::InvalidCellCharacter {
                    character: symbol,
                    row: r,
                    col: c,
                })?;
                let here = Coord::new(r as i32, c as i32);
                match cell {
                    Cell::Start => record_endpoint(&mut start, Endpoint::Start, here)?,
                    Cell::Goal => record_endpoint(&mut goal, Endpoint::Goal, here)?,
                    Cell::Wall | Cell::Open => {}
                }
                cells.push(cell);
            }
        }

        let start = start.ok_or(Error::MissingEndpoint {
            endpoint: Endpoint::Start,
        })?;
        let goal = goal.ok_or(Error::MissingEndpoint {
            endpoint: Endpoint::Goal,
        })?;

        Ok(Grid {
            rows: raw.len(),
            cols,
            cells,
            start,
            goal,
        })
    }

    /// Parse the textual form, one row per line.
    ///
    /// Carriage returns and blank lines before or after the maze are ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
        let first = lines.iter().position(|l| !l.is_empty());
        let last = lines.iter().rposition(|l| !l.is_empty());
        let rows: Vec<Vec<char>> = match (first, last) {
            (Some(first), Some(last)) => lines[first..=last]
                .iter()
                .map(|l| l.chars().collect())
                .collect(),
            _ => Vec::new(),
        };
        Self::from_rows(&rows)
    }

    /// Read and parse a maze file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read maze file {}", path.display()),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn goal(&self) -> Coord {
        self.goal
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && (coord.row as usize) < self.rows
            && (coord.col as usize) < self.cols
    }

    /// Row-major offset of an in-bounds coordinate
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord.row as usize * self.cols + coord.col as usize)
        } else {
            None
        }
    }

    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        self.index_of(coord).map(|i| self.cells[i])
    }

    /// In bounds and not a wall.
    pub fn is_passable(&self, coord: Coord) -> bool {
        self.cell(coord).is_some_and(Cell::is_passable)
    }

    pub fn is_goal(&self, coord: Coord) -> bool {
        coord == self.goal
    }

    /// The four candidate moves from `coord` in [`Action::ALL`] order.
    ///
    /// Candidates are not filtered; callers check [`Grid::is_passable`].
    pub fn neighbors(&self, coord: Coord) -> [(Action, Coord); 4] {
        Action::ALL.map(|action| (action, coord.step(action)))
    }

    /// All non-wall coordinates in row-major order
    pub fn passable_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_passable())
            .map(|(i, _)| Coord::new((i / self.cols) as i32, (i % self.cols) as i32))
    }
}

fn record_endpoint(slot: &mut Option<Coord>, endpoint: Endpoint, at: Coord) -> Result<()> {
    if let Some(first) = *slot {
        return Err(Error::DuplicateEndpoint {
            endpoint,
            first,
            second: at,
        });
    }
    *slot = Some(at);
    Ok(())
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Grid::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.cols).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "S.###\n...#E\n##.#.\n#....\n#####";

    #[test]
    fn test_parse_locates_endpoints() {
        let grid = Grid::parse(EXAMPLE).unwrap();
        assert_eq!(grid.rows(), 5);
        assert_eq!(grid.cols(), 5);
        assert_eq!(grid.start(), Coord::new(0, 0));
        assert_eq!(grid.goal(), Coord::new(1, 4));
    }

    #[test]
    fn test_display_reproduces_input() {
        let grid = Grid::parse(EXAMPLE).unwrap();
        assert_eq!(grid.to_string(), EXAMPLE);
    }

    #[test]
    fn test_parse_ignores_surrounding_blank_lines_and_crlf() {
        let grid = Grid::parse("\nS.\r\n.E\r\n\n").unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.goal(), Coord::new(1, 1));
    }

    #[test]
    fn test_missing_start() {
        let err = Grid::parse("..\n.E").unwrap_err();
        assert!(matches!(
            err,
            Error::MissingEndpoint {
                endpoint: Endpoint::Start
            }
        ));
    }

    #[test]
    fn test_missing_goal() {
        let err = Grid::parse("S.\n..").unwrap_err();
        assert!(matches!(
            err,
            Error::MissingEndpoint {
                endpoint: Endpoint::Goal
            }
        ));
    }

    #[test]
    fn test_duplicate_start() {
        let err = Grid::parse("S.\nSE").unwrap_err();
        match err {
            Error::DuplicateEndpoint {
                endpoint,
                first,
                second,
            } => {
                assert_eq!(endpoint, Endpoint::Start);
                assert_eq!(first, Coord::new(0, 0));
                assert_eq!(second, Coord::new(1, 0));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_ragged_row() {
        let err = Grid::parse("S..\n.E").unwrap_err();
        assert!(matches!(
            err,
            Error::RaggedRow {
                row: 1,
                expected: 3,
                got: 2
            }
        ));
    }

    #[test]
    fn test_invalid_character() {
        let err = Grid::parse("S?\n.E").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidCellCharacter {
                character: '?',
                row: 0,
                col: 1
            }
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(Grid::parse(""), Err(Error::EmptyGrid)));
        assert!(matches!(Grid::parse("\n\n"), Err(Error::EmptyGrid)));
    }

    #[test]
    fn test_bounds_and_passability() {
        let grid = Grid::parse(EXAMPLE).unwrap();
        assert!(grid.is_passable(Coord::new(0, 0)));
        assert!(!grid.is_passable(Coord::new(0, 2)));
        assert!(!grid.is_passable(Coord::new(-1, 0)));
        assert!(!grid.is_passable(Coord::new(0, 5)));
        assert_eq!(grid.cell(Coord::new(5, 0)), None);
        assert_eq!(grid.cell(Coord::new(1, 4)), Some(Cell::Goal));
    }

    #[test]
    fn test_neighbors_are_unfiltered_and_ordered() {
        let grid = Grid::parse(EXAMPLE).unwrap();
        let neighbors = grid.neighbors(Coord::new(0, 0));
        assert_eq!(
            neighbors,
            [
                (Action::Right, Coord::new(0, 1)),
                (Action::Left, Coord::new(0, -1)),
                (Action::Down, Coord::new(1, 0)),
                (Action::Up, Coord::new(-1, 0)),
            ]
        );
    }

    #[test]
    fn test_passable_cells_excludes_walls() {
        let grid = Grid::parse(EXAMPLE).unwrap();
        let cells: Vec<Coord> = grid.passable_cells().collect();
        assert_eq!(cells.len(), 12);
        assert!(cells.iter().all(|&c| grid.is_passable(c)));
        assert_eq!(cells.first(), Some(&Coord::new(0, 0)));
    }
}
