//! Output formatting for the CLI: section headers and maze rendering

use crate::{
    grid::{Cell, Grid},
    path::Path,
    q_learning::QTable,
};

/// Marker drawn on intermediate path cells unless the caller picks another
pub const DEFAULT_PATH_MARKER: char = 'X';

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print statistics table
pub fn print_stats_table(stats: &[(&str, &str)]) {
    for (key, value) in stats {
        print_kv(key, value);
    }
}

/// Format a path as `(r, c) -> (r, c) -> ...`
pub fn format_path(path: &Path) -> String {
    path.coords()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Draw the maze with intermediate path cells replaced by `marker`.
///
/// Start and goal keep their own symbols.
pub fn render_path(grid: &Grid, path: &Path, marker: char) -> String {
    let mut canvas = canvas(grid);
    for coord in path.coords() {
        if let (Some(cell), Some(symbol)) = (grid.cell(*coord), cell_at(&mut canvas, *coord)) {
            if matches!(cell, Cell::Open) {
                *symbol = marker;
            }
        }
    }
    join_rows(&canvas)
}

/// Draw the greedy action of every open cell as an arrow.
pub fn render_policy(grid: &Grid, q_table: &QTable) -> String {
    let mut canvas = canvas(grid);
    for (coord, _) in q_table.iter() {
        let Some(action) = q_table.greedy_action(coord) else {
            continue;
        };
        if let (Some(Cell::Open), Some(symbol)) = (grid.cell(coord), cell_at(&mut canvas, coord)) {
            *symbol = action.arrow();
        }
    }
    join_rows(&canvas)
}

fn canvas(grid: &Grid) -> Vec<Vec<char>> {
    grid.to_string()
        .lines()
        .map(|line| line.chars().collect())
        .collect()
}

fn cell_at(canvas: &mut [Vec<char>], coord: crate::grid::Coord) -> Option<&mut char> {
    let row = usize::try_from(coord.row).ok()?;
    let col = usize::try_from(coord.col).ok()?;
    canvas.get_mut(row)?.get_mut(col)
}

fn join_rows(canvas: &[Vec<char>]) -> String {
    canvas
        .iter()
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bfs, grid::Action, grid::Coord};

    const EXAMPLE: &str = "S.###\n...#E\n##.#.\n#....\n#####";

    #[test]
    fn test_render_path_marks_only_open_cells() {
        let grid = Grid::parse(EXAMPLE).unwrap();
        let path = bfs::solve(&grid).into_path().unwrap();
        let rendered = render_path(&grid, &path, DEFAULT_PATH_MARKER);
        assert_eq!(rendered, "SX###\n.XX#E\n##X#X\n#.XXX\n#####");
    }

    #[test]
    fn test_render_path_custom_marker() {
        let grid = Grid::parse("S..E").unwrap();
        let path = bfs::solve(&grid).into_path().unwrap();
        assert_eq!(render_path(&grid, &path, '*'), "S**E");
    }

    #[test]
    fn test_render_policy_arrows() {
        let grid = Grid::parse("S.\n.E").unwrap();
        let mut q_table = QTable::new(&grid, 0.1, 0.9);
        q_table.set(Coord::new(0, 1), Action::Down, 1.0);
        q_table.set(Coord::new(1, 0), Action::Up, 1.0);
        assert_eq!(render_policy(&grid, &q_table), "Sv\n^E");
    }

    #[test]
    fn test_format_path() {
        let grid = Grid::parse("SE").unwrap();
        let path = bfs::solve(&grid).into_path().unwrap();
        assert_eq!(format_path(&path), "(0, 0) -> (0, 1)");
    }
}
