//! Breadth-first search scenarios and optimality checks

use std::collections::HashMap;

use maze_solver::{
    Coord, Grid, SearchOutcome,
    bfs::{self, BfsSolver},
    ports::Solver,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

const EXAMPLE: &str = "S.###\n...#E\n##.#.\n#....\n#####";

fn coords(pairs: &[(i32, i32)]) -> Vec<Coord> {
    pairs.iter().map(|&p| Coord::from(p)).collect()
}

/// Step distance from start to every reachable cell by repeated relaxation,
/// independent of the queue-based search under test.
fn relaxed_distances(grid: &Grid) -> HashMap<Coord, usize> {
    let mut dist = HashMap::from([(grid.start(), 0usize)]);
    loop {
        let mut changed = false;
        let snapshot: Vec<(Coord, usize)> = dist.iter().map(|(&c, &d)| (c, d)).collect();
        for (cell, d) in snapshot {
            for (_, next) in grid.neighbors(cell) {
                if !grid.is_passable(next) {
                    continue;
                }
                let entry = dist.entry(next).or_insert(usize::MAX);
                if d + 1 < *entry {
                    *entry = d + 1;
                    changed = true;
                }
            }
        }
        if !changed {
            return dist;
        }
    }
}

fn random_grid(rng: &mut StdRng, rows: usize, cols: usize) -> Grid {
    let mut cells: Vec<Vec<char>> = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| if rng.random_bool(0.3) { '#' } else { '.' })
                .collect()
        })
        .collect();
    let start = (rng.random_range(0..rows), rng.random_range(0..cols));
    let mut goal = start;
    while goal == start {
        goal = (rng.random_range(0..rows), rng.random_range(0..cols));
    }
    cells[start.0][start.1] = 'S';
    cells[goal.0][goal.1] = 'E';
    Grid::from_rows(&cells).unwrap()
}

#[test]
fn test_example_maze_shortest_path() {
    let grid = Grid::parse(EXAMPLE).unwrap();
    let path = bfs::solve(&grid).into_path().unwrap();

    assert_eq!(
        path.coords(),
        coords(&[
            (0, 0),
            (0, 1),
            (1, 1),
            (1, 2),
            (2, 2),
            (3, 2),
            (3, 3),
            (3, 4),
            (2, 4),
            (1, 4),
        ])
        .as_slice()
    );
    assert_eq!(path.len(), 10);
    assert_eq!(path.steps(), 9);
    assert!(path.is_valid_for(&grid));
}

#[test]
fn test_bfs_is_deterministic() {
    let grid = Grid::parse(EXAMPLE).unwrap();
    let first = bfs::solve(&grid);
    for _ in 0..5 {
        assert_eq!(bfs::solve(&grid), first);
    }
}

#[test]
fn test_disconnected_goal_is_not_found() {
    let grid = Grid::parse("S.#\n..#\n##E").unwrap();
    let report = bfs::explore(&grid);
    assert_eq!(report.outcome, SearchOutcome::NotFound);
    // Every cell reachable from the start gets expanded before giving up.
    assert_eq!(report.expanded, 4);
}

#[test]
fn test_solver_port_matches_free_function() {
    let grid = Grid::parse(EXAMPLE).unwrap();
    let mut solver = BfsSolver::new();
    assert_eq!(solver.name(), "BFS");
    assert_eq!(solver.solve(&grid).unwrap(), bfs::solve(&grid));
}

#[test]
fn test_loaded_maze_files() {
    let manifest = env!("CARGO_MANIFEST_DIR");

    let corridor = Grid::load(format!("{manifest}/mazes/corridor.txt")).unwrap();
    let path = bfs::solve(&corridor).into_path().unwrap();
    assert_eq!(path.steps(), 16);
    assert!(path.is_valid_for(&corridor));

    let blocked = Grid::load(format!("{manifest}/mazes/blocked.txt")).unwrap();
    assert_eq!(bfs::solve(&blocked), SearchOutcome::NotFound);
}

/// On random grids, BFS agrees with an independent distance computation:
/// same reachability, and a valid path of exactly the minimal length.
#[test]
fn test_random_grids_are_solved_optimally() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..200 {
        let rows = rng.random_range(1..8);
        let cols = rng.random_range(2..8);
        let grid = random_grid(&mut rng, rows, cols);
        let distances = relaxed_distances(&grid);

        match (bfs::solve(&grid), distances.get(&grid.goal())) {
            (SearchOutcome::Found(path), Some(&optimum)) => {
                assert!(path.is_valid_for(&grid), "invalid path on\n{grid}");
                assert_eq!(path.steps(), optimum, "suboptimal path on\n{grid}");
            }
            (SearchOutcome::NotFound, None) => {}
            (outcome, expected) => {
                panic!("disagreement on\n{grid}\nbfs: {outcome:?}, relaxation: {expected:?}")
            }
        }
    }
}
