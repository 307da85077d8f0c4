//! Property-based tests for the stepping rules.
//!
//! Random grids are compared against a naive reference evaluation that reads
//! from an immutable copy of the previous generation.

use std::collections::HashSet;

use life_automata::automaton::{advance, count_alive_neighbors, decide_phase, next_state};
use life_automata::{CellState, Grid};
use proptest::prelude::*;

fn grid_strategy() -> impl Strategy<Value = (i32, i32, Vec<bool>)> {
    (1i32..12, 1i32..12).prop_flat_map(|(w, h)| {
        (
            Just(w),
            Just(h),
            prop::collection::vec(any::<bool>(), (w * h) as usize),
        )
    })
}

fn build(width: i32, height: i32, cells: &[bool]) -> Grid {
    let mut grid = Grid::headless(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            if cells[(y * width + x) as usize] {
                grid.set_cell_state(x, y, CellState::Alive);
            }
        }
    }
    grid
}

fn snapshot(grid: &Grid) -> Vec<CellState> {
    grid.cells().map(|c| c.current_state()).collect()
}

/// Next generation computed from a frozen copy of the input.
fn reference_step(width: i32, height: i32, cells: &[bool]) -> Vec<CellState> {
    let at = |x: i32, y: i32| {
        let (x, y) = (x.rem_euclid(width), y.rem_euclid(height));
        cells[(y * width + x) as usize]
    };

    let mut out = Vec::with_capacity(cells.len());
    for y in 0..height {
        for x in 0..width {
            let mut n = 0;
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if (dx, dy) != (0, 0) && at(x + dx, y + dy) {
                        n += 1;
                    }
                }
            }
            let alive = matches!((at(x, y), n), (true, 2) | (true, 3) | (false, 3));
            out.push(CellState::from(alive));
        }
    }
    out
}

proptest! {
    /// One advance matches the frozen-copy reference on any torus
    #[test]
    fn prop_advance_matches_reference((w, h, cells) in grid_strategy()) {
        let mut grid = build(w, h, &cells);
        advance(&mut grid);
        prop_assert_eq!(snapshot(&grid), reference_step(w, h, &cells));
    }

    /// The decide phase alone never changes what get_state reports
    #[test]
    fn prop_decide_phase_is_invisible((w, h, cells) in grid_strategy()) {
        let mut grid = build(w, h, &cells);
        let before = snapshot(&grid);
        decide_phase(&mut grid);
        prop_assert_eq!(snapshot(&grid), before);
    }

    /// Neighbor counts ignore the center cell and stay within 0..=8
    #[test]
    fn prop_count_ignores_center(
        (w, h, cells) in grid_strategy(),
        px in 0i32..12,
        py in 0i32..12
    ) {
        let (x, y) = (px % w, py % h);
        let mut grid = build(w, h, &cells);
        let n = count_alive_neighbors(&grid, x, y);
        prop_assert!(n <= 8);

        // Flipping the center only matters when it is also its own neighbor
        if w >= 3 && h >= 3 {
            let flipped = !grid.get_state(x, y);
            grid.set_cell_state(x, y, flipped);
            prop_assert_eq!(count_alive_neighbors(&grid, x, y), n);
        }
    }

    /// Reads are periodic in both axes
    #[test]
    fn prop_get_state_is_periodic(
        (w, h, cells) in grid_strategy(),
        x in -50i32..50,
        y in -50i32..50,
        kx in -3i32..3,
        ky in -3i32..3
    ) {
        let grid = build(w, h, &cells);
        prop_assert_eq!(grid.get_state(x, y), grid.get_state(x + kx * w, y + ky * h));
    }

    /// The constructor sees each position exactly once
    #[test]
    fn prop_init_covers_every_cell(w in 1i32..20, h in 1i32..20) {
        let mut seen = Vec::new();
        Grid::new(w, h, |x, y| seen.push((x, y))).unwrap();
        let distinct: HashSet<_> = seen.iter().copied().collect();
        prop_assert_eq!(seen.len(), (w * h) as usize);
        prop_assert_eq!(distinct.len(), seen.len());
        prop_assert!(seen.iter().all(|&(x, y)| (0..w).contains(&x) && (0..h).contains(&y)));
    }

    /// The rule table only ever births on 3 and keeps on 2 or 3
    #[test]
    fn prop_rule_table(n in 0u8..=8, alive in any::<bool>()) {
        let result = next_state(CellState::from(alive), n);
        let expected = if alive { n == 2 || n == 3 } else { n == 3 };
        prop_assert_eq!(result.is_alive(), expected);
    }
}

#[test]
fn block_survives_many_generations() {
    let mut grid = Grid::headless(8, 8).unwrap();
    for &(x, y) in &[(3, 3), (4, 3), (3, 4), (4, 4)] {
        grid.set_cell_state(x, y, CellState::Alive);
    }
    let before = snapshot(&grid);
    for _ in 0..50 {
        advance(&mut grid);
    }
    assert_eq!(snapshot(&grid), before);
}

#[test]
fn glider_returns_after_full_lap() {
    // A glider moves one cell diagonally every 4 generations, so on an 8x8
    // torus it is back where it started after 32.
    let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
    let mut grid = Grid::headless(8, 8).unwrap();
    for &(x, y) in &glider {
        grid.set_cell_state(x, y, CellState::Alive);
    }
    let start = snapshot(&grid);

    for _ in 0..4 {
        advance(&mut grid);
    }
    assert_eq!(grid.alive_count(), 5);
    assert_ne!(snapshot(&grid), start);
    for &(x, y) in &glider {
        assert_eq!(grid.get_state(x + 1, y + 1), CellState::Alive);
    }

    for _ in 4..32 {
        advance(&mut grid);
    }
    assert_eq!(snapshot(&grid), start);
}
