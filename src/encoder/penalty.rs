//! Mask penalty rules.
//!
//! Each rule is an independent scorer over the module colors of a grid;
//! [`total_penalty`] sums them.

use crate::models::ModuleGrid;

/// Rule 1 base score for a run of five
pub const PENALTY_N1: u32 = 3;
/// Rule 2 score per 2x2 block
pub const PENALTY_N2: u32 = 3;
/// Rule 3 score per finder-like pattern
pub const PENALTY_N3: u32 = 40;
/// Rule 4 score per 5% step away from half dark
pub const PENALTY_N4: u32 = 10;

/// Dark-light-dark-dark-dark-light-dark followed by four light modules
const FINDER_LIKE: [bool; 11] = [
    true, false, true, true, true, false, true, false, false, false, false,
];

fn lines(grid: &ModuleGrid) -> impl Iterator<Item = Vec<bool>> + '_ {
    let size = grid.size();
    (0..size)
        .map(move |y| grid.row(y).collect())
        .chain((0..size).map(move |x| grid.column(x).collect()))
}

/// Rule 1: each run of five or more same-colored modules in a row or column
/// scores `3 + (run - 5)`.
pub fn adjacent_runs(grid: &ModuleGrid) -> u32 {
    lines(grid).map(|line| runs_in_line(&line)).sum()
}

fn runs_in_line(line: &[bool]) -> u32 {
    let mut score = 0;
    let mut run = 0u32;
    let mut color = None;
    for &dark in line {
        if color == Some(dark) {
            run += 1;
        } else {
            score += run_score(run);
            color = Some(dark);
            run = 1;
        }
    }
    score + run_score(run)
}

fn run_score(run: u32) -> u32 {
    if run >= 5 { PENALTY_N1 + (run - 5) } else { 0 }
}

/// Rule 2: each 2x2 block of one color scores 3. Blocks may overlap.
pub fn uniform_blocks(grid: &ModuleGrid) -> u32 {
    let size = grid.size();
    let mut score = 0;
    for y in 0..size.saturating_sub(1) {
        for x in 0..size - 1 {
            let c = grid.is_dark(x, y);
            if grid.is_dark(x + 1, y) == c
                && grid.is_dark(x, y + 1) == c
                && grid.is_dark(x + 1, y + 1) == c
            {
                score += PENALTY_N2;
            }
        }
    }
    score
}

/// Rule 3: each 1:1:3:1:1 finder-like pattern with a four-module light
/// border on either side, in a row or column, scores 40.
///
/// Only windows lying wholly inside the symbol are matched: cells past the
/// edge are not treated as light, so a pattern whose light border would
/// fall outside the symbol does not score.
pub fn finder_like_patterns(grid: &ModuleGrid) -> u32 {
    lines(grid)
        .map(|line| {
            line.windows(FINDER_LIKE.len())
                .filter(|w| {
                    w.iter().eq(FINDER_LIKE.iter()) || w.iter().eq(FINDER_LIKE.iter().rev())
                })
                .count() as u32
                * PENALTY_N3
        })
        .sum()
}

/// Rule 4: `10 * floor(|dark% - 50| / 5)`.
pub fn dark_balance(grid: &ModuleGrid) -> u32 {
    let total = (grid.size() * grid.size()) as u64;
    if total == 0 {
        return 0;
    }
    let dark = grid.dark_count() as u64;
    // |100*dark/total - 50| / 5 == |20*dark - 10*total| / total
    let steps = (20 * dark).abs_diff(10 * total) / total;
    steps as u32 * PENALTY_N4
}

/// Sum of all four rules
pub fn total_penalty(grid: &ModuleGrid) -> u32 {
    adjacent_runs(grid) + uniform_blocks(grid) + finder_like_patterns(grid) + dark_balance(grid)
}
