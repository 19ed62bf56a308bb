/// Mask application and selection
use rayon::prelude::*;

use crate::encoder::config;
use crate::encoder::format::FormatInfo;
use crate::encoder::penalty::total_penalty;
use crate::models::{ECLevel, MaskPattern, ModuleGrid};

/// Outcome of one mask trial
#[derive(Debug, Clone)]
pub struct MaskTrial {
    /// Mask that was applied
    pub mask: MaskPattern,
    /// Sum of the four penalty rules for `grid`
    pub penalty: u32,
    /// Masked symbol with its final format bits
    pub grid: ModuleGrid,
}

/// XOR the mask into data modules only; function modules are untouched
pub fn apply_mask(grid: &mut ModuleGrid, mask: MaskPattern) {
    let size = grid.size();
    for y in 0..size {
        for x in 0..size {
            let module = grid.get(x, y);
            if !module.is_function() && mask.is_masked(y, x) {
                grid.set(x, y, module.flipped());
            }
        }
    }
}

/// Build the masked symbol for `mask` and score it
pub fn trial(unmasked: &ModuleGrid, ec_level: ECLevel, mask: MaskPattern) -> MaskTrial {
    let mut grid = unmasked.clone();
    apply_mask(&mut grid, mask);
    FormatInfo::new(ec_level, mask).write(&mut grid);
    let penalty = total_penalty(&grid);
    MaskTrial {
        mask,
        penalty,
        grid,
    }
}

/// Try all eight masks and keep the lowest penalty; ties go to the lowest id
pub fn select_mask(unmasked: &ModuleGrid, ec_level: ECLevel) -> MaskTrial {
    let [first, rest @ ..] = MaskPattern::ALL;
    let others: Vec<MaskTrial> = if config::parallel_masks() {
        rest.as_slice()
            .par_iter()
            .map(|&mask| trial(unmasked, ec_level, mask))
            .collect()
    } else {
        rest.iter()
            .map(|&mask| trial(unmasked, ec_level, mask))
            .collect()
    };

    let mut best = trial(unmasked, ec_level, first);
    tracing::trace!(mask = best.mask.id(), penalty = best.penalty, "mask trial");
    // `others` is in ascending id order, so strict comparison keeps the lowest id on ties
    for t in others {
        tracing::trace!(mask = t.mask.id(), penalty = t.penalty, "mask trial");
        if t.penalty < best.penalty {
            best = t;
        }
    }
    best
}
