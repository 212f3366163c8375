//! perft - counts leaf nodes of the placement tree for a fixed piece order

use gridblast_core::{Grid, Shape};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::apply::apply_move;
use crate::movegen::{count_placements, generate_placements};

/// Node counts keyed by (grid bits, remaining depth).
/// Valid for a single shape queue only; build a new cache per queue.
#[derive(Default)]
pub struct PerftCache {
    entries: FxHashMap<(u64, u32), u64>,
}

impl PerftCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Leaf count after placing `shapes[..depth]` in order, line clears included.
pub fn perft(grid: &Grid, shapes: &[Shape], depth: u32) -> u64 {
    if depth == 0 || shapes.is_empty() {
        return 1;
    }

    if depth == 1 {
        return count_placements(grid, &shapes[0]) as u64;
    }

    let mut nodes = 0u64;
    for placement in generate_placements(grid, &shapes[0]) {
        let (next, _) = apply_move(grid, &shapes[0], placement);
        nodes += perft(&next, &shapes[1..], depth - 1);
    }
    nodes
}

/// Perft with a transposition cache; different placement orders often
/// reach the same grid.
pub fn perft_cached(grid: &Grid, shapes: &[Shape], depth: u32, cache: &mut PerftCache) -> u64 {
    if depth == 0 || shapes.is_empty() {
        return 1;
    }

    if depth == 1 {
        return count_placements(grid, &shapes[0]) as u64;
    }

    let key = (grid.bits(), depth);
    if let Some(&nodes) = cache.entries.get(&key) {
        return nodes;
    }

    let mut nodes = 0u64;
    for placement in generate_placements(grid, &shapes[0]) {
        let (next, _) = apply_move(grid, &shapes[0], placement);
        nodes += perft_cached(&next, &shapes[1..], depth - 1, cache);
    }
    cache.entries.insert(key, nodes);
    nodes
}

/// Parallel perft - splits top-level placements across threads
pub fn perft_parallel(grid: &Grid, shapes: &[Shape], depth: u32) -> u64 {
    if depth <= 1 || shapes.is_empty() {
        return perft(grid, shapes, depth);
    }

    generate_placements(grid, &shapes[0])
        .as_slice()
        .par_iter()
        .map(|&placement| {
            let (next, _) = apply_move(grid, &shapes[0], placement);
            let mut cache = PerftCache::new();
            perft_cached(&next, &shapes[1..], depth - 1, &mut cache)
        })
        .sum()
}
