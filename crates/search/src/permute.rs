//! Permutations in lexicographic order of position.

/// Yields every ordering of `items`, treating them as ranked by their
/// initial position. For ascending input this is plain lexicographic order;
/// the empty input yields a single empty ordering.
pub struct Permutations<T> {
    items: Vec<T>,
    ranks: Vec<usize>,
    done: bool,
}

impl<T: Copy> Permutations<T> {
    pub fn new(items: Vec<T>) -> Self {
        let ranks = (0..items.len()).collect();
        Self {
            items,
            ranks,
            done: false,
        }
    }

    /// Advance `ranks` to the next lexicographic arrangement.
    /// Returns false after the last one.
    fn advance(&mut self) -> bool {
        let ranks = &mut self.ranks;
        let Some(pivot) = (1..ranks.len()).rev().find(|&i| ranks[i - 1] < ranks[i]) else {
            return false;
        };
        let pivot = pivot - 1;
        let successor = (pivot + 1..ranks.len())
            .rev()
            .find(|&i| ranks[i] > ranks[pivot])
            .unwrap_or(pivot + 1);
        ranks.swap(pivot, successor);
        ranks[pivot + 1..].reverse();
        true
    }
}

impl<T: Copy> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.ranks.iter().map(|&r| self.items[r]).collect();
        self.done = !self.advance();
        Some(current)
    }
}
