use std::cmp::Ordering;
use std::collections::BinaryHeap;

use wayfind_core::Point;

/// A frontier entry, ordered by `(priority, seq)` ascending.
///
/// The cell itself never takes part in the ordering; `seq` is unique within
/// one frontier, so ties on priority resolve first-inserted-first-served.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Entry {
    priority: i32,
    seq: u64,
    pos: Point,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority-ordered work queue of discovered cells.
///
/// There is no decrease-key: a cell pushed twice stays in the queue twice,
/// and the caller skips the stale copy when it is popped.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `pos` with the next insertion sequence number, which is returned.
    pub fn push(&mut self, priority: i32, pos: Point) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { priority, seq, pos });
        seq
    }

    /// Remove and return the cell with the smallest `(priority, seq)`.
    pub fn pop_min(&mut self) -> Option<Point> {
        self.heap.pop().map(|e| e.pos)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drop every entry and restart sequence numbering at 0.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: i32, col: i32) -> Point {
        Point::new(row, col)
    }

    #[test]
    fn pops_lowest_priority_first() {
        let mut f = Frontier::new();
        f.push(5, p(0, 0));
        f.push(1, p(0, 1));
        f.push(3, p(0, 2));
        assert_eq!(f.pop_min(), Some(p(0, 1)));
        assert_eq!(f.pop_min(), Some(p(0, 2)));
        assert_eq!(f.pop_min(), Some(p(0, 0)));
        assert_eq!(f.pop_min(), None);
        assert!(f.is_empty());
    }

    #[test]
    fn ties_break_by_insertion_order() {
        let mut f = Frontier::new();
        // Inserted in an order unrelated to the cells' own ordering.
        f.push(2, p(9, 9));
        f.push(2, p(0, 0));
        f.push(2, p(4, 4));
        f.push(1, p(7, 7));
        assert_eq!(f.pop_min(), Some(p(7, 7)));
        assert_eq!(f.pop_min(), Some(p(9, 9)));
        assert_eq!(f.pop_min(), Some(p(0, 0)));
        assert_eq!(f.pop_min(), Some(p(4, 4)));
    }

    #[test]
    fn sequence_numbers_are_monotonic() {
        let mut f = Frontier::new();
        assert_eq!(f.push(0, p(0, 0)), 0);
        assert_eq!(f.push(0, p(0, 1)), 1);
        f.pop_min();
        assert_eq!(f.push(0, p(0, 2)), 2);
        assert_eq!(f.heap.len(), 2);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut f = Frontier::new();
        f.push(4, p(1, 1));
        f.push(2, p(1, 1));
        assert_eq!(f.heap.len(), 2);
        let first = f.heap.pop().unwrap();
        assert_eq!((first.priority, first.seq), (2, 1));
        let stale = f.heap.pop().unwrap();
        assert_eq!((stale.priority, stale.seq, stale.pos), (4, 0, p(1, 1)));
    }

    #[test]
    fn clear_restarts_sequence() {
        let mut f = Frontier::new();
        f.push(0, p(0, 0));
        f.push(0, p(0, 1));
        f.clear();
        assert!(f.is_empty());
        assert_eq!(f.push(0, p(0, 0)), 0);
    }
}
