use std::cmp::Ordering;

/// Open-set entry for the priority-driven solvers. [BinaryHeap](std::collections::BinaryHeap)
/// is a max-heap, so the ordering is reversed: the smallest `(priority, tie)` pair pops
/// first. `cost` is the path cost recorded when the entry was pushed and lets the solver
/// recognise entries made stale by a later improvement.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FrontierEntry<K> {
    pub priority: K,
    pub tie: u64,
    pub cost: K,
    pub index: usize,
}

impl<K: PartialEq> Eq for FrontierEntry<K> {}

impl<K: PartialEq> PartialEq for FrontierEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.priority.eq(&other.priority) && self.tie == other.tie
    }
}

impl<K: Ord> PartialOrd for FrontierEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for FrontierEntry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        match other.priority.cmp(&self.priority) {
            Ordering::Equal => other.tie.cmp(&self.tie),
            s => s,
        }
    }
}
