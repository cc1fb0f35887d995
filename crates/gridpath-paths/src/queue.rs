/// Sentinel cost meaning "no known path yet".
pub const UNREACHABLE: i32 = i32::MAX;

/// Marks a node without a predecessor.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Priority-queue entry: a node index and the priority it was pushed with.
///
/// Entries are never updated in place. A node whose score improves is pushed
/// again and the older entry goes stale.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed so BinaryHeap (max-heap) pops smallest f first, then the
        // earliest generated node among equal priorities.
        other.f.cmp(&self.f).then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
