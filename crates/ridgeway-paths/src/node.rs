use ridgeway_core::Point;

/// Sentinel index meaning "no node" for parent links and bucket lists.
pub const NIL: usize = usize::MAX;

/// Where a node stands relative to the current search generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    /// Stamp is older than the current generation: every other field is stale.
    Undiscovered,
    /// Discovered this generation and waiting in the frontier.
    Open,
    /// Expanded this generation. Never reopened.
    Closed,
}

/// Per-cell search bookkeeping, stored in the pathfinder's node arena.
///
/// `g`, `h` and `parent` are only meaningful while [`state`](Self::state)
/// is not [`NodeState::Undiscovered`] for the generation being searched.
#[derive(Debug, Clone)]
pub struct PathNode {
    pub(crate) pos: Point,
    pub(crate) stamp: u32,
    pub(crate) g: u32,
    pub(crate) h: u32,
    pub(crate) parent: usize,
    /// Next node in the same priority bucket.
    pub(crate) next: usize,
}

impl Default for PathNode {
    fn default() -> Self {
        Self {
            pos: Point::ZERO,
            stamp: 0,
            g: 0,
            h: 0,
            parent: NIL,
            next: NIL,
        }
    }
}

impl PathNode {
    /// Grid coordinate this record was last discovered at.
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Generation stamp of the last search that touched this node.
    #[inline]
    pub fn stamp(&self) -> u32 {
        self.stamp
    }

    /// Accumulated cost from the origin.
    #[inline]
    pub fn cost(&self) -> u32 {
        self.g
    }

    /// Heuristic estimate to the destination.
    #[inline]
    pub fn heuristic(&self) -> u32 {
        self.h
    }

    /// Frontier key: `g + h`.
    #[inline]
    pub fn priority(&self) -> u32 {
        self.g.saturating_add(self.h)
    }

    /// Classify the node's stamp against `generation`.
    #[inline]
    pub fn state(&self, generation: u32) -> NodeState {
        match self.stamp {
            s if s < generation => NodeState::Undiscovered,
            s if s == generation => NodeState::Open,
            _ => NodeState::Closed,
        }
    }

    /// Overwrite stale fields on first discovery within `generation`.
    #[inline]
    pub(crate) fn discover(&mut self, pos: Point, generation: u32, g: u32, h: u32, parent: usize) {
        self.pos = pos;
        self.stamp = generation;
        self.g = g;
        self.h = h;
        self.parent = parent;
        self.next = NIL;
    }

    #[inline]
    pub(crate) fn close(&mut self, generation: u32) {
        self.stamp = generation + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamp_classification() {
        let mut n = PathNode::default();
        assert_eq!(n.state(2), NodeState::Undiscovered);

        n.discover(Point::new(1, 2), 4, 3, 5, NIL);
        assert_eq!(n.state(4), NodeState::Open);
        assert_eq!(n.state(6), NodeState::Undiscovered);
        assert_eq!(n.priority(), 8);

        n.close(4);
        assert_eq!(n.stamp(), 5);
        assert_eq!(n.state(4), NodeState::Closed);
        // A closed stamp from an earlier call is stale for the next one.
        assert_eq!(n.state(6), NodeState::Undiscovered);
    }

    #[test]
    fn priority_saturates() {
        let mut n = PathNode::default();
        n.discover(Point::ZERO, 2, u32::MAX, 7, NIL);
        assert_eq!(n.priority(), u32::MAX);
    }
}
