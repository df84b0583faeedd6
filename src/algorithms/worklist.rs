//! Work-list capability for simulated-recursion traversals.

use std::collections::VecDeque;

use crate::models::edge::VertexId;

/// A container driving a traversal loop.
///
/// The pop end determines the traversal discipline: `Vec` pops from the
/// back (stack, DFS), `VecDeque` pops from the front (queue, BFS). The
/// generic traversal engine consults [`LIFO`](WorkList::LIFO) to decide
/// whether children must be pushed in reverse edge order so they are still
/// visited in ascending destination order.
pub trait WorkList: Default {
    /// `true` when [`pop`](WorkList::pop) removes the most recently pushed
    /// entry.
    const LIFO: bool;

    /// Add a vertex to the work list.
    fn push(&mut self, v: VertexId);

    /// Remove and return the next vertex, or `None` when exhausted.
    fn pop(&mut self) -> Option<VertexId>;
}

impl WorkList for Vec<VertexId> {
    const LIFO: bool = true;

    fn push(&mut self, v: VertexId) {
        Vec::push(self, v);
    }

    fn pop(&mut self) -> Option<VertexId> {
        Vec::pop(self)
    }
}

impl WorkList for VecDeque<VertexId> {
    const LIFO: bool = false;

    fn push(&mut self, v: VertexId) {
        self.push_back(v);
    }

    fn pop(&mut self) -> Option<VertexId> {
        self.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_pops_from_the_back() {
        let mut wl: Vec<VertexId> = Vec::default();
        wl.push(1);
        wl.push(2);
        assert_eq!(WorkList::pop(&mut wl), Some(2));
        assert_eq!(WorkList::pop(&mut wl), Some(1));
        assert_eq!(WorkList::pop(&mut wl), None);
    }

    #[test]
    fn deque_pops_from_the_front() {
        let mut wl: VecDeque<VertexId> = VecDeque::default();
        WorkList::push(&mut wl, 1);
        WorkList::push(&mut wl, 2);
        assert_eq!(WorkList::pop(&mut wl), Some(1));
        assert_eq!(WorkList::pop(&mut wl), Some(2));
    }
}
