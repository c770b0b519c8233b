use super::{DisjointForest, ElementId};

/// Head of a set: first element, last element and chain length.
///
/// A length-1 chain has `first == tail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Representative {
    pub(super) first: ElementId,
    pub(super) tail: ElementId,
    pub(super) len: usize,
}

impl Representative {
    pub(super) fn singleton(element: ElementId) -> Self {
        Self {
            first: element,
            tail: element,
            len: 1,
        }
    }

    #[inline]
    pub fn first(&self) -> ElementId {
        self.first
    }

    #[inline]
    pub fn tail(&self) -> ElementId {
        self.tail
    }

    /// Chain length; at least 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }
}

/// Iterator over one set's elements, first to tail.
#[derive(Debug)]
pub struct Chain<'a, T> {
    forest: &'a DisjointForest<T>,
    next: Option<ElementId>,
    remaining: usize,
}

impl<'a, T> Chain<'a, T> {
    pub(super) fn new(forest: &'a DisjointForest<T>, head: &Representative) -> Self {
        Self {
            forest,
            next: Some(head.first),
            remaining: head.len,
        }
    }
}

impl<'a, T> Iterator for Chain<'a, T> {
    type Item = (ElementId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.next?;
        let node = &self.forest.nodes[id.0];
        self.next = node.next;
        self.remaining -= 1;
        Some((id, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}
