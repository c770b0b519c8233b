//! Disjoint-set forest backed by per-set linked chains.
//!
//! Elements and representatives live in two arenas and refer to each other
//! through index handles. Every element stores the handle of the
//! representative that currently owns it, so [`DisjointForest::find`] is O(1).
//! [`DisjointForest::union`] appends the shorter chain to the longer one and
//! rewrites the owner handle of every absorbed element. That rewrite replaces
//! path compression: there are no parent pointers to walk.
//!
//! A representative is created together with its first element and is never
//! observable with an empty chain. Once absorbed by a union its slot is
//! cleared; any further use of its handle is a precondition violation.

mod representative;

pub use representative::{Chain, Representative};

use crate::error::{Error, Result};

/// Handle to an element of a [`DisjointForest`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Handle to a set head. Only meaningful while the set is live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RepId(usize);

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    rep: RepId,
    next: Option<ElementId>,
}

#[derive(Debug, Clone)]
pub struct DisjointForest<T> {
    nodes: Vec<Node<T>>,
    reps: Vec<Option<Representative>>,
    live_sets: usize,
}

impl<T> Default for DisjointForest<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DisjointForest<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(elements: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(elements),
            reps: Vec::with_capacity(elements),
            live_sets: 0,
        }
    }

    /// Creates a singleton set holding `value`. `None` is a no-op and yields `None`.
    pub fn make_set(&mut self, value: Option<T>) -> Option<ElementId> {
        value.map(|value| self.insert(value))
    }

    /// Creates a singleton set holding `value` and returns its only element.
    pub fn insert(&mut self, value: T) -> ElementId {
        let id = ElementId(self.nodes.len());
        let rep = self.new_representative(id);
        self.nodes.push(Node {
            value,
            rep,
            next: None,
        });
        id
    }

    /// Representative currently owning `element`; `None` maps to `None`.
    pub fn find_set(&self, element: Option<ElementId>) -> Option<RepId> {
        element.map(|element| self.find(element))
    }

    #[inline]
    pub fn find(&self, element: ElementId) -> RepId {
        self.nodes[element.0].rep
    }

    /// Returns the live representative behind `rep`.
    pub fn representative(&self, rep: RepId) -> Result<&Representative> {
        self.reps
            .get(rep.0)
            .and_then(Option::as_ref)
            .ok_or_else(|| Error::PreconditionViolation(format!("{rep:?} is not a live set")))
    }

    pub fn is_live(&self, rep: RepId) -> bool {
        matches!(self.reps.get(rep.0), Some(Some(_)))
    }

    /// Merges two distinct live sets and returns the survivor.
    ///
    /// The shorter chain is appended to the longer one; on equal lengths `a`
    /// survives. Every absorbed element is re-pointed at the survivor, costing
    /// O(length of the shorter chain). The absorbed handle is dead afterwards.
    pub fn union(&mut self, a: RepId, b: RepId) -> Result<RepId> {
        if a == b {
            return Err(Error::PreconditionViolation(format!(
                "cannot union {a:?} with itself"
            )));
        }

        let head_a = *self.representative(a)?;
        let head_b = *self.representative(b)?;

        let (survivor, mut head, absorbed, taken) = if head_a.len < head_b.len {
            (b, head_b, a, head_a)
        } else {
            (a, head_a, b, head_b)
        };

        self.reps[absorbed.0] = None;
        self.live_sets -= 1;

        self.nodes[head.tail.0].next = Some(taken.first);
        head.tail = taken.tail;
        head.len += taken.len;
        self.reps[survivor.0] = Some(head);

        let mut current = Some(taken.first);
        while let Some(id) = current {
            let node = &mut self.nodes[id.0];
            node.rep = survivor;
            current = node.next;
        }

        Ok(survivor)
    }

    /// Appends a new element holding `value` to the end of `rep`'s chain.
    pub fn push(&mut self, rep: RepId, value: T) -> Result<ElementId> {
        let mut head = *self.representative(rep)?;

        let id = ElementId(self.nodes.len());
        self.nodes.push(Node {
            value,
            rep,
            next: None,
        });
        self.nodes[head.tail.0].next = Some(id);
        head.tail = id;
        head.len += 1;
        self.reps[rep.0] = Some(head);

        Ok(id)
    }

    /// Element at position `index` in `rep`'s chain.
    pub fn element_at(&self, rep: RepId, index: usize) -> Result<ElementId> {
        let len = self.representative(rep)?.len;
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }

        self.chain(rep)?
            .nth(index)
            .map(|(id, _)| id)
            .ok_or_else(|| broken_chain(rep))
    }

    /// Unlinks the element at `index` and makes it a singleton set of its own.
    ///
    /// Detaching from a one-element chain returns that element untouched.
    pub fn detach_at(&mut self, rep: RepId, index: usize) -> Result<ElementId> {
        let mut head = *self.representative(rep)?;
        if index >= head.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: head.len,
            });
        }
        if head.len == 1 {
            return Ok(head.first);
        }

        let target = if index == 0 {
            let target = head.first;
            head.first = self.nodes[target.0].next.ok_or_else(|| broken_chain(rep))?;
            target
        } else {
            let prev = self.element_at(rep, index - 1)?;
            let target = self.nodes[prev.0].next.ok_or_else(|| broken_chain(rep))?;
            self.nodes[prev.0].next = self.nodes[target.0].next;
            if target == head.tail {
                head.tail = prev;
            }
            target
        };

        head.len -= 1;
        self.reps[rep.0] = Some(head);

        let single = self.new_representative(target);
        let node = &mut self.nodes[target.0];
        node.rep = single;
        node.next = None;

        Ok(target)
    }

    /// Chain position of the first element matching `predicate`.
    pub fn position_by(
        &self,
        rep: RepId,
        mut predicate: impl FnMut(&T) -> bool,
    ) -> Result<Option<usize>> {
        Ok(self.chain(rep)?.position(|(_, value)| predicate(value)))
    }

    pub fn position(&self, rep: RepId, value: &T) -> Result<Option<usize>>
    where
        T: PartialEq,
    {
        self.position_by(rep, |v| v == value)
    }

    pub fn contains(&self, rep: RepId, value: &T) -> Result<bool>
    where
        T: PartialEq,
    {
        Ok(self.position(rep, value)?.is_some())
    }

    /// Iterates `rep`'s elements in chain order.
    pub fn chain(&self, rep: RepId) -> Result<Chain<'_, T>> {
        let head = self.representative(rep)?;
        Ok(Chain::new(self, head))
    }

    #[inline]
    pub fn value(&self, element: ElementId) -> &T {
        &self.nodes[element.0].value
    }

    #[inline]
    pub fn value_mut(&mut self, element: ElementId) -> &mut T {
        &mut self.nodes[element.0].value
    }

    #[inline]
    pub fn next(&self, element: ElementId) -> Option<ElementId> {
        self.nodes[element.0].next
    }

    /// Total number of elements across all sets.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of live sets.
    #[inline]
    pub fn set_count(&self) -> usize {
        self.live_sets
    }

    /// Handles of all live sets, in creation order.
    pub fn sets(&self) -> impl Iterator<Item = RepId> + '_ {
        self.reps
            .iter()
            .enumerate()
            .filter_map(|(idx, head)| head.as_ref().map(|_| RepId(idx)))
    }

    fn new_representative(&mut self, element: ElementId) -> RepId {
        let rep = RepId(self.reps.len());
        self.reps.push(Some(Representative::singleton(element)));
        self.live_sets += 1;
        rep
    }
}

fn broken_chain(rep: RepId) -> Error {
    Error::PreconditionViolation(format!(
        "chain of {rep:?} is shorter than its recorded length"
    ))
}
