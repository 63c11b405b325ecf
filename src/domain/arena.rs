use generational_arena::Arena;
use tracing::{debug, instrument};

use crate::domain::{DomainError, DomainResult, Node, NodeId};

/// Arena owning every node of one or more chains.
///
/// Successor links are arena indices, so a node never owns the node it points to.
/// Nodes are inserted and relinked but never removed: an id handed out by
/// [`ChainArena::insert`] stays valid for the lifetime of the arena.
/// A chain is identified by its head id; `None` is the empty chain.
#[derive(Debug)]
pub struct ChainArena<T> {
    arena: Arena<Node<T>>,
}

impl<T> Default for ChainArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ChainArena<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    /// Creates a detached node holding `value`.
    #[instrument(level = "trace", skip(self, value))]
    pub fn insert(&mut self, value: T) -> NodeId {
        NodeId(self.arena.insert(Node::new(value)))
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.arena.get(id.0)
    }

    /// Looks up a node, failing with `NodeNotFound` for ids this arena does not hold.
    pub fn require(&self, id: NodeId) -> DomainResult<&Node<T>> {
        self.node(id).ok_or(DomainError::NodeNotFound(id))
    }

    pub fn value(&self, id: NodeId) -> DomainResult<&T> {
        self.require(id).map(Node::value)
    }

    /// Points `id` at `next`, replacing any previous successor. `None` makes `id` a tail.
    ///
    /// # Errors
    /// - `NodeNotFound` if either id is unknown to this arena
    /// - `CycleDetected` if walking forward from `next` reaches `id`
    #[instrument(level = "trace", skip(self))]
    pub fn set_next(&mut self, id: NodeId, next: Option<NodeId>) -> DomainResult<()> {
        self.require(id)?;
        if let Some(successor) = next {
            self.require(successor)?;
            // Existing links are acyclic, so this walk terminates.
            if self.successors(Some(successor)).any(|(seen, _)| seen == id) {
                debug!(%id, %successor, "rejecting link");
                return Err(DomainError::CycleDetected {
                    node: id,
                    successor,
                });
            }
        }
        if let Some(node) = self.arena.get_mut(id.0) {
            node.next = next;
        }
        Ok(())
    }

    /// Lazily yields `head` and every node reachable from it, in chain order.
    pub fn successors(&self, head: Option<NodeId>) -> Successors<'_, T> {
        Successors {
            arena: self,
            current: head,
        }
    }

    /// Number of nodes from `head` to the end of its chain, head included.
    #[instrument(level = "trace", skip(self))]
    pub fn len_from(&self, head: Option<NodeId>) -> usize {
        self.successors(head).count()
    }

    /// Advances exactly `hops` successor links from `head`.
    ///
    /// `hops == 0` returns `head` unchanged, `None` included. Every hop must land
    /// on a node: stepping from an empty head or past the tail is out of range.
    ///
    /// # Errors
    /// - `OutOfRange` if the chain ends before `hops` links were followed
    /// - `NodeNotFound` if `head` is unknown to this arena
    #[instrument(level = "debug", skip(self))]
    pub fn hop(&self, head: Option<NodeId>, hops: usize) -> DomainResult<Option<NodeId>> {
        if let Some(id) = head {
            self.require(id)?;
        }

        let mut current = head;
        for taken in 0..hops {
            let next = match current {
                Some(id) => self.require(id)?.next,
                None => None,
            };
            current = Some(next.ok_or(DomainError::OutOfRange {
                requested: hops,
                available: taken,
            })?);
        }
        Ok(current)
    }

    /// Signed entry point for [`hop`](Self::hop): negative counts are rejected with
    /// `InvalidArgument` before any traversal.
    #[instrument(level = "debug", skip(self))]
    pub fn get(&self, head: Option<NodeId>, n: i64) -> DomainResult<Option<NodeId>> {
        let hops = usize::try_from(n).map_err(|_| DomainError::InvalidArgument(n))?;
        self.hop(head, hops)
    }

    /// Inserts `values` as fresh nodes linked in iteration order and returns the head.
    #[instrument(level = "trace", skip(self, values))]
    pub fn chain<I>(&mut self, values: I) -> Option<NodeId>
    where
        I: IntoIterator<Item = T>,
    {
        let mut head = None;
        let mut tail: Option<NodeId> = None;
        for value in values {
            let id = self.insert(value);
            match tail.and_then(|t| self.arena.get_mut(t.0)) {
                Some(prev) => prev.next = Some(id),
                None => head = Some(id),
            }
            tail = Some(id);
        }
        head
    }
}

/// Iterator over a chain, ending where a node has no successor.
pub struct Successors<'a, T> {
    arena: &'a ChainArena<T>,
    current: Option<NodeId>,
}

impl<'a, T> Iterator for Successors<'a, T> {
    type Item = (NodeId, &'a Node<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.arena.node(id)?;
        self.current = node.next;
        Some((id, node))
    }
}
