//! Domain entities: chain nodes and their identities

use std::fmt;

use generational_arena::Index;

/// Identity of a node inside a [`ChainArena`](crate::domain::ChainArena).
///
/// Copyable handle; holding one does not keep the node alive or own it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) Index);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (slot, generation) = self.0.into_raw_parts();
        write!(f, "#{}.{}", slot, generation)
    }
}

/// A single chain element: a value and an optional successor link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    pub(crate) next: Option<NodeId>,
}

impl<T> Node<T> {
    /// New node holding `value` with no successor.
    pub fn new(value: T) -> Self {
        Self { value, next: None }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn next(&self) -> Option<NodeId> {
        self.next
    }

    /// True when the node has no successor.
    pub fn is_tail(&self) -> bool {
        self.next.is_none()
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_new_node_when_created_then_has_no_successor() {
        let node = Node::new(10);
        assert_eq!(*node.value(), 10);
        assert!(node.next().is_none());
        assert!(node.is_tail());
    }

    #[test]
    fn given_node_when_displayed_then_shows_value_only() {
        assert_eq!(Node::new(40).to_string(), "40");
        assert_eq!(Node::new("abc").to_string(), "abc");
    }
}
