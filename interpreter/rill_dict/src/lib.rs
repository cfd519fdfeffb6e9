//! Height-balanced (AVL) word dictionary.
//!
//! [`Dict`] maps string keys to values through a binary search tree ordered
//! by lexicographic key comparison. Nodes live in an arena (`Vec`) and
//! address each other by [`NodeId`]; every node carries a parent
//! back-reference and a cached subtree height, enabling the iterative
//! upward rebalance performed after each shape-changing insert.
//!
//! # Invariants
//!
//! - Balance: `|height(left) − height(right)| ≤ 1` at every node, with
//!   `height(leaf) = 1` and `height(none) = 0`.
//! - Order: every key in a left subtree < node key < every key in a right
//!   subtree.
//!
//! Entries are never removed: [`Dict::delete`] reports
//! [`DictError::NotImplemented`] and leaves the tree untouched.

use std::cmp::Ordering;

use thiserror::Error;

/// Failure modes of dictionary operations.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Error)]
pub enum DictError {
    /// Deletion is not supported by this dictionary.
    #[error("delete is not implemented")]
    NotImplemented,
    /// Arena storage for a new node could not be allocated.
    #[error("node allocation failed")]
    Alloc,
}

/// Arena index of a node. Stable for the lifetime of the dictionary, since
/// nodes are never removed.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug)]
struct Node<V> {
    key: String,
    value: V,
    left: Option<NodeId>,
    right: Option<NodeId>,
    /// Back-reference for iterative upward rebalancing; `None` at the root.
    parent: Option<NodeId>,
    /// Cached subtree height: `1 + max(height(left), height(right))`.
    height: u32,
}

impl<V> Node<V> {
    fn leaf(key: String, value: V, parent: Option<NodeId>) -> Self {
        Node {
            key,
            value,
            left: None,
            right: None,
            parent,
            height: 1,
        }
    }
}

/// An AVL-balanced map from string keys to `V`.
#[derive(Debug)]
pub struct Dict<V> {
    nodes: Vec<Node<V>>,
    root: Option<NodeId>,
}

impl<V> Dict<V> {
    /// An empty dictionary.
    pub fn new() -> Self {
        Dict {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up `key` by standard BST descent, O(log n).
    pub fn lookup(&self, key: &str) -> Option<&V> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.node(id);
            match key.cmp(node.key.as_str()) {
                Ordering::Equal => return Some(&node.value),
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
            }
        }
        None
    }

    /// Insert `key` → `value`.
    ///
    /// An existing key has its value replaced in place — the tree shape is
    /// untouched and no rebalance runs. A new key becomes a leaf at the
    /// insertion point, followed by one rebalance pass from the leaf's
    /// parent up to the root.
    ///
    /// Returns [`DictError::Alloc`] if node storage cannot be reserved;
    /// the tree is left unchanged in that case.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Result<(), DictError> {
        let key = key.into();
        let Some(mut current) = self.root else {
            let id = self.alloc_node(Node::leaf(key, value, None))?;
            self.root = Some(id);
            return Ok(());
        };
        loop {
            match key.as_str().cmp(self.node(current).key.as_str()) {
                Ordering::Equal => {
                    self.node_mut(current).value = value;
                    return Ok(());
                }
                Ordering::Less => match self.node(current).left {
                    Some(left) => current = left,
                    None => {
                        let id = self.alloc_node(Node::leaf(key, value, Some(current)))?;
                        self.node_mut(current).left = Some(id);
                        break;
                    }
                },
                Ordering::Greater => match self.node(current).right {
                    Some(right) => current = right,
                    None => {
                        let id = self.alloc_node(Node::leaf(key, value, Some(current)))?;
                        self.node_mut(current).right = Some(id);
                        break;
                    }
                },
            }
        }
        self.rebalance_from(current);
        Ok(())
    }

    /// Deletion is unsupported: always reports
    /// [`DictError::NotImplemented`] without touching the tree.
    pub fn delete(&mut self, _key: &str) -> Result<V, DictError> {
        Err(DictError::NotImplemented)
    }

    /// Rebalance upward from `start` (the parent of a freshly attached
    /// leaf) to the root.
    ///
    /// At each ancestor: recompute the cached height, compute the balance
    /// factor `height(left) − height(right)`, and rotate when it leaves
    /// `[-1, 1]` — rotating the child first in the double-rotation cases.
    fn rebalance_from(&mut self, start: NodeId) {
        let mut current = Some(start);
        while let Some(id) = current {
            self.update_height(id);
            let balance = self.balance_factor(id);
            if balance < -1 {
                // Right-heavy. A left-heavy right child needs a preparatory
                // right rotation (right-left case).
                if let Some(right) = self.node(id).right {
                    if self.balance_factor(right) > 0 {
                        self.rotate_right(right);
                    }
                    self.rotate_left(id);
                }
            } else if balance > 1 {
                // Left-heavy, symmetric (left-right case).
                if let Some(left) = self.node(id).left {
                    if self.balance_factor(left) < 0 {
                        self.rotate_left(left);
                    }
                    self.rotate_right(id);
                }
            }
            // After a rotation the old subtree root's parent is the pivot,
            // so the walk still visits every ancestor on the way up.
            current = self.node(id).parent;
        }
    }

    /// Left-rotate the subtree rooted at `node`: its right child becomes
    /// the new subtree root, and `node` becomes that child's left child.
    ///
    /// Fixes parent back-references and cached heights of both touched
    /// nodes. Rotating the overall root updates [`Dict::root`].
    fn rotate_left(&mut self, node: NodeId) {
        let Some(pivot) = self.node(node).right else {
            return;
        };
        let displaced = self.node(pivot).left;
        self.replace_child(node, pivot);
        self.node_mut(pivot).left = Some(node);
        self.node_mut(node).parent = Some(pivot);
        self.node_mut(node).right = displaced;
        if let Some(displaced) = displaced {
            self.node_mut(displaced).parent = Some(node);
        }
        self.update_height(node);
        self.update_height(pivot);
    }

    /// Mirror image of [`Self::rotate_left`].
    fn rotate_right(&mut self, node: NodeId) {
        let Some(pivot) = self.node(node).left else {
            return;
        };
        let displaced = self.node(pivot).right;
        self.replace_child(node, pivot);
        self.node_mut(pivot).right = Some(node);
        self.node_mut(node).parent = Some(pivot);
        self.node_mut(node).left = displaced;
        if let Some(displaced) = displaced {
            self.node_mut(displaced).parent = Some(node);
        }
        self.update_height(node);
        self.update_height(pivot);
    }

    /// Re-parent `replacement` into the tree position of `node`: the
    /// parent's child link (or the external root pointer) is redirected,
    /// and `replacement.parent` is updated to match.
    fn replace_child(&mut self, node: NodeId, replacement: NodeId) {
        let parent = self.node(node).parent;
        self.node_mut(replacement).parent = parent;
        match parent {
            None => self.root = Some(replacement),
            Some(parent) => {
                if self.node(parent).left == Some(node) {
                    self.node_mut(parent).left = Some(replacement);
                } else {
                    self.node_mut(parent).right = Some(replacement);
                }
            }
        }
    }

    fn update_height(&mut self, id: NodeId) {
        let left = self.height_of(self.node(id).left);
        let right = self.height_of(self.node(id).right);
        self.node_mut(id).height = 1 + left.max(right);
    }

    fn balance_factor(&self, id: NodeId) -> i64 {
        let left = self.height_of(self.node(id).left);
        let right = self.height_of(self.node(id).right);
        i64::from(left) - i64::from(right)
    }

    fn height_of(&self, id: Option<NodeId>) -> u32 {
        id.map_or(0, |id| self.node(id).height)
    }

    fn alloc_node(&mut self, node: Node<V>) -> Result<NodeId, DictError> {
        self.nodes.try_reserve(1).map_err(|_| DictError::Alloc)?;
        // An arena past u32::MAX nodes counts as storage exhaustion too.
        let id = u32::try_from(self.nodes.len()).map_err(|_| DictError::Alloc)?;
        self.nodes.push(node);
        Ok(NodeId(id))
    }

    fn node(&self, id: NodeId) -> &Node<V> {
        &self.nodes[id.index()]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<V> {
        &mut self.nodes[id.index()]
    }
}

impl<V> Default for Dict<V> {
    fn default() -> Self {
        Self::new()
    }
}
