//! Path tree for reconstructing action sequences.
//!
//! Uses arena-based allocation with index references (PathNodeId): every
//! expansion appends one node recording the action taken and the parent
//! node. The arena lives for one `solve` invocation and is dropped
//! wholesale when it returns, so nodes never dangle and never leak.

use serde::{Deserialize, Serialize};

/// Index into the PathTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathNodeId(pub u32);

impl PathNodeId {
    /// Sentinel value representing no node (the root's parent).
    pub const NONE: PathNodeId = PathNodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PathNodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "PathNodeId(NONE)")
        } else {
            write!(f, "PathNodeId({})", self.0)
        }
    }
}

/// One expansion step: the action that produced this node's state and a
/// reference to the node it was produced from.
///
/// The root node has `parent == NONE` and `action == None`; it stands for
/// the initial state. Every other node has exactly one parent, and depth
/// strictly decreases walking parent references, so the structure is a
/// tree and reconstruction always terminates.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PathNode<A> {
    /// Parent node (NONE for the root).
    pub parent: PathNodeId,

    /// Action that led here (None only for the root).
    pub action: Option<A>,

    /// Depth in the tree (root = 0).
    pub depth: u32,
}

/// Append-only arena of path nodes.
///
/// Nodes are stored in a flat vector and referenced by `PathNodeId`
/// indices. Multiple frontier entries may share an ancestor; the arena
/// keeps every ancestor alive until the whole tree is dropped.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PathTree<A> {
    nodes: Vec<PathNode<A>>,
}

impl<A: Clone> PathTree<A> {
    /// Create a tree seeded with the root node.
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create a tree with custom initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity);
        nodes.push(PathNode {
            parent: PathNodeId::NONE,
            action: None,
            depth: 0,
        });
        Self { nodes }
    }

    /// The root node ID (always 0).
    #[inline]
    #[must_use]
    pub fn root(&self) -> PathNodeId {
        PathNodeId::new(0)
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: PathNodeId) -> &PathNode<A> {
        &self.nodes[id.0 as usize]
    }

    /// Depth of a node (root = 0).
    #[inline]
    #[must_use]
    pub fn depth(&self, id: PathNodeId) -> u32 {
        self.get(id).depth
    }

    /// Append a child of `parent` produced by `action`, returning its ID.
    pub fn child(&mut self, parent: PathNodeId, action: A) -> PathNodeId {
        let depth = self.get(parent).depth + 1;
        let id = PathNodeId::new(self.nodes.len() as u32);
        self.nodes.push(PathNode {
            parent,
            action: Some(action),
            depth,
        });
        id
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (it never is: the root is seeded).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Reconstruct the action sequence from the root to `id`.
    ///
    /// Walks parent references collecting actions and reverses: O(depth).
    /// Returns the empty sequence for the root itself (goal-at-start);
    /// the root sentinel is never dereferenced for an action.
    #[must_use]
    pub fn reconstruct(&self, id: PathNodeId) -> Vec<A> {
        let mut actions = Vec::with_capacity(self.depth(id) as usize);
        let mut current = id;

        while !current.is_none() {
            let node = self.get(current);
            if let Some(ref action) = node.action {
                actions.push(action.clone());
            }
            current = node.parent;
        }

        actions.reverse();
        actions
    }
}

impl<A: Clone> Default for PathTree<A> {
    fn default() -> Self {
        Self::new()
    }
}
