//! Arena representation of the displayed hierarchy.
//!
//! Nodes live in a flat map keyed by id; structure is kept as ordered
//! children-id lists plus parent links. Construction and every traversal
//! use explicit stacks, so arbitrarily deep trees never grow the call stack.

use std::collections::{HashMap, HashSet};

use super::node::{Node, NodeId, NodeRecord};
use crate::error::ForestError;

/// A node as stored in the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForestNode {
    title: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// Depth counted from 1 at the roots
    depth: usize,
}

impl ForestNode {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// An ordered sequence of root nodes together with all their descendants.
///
/// Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forest {
    nodes: HashMap<NodeId, ForestNode>,
    roots: Vec<NodeId>,
}

impl Forest {
    /// Build the arena from nested nodes.
    pub fn from_nodes(roots: Vec<Node>) -> Result<Self, ForestError> {
        let mut forest = Forest::default();
        let mut stack: Vec<(Node, Option<NodeId>, usize)> =
            roots.into_iter().rev().map(|node| (node, None, 1)).collect();

        while let Some((node, parent, depth)) = stack.pop() {
            let Node {
                id,
                title,
                children,
            } = node;

            if forest.nodes.contains_key(&id) {
                return Err(ForestError::DuplicateId(id));
            }

            forest.nodes.insert(
                id,
                ForestNode {
                    title,
                    parent,
                    children: children.iter().map(|child| child.id).collect(),
                    depth,
                },
            );
            if parent.is_none() {
                forest.roots.push(id);
            }

            stack.extend(
                children
                    .into_iter()
                    .rev()
                    .map(|child| (child, Some(id), depth + 1)),
            );
        }

        Ok(forest)
    }

    /// Build the arena from flat records linked by parent id.
    ///
    /// Rejects duplicate ids, parents that do not exist and parent chains
    /// that loop back on themselves.
    pub fn from_records(records: Vec<NodeRecord>) -> Result<Self, ForestError> {
        let mut nodes: HashMap<NodeId, ForestNode> = HashMap::with_capacity(records.len());
        let mut links = Vec::with_capacity(records.len());

        for record in records {
            if nodes.contains_key(&record.id) {
                return Err(ForestError::DuplicateId(record.id));
            }
            links.push((record.id, record.parent));
            nodes.insert(
                record.id,
                ForestNode {
                    title: record.title,
                    parent: record.parent,
                    children: Vec::new(),
                    depth: 0,
                },
            );
        }

        let mut roots = Vec::new();
        for &(id, parent) in &links {
            match parent {
                Some(parent) => nodes
                    .get_mut(&parent)
                    .ok_or(ForestError::UnknownParent { id, parent })?
                    .children
                    .push(id),
                None => roots.push(id),
            }
        }

        // Assign depths from the roots down; whatever stays at depth 0 is
        // not reachable from any root and therefore sits on a parent cycle.
        let mut stack: Vec<(NodeId, usize)> = roots.iter().rev().map(|&id| (id, 1)).collect();
        while let Some((id, depth)) = stack.pop() {
            if let Some(node) = nodes.get_mut(&id) {
                node.depth = depth;
                stack.extend(node.children.iter().rev().map(|&child| (child, depth + 1)));
            }
        }

        if let Some(&(start, _)) = links.iter().find(|(id, _)| nodes[id].depth == 0) {
            return Err(ForestError::Cycle(find_cycle(&nodes, start)));
        }

        Ok(Forest { nodes, roots })
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn get(&self, id: NodeId) -> Option<&ForestNode> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn title(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(ForestNode::title)
    }

    /// Children of `id` in display order; empty for leaves and unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(ForestNode::children).unwrap_or(&[])
    }

    pub fn has_children(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(ForestNode::has_children)
    }

    pub fn depth(&self, id: NodeId) -> Option<usize> {
        self.get(id).map(ForestNode::depth)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(ForestNode::parent)
    }

    /// Parent, grandparent, ... up to the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&current| self.parent(current))
    }

    /// Every id in depth-first display order, ignoring expansion.
    pub fn iter_depth_first(&self) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            stack.extend(self.children(id).iter().rev());
            Some(id)
        })
    }

    /// Ids of all nodes that have at least one child.
    pub fn branch_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.iter_depth_first().filter(|&id| self.has_children(id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Walk parent links from `start` until a node repeats; that node is on the cycle.
fn find_cycle(nodes: &HashMap<NodeId, ForestNode>, start: NodeId) -> NodeId {
    let mut seen = HashSet::new();
    let mut current = start;
    while seen.insert(current) {
        match nodes.get(&current).and_then(ForestNode::parent) {
            Some(parent) => current = parent,
            None => break,
        }
    }
    current
}
