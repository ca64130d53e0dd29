//! Forest arena owning every node of every parsed or constructed tree.

use std::collections::{BTreeSet, HashSet};

use crate::model::node::{Node, NodeId};
use crate::model::tree_error::TreeError;
use crate::newick;

/// Indentation step of [Forest::indented].
const INDENT: &str = "   ";

// =#========================================================================#=
// CLADE REMOVAL
// =#========================================================================#=

/// Outcome of [Forest::remove_clade].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CladeRemoval {
    /// The clade was detached from its parent and lives on as a tree of
    /// its own; its root id stays valid.
    Detached,
    /// The clade root had no parent, so the whole tree is gone. The
    /// handle should be discarded.
    TreeDestroyed,
}

// =#========================================================================#=
// FOREST
// =#========================================================================#=

/// Owner of one or more rooted multi-way trees.
///
/// Nodes live in a single arena and are addressed by [NodeId]; parsing
/// several records into the same forest, or detaching and copying clades,
/// simply grows the set of roots. Nodes are created once and never
/// deallocated, so ids remain stable across any sequence of edits.
///
/// All queries take `&self` and keep their scratch state on the caller's
/// stack, so a shared forest can be queried from several threads at once.
#[derive(Debug, Clone, Default)]
pub struct Forest {
    /// Arena of nodes; the node with id `i` lives in slot `i - 1`
    nodes: Vec<Node>,
}

impl Forest {
    // =======================================================================
    // Construction (pub)
    // =======================================================================

    /// Creates an empty forest.
    pub fn new() -> Forest {
        Forest { nodes: Vec::new() }
    }

    /// Creates an empty forest with space reserved for `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Forest {
        Forest {
            nodes: Vec::with_capacity(nodes),
        }
    }

    /// Creates a fresh unlabelled node with no links and returns its id.
    ///
    /// Ids are handed out in creation order starting at 1.
    pub fn new_node(&mut self) -> NodeId {
        let id = self.nodes.len() + 1;
        self.nodes.push(Node::new(id));
        id
    }

    // =======================================================================
    // Accessors (pub)
    // =======================================================================

    /// Returns the number of nodes ever created in this forest.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no node has been created yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns a reference to the node with the given id.
    ///
    /// # Panics
    /// Panics if `id` is 0 or larger than the number of created nodes.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id - 1]
    }

    /// Returns a mutable reference to the node with the given id, e.g. to
    /// set its label or branch length.
    ///
    /// # Panics
    /// Panics if `id` is 0 or larger than the number of created nodes.
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id - 1]
    }

    // =======================================================================
    // Structural editing (pub)
    // =======================================================================

    /// Attaches `child` as the last child of `parent`.
    ///
    /// The child keeps its own clade; attaching the root of a detached
    /// clade grafts the whole clade. The child must not currently have a
    /// parent.
    ///
    /// # Example
    /// ```
    /// use arbor::parse_newick_str;
    ///
    /// let (mut forest, root) = parse_newick_str("(A,B);").unwrap();
    /// let c = forest.new_node();
    /// forest.node_mut(c).set_label("C");
    /// forest.add_child(root, c);
    /// assert_eq!(forest.to_newick(root), "(A,B,C);");
    /// ```
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(self[child].parent.is_none(), "child is still attached");

        self.node_mut(child).parent = Some(parent);
        match self[parent].child {
            None => self.node_mut(parent).child = Some(child),
            Some(first) => {
                let mut walk = first;
                while let Some(next) = self[walk].sib {
                    walk = next;
                }
                self.node_mut(walk).sib = Some(child);
            }
        }
    }

    /// Detaches `child` from `parent`, keeping the child's own clade
    /// intact. The child becomes the root of a separate tree.
    ///
    /// # Errors
    /// * [TreeError::NoChildren] - `parent` has no children
    /// * [TreeError::ChildNotFound] - `child` is not among them
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        let Some(first) = self[parent].child else {
            return Err(TreeError::NoChildren(parent));
        };

        if first == child {
            let next = self[child].sib;
            self.node_mut(parent).child = next;
        } else {
            let mut walk = first;
            loop {
                let Some(next) = self[walk].sib else {
                    return Err(TreeError::ChildNotFound { parent, child });
                };
                if next == child {
                    let after = self[child].sib;
                    self.node_mut(walk).sib = after;
                    break;
                }
                walk = next;
            }
        }

        let removed = self.node_mut(child);
        removed.parent = None;
        removed.sib = None;
        Ok(())
    }

    /// Detaches the clade rooted at `v` from its tree.
    ///
    /// A detached clade stays alive as a tree of its own. Removing a node
    /// that already is a root removes the entire tree instead.
    ///
    /// # Example
    /// ```
    /// use arbor::model::CladeRemoval;
    /// use arbor::parse_newick_str;
    ///
    /// let (mut forest, root) = parse_newick_str("((A,B)ab,C);").unwrap();
    /// let ab = forest[root].child().unwrap();
    /// assert_eq!(forest.remove_clade(ab), CladeRemoval::Detached);
    /// assert_eq!(forest.to_newick(root), "(C);");
    /// assert_eq!(forest.remove_clade(root), CladeRemoval::TreeDestroyed);
    /// ```
    pub fn remove_clade(&mut self, v: NodeId) -> CladeRemoval {
        let Some(parent) = self[v].parent else {
            return CladeRemoval::TreeDestroyed;
        };
        let detached = self.remove_child(parent, v);
        debug_assert!(detached.is_ok(), "parent link without chain membership");
        CladeRemoval::Detached
    }

    /// Deep-copies the clade rooted at `v` and returns the id of the copy.
    ///
    /// The copy gets fresh ids, duplicates labels and branch lengths, and
    /// starts out as the root of its own tree; the copied root's branch
    /// length is retained and becomes meaningful again once the copy is
    /// grafted below a new parent.
    ///
    /// # Example
    /// ```
    /// use arbor::parse_newick_str;
    ///
    /// let (mut forest, root) = parse_newick_str("((A,B)ab,C);").unwrap();
    /// let ab = forest[root].child().unwrap();
    /// let copy = forest.copy_clade(ab);
    /// forest.node_mut(copy).set_label("clone");
    /// assert_eq!(forest.to_newick(copy), "(A,B)clone;");
    /// assert_eq!(forest[ab].label(), "ab");
    /// ```
    pub fn copy_clade(&mut self, v: NodeId) -> NodeId {
        let copy = self.new_node();
        let (label, length) = {
            let source = self.node(v);
            (source.label.clone(), source.length)
        };
        let target = self.node_mut(copy);
        target.label = label;
        target.length = length;

        let mut next_child = self[v].child;
        let mut prev: Option<NodeId> = None;
        while let Some(child) = next_child {
            next_child = self[child].sib;
            let child_copy = self.copy_clade(child);
            self.node_mut(child_copy).parent = Some(copy);
            match prev {
                None => self.node_mut(copy).child = Some(child_copy),
                Some(p) => self.node_mut(p).sib = Some(child_copy),
            }
            prev = Some(child_copy);
        }

        copy
    }

    /// Links `sib` as the next sibling of `after` under the same parent.
    ///
    /// Used by the parser, which always appends at the current chain end.
    pub(crate) fn link_sibling(&mut self, after: NodeId, sib: NodeId) {
        debug_assert!(self[after].sib.is_none(), "sibling chain would be cut");

        let parent = self[after].parent;
        self.node_mut(sib).parent = parent;
        self.node_mut(after).sib = Some(sib);
    }

    // =======================================================================
    // Queries (pub)
    // =======================================================================

    /// Returns the lowest common ancestor of `a` and `b`, or `None` if the
    /// two nodes belong to different trees.
    ///
    /// A node is its own ancestor, so `lca(v, v)` is `Some(v)` and the lca
    /// of a node and one of its descendants is the node itself.
    ///
    /// # Example
    /// ```
    /// use arbor::parse_newick_str;
    ///
    /// let (forest, root) = parse_newick_str("((A,B)ab,C);").unwrap();
    /// let ab = forest[root].child().unwrap();
    /// let a = forest[ab].child().unwrap();
    /// let b = forest[a].sib().unwrap();
    /// assert_eq!(forest.lca(a, b), Some(ab));
    /// assert_eq!(forest.lca(a, a), Some(a));
    /// ```
    pub fn lca(&self, a: NodeId, b: NodeId) -> Option<NodeId> {
        let on_path: HashSet<NodeId> = self.ancestors(a).collect();
        self.ancestors(b).find(|id| on_path.contains(id))
    }

    /// Sums the branch lengths on the path from `v` up to `ancestor`.
    ///
    /// Branches without a length count as 0, and `up_distance(v, v)` is 0.
    ///
    /// # Errors
    /// [TreeError::NotAncestor] if `ancestor` does not lie on the rootward
    /// path from `v`.
    ///
    /// # Example
    /// ```
    /// use arbor::parse_newick_str;
    ///
    /// let (forest, root) = parse_newick_str("((A:1,B:2)ab:3,C:4);").unwrap();
    /// let ab = forest[root].child().unwrap();
    /// let a = forest[ab].child().unwrap();
    /// assert_eq!(forest.up_distance(a, root).unwrap(), 4.0);
    /// assert!(forest.up_distance(root, a).is_err());
    /// ```
    pub fn up_distance(&self, v: NodeId, ancestor: NodeId) -> Result<f64, TreeError> {
        let mut distance = 0.0;
        let mut current = v;
        while current != ancestor {
            distance += self[current].length.unwrap_or(0.0);
            current = self[current]
                .parent
                .ok_or(TreeError::NotAncestor { node: v, ancestor })?;
        }
        Ok(distance)
    }

    /// Builds a canonical key for the clade rooted at `v`: its distinct
    /// non-empty labels, sorted and joined by `separator`.
    ///
    /// Two clades over the same taxa get the same key regardless of child
    /// order, which makes the key usable for matching clades across trees.
    pub fn key(&self, v: NodeId, separator: &str) -> String {
        let labels: BTreeSet<&str> = self
            .iter_clade(v)
            .map(|id| self[id].label())
            .filter(|label| !label.is_empty())
            .collect();
        labels.into_iter().collect::<Vec<_>>().join(separator)
    }

    /// Relabels every node of the clade rooted at `v` with `prefix`
    /// followed by the node's id.
    ///
    /// Since ids are unique forest-wide, the resulting labels are too.
    ///
    /// # Example
    /// ```
    /// use arbor::parse_newick_str;
    ///
    /// let (mut forest, root) = parse_newick_str("((A,B),C);").unwrap();
    /// forest.uniform_labels(root, "n");
    /// assert_eq!(forest.to_newick(root), "((n3,n4)n2,n5)n1;");
    /// ```
    pub fn uniform_labels(&mut self, v: NodeId, prefix: &str) {
        let ids: Vec<NodeId> = self.iter_clade(v).collect();
        for id in ids {
            self.node_mut(id).label = format!("{prefix}{id}");
        }
    }

    // =======================================================================
    // Rendering (pub)
    // =======================================================================

    /// Returns the Newick text of the tree rooted at `v`.
    ///
    /// Shorthand for [newick::to_newick]; see there for the exact output
    /// conventions.
    pub fn to_newick(&self, v: NodeId) -> String {
        newick::to_newick(self, v)
    }

    /// Renders the clade rooted at `v` as an indented outline, one label
    /// per line, three spaces per level. Anonymous nodes print as `*`.
    ///
    /// Within each level, later siblings print before earlier ones and
    /// before their common parent, so the outline reads bottom-up:
    ///
    /// ```
    /// use arbor::parse_newick_str;
    ///
    /// let (forest, root) = parse_newick_str("((A,B)ab,C);").unwrap();
    /// assert_eq!(forest.indented(root), "*\n   C\n   ab\n      B\n      A\n");
    /// ```
    pub fn indented(&self, v: NodeId) -> String {
        let mut out = String::new();
        self.write_indented(Some(v), 0, &mut out);
        out
    }

    fn write_indented(&self, v: Option<NodeId>, depth: usize, out: &mut String) {
        let Some(id) = v else { return };
        self.write_indented(self[id].sib, depth, out);

        for _ in 0..depth {
            out.push_str(INDENT);
        }
        let label = self[id].label();
        if label.is_empty() {
            out.push('*');
        } else {
            out.push_str(label);
        }
        out.push('\n');

        self.write_indented(self[id].child, depth + 1, out);
    }

    // =======================================================================
    // Iteration (pub)
    // =======================================================================

    /// Iterates over the clade rooted at `v` in pre-order: each node
    /// before its children, children in declaration order.
    ///
    /// # Example
    /// ```
    /// use arbor::parse_newick_str;
    ///
    /// let (forest, root) = parse_newick_str("((A,B)ab,C);").unwrap();
    /// let labels: Vec<&str> = forest
    ///     .iter_clade(root)
    ///     .map(|id| forest[id].label())
    ///     .collect();
    /// assert_eq!(labels, ["", "ab", "A", "B", "C"]);
    /// ```
    pub fn iter_clade(&self, v: NodeId) -> CladeIter<'_> {
        CladeIter {
            forest: self,
            top: v,
            stack: vec![v],
        }
    }

    /// Iterates from `v` rootward over its ancestors, starting with `v`
    /// itself and ending at the root of its tree.
    pub fn ancestors(&self, v: NodeId) -> Ancestors<'_> {
        Ancestors {
            forest: self,
            next: Some(v),
        }
    }

    // =======================================================================
    // Validation (pub)
    // =======================================================================

    /// Checks the structural invariants of the whole forest.
    ///
    /// Verifies that ids match creation order, that every node on a child
    /// chain points back to the chain's owner, that every node with a
    /// parent is reachable from that parent's first child, that roots
    /// never sit in a sibling chain, and that walking rootward from any
    /// node reaches a root. All walks are bounded by the arena size, so a
    /// forest corrupted into a cycle, sideways or rootward, reports
    /// `false` instead of hanging.
    pub fn is_consistent(&self) -> bool {
        let bound = self.nodes.len();

        for (slot, node) in self.nodes.iter().enumerate() {
            if node.id != slot + 1 {
                return false;
            }

            // A root never sits in a sibling chain.
            if node.parent.is_none() && node.sib.is_some() {
                return false;
            }

            // Every node on the child chain points back to this node.
            let mut steps = 0;
            let mut walk = node.child;
            while let Some(id) = walk {
                if self[id].parent != Some(node.id) {
                    return false;
                }
                steps += 1;
                if steps > bound {
                    return false;
                }
                walk = self[id].sib;
            }

            // A node with a parent is on that parent's child chain.
            if let Some(parent) = node.parent {
                let mut found = false;
                let mut steps = 0;
                let mut walk = self[parent].child;
                while let Some(id) = walk {
                    if id == node.id {
                        found = true;
                        break;
                    }
                    steps += 1;
                    if steps > bound {
                        return false;
                    }
                    walk = self[id].sib;
                }
                if !found {
                    return false;
                }
            }

            // Walking rootward from any node reaches a root.
            let mut steps = 0;
            let mut walk = node.parent;
            while let Some(id) = walk {
                steps += 1;
                if steps > bound {
                    return false;
                }
                walk = self[id].parent;
            }
        }

        true
    }
}

impl std::ops::Index<NodeId> for Forest {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id - 1]
    }
}

impl std::ops::IndexMut<NodeId> for Forest {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.nodes[id - 1]
    }
}

// =#========================================================================#=
// CLADE ITERATOR
// =#========================================================================#=

/// Pre-order iterator over one clade, created by [Forest::iter_clade].
pub struct CladeIter<'a> {
    forest: &'a Forest,
    /// Root of the traversed clade; its siblings are not part of the clade
    top: NodeId,
    stack: Vec<NodeId>,
}

impl Iterator for CladeIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = &self.forest[id];
        if id != self.top {
            if let Some(sib) = node.sib() {
                self.stack.push(sib);
            }
        }
        if let Some(child) = node.child() {
            self.stack.push(child);
        }
        Some(id)
    }
}

// =#========================================================================#=
// ANCESTOR ITERATOR
// =#========================================================================#=

/// Rootward iterator over a node and its ancestors, created by
/// [Forest::ancestors].
pub struct Ancestors<'a> {
    forest: &'a Forest,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.forest[id].parent();
        Some(id)
    }
}
