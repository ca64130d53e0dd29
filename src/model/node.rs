//! Nodes of phylogenetic trees, addressed by id within a forest.

// =#========================================================================#=
// NODE ID
// =#========================================================================#=

/// Identifier of a node within its [Forest](crate::model::Forest).
///
/// Ids are stamped in creation order starting at 1 and are never reused,
/// so two handles refer to the same node exactly when their ids are equal.
/// Id 0 is never valid.
pub type NodeId = usize;

// =#========================================================================#=
// NODE
// =#========================================================================#=

/// A node of a rooted multi-way phylogenetic tree.
///
/// Children are kept as a first-child/next-sibling chain: [child](Node::child)
/// points to the first child and each child's [sib](Node::sib) to the next
/// one, preserving declaration order of the source record. A node without a
/// parent is the root of its tree.
///
/// Nodes are owned by a [Forest](crate::model::Forest) and referenced by
/// [NodeId]; the link fields store ids, never references. Link surgery goes
/// through the forest, which keeps the chains mutually consistent.
#[derive(Debug, Clone)]
pub struct Node {
    /// Id of this node, equal to its creation rank in the forest
    pub(crate) id: NodeId,
    /// Label of this node; empty means anonymous
    pub(crate) label: String,
    /// Distance to the parent; `None` when the source carried no length
    pub(crate) length: Option<f64>,
    /// Parent of this node, `None` for roots
    pub(crate) parent: Option<NodeId>,
    /// First child in declaration order
    pub(crate) child: Option<NodeId>,
    /// Next sibling in the parent's child chain
    pub(crate) sib: Option<NodeId>,
}

impl Node {
    pub(crate) fn new(id: NodeId) -> Node {
        Node {
            id,
            label: String::new(),
            length: None,
            parent: None,
            child: None,
            sib: None,
        }
    }

    // =======================================================================
    // Accessors (pub)
    // =======================================================================

    /// Returns the id of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the label of this node; empty for anonymous nodes.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the branch length to the parent, or `None` if none is set.
    ///
    /// `Some(0.0)` and `None` are distinct states: a length of zero is
    /// written back to Newick, an absent length is not.
    pub fn length(&self) -> Option<f64> {
        self.length
    }

    /// Returns whether a branch length is set.
    pub fn has_length(&self) -> bool {
        self.length.is_some()
    }

    /// Returns the parent of this node, or `None` for a root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the first child of this node, or `None` for a leaf.
    pub fn child(&self) -> Option<NodeId> {
        self.child
    }

    /// Returns the next sibling of this node.
    pub fn sib(&self) -> Option<NodeId> {
        self.sib
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.child.is_none()
    }

    /// Returns `true` if this node has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    // =======================================================================
    // Mutators (pub)
    // =======================================================================

    /// Sets the label of this node.
    pub fn set_label<S: Into<String>>(&mut self, label: S) {
        self.label = label.into();
    }

    /// Sets the branch length to the parent.
    pub fn set_length(&mut self, length: f64) {
        self.length = Some(length);
    }

    /// Removes the branch length of this node.
    pub fn clear_length(&mut self) {
        self.length = None;
    }

    /// Appends a fragment to the label, used when a label arrives in
    /// several pieces around quotes or comments.
    pub(crate) fn append_label(&mut self, fragment: &str) {
        self.label.push_str(fragment);
    }
}
