//! The node type of an induced decision tree.
use crate::record::{AttributeMap, Label};

use serde::{Serialize, Deserialize};

use std::collections::BTreeMap;


/// A node of a decision tree.
///
/// A tree is either a [`Node::Leaf`] carrying the predicted label,
/// or a [`Node::Decision`] carrying the splitting attribute and
/// one child per attribute value observed during induction.
/// Each node is exclusively owned by its parent,
/// and no node is modified after construction.
///
/// The children live in a `BTreeMap`,
/// so traversal order is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// An internal node that routes a record
    /// by its value for `attribute`.
    Decision {
        /// The splitting attribute.
        attribute: String,
        /// One child per attribute value observed in the
        /// record subset that reached this node.
        /// Values whose subset was empty get no child.
        children: BTreeMap<String, Node>,
    },
    /// A terminal node carrying the predicted label.
    Leaf {
        /// The predicted label.
        label: Label,
    },
}


impl Node {
    /// Construct a decision node.
    #[inline]
    pub fn decision(attribute: String, children: BTreeMap<String, Node>)
        -> Self
    {
        Self::Decision { attribute, children }
    }


    /// Construct a leaf node predicting `label`.
    #[inline]
    pub fn leaf(label: Label) -> Self {
        Self::Leaf { label }
    }


    /// Classify a record by walking down the tree.
    ///
    /// At a decision node,
    /// a record that lacks the splitting attribute
    /// or carries a value never seen during induction
    /// matches no edge and falls back to [`Label::Negative`],
    /// mirroring the induction-time policy of
    /// never attaching a child for an empty subset.
    pub fn classify(&self, values: &AttributeMap) -> Label {
        match self {
            Node::Leaf { label } => *label,
            Node::Decision { attribute, children } => {
                values.get(attribute)
                    .and_then(|value| children.get(value))
                    .map(|child| child.classify(values))
                    .unwrap_or(Label::Negative)
            },
        }
    }


    /// The number of nodes on the longest root-to-leaf path.
    /// A lone leaf has depth `1`.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Decision { children, .. } => {
                1 + children.values()
                    .map(Node::depth)
                    .max()
                    .unwrap_or(0)
            },
        }
    }
}
