//! The classifier produced by the ID3 algorithm.
use crate::node::Node;
use crate::record::{AttributeMap, Label};

use serde::{Serialize, Deserialize};


/// Decision tree classifier.
/// This struct is a thin wrapper of the root [`Node`],
/// produced by [`DecisionTree::fit`](crate::DecisionTree::fit).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node,
}


impl From<Node> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}


impl DecisionTreeClassifier {
    /// Classify a record given as its attribute map.
    /// Pure and deterministic:
    /// repeated calls with the same map return the same label.
    ///
    /// A value never seen during induction
    /// (or an entirely missing attribute)
    /// matches no edge and yields [`Label::Negative`].
    #[inline]
    pub fn classify(&self, values: &AttributeMap) -> Label {
        self.root.classify(values)
    }


    /// The root node of the tree.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// The number of nodes on the longest root-to-leaf path.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}
