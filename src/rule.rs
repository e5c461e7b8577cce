//! Extraction of a boolean rule describing the positive class.
use crate::classifier::DecisionTreeClassifier;
use crate::node::Node;

use serde::{Serialize, Deserialize};

use std::fmt;


/// A boolean expression over `(attribute = value)` literals
/// describing exactly the records a tree classifies as positive.
///
/// Each root-to-positive-leaf path contributes the conjunction of
/// the literals along it;
/// sibling paths combine by disjunction.
/// Paths ending in a negative leaf contribute nothing.
///
/// The [`Display`](fmt::Display) implementation renders the rule
/// in a bracketed textual form such as
/// `[ (odor = Almond) OR (odor = None) AND [ (color = White) ] ]`,
/// where a disjunction brackets its alternatives and
/// `AND` introduces the nested rule of a child decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Rule {
    /// A single `(attribute = value)` test.
    Literal {
        /// The tested attribute.
        attribute: String,
        /// The value the attribute must carry.
        value: String,
    },
    /// Every part must hold (a path through the tree).
    /// The empty conjunction holds for every record;
    /// it arises from a tree that is a single positive leaf.
    Conjunction(Vec<Rule>),
    /// At least one part must hold (alternative paths).
    /// The empty disjunction holds for no record;
    /// it arises from a tree without positive leaves.
    Disjunction(Vec<Rule>),
}


impl Rule {
    /// Extract the positive-class rule of a classifier.
    #[inline]
    pub fn from_classifier(classifier: &DecisionTreeClassifier) -> Self {
        Self::from_node(classifier.root())
    }


    fn from_node(node: &Node) -> Self {
        match node {
            Node::Leaf { label } if label.is_positive() => {
                Rule::Conjunction(Vec::new())
            },
            Node::Leaf { .. } => Rule::Disjunction(Vec::new()),
            Node::Decision { attribute, children } => {
                let mut alternatives = Vec::new();
                for (value, child) in children {
                    let literal = Rule::Literal {
                        attribute: attribute.clone(),
                        value: value.clone(),
                    };
                    match child {
                        // A positive leaf closes the path:
                        // the literal alone is the condition.
                        Node::Leaf { label } if label.is_positive() => {
                            alternatives.push(literal);
                        },
                        // A negative leaf contributes nothing.
                        Node::Leaf { .. } => {},
                        Node::Decision { .. } => {
                            let nested = Self::from_node(child);
                            // A subtree without positive leaves yields the
                            // empty disjunction; its path is pruned whole,
                            // like a direct negative leaf.
                            if matches!(&nested, Rule::Disjunction(v) if v.is_empty()) {
                                continue;
                            }
                            alternatives.push(
                                Rule::Conjunction(vec![literal, nested])
                            );
                        },
                    }
                }
                Rule::Disjunction(alternatives)
            },
        }
    }
}


impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Literal { attribute, value } => {
                write!(f, "({attribute} = {value})")
            },
            Rule::Conjunction(parts) => {
                if parts.is_empty() {
                    return write!(f, "( )");
                }
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        write!(f, " AND ")?;
                    }
                    write!(f, "{part}")?;
                }
                Ok(())
            },
            Rule::Disjunction(parts) => {
                write!(f, "[ ")?;
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        write!(f, " OR ")?;
                    }
                    write!(f, "{part}")?;
                }
                if parts.is_empty() {
                    // keep `[ ]` readable for the empty disjunction
                    write!(f, "]")
                } else {
                    write!(f, " ]")
                }
            },
        }
    }
}


/// Render the positive-class rule of a classifier as a string.
/// Shorthand for `Rule::from_classifier(classifier).to_string()`.
#[inline]
pub fn extract_rules(classifier: &DecisionTreeClassifier) -> String {
    Rule::from_classifier(classifier).to_string()
}
