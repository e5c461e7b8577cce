#![warn(missing_docs)]

//! ID3 decision trees over categorical data.
//!
//! This crate induces a binary classification tree from labeled
//! records with discrete attributes,
//! classifies new records with it,
//! and renders the learned logic as a human-readable boolean rule.
//! At every node the attribute with maximal information gain is
//! chosen greedily, as in the classic ID3 algorithm.
//!
//! Dataset parsing and result display are left to the caller:
//! the crate consumes in-memory [`Record`]s and
//! produces a [`DecisionTreeClassifier`] and a [`Rule`].
//!
//! # Example
//! ```
//! use gainsplit::{build_tree, extract_rules, Label, Record};
//!
//! let records = vec![
//!     Record::from_pairs(Label::Negative, [("odor", "Foul")]),
//!     Record::from_pairs(Label::Positive, [("odor", "Almond"), ("color", "White")]),
//!     Record::from_pairs(Label::Positive, [("odor", "Almond"), ("color", "Brown")]),
//!     Record::from_pairs(Label::Negative, [("odor", "None"), ("size", "Small")]),
//! ];
//!
//! let tree = build_tree(&records).unwrap();
//!
//! let query = Record::from_pairs(Label::Negative, [("odor", "Almond")]);
//! assert_eq!(tree.classify(query.values()), Label::Positive);
//!
//! assert_eq!(extract_rules(&tree), "[ (odor = Almond) ]");
//! ```

pub mod errors;
pub mod record;
pub mod criterion;
pub mod node;
pub mod builder;
pub mod classifier;
pub mod rule;

pub use errors::TreeError;
pub use record::{AttributeMap, Label, Record};
pub use criterion::{entropy, information_gains};
pub use node::Node;
pub use builder::{build_tree, DecisionTree, TieBreak};
pub use classifier::DecisionTreeClassifier;
pub use rule::{extract_rules, Rule};
