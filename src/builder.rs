//! The ID3 induction algorithm.
use log::debug;

use crate::classifier::DecisionTreeClassifier;
use crate::criterion;
use crate::errors::TreeError;
use crate::node::Node;
use crate::record::{Label, Record};

use std::collections::BTreeSet;
use std::fmt;


/// How a leaf decides its label when the candidate attributes are
/// exhausted and the remaining records split exactly 50/50.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Predict [`Label::Positive`] on an exact tie.
    #[default]
    PreferPositive,
    /// Predict [`Label::Negative`] on an exact tie.
    PreferNegative,
}


impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PreferPositive => "prefer positive",
            Self::PreferNegative => "prefer negative",
        };
        write!(f, "{name}")
    }
}


/// The ID3 decision tree algorithm.
/// Given a set of labeled records over categorical attributes,
/// [`DecisionTree`] induces a [`DecisionTreeClassifier`]
/// by recursively splitting on the attribute with maximal
/// information gain.
///
/// # Example
/// ```
/// use gainsplit::{DecisionTree, Label, Record, TieBreak};
///
/// let records = vec![
///     Record::from_pairs(Label::Negative, [("odor", "Foul")]),
///     Record::from_pairs(Label::Positive, [("odor", "Almond")]),
/// ];
///
/// let tree = DecisionTree::new()
///     .tie_break(TieBreak::PreferPositive)
///     .fit(&records)
///     .unwrap();
///
/// let query = Record::from_pairs(Label::Negative, [("odor", "Almond")]);
/// assert_eq!(tree.classify(query.values()), Label::Positive);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionTree {
    tie_break: TieBreak,
}


impl DecisionTree {
    /// Construct a new instance of [`DecisionTree`]
    /// with the default configuration.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }


    /// Set the majority tie-breaking policy.
    /// Default value is [`TieBreak::PreferPositive`].
    #[inline]
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }


    /// Induce a decision tree classifier from `records`.
    ///
    /// The candidate attributes are the union of the attribute
    /// names appearing in `records`,
    /// grouped by the earliest record carrying each one and
    /// sorted alphabetically within a record
    /// (a record stores its attributes in a sorted map,
    /// so the pair order given to [`Record::from_pairs`] is
    /// irrelevant).
    /// For a dataset whose records all carry the same attributes,
    /// this is simply the sorted attribute order of the first record.
    /// That order also resolves ties in information gain,
    /// so repeated calls on the same records build the same tree.
    ///
    /// Returns [`TreeError::InvalidInput`] if `records` is empty.
    pub fn fit(&self, records: &[Record])
        -> Result<DecisionTreeClassifier, TreeError>
    {
        if records.is_empty() {
            return Err(TreeError::InvalidInput(
                "cannot induce a tree from an empty record set".into()
            ));
        }

        let mut seen = BTreeSet::new();
        let mut candidates = Vec::new();
        for record in records {
            for attribute in record.values().keys() {
                if seen.insert(attribute) {
                    candidates.push(attribute.clone());
                }
            }
        }

        let indices = (0..records.len()).collect::<Vec<usize>>();
        let root = self.grow(records, indices, candidates);

        Ok(DecisionTreeClassifier::from(root))
    }


    /// Recursively grow a subtree for the subset of `records`
    /// selected by `indices`.
    /// `indices` is non-empty on every call:
    /// the root covers the whole record set and
    /// children are only grown for non-empty partitions.
    fn grow(
        &self,
        records:    &[Record],
        indices:    Vec<usize>,
        candidates: Vec<String>,
    ) -> Node
    {
        let parent_entropy = criterion::entropy_over(records, &indices);

        // A pure subset becomes a leaf with the unanimous label.
        if parent_entropy == 0f64 {
            let label = records[indices[0]].label();
            return Node::leaf(label);
        }

        // All attributes exhausted: majority vote.
        if candidates.is_empty() {
            return Node::leaf(self.majority(records, &indices));
        }

        let (attribute, gain) = criterion::best_split(
            records, &indices, parent_entropy, &candidates
        ).expect("candidate list is non-empty");

        let partitions = criterion::partition(records, &indices, attribute);

        // No record of this subset carries the attribute,
        // so splitting would leave a decision node without children.
        if partitions.is_empty() {
            return Node::leaf(self.majority(records, &indices));
        }

        debug!(
            "splitting {n} records on `{attribute}` (gain {gain:.4})",
            n = indices.len(),
        );

        // The chosen attribute is dropped from the candidates,
        // so no root-to-leaf path splits on an attribute twice.
        let remaining = candidates.iter()
            .filter(|candidate| *candidate != attribute)
            .cloned()
            .collect::<Vec<String>>();

        let attribute = attribute.to_string();
        let children = partitions.into_iter()
            .map(|(value, sub_indices)| {
                let child = self.grow(records, sub_indices, remaining.clone());
                (value.to_string(), child)
            })
            .collect();

        Node::decision(attribute, children)
    }


    /// The majority label of the subset of `records`
    /// selected by `indices`,
    /// resolving an exact tie by the configured policy.
    fn majority(&self, records: &[Record], indices: &[usize]) -> Label {
        let positives = indices.iter()
            .filter(|&&i| records[i].label().is_positive())
            .count();
        let negatives = indices.len() - positives;

        debug!(
            "majority leaf over {n} records \
            ({positives} positive / {negatives} negative)",
            n = indices.len(),
        );

        if positives > negatives {
            Label::Positive
        } else if negatives > positives {
            Label::Negative
        } else {
            match self.tie_break {
                TieBreak::PreferPositive => Label::Positive,
                TieBreak::PreferNegative => Label::Negative,
            }
        }
    }
}


/// Induce a decision tree classifier from `records`
/// with the default configuration.
/// Shorthand for `DecisionTree::new().fit(records)`.
#[inline]
pub fn build_tree(records: &[Record])
    -> Result<DecisionTreeClassifier, TreeError>
{
    DecisionTree::new().fit(records)
}
