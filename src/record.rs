//! Labeled records over categorical attributes.
use serde::{Serialize, Deserialize};

use std::collections::BTreeMap;
use std::fmt;


/// Attribute name to attribute value.
/// Classification accepts a bare map,
/// so that unlabeled records can be queried against a tree.
pub type AttributeMap = BTreeMap<String, String>;


/// The binary target of a record.
/// The dataset loader maps its two-valued encoding
/// (e.g., `"Yes"`/`"No"`) onto this type at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    /// The positive class (e.g., an edible mushroom).
    Positive,
    /// The negative class.
    Negative,
}


impl Label {
    /// Returns `true` if `self` is [`Label::Positive`].
    #[inline]
    pub fn is_positive(&self) -> bool {
        matches!(self, Label::Positive)
    }
}


impl From<bool> for Label {
    #[inline]
    fn from(positive: bool) -> Self {
        if positive { Label::Positive } else { Label::Negative }
    }
}


impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Label::Positive => "positive",
            Label::Negative => "negative",
        };
        write!(f, "{name}")
    }
}


/// A single training example.
/// A record owns its label and a map
/// from attribute name to the observed categorical value.
/// Records are immutable once constructed;
/// tree induction only ever borrows them.
///
/// A record does not need to carry every attribute
/// appearing elsewhere in the dataset.
/// Lookup of an absent attribute returns `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    label: Label,
    values: AttributeMap,
}


impl Record {
    /// Construct a record from a label and `(attribute, value)` pairs.
    ///
    /// # Example
    /// ```
    /// use gainsplit::{Label, Record};
    /// let record = Record::from_pairs(
    ///     Label::Positive,
    ///     [("odor", "Almond"), ("color", "White")],
    /// );
    /// assert_eq!(record.value("odor"), Some("Almond"));
    /// assert_eq!(record.value("size"), None);
    /// ```
    #[inline]
    pub fn from_pairs<I, K, V>(label: Label, pairs: I) -> Self
        where I: IntoIterator<Item = (K, V)>,
              K: Into<String>,
              V: Into<String>,
    {
        let values = pairs.into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect::<AttributeMap>();
        Self { label, values }
    }


    /// The label assigned to this record.
    #[inline]
    pub fn label(&self) -> Label {
        self.label
    }


    /// The value observed for `attribute`, if any.
    #[inline]
    pub fn value(&self, attribute: &str) -> Option<&str> {
        self.values.get(attribute).map(String::as_str)
    }


    /// The full attribute map of this record.
    #[inline]
    pub fn values(&self) -> &AttributeMap {
        &self.values
    }
}
