//! Entropy and information gain over categorical record sets.
use crate::errors::TreeError;
use crate::record::Record;

use std::collections::BTreeMap;


/// Binary entropy of the label distribution of `records`.
///
/// Returns `0.0` for a pure set and `1.0` when exactly half of
/// the records are positive.
/// An empty record set has no label distribution,
/// so this function returns [`TreeError::InvalidInput`] for it.
#[inline]
pub fn entropy(records: &[Record]) -> Result<f64, TreeError> {
    if records.is_empty() {
        return Err(TreeError::InvalidInput(
            "cannot compute entropy of an empty record set".into()
        ));
    }
    let indices = (0..records.len()).collect::<Vec<_>>();
    Ok(entropy_over(records, &indices))
}


/// Entropy of the subset of `records` selected by `indices`.
/// The caller guarantees that `indices` is non-empty.
#[inline]
pub(crate) fn entropy_over(records: &[Record], indices: &[usize]) -> f64 {
    let positives = indices.iter()
        .filter(|&&i| records[i].label().is_positive())
        .count();
    binary_entropy(positives, indices.len())
}


/// The standard binary entropy `-p log2(p) - (1-p) log2(1-p)`
/// with `p = positives / total`.
#[inline]
fn binary_entropy(positives: usize, total: usize) -> f64 {
    let p = positives as f64 / total as f64;
    if p <= 0f64 || p >= 1f64 {
        return 0f64;
    }
    -p * p.log2() - (1f64 - p) * (1f64 - p).log2()
}


/// Information gain of every candidate attribute on `records`,
/// in candidate order.
/// `parent_entropy` is the entropy of `records` itself.
///
/// See [`best_split`](crate::criterion) for how ties are resolved
/// during induction.
#[inline]
pub fn information_gains<'a>(
    records:        &[Record],
    parent_entropy: f64,
    candidates:     &'a [String],
) -> Vec<(&'a str, f64)>
{
    let indices = (0..records.len()).collect::<Vec<_>>();
    gains_over(records, &indices, parent_entropy, candidates)
}


/// Information gain of every candidate on the subset of `records`
/// selected by `indices`.
pub(crate) fn gains_over<'a>(
    records:        &[Record],
    indices:        &[usize],
    parent_entropy: f64,
    candidates:     &'a [String],
) -> Vec<(&'a str, f64)>
{
    candidates.iter()
        .map(|attribute| {
            let gain = gain_of(records, indices, parent_entropy, attribute);
            (attribute.as_str(), gain)
        })
        .collect()
}


/// The best `(attribute, gain)` pair among `candidates`,
/// or `None` if `candidates` is empty.
/// The first candidate attaining the maximal gain wins,
/// which keeps the induced tree shape deterministic.
pub(crate) fn best_split<'a>(
    records:        &[Record],
    indices:        &[usize],
    parent_entropy: f64,
    candidates:     &'a [String],
) -> Option<(&'a str, f64)>
{
    let mut best: Option<(&str, f64)> = None;
    for (attribute, gain) in
        gains_over(records, indices, parent_entropy, candidates)
    {
        match best {
            Some((_, best_gain)) if gain <= best_gain => {},
            _ => { best = Some((attribute, gain)); },
        }
    }
    best
}


/// Gain of a single attribute:
/// parent entropy minus the size-weighted entropy of each
/// value partition (the *remainder*).
/// Records that do not carry the attribute fall into no partition
/// and contribute nothing to the remainder.
/// An attribute observed on no record of the subset gains nothing.
fn gain_of(
    records:        &[Record],
    indices:        &[usize],
    parent_entropy: f64,
    attribute:      &str,
) -> f64
{
    let mut counts: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for &i in indices {
        if let Some(value) = records[i].value(attribute) {
            let entry = counts.entry(value).or_insert((0, 0));
            if records[i].label().is_positive() {
                entry.0 += 1;
            }
            entry.1 += 1;
        }
    }

    if counts.is_empty() {
        return 0f64;
    }

    let total = indices.len() as f64;
    let remainder = counts.values()
        .map(|&(positives, size)| {
            (size as f64 / total) * binary_entropy(positives, size)
        })
        .sum::<f64>();

    parent_entropy - remainder
}


/// Partition the subset of `records` selected by `indices`
/// by the observed values of `attribute`.
/// Every partition is non-empty by construction;
/// records without the attribute appear in no partition.
pub(crate) fn partition<'a>(
    records:   &'a [Record],
    indices:   &[usize],
    attribute: &str,
) -> BTreeMap<&'a str, Vec<usize>>
{
    let mut partitions: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for &i in indices {
        if let Some(value) = records[i].value(attribute) {
            partitions.entry(value).or_default().push(i);
        }
    }
    partitions
}
