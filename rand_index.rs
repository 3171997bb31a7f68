use crate::confusion::{confusion, ConfusionMatrix};
use crate::error::ShapeMismatchError;
use ndarray::prelude::*;
use num_traits::ToPrimitive;

/// The Rand index is the fraction of unordered element pairs on which the two
/// one-vs-rest partitions agree, i.e. pairs that are either together in both
/// or separated in both. With fewer than two elements no pair exists and the
/// result is `NaN`.
pub fn rand_index<D>(
	gt: ArrayView<'_, usize, D>,
	pd: ArrayView<'_, usize, D>,
	class: usize,
) -> Result<f64, ShapeMismatchError>
where
	D: Dimension,
{
	let matrix = confusion(gt, pd, class)?;
	let PairCounts {
		total_pairs,
		index,
		gt_pairs,
		pd_pairs,
	} = pair_counts(&matrix);
	let agreements = total_pairs + 2.0 * index - gt_pairs - pd_pairs;
	Ok(agreements / total_pairs)
}

/// The Rand index corrected for chance agreement,
/// `(index - expected) / (max - expected)` over the pair counts of the 2x2
/// contingency table. When the correction collapses (`max == expected`, e.g.
/// only one class present in both maps) the result is `NaN`.
pub fn adjusted_rand_index<D>(
	gt: ArrayView<'_, usize, D>,
	pd: ArrayView<'_, usize, D>,
	class: usize,
) -> Result<f64, ShapeMismatchError>
where
	D: Dimension,
{
	let matrix = confusion(gt, pd, class)?;
	let PairCounts {
		total_pairs,
		index,
		gt_pairs,
		pd_pairs,
	} = pair_counts(&matrix);
	let expected = gt_pairs * pd_pairs / total_pairs;
	let max = (gt_pairs + pd_pairs) / 2.0;
	Ok((index - expected) / (max - expected))
}

struct PairCounts {
	total_pairs: f64,
	index: f64,
	gt_pairs: f64,
	pd_pairs: f64,
}

/// Pair counts over the 2x2 contingency table whose cells are the confusion
/// cells: rows are ground truth membership, columns are prediction
/// membership. Computed in `f64` so large maps cannot overflow the
/// intermediate products.
fn pair_counts(matrix: &ConfusionMatrix) -> PairCounts {
	let total_pairs = comb2(matrix.total());
	let index = comb2(matrix.true_positives)
		+ comb2(matrix.false_positives)
		+ comb2(matrix.false_negatives)
		+ comb2(matrix.true_negatives);
	let gt_pairs = comb2(matrix.true_positives + matrix.false_negatives)
		+ comb2(matrix.false_positives + matrix.true_negatives);
	let pd_pairs = comb2(matrix.true_positives + matrix.false_positives)
		+ comb2(matrix.false_negatives + matrix.true_negatives);
	PairCounts {
		total_pairs,
		index,
		gt_pairs,
		pd_pairs,
	}
}

/// The number of unordered pairs among `count` elements.
fn comb2(count: u64) -> f64 {
	let count = count.to_f64().unwrap();
	count * (count - 1.0) / 2.0
}

#[test]
fn test() {
	let gt = arr2(&[[1usize, 0], [0, 1]]);
	let pd = arr2(&[[1usize, 0], [0, 1]]);
	assert_eq!(rand_index(gt.view(), pd.view(), 1).unwrap(), 1.0);
	assert_eq!(adjusted_rand_index(gt.view(), pd.view(), 1).unwrap(), 1.0);
}

#[test]
fn test_partial_agreement() {
	let gt = arr1(&[0usize, 0, 1, 1]);
	let pd = arr1(&[0usize, 0, 1, 0]);
	// 3 of the 6 pairs agree on co-membership of class 1
	assert_eq!(rand_index(gt.view(), pd.view(), 1).unwrap(), 0.5);
	assert_eq!(adjusted_rand_index(gt.view(), pd.view(), 1).unwrap(), 0.0);
}

#[test]
fn test_single_class() {
	let gt = arr1(&[0usize, 0, 0, 0]);
	let pd = arr1(&[0usize, 0, 0, 0]);
	assert_eq!(rand_index(gt.view(), pd.view(), 0).unwrap(), 1.0);
	assert!(adjusted_rand_index(gt.view(), pd.view(), 0)
		.unwrap()
		.is_nan());
}

#[test]
fn test_fewer_than_two_elements() {
	let gt = arr1(&[0usize]);
	let pd = arr1(&[0usize]);
	assert!(rand_index(gt.view(), pd.view(), 0).unwrap().is_nan());
}
