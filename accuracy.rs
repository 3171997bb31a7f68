use crate::confusion::confusion;
use crate::error::ShapeMismatchError;
use crate::overlap::overlap;
use ndarray::prelude::*;
use num_traits::ToPrimitive;

/// The accuracy is the proportion of elements where the ground truth and the
/// prediction agree on membership of `class`, computed from set overlap
/// counts. This is the canonical form registered under `"ACC"`.
pub fn accuracy<D>(
	gt: ArrayView<'_, usize, D>,
	pd: ArrayView<'_, usize, D>,
	class: usize,
) -> Result<f64, ShapeMismatchError>
where
	D: Dimension,
{
	let total = gt.len().to_u64().unwrap();
	let overlap = overlap(gt, pd, class)?;
	let both_negative = total - overlap.union;
	Ok((overlap.intersection + both_negative).to_f64().unwrap() / total.to_f64().unwrap())
}

/// The accuracy computed from the confusion cells instead of the overlap
/// counts. Numerically identical to [`accuracy`] for every input.
pub fn accuracy_from_confusion<D>(
	gt: ArrayView<'_, usize, D>,
	pd: ArrayView<'_, usize, D>,
	class: usize,
) -> Result<f64, ShapeMismatchError>
where
	D: Dimension,
{
	let matrix = confusion(gt, pd, class)?;
	Ok((matrix.true_positives + matrix.true_negatives)
		.to_f64()
		.unwrap()
		/ matrix.total().to_f64().unwrap())
}

/// The balanced accuracy is the mean of sensitivity and specificity. If the
/// class covers none or all of the ground truth, the undefined term makes the
/// result `NaN` rather than being replaced by a default.
pub fn balanced_accuracy<D>(
	gt: ArrayView<'_, usize, D>,
	pd: ArrayView<'_, usize, D>,
	class: usize,
) -> Result<f64, ShapeMismatchError>
where
	D: Dimension,
{
	let matrix = confusion(gt, pd, class)?;
	let sensitivity = matrix.true_positives.to_f64().unwrap()
		/ (matrix.true_positives + matrix.false_negatives)
			.to_f64()
			.unwrap();
	let specificity = matrix.true_negatives.to_f64().unwrap()
		/ (matrix.true_negatives + matrix.false_positives)
			.to_f64()
			.unwrap();
	Ok((sensitivity + specificity) / 2.0)
}

#[test]
fn test() {
	let gt = arr2(&[[1usize, 0], [0, 1]]);
	let pd = arr2(&[[1usize, 0], [0, 1]]);
	assert_eq!(accuracy(gt.view(), pd.view(), 1).unwrap(), 1.0);
	let pd = arr2(&[[0usize, 1], [1, 0]]);
	assert_eq!(accuracy(gt.view(), pd.view(), 1).unwrap(), 0.0);
}

#[test]
fn test_class_absent_from_both() {
	let gt = arr2(&[[1usize, 0], [0, 1]]);
	let pd = arr2(&[[1usize, 0], [0, 1]]);
	// both maps agree everywhere that class 3 is absent
	assert_eq!(accuracy(gt.view(), pd.view(), 3).unwrap(), 1.0);
}

#[test]
fn test_set_form_equals_confusion_form() {
	use rand::{Rng, SeedableRng};
	let mut rng = rand::rngs::StdRng::seed_from_u64(1);
	let gt = Array2::from_shape_fn((32, 32), |_| rng.gen_range(0, 5usize));
	let pd = Array2::from_shape_fn((32, 32), |_| rng.gen_range(0, 5usize));
	for class in 0..5 {
		let via_sets = accuracy(gt.view(), pd.view(), class).unwrap();
		let via_confusion = accuracy_from_confusion(gt.view(), pd.view(), class).unwrap();
		assert_eq!(via_sets, via_confusion);
		assert!((0.0..=1.0).contains(&via_sets));
	}
}

#[test]
fn test_purity() {
	use rand::{Rng, SeedableRng};
	let mut rng = rand::rngs::StdRng::seed_from_u64(2);
	let gt = Array2::from_shape_fn((32, 32), |_| rng.gen_range(0, 5usize));
	let pd = Array2::from_shape_fn((32, 32), |_| rng.gen_range(0, 5usize));
	let first = accuracy(gt.view(), pd.view(), 2).unwrap();
	let second = accuracy(gt.view(), pd.view(), 2).unwrap();
	assert_eq!(first, second);
}

#[test]
fn test_balanced_accuracy() {
	let gt = arr1(&[0usize, 0, 1, 1]);
	let pd = arr1(&[0usize, 0, 1, 0]);
	// sensitivity 1/2, specificity 2/2
	assert_eq!(balanced_accuracy(gt.view(), pd.view(), 1).unwrap(), 0.75);
}

#[test]
fn test_balanced_accuracy_degenerate() {
	let gt = arr1(&[0usize, 0, 0, 0]);
	let pd = arr1(&[0usize, 1, 0, 1]);
	// no ground truth positives, so sensitivity is undefined
	assert!(balanced_accuracy(gt.view(), pd.view(), 1)
		.unwrap()
		.is_nan());
}
