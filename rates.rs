use crate::confusion::confusion;
use crate::error::ShapeMismatchError;
use ndarray::prelude::*;
use num_traits::ToPrimitive;

/// The sensitivity (true positive rate) for the class, `TP / (TP + FN)`.
/// `NaN` when the class is absent from the ground truth.
pub fn sensitivity<D>(
	gt: ArrayView<'_, usize, D>,
	pd: ArrayView<'_, usize, D>,
	class: usize,
) -> Result<f64, ShapeMismatchError>
where
	D: Dimension,
{
	let matrix = confusion(gt, pd, class)?;
	Ok(matrix.true_positives.to_f64().unwrap()
		/ (matrix.true_positives + matrix.false_negatives)
			.to_f64()
			.unwrap())
}

/// The specificity (true negative rate) for the class, `TN / (TN + FP)`.
/// `NaN` when the class covers the entire ground truth.
pub fn specificity<D>(
	gt: ArrayView<'_, usize, D>,
	pd: ArrayView<'_, usize, D>,
	class: usize,
) -> Result<f64, ShapeMismatchError>
where
	D: Dimension,
{
	let matrix = confusion(gt, pd, class)?;
	Ok(matrix.true_negatives.to_f64().unwrap()
		/ (matrix.true_negatives + matrix.false_positives)
			.to_f64()
			.unwrap())
}

/// The precision for the class, `TP / (TP + FP)`. `NaN` when the class is
/// absent from the prediction.
pub fn precision<D>(
	gt: ArrayView<'_, usize, D>,
	pd: ArrayView<'_, usize, D>,
	class: usize,
) -> Result<f64, ShapeMismatchError>
where
	D: Dimension,
{
	let matrix = confusion(gt, pd, class)?;
	Ok(matrix.true_positives.to_f64().unwrap()
		/ (matrix.true_positives + matrix.false_positives)
			.to_f64()
			.unwrap())
}

/// The Dice similarity coefficient, `2TP / (2TP + FP + FN)`, the harmonic
/// mean of precision and sensitivity. `NaN` when the class is absent from
/// both maps.
pub fn dice<D>(
	gt: ArrayView<'_, usize, D>,
	pd: ArrayView<'_, usize, D>,
	class: usize,
) -> Result<f64, ShapeMismatchError>
where
	D: Dimension,
{
	let matrix = confusion(gt, pd, class)?;
	Ok((2 * matrix.true_positives).to_f64().unwrap()
		/ (2 * matrix.true_positives + matrix.false_positives + matrix.false_negatives)
			.to_f64()
			.unwrap())
}

#[test]
fn test() {
	let gt = arr1(&[0usize, 0, 1, 1]);
	let pd = arr1(&[0usize, 0, 1, 0]);
	assert_eq!(sensitivity(gt.view(), pd.view(), 1).unwrap(), 0.5);
	assert_eq!(specificity(gt.view(), pd.view(), 1).unwrap(), 1.0);
	assert_eq!(precision(gt.view(), pd.view(), 1).unwrap(), 1.0);
	assert_eq!(dice(gt.view(), pd.view(), 1).unwrap(), 2.0 / 3.0);
}

#[test]
fn test_dice_relates_to_iou() {
	use rand::{Rng, SeedableRng};
	let mut rng = rand::rngs::StdRng::seed_from_u64(3);
	let gt = Array2::from_shape_fn((32, 32), |_| rng.gen_range(0, 5usize));
	let pd = Array2::from_shape_fn((32, 32), |_| rng.gen_range(0, 5usize));
	for class in 0..5 {
		let dice = dice(gt.view(), pd.view(), class).unwrap();
		let iou = crate::iou::intersection_over_union(gt.view(), pd.view(), class).unwrap();
		assert!((dice - 2.0 * iou / (1.0 + iou)).abs() < 1e-12);
	}
}

#[test]
fn test_balanced_accuracy_is_mean_of_rates() {
	use rand::{Rng, SeedableRng};
	let mut rng = rand::rngs::StdRng::seed_from_u64(4);
	let gt = Array2::from_shape_fn((32, 32), |_| rng.gen_range(0, 5usize));
	let pd = Array2::from_shape_fn((32, 32), |_| rng.gen_range(0, 5usize));
	for class in 0..5 {
		let sensitivity = sensitivity(gt.view(), pd.view(), class).unwrap();
		let specificity = specificity(gt.view(), pd.view(), class).unwrap();
		let balanced = crate::accuracy::balanced_accuracy(gt.view(), pd.view(), class).unwrap();
		assert_eq!(balanced, (sensitivity + specificity) / 2.0);
	}
}

#[test]
fn test_degenerate_classes() {
	let gt = arr1(&[0usize, 0, 0, 0]);
	let pd = arr1(&[0usize, 0, 0, 0]);
	assert!(sensitivity(gt.view(), pd.view(), 1).unwrap().is_nan());
	assert!(precision(gt.view(), pd.view(), 1).unwrap().is_nan());
	assert!(dice(gt.view(), pd.view(), 1).unwrap().is_nan());
	assert!(specificity(gt.view(), pd.view(), 0).unwrap().is_nan());
}
