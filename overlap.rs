use crate::check_shapes;
use crate::error::ShapeMismatchError;
use itertools::izip;
use ndarray::prelude::*;

/// The per-class overlap counts between a ground truth label map and a
/// prediction label map, where an element is a member of the class iff its
/// label equals the target class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overlap {
	pub intersection: u64,
	pub union: u64,
	pub ground_truth_positives: u64,
	pub prediction_positives: u64,
}

/// Computes one-vs-rest overlap counts for `class` in a single pass over both
/// label maps. A class that appears in neither map produces all-zero counts,
/// which is not an error.
pub fn overlap<D>(
	gt: ArrayView<'_, usize, D>,
	pd: ArrayView<'_, usize, D>,
	class: usize,
) -> Result<Overlap, ShapeMismatchError>
where
	D: Dimension,
{
	check_shapes(&gt, &pd)?;
	let mut overlap = Overlap::default();
	for (gt_label, pd_label) in izip!(gt.iter(), pd.iter()) {
		let in_gt = *gt_label == class;
		let in_pd = *pd_label == class;
		if in_gt && in_pd {
			overlap.intersection += 1;
		}
		if in_gt || in_pd {
			overlap.union += 1;
		}
		if in_gt {
			overlap.ground_truth_positives += 1;
		}
		if in_pd {
			overlap.prediction_positives += 1;
		}
	}
	Ok(overlap)
}

#[test]
fn test() {
	let gt = arr2(&[[1usize, 0], [0, 1]]);
	let pd = arr2(&[[1usize, 0], [0, 1]]);
	let overlap = overlap(gt.view(), pd.view(), 1).unwrap();
	assert_eq!(
		overlap,
		Overlap {
			intersection: 2,
			union: 2,
			ground_truth_positives: 2,
			prediction_positives: 2,
		}
	);
}

#[test]
fn test_class_absent() {
	let gt = arr2(&[[1usize, 0], [0, 1]]);
	let pd = arr2(&[[1usize, 0], [0, 1]]);
	let overlap = overlap(gt.view(), pd.view(), 7).unwrap();
	assert_eq!(overlap, Overlap::default());
}

#[test]
fn test_shape_mismatch() {
	let gt = Array2::<usize>::zeros((4, 4));
	let pd = Array2::<usize>::zeros((4, 5));
	let error = overlap(gt.view(), pd.view(), 0).unwrap_err();
	assert_eq!(
		error,
		ShapeMismatchError {
			gt: vec![4, 4],
			pd: vec![4, 5],
		}
	);
}

#[test]
fn test_count_bounds() {
	use rand::{Rng, SeedableRng};
	let mut rng = rand::rngs::StdRng::seed_from_u64(1);
	let gt = Array2::from_shape_fn((32, 32), |_| rng.gen_range(0, 5usize));
	let pd = Array2::from_shape_fn((32, 32), |_| rng.gen_range(0, 5usize));
	for class in 0..5 {
		let overlap = overlap(gt.view(), pd.view(), class).unwrap();
		assert!(
			overlap.intersection
				<= overlap
					.ground_truth_positives
					.min(overlap.prediction_positives)
		);
		assert!(overlap.union <= 32 * 32);
		assert!(overlap.union >= overlap.ground_truth_positives.max(overlap.prediction_positives));
	}
}
