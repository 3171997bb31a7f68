use crate::check_shapes;
use crate::error::ShapeMismatchError;
use itertools::izip;
use ndarray::prelude::*;

/// The one-vs-rest binary confusion cells for a target class. The four cells
/// always sum to the total number of elements in the label maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfusionMatrix {
	pub true_positives: u64,
	pub false_positives: u64,
	pub false_negatives: u64,
	pub true_negatives: u64,
}

impl ConfusionMatrix {
	/// The total number of elements in the label maps the cells were
	/// computed from.
	pub fn total(&self) -> u64 {
		self.true_positives + self.false_positives + self.false_negatives + self.true_negatives
	}
}

/// Computes the one-vs-rest confusion cells for `class` in a single pass over
/// both label maps. Its `true_positives` equals the `intersection` reported by
/// the set overlap engine for the same inputs.
pub fn confusion<D>(
	gt: ArrayView<'_, usize, D>,
	pd: ArrayView<'_, usize, D>,
	class: usize,
) -> Result<ConfusionMatrix, ShapeMismatchError>
where
	D: Dimension,
{
	check_shapes(&gt, &pd)?;
	let mut matrix = ConfusionMatrix::default();
	for (gt_label, pd_label) in izip!(gt.iter(), pd.iter()) {
		match (*gt_label == class, *pd_label == class) {
			(true, true) => matrix.true_positives += 1,
			(false, true) => matrix.false_positives += 1,
			(true, false) => matrix.false_negatives += 1,
			(false, false) => matrix.true_negatives += 1,
		}
	}
	Ok(matrix)
}

#[test]
fn test() {
	let gt = arr1(&[0usize, 0, 1, 1]);
	let pd = arr1(&[0usize, 0, 1, 0]);
	let matrix = confusion(gt.view(), pd.view(), 1).unwrap();
	insta::assert_debug_snapshot!(matrix, @r###"
 ConfusionMatrix {
     true_positives: 1,
     false_positives: 0,
     false_negatives: 1,
     true_negatives: 2,
 }
 "###);
}

#[test]
fn test_cells_sum_to_total() {
	use rand::{Rng, SeedableRng};
	let mut rng = rand::rngs::StdRng::seed_from_u64(1);
	let gt = Array2::from_shape_fn((32, 32), |_| rng.gen_range(0, 5usize));
	let pd = Array2::from_shape_fn((32, 32), |_| rng.gen_range(0, 5usize));
	for class in 0..5 {
		let matrix = confusion(gt.view(), pd.view(), class).unwrap();
		assert_eq!(matrix.total(), 32 * 32);
	}
}

#[test]
fn test_true_positives_equal_intersection() {
	use rand::{Rng, SeedableRng};
	let mut rng = rand::rngs::StdRng::seed_from_u64(2);
	let gt = Array2::from_shape_fn((32, 32), |_| rng.gen_range(0, 5usize));
	let pd = Array2::from_shape_fn((32, 32), |_| rng.gen_range(0, 5usize));
	for class in 0..5 {
		let matrix = confusion(gt.view(), pd.view(), class).unwrap();
		let overlap = crate::overlap::overlap(gt.view(), pd.view(), class).unwrap();
		assert_eq!(matrix.true_positives, overlap.intersection);
	}
}

#[test]
fn test_shape_mismatch() {
	let gt = Array2::<usize>::zeros((4, 4));
	let pd = Array2::<usize>::zeros((4, 5));
	let error = confusion(gt.view(), pd.view(), 0).unwrap_err();
	assert_eq!(
		error,
		ShapeMismatchError {
			gt: vec![4, 4],
			pd: vec![4, 5],
		}
	);
}
