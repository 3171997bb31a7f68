use crate::error::ShapeMismatchError;
use crate::overlap::overlap;
use ndarray::prelude::*;
use num_traits::ToPrimitive;

/// The intersection-over-union (Jaccard index) of the two class memberships.
/// When the class is absent from both maps the union is zero and the result
/// is `NaN`.
pub fn intersection_over_union<D>(
	gt: ArrayView<'_, usize, D>,
	pd: ArrayView<'_, usize, D>,
	class: usize,
) -> Result<f64, ShapeMismatchError>
where
	D: Dimension,
{
	let overlap = overlap(gt, pd, class)?;
	Ok(overlap.intersection.to_f64().unwrap() / overlap.union.to_f64().unwrap())
}

#[test]
fn test() {
	let gt = arr2(&[[1usize, 0], [0, 1]]);
	let pd = arr2(&[[1usize, 0], [0, 1]]);
	assert_eq!(intersection_over_union(gt.view(), pd.view(), 1).unwrap(), 1.0);
	let pd = arr2(&[[0usize, 1], [1, 0]]);
	assert_eq!(intersection_over_union(gt.view(), pd.view(), 1).unwrap(), 0.0);
}

#[test]
fn test_class_absent_from_both() {
	let gt = arr2(&[[1usize, 0], [0, 1]]);
	let pd = arr2(&[[1usize, 0], [0, 1]]);
	assert!(intersection_over_union(gt.view(), pd.view(), 3)
		.unwrap()
		.is_nan());
}

#[test]
fn test_shape_mismatch() {
	let gt = Array2::<usize>::zeros((4, 4));
	let pd = Array2::<usize>::zeros((4, 5));
	assert!(intersection_over_union(gt.view(), pd.view(), 0).is_err());
}
