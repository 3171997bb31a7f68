use crate::accuracy::{accuracy, balanced_accuracy};
use crate::error::{ShapeMismatchError, UnknownMetricError};
use crate::iou::intersection_over_union;
use crate::rand_index::{adjusted_rand_index, rand_index};
use crate::rates::{dice, precision, sensitivity, specificity};
use fnv::FnvHashMap;
use ndarray::prelude::*;
use once_cell::sync::Lazy;

/// The signature every registered metric shares: two equal-shape label maps
/// and a target class in, one scalar out. The registry stores dynamic-dimension
/// instantiations of the generic metric functions, so callers with
/// statically-dimensioned arrays use `.view().into_dyn()`.
pub type MetricFn = for<'a, 'b> fn(
	ArrayViewD<'a, usize>,
	ArrayViewD<'b, usize>,
	usize,
) -> Result<f64, ShapeMismatchError>;

static METRICS: Lazy<FnvHashMap<&'static str, MetricFn>> = Lazy::new(|| {
	let mut metrics = FnvHashMap::default();
	metrics.insert("ACC", accuracy as MetricFn);
	metrics.insert("Accuracy", accuracy as MetricFn);
	metrics.insert("BACC", balanced_accuracy as MetricFn);
	metrics.insert("BalancedAccuracy", balanced_accuracy as MetricFn);
	metrics.insert("RI", rand_index as MetricFn);
	metrics.insert("RandIndex", rand_index as MetricFn);
	metrics.insert("ARI", adjusted_rand_index as MetricFn);
	metrics.insert("AdjustedRandIndex", adjusted_rand_index as MetricFn);
	metrics.insert("IoU", intersection_over_union as MetricFn);
	metrics.insert("Jaccard", intersection_over_union as MetricFn);
	metrics.insert("IntersectionOverUnion", intersection_over_union as MetricFn);
	metrics.insert("SENS", sensitivity as MetricFn);
	metrics.insert("Sensitivity", sensitivity as MetricFn);
	metrics.insert("SPEC", specificity as MetricFn);
	metrics.insert("Specificity", specificity as MetricFn);
	metrics.insert("PREC", precision as MetricFn);
	metrics.insert("Precision", precision as MetricFn);
	metrics.insert("DSC", dice as MetricFn);
	metrics.insert("Dice", dice as MetricFn);
	metrics.insert("DiceSimilarityCoefficient", dice as MetricFn);
	metrics
});

/// Resolves a metric by exact, case-sensitive name. Both the canonical names
/// and their common abbreviations are registered.
pub fn lookup(name: &str) -> Result<MetricFn, UnknownMetricError> {
	METRICS
		.get(name)
		.copied()
		.ok_or_else(|| UnknownMetricError {
			name: name.to_owned(),
		})
}

/// All registered metric names, sorted.
pub fn metric_names() -> Vec<&'static str> {
	let mut names: Vec<_> = METRICS.keys().copied().collect();
	names.sort_unstable();
	names
}

#[test]
fn test() {
	let gt = arr2(&[[1usize, 0], [0, 1]]).into_dyn();
	let pd = arr2(&[[1usize, 0], [0, 1]]).into_dyn();
	let metric = lookup("ACC").unwrap();
	assert_eq!(metric(gt.view(), pd.view(), 1).unwrap(), 1.0);
	let metric = lookup("IoU").unwrap();
	assert_eq!(metric(gt.view(), pd.view(), 1).unwrap(), 1.0);
	let metric = lookup("RI").unwrap();
	assert_eq!(metric(gt.view(), pd.view(), 1).unwrap(), 1.0);
}

#[test]
fn test_aliases_agree() {
	use rand::{Rng, SeedableRng};
	let mut rng = rand::rngs::StdRng::seed_from_u64(5);
	let gt = Array2::from_shape_fn((32, 32), |_| rng.gen_range(0, 5usize)).into_dyn();
	let pd = Array2::from_shape_fn((32, 32), |_| rng.gen_range(0, 5usize)).into_dyn();
	let aliases = [
		("ACC", "Accuracy"),
		("BACC", "BalancedAccuracy"),
		("RI", "RandIndex"),
		("ARI", "AdjustedRandIndex"),
		("IoU", "IntersectionOverUnion"),
		("SENS", "Sensitivity"),
		("SPEC", "Specificity"),
		("PREC", "Precision"),
		("DSC", "Dice"),
	];
	for (abbreviation, name) in aliases.iter() {
		let via_abbreviation = lookup(abbreviation).unwrap()(gt.view(), pd.view(), 1).unwrap();
		let via_name = lookup(name).unwrap()(gt.view(), pd.view(), 1).unwrap();
		assert_eq!(via_abbreviation, via_name);
	}
}

#[test]
fn test_unknown_metric() {
	let error = lookup("NotAMetric").unwrap_err();
	assert_eq!(
		error,
		UnknownMetricError {
			name: "NotAMetric".to_owned(),
		}
	);
}

#[test]
fn test_every_metric_checks_shapes() {
	let gt = ArrayD::<usize>::zeros(vec![4, 4]);
	let pd = ArrayD::<usize>::zeros(vec![4, 5]);
	for name in metric_names() {
		let metric = lookup(name).unwrap();
		assert!(metric(gt.view(), pd.view(), 0).is_err());
	}
}

#[test]
fn test_metric_names() {
	assert_eq!(
		metric_names(),
		vec![
			"ACC",
			"ARI",
			"Accuracy",
			"AdjustedRandIndex",
			"BACC",
			"BalancedAccuracy",
			"DSC",
			"Dice",
			"DiceSimilarityCoefficient",
			"IntersectionOverUnion",
			"IoU",
			"Jaccard",
			"PREC",
			"Precision",
			"RI",
			"RandIndex",
			"SENS",
			"SPEC",
			"Sensitivity",
			"Specificity",
		]
	);
}
