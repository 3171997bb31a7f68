/*!
This crate computes quality metrics for segmentation results. A metric compares
a ground truth label map against a predicted label map of the same shape, both
dense N-dimensional arrays of non-negative integer class labels, and scores one
target class at a time (one-vs-rest). Every metric is a pure function with the
same signature, and each is also registered under its canonical name and common
abbreviations in a read-only registry, so interchangeable metrics can be
dispatched uniformly:

```
use ndarray::prelude::*;

let gt = arr2(&[[1usize, 0], [0, 1]]);
let pd = arr2(&[[1usize, 0], [0, 1]]);
let accuracy = segeval::lookup("ACC").unwrap();
let score = accuracy(gt.view().into_dyn(), pd.view().into_dyn(), 1).unwrap();
assert_eq!(score, 1.0);
```

Structurally invalid inputs (differing shapes, an unregistered metric name)
return errors. Numerically degenerate but structurally valid inputs (a class
absent from both maps, fewer than two elements for pair counting) return `NaN`,
a documented sentinel for a zero denominator, so callers can detect degenerate
classes without treating them as fatal.
*/

#![allow(clippy::tabs_in_doc_comments)]

mod accuracy;
mod confusion;
mod error;
mod iou;
mod overlap;
mod rand_index;
mod rates;
mod registry;

pub use self::accuracy::{accuracy, accuracy_from_confusion, balanced_accuracy};
pub use self::confusion::{confusion, ConfusionMatrix};
pub use self::error::{ShapeMismatchError, UnknownMetricError};
pub use self::iou::intersection_over_union;
pub use self::overlap::{overlap, Overlap};
pub use self::rand_index::{adjusted_rand_index, rand_index};
pub use self::rates::{dice, precision, sensitivity, specificity};
pub use self::registry::{lookup, metric_names, MetricFn};

use ndarray::prelude::*;

/// Both engines and every metric require the two label maps to share a shape.
pub(crate) fn check_shapes<D>(
	gt: &ArrayView<'_, usize, D>,
	pd: &ArrayView<'_, usize, D>,
) -> Result<(), ShapeMismatchError>
where
	D: Dimension,
{
	if gt.shape() == pd.shape() {
		Ok(())
	} else {
		Err(ShapeMismatchError {
			gt: gt.shape().to_vec(),
			pd: pd.shape().to_vec(),
		})
	}
}
