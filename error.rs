use thiserror::Error;

/// Returned when the ground truth and prediction label maps do not have the
/// same shape. No metric is defined across differently shaped maps.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("shape mismatch: ground truth has shape {gt:?} but prediction has shape {pd:?}")]
pub struct ShapeMismatchError {
	pub gt: Vec<usize>,
	pub pd: Vec<usize>,
}

/// Returned by registry lookup when no metric is registered under the
/// requested name. Lookup is case-sensitive.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown metric {name:?}")]
pub struct UnknownMetricError {
	pub name: String,
}
