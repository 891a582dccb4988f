use crate::error::Result;
use crate::features::random_features;
use crate::sampling::CauchyWeights;
use crate::FeaturePair;
use ndarray::ArrayView2;
use rand::Rng;

/// Random features approximating the Laplace kernel exp(-gamma * ||x - y||_1).
///
/// Weights are standard Cauchy draws scaled by `gamma`. Returns the
/// `(m, n_features)` and `(m', n_features)` feature matrices for `x_train` and
/// `x_test`, both built from the same weights and offsets.
pub fn cauchy_features(
    gamma: f64,
    n_features: usize,
    x_train: ArrayView2<f64>,
    x_test: ArrayView2<f64>,
    rng: &mut impl Rng,
) -> Result<FeaturePair> {
    random_features(&CauchyWeights { gamma }, n_features, x_train, x_test, rng)
}
