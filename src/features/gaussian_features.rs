use crate::error::Result;
use crate::features::random_features;
use crate::sampling::GaussianWeights;
use crate::FeaturePair;
use ndarray::ArrayView2;
use rand::Rng;

/// Random features approximating the Gaussian kernel exp(-gamma * ||x - y||_2^2).
///
/// Weights are standard normal draws scaled by sqrt(2 * gamma); everything
/// else matches [`cauchy_features`](crate::features::cauchy_features).
pub fn gaussian_features(
    gamma: f64,
    n_features: usize,
    x_train: ArrayView2<f64>,
    x_test: ArrayView2<f64>,
    rng: &mut impl Rng,
) -> Result<FeaturePair> {
    random_features(&GaussianWeights { gamma }, n_features, x_train, x_test, rng)
}
