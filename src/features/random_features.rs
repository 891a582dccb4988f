use crate::error::{require_features, FeatureError, Result};
use crate::sampling::{phase_offsets, WeightSampler};
use crate::FeaturePair;
use ndarray::{Array1, Array2, ArrayView2};
use rand::Rng;

/// Draw one random feature map and apply it to both sample matrices.
///
/// Draws `Omega` (`d x n_features`) from `sampler`, then `n_features` phase
/// offsets uniform over [0, 2pi). Each input is mapped to
/// `sqrt(2 / n_features) * cos(x . Omega + offset)`, so every output entry lies
/// in `[-sqrt(2 / n_features), sqrt(2 / n_features)]`, and for a suitable
/// sampler `A_train . A_test^T` approximates the kernel matrix.
///
/// `x_train` and `x_test` always see the same `Omega` and offsets. Every
/// parameter is validated before anything is drawn, so a failed call leaves
/// `rng` untouched.
pub fn random_features<S: WeightSampler>(
    sampler: &S,
    n_features: usize,
    x_train: ArrayView2<f64>,
    x_test: ArrayView2<f64>,
    rng: &mut impl Rng,
) -> Result<FeaturePair> {
    require_features(n_features)?;
    sampler.validate()?;
    let (train_rows, dimensionality) = x_train.dim();
    let (test_rows, test_dimensionality) = x_test.dim();
    if dimensionality != test_dimensionality {
        return Err(FeatureError::DimensionMismatch {
            train: dimensionality,
            test: test_dimensionality,
        });
    }

    tracing::debug!(
        kernel = sampler.kernel(),
        n_features,
        dimensionality,
        train_rows,
        test_rows,
        "Drawing random feature map"
    );

    // All randomness is drawn here, on the caller's thread, weights first
    let omega = sampler.sample((dimensionality, n_features), rng)?;
    let offsets = phase_offsets(n_features, rng);
    let normalization = (2.0 / n_features as f64).sqrt();

    Ok(rayon::join(
        || project_cosine(x_train, &omega, &offsets, normalization),
        || project_cosine(x_test, &omega, &offsets, normalization),
    ))
}

// cos(x . Omega + offset) * normalization, with the offset row broadcast over every sample
fn project_cosine(
    x: ArrayView2<f64>,
    omega: &Array2<f64>,
    offsets: &Array1<f64>,
    normalization: f64,
) -> Array2<f64> {
    let mut projection = x.dot(omega) + offsets;
    projection.par_mapv_inplace(|v| v.cos() * normalization);
    projection
}
