use crate::error::Result;
use crate::features::random_features;
use crate::sampling::StudentWeights;
use crate::FeaturePair;
use ndarray::ArrayView2;
use rand::Rng;

/// Random features approximating a Matern-family kernel.
///
/// Weights come from [`student_sample`](crate::sampling::student_sample) with
/// `nu` degrees of freedom and `sigma = scale`. `scale` is the kernel's
/// characteristic scale, the same role `gamma` has for the other two maps,
/// but here it is the standard deviation of the normal part of the Student-t
/// draw rather than a Cauchy or Gaussian scale.
///
/// With `nu` close to zero the weights can be infinite (see `student_sample`),
/// which turns the affected feature columns into NaN. This is not clamped.
pub fn student_features(
    nu: f64,
    scale: f64,
    n_features: usize,
    x_train: ArrayView2<f64>,
    x_test: ArrayView2<f64>,
    rng: &mut impl Rng,
) -> Result<FeaturePair> {
    random_features(
        &StudentWeights { nu, scale },
        n_features,
        x_train,
        x_test,
        rng,
    )
}
