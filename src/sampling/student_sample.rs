use crate::error::{require_non_negative, require_positive, Result};
use crate::sampling::WeightSampler;
use ndarray::{Array1, Array2};
use rand::Rng;
use rand_distr::{ChiSquared, StandardNormal};

/// Draw a `(rows, cols)` matrix of scaled Student-t variates.
///
/// Each entry is `sigma * z * sqrt(nu / c)` with `z` standard normal and `c`
/// chi-square with `nu` degrees of freedom. There is one chi-square draw per
/// column, shared by every row of that column, so the entries of a column are
/// correlated through their common scale. The normal matrix is drawn first,
/// then the `cols` chi-square values.
///
/// Numerical instability: for very small `nu` the chi-square draws underflow
/// towards zero, and a draw of exactly zero makes that column's scale factor
/// infinite. The affected entries come out as `±inf`, or NaN where the normal
/// draw is zero (always the case when `sigma == 0`). They are left that way and
/// a warning is logged; clamping would change the distribution.
pub fn student_sample(
    nu: f64,
    sigma: f64,
    shape: (usize, usize),
    rng: &mut impl Rng,
) -> Result<Array2<f64>> {
    require_positive("nu", nu)?;
    require_non_negative("sigma", sigma)?;
    let chi_squared = ChiSquared::<f64>::new(nu)?;

    let gaussian = Array2::from_shape_simple_fn(shape, || {
        sigma * rng.sample::<f64, _>(StandardNormal)
    });
    let chi_draws = Array1::from_shape_simple_fn(shape.1, || rng.sample(&chi_squared));

    let zero_draws = chi_draws.iter().filter(|&&c| c == 0.0).count();
    if zero_draws > 0 {
        tracing::warn!(
            nu,
            zero_draws,
            "Chi-square draws of zero give infinite Student-t scale factors"
        );
    }

    // Broadcast the per-column scale across all rows
    let column_scale = chi_draws.mapv(|c| (nu / c).sqrt());
    Ok(gaussian * &column_scale)
}

/// Student-t weights with `nu` degrees of freedom and spread `scale`.
///
/// `scale` plays the same "characteristic scale of the kernel" role that
/// `gamma` plays for the Cauchy and Gaussian samplers, but statistically it is
/// the standard deviation of the normal part of the Student-t draw, passed
/// straight through to [`student_sample`] as `sigma`. The feature map
/// approximates a Matern-family kernel whose smoothness is set by `nu`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudentWeights {
    pub nu: f64,
    pub scale: f64,
}

impl WeightSampler for StudentWeights {
    fn kernel(&self) -> &'static str {
        "matern"
    }

    fn validate(&self) -> Result<()> {
        require_positive("nu", self.nu)?;
        require_positive("scale", self.scale)
    }

    fn sample(&self, shape: (usize, usize), rng: &mut impl Rng) -> Result<Array2<f64>> {
        student_sample(self.nu, self.scale, shape, rng)
    }
}
