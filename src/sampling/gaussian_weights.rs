use crate::error::{require_positive, Result};
use crate::sampling::WeightSampler;
use ndarray::Array2;
use rand::Rng;
use rand_distr::StandardNormal;

/// Standard normal weights scaled by sqrt(2 * gamma).
/// The resulting feature map approximates the Gaussian kernel exp(-gamma * ||x - y||_2^2).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianWeights {
    pub gamma: f64,
}

impl WeightSampler for GaussianWeights {
    fn kernel(&self) -> &'static str {
        "gaussian"
    }

    fn validate(&self) -> Result<()> {
        require_positive("gamma", self.gamma)
    }

    fn sample(&self, shape: (usize, usize), rng: &mut impl Rng) -> Result<Array2<f64>> {
        let std_dev = (2.0 * self.gamma).sqrt();
        Ok(Array2::from_shape_simple_fn(shape, || {
            std_dev * rng.sample::<f64, _>(StandardNormal)
        }))
    }
}
