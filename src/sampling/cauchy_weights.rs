use crate::error::{require_positive, Result};
use crate::sampling::WeightSampler;
use ndarray::Array2;
use rand::Rng;
use rand_distr::Cauchy;

/// Standard Cauchy weights scaled by `gamma`.
/// The resulting feature map approximates the Laplace kernel exp(-gamma * ||x - y||_1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CauchyWeights {
    pub gamma: f64,
}

impl WeightSampler for CauchyWeights {
    fn kernel(&self) -> &'static str {
        "laplace"
    }

    fn validate(&self) -> Result<()> {
        require_positive("gamma", self.gamma)
    }

    fn sample(&self, shape: (usize, usize), rng: &mut impl Rng) -> Result<Array2<f64>> {
        let cauchy = Cauchy::<f64>::new(0.0, 1.0)?;
        Ok(Array2::from_shape_simple_fn(shape, || {
            self.gamma * rng.sample(&cauchy)
        }))
    }
}
