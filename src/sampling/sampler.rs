use crate::error::Result;
use ndarray::Array2;
use rand::Rng;

/// Strategy for drawing the random weight matrix of a feature map.
///
/// The projection, phase offset, cosine and normalization steps are the same
/// for every shift-invariant kernel; only the distribution of the weights
/// differs. Implementors describe that distribution and nothing else.
pub trait WeightSampler {
    /// Short kernel name, used in log output.
    fn kernel(&self) -> &'static str;

    /// Check the sampler's parameters. Called before any randomness is drawn.
    fn validate(&self) -> Result<()>;

    /// Draw a `(rows, cols)` weight matrix, filled in row-major order.
    fn sample(&self, shape: (usize, usize), rng: &mut impl Rng) -> Result<Array2<f64>>;
}
