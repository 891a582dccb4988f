use ndarray::Array1;
use rand::{distributions::Uniform, Rng};
use std::f64::consts::PI;

// One phase per feature, uniform over [0, 2pi).
// Broadcast over every row of both projections, so train and test see the same phases.
pub fn phase_offsets(n_features: usize, rng: &mut impl Rng) -> Array1<f64> {
    let uniform = Uniform::new(0.0, 2.0 * PI);
    Array1::from_shape_simple_fn(n_features, || rng.sample(&uniform))
}
