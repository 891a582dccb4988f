//! Random feature maps for shift-invariant kernels.
//!
//! Each generator draws a random weight matrix and a row of phase offsets, then
//! maps train and test samples to `sqrt(2 / N) * cos(x . Omega + offset)`.
//! Inner products of the resulting rows approximate the Laplace, Gaussian or
//! Matern kernel, so a linear model on the features stands in for a kernel
//! method. Randomness always comes from a caller-supplied [`rand::Rng`].

pub mod error;
pub mod features;
pub mod sampling;

pub use error::{FeatureError, Result};
pub use features::{cauchy_features, gaussian_features, random_features, student_features};
pub use sampling::{student_sample, WeightSampler};

/// Feature matrices for the train and test samples, in that order.
pub type FeaturePair = (ndarray::Array2<f64>, ndarray::Array2<f64>);
