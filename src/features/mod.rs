// Feature maps for the individual kernels. All of them go through random_features,
// which owns the projection, phase offset, cosine and normalization steps.

mod random_features;
pub use random_features::random_features;

mod cauchy_features;
pub use cauchy_features::cauchy_features;

mod gaussian_features;
pub use gaussian_features::gaussian_features;

mod student_features;
pub use student_features::student_features;
