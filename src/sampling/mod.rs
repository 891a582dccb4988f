// Random weight matrices (Omega) for each kernel family, plus the phase offsets
// shared by every feature map

mod sampler;
pub use sampler::WeightSampler;

mod cauchy_weights;
pub use cauchy_weights::CauchyWeights;

mod gaussian_weights;
pub use gaussian_weights::GaussianWeights;

mod student_sample;
pub use student_sample::{student_sample, StudentWeights};

mod phase_offsets;
pub use phase_offsets::phase_offsets;
