use thiserror::Error;

// Everything that can go wrong when drawing a feature map.
// All of these are raised before any randomness is consumed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeatureError {
    #[error("Invalid parameter '{parameter}' = {value}: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },
    #[error("Dimension mismatch: x_train has {train} features, x_test has {test}")]
    DimensionMismatch { train: usize, test: usize },
    // Only reachable if a sampler skips its own validation
    #[error("Cauchy distribution: {0}")]
    Cauchy(#[from] rand_distr::CauchyError),
    #[error("Chi-square distribution: {0}")]
    ChiSquared(#[from] rand_distr::ChiSquaredError),
}

pub type Result<T> = std::result::Result<T, FeatureError>;

// Shared checks for the scalar parameters of the samplers
pub(crate) fn require_positive(parameter: &'static str, value: f64) -> Result<()> {
    // Written so that NaN also fails
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(FeatureError::InvalidParameter {
            parameter,
            value,
            reason: "must be finite and strictly positive",
        })
    }
}

pub(crate) fn require_non_negative(parameter: &'static str, value: f64) -> Result<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(FeatureError::InvalidParameter {
            parameter,
            value,
            reason: "must be finite and non-negative",
        })
    }
}

pub(crate) fn require_features(n_features: usize) -> Result<()> {
    if n_features == 0 {
        return Err(FeatureError::InvalidParameter {
            parameter: "n_features",
            value: 0.0,
            reason: "at least one random feature is required",
        });
    }
    Ok(())
}
