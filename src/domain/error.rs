use thiserror::Error;

/// Errors raised by mutating calls. Resolver math and the per-step action never fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SnapError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigIssue),
}

/// What exactly was wrong with a rejected configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigIssue {
    #[error("corner inset must be a non-negative finite number, got {0}")]
    NegativeInset(f32),
    #[error("bounds must have positive finite width and height, got {width}x{height}")]
    DegenerateBounds { width: f32, height: f32 },
    #[error("corner inset {inset} does not fit inside {width}x{height} bounds")]
    InsetTooLarge { inset: f32, width: f32, height: f32 },
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("{field} must be within 0..=1, got {value}")]
    OutOfUnitRange { field: &'static str, value: f32 },
    #[error("{field} must be non-negative and finite, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("malformed config json: {0}")]
    Json(String),
}

pub type SnapResult<T> = Result<T, SnapError>;
