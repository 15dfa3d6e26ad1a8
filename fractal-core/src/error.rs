use thiserror::Error;

/// Reasons a [`crate::config::FractalParameters`] record is refused.
///
/// Any finite value is accepted, including zero or negative decay factors;
/// those only produce degenerate trees.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("parameter `{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },
}
