use thiserror::Error;

/// Errors raised while building vectors or axes from runtime input.
///
/// Arithmetic never fails; these only come out of name parsing and slice
/// construction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AxisError {
    #[error("unknown axis `{name}`, expected one of: {expected}")]
    UnknownAxis { name: String, expected: String },

    #[error("expected {expected} components, got {got}")]
    LengthMismatch { expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, AxisError>;
