/// Errors raised outside the matrix arithmetic itself, which is total.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// A flat float buffer had the wrong length for the target type.
    #[error("expected {expected} elements, found {found}")]
    ElementCount { expected: usize, found: usize },

    /// The log backend could not be installed.
    #[error("Logger error: {0}")]
    Logger(String),
}
